
//////
//
// Imports
//

// Standard library
use std::{fs, path::Path};

// Anyhow library
use anyhow::{Context, Result};

// Tempfile library
use tempfile;

// Local imports
use crate::util;
use crate::{options::OptionSet, permute, pak, toolchain::Toolchain, config::ToolchainConfig};



//////
//
// Constants
//

/// Scratch file name the container is assembled under before being renamed to its final destination.
pub const CONTAINER_TEMP_FILE: &str = "result.shd";



//////
//
// Functions
//

/// Compile every option permutation of the given shader source and pack the results into a container at the given
/// output path.
///
/// The run is strictly sequential: scan the source for options, enumerate all `2^N` permutations, then compile and
/// append one permutation at a time. The container is assembled under a temporary path inside a per-run scratch
/// directory and only moved to `outputPath` once every permutation has been compiled and written; the first failing
/// permutation aborts the run without touching the destination. The scratch directory is removed on every exit path.
///
/// # Arguments
///
/// * `inputPath` – The shader source file.
/// * `outputPath` – Where to publish the finished container.
/// * `config` – The toolchain configuration for this run.
pub fn compileShader (inputPath: &Path, outputPath: &Path, config: ToolchainConfig) -> Result<()>
{
	// Discover options and enumerate their permutations
	let source = fs::read_to_string(inputPath).context(
		format!("Failed to read shader source {}", inputPath.display())
	)?;
	let options = OptionSet::scan(&source)?;
	let permutations = permute::enumerate(&options);
	tracing::info!(
		"Compiling {}: {} option(s), {} permutation(s)", inputPath.display(), options.len(), permutations.len()
	);

	// Build the container inside a fresh scratch directory
	let scratchDir = tempfile::tempdir().context("Failed to create scratch directory")?;
	let outcome = buildContainer(inputPath, outputPath, &config, &options, &permutations, scratchDir.path());

	// Deterministic scratch cleanup on every exit path - this also disposes of the unpublished temporary container
	// in case of failure
	let cleanup = scratchDir.close().context("Failed to remove scratch directory");
	outcome?;
	cleanup
}

// Compiles all permutations into a temporary container file in the scratch directory, publishing it to `outputPath`
// only after the last one succeeded.
fn buildContainer (
	inputPath: &Path, outputPath: &Path, config: &ToolchainConfig, options: &OptionSet,
	permutations: &[permute::Permutation], scratchDir: &Path
) -> Result<()>
{
	let containerPath = scratchDir.join(CONTAINER_TEMP_FILE);
	let containerFile = fs::File::create(&containerPath).context(
		format!("Failed to create temporary container {}", containerPath.display())
	)?;
	let mut container = pak::Writer::new(containerFile, permutations.len() as u32)?;

	let toolchain = Toolchain::new(config.clone());
	for permutation in permutations
	{
		let macros = permute::macroList(options, permutation.enumerationMask);
		tracing::info!("Compiling permutation {:#06x} [{}]", permutation.declaredMask, macros.join(" "));
		let blob = toolchain.compile(inputPath, &macros, scratchDir)?;
		container.appendPermutation(permutation.declaredMask, &blob)?;
	}
	drop(container.finish()?);

	// Atomically publish the finished container
	util::fs::rename(&containerPath, outputPath)
}
