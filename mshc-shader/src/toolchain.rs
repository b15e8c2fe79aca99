
//////
//
// Imports
//

// Standard library
use std::{
	ffi::{OsStr, OsString}, fmt::{Display, Formatter}, io,
	path::Path, process::Command
};

// Anyhow library
use anyhow::Context;

// Local imports
use crate::util;
use crate::config::ToolchainConfig;



//////
//
// Constants
//

/// Scratch file name of the intermediate object representation emitted by the compile stage.
pub const AIR_FILE: &str = "out.air";

/// Scratch file name of the serialized diagnostics emitted by the compile stage.
pub const DIAG_FILE: &str = "diag.dia";

/// Scratch file name of the library archive emitted by the archive stage.
pub const METAL_AR_FILE: &str = "out.metal-ar";

/// Scratch file name of the loadable library blob emitted by the link stage.
pub const METAL_LIBRARY_FILE: &str = "library.metallib";



//////
//
// Errors
//

/// An error resulting from one of the external toolchain stages reporting failure for a specific permutation. Carries
/// the stage's diagnostic output verbatim.
#[derive(Debug)]
pub struct CompileError {
	/// The executable name of the stage that failed (`metal`, `metal-ar` or `metallib`).
	pub stage: &'static str,

	/// The stage's standard-error output, verbatim.
	pub diagnostics: String
}
impl Display for CompileError {
	fn fmt (&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
		write!(formatter, "CompileError[{}]\n{}", self.stage, self.diagnostics)
	}
}
impl std::error::Error for CompileError {}



//////
//
// Classes
//

/// The driver for the external three-stage *Metal* toolchain pipeline: `metal` compiles shader source plus macro
/// definitions into an intermediate object representation, `metal-ar` archives it, and `metallib` links the archive
/// into the final loadable library blob. Every stage is a synchronous child-process invocation; each one deletes its
/// own input intermediate after succeeding, so a nominal run leaves the scratch directory empty again.
pub struct Toolchain {
	config: ToolchainConfig
}
impl Toolchain
{
	/// Create a driver for the toolchain described by the given configuration.
	pub fn new (config: ToolchainConfig) -> Self {
		Self { config }
	}

	/// Compile the given shader source under the given macro definitions into a loadable library blob.
	///
	/// # Arguments
	///
	/// * `inputPath` – The shader source file.
	/// * `macros` – The macro names to define, passed to the compile stage as repeated `-D NAME` pairs.
	/// * `scratchDir` – The directory the stages place their intermediate files in.
	///
	/// # Returns
	///
	/// The bytes of the compiled library blob. Fails with a [`CompileError`] if any stage reports failure, in which
	/// case the failing stage's output files are left in the scratch directory for whole-directory cleanup by the
	/// caller.
	///
	/// # Panics
	///
	/// If a stage executable does not exist at its configured location. This is a fatal configuration error, not a
	/// recoverable compile failure, and aborts the run.
	pub fn compile (&self, inputPath: &Path, macros: &[String], scratchDir: &Path) -> anyhow::Result<Vec<u8>>
	{
		let airFile = scratchDir.join(AIR_FILE);
		let diagFile = scratchDir.join(DIAG_FILE);
		let metalArFile = scratchDir.join(METAL_AR_FILE);
		let metalLibFile = scratchDir.join(METAL_LIBRARY_FILE);

		// Stage 1 - compile
		self.runMetal(inputPath, &airFile, &diagFile, macros)?;
		util::fs::remove(&diagFile)?;

		// Stage 2 - archive
		self.runMetalAr(&airFile, &metalArFile)?;
		util::fs::remove(&airFile)?;

		// Stage 3 - link
		self.runMetallib(&metalArFile, &metalLibFile)?;
		util::fs::remove(&metalArFile)?;

		// Collect the blob, leaving the scratch directory empty again
		let bytes = util::fs::readAllBytes(&metalLibFile)?;
		util::fs::remove(&metalLibFile)?;

		// Done!
		Ok(bytes)
	}

	// Stage 1: shader source + macros -> intermediate object representation.
	fn runMetal (&self, inputPath: &Path, outputPath: &Path, diagFilePath: &Path, macros: &[String])
	-> anyhow::Result<()>
	{
		let minOSVersionFlag = format!("-mmacosx-version-min={}", self.config.minOSVersion);
		let mut args: Vec<OsString> = [
			"-emit-llvm", "-c", "-ffast-math", minOSVersionFlag.as_str(), "-std=osx-metal1.1"
		].map(OsString::from).into();
		args.push("-isysroot".into());
		args.push(self.config.sdkPath.as_os_str().to_owned());
		args.push("-serialize-diagnostics".into());
		args.push(diagFilePath.into());
		args.push("-o".into());
		args.push(outputPath.into());
		for name in macros {
			args.push("-D".into());
			args.push(name.into());
		}
		args.push(inputPath.into());

		runTool(&self.config.metal(), "metal", &args)
	}

	// Stage 2: intermediate object representation -> library archive.
	fn runMetalAr (&self, inputPath: &Path, outputPath: &Path) -> anyhow::Result<()> {
		runTool(&self.config.metalAr(), "metal-ar", &[
			OsString::from("r"), outputPath.into(), inputPath.into()
		])
	}

	// Stage 3: library archive -> loadable library blob.
	fn runMetallib (&self, inputPath: &Path, outputPath: &Path) -> anyhow::Result<()> {
		runTool(&self.config.metallib(), "metallib", &[
			OsString::from("-o"), outputPath.into(), inputPath.into()
		])
	}
}



//////
//
// Functions
//

/// Invoke a single toolchain stage, blocking until it exits and both of its output streams are drained.
fn runTool (tool: &Path, stage: &'static str, args: &[impl AsRef<OsStr>]) -> anyhow::Result<()>
{
	tracing::debug!("Running '{stage}' ({})", tool.display());
	let output = match Command::new(tool).args(args).output()
	{
		Ok(output) => output,
		Err(err) if err.kind() == io::ErrorKind::NotFound => panic!(
			"Could not run '{stage}' command-line tool (expected at {})", tool.display()
		),
		Err(err) => return Err(err).context(format!("Failed to invoke '{stage}' command-line tool"))
	};

	// Success is signaled by exit status alone, stderr is the human-readable diagnostic either way
	if output.status.success() {
		Ok(())
	}
	else {
		Err(CompileError { stage, diagnostics: String::from_utf8_lossy(&output.stderr).into_owned() }.into())
	}
}
