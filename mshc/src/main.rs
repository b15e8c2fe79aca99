
//////
//
// Language config
//

// Eff this convention.
#![allow(non_snake_case)]



//////
//
// Imports
//

// Standard library
use std::{env, path::Path, process::ExitCode};

// Anyhow library
use anyhow::Result;

// Tracing library
use tracing::Level;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

// MSHC library
use mshc_shader::{compileShader, toolchain::CompileError, util, ToolchainConfig};



//////
//
// Functions
//

fn main () -> ExitCode
{
	// Logging - defaults to warnings-and-up so nominal runs stay silent, opt in via RUST_LOG
	let envFilter = EnvFilter::builder()
		.with_default_directive(Level::WARN.into())
		.from_env_lossy();
	tracing_subscriber::registry()
		.with(envFilter)
		.with(tracing_subscriber::fmt::Layer::default().with_writer(std::io::stderr))
		.init();

	// Command line
	let args: Vec<String> = env::args().skip(1).collect();
	if args.len() < 2 {
		eprintln!("Usage: mshc input_path output_path");
		return ExitCode::FAILURE;
	}

	// Dispatch
	match run(Path::new(&args[0]), Path::new(&args[1]))
	{
		Ok(()) => ExitCode::SUCCESS,
		Err(err) => {
			// A failed toolchain stage reports its diagnostics verbatim, everything else gets the full error chain
			if let Some(compileError) = err.downcast_ref::<CompileError>() {
				eprint!("{}", compileError.diagnostics);
			}
			else {
				eprintln!("{err:#}");
			}
			ExitCode::FAILURE
		}
	}
}

fn run (inputPath: &Path, outputPath: &Path) -> Result<()>
{
	// Resolve both paths against the invocation directory
	let cwd = env::current_dir()?;
	let inputPath = util::path::normalizeToAnchor(&cwd, inputPath);
	let outputPath = util::path::normalizeToAnchor(&cwd, outputPath);

	// Compile under the configuration injected for this run
	let config = ToolchainConfig::fromEnvironment()?;
	compileShader(&inputPath, &outputPath, config)
}
