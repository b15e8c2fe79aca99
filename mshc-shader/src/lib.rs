
//////
//
// Language config
//

// Eff this convention.
#![allow(non_snake_case)]



//////
//
// Module definitions
//

/// Submodule implementing the conditional-compile option scanner.
pub mod options;

/// Submodule implementing permutation enumeration and ordering.
pub mod permute;

/// Submodule implementing the external *Metal* toolchain driver.
pub mod toolchain;

/// Submodule implementing the shader container format.
pub mod pak;

/// Submodule implementing the toolchain configuration.
mod config;
pub use config::ToolchainConfig; // re-export

/// Submodule implementing the compilation orchestrator.
mod compile;
pub use compile::compileShader; // re-export

/// The unit tests of the crate.
#[cfg(test)]
mod tests;



//////
//
// Imports
//

// Local imports
pub use mshc_util as util; // re-export



//////
//
// Constants
//

/// The version of the container format written by [`pak::Writer`] (and accepted by [`pak::Package`]).
pub const SHADER_FORMAT_VERSION: u32 = 1;
