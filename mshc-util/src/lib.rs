
//////
//
// Language config
//

// Eff this convention.
#![allow(non_snake_case)]

// We are a utilities library ffs...
#![allow(dead_code)]



//////
//
// Module definitions
//

/// Submodule providing an alignment-aware little-endian binary writer.
pub mod binwrite;

/// Submodule providing operations on the file system.
pub mod fs;

/// Submodule providing operations on file system paths.
pub mod path;

/// The unit tests of the crate.
#[cfg(test)]
mod tests;



//////
//
// Imports
//

// Normalize-path library
pub use normalize_path; // re-export
