
//////
//
// Imports
//

// Standard library
use std::{fs, path::Path};

// Anyhow library
use anyhow::{Context, Result};



//////
//
// Functions
//

/// Read the entire contents of the given file into a byte vector.
pub fn readAllBytes<PathRef: AsRef<Path>> (path: PathRef) -> Result<Vec<u8>> {
	fs::read(path.as_ref()).context(format!("Failed to read file {}", path.as_ref().display()))
}

/// Delete the given file.
pub fn remove<PathRef: AsRef<Path>> (path: PathRef) -> Result<()> {
	fs::remove_file(path.as_ref()).context(format!("Failed to delete file {}", path.as_ref().display()))
}

/// Move the given file to a new location. On the same file system, this maps to an atomic rename.
pub fn rename<PathRef1: AsRef<Path>, PathRef2: AsRef<Path>> (currPath: PathRef1, newPath: PathRef2) -> Result<()> {
	fs::rename(currPath.as_ref(), newPath.as_ref()).context(format!(
		"Failed to rename file {} to {}", currPath.as_ref().display(), newPath.as_ref().display()
	))
}
