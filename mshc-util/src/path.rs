
//////
//
// Imports
//

// Standard library
use std::path::{Path, PathBuf};

// Normalize-path library
use normalize_path::NormalizePath;



//////
//
// Functions
//

/// Normalize the given path, collapsing any `..` and `.` components it contains.
pub fn normalize<PathRef: AsRef<Path>> (path: PathRef) -> PathBuf {
	path.as_ref().normalize()
}

/// Turn *path* into a normalized absolute path by resolving it against *anchor* **iff** it is relative. Absolute paths
/// are returned verbatim.
///
/// # Arguments
///
/// * `anchor` – The directory to resolve relative paths against.
/// * `path` – The path to absolutize.
pub fn normalizeToAnchor<PathRef1: AsRef<Path>, PathRef2: AsRef<Path>> (anchor: PathRef1, path: PathRef2) -> PathBuf
{
	if path.as_ref().is_relative() {
		anchor.as_ref().join(path).normalize()
	}
	else {
		path.as_ref().into()
	}
}
