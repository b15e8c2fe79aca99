
//////
//
// Imports
//

// Standard library
use std::path::Path;

// Local imports
use crate::path::*;



//////
//
// Tests
//

#[test]
fn test_normalize ()
{
	assert_eq!(normalize("/a/b/../c/./d"), Path::new("/a/c/d"));
	assert_eq!(normalize("a/./b"), Path::new("a/b"));
}

#[test]
fn test_normalizeToAnchor ()
{
	// Relative paths get resolved against the anchor
	assert_eq!(normalizeToAnchor("/base", "sub/../file.metal"), Path::new("/base/file.metal"));

	// Absolute paths pass through verbatim
	assert_eq!(normalizeToAnchor("/base", "/other/file.metal"), Path::new("/other/file.metal"));
}
