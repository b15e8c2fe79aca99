
//////
//
// Module definitions
//

/// Tests for the `binwrite` module.
mod binwrite;

/// Tests for the `path` module.
mod path;
