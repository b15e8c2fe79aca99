
//////
//
// Module definitions
//



/// Tests for the `pak` module.
mod pak;
