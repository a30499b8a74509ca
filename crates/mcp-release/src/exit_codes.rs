//! Exit codes for the CLI

/// Any reported error
pub const ERROR: i32 = 1;
