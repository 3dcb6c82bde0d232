//! Exit code constants for the CLI application.
//!
//! Every command maps its outcome onto one of these codes.

/// Success exit code (standard Unix convention).
pub const SUCCESS: i32 = 0;

/// Any failure: invalid hand, bad arguments, configuration or I/O error.
pub const ERROR: i32 = 2;
