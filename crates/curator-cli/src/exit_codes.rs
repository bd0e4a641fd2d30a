//! Exit codes are part of the CLI contract.

pub const SUCCESS: i32 = 0;
pub const VALIDATION_FAILED: i32 = 1; // Content rejected before any oracle call
pub const INTERNAL_ERROR: i32 = 2; // Config, state file or I/O failure
