//! Process exit codes for the `step-script` binary.

/// Every source ran to the end.
pub const OK: i32 = 0;
/// A source could not be opened or read, or a step failed to launch or exited non-zero.
pub const FAILED: i32 = 1;
