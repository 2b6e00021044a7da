//! Stable exit codes for the `patterns` CLI.

/// Demonstration ran to completion.
pub const OK: i32 = 0;
/// The report could not be produced or written to stdout.
pub const INVALID: i32 = 1;
