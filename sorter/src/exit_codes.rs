//! Stable exit codes for sorter CLI commands.

/// Command succeeded.
pub const OK: i32 = 0;
/// Command failed due to invalid config, records, column, or other errors.
pub const INVALID: i32 = 1;
