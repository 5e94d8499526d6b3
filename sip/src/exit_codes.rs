//! Stable exit codes for `sip` commands.

/// Command succeeded.
pub const OK: i32 = 0;
/// The Sipfile or the package could not be loaded.
pub const INVALID: i32 = 1;
/// `sip check` found input files not declared in the Sipfile.
pub const UNSPECIFIED_TESTS: i32 = 2;
