//! Test declarations of a Sip problem package.
//!
//! A package's `Sipfile` names its tests with compact range expressions
//! (`1a-3c`, `4-8c`, ...). Tests are either static, with input files already
//! in the package, or generated by a program under `utils/` or a shell
//! command. This crate expands those declarations into concrete test names:
//!
//! - **[`core`]**: Pure logic (range expansion, generator matching, section
//!   loading). No I/O, fully testable in isolation.
//! - **[`io`]**: Reading the Sipfile and snapshotting the package directory.
//!
//! [`sipfile::Sipfile`] ties the two together.

pub mod core;
pub mod error;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod sipfile;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
