//! Deterministic, pure logic for resolving Sipfile test declarations.
//!
//! Core modules are free of filesystem access. Package files and warnings
//! reach them through the [`generator::PackageFiles`] and
//! [`warnings::WarningSink`] traits.

pub mod base26;
pub mod config;
pub mod generator;
pub mod range;
pub mod sections;
pub mod test_id;
pub mod time_limit;
pub mod warnings;
