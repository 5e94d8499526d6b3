//! Filesystem access: reading the Sipfile and listing package files.

pub mod package;
pub mod sipfile_store;
