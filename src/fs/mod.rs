//! Filesystem utilities for propgen.
//!
//! Outputs are only written once the whole document has been assembled, and
//! then atomically.

pub mod atomic;

pub use atomic::atomic_write_file;
