//! Exit code constants for the propgen CLI.
//!
//! - 0: Success
//! - 1: Configuration error (missing/malformed fields, unknown weekday)
//! - 2: Render failure (a fragment could not be rendered)
//! - 3: I/O failure (reading config/fragments, writing outputs)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// Configuration error: bad or missing fields in the YAML document.
pub const CONFIG_ERROR: i32 = 1;

/// Render failure: undefined template reference or invalid template.
pub const RENDER_FAILURE: i32 = 2;

/// I/O failure: a file could not be read or written.
pub const IO_FAILURE: i32 = 3;
