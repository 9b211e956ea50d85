//! Shared utility functions.
//!
//! - [`content_length`] - Expected transfer size from response headers
//! - [`path`] - File name sanitization and destination paths
//! - [`timestamps`] - Restoring remote creation/modification times

pub mod content_length;
pub mod path;
pub mod timestamps;

pub use content_length::{expected_total, parse_content_length};
pub use path::{check_file_name, destination_for, sanitize_file_name};
pub use timestamps::apply_timestamps;
