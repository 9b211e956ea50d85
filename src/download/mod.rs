//! Download module containing download-related types.
//!
//! - [`task`] - A file paired with its destination path
//! - [`summary`] - Per-transfer outcome reporting

pub mod summary;
pub mod task;

pub use summary::{Status, Summary};
pub use task::DownloadTask;
