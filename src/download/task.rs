//! A single file transfer.
//!
//! # Examples
//!
//! ```rust
//! use canvas_dl::api::FileEntry;
//! use canvas_dl::download::DownloadTask;
//! use std::path::Path;
//!
//! let file = FileEntry {
//!     id: 100,
//!     display_name: "L1.pdf".into(),
//!     url: "https://example.com/files/100/download".into(),
//!     created_at: None,
//!     updated_at: None,
//!     folder_id: Some(10),
//!     folder_path: "Lectures".into(),
//! };
//!
//! let task = DownloadTask::plan(file, Path::new("Downloads/CS101"), false);
//! assert_eq!(task.destination, Path::new("Downloads/CS101/Lectures/L1.pdf"));
//! ```

use crate::api::FileEntry;
use crate::utils::destination_for;

use std::path::{Path, PathBuf};

/// Represents a file to be downloaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadTask {
    /// Remote file.
    pub file: FileEntry,
    /// Where the file is written.
    pub destination: PathBuf,
}

impl DownloadTask {
    /// Creates a new [`DownloadTask`] with an explicit destination.
    pub fn new(file: FileEntry, destination: impl Into<PathBuf>) -> Self {
        Self {
            file,
            destination: destination.into(),
        }
    }

    /// Place `file` below `course_dir`, mirroring its folder path.
    pub fn plan(file: FileEntry, course_dir: &Path, sanitize_name: bool) -> Self {
        let destination = destination_for(course_dir, &file, sanitize_name);
        Self { file, destination }
    }

    /// Label shown next to the progress bar.
    pub fn label(&self) -> &str {
        &self.file.display_name
    }
}
