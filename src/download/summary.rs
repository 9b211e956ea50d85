//! Download summary functionality.
//!
//! Every transfer ends with a [`Summary`]. Failures never escape a download
//! task as errors; they are recorded in the summary's [`Status`] and the
//! sibling downloads carry on.
//!
//! # Examples
//!
//! ```rust
//! use canvas_dl::api::FileEntry;
//! use canvas_dl::download::{DownloadTask, Status, Summary};
//! use reqwest::StatusCode;
//!
//! # let file = FileEntry {
//! #     id: 1, display_name: "a.pdf".into(), url: String::new(),
//! #     created_at: None, updated_at: None, folder_id: None, folder_path: String::new(),
//! # };
//! let summary = Summary::new(DownloadTask::new(file, "out/a.pdf"))
//!     .with_status(Status::RemoteError(StatusCode::NOT_FOUND));
//!
//! assert!(!summary.is_success());
//! ```

use super::task::DownloadTask;
use crate::error::Error;

use reqwest::StatusCode;

/// Download status enumeration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    /// Download not yet started
    NotStarted,
    /// Download completed successfully
    Success,
    /// The server answered the transfer request with a non-success status
    RemoteError(StatusCode),
    /// Network or disk failure while transferring
    LocalError(String),
}

impl From<&Error> for Status {
    fn from(error: &Error) -> Self {
        match error {
            Error::Remote { status, .. } => Status::RemoteError(*status),
            other => Status::LocalError(other.to_string()),
        }
    }
}

/// Represents a [`DownloadTask`] summary.
#[derive(Debug, Clone)]
pub struct Summary {
    /// Downloaded item.
    task: DownloadTask,
    /// Bytes written to disk.
    size: u64,
    /// Status.
    status: Status,
}

impl Summary {
    /// Create a new [`DownloadTask`] [`Summary`].
    pub fn new(task: DownloadTask) -> Self {
        Self {
            task,
            size: 0,
            status: Status::NotStarted,
        }
    }

    /// Attach a status to a [`Summary`].
    pub fn with_status(self, status: Status) -> Self {
        Self { status, ..self }
    }

    /// Record the number of bytes written.
    pub fn with_size(self, size: u64) -> Self {
        Self { size, ..self }
    }

    /// Get the summary's size.
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Get a reference to the summary's task.
    pub fn task(&self) -> &DownloadTask {
        &self.task
    }

    /// Get a reference to the summary's status.
    pub fn status(&self) -> &Status {
        &self.status
    }

    /// Whether the file was fully written.
    pub fn is_success(&self) -> bool {
        self.status == Status::Success
    }

    /// Mark the summary as failed locally with a message.
    pub fn fail(self, msg: impl std::fmt::Display) -> Self {
        Self {
            status: Status::LocalError(format!("{}", msg)),
            ..self
        }
    }
}
