//! canvas-dl mirrors the files of Canvas LMS courses to disk.
//!
//! Courses, folders and files are listed through the paginated Canvas REST
//! API, folder paths are rebuilt locally, and the selected files are streamed
//! to disk by a bounded pool of concurrent downloads with live progress rows.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use canvas_dl::{ArchiverBuilder, Credentials, Error};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Error> {
//! let credentials = Credentials::for_institution("myschool", "secret-token")?;
//! let archiver = ArchiverBuilder::new(credentials).build()?;
//! let report = archiver.run().await?;
//! println!("{} files downloaded, {} failed", report.succeeded(), report.failed());
//! # Ok(())
//! # }
//! ```
//!
//! # Module Organization
//!
//! - [`api`] - Canvas records, endpoints and `Link` header pagination
//! - [`catalog`] - Folder path resolution, file catalog and extension filter
//! - [`download`] - Download tasks and their summaries
//! - [`downloader`] - The bounded-concurrency `Downloader` and its builder
//! - [`archiver`] - Course by course orchestration
//! - [`error`] - Centralized error handling with the `Error` enum
//! - [`http`] - HTTP client functionality
//! - [`progress`] - Progress bar styling and the event driven display
//! - [`utils`] - Shared utility functions

pub mod api;
pub mod archiver;
pub mod catalog;
pub mod download;
pub mod downloader;
pub mod error;
pub mod http;
pub mod progress;
pub mod utils;

pub use api::{CanvasApi, Course, Credentials, FileEntry, Folder, Paginator, Traversal};
pub use archiver::{ArchiveReport, Archiver, ArchiverBuilder, CourseReport};
pub use catalog::{CatalogBuilder, ExtensionFilter};
pub use download::{DownloadTask, Status, Summary};
pub use downloader::{Downloader, DownloaderBuilder};
pub use error::{Error, Result};
pub use http::{create_http_client, HttpClientConfig};
pub use progress::{ProgressBarOpts, StyleOptions};
