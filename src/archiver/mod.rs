//! Archiver module orchestrating a full run.
//!
//! - `archiver` - Course loop: catalog, filter, plan, download
//! - `builder` - ArchiverBuilder wiring the API client and the downloader
//! - `config` - Run configuration and defaults
//! - `report` - Per-course and per-run outcome counts

pub mod archiver;
pub mod builder;
pub mod config;
pub mod report;

pub use archiver::Archiver;
pub use builder::ArchiverBuilder;
pub use config::{ArchiverConfig, DEFAULT_DIRECTORY};
pub use report::{ArchiveReport, CourseReport};
