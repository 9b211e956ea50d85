//! Downloader module containing core downloader functionality, builder pattern, and configuration.
//!
//! # Overview
//!
//! - `downloader` - Core Downloader struct with transfer orchestration logic
//! - `builder` - DownloaderBuilder for flexible configuration using the builder pattern
//! - `config` - Configuration structures and callback types
//! - `gate` - Bounded pool of transfer slots
//!
//! # Examples
//!
//! ## Hidden Progress Bars
//!
//! ```rust
//! use canvas_dl::downloader::DownloaderBuilder;
//!
//! # fn example() -> Result<(), canvas_dl::Error> {
//! let downloader = DownloaderBuilder::hidden().build()?;
//! assert_eq!(downloader.concurrent_downloads(), 5);
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod config;
pub mod downloader;
pub mod gate;

pub use builder::DownloaderBuilder;
pub use config::{DownloadCallback, DownloaderConfig, DEFAULT_CHUNK_SIZE, DEFAULT_CONCURRENT_DOWNLOADS};
pub use downloader::Downloader;
pub use gate::{DownloadGate, GatePermit, GateStats};
