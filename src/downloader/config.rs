//! Configuration structures and defaults for the downloader.
//!
//! # Examples
//!
//! ## Using Callbacks
//!
//! ```rust
//! use canvas_dl::downloader::DownloadCallback;
//! use canvas_dl::download::{Summary, Status};
//!
//! let callback: DownloadCallback = Box::new(|summary: &Summary| {
//!     match summary.status() {
//!         Status::Success => println!("✓ Downloaded: {}", summary.task().label()),
//!         Status::RemoteError(code) => println!("✗ {}: {}", summary.task().label(), code),
//!         Status::LocalError(msg) => println!("✗ {}: {}", summary.task().label(), msg),
//!         Status::NotStarted => {}
//!     }
//! });
//! ```

use crate::download::Summary;
use crate::StyleOptions;

use std::sync::Arc;

/// Callback type for download completion events
pub type DownloadCallback = Box<dyn Fn(&Summary) + Send + Sync>;

/// Size of the pieces written to disk and reported as progress.
pub const DEFAULT_CHUNK_SIZE: usize = 8 * 1024;

/// Number of transfers running at once.
pub const DEFAULT_CONCURRENT_DOWNLOADS: usize = 5;

/// Configuration structure for the downloader
#[derive(Clone)]
pub struct DownloaderConfig {
    /// Number of maximum concurrent downloads.
    pub concurrent_downloads: usize,
    /// Size of the pieces written to disk.
    pub chunk_size: usize,
    /// Downloader style options.
    pub style_options: StyleOptions,
    /// Callback for when each download completes.
    pub on_complete: Option<Arc<DownloadCallback>>,
}

impl std::fmt::Debug for DownloaderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DownloaderConfig")
            .field("concurrent_downloads", &self.concurrent_downloads)
            .field("chunk_size", &self.chunk_size)
            .field("style_options", &self.style_options)
            .field("on_complete", &self.on_complete.is_some())
            .finish()
    }
}

impl Default for DownloaderConfig {
    fn default() -> Self {
        Self {
            concurrent_downloads: DEFAULT_CONCURRENT_DOWNLOADS,
            chunk_size: DEFAULT_CHUNK_SIZE,
            style_options: StyleOptions::default(),
            on_complete: None,
        }
    }
}
