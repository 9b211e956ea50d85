//! Builder pattern implementation for creating Downloader instances.
//!
//! # Examples
//!
//! ```rust
//! use canvas_dl::downloader::DownloaderBuilder;
//! use canvas_dl::download::Status;
//!
//! # fn example() -> Result<(), canvas_dl::Error> {
//! let downloader = DownloaderBuilder::new()
//!     .concurrent_downloads(3)
//!     .on_complete(|summary| {
//!         if let Status::LocalError(msg) = summary.status() {
//!             eprintln!("{} failed: {}", summary.task().label(), msg);
//!         }
//!     })
//!     .build()?;
//! # Ok(())
//! # }
//! ```

use super::{config::DownloaderConfig, downloader::Downloader};
use crate::download::Summary;
use crate::error::Result;
use crate::http::{create_http_client, HttpClientConfig};
use crate::StyleOptions;

use std::sync::Arc;

/// A builder used to create a [`Downloader`].
#[derive(Default)]
pub struct DownloaderBuilder {
    config: DownloaderConfig,
}

impl DownloaderBuilder {
    /// Creates a builder with the default options.
    pub fn new() -> Self {
        DownloaderBuilder::default()
    }

    /// Convenience function to hide the progress bars.
    pub fn hidden() -> Self {
        let mut builder = DownloaderBuilder::default();
        builder.config.style_options = StyleOptions::hidden();
        builder
    }

    /// Set the number of concurrent downloads.
    pub fn concurrent_downloads(mut self, concurrent_downloads: usize) -> Self {
        self.config.concurrent_downloads = concurrent_downloads;
        self
    }

    /// Set the size of the pieces written to disk and reported as progress.
    pub fn chunk_size(mut self, chunk_size: usize) -> Self {
        self.config.chunk_size = chunk_size.max(1);
        self
    }

    /// Set the downloader style options.
    pub fn style_options(mut self, style_options: StyleOptions) -> Self {
        self.config.style_options = style_options;
        self
    }

    /// Set callback for when each download completes.
    ///
    /// The callback is called as soon as each download finishes, whatever its
    /// outcome, while other downloads may still be running.
    pub fn on_complete<F>(mut self, callback: F) -> Self
    where
        F: Fn(&Summary) + Send + Sync + 'static,
    {
        self.config.on_complete = Some(Arc::new(Box::new(callback)));
        self
    }

    /// Create the [`Downloader`] with the specified options.
    ///
    /// The transfer client carries no API token.
    pub fn build(self) -> Result<Downloader> {
        let client = create_http_client(HttpClientConfig::default())?;
        Ok(Downloader::new(self.config, client))
    }
}
