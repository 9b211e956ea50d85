//! Builder for [`Archiver`].
//!
//! ```rust
//! use canvas_dl::api::Credentials;
//! use canvas_dl::archiver::ArchiverBuilder;
//!
//! # fn example() -> Result<(), canvas_dl::Error> {
//! let credentials = Credentials::for_institution("myschool", "secret-token")?;
//! let archiver = ArchiverBuilder::new(credentials)
//!     .directory("Downloads".into())
//!     .concurrent_downloads(5)
//!     .extensions(["pdf", "docx", "pptx"])
//!     .build()?;
//! # Ok(())
//! # }
//! ```

use super::{archiver::Archiver, config::ArchiverConfig};
use crate::api::{CanvasApi, Credentials};
use crate::catalog::ExtensionFilter;
use crate::download::Summary;
use crate::downloader::DownloaderBuilder;
use crate::error::Result;
use crate::http::{bearer_headers, create_http_client, HttpClientConfig};
use crate::StyleOptions;

use std::path::PathBuf;

/// A builder used to create an [`Archiver`].
pub struct ArchiverBuilder {
    config: ArchiverConfig,
    downloader: DownloaderBuilder,
}

impl ArchiverBuilder {
    /// Creates a builder with the default options.
    pub fn new(credentials: Credentials) -> Self {
        Self {
            config: ArchiverConfig::new(credentials),
            downloader: DownloaderBuilder::new(),
        }
    }

    /// Sets the directory where the course folders are created.
    pub fn directory(mut self, directory: PathBuf) -> Self {
        self.config.directory = directory;
        self
    }

    /// Set the number of concurrent downloads per course.
    pub fn concurrent_downloads(mut self, concurrent_downloads: usize) -> Self {
        self.config.concurrent_downloads = concurrent_downloads;
        self
    }

    /// Set the number of records requested per page.
    pub fn per_page(mut self, per_page: u32) -> Self {
        self.config.per_page = per_page;
        self
    }

    /// Cap the number of pages of every listing.
    pub fn max_pages(mut self, max_pages: Option<usize>) -> Self {
        self.config.max_pages = max_pages;
        self
    }

    /// Download only the files with one of these extensions.
    pub fn extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.config.filter = ExtensionFilter::new(extensions);
        self
    }

    /// Sanitize the file names as well as the folder names.
    pub fn sanitize_file_names(mut self, sanitize: bool) -> Self {
        self.config.sanitize_file_names = sanitize;
        self
    }

    /// Set the progress bar style options.
    pub fn style_options(mut self, style_options: StyleOptions) -> Self {
        self.config.style_options = style_options;
        self
    }

    /// Set callback for when each download completes.
    pub fn on_complete<F>(mut self, callback: F) -> Self
    where
        F: Fn(&Summary) + Send + Sync + 'static,
    {
        self.downloader = self.downloader.on_complete(callback);
        self
    }

    /// Create the [`Archiver`] with the specified options.
    pub fn build(self) -> Result<Archiver> {
        let config = self.config;

        let api_client = create_http_client(HttpClientConfig {
            proxy: None,
            headers: Some(bearer_headers(config.credentials.token())?),
        })?;
        let api = CanvasApi::new(api_client, config.credentials.base_url().clone())
            .per_page(config.per_page)
            .max_pages(config.max_pages);

        let downloader = self
            .downloader
            .concurrent_downloads(config.concurrent_downloads)
            .style_options(config.style_options.clone())
            .build()?;

        Ok(Archiver::new(config, api, downloader))
    }
}
