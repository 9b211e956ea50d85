//! Configuration of a full archiving run.

use crate::api::{Credentials, DEFAULT_PER_PAGE};
use crate::catalog::ExtensionFilter;
use crate::downloader::DEFAULT_CONCURRENT_DOWNLOADS;
use crate::StyleOptions;

use std::path::PathBuf;

/// Directory the course folders are created in, relative to the working directory.
pub const DEFAULT_DIRECTORY: &str = "Downloads";

/// Configuration structure for the archiver.
#[derive(Debug, Clone)]
pub struct ArchiverConfig {
    /// API location and token.
    pub credentials: Credentials,
    /// Directory where the course folders are created.
    pub directory: PathBuf,
    /// Number of maximum concurrent downloads per course.
    pub concurrent_downloads: usize,
    /// Records requested per listing page.
    pub per_page: u32,
    /// Page cap per listing, `None` for no cap.
    pub max_pages: Option<usize>,
    /// Which files get downloaded.
    pub filter: ExtensionFilter,
    /// Replace characters that are invalid in file names in the file names too.
    pub sanitize_file_names: bool,
    /// Progress bar style options.
    pub style_options: StyleOptions,
}

impl ArchiverConfig {
    /// Default configuration for `credentials`.
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            directory: PathBuf::from(DEFAULT_DIRECTORY),
            concurrent_downloads: DEFAULT_CONCURRENT_DOWNLOADS,
            per_page: DEFAULT_PER_PAGE,
            max_pages: None,
            filter: ExtensionFilter::default(),
            sanitize_file_names: false,
            style_options: StyleOptions::default(),
        }
    }
}
