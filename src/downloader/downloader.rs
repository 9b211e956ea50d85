//! Core downloader implementation with fetch logic.
//!
//! This module contains the [`Downloader`] that streams files to disk with a
//! bounded number of concurrent transfers and live progress reporting.
//!
//! # Examples
//!
//! ```rust,no_run
//! use canvas_dl::api::FileEntry;
//! use canvas_dl::download::DownloadTask;
//! use canvas_dl::downloader::DownloaderBuilder;
//!
//! # async fn example(files: Vec<FileEntry>) -> Result<(), canvas_dl::Error> {
//! let downloader = DownloaderBuilder::new().concurrent_downloads(5).build()?;
//! let tasks: Vec<_> = files
//!     .into_iter()
//!     .map(|file| DownloadTask::plan(file, "Downloads/CS101".as_ref(), false))
//!     .collect();
//!
//! for summary in downloader.download(&tasks).await {
//!     println!("{} - {:?}", summary.task().label(), summary.status());
//! }
//! # Ok(())
//! # }
//! ```

use super::config::DownloaderConfig;
use super::gate::DownloadGate;
use crate::download::{DownloadTask, Status, Summary};
use crate::error::{Error, Result};
use crate::progress::{LineRegistry, ProgressDisplay, ProgressReporter};
use crate::utils::{apply_timestamps, check_file_name, expected_total};
use crate::StyleOptions;

use futures::stream::StreamExt;
use reqwest_middleware::ClientWithMiddleware;
use std::fmt;
use std::fmt::Debug;
use std::fs::TryLockError;
use std::path::Path;
use std::sync::Arc;
use tokio::{fs, fs::OpenOptions, io::AsyncWriteExt};
use tracing::debug;

/// Represents the download controller.
///
/// Clones share the concurrency gate and the progress line registry.
#[derive(Clone)]
pub struct Downloader {
    config: DownloaderConfig,
    client: ClientWithMiddleware,
    gate: DownloadGate,
    lines: Arc<LineRegistry>,
}

impl Debug for Downloader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Downloader")
            .field("config", &self.config)
            .field("gate", &self.gate.stats())
            .finish()
    }
}

impl Downloader {
    /// Creates a new Downloader with the given configuration.
    pub(crate) fn new(config: DownloaderConfig, client: ClientWithMiddleware) -> Self {
        let gate = DownloadGate::new(config.concurrent_downloads);
        Self {
            config,
            client,
            gate,
            lines: Arc::new(LineRegistry::default()),
        }
    }

    /// Gets the number of concurrent downloads.
    pub fn concurrent_downloads(&self) -> usize {
        self.gate.capacity()
    }

    /// Gets the size of the pieces written to disk.
    pub fn chunk_size(&self) -> usize {
        self.config.chunk_size
    }

    /// Gets the style options.
    pub fn style_options(&self) -> &StyleOptions {
        &self.config.style_options
    }

    /// Gets the concurrency gate.
    pub fn gate(&self) -> &DownloadGate {
        &self.gate
    }

    /// Gets the progress line registry.
    pub fn lines(&self) -> &LineRegistry {
        &self.lines
    }

    /// Download a batch of files.
    ///
    /// Transfers are started in the order of `tasks`, each one once a gate
    /// permit is free, and run concurrently on the tokio runtime. The call
    /// returns once every transfer ended; summaries are in the order of
    /// `tasks`.
    pub async fn download(&self, tasks: &[DownloadTask]) -> Vec<Summary> {
        let progress_display = ProgressDisplay::new(
            self.config.style_options.clone(),
            tasks.len(),
            self.lines.clone(),
        );

        let mut pending = Vec::with_capacity(tasks.len());
        for task in tasks {
            let handle = match self.gate.acquire().await {
                Ok(permit) => {
                    let reporter = progress_display.reserve_line();
                    let downloader = self.clone();
                    let task = task.clone();
                    Ok(tokio::spawn(async move {
                        let _permit = permit;
                        downloader.fetch(&task, &reporter).await
                    }))
                }
                Err(e) => Err(e),
            };
            pending.push((task, handle));
        }

        let mut summaries = Vec::with_capacity(pending.len());
        for (task, handle) in pending {
            let summary = match handle {
                Ok(handle) => match handle.await {
                    Ok(summary) => summary,
                    Err(e) => Summary::new(task.clone()).fail(format!("download task aborted: {}", e)),
                },
                Err(e) => Summary::new(task.clone()).fail(e),
            };
            summaries.push(summary);
        }

        progress_display.finish().await;
        summaries
    }

    /// Transfer one file and report the outcome.
    ///
    /// Never fails: every error ends up in the returned summary's status.
    pub async fn fetch(&self, task: &DownloadTask, progress: &ProgressReporter) -> Summary {
        progress.start(task.label());

        let summary = Summary::new(task.clone());
        let summary = match self.transfer(task, progress).await {
            Ok(size) => summary.with_size(size).with_status(Status::Success),
            Err(e) => {
                debug!("Transfer of {} failed: {}", task.label(), e);
                summary.with_status(Status::from(&e))
            }
        };

        progress.finish(summary.status());

        // Call the callback for every finished download
        if let Some(ref callback) = self.config.on_complete {
            callback(&summary);
        }

        summary
    }

    /// Stream the body of `task` to its destination.
    ///
    /// The destination file is only created once the server answered with a
    /// success status, and is held exclusively while it is written. A transfer
    /// failing half way leaves the partial file.
    async fn transfer(&self, task: &DownloadTask, progress: &ProgressReporter) -> Result<u64> {
        let output = &task.destination;
        check_file_name(&task.file.display_name)?;

        // Prepare the destination directory.
        if let Some(output_dir) = output.parent() {
            debug!("Creating destination directory {:?}", output_dir);
            fs::create_dir_all(output_dir).await?;
        }

        // Request the file.
        debug!("Fetching {}", &task.file.url);
        let res = self.client.get(task.file.url.as_str()).send().await?;

        // Check the status for errors.
        let status = res.status();
        if !status.is_success() {
            return Err(Error::Remote {
                url: task.file.url.clone(),
                status,
            });
        }

        let total = expected_total(&res);

        debug!("Creating destination file {:?}", output);
        let mut file = open_exclusive(output).await?;

        // Download the file chunk by chunk.
        debug!("Retrieving chunks...");
        let mut downloaded: u64 = 0;
        let mut stream = res.bytes_stream();
        while let Some(item) = stream.next().await {
            let chunk = item?;
            for piece in chunk.chunks(self.config.chunk_size) {
                file.write_all(piece).await?;
                downloaded += piece.len() as u64;
                if let Some(total) = total {
                    progress.advance(downloaded, total);
                }
            }
        }
        file.flush().await?;

        // Restore the remote timestamps.
        let file = file.into_std().await;
        apply_timestamps(&file, task.file.created_at, task.file.updated_at)?;

        Ok(downloaded)
    }
}

/// Open `path` for writing and take an exclusive lock on it.
///
/// The lock lives as long as the handle. The file is only truncated once the
/// lock is held, so a busy destination is left untouched.
async fn open_exclusive(path: &Path) -> Result<fs::File> {
    let mut options = OpenOptions::new();
    options.create(true).write(true);
    #[cfg(windows)]
    options.share_mode(0);

    let file = options.open(path).await?.into_std().await;
    file.try_lock().map_err(|e| match e {
        TryLockError::WouldBlock => Error::Locked(path.display().to_string()),
        TryLockError::Error(e) => Error::from(e),
    })?;
    file.set_len(0)?;

    Ok(fs::File::from_std(file))
}
