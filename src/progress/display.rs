//! Progress display management and coordination.
//!
//! Download tasks never touch the terminal. Each one holds a
//! [`ProgressReporter`] bound to a reserved row and sends [`ProgressEvent`]s
//! over a channel; a single renderer task owns the [`MultiProgress`] and
//! applies the events in arrival order, so rows never interleave.
//!
//! # Examples
//!
//! ```rust
//! use canvas_dl::progress::{LineRegistry, ProgressDisplay, StyleOptions};
//! use std::sync::Arc;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let lines = Arc::new(LineRegistry::default());
//! let display = ProgressDisplay::new(StyleOptions::hidden(), 1, lines);
//!
//! let reporter = display.reserve_line();
//! reporter.start("L1.pdf");
//! reporter.advance(4096, 8192);
//! drop(reporter);
//!
//! display.finish().await;
//! # }
//! ```

use super::render::render_line;
use crate::download::Status;
use crate::progress::StyleOptions;

use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// Process-wide counter handing out progress rows.
///
/// Rows are never reclaimed during a run.
#[derive(Debug, Default)]
pub struct LineRegistry {
    next: AtomicUsize,
}

impl LineRegistry {
    /// Reserve the next row.
    pub fn reserve(&self) -> usize {
        self.next.fetch_add(1, Ordering::SeqCst)
    }

    /// Number of rows reserved so far.
    pub fn reserved(&self) -> usize {
        self.next.load(Ordering::SeqCst)
    }
}

/// Messages sent from download tasks to the renderer.
#[derive(Debug, Clone, PartialEq)]
pub enum ProgressEvent {
    /// A transfer bound to `line` started.
    Started { line: usize, label: String },
    /// `downloaded` of `total` bytes are on disk.
    Advanced {
        line: usize,
        downloaded: u64,
        total: u64,
    },
    /// The transfer bound to `line` ended.
    Finished { line: usize, status: Status },
}

/// Handle given to one download task.
#[derive(Debug, Clone)]
pub struct ProgressReporter {
    line: usize,
    events: UnboundedSender<ProgressEvent>,
}

impl ProgressReporter {
    /// Row reserved for this transfer.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Announce the transfer and its label.
    pub fn start(&self, label: &str) {
        self.send(ProgressEvent::Started {
            line: self.line,
            label: label.to_string(),
        });
    }

    /// Report the byte count. Ignored by the renderer when `total` is zero.
    pub fn advance(&self, downloaded: u64, total: u64) {
        self.send(ProgressEvent::Advanced {
            line: self.line,
            downloaded,
            total,
        });
    }

    /// Report the final status.
    pub fn finish(&self, status: &Status) {
        self.send(ProgressEvent::Finished {
            line: self.line,
            status: status.clone(),
        });
    }

    fn send(&self, event: ProgressEvent) {
        // The renderer only stops once every reporter is dropped.
        let _ = self.events.send(event);
    }
}

/// Progress display for one batch of downloads.
pub struct ProgressDisplay {
    events: UnboundedSender<ProgressEvent>,
    lines: Arc<LineRegistry>,
    renderer: JoinHandle<()>,
}

impl ProgressDisplay {
    /// Spawn the renderer for a batch of `total_downloads` transfers.
    ///
    /// Must be called from within a tokio runtime.
    pub fn new(style_options: StyleOptions, total_downloads: usize, lines: Arc<LineRegistry>) -> Self {
        let (events, receiver) = mpsc::unbounded_channel();
        let renderer = Renderer::new(style_options, total_downloads);
        let renderer = tokio::spawn(renderer.run(receiver));

        Self {
            events,
            lines,
            renderer,
        }
    }

    /// Reserve a row and hand out a reporter bound to it.
    pub fn reserve_line(&self) -> ProgressReporter {
        ProgressReporter {
            line: self.lines.reserve(),
            events: self.events.clone(),
        }
    }

    /// Wait for the renderer to drain every pending event.
    ///
    /// All reporters must have been dropped, otherwise this waits for them.
    pub async fn finish(self) {
        drop(self.events);
        if let Err(e) = self.renderer.await {
            warn!("Progress renderer stopped abnormally: {}", e);
        }
    }
}

/// Owner of the terminal rows.
struct Renderer {
    multi: MultiProgress,
    main: ProgressBar,
    style_options: StyleOptions,
    labels: HashMap<usize, String>,
    rows: HashMap<usize, ProgressBar>,
}

impl Renderer {
    fn new(style_options: StyleOptions, total_downloads: usize) -> Self {
        let multi = match style_options.is_enabled() {
            true => MultiProgress::new(),
            false => MultiProgress::with_draw_target(ProgressDrawTarget::hidden()),
        };

        let main = multi.add(
            style_options
                .main()
                .clone()
                .to_progress_bar(total_downloads as u64),
        );
        main.tick();

        Self {
            multi,
            main,
            style_options,
            labels: HashMap::new(),
            rows: HashMap::new(),
        }
    }

    async fn run(mut self, mut events: UnboundedReceiver<ProgressEvent>) {
        while let Some(event) = events.recv().await {
            self.apply(event);
        }
        self.finish();
    }

    fn apply(&mut self, event: ProgressEvent) {
        match event {
            ProgressEvent::Started { line, label } => {
                debug!(line, "Transfer started: {}", label);
                self.labels.insert(line, label);
            }
            ProgressEvent::Advanced {
                line,
                downloaded,
                total,
            } => {
                if total == 0 {
                    return;
                }
                let label = self.labels.get(&line).cloned().unwrap_or_default();
                let bar = self.rows.entry(line).or_insert_with(|| {
                    let bar = self
                        .multi
                        .add(self.style_options.child().clone().to_progress_bar(total));
                    bar.set_message(label);
                    bar
                });
                bar.set_length(total);
                bar.set_position(downloaded);
            }
            ProgressEvent::Finished { line, status } => {
                if let Some(bar) = self.rows.remove(&line) {
                    if self.style_options.child().clear {
                        bar.finish_and_clear();
                    } else {
                        bar.finish();
                    }
                }
                let label = self.labels.remove(&line).unwrap_or_default();
                self.println(&status_line(&status, &label));
                self.main.inc(1);
            }
        }
    }

    fn println(&self, text: &str) {
        if self.style_options.is_enabled() {
            if let Err(e) = self.multi.println(text) {
                debug!("Cannot print progress line: {}", e);
            }
        }
    }

    fn finish(self) {
        for bar in self.rows.values() {
            bar.finish_and_clear();
        }
        if self.style_options.main().clear {
            self.main.finish_and_clear();
        } else {
            self.main.finish();
        }
    }
}

/// Text printed once a transfer ends.
pub fn status_line(status: &Status, label: &str) -> String {
    match status {
        Status::Success => render_line(1, 1, label).unwrap_or_default(),
        Status::RemoteError(code) => format!("Error downloading {}. Status: {}", label, code),
        Status::LocalError(msg) => format!("Error while downloading {}: {}", label, msg),
        Status::NotStarted => format!("Not started: {}", label),
    }
}
