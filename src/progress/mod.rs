//! Progress module containing progress bar functionality.
//!
//! This module provides progress bar styling, the event driven display shared
//! by concurrent downloads, and the plain text row format.
//!
//! # Overview
//!
//! - `style` - Progress bar styling options and templates
//! - `display` - Renderer task, row reservation and progress events
//! - `render` - `[####----] 12.34% - name` row format
//!
//! # Examples
//!
//! ## Custom Progress Bar Styling
//!
//! ```rust
//! use canvas_dl::progress::{StyleOptions, ProgressBarOpts};
//!
//! let style_options = StyleOptions::new(
//!     ProgressBarOpts::new(
//!         Some("{bar:40.cyan/blue} {pos}/{len} files".to_string()),
//!         Some("█▉▊▋▌▍▎▏  ".to_string()),
//!         true,
//!         false
//!     ),
//!     ProgressBarOpts::with_hash_style(),
//! );
//! ```

pub(crate) mod display;
pub(crate) mod render;
pub(crate) mod style;

pub use display::{status_line, LineRegistry, ProgressDisplay, ProgressEvent, ProgressReporter};
pub use render::{percentage, render_line, BAR_WIDTH};
pub use style::{ProgressBarOpts, StyleOptions};
