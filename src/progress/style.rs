//! Progress bar styling and configuration options.
//!
//! Two kinds of bars are drawn: one batch bar per course counting finished
//! files, and one child bar per active transfer.
//!
//! # Examples
//!
//! ## Default Styling
//!
//! ```rust
//! use canvas_dl::progress::StyleOptions;
//!
//! // Batch bar stays visible, transfer bars clear on completion.
//! let style_options = StyleOptions::default();
//! assert!(style_options.is_enabled());
//! ```
//!
//! ## Hidden Progress Bars
//!
//! ```rust
//! use canvas_dl::progress::StyleOptions;
//!
//! let hidden_style = StyleOptions::hidden();
//! assert!(!hidden_style.is_enabled());
//! ```

use indicatif::{ProgressBar, ProgressState, ProgressStyle};
use tracing::warn;

/// Define the downloader style options.
///
/// By default, the batch progress bar will stay on the screen upon completion,
/// but the child ones will be cleared once complete.
#[derive(Debug, Clone)]
pub struct StyleOptions {
    /// Style options for the batch progress bar.
    pub(crate) main: ProgressBarOpts,
    /// Style options for the child progress bar(s).
    pub(crate) child: ProgressBarOpts,
}

impl Default for StyleOptions {
    fn default() -> Self {
        Self {
            main: ProgressBarOpts {
                template: Some(ProgressBarOpts::TEMPLATE_BAR_WITH_POSITION.into()),
                progress_chars: Some(ProgressBarOpts::CHARS_FINE.into()),
                enabled: true,
                clear: false,
            },
            child: ProgressBarOpts::with_hash_style(),
        }
    }
}

impl StyleOptions {
    /// Create new [`StyleOptions`].
    pub fn new(main: ProgressBarOpts, child: ProgressBarOpts) -> Self {
        Self { main, child }
    }

    /// Style options with every bar hidden.
    pub fn hidden() -> Self {
        Self::new(ProgressBarOpts::hidden(), ProgressBarOpts::hidden())
    }

    /// Return `false` if neither the main nor the child bar is enabled.
    pub fn is_enabled(&self) -> bool {
        self.main.enabled || self.child.enabled
    }

    /// Get a reference to the batch progress bar options.
    pub fn main(&self) -> &ProgressBarOpts {
        &self.main
    }

    /// Get a reference to the child progress bar options.
    pub fn child(&self) -> &ProgressBarOpts {
        &self.child
    }
}

/// Define the options for a progress bar.
#[derive(Debug, Clone)]
pub struct ProgressBarOpts {
    /// Progress bar template string.
    template: Option<String>,
    /// Progression characters set.
    progress_chars: Option<String>,
    /// Enable or disable the progress bar.
    pub(crate) enabled: bool,
    /// Clear the progress bar once completed.
    pub(crate) clear: bool,
}

impl Default for ProgressBarOpts {
    fn default() -> Self {
        Self {
            template: None,
            progress_chars: None,
            enabled: true,
            clear: true,
        }
    }
}

impl ProgressBarOpts {
    /// Template representing the bar and its position.
    ///
    /// `███████████████████████████████████████ 11/12 (91%) files`
    pub const TEMPLATE_BAR_WITH_POSITION: &'static str =
        "{bar:40.blue} {pos:>}/{len} ({percent}%) files";
    /// Fixed width hash bar with a two decimal percentage.
    ///
    /// `[#########################-------------------------] 50.00% - L1.pdf`
    pub const TEMPLATE_HASH_BAR: &'static str = "[{bar:50}] {percent_2dp}% - {msg}";
    /// Use fine blocks as progress characters: `"█▉▊▋▌▍▎▏  "`.
    pub const CHARS_FINE: &'static str = "█▉▊▋▌▍▎▏  ";
    /// Filled and unfilled cells only: `"#-"`.
    pub const CHARS_HASH: &'static str = "#-";

    /// Create a new [`ProgressBarOpts`].
    pub fn new(
        template: Option<String>,
        progress_chars: Option<String>,
        enabled: bool,
        clear: bool,
    ) -> Self {
        Self {
            template,
            progress_chars,
            enabled,
            clear,
        }
    }

    /// Create a [`ProgressStyle`] based on the provided options.
    ///
    /// An invalid template falls back to the default bar.
    pub fn to_progress_style(self) -> ProgressStyle {
        let mut style = ProgressStyle::default_bar();
        if let Some(template) = self.template {
            match ProgressStyle::with_template(&template) {
                Ok(s) => style = s,
                Err(e) => warn!("Ignoring progress template {:?}: {}", template, e),
            }
        }
        if let Some(progress_chars) = self.progress_chars {
            style = style.progress_chars(&progress_chars);
        }
        style.with_key(
            "percent_2dp",
            |state: &ProgressState, w: &mut dyn std::fmt::Write| {
                let _ = write!(w, "{:.2}", state.fraction() * 100.0);
            },
        )
    }

    /// Create a [`ProgressBar`] based on the provided options.
    pub fn to_progress_bar(self, len: u64) -> ProgressBar {
        // Return a hidden Progress bar if we disabled it.
        if !self.enabled {
            return ProgressBar::hidden();
        }

        let style = self.to_progress_style();
        ProgressBar::new(len).with_style(style)
    }

    /// Create a new [`ProgressBarOpts`] drawing `[###---] 50.00% - name` rows.
    pub fn with_hash_style() -> Self {
        Self {
            template: Some(ProgressBarOpts::TEMPLATE_HASH_BAR.into()),
            progress_chars: Some(ProgressBarOpts::CHARS_HASH.into()),
            enabled: true,
            clear: true,
        }
    }

    /// Set to `true` to clear the progress bar upon completion.
    pub fn set_clear(&mut self, clear: bool) {
        self.clear = clear;
    }

    /// Create a new [`ProgressBarOpts`] which hides the progress bars.
    pub fn hidden() -> Self {
        Self {
            enabled: false,
            ..ProgressBarOpts::default()
        }
    }
}
