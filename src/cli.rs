//! CLI argument definitions using clap derive macros.

use clap::Parser;
use std::path::PathBuf;

use canvas_dl::archiver::DEFAULT_DIRECTORY;

/// Mirror the files of your Canvas LMS courses to disk.
///
/// Every course of the account behind the API token is listed, and the files
/// matching the selected extensions are downloaded under
/// `<output>/<course>/<folders...>/`.
#[derive(Parser, Debug)]
#[command(name = "canvas-dl")]
#[command(author, version, about)]
pub struct Args {
    /// Institution name, as in https://<INSTITUTION>.instructure.com/
    #[arg(long, env = "CANVAS_INSTITUTION")]
    pub institution: Option<String>,

    /// Canvas API access token
    #[arg(long, env = "CANVAS_API_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Explicit API base URL, overriding the institution (e.g. https://canvas.example.edu/api/v1/)
    #[arg(long, env = "CANVAS_BASE_URL")]
    pub base_url: Option<String>,

    /// Directory the course folders are created in
    #[arg(short, long, default_value = DEFAULT_DIRECTORY)]
    pub output: PathBuf,

    /// Maximum concurrent downloads per course (1-100)
    #[arg(short = 'c', long, default_value_t = 5, value_parser = clap::value_parser!(u8).range(1..=100))]
    pub concurrency: u8,

    /// Records requested per listing page (1-100)
    #[arg(long, default_value_t = 100, value_parser = clap::value_parser!(u32).range(1..=100))]
    pub per_page: u32,

    /// Stop every listing after this many pages
    #[arg(long)]
    pub max_pages: Option<usize>,

    /// File extensions to download, comma separated
    #[arg(short = 'e', long = "ext", value_delimiter = ',', default_values = ["pdf", "docx"])]
    pub extensions: Vec<String>,

    /// Also replace characters that are invalid on Windows in file names
    #[arg(long)]
    pub sanitize_file_names: bool,

    /// Do not draw progress bars
    #[arg(long)]
    pub no_progress: bool,

    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Log level used when RUST_LOG is not set.
    pub fn default_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }
}
