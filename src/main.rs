//! CLI entry point for canvas-dl.

use std::io::{self, BufRead, Write};

use canvas_dl::download::Status;
use canvas_dl::{ArchiverBuilder, Credentials, StyleOptions};
use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use tracing::{debug, info, warn};

mod cli;

use cli::Args;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments first (before tracing, so --help works without logs)
    let args = Args::parse();
    color_eyre::install()?;

    // Priority: RUST_LOG env var > quiet flag > verbose flag > default (warn)
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(args.default_log_level()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    debug!(?args, "CLI arguments parsed");

    let credentials = resolve_credentials(&args)?;
    info!(base_url = %credentials.base_url(), "Using Canvas API");

    let style_options = if args.no_progress || args.quiet {
        StyleOptions::hidden()
    } else {
        StyleOptions::default()
    };

    let archiver = ArchiverBuilder::new(credentials)
        .directory(args.output.clone())
        .concurrent_downloads(args.concurrency as usize)
        .per_page(args.per_page)
        .max_pages(args.max_pages)
        .extensions(&args.extensions)
        .sanitize_file_names(args.sanitize_file_names)
        .style_options(style_options)
        .on_complete(|summary| match summary.status() {
            Status::RemoteError(code) => {
                warn!(file = summary.task().label(), status = %code, "Download failed")
            }
            Status::LocalError(msg) => {
                warn!(file = summary.task().label(), error = %msg, "Download failed")
            }
            Status::Success => {
                debug!(file = summary.task().label(), bytes = summary.size(), "Downloaded")
            }
            Status::NotStarted => {}
        })
        .build()
        .wrap_err("cannot set up the Canvas client")?;

    let report = archiver.run().await?;
    info!(
        courses = report.courses.len(),
        succeeded = report.succeeded(),
        failed = report.failed(),
        "Run finished"
    );

    if !args.quiet {
        println!("Process ended.");
    }

    Ok(())
}

/// Build the credentials from the flags, the environment, or an interactive prompt.
fn resolve_credentials(args: &Args) -> Result<Credentials> {
    if let Some(url) = args.base_url.as_deref().filter(|url| !url.trim().is_empty()) {
        let token = token_or_prompt(args)?;
        return Ok(Credentials::new(url, &token)?);
    }

    let institution = match &args.institution {
        Some(institution) => institution.clone(),
        None => prompt("Enter your institution name (e.g., https://<INSTITUTION>.instructure.com/): ")?,
    };
    let token = token_or_prompt(args)?;

    Ok(Credentials::for_institution(&institution, &token)?)
}

fn token_or_prompt(args: &Args) -> Result<String> {
    match &args.token {
        Some(token) => Ok(token.clone()),
        None => prompt("Enter your Canvas API Key: "),
    }
}

/// Ask the operator for a value on stdin.
fn prompt(label: &str) -> Result<String> {
    let mut stdout = io::stdout();
    write!(stdout, "{}", label)?;
    stdout.flush()?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .wrap_err("cannot read from stdin")?;
    Ok(line.trim().to_string())
}
