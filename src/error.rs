//! Error handling for canvas-dl.
//!
//! This module provides the error type shared by the listing, download and
//! orchestration layers. Listing errors truncate a traversal, download errors
//! are folded into a [`Status`](crate::download::Status), and only
//! configuration errors are fatal to a run.

use reqwest::StatusCode;
use std::io;
use thiserror::Error;

/// Errors that can happen when using canvas-dl.
#[derive(Error, Debug)]
pub enum Error {
    /// Missing or unusable operator input.
    ///
    /// Raised for blank credentials or a token that cannot be sent as an
    /// HTTP header. Fatal to the whole run.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error from an underlying system.
    #[error("Internal error: {0}")]
    Internal(String),

    /// Error from the underlying URL parser or the expected URL format.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The remote server answered with a non-success status.
    #[error("{url} answered with status {status}")]
    Remote {
        /// URL of the failing request.
        url: String,
        /// Status returned by the server.
        status: StatusCode,
    },

    /// The destination is held by another writer.
    #[error("{0} is locked by another writer")]
    Locked(String),

    /// A file name would place the file outside its course directory.
    #[error("Unsafe file name: {0}")]
    UnsafePath(String),

    /// I/O Error.
    ///
    /// Wraps errors raised while creating directories, writing chunks or
    /// updating file timestamps.
    #[error("I/O error: {source}")]
    IOError {
        #[from]
        source: io::Error,
    },

    /// Error from the Reqwest library.
    ///
    /// Network failures, body read failures and JSON decoding failures.
    #[error("Reqwest error: {source}")]
    Reqwest {
        #[from]
        source: reqwest::Error,
    },

    /// Error raised by the middleware stack while sending a request.
    #[error("Middleware error: {source}")]
    Middleware {
        #[from]
        source: reqwest_middleware::Error,
    },
}

/// Result type alias for operations that can fail with a canvas-dl error.
pub type Result<T> = std::result::Result<T, Error>;
