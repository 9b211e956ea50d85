//! HTTP module containing HTTP client functionality.
//!
//! - [`client`] - HTTP client creation and middleware configuration
//!
//! Two clients are built from the same function: one carrying the bearer
//! token for the Canvas API, and one without it for the file transfers, whose
//! URLs are pre-signed and usually redirect to a storage host.

pub mod client;

pub use client::{bearer_headers, create_http_client, HttpClientConfig, DEFAULT_USER_AGENT};
