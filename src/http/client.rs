//! HTTP client setup and middleware configuration.
//!
//! Every request issued by canvas-dl goes through a `reqwest` client wrapped
//! in `reqwest-middleware`, with [`TracingMiddleware`] emitting a span per
//! request. Failed requests are never retried.
//!
//! # Examples
//!
//! ## Client for the Canvas API
//!
//! ```rust
//! use canvas_dl::http::{bearer_headers, create_http_client, HttpClientConfig};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = HttpClientConfig {
//!     proxy: None,
//!     headers: Some(bearer_headers("secret-token")?),
//! };
//!
//! let client = create_http_client(config)?;
//! # Ok(())
//! # }
//! ```

use crate::error::{Error, Result};

use reqwest::{
    header::{HeaderMap, HeaderValue, AUTHORIZATION, USER_AGENT},
    Proxy,
};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_tracing::TracingMiddleware;

/// User agent sent with every request.
pub const DEFAULT_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Configuration for HTTP client setup.
#[derive(Debug, Clone, Default)]
pub struct HttpClientConfig {
    /// Optional proxy configuration.
    pub proxy: Option<Proxy>,
    /// Default headers to include with all requests.
    pub headers: Option<HeaderMap>,
}

/// Build the default headers carrying a bearer token.
///
/// The header value is marked sensitive so it never shows up in debug output.
pub fn bearer_headers(token: &str) -> Result<HeaderMap> {
    let mut value = HeaderValue::from_str(&format!("Bearer {}", token.trim()))
        .map_err(|e| Error::Config(format!("the API token is not a valid header value: {}", e)))?;
    value.set_sensitive(true);

    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, value);
    Ok(headers)
}

/// Creates an HTTP client with middleware configuration.
///
/// The client carries the crate user agent, the optional proxy and the
/// optional default headers, and traces every request.
pub fn create_http_client(
    config: HttpClientConfig,
) -> std::result::Result<ClientWithMiddleware, reqwest::Error> {
    let mut default_headers = HeaderMap::new();
    default_headers.insert(USER_AGENT, HeaderValue::from_static(DEFAULT_USER_AGENT));
    if let Some(headers) = config.headers {
        default_headers.extend(headers);
    }

    let mut inner_client_builder = reqwest::Client::builder().default_headers(default_headers);

    if let Some(proxy) = config.proxy {
        inner_client_builder = inner_client_builder.proxy(proxy);
    }

    let inner_client = inner_client_builder.build()?;

    let client = ClientBuilder::new(inner_client)
        // Trace HTTP requests. See the tracing crate to make use of these traces.
        .with(TracingMiddleware::default())
        .build();

    Ok(client)
}
