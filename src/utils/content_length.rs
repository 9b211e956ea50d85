//! Content length extraction utilities.

use reqwest::{header::CONTENT_LENGTH, Response};

/// Total number of bytes announced by a response.
///
/// Returns `None` when the `Content-Length` header is missing, unparsable or
/// zero, in which case progress is not rendered for the transfer.
pub fn expected_total(response: &Response) -> Option<u64> {
    response
        .headers()
        .get(CONTENT_LENGTH)
        .and_then(|value| value.to_str().ok())
        .and_then(parse_content_length)
}

/// Parse a `Content-Length` header value, rejecting zero.
///
/// ```rust
/// use canvas_dl::utils::parse_content_length;
///
/// assert_eq!(parse_content_length("2048"), Some(2048));
/// assert_eq!(parse_content_length("0"), None);
/// ```
pub fn parse_content_length(value: &str) -> Option<u64> {
    value.trim().parse::<u64>().ok().filter(|len| *len > 0)
}
