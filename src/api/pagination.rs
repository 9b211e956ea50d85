//! Link-header pagination.
//!
//! Canvas splits every listing into pages and announces the following page
//! through a `Link` response header:
//!
//! ```text
//! Link: <https://x.instructure.com/api/v1/courses?page=2&per_page=100>; rel="next",
//!       <https://x.instructure.com/api/v1/courses?page=1&per_page=100>; rel="first"
//! ```
//!
//! The [`Paginator`] follows `next` relations until none is left. It has no
//! page cap unless [`Paginator::max_pages`] sets one, so a server producing an
//! endless `next` chain keeps the traversal running.

use crate::error::{Error, Result};

use reqwest::header::{HeaderMap, LINK};
use reqwest_middleware::ClientWithMiddleware;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

/// Outcome of a paginated listing.
///
/// A traversal stops at the first failing page. Items collected before the
/// failure are kept next to the error.
#[derive(Debug)]
pub struct Traversal<T> {
    /// Items of every page fetched, in page order.
    pub items: Vec<T>,
    /// Number of pages fetched successfully.
    pub pages: usize,
    /// Error that stopped the traversal, if any.
    pub error: Option<Error>,
}

impl<T> Default for Traversal<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            pages: 0,
            error: None,
        }
    }
}

impl<T> Traversal<T> {
    /// A traversal that failed before its first request.
    pub fn failed(error: Error) -> Self {
        Self {
            error: Some(error),
            ..Self::default()
        }
    }

    /// Whether every page was fetched.
    pub fn is_complete(&self) -> bool {
        self.error.is_none()
    }

    /// Drop the partial items if the traversal failed.
    pub fn into_result(self) -> Result<Vec<T>> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(self.items),
        }
    }
}

/// Walks a paginated listing one page at a time.
#[derive(Debug, Clone)]
pub struct Paginator {
    client: ClientWithMiddleware,
    max_pages: Option<usize>,
}

impl Paginator {
    /// Creates an unbounded paginator.
    pub fn new(client: ClientWithMiddleware) -> Self {
        Self {
            client,
            max_pages: None,
        }
    }

    /// Stop after `max_pages` pages. `None` follows every `next` link.
    pub fn max_pages(mut self, max_pages: Option<usize>) -> Self {
        self.max_pages = max_pages;
        self
    }

    /// Fetch `start_url` and every page linked from it.
    pub async fn fetch_all<T: DeserializeOwned>(&self, start_url: &str) -> Traversal<T> {
        let mut traversal = Traversal::default();
        let mut next = Some(start_url.to_string());

        while let Some(url) = next.take() {
            if self.max_pages.is_some_and(|max| traversal.pages >= max) {
                warn!(pages = traversal.pages, "Page limit reached, ignoring {}", url);
                break;
            }

            match self.fetch_page::<T>(&url).await {
                Ok((page, link)) => {
                    traversal.items.extend(page);
                    traversal.pages += 1;
                    next = link;
                }
                Err(e) => {
                    traversal.error = Some(e);
                    break;
                }
            }
        }

        traversal
    }

    async fn fetch_page<T: DeserializeOwned>(&self, url: &str) -> Result<(Vec<T>, Option<String>)> {
        debug!("Fetching page {}", url);
        let res = self.client.get(url).send().await?;

        let status = res.status();
        if !status.is_success() {
            return Err(Error::Remote {
                url: url.to_string(),
                status,
            });
        }

        let next = next_link(res.headers());
        let page = res.json::<Vec<T>>().await?;
        Ok((page, next))
    }
}

/// Find the target of the `next` relation among all `Link` headers.
pub fn next_link(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(LINK)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .find_map(|value| find_relation(value, "next"))
}

/// Find the target of `relation` in a single `Link` header value.
///
/// Entries are comma separated `<url>; param=value` lists. The `rel`
/// parameter may be quoted and may carry several space separated relations.
pub fn find_relation(value: &str, relation: &str) -> Option<String> {
    value.split(',').find_map(|entry| {
        let mut parts = entry.split(';');
        let target = parts
            .next()?
            .trim()
            .strip_prefix('<')?
            .strip_suffix('>')?;

        let matches = parts.any(|param| {
            param.split_once('=').is_some_and(|(key, rels)| {
                key.trim().eq_ignore_ascii_case("rel")
                    && rels
                        .trim()
                        .trim_matches('"')
                        .split_whitespace()
                        .any(|rel| rel.eq_ignore_ascii_case(relation))
            })
        });

        matches.then(|| target.to_string())
    })
}
