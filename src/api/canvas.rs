//! Canvas REST endpoints used by canvas-dl.

use super::model::{Course, FileEntry, Folder};
use super::pagination::{Paginator, Traversal};
use crate::error::{Error, Result};

use reqwest::Url;
use reqwest_middleware::ClientWithMiddleware;
use serde::de::DeserializeOwned;
use std::fmt;

/// Default number of records requested per page.
pub const DEFAULT_PER_PAGE: u32 = 100;

/// Where the API lives and how to authenticate against it.
#[derive(Clone)]
pub struct Credentials {
    base_url: Url,
    token: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("base_url", &self.base_url.as_str())
            .field("token", &"<redacted>")
            .finish()
    }
}

impl Credentials {
    /// Credentials for an explicit API base URL such as
    /// `https://canvas.example.edu/api/v1/`.
    pub fn new(base_url: &str, token: &str) -> Result<Self> {
        let token = token.trim();
        if token.is_empty() {
            return Err(Error::Config("an API token is required".into()));
        }

        let base_url = base_url.trim();
        if base_url.is_empty() {
            return Err(Error::Config("a Canvas base URL is required".into()));
        }

        // Url::join drops the last segment unless the base ends with a slash.
        let with_slash = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{}/", base_url)
        };
        let base_url = Url::parse(&with_slash).map_err(|e| {
            Error::InvalidUrl(format!("The base url \"{}\" cannot be parsed: {}", base_url, e))
        })?;

        Ok(Self {
            base_url,
            token: token.to_string(),
        })
    }

    /// Credentials for a hosted instance, `https://{institution}.instructure.com/api/v1/`.
    pub fn for_institution(institution: &str, token: &str) -> Result<Self> {
        let institution = institution.trim();
        if institution.is_empty() {
            return Err(Error::Config("an institution name is required".into()));
        }
        Self::new(
            &format!("https://{}.instructure.com/api/v1/", institution),
            token,
        )
    }

    /// The API root every endpoint is joined to.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The bearer token.
    pub fn token(&self) -> &str {
        &self.token
    }
}

/// Typed access to the listing endpoints.
#[derive(Debug, Clone)]
pub struct CanvasApi {
    base_url: Url,
    per_page: u32,
    paginator: Paginator,
}

impl CanvasApi {
    /// Creates the API accessor. `client` must already carry the bearer token.
    pub fn new(client: ClientWithMiddleware, base_url: Url) -> Self {
        Self {
            base_url,
            per_page: DEFAULT_PER_PAGE,
            paginator: Paginator::new(client),
        }
    }

    /// Set the page size requested from the server.
    pub fn per_page(mut self, per_page: u32) -> Self {
        self.per_page = per_page;
        self
    }

    /// Cap the number of pages of every listing.
    pub fn max_pages(mut self, max_pages: Option<usize>) -> Self {
        self.paginator = self.paginator.max_pages(max_pages);
        self
    }

    /// Build the first page URL of an endpoint.
    pub fn endpoint(&self, path: &str) -> Result<Url> {
        let mut url = self.base_url.join(path).map_err(|e| {
            Error::InvalidUrl(format!("cannot join \"{}\" to {}: {}", path, self.base_url, e))
        })?;
        url.query_pairs_mut()
            .append_pair("per_page", &self.per_page.to_string());
        Ok(url)
    }

    /// Courses of the token owner.
    pub async fn courses(&self) -> Traversal<Course> {
        self.traverse("courses").await
    }

    /// Every folder of a course.
    pub async fn folders(&self, course_id: u64) -> Traversal<Folder> {
        self.traverse(&format!("courses/{}/folders", course_id)).await
    }

    /// Files stored directly in a folder.
    pub async fn folder_files(&self, folder_id: u64) -> Traversal<FileEntry> {
        self.traverse(&format!("folders/{}/files", folder_id)).await
    }

    /// Files of the root scope, listed through the course id zero variant.
    pub async fn root_files(&self) -> Traversal<FileEntry> {
        self.traverse("courses/0/files").await
    }

    async fn traverse<T: DeserializeOwned>(&self, path: &str) -> Traversal<T> {
        match self.endpoint(path) {
            Ok(url) => self.paginator.fetch_all(url.as_str()).await,
            Err(e) => Traversal::failed(e),
        }
    }
}
