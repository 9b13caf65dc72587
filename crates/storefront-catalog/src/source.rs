//! Catalog document sources.
//!
//! A [`CatalogSource`] produces the raw text of the catalog document. The
//! fetch is the only suspension point of a page view; sources do no
//! retrying and impose no timeout of their own.

use std::path::PathBuf;

use async_trait::async_trait;
use storefront_core::{Error, Result};

/// Something that can produce the catalog JSON text.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch the full document text.
    async fn fetch(&self) -> Result<String>;

    /// Human-readable location, used in log messages.
    fn describe(&self) -> String;
}

// ============================================================================
// FileSource
// ============================================================================

/// Reads the catalog from a local file.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Create a source for the given path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CatalogSource for FileSource {
    async fn fetch(&self) -> Result<String> {
        tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| Error::io_with_path(e, &self.path))
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

// ============================================================================
// HttpSource
// ============================================================================

/// Fetches the catalog with a single HTTP GET.
#[derive(Debug, Clone)]
pub struct HttpSource {
    url: String,
    client: reqwest::Client,
}

impl HttpSource {
    /// Create a source for the given URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl CatalogSource for HttpSource {
    async fn fetch(&self) -> Result<String> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| Error::http(format!("GET {} failed: {e}", self.url)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::http(format!("GET {} returned {status}", self.url)));
        }

        response
            .text()
            .await
            .map_err(|e| Error::http(format!("Reading body of {} failed: {e}", self.url)))
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

// ============================================================================
// InlineSource
// ============================================================================

/// Serves a document held in memory.
#[derive(Debug, Clone)]
pub struct InlineSource {
    body: String,
}

impl InlineSource {
    /// Create a source that returns `body`.
    pub fn new(body: impl Into<String>) -> Self {
        Self { body: body.into() }
    }
}

#[async_trait]
impl CatalogSource for InlineSource {
    async fn fetch(&self) -> Result<String> {
        Ok(self.body.clone())
    }

    fn describe(&self) -> String {
        "<inline>".to_string()
    }
}

/// Pick a source for a configured location: `http://` and `https://` URLs
/// are fetched over HTTP, anything else without a scheme is a file path.
///
/// An empty location or a URL with any other scheme is a
/// [`Error::Catalog`] error.
pub fn source_for(location: &str) -> Result<Box<dyn CatalogSource>> {
    let location = location.trim();
    if location.is_empty() {
        return Err(Error::catalog("catalog location is empty"));
    }

    match location.split_once("://") {
        Some((scheme, _))
            if scheme.eq_ignore_ascii_case("http") || scheme.eq_ignore_ascii_case("https") =>
        {
            Ok(Box::new(HttpSource::new(location)))
        }
        Some((scheme, _)) => Err(Error::catalog(format!(
            "unsupported catalog scheme '{scheme}' in {location}"
        ))),
        None => Ok(Box::new(FileSource::new(location))),
    }
}
