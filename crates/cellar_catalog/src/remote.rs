//! Remote catalog client.

use crate::beer::CatalogBeer;
use crate::error::CatalogResult;
use crate::source::{PageBatch, PageSource};
use tracing::debug;

/// Default public catalog endpoint.
pub const DEFAULT_CATALOG_URL: &str = "https://api.punkapi.com/v2/beers";

/// A [`PageSource`] over the public catalog HTTP API.
///
/// The API takes `page` and `per_page` query parameters and answers with a
/// JSON array of entries; it reports no overall total, so batches come back
/// with `total: None`. Requests are plain blocking GETs - retry and backoff
/// are the caller's concern.
///
/// # Example
///
/// ```no_run
/// use cellar_catalog::{PageSource, RemoteCatalog};
///
/// let catalog = RemoteCatalog::new();
/// let batch = catalog.fetch_page(1, 10).unwrap();
/// for beer in &batch.records {
///     println!("{} - {}", beer.name, beer.tagline);
/// }
/// ```
#[derive(Debug)]
pub struct RemoteCatalog {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl RemoteCatalog {
    /// Creates a client against the default catalog endpoint.
    #[must_use]
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_CATALOG_URL)
    }

    /// Creates a client against a custom endpoint.
    ///
    /// Useful for self-hosted mirrors and for tests.
    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::blocking::Client::new(),
        }
    }

    /// Returns the endpoint this client talks to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for RemoteCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl PageSource for RemoteCatalog {
    type Record = CatalogBeer;

    fn fetch_page(&self, page: usize, page_size: usize) -> CatalogResult<PageBatch<CatalogBeer>> {
        debug!(url = %self.base_url, page, page_size, "fetching catalog page");

        let records: Vec<CatalogBeer> = self
            .client
            .get(&self.base_url)
            .query(&[("page", page), ("per_page", page_size)])
            .send()?
            .error_for_status()?
            .json()?;

        Ok(PageBatch {
            records,
            total: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_client_uses_public_endpoint() {
        let catalog = RemoteCatalog::new();
        assert_eq!(catalog.base_url(), DEFAULT_CATALOG_URL);
    }

    #[test]
    fn base_url_is_configurable() {
        let catalog = RemoteCatalog::with_base_url("http://localhost:9090/beers");
        assert_eq!(catalog.base_url(), "http://localhost:9090/beers");
    }
}
