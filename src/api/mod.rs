//! Search backend façade
//!
//! [`SearchApi`] wraps a [`Backend`] and exposes one method per backend
//! operation. Each method is a single round trip: build the request, send
//! it, and reshape the response into the types of [`crate::hit`],
//! [`crate::tags`], [`crate::mime`] and [`crate::index`].
//!
//! # Examples
//!
//! ```no_run
//! use docseek::api::SearchApi;
//! use docseek::query::SearchQuery;
//!
//! let api = SearchApi::new("http://localhost:4090")?;
//! let result = api.search(&SearchQuery::new().with_text("invoice"))?;
//! for hit in &result.hits.hits {
//!     println!("{} {:?}", hit.full_path(), hit.props);
//! }
//! # Ok::<(), docseek::api::ApiError>(())
//! ```

mod backend;
pub mod error;
mod mock;

pub use backend::{Backend, DEFAULT_TIMEOUT, HttpBackend, normalize_base_url};
pub use error::{ApiError, Result};
pub use mock::{MockBackend, MockResponse, RecordedRequest};

use crate::hit::{Hit, SearchResult, normalize_hit};
use crate::index::{ServerInfo, with_id_prefixes};
use crate::mime::{MimeGroup, mime_tree};
use crate::query::{SearchQuery, aggregation_query, ids_query};
use crate::stats::{CsvTable, StatsKind};
use crate::tags::{EsTag, tag_list};
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;

const INFO_PATH: &str = "i";
const SEARCH_PATH: &str = "es";
const MIME_AGGREGATION: &str = "mimeTypes";
const TAG_AGGREGATION: &str = "tags";

/// Body of a tag mutation request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagRequest<'a> {
    pub delete: bool,
    pub name: &'a str,
    pub doc_id: &'a str,
    pub path_md5: &'a str,
}

/// Façade over the search backend
#[derive(Debug)]
pub struct SearchApi<B: Backend = HttpBackend> {
    backend: B,
}

impl SearchApi<HttpBackend> {
    /// Create an API client for a backend URL
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid or the HTTP client cannot be built.
    pub fn new(base_url: &str) -> Result<Self> {
        Ok(Self::with_backend(HttpBackend::new(base_url)?))
    }

    /// Create an API client with a custom request timeout
    ///
    /// # Errors
    ///
    /// See [`SearchApi::new`].
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self> {
        Ok(Self::with_backend(HttpBackend::with_timeout(base_url, timeout)?))
    }
}

impl<B: Backend> SearchApi<B> {
    /// Create an API client over any backend
    #[must_use]
    pub const fn with_backend(backend: B) -> Self {
        Self { backend }
    }

    /// The underlying backend
    #[must_use]
    pub const fn backend(&self) -> &B {
        &self.backend
    }

    /// Fetch server information with index id prefixes computed
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response is malformed.
    pub fn get_info(&self) -> Result<ServerInfo> {
        let mut info: ServerInfo = serde_json::from_value(self.backend.get(INFO_PATH)?)?;
        info.indices = with_id_prefixes(&info.indices);
        tracing::debug!(indices = info.indices.len(), "fetched server info");
        Ok(info)
    }

    /// Run a raw search request and normalize every hit
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response is malformed.
    pub fn es_query(&self, query: &Value) -> Result<SearchResult> {
        let mut result: SearchResult = serde_json::from_value(self.backend.post(SEARCH_PATH, query)?)?;

        for hit in &mut result.hits.hits {
            normalize_hit(hit);
        }

        tracing::debug!(
            took = result.took,
            total = result.hits.total.value,
            returned = result.hits.hits.len(),
            "search completed"
        );
        Ok(result)
    }

    /// Run a search built with [`SearchQuery`]
    ///
    /// # Errors
    ///
    /// See [`SearchApi::es_query`].
    pub fn search(&self, query: &SearchQuery) -> Result<SearchResult> {
        self.es_query(&query.to_body())
    }

    /// MIME types present in the index, grouped by category
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the aggregation is missing.
    pub fn get_mime_types(&self) -> Result<Vec<MimeGroup>> {
        let result = self.es_query(&aggregation_query(MIME_AGGREGATION, "mime"))?;
        Ok(mime_tree(result.buckets(MIME_AGGREGATION)?))
    }

    /// Tag listing, one entry per tag name
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the aggregation is missing.
    pub fn get_tags(&self) -> Result<Vec<EsTag>> {
        let result = self.es_query(&aggregation_query(TAG_AGGREGATION, "tag"))?;
        Ok(tag_list(result.buckets(TAG_AGGREGATION)?))
    }

    /// Stored metadata of a single document
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is not JSON.
    pub fn get_doc_info(&self, doc_id: &str) -> Result<Value> {
        self.backend.get(&format!("d/{doc_id}"))
    }

    /// Fetch a single normalized hit by document id
    ///
    /// # Errors
    ///
    /// Returns `ApiError::NotFound` if no document has this id, or any error
    /// of [`SearchApi::es_query`].
    pub fn get_hit(&self, doc_id: &str) -> Result<Hit> {
        self.es_query(&ids_query(doc_id))?
            .hits
            .hits
            .into_iter()
            .next()
            .ok_or_else(|| ApiError::NotFound(doc_id.to_string()))
    }

    /// Add a stored tag (`name.#rrggbb`) to a hit
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the request.
    pub fn save_tag(&self, tag: &str, hit: &Hit) -> Result<()> {
        self.mutate_tag(tag, hit, false)
    }

    /// Remove a stored tag from a hit
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the request.
    pub fn delete_tag(&self, tag: &str, hit: &Hit) -> Result<()> {
        self.mutate_tag(tag, hit, true)
    }

    fn mutate_tag(&self, tag: &str, hit: &Hit, delete: bool) -> Result<()> {
        let request = TagRequest {
            delete,
            name: tag,
            doc_id: &hit.id,
            path_md5: &hit.path_md5,
        };

        tracing::info!(tag, doc_id = %hit.id, delete, "updating tag");
        self.backend.post(
            &format!("tag/{}", hit.source.index),
            &serde_json::to_value(&request)?,
        )?;
        Ok(())
    }

    /// URL of a statistics export
    #[must_use]
    pub fn stats_url(&self, index_id: &str, kind: StatsKind) -> String {
        self.backend.url(&kind.path(index_id))
    }

    #[must_use]
    pub fn get_treemap_csv_url(&self, index_id: &str) -> String {
        self.stats_url(index_id, StatsKind::Treemap)
    }

    #[must_use]
    pub fn get_mime_csv_url(&self, index_id: &str) -> String {
        self.stats_url(index_id, StatsKind::Mime)
    }

    #[must_use]
    pub fn get_size_csv_url(&self, index_id: &str) -> String {
        self.stats_url(index_id, StatsKind::Size)
    }

    #[must_use]
    pub fn get_date_csv_url(&self, index_id: &str) -> String {
        self.stats_url(index_id, StatsKind::Date)
    }

    /// Download and parse a statistics export
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is not valid CSV.
    pub fn fetch_stats(&self, index_id: &str, kind: StatsKind) -> Result<CsvTable> {
        CsvTable::parse(&self.backend.get_text(&kind.path(index_id))?)
    }
}
