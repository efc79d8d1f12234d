//! Search request bodies
//!
//! The backend forwards the request body to the search engine as-is, so this
//! module only assembles JSON; it does not parse or rank anything.

use serde_json::{Value, json};

/// Bucket limit for terms aggregations
pub const AGGREGATION_SIZE: usize = 10_000;

/// Default number of hits per page
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Fields the free-text query runs against
pub const TEXT_FIELDS: &[&str] = &["name^8", "content", "path.text"];

/// Builder for a search request body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    text: Option<String>,
    mime_types: Vec<String>,
    tags: Vec<String>,
    indices: Vec<String>,
    size: usize,
    from: usize,
    highlight: bool,
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self {
            text: None,
            mime_types: Vec::new(),
            tags: Vec::new(),
            indices: Vec::new(),
            size: DEFAULT_PAGE_SIZE,
            from: 0,
            highlight: true,
        }
    }
}

impl SearchQuery {
    /// Create a query matching every document
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Free-text query in simple query string syntax
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        let text = text.into();
        self.text = if text.trim().is_empty() { None } else { Some(text) };
        self
    }

    /// Restrict to these MIME types
    #[must_use]
    pub fn with_mime_types(mut self, mime_types: Vec<String>) -> Self {
        self.mime_types = mime_types;
        self
    }

    /// Restrict to documents carrying any of these stored tags
    #[must_use]
    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    /// Restrict to these index ids
    #[must_use]
    pub fn with_indices(mut self, indices: Vec<String>) -> Self {
        self.indices = indices;
        self
    }

    #[must_use]
    pub const fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    #[must_use]
    pub const fn with_from(mut self, from: usize) -> Self {
        self.from = from;
        self
    }

    /// Request highlighted `name` and `content` fragments
    #[must_use]
    pub const fn with_highlight(mut self, highlight: bool) -> Self {
        self.highlight = highlight;
        self
    }

    /// Build the JSON request body
    #[must_use]
    pub fn to_body(&self) -> Value {
        let must = match &self.text {
            Some(text) => json!({
                "simple_query_string": {
                    "query": text,
                    "fields": TEXT_FIELDS,
                    "default_operator": "and"
                }
            }),
            None => json!({"match_all": {}}),
        };

        let filter: Vec<Value> = [
            ("mime", &self.mime_types),
            ("tag", &self.tags),
            ("index", &self.indices),
        ]
        .into_iter()
        .filter(|(_, values)| !values.is_empty())
        .map(|(field, values)| json!({"terms": {field: values}}))
        .collect();

        let mut body = json!({
            "query": {"bool": {"must": [must], "filter": filter}},
            "size": self.size,
            "from": self.from,
        });

        if self.highlight {
            body["highlight"] = json!({
                "pre_tags": ["<mark>"],
                "post_tags": ["</mark>"],
                "fields": {"name": {}, "content": {}}
            });
        }

        body
    }
}

/// Body of a hits-less terms aggregation over `field`
#[must_use]
pub fn aggregation_query(name: &str, field: &str) -> Value {
    json!({
        "aggs": {
            name: {
                "terms": {"field": field, "size": AGGREGATION_SIZE}
            }
        },
        "size": 0,
    })
}

/// Body fetching a single document by id
#[must_use]
pub fn ids_query(doc_id: &str) -> Value {
    json!({
        "query": {"ids": {"values": [doc_id]}},
        "size": 1,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_query_matches_all() {
        let body = SearchQuery::new().to_body();

        assert_eq!(body["query"]["bool"]["must"][0], json!({"match_all": {}}));
        assert_eq!(body["query"]["bool"]["filter"], json!([]));
        assert_eq!(body["size"], json!(DEFAULT_PAGE_SIZE));
        assert_eq!(body["from"], json!(0));
        assert!(body.get("highlight").is_some());
    }

    #[test]
    fn test_text_query() {
        let body = SearchQuery::new().with_text("annual report").to_body();
        let query = &body["query"]["bool"]["must"][0]["simple_query_string"];

        assert_eq!(query["query"], json!("annual report"));
        assert_eq!(query["fields"], json!(["name^8", "content", "path.text"]));
    }

    #[test]
    fn test_blank_text_matches_all() {
        let body = SearchQuery::new().with_text("   ").to_body();
        assert_eq!(body["query"]["bool"]["must"][0], json!({"match_all": {}}));
    }

    #[test]
    fn test_filters() {
        let body = SearchQuery::new()
            .with_mime_types(vec!["image/png".into()])
            .with_tags(vec!["fav.#ff0000".into()])
            .with_indices(vec!["abcd".into()])
            .to_body();

        assert_eq!(
            body["query"]["bool"]["filter"],
            json!([
                {"terms": {"mime": ["image/png"]}},
                {"terms": {"tag": ["fav.#ff0000"]}},
                {"terms": {"index": ["abcd"]}}
            ])
        );
    }

    #[test]
    fn test_paging_and_no_highlight() {
        let body = SearchQuery::new()
            .with_size(50)
            .with_from(100)
            .with_highlight(false)
            .to_body();

        assert_eq!(body["size"], json!(50));
        assert_eq!(body["from"], json!(100));
        assert!(body.get("highlight").is_none());
    }

    #[test]
    fn test_aggregation_query() {
        assert_eq!(
            aggregation_query("tags", "tag"),
            json!({
                "aggs": {"tags": {"terms": {"field": "tag", "size": 10000}}},
                "size": 0
            })
        );
    }

    #[test]
    fn test_ids_query() {
        assert_eq!(ids_query("abc")["query"]["ids"]["values"], json!(["abc"]));
    }
}
