//! Testing utilities for docseek
//!
//! Builders for raw backend responses used across unit tests.
//!
//! Only available when compiled with `cfg(test)`.

use crate::hit::Hit;
use serde_json::{Value, json};

/// Deserialize a raw (not yet normalized) hit from a `_source` object
///
/// # Panics
/// Panics if the source does not deserialize.
#[must_use]
pub fn raw_hit(source: Value) -> Hit {
    serde_json::from_value(json!({
        "_index": "docs",
        "_id": "doc-0",
        "_score": 1.0,
        "_source": source,
    }))
    .expect("Failed to build test hit")
}

/// A search response containing one hit per source, with ids `doc-<n>`
#[must_use]
pub fn search_response(sources: Vec<Value>) -> Value {
    let hits: Vec<Value> = sources
        .into_iter()
        .enumerate()
        .map(|(i, source)| {
            json!({
                "_index": "docs",
                "_id": format!("doc-{i}"),
                "_score": 1.0,
                "_source": source,
            })
        })
        .collect();

    let total = hits.len();
    json!({
        "took": 2,
        "hits": {"total": {"value": total}, "hits": hits},
    })
}

/// An aggregation-only response for the tag listing
#[must_use]
pub fn tag_buckets_response(buckets: &[(&str, u64)]) -> Value {
    let buckets: Vec<Value> = buckets
        .iter()
        .map(|(key, doc_count)| json!({"key": key, "doc_count": doc_count}))
        .collect();

    json!({
        "took": 1,
        "hits": {"total": {"value": 0}, "hits": []},
        "aggregations": {"tags": {"buckets": buckets}},
    })
}
