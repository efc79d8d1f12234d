//! Search results and hit normalization
//!
//! Raw hits come back from the backend with escaped paths and only the
//! indexed fields. [`normalize_hit`] turns a raw hit into the shape a
//! front end renders:
//!
//! 1. `name` and `path` are unescaped
//! 2. `path_md5` is computed from the full path
//! 3. capability flags ([`HitProps`]) are derived from MIME type and codecs
//! 4. display tags are built from codecs and user tags
//!
//! Derived fields are skipped when deserializing, so a hit read from the wire
//! always starts with empty derived state.

mod props;
mod text;

pub use props::{
    HitProps, NON_PLAYABLE_IMAGE_CODECS, NON_PLAYABLE_VIDEO_CODECS, NON_PLAYABLE_VIDEO_EXTENSIONS,
};
pub use text::{ext, full_path, path_md5, str_unescape};

use crate::api::{ApiError, Result};
use crate::tags::{Tag, hit_tags};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Indexed fields of a document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Source {
    /// Directory of the document relative to the index root
    #[serde(default)]
    pub path: String,
    /// File name without extension
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub extension: String,
    /// Id of the index the document belongs to
    #[serde(default)]
    pub index: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mime: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mtime: Option<i64>,
    #[serde(rename = "_depth", default, skip_serializing_if = "Option::is_none")]
    pub depth: Option<u32>,
    /// Video (or image) codec
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub videoc: Option<String>,
    /// Audio codec
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audioc: Option<String>,
    /// Id of the containing document for sub-documents
    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub parent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    /// User tags in `name.#rrggbb` form
    #[serde(
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub tag: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checksum: Option<String>,
    /// Thumbnail descriptor, `"W,H"`
    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub thumbnail: Option<String>,
    /// Every other indexed field (content, metadata, ...)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Highlighted fragments returned with a hit
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Highlight {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<Vec<String>>,
}

/// A single search result document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Hit {
    /// Name of the backend index holding the document
    #[serde(rename = "_index", default)]
    pub index: String,
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_score", default)]
    pub score: Option<f64>,
    #[serde(rename = "_source")]
    pub source: Source,
    #[serde(default)]
    pub highlight: Highlight,
    #[serde(rename = "_path_md5", skip_deserializing)]
    pub path_md5: String,
    #[serde(rename = "_props", skip_deserializing)]
    pub props: HitProps,
    #[serde(rename = "_tags", skip_deserializing)]
    pub tags: Vec<Tag>,
}

impl Hit {
    /// Display path of the document (`path/name.ext`)
    #[must_use]
    pub fn full_path(&self) -> String {
        full_path(&self.source)
    }
}

/// Total hit count
///
/// Accepts both `{"value": n}` and a bare number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "TotalRepr")]
pub struct Total {
    pub value: u64,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TotalRepr {
    Object { value: u64 },
    Number(u64),
}

impl From<TotalRepr> for Total {
    fn from(repr: TotalRepr) -> Self {
        match repr {
            TotalRepr::Object { value } | TotalRepr::Number(value) => Self { value },
        }
    }
}

/// Hit list of a search response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Hits {
    #[serde(default)]
    pub total: Total,
    #[serde(default)]
    pub hits: Vec<Hit>,
}

/// One bucket of a terms aggregation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bucket {
    pub key: String,
    pub doc_count: u64,
}

/// Search response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Query time in milliseconds
    #[serde(default)]
    pub took: u64,
    #[serde(default)]
    pub hits: Hits,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub aggregations: Value,
}

impl SearchResult {
    /// Buckets of a named terms aggregation
    ///
    /// # Errors
    ///
    /// Returns `ApiError::MissingAggregation` if the response has no such
    /// aggregation, or `ApiError::Json` if its buckets are malformed.
    pub fn buckets(&self, name: &str) -> Result<Vec<Bucket>> {
        let buckets = self
            .aggregations
            .get(name)
            .and_then(|aggregation| aggregation.get("buckets"))
            .ok_or_else(|| ApiError::MissingAggregation(name.to_string()))?;

        Ok(serde_json::from_value(buckets.clone())?)
    }
}

/// Fill in the derived fields of a raw hit
pub fn normalize_hit(hit: &mut Hit) {
    hit.source.name = str_unescape(&hit.source.name);
    hit.source.path = str_unescape(&hit.source.path);
    hit.path_md5 = path_md5(&hit.source);
    hit.props = HitProps::from_source(&hit.source);
    hit.tags = hit_tags(&hit.source);
}

/// Treat an explicit `null` list as empty
fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accept a string or a number for fields older indices store as numbers
fn lenient_string<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(serde::de::Error::custom(format!(
            "expected string or number, found {other}"
        ))),
    }
}
