//! Server information and index descriptors

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Shortest index id prefix considered
pub const MIN_ID_PREFIX: usize = 4;

/// Longest index id prefix considered before falling back to the full id
pub const MAX_ID_PREFIX: usize = 32;

/// One index served by the backend
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexInfo {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub version: String,
    /// Unix timestamp of the last scan
    #[serde(default)]
    pub timestamp: i64,
    /// Shortest prefix of `id` that identifies this index among all indices
    #[serde(default, skip_deserializing)]
    pub id_prefix: String,
}

/// Response of the server info endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServerInfo {
    #[serde(default)]
    pub indices: Vec<IndexInfo>,
    /// Every other field of the response, passed through untouched
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ServerInfo {
    /// Find an index by id, id prefix or name
    #[must_use]
    pub fn find_index(&self, key: &str) -> Option<&IndexInfo> {
        self.indices
            .iter()
            .find(|idx| idx.id == key || idx.name == key)
            .or_else(|| {
                let mut matches = self.indices.iter().filter(|idx| idx.id.starts_with(key));
                let first = matches.next()?;
                matches.next().is_none().then_some(first)
            })
    }
}

/// Shortest prefix of `id` shared by exactly one of `indices`
///
/// Prefix lengths from [`MIN_ID_PREFIX`] up to [`MAX_ID_PREFIX`] are tried in
/// order; when none is unique the full id is returned.
#[must_use]
pub fn id_prefix(indices: &[IndexInfo], id: &str) -> String {
    for len in MIN_ID_PREFIX..MAX_ID_PREFIX {
        let prefix = truncate(id, len);
        let sharing = indices
            .iter()
            .filter(|idx| truncate(&idx.id, len) == prefix)
            .count();

        if sharing == 1 {
            return prefix.to_string();
        }
    }

    id.to_string()
}

/// Rebuild index descriptors with their id prefixes filled in
#[must_use]
pub fn with_id_prefixes(indices: &[IndexInfo]) -> Vec<IndexInfo> {
    indices
        .iter()
        .map(|idx| IndexInfo {
            id: idx.id.clone(),
            name: idx.name.clone(),
            version: idx.version.clone(),
            timestamp: idx.timestamp,
            id_prefix: id_prefix(indices, &idx.id),
        })
        .collect()
}

fn truncate(s: &str, chars: usize) -> &str {
    s.char_indices().nth(chars).map_or(s, |(i, _)| &s[..i])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index(id: &str, name: &str) -> IndexInfo {
        IndexInfo {
            id: id.to_string(),
            name: name.to_string(),
            ..IndexInfo::default()
        }
    }

    #[test]
    fn test_single_index_uses_minimum_prefix() {
        let indices = vec![index("0123456789abcdef", "docs")];
        assert_eq!(id_prefix(&indices, "0123456789abcdef"), "0123");
    }

    #[test]
    fn test_prefix_grows_until_unique() {
        let indices = vec![index("abcdef01", "a"), index("abcdef02", "b"), index("ffff0000", "c")];

        assert_eq!(id_prefix(&indices, "abcdef01"), "abcdef01");
        assert_eq!(id_prefix(&indices, "abcdef02"), "abcdef02");
        assert_eq!(id_prefix(&indices, "ffff0000"), "ffff");
    }

    #[test]
    fn test_duplicate_ids_fall_back_to_full_id() {
        let indices = vec![index("samesame", "a"), index("samesame", "b")];
        assert_eq!(id_prefix(&indices, "samesame"), "samesame");
    }

    #[test]
    fn test_short_ids() {
        let indices = vec![index("ab", "a"), index("abc", "b")];
        assert_eq!(id_prefix(&indices, "ab"), "ab");
        assert_eq!(id_prefix(&indices, "abc"), "abc");
    }

    #[test]
    fn test_with_id_prefixes() {
        let indices = vec![index("aaaa1111", "a"), index("bbbb2222", "b")];
        let rebuilt = with_id_prefixes(&indices);

        assert_eq!(rebuilt[0].id_prefix, "aaaa");
        assert_eq!(rebuilt[1].id_prefix, "bbbb");

        let value = serde_json::to_value(&rebuilt[0]).unwrap();
        assert_eq!(value["idPrefix"], serde_json::json!("aaaa"));
        assert_eq!(rebuilt[1].name, "b");
    }

    #[test]
    fn test_server_info_keeps_extra_fields() {
        let info: ServerInfo = serde_json::from_value(serde_json::json!({
            "indices": [{"id": "x", "name": "n", "version": "3.0", "timestamp": 5, "root": "/data"}],
            "esIndex": "docs",
            "lang": "en"
        }))
        .unwrap();

        assert_eq!(info.indices.len(), 1);
        assert_eq!(info.extra.get("esIndex"), Some(&serde_json::json!("docs")));
        assert!(!info.extra.contains_key("indices"));
    }

    #[test]
    fn test_find_index() {
        let info = ServerInfo {
            indices: vec![index("aaaa1111", "photos"), index("aaab2222", "music")],
            extra: Map::new(),
        };

        assert_eq!(info.find_index("photos").unwrap().id, "aaaa1111");
        assert_eq!(info.find_index("aaab").unwrap().name, "music");
        assert!(info.find_index("aaa").is_none());
        assert!(info.find_index("zzz").is_none());
    }
}
