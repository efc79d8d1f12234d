//! Command implementations
//!
//! Each command is a module with an execute function that takes parsed CLI
//! args and runs the operation against the search backend or the
//! configuration.

pub mod doc;
pub mod info;
pub mod mimes;
pub mod search;
pub mod server;
pub mod settings;
pub mod stats;
pub mod tag;
pub mod tags;

// Re-export execute functions for convenience
pub use doc::execute as doc;
pub use info::execute as info;
pub use mimes::execute as mimes;
pub use search::execute as search;
pub use server::execute as server;
pub use settings::execute as settings;
pub use stats::execute as stats;
pub use tag::execute as tag;
pub use tags::execute as tags;

use crate::DocseekError;
use crate::api::{Backend, SearchApi};
use crate::index::ServerInfo;

type Result<T> = std::result::Result<T, DocseekError>;

/// Resolve index ids, id prefixes or names to index ids
///
/// # Errors
/// Returns `DocseekError::InvalidInput` if a key matches no index, or an API
/// error if the server info cannot be fetched.
pub fn resolve_indices<B: Backend>(api: &SearchApi<B>, keys: &[String]) -> Result<Vec<String>> {
    if keys.is_empty() {
        return Ok(Vec::new());
    }

    let info = api.get_info()?;
    keys.iter().map(|key| resolve_in(&info, key)).collect()
}

/// Resolve a single index key to its id
///
/// # Errors
/// See [`resolve_indices`].
pub fn resolve_index<B: Backend>(api: &SearchApi<B>, key: &str) -> Result<String> {
    resolve_in(&api.get_info()?, key)
}

fn resolve_in(info: &ServerInfo, key: &str) -> Result<String> {
    info.find_index(key)
        .map(|idx| idx.id.clone())
        .ok_or_else(|| DocseekError::InvalidInput(format!("No index matches '{key}'")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockBackend;
    use serde_json::json;

    fn api() -> SearchApi<MockBackend> {
        SearchApi::with_backend(MockBackend::new().on_get(
            "i",
            json!({"indices": [
                {"id": "aaaa1111", "name": "photos"},
                {"id": "bbbb2222", "name": "music"}
            ]}),
        ))
    }

    #[test]
    fn test_resolve_by_name_and_prefix() {
        let ids = resolve_indices(&api(), &["photos".into(), "bbbb".into()]).unwrap();
        assert_eq!(ids, vec!["aaaa1111", "bbbb2222"]);
    }

    #[test]
    fn test_resolve_empty_skips_request() {
        let api = api();
        assert!(resolve_indices(&api, &[]).unwrap().is_empty());
        assert!(api.backend().requests().is_empty());
    }

    #[test]
    fn test_resolve_unknown() {
        assert!(matches!(
            resolve_index(&api(), "video"),
            Err(DocseekError::InvalidInput(_))
        ));
    }
}
