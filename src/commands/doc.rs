//! Doc command - print stored document metadata

use super::Result;
use crate::api::{Backend, SearchApi};

/// Execute the doc command
///
/// # Errors
/// Returns an error if the document cannot be fetched
pub fn execute<B: Backend>(api: &SearchApi<B>, doc_id: &str) -> Result<()> {
    let info = api.get_doc_info(doc_id)?;
    println!("{}", serde_json::to_string_pretty(&info)?);
    Ok(())
}
