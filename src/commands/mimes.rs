//! Mimes command - MIME types present in the index

use super::Result;
use crate::api::{Backend, SearchApi};
use crate::output;

/// Execute the mimes command
///
/// # Errors
/// Returns an error if the aggregation query fails
pub fn execute<B: Backend>(api: &SearchApi<B>, json: bool, quiet: bool) -> Result<()> {
    let groups = api.get_mime_types()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&groups)?);
        return Ok(());
    }

    if groups.is_empty() {
        if !quiet {
            println!("No documents indexed.");
        }
        return Ok(());
    }

    for line in output::mime_tree_lines(&groups, quiet) {
        println!("{line}");
    }
    Ok(())
}
