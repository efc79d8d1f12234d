//! Tags command - list user tags

use super::Result;
use crate::api::{Backend, SearchApi};
use crate::output;

/// Execute the tags command
///
/// # Errors
/// Returns an error if the aggregation query fails
pub fn execute<B: Backend>(api: &SearchApi<B>, json: bool, quiet: bool) -> Result<()> {
    let tags = api.get_tags()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&tags)?);
        return Ok(());
    }

    if tags.is_empty() {
        if !quiet {
            println!("No tags found.");
        }
        return Ok(());
    }

    if !quiet {
        println!("Tags:");
    }
    for tag in &tags {
        println!("{}", output::es_tag_line(tag, quiet));
    }
    Ok(())
}
