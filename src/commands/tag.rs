//! Tag command - add or remove user tags on a document

use super::Result;
use crate::DocseekError;
use crate::api::{Backend, SearchApi};
use crate::cli::TagCommands;
use crate::hit::Hit;
use crate::tags::format_user_tag;

/// Execute the tag command
///
/// # Errors
/// Returns an error if the document cannot be found, the tag is invalid, or
/// the backend rejects the change
pub fn execute<B: Backend>(
    api: &SearchApi<B>,
    command: &TagCommands,
    default_color: &str,
    quiet: bool,
) -> Result<()> {
    match command {
        TagCommands::Add { doc_id, name, color } => {
            let stored = format_user_tag(name, color.as_deref().unwrap_or(default_color))?;
            let hit = api.get_hit(doc_id)?;

            if hit.source.tag.contains(&stored) {
                if !quiet {
                    println!("{} is already tagged '{name}'", hit.full_path());
                }
                return Ok(());
            }

            api.save_tag(&stored, &hit)?;
            if !quiet {
                println!("Tagged {} with '{name}'", hit.full_path());
            }
        }
        TagCommands::Remove { doc_id, tag } => {
            let hit = api.get_hit(doc_id)?;
            let stored = resolve_stored_tag(&hit, tag).ok_or_else(|| {
                DocseekError::InvalidInput(format!("Document {doc_id} has no tag '{tag}'"))
            })?;

            api.delete_tag(&stored, &hit)?;
            if !quiet {
                println!("Removed '{tag}' from {}", hit.full_path());
            }
        }
    }
    Ok(())
}

/// Find the stored form of a user tag on a hit
///
/// Matches either the stored form (`name.#rrggbb`) or just the name.
#[must_use]
pub fn resolve_stored_tag(hit: &Hit, input: &str) -> Option<String> {
    let user_tags = || hit.tags.iter().filter(|tag| tag.user_tag);

    user_tags()
        .find(|tag| tag.raw_text == input)
        .or_else(|| user_tags().find(|tag| tag.text == input))
        .map(|tag| tag.raw_text.clone())
}
