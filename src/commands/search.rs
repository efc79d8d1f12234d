//! Search command - run a query and print normalized hits

use super::{Result, resolve_indices};
use crate::DocseekError;
use crate::api::{Backend, SearchApi};
use crate::cli::Commands;
use crate::hit::Hit;
use crate::output;
use colored::Colorize;

/// Execute the search command
///
/// # Errors
/// Returns an error if index filters cannot be resolved or the search fails
pub fn execute<B: Backend>(
    api: &SearchApi<B>,
    command: &Commands,
    page_size: usize,
    quiet: bool,
) -> Result<()> {
    let Commands::Search {
        indices,
        details,
        json,
        ..
    } = command
    else {
        return Err(DocseekError::InvalidInput("Expected a search command".into()));
    };

    let index_ids = resolve_indices(api, indices)?;
    let query = command
        .get_search_query(index_ids, page_size)
        .ok_or_else(|| DocseekError::InvalidInput("Failed to build search query".into()))?;

    let result = api.search(&query)?;

    if *json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    if result.hits.hits.is_empty() {
        if !quiet {
            println!("No documents found.");
        }
        return Ok(());
    }

    if !quiet {
        println!(
            "Showing {} of {} document(s) ({} ms):",
            result.hits.hits.len(),
            result.hits.total.value,
            result.took
        );
    }

    for hit in &result.hits.hits {
        println!("{}", output::hit_line(hit, quiet));
        if *details && !quiet {
            print_details(hit);
        }
    }

    Ok(())
}

fn print_details(hit: &Hit) {
    let flags = output::hit_flags(hit);
    if !flags.is_empty() {
        println!("      {}", flags.join(", ").cyan());
    }
    if let (Some(w), Some(h)) = (hit.props.tn_w, hit.props.tn_h) {
        println!("      thumbnail {w}x{h}");
    }
    if let Some(mtime) = hit.source.mtime {
        println!("      modified {}", output::format_timestamp(mtime));
    }

    let fragments = hit
        .highlight
        .name
        .iter()
        .chain(hit.highlight.content.iter())
        .flatten();
    for fragment in fragments {
        println!("      … {}", output::highlight_fragment(fragment));
    }
}
