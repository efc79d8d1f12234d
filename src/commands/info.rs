//! Info command - list the indices served by the backend

use super::Result;
use crate::api::{Backend, SearchApi};
use crate::output;

/// Execute the info command
///
/// # Errors
/// Returns an error if the server info cannot be fetched
pub fn execute<B: Backend>(api: &SearchApi<B>, quiet: bool) -> Result<()> {
    let info = api.get_info()?;

    if info.indices.is_empty() {
        if !quiet {
            println!("No indices found.");
        }
        return Ok(());
    }

    if !quiet {
        println!("Indices:");
    }
    for index in &info.indices {
        println!("{}", output::index_line(index, quiet));
    }

    Ok(())
}
