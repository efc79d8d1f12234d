//! Stats command - index statistics exports

use super::{Result, resolve_index};
use crate::api::{Backend, SearchApi};
use crate::output;
use crate::stats::{CsvTable, StatsKind};

/// Execute the stats command
///
/// # Errors
/// Returns an error if the index cannot be resolved or the export cannot be
/// fetched or parsed
pub fn execute<B: Backend>(
    api: &SearchApi<B>,
    index: &str,
    kind: StatsKind,
    url_only: bool,
    quiet: bool,
) -> Result<()> {
    let index_id = resolve_index(api, index)?;

    if url_only {
        println!("{}", api.stats_url(&index_id, kind));
        return Ok(());
    }

    let table = api.fetch_stats(&index_id, kind)?;
    for line in table_output(&table, quiet) {
        println!("{line}");
    }
    Ok(())
}

/// Lines printed for an export; an empty export only gets a notice when not quiet
fn table_output(table: &CsvTable, quiet: bool) -> Vec<String> {
    if table.is_empty() {
        return if quiet {
            Vec::new()
        } else {
            vec!["No data.".to_string()]
        };
    }
    output::table_lines(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockBackend;
    use serde_json::json;

    fn empty_table() -> CsvTable {
        CsvTable::parse("mime,count\n").unwrap()
    }

    #[test]
    fn test_empty_export_quiet_prints_nothing() {
        assert!(table_output(&empty_table(), true).is_empty());
    }

    #[test]
    fn test_empty_export_notice() {
        assert_eq!(table_output(&empty_table(), false), vec!["No data."]);
    }

    #[test]
    fn test_export_rows_printed_in_quiet_mode() {
        let table = CsvTable::parse("mime,count\nimage/png,4\n").unwrap();
        assert!(!table_output(&table, true).is_empty());
    }

    #[test]
    fn test_execute_fetches_resolved_index() {
        let mock = MockBackend::new()
            .on_get("i", json!({"indices": [{"id": "aaaa1111", "name": "photos"}]}))
            .on_get_text("s/aaaa1111/2", "mime,count\n");
        let api = SearchApi::with_backend(mock);

        execute(&api, "photos", StatsKind::Mime, false, true).unwrap();
        assert_eq!(api.backend().last_request().unwrap().path, "s/aaaa1111/2");
    }
}
