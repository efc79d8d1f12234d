//! Index statistics CSV exports

use crate::api::Result;
use clap::ValueEnum;
use serde::Serialize;

/// Statistics export available for an index
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatsKind {
    /// Disk usage by directory
    Treemap,
    /// Document count and size by MIME type
    Mime,
    /// Document count by size bucket
    Size,
    /// Document count by modification date
    Date,
}

impl StatsKind {
    /// Numeric export id used in the URL
    #[must_use]
    pub const fn id(self) -> u8 {
        match self {
            Self::Treemap => 1,
            Self::Mime => 2,
            Self::Size => 3,
            Self::Date => 4,
        }
    }

    /// Path of this export for an index, relative to the base URL
    #[must_use]
    pub fn path(self, index_id: &str) -> String {
        format!("s/{index_id}/{}", self.id())
    }
}

/// Parsed CSV export
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl CsvTable {
    /// Parse a CSV document with a header row
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Csv` if the document is not valid CSV.
    pub fn parse(text: &str) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(text.as_bytes());

        let headers = reader.headers()?.iter().map(String::from).collect();
        let rows = reader
            .records()
            .map(|record| record.map(|r| r.iter().map(String::from).collect()))
            .collect::<std::result::Result<Vec<Vec<String>>, csv::Error>>()?;

        Ok(Self { headers, rows })
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
