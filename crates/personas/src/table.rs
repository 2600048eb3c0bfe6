//! Raw tabular persona source: a header row plus string cells.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use planner_core::{PlannerError, PlannerResult};

/// An uploaded or bundled persona table, before normalization. Cells are
/// kept as strings; all typing happens in [`crate::normalize`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonaTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl PersonaTable {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    /// Reads a comma-separated table with a header row. Cell bytes are
    /// converted lossily so non-UTF-8 sequences degrade to replacement
    /// characters instead of aborting the upload.
    pub fn from_reader<R: Read>(reader: R) -> PlannerResult<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let headers = csv_reader
            .byte_headers()?
            .iter()
            .map(|h| String::from_utf8_lossy(h).trim().trim_start_matches('\u{feff}').to_string())
            .collect::<Vec<_>>();

        let mut rows = Vec::new();
        for record in csv_reader.byte_records() {
            let record = record?;
            rows.push(
                record
                    .iter()
                    .map(|cell| String::from_utf8_lossy(cell).trim().to_string())
                    .collect(),
            );
        }

        tracing::debug!(columns = headers.len(), rows = rows.len(), "persona table parsed");
        Ok(Self { headers, rows })
    }

    pub fn from_path(path: impl AsRef<Path>) -> PlannerResult<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            PlannerError::PersonaSource(format!("cannot open {}: {}", path.display(), e))
        })?;
        Self::from_reader(file)
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Index of the first header matching any candidate, in candidate order.
    pub fn find_column(&self, candidates: &[&str]) -> Option<usize> {
        for candidate in candidates {
            if let Some(idx) = self.headers.iter().position(|h| h == candidate) {
                return Some(idx);
            }
        }
        None
    }

    /// Cell content, `None` when the row is short or the cell is blank.
    pub fn cell<'a>(&'a self, row: &'a [String], column: usize) -> Option<&'a str> {
        row.get(column).map(|s| s.as_str()).filter(|s| !s.is_empty())
    }
}
