use std::path::Path;

use csv::ReaderBuilder;

use crate::error::{IngestError, Result};

/// A CSV file held as trimmed text cells, header row split off.
#[derive(Debug, Clone)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl CsvTable {
    /// Case-insensitive header lookup.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers
            .iter()
            .position(|header| header.eq_ignore_ascii_case(name))
    }

    pub fn cell(&self, row: usize, column: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|values| values.get(column))
            .map_or("", String::as_str)
    }
}

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Read a CSV file whose first non-blank row is the header.
///
/// Blank rows are skipped and short rows are padded with empty cells so that
/// every row has one cell per header.
pub fn read_csv_table(path: &Path) -> Result<CsvTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|source| IngestError::Open {
            path: path.to_path_buf(),
            source,
        })?;
    let mut headers: Option<Vec<String>> = None;
    let mut rows = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let record = record.map_err(|source| IngestError::Read {
            path: path.to_path_buf(),
            record: index + 1,
            source,
        })?;
        if record.iter().all(|value| value.trim().is_empty()) {
            continue;
        }
        match &headers {
            None => headers = Some(record.iter().map(normalize_header).collect()),
            Some(headers) => {
                let mut row = Vec::with_capacity(headers.len());
                for idx in 0..headers.len() {
                    row.push(normalize_cell(record.get(idx).unwrap_or("")));
                }
                rows.push(row);
            }
        }
    }
    let headers = headers.ok_or_else(|| IngestError::Empty {
        path: path.to_path_buf(),
    })?;
    Ok(CsvTable { headers, rows })
}

/// Fill and type counts for one source column.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnProfile {
    pub name: String,
    pub non_empty: usize,
    pub numeric: usize,
}

impl ColumnProfile {
    pub fn is_numeric(&self) -> bool {
        self.non_empty > 0 && self.numeric == self.non_empty
    }

    pub fn null_ratio(&self, row_count: usize) -> f64 {
        if row_count == 0 {
            1.0
        } else {
            row_count.saturating_sub(self.non_empty) as f64 / row_count as f64
        }
    }
}

pub fn profile_columns(table: &CsvTable) -> Vec<ColumnProfile> {
    table
        .headers
        .iter()
        .enumerate()
        .map(|(col_idx, header)| {
            let mut non_empty = 0usize;
            let mut numeric = 0usize;
            for row in &table.rows {
                let value = row.get(col_idx).map_or("", String::as_str).trim();
                if value.is_empty() {
                    continue;
                }
                non_empty += 1;
                if value.parse::<f64>().is_ok() {
                    numeric += 1;
                }
            }
            ColumnProfile {
                name: header.clone(),
                non_empty,
                numeric,
            }
        })
        .collect()
}
