//! Mapping of CSV rows onto typed [`RawRecord`]s.

use std::path::Path;
use std::time::Instant;

use inc_model::{Column, RawRecord};
use tracing::{debug, info, warn};

use crate::csv_table::{CsvTable, profile_columns, read_csv_table};
use crate::error::{IngestError, Result};

/// Header positions of the known source columns.
#[derive(Debug, Clone, Copy)]
pub struct SourceColumns {
    pub revenue: usize,
    pub workers: usize,
    pub previous_workers: usize,
    pub founded: usize,
    pub growth_pct: usize,
    pub industry: usize,
    pub state: usize,
    pub rank: Option<usize>,
    pub name: Option<usize>,
    pub city: Option<usize>,
    pub metro: Option<usize>,
}

impl SourceColumns {
    /// Resolve every required column, collecting all that are missing.
    pub fn resolve(table: &CsvTable, path: &Path) -> Result<Self> {
        let mut missing = Vec::new();
        let mut required = |column: Column| {
            let index = table.column_index(column.name());
            if index.is_none() {
                missing.push(column.name().to_string());
            }
            index.unwrap_or_default()
        };
        let revenue = required(Column::Revenue);
        let workers = required(Column::Workers);
        let previous_workers = required(Column::PreviousWorkers);
        let founded = required(Column::Founded);
        let growth_pct = required(Column::GrowthPct);
        let industry = required(Column::Industry);
        let state = required(Column::State);
        if !missing.is_empty() {
            return Err(IngestError::MissingColumns {
                path: path.to_path_buf(),
                columns: missing,
            });
        }
        Ok(Self {
            revenue,
            workers,
            previous_workers,
            founded,
            growth_pct,
            industry,
            state,
            rank: table.column_index(Column::Rank.name()),
            name: table.column_index(Column::Name.name()),
            city: table.column_index(Column::City.name()),
            metro: table.column_index(Column::Metro.name()),
        })
    }
}

/// Parses a string as f64, returning None for invalid, empty or non-finite strings.
pub fn parse_f64(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parses a whole-number year, accepting float spellings such as `"2004.0"`.
///
/// A fractional year such as `"2004.5"` is not a year and reads as invalid.
pub fn parse_year(value: &str) -> Option<i32> {
    let number = parse_f64(value)?;
    if number.fract() != 0.0 || number < f64::from(i32::MIN) || number > f64::from(i32::MAX) {
        return None;
    }
    Some(number as i32)
}

fn parse_rank(value: &str) -> Option<u32> {
    let number = parse_f64(value)?;
    if number.fract() != 0.0 || number < 0.0 || number > f64::from(u32::MAX) {
        return None;
    }
    Some(number as u32)
}

fn text(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Counts cells that held text but could not be read as a number.
#[derive(Debug, Default)]
struct InvalidCells {
    workers: usize,
    previous_workers: usize,
    founded: usize,
    growth_pct: usize,
}

fn numeric_cell<T>(value: &str, parse: fn(&str) -> Option<T>, invalid: &mut usize) -> Option<T> {
    let parsed = parse(value);
    if parsed.is_none() && !value.is_empty() {
        *invalid += 1;
    }
    parsed
}

/// Convert a loaded table into raw records.
///
/// Non-numeric text in a numeric column becomes `None`; only missing
/// required columns are fatal.
pub fn raw_records_from_table(table: &CsvTable, path: &Path) -> Result<Vec<RawRecord>> {
    let columns = SourceColumns::resolve(table, path)?;
    let optional = |index: Option<usize>, row: usize| index.and_then(|col| text(table.cell(row, col)));
    let mut invalid = InvalidCells::default();
    let mut records = Vec::with_capacity(table.rows.len());
    for row in 0..table.rows.len() {
        let cell = |col: usize| table.cell(row, col);
        records.push(RawRecord {
            rank: columns
                .rank
                .and_then(|col| parse_rank(table.cell(row, col))),
            name: optional(columns.name, row),
            city: optional(columns.city, row),
            metro: optional(columns.metro, row),
            revenue: text(cell(columns.revenue)),
            workers: numeric_cell(cell(columns.workers), parse_f64, &mut invalid.workers),
            previous_workers: numeric_cell(
                cell(columns.previous_workers),
                parse_f64,
                &mut invalid.previous_workers,
            ),
            founded: numeric_cell(cell(columns.founded), parse_year, &mut invalid.founded),
            growth_pct: numeric_cell(cell(columns.growth_pct), parse_f64, &mut invalid.growth_pct),
            industry: text(cell(columns.industry)),
            state: text(cell(columns.state)),
        });
    }
    for (column, count) in [
        (Column::Workers, invalid.workers),
        (Column::PreviousWorkers, invalid.previous_workers),
        (Column::Founded, invalid.founded),
        (Column::GrowthPct, invalid.growth_pct),
    ] {
        if count > 0 {
            warn!(column = %column, count, "non-numeric values treated as missing");
        }
    }
    Ok(records)
}

/// Load the source CSV into raw records.
pub fn load_raw_records(path: &Path) -> Result<Vec<RawRecord>> {
    let start = Instant::now();
    let table = read_csv_table(path)?;
    for profile in profile_columns(&table) {
        debug!(
            column = %profile.name,
            non_empty = profile.non_empty,
            numeric = profile.is_numeric(),
            null_ratio = profile.null_ratio(table.rows.len()),
            "source column"
        );
    }
    let records = raw_records_from_table(&table, path)?;
    info!(
        path = %path.display(),
        rows = records.len(),
        columns = table.headers.len(),
        duration_ms = start.elapsed().as_millis(),
        "loaded source table"
    );
    Ok(records)
}
