use crate::column::{CLEAN_COLUMNS, Column, NumericColumn};
use crate::record::CleanRecord;

/// The cleaned collection consumed read-only by reporting and charting.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CleanDataset {
    records: Vec<CleanRecord>,
}

impl CleanDataset {
    pub fn new(records: Vec<CleanRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[CleanRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Rows by columns of the clean table.
    pub fn shape(&self) -> (usize, usize) {
        (self.records.len(), CLEAN_COLUMNS.len())
    }

    pub fn columns(&self) -> &'static [Column] {
        CLEAN_COLUMNS
    }

    /// Missing-value count for every clean column, in column order.
    pub fn missing_counts(&self) -> Vec<(Column, usize)> {
        CLEAN_COLUMNS
            .iter()
            .map(|&column| {
                let count = self
                    .records
                    .iter()
                    .filter(|record| record.is_missing(column))
                    .count();
                (column, count)
            })
            .collect()
    }

    /// Defined values of a numeric column, in row order.
    pub fn values(&self, column: NumericColumn) -> Vec<f64> {
        self.records
            .iter()
            .filter_map(|record| record.numeric(column))
            .collect()
    }

    /// Rows where both columns are defined, as `(x, y)` pairs.
    pub fn pairs(&self, x: NumericColumn, y: NumericColumn) -> Vec<(f64, f64)> {
        self.records
            .iter()
            .filter_map(|record| Some((record.numeric(x)?, record.numeric(y)?)))
            .collect()
    }

    /// Raw column values with `None` preserved, for pairwise statistics.
    pub fn column(&self, column: NumericColumn) -> Vec<Option<f64>> {
        self.records
            .iter()
            .map(|record| record.numeric(column))
            .collect()
    }

    pub fn industries(&self) -> impl Iterator<Item = &str> {
        self.records
            .iter()
            .filter_map(|record| non_blank(record.industry.as_deref()))
    }

    pub fn states(&self) -> impl Iterator<Item = &str> {
        self.records
            .iter()
            .filter_map(|record| non_blank(record.state.as_deref()))
    }
}

impl<'a> IntoIterator for &'a CleanDataset {
    type Item = &'a CleanRecord;
    type IntoIter = std::slice::Iter<'a, CleanRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|text| !text.is_empty())
}
