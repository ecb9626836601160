//! Exploratory statistics over the clean dataset.
//!
//! Everything here is computed once per run and shared by the console report,
//! the JSON report and the charts.

use std::collections::BTreeMap;
use std::time::Instant;

use inc_model::{CleanDataset, NumericColumn};
use inc_stats::{CorrelationMatrix, Describe, ValueCount, group_mean, value_counts};
use serde::Serialize;
use tracing::info;

/// Columns summarized by `describe`.
pub const DESCRIBE_COLUMNS: &[NumericColumn] = &[
    NumericColumn::GrowthPct,
    NumericColumn::RevenueClean,
    NumericColumn::Workers,
    NumericColumn::RevenuePerWorker,
];

/// Columns of the reported correlation matrix and dashboard heatmap.
pub const CORRELATION_COLUMNS: &[NumericColumn] = &[
    NumericColumn::RevenueClean,
    NumericColumn::Workers,
    NumericColumn::GrowthPct,
    NumericColumn::RevenuePerWorker,
];

/// Columns of the lower-triangle correlation heatmap.
pub const MASKED_CORRELATION_COLUMNS: &[NumericColumn] = &[
    NumericColumn::GrowthPct,
    NumericColumn::RevenueClean,
    NumericColumn::Workers,
    NumericColumn::RevenuePerWorker,
    NumericColumn::WorkerGrowth,
];

/// Columns of the pair plot.
pub const PAIRPLOT_COLUMNS: &[NumericColumn] = &[
    NumericColumn::GrowthPct,
    NumericColumn::RevenueClean,
    NumericColumn::Workers,
    NumericColumn::RevenuePerWorker,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportOptions {
    /// How many industries and states to list.
    pub top_n: usize,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self { top_n: 10 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MissingCount {
    pub column: &'static str,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnSummary {
    pub column: &'static str,
    /// `None` when the column has no values.
    pub stats: Option<Describe>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub shape: (usize, usize),
    pub columns: Vec<&'static str>,
    pub missing: Vec<MissingCount>,
    pub describe: Vec<ColumnSummary>,
    /// All industries, most frequent first.
    pub industry_counts: Vec<ValueCount>,
    /// All states, most frequent first.
    pub state_counts: Vec<ValueCount>,
    pub growth_by_founded: BTreeMap<i32, f64>,
    pub correlation: CorrelationMatrix,
    pub top_n: usize,
}

impl Analysis {
    pub fn compute(dataset: &CleanDataset, options: &ReportOptions) -> Self {
        let start = Instant::now();
        let analysis = Self {
            shape: dataset.shape(),
            columns: dataset.columns().iter().map(|column| column.name()).collect(),
            missing: dataset
                .missing_counts()
                .into_iter()
                .map(|(column, count)| MissingCount {
                    column: column.name(),
                    count,
                })
                .collect(),
            describe: DESCRIBE_COLUMNS
                .iter()
                .map(|&column| ColumnSummary {
                    column: column.name(),
                    stats: Describe::new(dataset.values(column)),
                })
                .collect(),
            industry_counts: value_counts(dataset.industries()),
            state_counts: value_counts(dataset.states()),
            growth_by_founded: growth_by_founded(dataset),
            correlation: correlation_matrix(dataset, CORRELATION_COLUMNS),
            top_n: options.top_n,
        };
        info!(
            rows = analysis.shape.0,
            industries = analysis.industry_counts.len(),
            states = analysis.state_counts.len(),
            duration_ms = start.elapsed().as_millis(),
            "analysis complete"
        );
        analysis
    }

    pub fn top_industries(&self) -> &[ValueCount] {
        top(&self.industry_counts, self.top_n)
    }

    pub fn top_states(&self) -> &[ValueCount] {
        top(&self.state_counts, self.top_n)
    }
}

fn top(counts: &[ValueCount], n: usize) -> &[ValueCount] {
    &counts[..counts.len().min(n)]
}

/// Mean `growth_%` for each founding year.
fn growth_by_founded(dataset: &CleanDataset) -> BTreeMap<i32, f64> {
    group_mean(
        dataset
            .records()
            .iter()
            .filter_map(|record| Some((record.founded, record.growth_pct?))),
    )
}

pub fn correlation_matrix(dataset: &CleanDataset, columns: &[NumericColumn]) -> CorrelationMatrix {
    let columns: Vec<(&str, Vec<Option<f64>>)> = columns
        .iter()
        .map(|&column| (column.name(), dataset.column(column)))
        .collect();
    CorrelationMatrix::new(&columns)
}
