//! Column names of the source and clean tables.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A column of the clean table, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Column {
    Rank,
    Name,
    State,
    City,
    Metro,
    Industry,
    Revenue,
    GrowthPct,
    Workers,
    PreviousWorkers,
    Founded,
    RevenueClean,
    RevenuePerWorker,
    WorkerGrowth,
}

/// Every clean-table column in the order it is exported and reported.
pub const CLEAN_COLUMNS: &[Column] = &[
    Column::Rank,
    Column::Name,
    Column::State,
    Column::City,
    Column::Metro,
    Column::Industry,
    Column::Revenue,
    Column::GrowthPct,
    Column::Workers,
    Column::PreviousWorkers,
    Column::Founded,
    Column::RevenueClean,
    Column::RevenuePerWorker,
    Column::WorkerGrowth,
];

impl Column {
    /// Header name as it appears in the source file or export.
    pub fn name(self) -> &'static str {
        match self {
            Self::Rank => "rank",
            Self::Name => "name",
            Self::State => "state",
            Self::City => "city",
            Self::Metro => "metro",
            Self::Industry => "industry",
            Self::Revenue => "revenue",
            Self::GrowthPct => "growth_%",
            Self::Workers => "workers",
            Self::PreviousWorkers => "previous_workers",
            Self::Founded => "founded",
            Self::RevenueClean => "revenue_clean",
            Self::RevenuePerWorker => "revenue_per_worker",
            Self::WorkerGrowth => "worker_growth",
        }
    }

    /// Columns the source file must provide.
    pub fn required_source() -> &'static [Column] {
        &[
            Self::Revenue,
            Self::Workers,
            Self::PreviousWorkers,
            Self::Founded,
            Self::GrowthPct,
            Self::Industry,
            Self::State,
        ]
    }

    /// Columns read from the source file when present.
    pub fn optional_source() -> &'static [Column] {
        &[Self::Rank, Self::Name, Self::City, Self::Metro]
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Numeric columns of the clean table used by statistics and charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NumericColumn {
    GrowthPct,
    RevenueClean,
    Workers,
    PreviousWorkers,
    Founded,
    RevenuePerWorker,
    WorkerGrowth,
}

impl NumericColumn {
    pub fn column(self) -> Column {
        match self {
            Self::GrowthPct => Column::GrowthPct,
            Self::RevenueClean => Column::RevenueClean,
            Self::Workers => Column::Workers,
            Self::PreviousWorkers => Column::PreviousWorkers,
            Self::Founded => Column::Founded,
            Self::RevenuePerWorker => Column::RevenuePerWorker,
            Self::WorkerGrowth => Column::WorkerGrowth,
        }
    }

    pub fn name(self) -> &'static str {
        self.column().name()
    }
}

impl fmt::Display for NumericColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
