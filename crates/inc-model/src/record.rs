//! Record types for each stage of the cleaning pipeline.
//!
//! A [`RawRecord`] is what ingestion reads from one CSV row. Normalization
//! turns it into a [`NormalizedRecord`] (every field optional, derived fields
//! computed), and only records that carry both a revenue and a founding year
//! become a [`CleanRecord`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::column::{Column, NumericColumn};

/// One row of the source table, before any cleaning.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    pub rank: Option<u32>,
    pub name: Option<String>,
    pub city: Option<String>,
    pub metro: Option<String>,
    /// Currency text such as `"$1.2 Billion"`.
    pub revenue: Option<String>,
    pub workers: Option<f64>,
    pub previous_workers: Option<f64>,
    /// Founding year; `0` means unknown in the source data.
    pub founded: Option<i32>,
    #[serde(rename = "growth_%")]
    pub growth_pct: Option<f64>,
    pub industry: Option<String>,
    pub state: Option<String>,
}

/// A record after missing-value substitution and derived-column computation,
/// before row dropping.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedRecord {
    pub source: RawRecord,
    /// Workers with the dataset median substituted for missing values.
    pub workers: Option<f64>,
    /// Founding year with the `0` sentinel removed.
    pub founded: Option<i32>,
    pub revenue_clean: Option<f64>,
    pub revenue_per_worker: Option<f64>,
    pub worker_growth: Option<f64>,
}

/// Why a normalized record did not make it into the clean dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Error, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DropReason {
    #[error("missing revenue")]
    MissingRevenue,
    #[error("missing founded year")]
    MissingFounded,
    #[error("missing revenue and founded year")]
    MissingRevenueAndFounded,
}

/// A cleaned row. `revenue_clean` and `founded` are always present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleanRecord {
    pub rank: Option<u32>,
    pub name: Option<String>,
    pub state: Option<String>,
    pub city: Option<String>,
    pub metro: Option<String>,
    pub industry: Option<String>,
    pub revenue: Option<String>,
    #[serde(rename = "growth_%")]
    pub growth_pct: Option<f64>,
    pub workers: Option<f64>,
    pub previous_workers: Option<f64>,
    pub founded: i32,
    pub revenue_clean: f64,
    pub revenue_per_worker: Option<f64>,
    pub worker_growth: Option<f64>,
}

impl TryFrom<NormalizedRecord> for CleanRecord {
    type Error = DropReason;

    fn try_from(record: NormalizedRecord) -> Result<Self, Self::Error> {
        let (revenue_clean, founded) = match (record.revenue_clean, record.founded) {
            (Some(revenue), Some(founded)) => (revenue, founded),
            (None, Some(_)) => return Err(DropReason::MissingRevenue),
            (Some(_), None) => return Err(DropReason::MissingFounded),
            (None, None) => return Err(DropReason::MissingRevenueAndFounded),
        };
        let source = record.source;
        Ok(Self {
            rank: source.rank,
            name: source.name,
            state: source.state,
            city: source.city,
            metro: source.metro,
            industry: source.industry,
            revenue: source.revenue,
            growth_pct: source.growth_pct,
            workers: record.workers,
            previous_workers: source.previous_workers,
            founded,
            revenue_clean,
            revenue_per_worker: record.revenue_per_worker,
            worker_growth: record.worker_growth,
        })
    }
}

impl CleanRecord {
    pub fn numeric(&self, column: NumericColumn) -> Option<f64> {
        match column {
            NumericColumn::GrowthPct => self.growth_pct,
            NumericColumn::RevenueClean => Some(self.revenue_clean),
            NumericColumn::Workers => self.workers,
            NumericColumn::PreviousWorkers => self.previous_workers,
            NumericColumn::Founded => Some(f64::from(self.founded)),
            NumericColumn::RevenuePerWorker => self.revenue_per_worker,
            NumericColumn::WorkerGrowth => self.worker_growth,
        }
    }

    /// True when the given column holds no value for this record.
    pub fn is_missing(&self, column: Column) -> bool {
        match column {
            Column::Rank => self.rank.is_none(),
            Column::Name => is_blank(self.name.as_deref()),
            Column::State => is_blank(self.state.as_deref()),
            Column::City => is_blank(self.city.as_deref()),
            Column::Metro => is_blank(self.metro.as_deref()),
            Column::Industry => is_blank(self.industry.as_deref()),
            Column::Revenue => is_blank(self.revenue.as_deref()),
            Column::GrowthPct => self.growth_pct.is_none(),
            Column::Workers => self.workers.is_none(),
            Column::PreviousWorkers => self.previous_workers.is_none(),
            Column::Founded | Column::RevenueClean => false,
            Column::RevenuePerWorker => self.revenue_per_worker.is_none(),
            Column::WorkerGrowth => self.worker_growth.is_none(),
        }
    }
}

fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|text| text.trim().is_empty())
}
