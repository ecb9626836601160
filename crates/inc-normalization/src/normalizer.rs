use std::collections::BTreeMap;
use std::time::Instant;

use inc_model::{
    CleanDataset, CleanRecord, DropReason, NormalizationOptions, NormalizedRecord, RawRecord,
    RevenuePolicy,
};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::derived::{revenue_per_worker, worker_growth};
use crate::error::NormalizeError;
use crate::missing::{founded_year, impute_workers, workers_median};
use crate::revenue::parse_revenue;

/// Counts describing what normalization did to the table.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NormalizationSummary {
    pub input_rows: usize,
    pub kept_rows: usize,
    pub dropped: BTreeMap<DropReason, usize>,
    /// Median substituted for missing worker counts.
    pub workers_median: Option<f64>,
    pub workers_imputed: usize,
    pub founded_unknown: usize,
    /// Revenue text with no recognized magnitude suffix.
    pub revenue_unrecognized: usize,
    /// Revenue text with a suffix that failed to parse (lenient policy only).
    pub revenue_errors: usize,
}

impl NormalizationSummary {
    pub fn dropped_rows(&self) -> usize {
        self.dropped.values().sum()
    }
}

#[derive(Debug, Clone)]
pub struct Normalized {
    pub dataset: CleanDataset,
    pub summary: NormalizationSummary,
}

/// Run missing-value substitution and derived-column computation on every row.
///
/// No row is dropped here. Rows are numbered from 1 in errors and logs.
pub fn normalize_records(
    records: &[RawRecord],
    options: &NormalizationOptions,
    summary: &mut NormalizationSummary,
) -> Result<Vec<NormalizedRecord>, NormalizeError> {
    let median = workers_median(records);
    summary.input_rows = records.len();
    summary.workers_median = median;
    debug!(median = ?median, "workers median");

    let mut normalized = Vec::with_capacity(records.len());
    for (index, raw) in records.iter().enumerate() {
        let row = index + 1;
        let revenue_clean = match parse_revenue(raw.revenue.as_deref()) {
            Ok(Some(value)) => Some(value),
            Ok(None) => {
                if raw.revenue.as_deref().is_some_and(|text| !text.trim().is_empty()) {
                    summary.revenue_unrecognized += 1;
                }
                None
            }
            Err(source) => match options.revenue_policy {
                RevenuePolicy::Strict => return Err(NormalizeError::Revenue { row, source }),
                RevenuePolicy::Lenient => {
                    if options.warn_on_recovery {
                        warn!(row, error = %source, "unparseable revenue treated as missing");
                    }
                    summary.revenue_errors += 1;
                    None
                }
            },
        };
        if raw.workers.is_none() && median.is_some() {
            summary.workers_imputed += 1;
        }
        let workers = impute_workers(raw.workers, median);
        let founded = founded_year(raw.founded);
        if raw.founded.is_some() && founded.is_none() {
            summary.founded_unknown += 1;
        }
        normalized.push(NormalizedRecord {
            source: raw.clone(),
            workers,
            founded,
            revenue_clean,
            revenue_per_worker: revenue_per_worker(revenue_clean, workers),
            worker_growth: worker_growth(workers, raw.previous_workers),
        });
    }
    Ok(normalized)
}

/// Keep only records that carry both `revenue_clean` and `founded`.
pub fn drop_incomplete(
    records: Vec<NormalizedRecord>,
    summary: &mut NormalizationSummary,
) -> CleanDataset {
    let mut kept = Vec::with_capacity(records.len());
    for (index, record) in records.into_iter().enumerate() {
        match CleanRecord::try_from(record) {
            Ok(clean) => kept.push(clean),
            Err(reason) => {
                debug!(row = index + 1, %reason, "dropped row");
                *summary.dropped.entry(reason).or_default() += 1;
            }
        }
    }
    summary.kept_rows = kept.len();
    CleanDataset::new(kept)
}

/// Normalize a raw table into the clean dataset.
pub fn normalize(
    records: &[RawRecord],
    options: &NormalizationOptions,
) -> Result<Normalized, NormalizeError> {
    let start = Instant::now();
    let mut summary = NormalizationSummary::default();
    let normalized = normalize_records(records, options, &mut summary)?;
    let dataset = drop_incomplete(normalized, &mut summary);
    info!(
        input_rows = summary.input_rows,
        kept_rows = summary.kept_rows,
        dropped_rows = summary.dropped_rows(),
        workers_imputed = summary.workers_imputed,
        revenue_errors = summary.revenue_errors,
        duration_ms = start.elapsed().as_millis(),
        "normalization complete"
    );
    Ok(Normalized { dataset, summary })
}
