//! Missing-value policy.

use inc_model::RawRecord;

/// Founding year used in the source data to mean "unknown".
pub const FOUNDED_UNKNOWN: i32 = 0;

/// Median of every present `workers` value, taken over the whole table before
/// any row is dropped.
pub fn workers_median(records: &[RawRecord]) -> Option<f64> {
    let values: Vec<f64> = records.iter().filter_map(|record| record.workers).collect();
    inc_stats::median(&values)
}

/// Substitute `median` for a missing worker count.
pub fn impute_workers(workers: Option<f64>, median: Option<f64>) -> Option<f64> {
    workers.or(median)
}

/// Remap the unknown-year sentinel to `None`.
pub fn founded_year(founded: Option<i32>) -> Option<i32> {
    founded.filter(|&year| year != FOUNDED_UNKNOWN)
}
