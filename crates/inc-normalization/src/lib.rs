//! Field normalization for company records.
//!
//! The pipeline runs in a fixed order over the whole table:
//!
//! 1. parse `revenue` text into `revenue_clean`
//! 2. substitute the column median for missing `workers`
//! 3. remap the `founded == 0` sentinel to missing
//! 4. compute `revenue_per_worker` and `worker_growth`
//! 5. drop rows without `revenue_clean` or `founded`

pub mod derived;
pub mod error;
pub mod missing;
pub mod normalizer;
pub mod revenue;

pub use derived::{revenue_per_worker, worker_growth};
pub use error::NormalizeError;
pub use missing::{founded_year, impute_workers, workers_median};
pub use normalizer::{NormalizationSummary, Normalized, drop_incomplete, normalize, normalize_records};
pub use revenue::{Magnitude, RevenueParseError, parse_revenue};
