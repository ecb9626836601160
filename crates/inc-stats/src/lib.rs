//! Statistical helpers over `f64` columns.
//!
//! - [`descriptive`]: count, mean, sample standard deviation, quartiles
//! - [`quantile`]: linear-interpolated quantiles and box-plot summaries
//! - [`correlation`]: Pearson correlation with pairwise-complete observations
//! - [`counts`]: categorical value counts and grouped means
//! - [`histogram`]: equal-width histogram bins
//! - [`kde`]: Gaussian kernel density estimate
//! - [`regression`]: ordinary least squares line fit
//!
//! # Examples
//!
//! ```
//! use inc_stats::descriptive::Describe;
//!
//! let stats = Describe::new([1.0, 2.0, 3.0, 4.0]).unwrap();
//! assert_eq!(stats.mean, 2.5);
//! assert_eq!(stats.median, 2.5);
//! ```

pub mod correlation;
pub mod counts;
pub mod descriptive;
pub mod histogram;
pub mod kde;
pub mod quantile;
pub mod regression;

pub use correlation::{CorrelationMatrix, pearson};
pub use counts::{ValueCount, group_mean, value_counts};
pub use descriptive::{Describe, mean, median, sample_std};
pub use histogram::{Histogram, HistogramBin};
pub use kde::GaussianKde;
pub use quantile::{BoxSummary, quantile_sorted};
pub use regression::LinearFit;
