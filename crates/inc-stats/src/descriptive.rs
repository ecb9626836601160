use serde::Serialize;

use crate::quantile::{quantile_sorted, sorted_finite};

/// Summary of one numeric column: `count, mean, std, min, 25%, 50%, 75%, max`.
///
/// Non-finite values are ignored. `std` is the sample standard deviation
/// (divisor `n - 1`) and is `None` for a single value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Describe {
    pub count: usize,
    pub mean: f64,
    pub std: Option<f64>,
    pub min: f64,
    pub q25: f64,
    pub median: f64,
    pub q75: f64,
    pub max: f64,
}

impl Describe {
    /// Computes the summary from unsorted values.
    ///
    /// Returns `None` if no finite value is present.
    ///
    /// # Examples
    ///
    /// ```
    /// # use inc_stats::descriptive::Describe;
    /// let stats = Describe::new([5.0, 2.0, 4.0, 1.0, 3.0]).unwrap();
    /// assert_eq!(stats.count, 5);
    /// assert_eq!(stats.min, 1.0);
    /// assert_eq!(stats.q25, 2.0);
    /// assert_eq!(stats.max, 5.0);
    /// ```
    #[must_use]
    pub fn new<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let sorted = sorted_finite(values);
        let min = *sorted.first()?;
        let max = *sorted.last()?;
        Some(Self {
            count: sorted.len(),
            mean: mean(&sorted)?,
            std: sample_std(&sorted),
            min,
            q25: quantile_sorted(&sorted, 0.25)?,
            median: quantile_sorted(&sorted, 0.5)?,
            q75: quantile_sorted(&sorted, 0.75)?,
            max,
        })
    }
}

#[must_use]
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Sample standard deviation. Needs at least two values.
#[must_use]
pub fn sample_std(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let mean = mean(values)?;
    let sum_sq = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>();
    Some((sum_sq / (values.len() - 1) as f64).sqrt())
}

/// Median of unsorted values; the mean of the two middle values for an even count.
///
/// # Examples
///
/// ```
/// use inc_stats::median;
///
/// assert_eq!(median(&[10.0, 30.0]), Some(20.0));
/// assert_eq!(median(&[3.0, 1.0, 2.0]), Some(2.0));
/// assert_eq!(median(&[]), None);
/// ```
#[must_use]
pub fn median(values: &[f64]) -> Option<f64> {
    let sorted = sorted_finite(values.iter().copied());
    quantile_sorted(&sorted, 0.5)
}
