use serde::Serialize;

/// Quantile of sorted data with linear interpolation between closest ranks.
///
/// `q` is a fraction in `0.0..=1.0`. Returns `None` for empty input.
///
/// # Examples
///
/// ```
/// use inc_stats::quantile_sorted;
///
/// let values = [1.0, 2.0, 3.0, 4.0];
/// assert_eq!(quantile_sorted(&values, 0.25), Some(1.75));
/// assert_eq!(quantile_sorted(&values, 0.5), Some(2.5));
/// ```
///
/// # Panics
///
/// Panics if `sorted_values` is not sorted in ascending order.
#[must_use]
pub fn quantile_sorted(sorted_values: &[f64], q: f64) -> Option<f64> {
    assert!(
        sorted_values.is_sorted_by(|a, b| a <= b),
        "values must be sorted in ascending order"
    );
    let last = sorted_values.len().checked_sub(1)?;
    let q = q.clamp(0.0, 1.0);
    let position = q * last as f64;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    let weight = position - lower as f64;
    let low = sorted_values[lower];
    let high = sorted_values[upper];
    Some(low + (high - low) * weight)
}

pub(crate) fn sorted_finite<I>(values: I) -> Vec<f64>
where
    I: IntoIterator<Item = f64>,
{
    let mut sorted: Vec<f64> = values.into_iter().filter(|v| v.is_finite()).collect();
    sorted.sort_by(f64::total_cmp);
    sorted
}

/// Five-number summary with Tukey whiskers (1.5 × IQR).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoxSummary {
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    /// Smallest value at or above `q1 - 1.5 * iqr`.
    pub lower_whisker: f64,
    /// Largest value at or below `q3 + 1.5 * iqr`.
    pub upper_whisker: f64,
    pub outliers: Vec<f64>,
}

impl BoxSummary {
    #[must_use]
    pub fn new<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let sorted = sorted_finite(values);
        let q1 = quantile_sorted(&sorted, 0.25)?;
        let median = quantile_sorted(&sorted, 0.5)?;
        let q3 = quantile_sorted(&sorted, 0.75)?;
        let iqr = q3 - q1;
        let low_fence = q1 - 1.5 * iqr;
        let high_fence = q3 + 1.5 * iqr;
        let is_inside = |v: f64| v >= low_fence && v <= high_fence;
        let lower_whisker = sorted.iter().copied().find(|v| is_inside(*v)).unwrap_or(q1);
        let upper_whisker = sorted.iter().copied().rfind(|v| is_inside(*v)).unwrap_or(q3);
        let outliers = sorted
            .iter()
            .copied()
            .filter(|v| *v < low_fence || *v > high_fence)
            .collect();
        Some(Self {
            q1,
            median,
            q3,
            lower_whisker,
            upper_whisker,
            outliers,
        })
    }

    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }
}
