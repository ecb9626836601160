use serde::Serialize;

use crate::descriptive::mean;

/// Pearson correlation coefficient of paired observations.
///
/// Returns `None` with fewer than two pairs or when either side has zero
/// variance.
///
/// # Examples
///
/// ```
/// use inc_stats::pearson;
///
/// let r = pearson(&[(1.0, 2.0), (2.0, 4.0), (3.0, 6.0)]).unwrap();
/// assert!((r - 1.0).abs() < 1e-12);
/// ```
#[must_use]
pub fn pearson(pairs: &[(f64, f64)]) -> Option<f64> {
    if pairs.len() < 2 {
        return None;
    }
    let xs: Vec<f64> = pairs.iter().map(|(x, _)| *x).collect();
    let ys: Vec<f64> = pairs.iter().map(|(_, y)| *y).collect();
    let mean_x = mean(&xs)?;
    let mean_y = mean(&ys)?;
    let mut covariance = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (x, y) in pairs {
        let dx = x - mean_x;
        let dy = y - mean_y;
        covariance += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }
    if var_x == 0.0 || var_y == 0.0 {
        return None;
    }
    let r = covariance / (var_x.sqrt() * var_y.sqrt());
    Some(r.clamp(-1.0, 1.0))
}

/// Symmetric correlation matrix over named columns.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorrelationMatrix {
    pub columns: Vec<String>,
    /// Row-major; `values[i][j]` is the correlation of column `i` with `j`.
    pub values: Vec<Vec<Option<f64>>>,
}

impl CorrelationMatrix {
    /// Builds the matrix from equally long columns with missing values.
    ///
    /// Each cell uses the rows where both columns are present.
    ///
    /// # Panics
    ///
    /// Panics if the columns differ in length.
    #[must_use]
    pub fn new(columns: &[(&str, Vec<Option<f64>>)]) -> Self {
        let len = columns.first().map_or(0, |(_, values)| values.len());
        assert!(
            columns.iter().all(|(_, values)| values.len() == len),
            "columns must have equal length"
        );
        let n = columns.len();
        let mut values = vec![vec![None; n]; n];
        for i in 0..n {
            for j in i..n {
                let pairs: Vec<(f64, f64)> = columns[i]
                    .1
                    .iter()
                    .zip(&columns[j].1)
                    .filter_map(|(x, y)| Some(((*x)?, (*y)?)))
                    .filter(|(x, y)| x.is_finite() && y.is_finite())
                    .collect();
                let r = pearson(&pairs);
                values[i][j] = r;
                values[j][i] = r;
            }
        }
        Self {
            columns: columns.iter().map(|(name, _)| (*name).to_string()).collect(),
            values,
        }
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn get(&self, row: usize, column: usize) -> Option<f64> {
        self.values.get(row)?.get(column).copied().flatten()
    }
}
