use std::f64::consts::PI;

use crate::descriptive::sample_std;

/// Gaussian kernel density estimate with Scott's bandwidth rule.
#[derive(Debug, Clone)]
pub struct GaussianKde {
    samples: Vec<f64>,
    bandwidth: f64,
}

impl GaussianKde {
    /// Returns `None` with fewer than two finite samples or zero spread.
    #[must_use]
    pub fn new<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let samples: Vec<f64> = values.into_iter().filter(|v| v.is_finite()).collect();
        let std = sample_std(&samples)?;
        let bandwidth = std * (samples.len() as f64).powf(-0.2);
        if bandwidth <= 0.0 || !bandwidth.is_finite() {
            return None;
        }
        Some(Self { samples, bandwidth })
    }

    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    /// Density at `x`; integrates to one over the real line.
    pub fn density(&self, x: f64) -> f64 {
        let norm = 1.0 / ((2.0 * PI).sqrt() * self.bandwidth * self.samples.len() as f64);
        let sum: f64 = self
            .samples
            .iter()
            .map(|s| {
                let z = (x - s) / self.bandwidth;
                (-0.5 * z * z).exp()
            })
            .sum();
        norm * sum
    }

    /// `points` evenly spaced `(x, density)` pairs across `lo..=hi`.
    pub fn curve(&self, lo: f64, hi: f64, points: usize) -> Vec<(f64, f64)> {
        if points < 2 || hi <= lo {
            return Vec::new();
        }
        let step = (hi - lo) / (points - 1) as f64;
        (0..points)
            .map(|idx| {
                let x = lo + step * idx as f64;
                (x, self.density(x))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn density_integrates_to_about_one() {
        let kde = GaussianKde::new([1.0, 2.0, 2.5, 3.0, 7.0]).unwrap();
        let curve = kde.curve(-20.0, 30.0, 2001);
        let step = 50.0 / 2000.0;
        let area: f64 = curve.iter().map(|(_, y)| y * step).sum();
        assert!((area - 1.0).abs() < 1e-3);
    }

    #[test]
    fn degenerate_samples_have_no_estimate() {
        assert!(GaussianKde::new([3.0, 3.0, 3.0]).is_none());
        assert!(GaussianKde::new([3.0]).is_none());
    }
}
