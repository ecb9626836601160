use std::ops::Range;

use serde::Serialize;

/// Equal-width histogram over the data range.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Histogram {
    pub bins: Vec<HistogramBin>,
}

/// A single bin. The last bin also includes its upper edge.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistogramBin {
    pub range: Range<f64>,
    pub count: usize,
}

impl Histogram {
    /// Bins finite values into `num_bins` equal-width bins spanning min..max.
    ///
    /// A constant column becomes a single bin of width one centred on the
    /// value. Returns `None` when there is no finite value or `num_bins` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use inc_stats::Histogram;
    ///
    /// let histogram = Histogram::new([0.0, 1.0, 2.0, 3.0, 4.0], 2).unwrap();
    /// assert_eq!(histogram.bins.len(), 2);
    /// assert_eq!(histogram.bins[0].count, 2);
    /// assert_eq!(histogram.bins[1].count, 3);
    /// ```
    #[must_use]
    pub fn new<I>(values: I, num_bins: usize) -> Option<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        if num_bins == 0 {
            return None;
        }
        let values: Vec<f64> = values.into_iter().filter(|v| v.is_finite()).collect();
        let min = values.iter().copied().reduce(f64::min)?;
        let max = values.iter().copied().reduce(f64::max)?;
        if max == min {
            return Some(Self {
                bins: vec![HistogramBin {
                    range: (min - 0.5)..(min + 0.5),
                    count: values.len(),
                }],
            });
        }
        let width = (max - min) / num_bins as f64;
        let mut bins: Vec<HistogramBin> = (0..num_bins)
            .map(|idx| HistogramBin {
                range: (min + width * idx as f64)..(min + width * (idx + 1) as f64),
                count: 0,
            })
            .collect();
        for value in values {
            let idx = (((value - min) / width) as usize).min(num_bins - 1);
            bins[idx].count += 1;
        }
        Some(Self { bins })
    }

    pub fn max_count(&self) -> usize {
        self.bins.iter().map(|bin| bin.count).max().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.bins.iter().map(|bin| bin.count).sum()
    }

    pub fn bin_width(&self) -> f64 {
        self.bins
            .first()
            .map_or(0.0, |bin| bin.range.end - bin.range.start)
    }
}
