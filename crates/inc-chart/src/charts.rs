//! The fixed chart sequence, one SVG file each.

use std::path::Path;

use anyhow::{Result, bail};
use inc_model::{CleanDataset, NumericColumn};
use inc_report::{Analysis, MASKED_CORRELATION_COLUMNS, PAIRPLOT_COLUMNS, correlation_matrix};
use inc_stats::ValueCount;
use plotters::prelude::*;

use crate::bars::{horizontal_bars, vertical_bars};
use crate::distribution::{boxplot, histogram_with_kde, kde_curve};
use crate::heatmap::{Cells, Scale, correlation_heatmap};
use crate::layout::{Area, FONT};
use crate::line::yearly_line;
use crate::pie::pie;
use crate::scatter::{GrowthPoint, growth_scatter, pair_scatter, regression};

const GROWTH_BINS: usize = 50;
const TOP_BARS: usize = 10;
const TOP_SLICES: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Chart {
    Dashboard,
    States,
    Regression,
    CorrelationMasked,
    PairPlot,
    BoxPlot,
}

impl Chart {
    /// Rendering order.
    pub const ALL: [Self; 6] = [
        Self::Dashboard,
        Self::States,
        Self::Regression,
        Self::CorrelationMasked,
        Self::PairPlot,
        Self::BoxPlot,
    ];

    pub fn file_name(self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard.svg",
            Self::States => "states.svg",
            Self::Regression => "regression.svg",
            Self::CorrelationMasked => "correlation_masked.svg",
            Self::PairPlot => "pairplot.svg",
            Self::BoxPlot => "boxplot.svg",
        }
    }

    /// Canvas size in pixels.
    pub fn size(self) -> (u32, u32) {
        match self {
            Self::Dashboard => (2000, 1000),
            Self::States => (1000, 500),
            Self::Regression | Self::BoxPlot => (1000, 600),
            Self::CorrelationMasked => (900, 700),
            Self::PairPlot => (1200, 1200),
        }
    }

    pub(crate) fn render(
        self,
        path: &Path,
        dataset: &CleanDataset,
        analysis: &Analysis,
    ) -> Result<()> {
        let root = SVGBackend::new(path, self.size()).into_drawing_area();
        root.fill(&WHITE)?;
        match self {
            Self::Dashboard => {
                let root = root.titled("INC 5000 Companies - Dashboard Overview", (FONT, 26))?;
                let panels = root.split_evenly((2, 3));
                let [growth, industries, trend, heatmap, share, scatter] = panels.as_slice() else {
                    bail!("dashboard grid has {} panels", panels.len());
                };
                histogram_with_kde(
                    growth,
                    "Growth % Distribution",
                    NumericColumn::GrowthPct.name(),
                    &dataset.values(NumericColumn::GrowthPct),
                    GROWTH_BINS,
                )?;
                horizontal_bars(
                    industries,
                    "Top 10 Industries",
                    "Companies",
                    head(&analysis.industry_counts, TOP_BARS),
                )?;
                yearly_line(
                    trend,
                    "Avg. Growth by Founded Year",
                    "Avg. growth %",
                    &analysis.growth_by_founded,
                )?;
                correlation_heatmap(
                    heatmap,
                    "Feature Correlation Matrix",
                    &analysis.correlation,
                    Cells::All,
                    Scale::Magma,
                )?;
                pie(share, "Top 5 Industries", head(&analysis.industry_counts, TOP_SLICES))?;
                growth_scatter(
                    scatter,
                    "Revenue vs. Workers (log scale)",
                    &growth_points(dataset),
                )?;
            }
            Self::States => vertical_bars(
                &root,
                "Top 10 States by Company Count",
                "State",
                "Number of Companies",
                head(&analysis.state_counts, TOP_BARS),
            )?,
            Self::Regression => regression(
                &root,
                "Revenue vs Workers (Log-Log Scale with Regression)",
                &dataset.pairs(NumericColumn::Workers, NumericColumn::RevenueClean),
            )?,
            Self::CorrelationMasked => correlation_heatmap(
                &root,
                "Feature Correlations (Masked Upper Triangle)",
                &correlation_matrix(dataset, MASKED_CORRELATION_COLUMNS),
                Cells::LowerTriangle,
                Scale::Coolwarm,
            )?,
            Self::PairPlot => {
                let root = root.titled("Pairplot of Key Features", (FONT, 24))?;
                pair_plot(&root, dataset)?;
            }
            Self::BoxPlot => boxplot(
                &root,
                "Revenue Per Worker Distribution by Top 5 Industries",
                "Revenue per Worker",
                &industry_groups(dataset, head(&analysis.industry_counts, TOP_SLICES)),
            )?,
        }
        root.present()?;
        Ok(())
    }
}

fn head(counts: &[ValueCount], n: usize) -> &[ValueCount] {
    &counts[..counts.len().min(n)]
}

fn growth_points(dataset: &CleanDataset) -> Vec<GrowthPoint> {
    dataset
        .records()
        .iter()
        .filter_map(|record| {
            Some(GrowthPoint {
                workers: record.workers?,
                revenue: record.revenue_clean,
                growth: record.growth_pct?,
            })
        })
        .collect()
}

/// Corner layout: density on the diagonal, scatter below it, blank above.
fn pair_plot(root: &Area<'_>, dataset: &CleanDataset) -> Result<()> {
    let columns = PAIRPLOT_COLUMNS;
    let n = columns.len();
    let cells = root.split_evenly((n, n));
    for (idx, cell) in cells.iter().enumerate() {
        let (row, column) = (idx / n, idx % n);
        let (x, y) = (columns[column], columns[row]);
        if column > row {
            continue;
        }
        if column == row {
            kde_curve(cell, x.name(), &dataset.values(x))?;
        } else {
            pair_scatter(cell, x.name(), y.name(), &dataset.pairs(x, y))?;
        }
    }
    Ok(())
}

/// Revenue per worker of each listed industry, in list order.
fn industry_groups(dataset: &CleanDataset, industries: &[ValueCount]) -> Vec<(String, Vec<f64>)> {
    industries
        .iter()
        .map(|entry| {
            let values = dataset
                .records()
                .iter()
                .filter(|record| {
                    record.industry.as_deref().map(str::trim) == Some(entry.value.as_str())
                })
                .filter_map(|record| record.revenue_per_worker)
                .collect();
            (entry.value.clone(), values)
        })
        .collect()
}
