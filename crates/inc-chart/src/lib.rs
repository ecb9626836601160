//! SVG charts for the cleaned company dataset.
//!
//! [`render_all`] writes the fixed chart sequence ([`Chart::ALL`]) into one
//! directory. Panels whose input is empty or degenerate are replaced by a
//! titled placeholder and logged at `warn`; they never fail the run.

mod bars;
mod charts;
mod distribution;
mod heatmap;
mod layout;
mod line;
mod palette;
mod pie;
mod scatter;

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use inc_model::CleanDataset;
use inc_report::Analysis;
use tracing::{debug, info, info_span};

pub use charts::Chart;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartOptions {
    /// Directory the SVG files are written to; created if missing.
    pub output_dir: PathBuf,
}

impl ChartOptions {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// `charts/` next to the input file.
    pub fn beside(input: &Path) -> Self {
        let parent = input
            .parent()
            .filter(|dir| !dir.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        Self::new(parent.join("charts"))
    }

    pub fn path_for(&self, chart: Chart) -> PathBuf {
        self.output_dir.join(chart.file_name())
    }
}

/// Render every chart in order; returns the written paths.
pub fn render_all(
    dataset: &CleanDataset,
    analysis: &Analysis,
    options: &ChartOptions,
) -> Result<Vec<PathBuf>> {
    let start = Instant::now();
    fs::create_dir_all(&options.output_dir).with_context(|| {
        format!(
            "create chart directory {}",
            options.output_dir.display()
        )
    })?;
    let mut written = Vec::with_capacity(Chart::ALL.len());
    for chart in Chart::ALL {
        let path = options.path_for(chart);
        let span = info_span!("chart", file = chart.file_name());
        let _guard = span.enter();
        chart
            .render(&path, dataset, analysis)
            .with_context(|| format!("render {}", path.display()))?;
        debug!(path = %path.display(), "chart written");
        written.push(path);
    }
    info!(
        charts = written.len(),
        dir = %options.output_dir.display(),
        duration_ms = start.elapsed().as_millis(),
        "charts rendered"
    );
    Ok(written)
}
