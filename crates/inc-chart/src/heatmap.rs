//! Annotated correlation heatmaps.

use anyhow::Result;
use inc_stats::CorrelationMatrix;
use plotters::prelude::*;

use crate::layout::{Area, CAPTION_SIZE, FONT, bounds, centered, segment_label, skip_panel};
use crate::palette::{coolwarm, contrasting_text, magma};

/// Which cells of the matrix are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cells {
    All,
    /// Strictly below the diagonal.
    LowerTriangle,
}

impl Cells {
    fn shows(self, row: usize, column: usize) -> bool {
        match self {
            Self::All => true,
            Self::LowerTriangle => column < row,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scale {
    /// Sequential colours stretched over the shown values.
    Magma,
    /// Diverging colours over `-1..=1`, white at zero.
    Coolwarm,
}

impl Scale {
    fn color(self, r: f64, lo: f64, hi: f64) -> RGBColor {
        match self {
            Self::Magma if hi > lo => magma((r - lo) / (hi - lo)),
            Self::Magma => magma(1.0),
            Self::Coolwarm => coolwarm(r),
        }
    }
}

pub fn correlation_heatmap(
    area: &Area<'_>,
    title: &str,
    matrix: &CorrelationMatrix,
    cells: Cells,
    scale: Scale,
) -> Result<()> {
    let n = matrix.len();
    let shown: Vec<(usize, usize, Option<f64>)> = (0..n)
        .flat_map(|row| (0..n).map(move |column| (row, column)))
        .filter(|&(row, column)| cells.shows(row, column))
        .map(|(row, column)| (row, column, matrix.get(row, column)))
        .collect();
    let Some((lo, hi)) = bounds(shown.iter().filter_map(|(_, _, r)| *r)) else {
        return skip_panel(area, title, "no correlations");
    };

    let size = n as i32;
    let x_labels: Vec<String> = matrix.columns.clone();
    let y_labels: Vec<String> = matrix.columns.iter().rev().cloned().collect();

    let mut chart = ChartBuilder::on(area)
        .caption(title, (FONT, CAPTION_SIZE))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(130)
        .build_cartesian_2d((0..size).into_segmented(), (0..size).into_segmented())?;
    chart
        .configure_mesh()
        .disable_mesh()
        .x_labels(n)
        .y_labels(n)
        .x_label_formatter(&|segment| segment_label(&x_labels, segment))
        .y_label_formatter(&|segment| segment_label(&y_labels, segment))
        .draw()?;

    for (row, column, value) in shown {
        let x = column as i32;
        let y = size - 1 - row as i32;
        let (fill, label) = match value {
            Some(r) => (scale.color(r, lo, hi), format!("{r:.2}")),
            None => (RGBColor(200, 200, 200), "-".to_string()),
        };
        chart.draw_series(std::iter::once(Rectangle::new(
            [
                (SegmentValue::Exact(x), SegmentValue::Exact(y)),
                (SegmentValue::Exact(x + 1), SegmentValue::Exact(y + 1)),
            ],
            fill.filled(),
        )))?;
        chart.draw_series(std::iter::once(Rectangle::new(
            [
                (SegmentValue::Exact(x), SegmentValue::Exact(y)),
                (SegmentValue::Exact(x + 1), SegmentValue::Exact(y + 1)),
            ],
            WHITE.stroke_width(1),
        )))?;
        chart.draw_series(std::iter::once(Text::new(
            label,
            (SegmentValue::CenterOf(x), SegmentValue::CenterOf(y)),
            centered(14).color(&contrasting_text(fill)),
        )))?;
    }
    Ok(())
}
