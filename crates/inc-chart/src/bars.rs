//! Ranked category bar charts.

use anyhow::Result;
use inc_stats::ValueCount;
use plotters::prelude::*;

use crate::layout::{Area, CAPTION_SIZE, FONT, segment_label, skip_panel, truncate_label};
use crate::palette::{cool, flare, rank_fraction};

/// Horizontal bars, most frequent category on top.
pub fn horizontal_bars(
    area: &Area<'_>,
    title: &str,
    x_label: &str,
    counts: &[ValueCount],
) -> Result<()> {
    if counts.is_empty() {
        return skip_panel(area, title, "no categories");
    }
    let rows = counts.len() as i32;
    let max = counts.iter().map(|c| c.count).max().unwrap_or(0) as f64;
    let labels: Vec<String> = counts
        .iter()
        .rev()
        .map(|c| truncate_label(&c.value, 26))
        .collect();

    let mut chart = ChartBuilder::on(area)
        .caption(title, (FONT, CAPTION_SIZE))
        .margin(10)
        .x_label_area_size(35)
        .y_label_area_size(180)
        .build_cartesian_2d(0.0..(max * 1.1).max(1.0), (0..rows).into_segmented())?;
    chart
        .configure_mesh()
        .disable_y_mesh()
        .x_desc(x_label)
        .y_labels(counts.len())
        .y_label_formatter(&|segment| segment_label(&labels, segment))
        .draw()?;
    chart.draw_series(counts.iter().enumerate().map(|(idx, entry)| {
        let row = rows - 1 - idx as i32;
        let mut bar = Rectangle::new(
            [
                (0.0, SegmentValue::Exact(row)),
                (entry.count as f64, SegmentValue::Exact(row + 1)),
            ],
            cool(rank_fraction(idx, counts.len())).filled(),
        );
        bar.set_margin(3, 3, 0, 0);
        bar
    }))?;
    Ok(())
}

/// Vertical bars, most frequent category on the left.
pub fn vertical_bars(
    area: &Area<'_>,
    title: &str,
    x_label: &str,
    y_label: &str,
    counts: &[ValueCount],
) -> Result<()> {
    if counts.is_empty() {
        return skip_panel(area, title, "no categories");
    }
    let columns = counts.len() as i32;
    let max = counts.iter().map(|c| c.count).max().unwrap_or(0) as f64;
    let labels: Vec<String> = counts
        .iter()
        .map(|c| truncate_label(&c.value, 12))
        .collect();

    let mut chart = ChartBuilder::on(area)
        .caption(title, (FONT, CAPTION_SIZE))
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(60)
        .build_cartesian_2d((0..columns).into_segmented(), 0.0..(max * 1.1).max(1.0))?;
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc(x_label)
        .y_desc(y_label)
        .x_labels(counts.len())
        .x_label_formatter(&|segment| segment_label(&labels, segment))
        .draw()?;
    chart.draw_series(counts.iter().enumerate().map(|(idx, entry)| {
        let column = idx as i32;
        let mut bar = Rectangle::new(
            [
                (SegmentValue::Exact(column), 0.0),
                (SegmentValue::Exact(column + 1), entry.count as f64),
            ],
            flare(rank_fraction(idx, counts.len())).filled(),
        );
        bar.set_margin(0, 0, 6, 6);
        bar
    }))?;
    Ok(())
}
