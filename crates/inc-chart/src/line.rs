use std::collections::BTreeMap;

use anyhow::Result;
use plotters::prelude::*;

use crate::layout::{Area, CAPTION_SIZE, FONT, bounds, padded_range, skip_panel, tick_label};

const LIME: RGBColor = RGBColor(50, 205, 50);

/// Line through `(year, value)` points in year order.
pub fn yearly_line(
    area: &Area<'_>,
    title: &str,
    y_label: &str,
    series: &BTreeMap<i32, f64>,
) -> Result<()> {
    let points: Vec<(f64, f64)> = series
        .iter()
        .map(|(&year, &value)| (f64::from(year), value))
        .filter(|(_, value)| value.is_finite())
        .collect();
    let (Some((x_lo, x_hi)), Some((y_lo, y_hi))) = (
        bounds(points.iter().map(|(x, _)| *x)),
        bounds(points.iter().map(|(_, y)| *y)),
    ) else {
        return skip_panel(area, title, "no founded years");
    };

    let mut chart = ChartBuilder::on(area)
        .caption(title, (FONT, CAPTION_SIZE))
        .margin(10)
        .x_label_area_size(35)
        .y_label_area_size(55)
        .build_cartesian_2d(padded_range(x_lo, x_hi), padded_range(y_lo, y_hi))?;
    chart
        .configure_mesh()
        .x_desc("Founded")
        .y_desc(y_label)
        .x_label_formatter(&|v| format!("{v:.0}"))
        .y_label_formatter(&|v| tick_label(*v))
        .draw()?;
    chart.draw_series(LineSeries::new(points, LIME.stroke_width(2)))?;
    Ok(())
}
