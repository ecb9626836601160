//! Scatter panels: growth-coloured log-log, regression, pair plot cells.

use anyhow::Result;
use inc_stats::LinearFit;
use plotters::prelude::*;
use tracing::warn;

use crate::layout::{Area, CAPTION_SIZE, FONT, bounds, log_range, padded_range, skip_panel, tick_label};
use crate::palette::{categorical, viridis};

const MIN_RADIUS: f64 = 2.5;
const MAX_RADIUS: f64 = 8.0;
const FIT_POINTS: usize = 100;

/// One company on the revenue vs workers scatter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrowthPoint {
    pub workers: f64,
    pub revenue: f64,
    pub growth: f64,
}

fn positive(x: f64, y: f64) -> bool {
    x.is_finite() && y.is_finite() && x > 0.0 && y > 0.0
}

/// Log-log scatter, each point coloured and sized by its growth.
pub fn growth_scatter(area: &Area<'_>, title: &str, points: &[GrowthPoint]) -> Result<()> {
    let points: Vec<GrowthPoint> = points
        .iter()
        .copied()
        .filter(|p| positive(p.workers, p.revenue) && p.growth.is_finite())
        .collect();
    let (Some(x_range), Some(y_range), Some((lo, hi))) = (
        log_range(points.iter().map(|p| p.workers)),
        log_range(points.iter().map(|p| p.revenue)),
        bounds(points.iter().map(|p| p.growth)),
    ) else {
        return skip_panel(area, title, "no positive revenue and worker pairs");
    };
    let scale = |growth: f64| if hi > lo { (growth - lo) / (hi - lo) } else { 0.5 };

    let mut chart = ChartBuilder::on(area)
        .caption(title, (FONT, CAPTION_SIZE))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(55)
        .build_cartesian_2d(x_range.log_scale(), y_range.log_scale())?;
    chart
        .configure_mesh()
        .x_desc("Workers")
        .y_desc("Revenue")
        .x_label_formatter(&|v| tick_label(*v))
        .y_label_formatter(&|v| tick_label(*v))
        .draw()?;
    chart.draw_series(points.iter().map(|p| {
        let t = scale(p.growth);
        let radius = MIN_RADIUS + (MAX_RADIUS - MIN_RADIUS) * t;
        Circle::new(
            (p.workers, p.revenue),
            radius,
            viridis(t).mix(0.7).filled(),
        )
    }))?;
    Ok(())
}

/// Log-log scatter with the least-squares fit `revenue = a + b * ln(workers)`.
pub fn regression(area: &Area<'_>, title: &str, pairs: &[(f64, f64)]) -> Result<()> {
    let pairs: Vec<(f64, f64)> = pairs.iter().copied().filter(|&(x, y)| positive(x, y)).collect();
    let (Some(x_range), Some(y_range)) = (
        log_range(pairs.iter().map(|(x, _)| *x)),
        log_range(pairs.iter().map(|(_, y)| *y)),
    ) else {
        return skip_panel(area, title, "no positive revenue and worker pairs");
    };
    let log_pairs: Vec<(f64, f64)> = pairs.iter().map(|&(x, y)| (x.ln(), y)).collect();
    let fit = LinearFit::fit(&log_pairs);

    let mut chart = ChartBuilder::on(area)
        .caption(title, (FONT, CAPTION_SIZE))
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(65)
        .build_cartesian_2d(x_range.clone().log_scale(), y_range.clone().log_scale())?;
    chart
        .configure_mesh()
        .x_desc("Number of Workers (log scale)")
        .y_desc("Revenue (log scale)")
        .x_label_formatter(&|v| tick_label(*v))
        .y_label_formatter(&|v| tick_label(*v))
        .light_line_style(BLACK.mix(0.1))
        .draw()?;
    chart.draw_series(
        pairs
            .iter()
            .map(|&point| Circle::new(point, 3, categorical(0).mix(0.6).filled())),
    )?;

    let Some(fit) = fit else {
        warn!(panel = title, "regression line skipped: workers do not vary");
        return Ok(());
    };
    let (ln_lo, ln_hi) = (x_range.start.ln(), x_range.end.ln());
    let line: Vec<(f64, f64)> = (0..FIT_POINTS)
        .map(|idx| {
            let ln_x = ln_lo + (ln_hi - ln_lo) * idx as f64 / (FIT_POINTS - 1) as f64;
            (ln_x.exp(), fit.predict(ln_x))
        })
        .filter(|(_, y)| y_range.contains(y))
        .collect();
    if line.is_empty() {
        warn!(panel = title, "regression line falls outside the plotted range");
        return Ok(());
    }
    chart
        .draw_series(LineSeries::new(line, RED.stroke_width(2)))?
        .label(format!(
            "revenue = {:.3e} + {:.3e} ln(workers)",
            fit.intercept, fit.slope
        ))
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED.stroke_width(2)));
    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;
    Ok(())
}

/// Plain scatter for an off-diagonal pair plot cell.
pub fn pair_scatter(
    area: &Area<'_>,
    x_label: &str,
    y_label: &str,
    pairs: &[(f64, f64)],
) -> Result<()> {
    let (Some((x_lo, x_hi)), Some((y_lo, y_hi))) = (
        bounds(pairs.iter().map(|(x, _)| *x)),
        bounds(pairs.iter().map(|(_, y)| *y)),
    ) else {
        return skip_panel(area, &format!("{y_label} vs {x_label}"), "no complete pairs");
    };
    let mut chart = ChartBuilder::on(area)
        .margin(6)
        .x_label_area_size(30)
        .y_label_area_size(45)
        .build_cartesian_2d(padded_range(x_lo, x_hi), padded_range(y_lo, y_hi))?;
    chart
        .configure_mesh()
        .x_desc(x_label)
        .y_desc(y_label)
        .x_labels(4)
        .y_labels(4)
        .x_label_formatter(&|v| tick_label(*v))
        .y_label_formatter(&|v| tick_label(*v))
        .draw()?;
    chart.draw_series(
        pairs
            .iter()
            .map(|&point| Circle::new(point, 2, categorical(0).mix(0.6).filled())),
    )?;
    Ok(())
}
