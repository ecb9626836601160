//! Histogram, density and box plot panels.

use anyhow::Result;
use inc_stats::{BoxSummary, GaussianKde, Histogram};
use plotters::prelude::*;

use crate::layout::{
    Area, CAPTION_SIZE, FONT, bounds, padded_range, segment_label, skip_panel, tick_label,
    truncate_label,
};
use crate::palette::categorical;

const KDE_POINTS: usize = 200;

/// Count histogram with a density curve scaled to the same axis.
pub fn histogram_with_kde(
    area: &Area<'_>,
    title: &str,
    x_label: &str,
    values: &[f64],
    bins: usize,
) -> Result<()> {
    let Some(histogram) = Histogram::new(values.iter().copied(), bins) else {
        return skip_panel(area, title, "no values");
    };
    let (Some(first), Some(last)) = (histogram.bins.first(), histogram.bins.last()) else {
        return skip_panel(area, title, "no values");
    };
    let x_range = first.range.start..last.range.end;

    let scale = histogram.total() as f64 * histogram.bin_width();
    let curve: Vec<(f64, f64)> = GaussianKde::new(values.iter().copied())
        .map(|kde| {
            kde.curve(x_range.start, x_range.end, KDE_POINTS)
                .into_iter()
                .map(|(x, density)| (x, density * scale))
                .collect()
        })
        .unwrap_or_default();
    let y_max = curve
        .iter()
        .map(|(_, y)| *y)
        .fold(histogram.max_count() as f64, f64::max)
        * 1.1;

    let mut chart = ChartBuilder::on(area)
        .caption(title, (FONT, CAPTION_SIZE))
        .margin(10)
        .x_label_area_size(35)
        .y_label_area_size(50)
        .build_cartesian_2d(x_range, 0.0..y_max.max(1.0))?;
    chart
        .configure_mesh()
        .x_desc(x_label)
        .y_desc("Count")
        .x_label_formatter(&|v| tick_label(*v))
        .draw()?;
    chart.draw_series(histogram.bins.iter().map(|bin| {
        Rectangle::new(
            [(bin.range.start, 0.0), (bin.range.end, bin.count as f64)],
            categorical(9).mix(0.7).filled(),
        )
    }))?;
    if !curve.is_empty() {
        chart.draw_series(LineSeries::new(curve, categorical(0).stroke_width(2)))?;
    }
    Ok(())
}

/// Density curve alone, as on the pair plot diagonal.
pub fn kde_curve(area: &Area<'_>, label: &str, values: &[f64]) -> Result<()> {
    let Some(kde) = GaussianKde::new(values.iter().copied()) else {
        return skip_panel(area, label, "too few distinct values");
    };
    let Some((lo, hi)) = bounds(values.iter().copied()) else {
        return skip_panel(area, label, "no finite values");
    };
    let span = 3.0 * kde.bandwidth();
    let curve = kde.curve(lo - span, hi + span, KDE_POINTS);
    let y_max = curve.iter().map(|(_, y)| *y).fold(0.0, f64::max) * 1.1;

    let mut chart = ChartBuilder::on(area)
        .margin(6)
        .x_label_area_size(30)
        .y_label_area_size(45)
        .build_cartesian_2d((lo - span)..(hi + span), 0.0..y_max.max(f64::MIN_POSITIVE))?;
    chart
        .configure_mesh()
        .x_desc(label)
        .y_desc("Density")
        .x_labels(4)
        .y_labels(4)
        .x_label_formatter(&|v| tick_label(*v))
        .y_label_formatter(&|v| format!("{v:.0e}"))
        .draw()?;
    chart.draw_series(
        AreaSeries::new(curve.iter().copied(), 0.0, categorical(0).mix(0.3))
            .border_style(categorical(0).stroke_width(2)),
    )?;
    Ok(())
}

/// One box per group: quartile box, median line, Tukey whiskers, outlier points.
pub fn boxplot(
    area: &Area<'_>,
    title: &str,
    y_label: &str,
    groups: &[(String, Vec<f64>)],
) -> Result<()> {
    let summaries: Vec<(&str, BoxSummary)> = groups
        .iter()
        .filter_map(|(name, values)| {
            Some((name.as_str(), BoxSummary::new(values.iter().copied())?))
        })
        .collect();
    if summaries.is_empty() {
        return skip_panel(area, title, "no groups with values");
    }
    let extremes = summaries.iter().flat_map(|(_, s)| {
        [s.lower_whisker, s.upper_whisker]
            .into_iter()
            .chain(s.outliers.iter().copied())
    });
    let Some((lo, hi)) = bounds(extremes) else {
        return skip_panel(area, title, "no finite values");
    };
    let labels: Vec<String> = summaries
        .iter()
        .map(|(name, _)| truncate_label(name, 22))
        .collect();
    let count = summaries.len() as i32;

    let mut chart = ChartBuilder::on(area)
        .caption(title, (FONT, CAPTION_SIZE))
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(70)
        .build_cartesian_2d((0..count).into_segmented(), padded_range(lo, hi))?;
    chart
        .configure_mesh()
        .x_desc("Industry")
        .y_desc(y_label)
        .x_labels(summaries.len())
        .x_label_formatter(&|segment| segment_label(&labels, segment))
        .y_label_formatter(&|v| tick_label(*v))
        .light_line_style(BLACK.mix(0.08))
        .draw()?;

    for (idx, (_, summary)) in (0..count).zip(&summaries) {
        let color = categorical(idx as usize);
        let mut body = Rectangle::new(
            [
                (SegmentValue::Exact(idx), summary.q3),
                (SegmentValue::Exact(idx + 1), summary.q1),
            ],
            color.mix(0.6).filled(),
        );
        body.set_margin(0, 0, 18, 18);
        chart.draw_series(std::iter::once(body))?;
        chart.draw_series(std::iter::once(PathElement::new(
            vec![
                (SegmentValue::Exact(idx), summary.median),
                (SegmentValue::Exact(idx + 1), summary.median),
            ],
            BLACK.stroke_width(2),
        )))?;
        chart.draw_series([
            PathElement::new(
                vec![
                    (SegmentValue::CenterOf(idx), summary.q3),
                    (SegmentValue::CenterOf(idx), summary.upper_whisker),
                ],
                BLACK.stroke_width(1),
            ),
            PathElement::new(
                vec![
                    (SegmentValue::CenterOf(idx), summary.q1),
                    (SegmentValue::CenterOf(idx), summary.lower_whisker),
                ],
                BLACK.stroke_width(1),
            ),
        ])?;
        chart.draw_series(
            summary
                .outliers
                .iter()
                .map(|&v| Circle::new((SegmentValue::CenterOf(idx), v), 3, BLACK.mix(0.6))),
        )?;
    }
    Ok(())
}
