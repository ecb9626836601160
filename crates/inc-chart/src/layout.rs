//! Shared drawing helpers: area type, axis ranges, text styles.

use std::ops::Range;

use anyhow::Result;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use tracing::warn;

pub type Area<'a> = DrawingArea<SVGBackend<'a>, Shift>;

pub const FONT: &str = "sans-serif";
pub const CAPTION_SIZE: u32 = 18;

/// Black text anchored at its centre.
pub fn centered(size: u32) -> TextStyle<'static> {
    (FONT, size)
        .into_font()
        .color(&BLACK)
        .pos(Pos::new(HPos::Center, VPos::Center))
}

/// Minimum and maximum of the finite values.
pub fn bounds<I>(values: I) -> Option<(f64, f64)>
where
    I: IntoIterator<Item = f64>,
{
    values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

/// Linear axis range with 5% padding; a zero-width span is widened by one.
pub fn padded_range(lo: f64, hi: f64) -> Range<f64> {
    if hi > lo {
        let pad = (hi - lo) * 0.05;
        (lo - pad)..(hi + pad)
    } else {
        (lo - 1.0)..(hi + 1.0)
    }
}

/// Axis range for a log scale over the positive finite values.
pub fn log_range<I>(values: I) -> Option<Range<f64>>
where
    I: IntoIterator<Item = f64>,
{
    let (lo, hi) = bounds(values.into_iter().filter(|v| *v > 0.0))?;
    Some((lo / 1.5)..(hi * 1.5))
}

/// Compact tick label: `1.2e9` style for large magnitudes.
pub fn tick_label(value: f64) -> String {
    let magnitude = value.abs();
    if magnitude >= 1e4 || (magnitude > 0.0 && magnitude < 1e-2) {
        format!("{value:.0e}")
    } else if magnitude >= 100.0 || value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.2}")
    }
}

/// Shorten long category names so they fit beside an axis.
pub fn truncate_label(label: &str, max_chars: usize) -> String {
    if label.chars().count() <= max_chars {
        return label.to_string();
    }
    let mut short: String = label.chars().take(max_chars.saturating_sub(1)).collect();
    short.push('…');
    short
}

/// Category name for the centre of segment `idx`; blank elsewhere.
pub fn segment_label(labels: &[String], segment: &SegmentValue<i32>) -> String {
    match segment {
        SegmentValue::CenterOf(idx) => usize::try_from(*idx)
            .ok()
            .and_then(|idx| labels.get(idx))
            .cloned()
            .unwrap_or_default(),
        _ => String::new(),
    }
}

/// Leave a titled placeholder where a panel has nothing to draw.
pub fn skip_panel(area: &Area<'_>, title: &str, reason: &str) -> Result<()> {
    warn!(panel = title, reason, "skipping chart panel");
    let (width, height) = area.dim_in_pixel();
    let center_x = i32::try_from(width / 2).unwrap_or(0);
    let center_y = i32::try_from(height / 2).unwrap_or(0);
    area.draw(&Text::new(
        title.to_string(),
        (center_x, 20),
        centered(CAPTION_SIZE),
    ))?;
    area.draw(&Text::new(
        format!("({reason})"),
        (center_x, center_y),
        centered(13),
    ))?;
    Ok(())
}
