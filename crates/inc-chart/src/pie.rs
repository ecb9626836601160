//! Pie chart drawn directly in pixel space.

use std::f64::consts::TAU;

use anyhow::Result;
use inc_stats::ValueCount;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::layout::{Area, CAPTION_SIZE, FONT, centered, skip_panel, truncate_label};
use crate::palette::{categorical, contrasting_text};

/// First slice starts here, measured counterclockwise from three o'clock.
const START_ANGLE_DEG: f64 = 140.0;

/// Slices in the given order with percentage labels inside each wedge.
pub fn pie(area: &Area<'_>, title: &str, slices: &[ValueCount]) -> Result<()> {
    let total: usize = slices.iter().map(|slice| slice.count).sum();
    if total == 0 {
        return skip_panel(area, title, "no categories");
    }
    let (width, height) = area.dim_in_pixel();
    let (width, height) = (f64::from(width), f64::from(height));
    area.draw(&Text::new(
        title.to_string(),
        ((width / 2.0).round() as i32, 20),
        centered(CAPTION_SIZE),
    ))?;

    let center = (width / 2.0, height / 2.0 + 15.0);
    let radius = ((width.min(height - 40.0) / 2.0) - 50.0).max(10.0);
    let mut start = START_ANGLE_DEG.to_radians();
    for (idx, slice) in slices.iter().enumerate() {
        let fraction = slice.count as f64 / total as f64;
        let sweep = fraction * TAU;
        let steps = (fraction * 180.0).ceil().max(2.0) as usize;
        let mut outline = vec![polar(center, 0.0, start)];
        outline.extend(
            (0..=steps).map(|step| polar(center, radius, start + sweep * step as f64 / steps as f64)),
        );
        let fill = categorical(idx);
        area.draw(&Polygon::new(outline, fill.filled()))?;

        let middle = start + sweep / 2.0;
        area.draw(&Text::new(
            format!("{:.1}%", fraction * 100.0),
            polar(center, radius * 0.6, middle),
            centered(12).color(&contrasting_text(fill)),
        ))?;
        let side = if middle.cos() >= 0.0 {
            HPos::Left
        } else {
            HPos::Right
        };
        area.draw(&Text::new(
            truncate_label(&slice.value, 24),
            polar(center, radius * 1.1, middle),
            (FONT, 12)
                .into_font()
                .color(&BLACK)
                .pos(Pos::new(side, VPos::Center)),
        ))?;
        start += sweep;
    }
    Ok(())
}

/// Pixel position at `angle` radians counterclockwise; screen y grows downward.
fn polar(center: (f64, f64), radius: f64, angle: f64) -> (i32, i32) {
    (
        (center.0 + radius * angle.cos()).round() as i32,
        (center.1 - radius * angle.sin()).round() as i32,
    )
}
