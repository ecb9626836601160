//! Colour scales for charts.

use plotters::style::RGBColor;

/// Categorical colours for bars and pie slices.
pub const CATEGORICAL: [RGBColor; 10] = [
    RGBColor(31, 119, 180),
    RGBColor(255, 127, 14),
    RGBColor(44, 160, 44),
    RGBColor(214, 39, 40),
    RGBColor(148, 103, 189),
    RGBColor(140, 86, 75),
    RGBColor(227, 119, 194),
    RGBColor(127, 127, 127),
    RGBColor(188, 189, 34),
    RGBColor(23, 190, 207),
];

const VIRIDIS: [RGBColor; 5] = [
    RGBColor(68, 1, 84),
    RGBColor(59, 82, 139),
    RGBColor(33, 145, 140),
    RGBColor(94, 201, 98),
    RGBColor(253, 231, 37),
];

const MAGMA: [RGBColor; 5] = [
    RGBColor(0, 0, 4),
    RGBColor(81, 18, 124),
    RGBColor(183, 55, 121),
    RGBColor(252, 137, 97),
    RGBColor(252, 253, 191),
];

const COOL: [RGBColor; 2] = [RGBColor(0, 255, 255), RGBColor(255, 0, 255)];

const FLARE: [RGBColor; 4] = [
    RGBColor(236, 176, 129),
    RGBColor(228, 113, 88),
    RGBColor(189, 55, 94),
    RGBColor(110, 38, 106),
];

const COOLWARM: [RGBColor; 3] = [
    RGBColor(59, 76, 192),
    RGBColor(221, 221, 221),
    RGBColor(180, 4, 38),
];

pub fn categorical(index: usize) -> RGBColor {
    CATEGORICAL[index % CATEGORICAL.len()]
}

/// Sequential scale for `t` in `0.0..=1.0`.
pub fn viridis(t: f64) -> RGBColor {
    gradient(&VIRIDIS, t)
}

/// Cyan to magenta, for ranked bars.
pub fn cool(t: f64) -> RGBColor {
    gradient(&COOL, t)
}

/// Warm sequential scale, for ranked bars.
pub fn flare(t: f64) -> RGBColor {
    gradient(&FLARE, t)
}

/// Position of item `index` among `count` items as a fraction of the scale.
pub fn rank_fraction(index: usize, count: usize) -> f64 {
    if count <= 1 {
        0.0
    } else {
        index as f64 / (count - 1) as f64
    }
}

/// Sequential scale used for the dashboard heatmap, `t` in `0.0..=1.0`.
pub fn magma(t: f64) -> RGBColor {
    gradient(&MAGMA, t)
}

/// Black or white, whichever reads better on `background`.
pub fn contrasting_text(background: RGBColor) -> RGBColor {
    let luma = 0.299 * f64::from(background.0)
        + 0.587 * f64::from(background.1)
        + 0.114 * f64::from(background.2);
    if luma > 140.0 {
        RGBColor(0, 0, 0)
    } else {
        RGBColor(255, 255, 255)
    }
}

/// Diverging scale for a correlation in `-1.0..=1.0`.
pub fn coolwarm(r: f64) -> RGBColor {
    gradient(&COOLWARM, (r + 1.0) / 2.0)
}

/// Linear interpolation across evenly spaced colour stops.
pub fn gradient(stops: &[RGBColor], t: f64) -> RGBColor {
    let Some(last) = stops.len().checked_sub(1) else {
        return RGBColor(0, 0, 0);
    };
    if last == 0 {
        return stops[0];
    }
    let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
    let position = t * last as f64;
    let idx = (position.floor() as usize).min(last - 1);
    let frac = position - idx as f64;
    let (a, b) = (stops[idx], stops[idx + 1]);
    let mix = |x: u8, y: u8| (f64::from(x) + (f64::from(y) - f64::from(x)) * frac).round() as u8;
    RGBColor(mix(a.0, b.0), mix(a.1, b.1), mix(a.2, b.2))
}
