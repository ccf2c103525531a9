//! Chart palette
//!
//! Light "whitegrid" styling: white plot area, grey gridlines, a viridis
//! ramp for categorical bars and a coolwarm diverging ramp for the
//! correlation heatmap.

use plotters::style::RGBColor;

pub const GRID: RGBColor = RGBColor(222, 222, 226);
pub const TEXT: RGBColor = RGBColor(38, 38, 38);

/// Histogram bar fill
pub const HIST_FILL: RGBColor = RGBColor(70, 130, 180);
/// Density overlay line
pub const DENSITY_LINE: RGBColor = RGBColor(23, 63, 95);

/// Heatmap cell for undefined (NaN) correlations
pub const NAN_CELL: RGBColor = RGBColor(240, 240, 240);

const VIRIDIS: &[(u8, u8, u8)] = &[
    (68, 1, 84),
    (72, 40, 120),
    (62, 74, 137),
    (49, 104, 142),
    (38, 130, 142),
    (31, 158, 137),
    (53, 183, 121),
    (109, 205, 89),
    (180, 222, 44),
    (253, 231, 37),
];

const COOLWARM: &[(u8, u8, u8)] = &[
    (59, 76, 192),
    (98, 130, 234),
    (141, 176, 254),
    (184, 208, 249),
    (221, 221, 221),
    (245, 196, 173),
    (244, 154, 123),
    (222, 96, 77),
    (180, 4, 38),
];

/// Sequential viridis ramp, `t` in [0, 1]
pub fn viridis(t: f64) -> RGBColor {
    sample_ramp(VIRIDIS, t)
}

/// Diverging coolwarm ramp, `t` in [0, 1] (0 = cool, 0.5 = neutral, 1 = warm)
pub fn coolwarm(t: f64) -> RGBColor {
    sample_ramp(COOLWARM, t)
}

fn sample_ramp(stops: &[(u8, u8, u8)], t: f64) -> RGBColor {
    let t = t.clamp(0.0, 1.0);
    let pos = t * (stops.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let frac = pos - lo as f64;

    let (r0, g0, b0) = stops[lo];
    let (r1, g1, b1) = stops[hi];
    RGBColor(
        lerp(r0, r1, frac),
        lerp(g0, g1, frac),
        lerp(b0, b1, frac),
    )
}

fn lerp(a: u8, b: u8, t: f64) -> u8 {
    (a as f64 + (b as f64 - a as f64) * t).round() as u8
}
