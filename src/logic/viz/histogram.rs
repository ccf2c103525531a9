//! Feature histograms with density overlay
//!
//! One canvas split into three side-by-side charts, 50 equal-width bins
//! each, gaussian KDE overlay scaled to count units.

use std::f64::consts::PI;

use plotters::prelude::*;

use crate::constants::{DENSITY_POINTS, HISTOGRAM_BINS, HISTOGRAM_COLUMNS, HISTOGRAM_SIZE};
use crate::logic::dataset::Frame;
use crate::logic::summary;

use super::render::{draw_error, format_tick, RenderedChart};
use super::{theme, VizError};

/// Render the three feature histograms into one RGB buffer.
///
/// All columns are resolved up front, so a missing or non-numeric
/// column fails before anything is drawn.
pub fn render(frame: &Frame) -> Result<RenderedChart, VizError> {
    let mut series: Vec<(&str, Vec<f64>)> = Vec::with_capacity(HISTOGRAM_COLUMNS.len());
    for &name in HISTOGRAM_COLUMNS {
        let column = frame.numeric(name)?;
        let values = column.numeric_values().unwrap_or_default();
        if values.is_empty() {
            return Err(VizError::Draw(format!(
                "column '{}' has no values to bin",
                name
            )));
        }
        series.push((name, values));
    }

    let (width, height) = HISTOGRAM_SIZE;
    let mut buf = RenderedChart::blank(width, height);
    {
        let root = BitMapBackend::with_buffer(&mut buf, (width, height)).into_drawing_area();
        root.fill(&WHITE).map_err(draw_error)?;

        let panels = root.split_evenly((1, series.len()));
        for (panel, (name, values)) in panels.iter().zip(&series) {
            draw_panel(panel, name, values).map_err(draw_error)?;
        }
        root.present().map_err(draw_error)?;
    }

    Ok(RenderedChart::from_buffer(width, height, buf))
}

fn draw_panel(
    area: &DrawingArea<BitMapBackend<'_>, plotters::coord::Shift>,
    name: &str,
    values: &[f64],
) -> Result<(), Box<dyn std::error::Error>> {
    let bins = bin_values(values, HISTOGRAM_BINS);
    let overlay = density_overlay(values, &bins, DENSITY_POINTS);

    let bar_peak = bins.counts.iter().copied().max().unwrap_or(1) as f64;
    let curve_peak = overlay
        .iter()
        .map(|(_, y)| *y)
        .fold(0.0f64, f64::max);
    let y_top = bar_peak.max(curve_peak) * 1.1;

    let mut chart = ChartBuilder::on(area)
        .caption(format!("{} distribution", name), ("sans-serif", 18))
        .margin(12)
        .x_label_area_size(42)
        .y_label_area_size(56)
        .build_cartesian_2d(bins.lo..bins.hi, 0f64..y_top)?;

    chart
        .configure_mesh()
        .bold_line_style(ShapeStyle::from(&theme::GRID))
        .light_line_style(ShapeStyle::from(&TRANSPARENT))
        .x_label_formatter(&|v| format_tick(*v))
        .y_label_formatter(&|v| format!("{:.0}", v))
        .label_style(("sans-serif", 11))
        .draw()?;

    chart.draw_series(bins.counts.iter().enumerate().filter(|(_, c)| **c > 0).map(
        |(i, c)| {
            let x0 = bins.lo + i as f64 * bins.width;
            Rectangle::new(
                [(x0, 0.0), (x0 + bins.width, *c as f64)],
                theme::HIST_FILL.filled(),
            )
        },
    ))?;

    if !overlay.is_empty() {
        chart.draw_series(LineSeries::new(
            overlay,
            ShapeStyle::from(&theme::DENSITY_LINE).stroke_width(2),
        ))?;
    }

    Ok(())
}

// ============================================================================
// BINNING + DENSITY
// ============================================================================

#[derive(Debug, Clone)]
pub struct Bins {
    pub lo: f64,
    pub hi: f64,
    pub width: f64,
    pub counts: Vec<usize>,
}

/// Equal-width bins spanning [min, max]. A constant column gets a unit
/// span around its value so the width never collapses to zero.
pub fn bin_values(values: &[f64], bins: usize) -> Bins {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for v in values {
        lo = lo.min(*v);
        hi = hi.max(*v);
    }
    if !lo.is_finite() || !hi.is_finite() {
        lo = 0.0;
        hi = 1.0;
    }
    if lo == hi {
        lo -= 0.5;
        hi += 0.5;
    }

    let width = (hi - lo) / bins as f64;
    let mut counts = vec![0usize; bins];
    for v in values {
        let idx = (((v - lo) / width) as usize).min(bins - 1);
        counts[idx] += 1;
    }

    Bins {
        lo,
        hi,
        width,
        counts,
    }
}

/// Gaussian KDE on a uniform grid over the bin span, scaled from density
/// to count units (n * bin width) so the curve overlays the bars.
/// Empty when the bandwidth degenerates (constant or tiny samples).
pub fn density_overlay(values: &[f64], bins: &Bins, points: usize) -> Vec<(f64, f64)> {
    let bw = silverman_bandwidth(values);
    if bw <= 0.0 || points < 2 {
        return Vec::new();
    }

    let n = values.len() as f64;
    let scale = n * bins.width;
    let norm = 1.0 / ((2.0 * PI).sqrt() * bw * n);

    (0..points)
        .map(|k| {
            let x = bins.lo + (bins.hi - bins.lo) * k as f64 / (points - 1) as f64;
            let density: f64 = values
                .iter()
                .map(|v| (-0.5 * ((x - v) / bw).powi(2)).exp())
                .sum::<f64>()
                * norm;
            (x, density * scale)
        })
        .collect()
}

/// Silverman's rule of thumb: 0.9 * min(std, IQR / 1.34) * n^(-1/5)
pub fn silverman_bandwidth(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }

    let std = summary::std_dev(values);
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let iqr = summary::percentile(&sorted, 75.0) - summary::percentile(&sorted, 25.0);

    let spread = if iqr > 0.0 { std.min(iqr / 1.34) } else { std };
    if !(spread > 0.0) {
        return 0.0;
    }

    0.9 * spread * (values.len() as f64).powf(-0.2)
}
