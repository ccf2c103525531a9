//! Class distribution count plot
//!
//! Bar chart of label frequencies, one viridis-shaded bar per class.

use plotters::prelude::*;

use crate::constants::{COUNT_PLOT_SIZE, LABEL_COLUMN};
use crate::logic::dataset::Frame;
use crate::logic::summary;

use super::render::{draw_error, RenderedChart};
use super::{theme, VizError};

/// Render the label distribution into an RGB buffer.
///
/// Fails with a column-not-found error before any drawing if the label
/// column is absent.
pub fn render(frame: &Frame) -> Result<RenderedChart, VizError> {
    let counts = summary::class_counts(frame, LABEL_COLUMN)?;
    if counts.is_empty() {
        return Err(VizError::Draw(format!(
            "column '{}' has no values to count",
            LABEL_COLUMN
        )));
    }

    let (width, height) = COUNT_PLOT_SIZE;
    let mut buf = RenderedChart::blank(width, height);
    {
        let root = BitMapBackend::with_buffer(&mut buf, (width, height)).into_drawing_area();
        draw(&root, &counts).map_err(draw_error)?;
        root.present().map_err(draw_error)?;
    }

    Ok(RenderedChart::from_buffer(width, height, buf))
}

fn draw(
    root: &DrawingArea<BitMapBackend<'_>, plotters::coord::Shift>,
    counts: &[(String, usize)],
) -> Result<(), Box<dyn std::error::Error>> {
    root.fill(&WHITE)?;

    let n = counts.len();
    let y_max = counts.iter().map(|(_, c)| *c).max().unwrap_or(1) as f64 * 1.1;

    let mut chart = ChartBuilder::on(root)
        .caption(
            "Benign vs. malicious traffic distribution",
            ("sans-serif", 20),
        )
        .margin(12)
        .x_label_area_size(48)
        .y_label_area_size(60)
        .build_cartesian_2d((0..n).into_segmented(), 0f64..y_max)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .bold_line_style(ShapeStyle::from(&theme::GRID))
        .light_line_style(ShapeStyle::from(&TRANSPARENT))
        .x_desc("Class (0 = benign, 1 = malicious)")
        .y_desc("Sample count")
        .axis_desc_style(("sans-serif", 14))
        .label_style(("sans-serif", 12))
        .x_label_formatter(&|seg| match seg {
            SegmentValue::CenterOf(i) if *i < n => counts[*i].0.clone(),
            _ => String::new(),
        })
        .y_label_formatter(&|v| format!("{:.0}", v))
        .draw()?;

    // Segment width drives the bar inset so bars stay separated at any
    // class count
    let inset = (root.dim_in_pixel().0 / (n as u32 + 1) / 6).max(2);

    chart.draw_series(counts.iter().enumerate().map(|(i, (_, c))| {
        let t = if n <= 1 {
            0.5
        } else {
            i as f64 / (n - 1) as f64
        };
        let mut bar = Rectangle::new(
            [
                (SegmentValue::Exact(i), 0.0),
                (SegmentValue::Exact(i + 1), *c as f64),
            ],
            theme::viridis(t).filled(),
        );
        bar.set_margin(0, 0, inset, inset);
        bar
    }))?;

    Ok(())
}
