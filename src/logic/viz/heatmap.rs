//! Correlation heatmap
//!
//! Color-mapped grid of the pairwise Pearson matrix, coolwarm ramp over
//! [-1, 1], cell borders, no numeric annotations. Undefined (NaN)
//! correlations render as neutral cells. Laid out directly in pixel
//! space so row/column labels sit centered on their cells.

use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::{FontTransform, IntoFont, TextStyle};

use crate::constants::HEATMAP_SIZE;
use crate::logic::correlation::{self, CorrelationMatrix};
use crate::logic::dataset::Frame;

use super::render::{draw_error, RenderedChart};
use super::{theme, VizError};

// Pixel layout around the cell grid
const MARGIN_TOP: i32 = 52;
const MARGIN_LEFT: i32 = 215;
const MARGIN_BOTTOM: i32 = 185;
const MARGIN_RIGHT: i32 = 95;

pub fn render(frame: &Frame) -> Result<RenderedChart, VizError> {
    let matrix = correlation::correlation_matrix(frame);
    if matrix.is_empty() {
        return Err(VizError::Draw("no numeric columns to correlate".to_string()));
    }

    let (width, height) = HEATMAP_SIZE;
    let mut buf = RenderedChart::blank(width, height);
    {
        let root = BitMapBackend::with_buffer(&mut buf, (width, height)).into_drawing_area();
        draw(&root, &matrix).map_err(draw_error)?;
        root.present().map_err(draw_error)?;
    }

    Ok(RenderedChart::from_buffer(width, height, buf))
}

/// Map a coefficient to its cell color
pub fn cell_color(r: f64) -> RGBColor {
    if r.is_nan() {
        theme::NAN_CELL
    } else {
        theme::coolwarm((r + 1.0) / 2.0)
    }
}

fn draw(
    root: &DrawingArea<BitMapBackend<'_>, plotters::coord::Shift>,
    matrix: &CorrelationMatrix,
) -> Result<(), Box<dyn std::error::Error>> {
    root.fill(&WHITE)?;

    let (width, height) = root.dim_in_pixel();
    let plot_w = width as i32 - MARGIN_LEFT - MARGIN_RIGHT;
    let plot_h = height as i32 - MARGIN_TOP - MARGIN_BOTTOM;
    let n = matrix.size() as i32;

    let title_style = TextStyle::from(("sans-serif", 22).into_font())
        .color(&theme::TEXT)
        .pos(Pos::new(HPos::Center, VPos::Top));
    root.draw(&Text::new(
        "Feature correlation matrix",
        ((width / 2) as i32, 14),
        title_style,
    ))?;

    // Cells, matrix row 0 at the top
    for i in 0..n {
        for j in 0..n {
            let r = matrix.get(i as usize, j as usize);
            let x0 = MARGIN_LEFT + j * plot_w / n;
            let x1 = MARGIN_LEFT + (j + 1) * plot_w / n;
            let y0 = MARGIN_TOP + i * plot_h / n;
            let y1 = MARGIN_TOP + (i + 1) * plot_h / n;
            root.draw(&Rectangle::new(
                [(x0, y0), (x1, y1)],
                cell_color(r).filled(),
            ))?;
            root.draw(&Rectangle::new(
                [(x0, y0), (x1, y1)],
                ShapeStyle::from(&WHITE).stroke_width(1),
            ))?;
        }
    }

    // Row labels, right-aligned against the grid
    let row_style = TextStyle::from(("sans-serif", 13).into_font())
        .color(&theme::TEXT)
        .pos(Pos::new(HPos::Right, VPos::Center));
    for i in 0..n {
        let cy = MARGIN_TOP + i * plot_h / n + plot_h / (2 * n);
        root.draw(&Text::new(
            matrix.names[i as usize].clone(),
            (MARGIN_LEFT - 8, cy),
            row_style.clone(),
        ))?;
    }

    // Column labels, rotated downward under each cell
    let col_style = TextStyle::from(("sans-serif", 13).into_font().transform(FontTransform::Rotate90))
        .color(&theme::TEXT)
        .pos(Pos::new(HPos::Left, VPos::Center));
    for j in 0..n {
        let cx = MARGIN_LEFT + j * plot_w / n + plot_w / (2 * n);
        root.draw(&Text::new(
            matrix.names[j as usize].clone(),
            (cx, MARGIN_TOP + plot_h + 8),
            col_style.clone(),
        ))?;
    }

    draw_colorbar(root, plot_w, plot_h)?;

    Ok(())
}

fn draw_colorbar(
    root: &DrawingArea<BitMapBackend<'_>, plotters::coord::Shift>,
    plot_w: i32,
    plot_h: i32,
) -> Result<(), Box<dyn std::error::Error>> {
    let x0 = MARGIN_LEFT + plot_w + 30;
    let bar_w = 18;

    for k in 0..plot_h {
        let t = 1.0 - k as f64 / plot_h as f64;
        root.draw(&Rectangle::new(
            [(x0, MARGIN_TOP + k), (x0 + bar_w, MARGIN_TOP + k + 1)],
            theme::coolwarm(t).filled(),
        ))?;
    }

    let tick_style = TextStyle::from(("sans-serif", 12).into_font())
        .color(&theme::TEXT)
        .pos(Pos::new(HPos::Left, VPos::Center));
    for (label, frac) in [("1.0", 0.0), ("0.5", 0.25), ("0.0", 0.5), ("-0.5", 0.75), ("-1.0", 1.0)] {
        let y = MARGIN_TOP + (plot_h as f64 * frac) as i32;
        root.draw(&Text::new(label, (x0 + bar_w + 6, y), tick_style.clone()))?;
    }

    Ok(())
}
