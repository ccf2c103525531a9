//! Rendered chart buffers and shared drawing helpers

use super::VizError;

/// A finished chart: packed RGB pixels plus dimensions
#[derive(Debug, Clone)]
pub struct RenderedChart {
    pub width: u32,
    pub height: u32,
    /// Row-major RGB, 3 bytes per pixel
    pub pixels: Vec<u8>,
}

impl RenderedChart {
    /// Fresh all-white buffer sized for `BitMapBackend::with_buffer`
    pub fn blank(width: u32, height: u32) -> Vec<u8> {
        vec![255u8; (width as usize) * (height as usize) * 3]
    }

    pub fn from_buffer(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Repack into 0RGB u32 pixels for the display window
    pub fn to_argb(&self) -> Vec<u32> {
        self.pixels
            .chunks_exact(3)
            .map(|px| ((px[0] as u32) << 16) | ((px[1] as u32) << 8) | (px[2] as u32))
            .collect()
    }
}

/// Map a plotters error into our draw failure
pub fn draw_error<E: std::fmt::Display>(e: E) -> VizError {
    VizError::Draw(e.to_string())
}

/// Axis tick formatter that keeps wide flow-counter ranges readable
pub fn format_tick(v: f64) -> String {
    let a = v.abs();
    if a >= 1e6 {
        format!("{:.1e}", v)
    } else if a >= 100.0 || v.fract() == 0.0 {
        format!("{:.0}", v)
    } else {
        format!("{:.2}", v)
    }
}
