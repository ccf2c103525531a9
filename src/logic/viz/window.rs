//! Blocking chart presentation
//!
//! Shows a rendered buffer in a desktop window and returns only when the
//! user dismisses it. Charts are never written to disk.

use minifb::{Key, Window, WindowOptions};

use super::render::RenderedChart;
use super::VizError;

/// Present a chart; blocks until the window is closed or Escape pressed
pub fn present(title: &str, chart: &RenderedChart) -> Result<(), VizError> {
    let width = chart.width as usize;
    let height = chart.height as usize;
    let pixels = chart.to_argb();

    let mut window = Window::new(title, width, height, WindowOptions::default())
        .map_err(|e| VizError::Window(e.to_string()))?;
    window.set_target_fps(60);

    while window.is_open() && !window.is_key_down(Key::Escape) {
        window
            .update_with_buffer(&pixels, width, height)
            .map_err(|e| VizError::Window(e.to_string()))?;
    }

    log::debug!("window '{}' dismissed", title);
    Ok(())
}
