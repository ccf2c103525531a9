//! Viz Module - Chart Rendering & Display
//!
//! Each chart is drawn with plotters into an in-memory RGB bitmap and
//! then presented in a blocking window. Rendering and presentation are
//! split so the drawing path stays testable without a display.
//!
//! # Architecture
//! - `theme.rs`: palette (whitegrid background, viridis/coolwarm ramps)
//! - `render.rs`: `RenderedChart` buffer type + shared helpers
//! - `count_plot.rs` / `heatmap.rs` / `histogram.rs`: the chart kinds
//! - `window.rs`: minifb presentation, blocks until dismissed

pub mod theme;
pub mod render;
pub mod count_plot;
pub mod heatmap;
pub mod histogram;
pub mod window;
#[cfg(test)]
mod tests;

use super::dataset::{DatasetError, Frame};
pub use render::RenderedChart;

// ============================================================================
// ERRORS
// ============================================================================

#[derive(Debug)]
pub enum VizError {
    /// Dataset lookup failed before any drawing happened
    Dataset(DatasetError),
    /// Chart drawing failed
    Draw(String),
    /// Display window could not be opened or updated
    Window(String),
}

impl std::fmt::Display for VizError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VizError::Dataset(e) => write!(f, "{}", e),
            VizError::Draw(msg) => write!(f, "Draw Error: {}", msg),
            VizError::Window(msg) => write!(f, "Window Error: {}", msg),
        }
    }
}

impl std::error::Error for VizError {}

impl From<DatasetError> for VizError {
    fn from(err: DatasetError) -> Self {
        VizError::Dataset(err)
    }
}

// ============================================================================
// PIPELINE ENTRY POINTS
// ============================================================================

/// Count plot of the label column; blocks until the window is closed
pub fn show_class_distribution(frame: &Frame) -> Result<(), VizError> {
    log::info!("Rendering class distribution plot...");
    let chart = count_plot::render(frame)?;
    window::present("Class distribution", &chart)
}

/// Correlation heatmap over all numeric columns; blocks until closed
pub fn show_correlation_heatmap(frame: &Frame) -> Result<(), VizError> {
    log::info!("Rendering correlation heatmap...");
    let chart = heatmap::render(frame)?;
    window::present("Correlation matrix", &chart)
}

/// Side-by-side feature histograms; blocks until closed
pub fn show_feature_histograms(frame: &Frame) -> Result<(), VizError> {
    log::info!("Rendering feature histograms...");
    let chart = histogram::render(frame)?;
    window::present("Feature distributions", &chart)
}
