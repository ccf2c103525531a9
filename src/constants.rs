//! Central Configuration Constants
//!
//! Single source of truth for the dataset location, the columns the
//! analysis references by name, and chart geometry.

/// Input dataset, relative to the working directory.
///
/// The file is expected to be pre-cleaned upstream; this tool never
/// mutates or rewrites it.
pub const DATASET_PATH: &str = "cleaned_dataset.csv";

/// Target column: 0 = benign traffic, 1 = malicious traffic
pub const LABEL_COLUMN: &str = "Label";

/// Columns rendered as histograms, in display order
pub const HISTOGRAM_COLUMNS: &[&str] = &[
    "Flow Duration",
    "Total Fwd Packets",
    "Total Backward Packets",
];

/// Bin count for every feature histogram
pub const HISTOGRAM_BINS: usize = 50;

/// Sample points for the smoothed density overlay
pub const DENSITY_POINTS: usize = 200;

// ============================================
// Canvas dimensions (width, height) in pixels
// ============================================

pub const COUNT_PLOT_SIZE: (u32, u32) = (600, 400);
pub const HEATMAP_SIZE: (u32, u32) = (1200, 800);
pub const HISTOGRAM_SIZE: (u32, u32) = (1800, 500);

/// App version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// App name
pub const APP_NAME: &str = "Flow-EDA";
