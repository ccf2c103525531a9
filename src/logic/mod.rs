//! Logic Module - Analysis Engines
//!
//! - `dataset/` - Column-oriented frame + CSV loader
//! - `summary/` - Schema info, descriptive statistics, class counts
//! - `correlation/` - Pairwise Pearson matrix over numeric columns
//! - `viz/` - Chart rendering and blocking display windows

pub mod dataset;
pub mod summary;
pub mod correlation;
pub mod viz;
