//! Dataset Module - Column-Oriented Frame
//!
//! Holds the one dataset this tool ever sees: loaded once from CSV,
//! read by every later stage, never mutated.
//!
//! # Architecture
//! - `types.rs`: `Frame`, `Column`, `DType`, `DatasetError`
//! - `loader.rs`: CSV reading + per-column dtype inference
//!
//! # Failure Strategy
//! Missing file, ragged rows, or a lookup of an absent column all
//! surface as `DatasetError` and abort the pipeline.

pub mod types;
pub mod loader;
#[cfg(test)]
mod tests;

pub use types::{Column, ColumnData, DType, DatasetError, Frame};
pub use loader::load_dataset;
