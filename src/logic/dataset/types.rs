//! Frame types - the in-memory shape of the loaded dataset
//!
//! A `Frame` is an ordered list of equally-sized named columns. Numeric
//! columns (Int64/Float64) store `Option<f64>` per cell, text columns
//! store `Option<String>`; `None` marks an empty cell in the source file.

use serde::{Deserialize, Serialize};

// ============================================================================
// ERRORS
// ============================================================================

#[derive(Debug)]
pub enum DatasetError {
    IoError(std::io::Error),
    CsvError(csv::Error),
    /// Named column does not exist in the frame
    ColumnNotFound(String),
    /// Named column exists but holds text, not numbers
    NotNumeric(String),
    /// File had no header row or no columns at all
    Empty,
}

impl std::fmt::Display for DatasetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DatasetError::IoError(e) => write!(f, "IO Error: {}", e),
            DatasetError::CsvError(e) => write!(f, "CSV Error: {}", e),
            DatasetError::ColumnNotFound(name) => {
                write!(f, "Column not found: '{}'", name)
            }
            DatasetError::NotNumeric(name) => {
                write!(f, "Column '{}' is not numeric", name)
            }
            DatasetError::Empty => write!(f, "Dataset has no columns"),
        }
    }
}

impl std::error::Error for DatasetError {}

impl From<std::io::Error> for DatasetError {
    fn from(err: std::io::Error) -> Self {
        DatasetError::IoError(err)
    }
}

impl From<csv::Error> for DatasetError {
    fn from(err: csv::Error) -> Self {
        DatasetError::CsvError(err)
    }
}

// ============================================================================
// COLUMN
// ============================================================================

/// Inferred column type, in inference priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DType {
    /// Every non-empty cell parses as i64
    Int64,
    /// Every non-empty cell parses as f64, at least one is non-integral
    Float64,
    /// Anything else
    Text,
}

impl DType {
    pub fn is_numeric(&self) -> bool {
        matches!(self, DType::Int64 | DType::Float64)
    }
}

impl std::fmt::Display for DType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DType::Int64 => write!(f, "Int64"),
            DType::Float64 => write!(f, "Float64"),
            DType::Text => write!(f, "Text"),
        }
    }
}

/// Cell storage, matching the column dtype.
///
/// Int64 cells are kept as f64: flow counters stay well below 2^53 so
/// the representation is lossless, and every consumer (statistics,
/// correlation, histograms) wants f64 anyway.
#[derive(Debug, Clone)]
pub enum ColumnData {
    Numeric(Vec<Option<f64>>),
    Text(Vec<Option<String>>),
}

#[derive(Debug, Clone)]
pub struct Column {
    pub name: String,
    pub dtype: DType,
    pub data: ColumnData,
}

impl Column {
    pub fn len(&self) -> usize {
        match &self.data {
            ColumnData::Numeric(v) => v.len(),
            ColumnData::Text(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Cells that are actually populated
    pub fn non_null_count(&self) -> usize {
        match &self.data {
            ColumnData::Numeric(v) => v.iter().filter(|c| c.is_some()).count(),
            ColumnData::Text(v) => v.iter().filter(|c| c.is_some()).count(),
        }
    }

    /// Nullable numeric cells, or None for text columns
    pub fn numeric_cells(&self) -> Option<&[Option<f64>]> {
        match &self.data {
            ColumnData::Numeric(v) => Some(v),
            ColumnData::Text(_) => None,
        }
    }

    /// Populated numeric values only, source order preserved
    pub fn numeric_values(&self) -> Option<Vec<f64>> {
        self.numeric_cells()
            .map(|cells| cells.iter().filter_map(|c| *c).collect())
    }
}

// ============================================================================
// FRAME
// ============================================================================

/// The loaded dataset: ordered named columns of equal length
#[derive(Debug, Clone)]
pub struct Frame {
    columns: Vec<Column>,
    rows: usize,
}

impl Frame {
    /// Assemble a frame from columns. All columns must share one length;
    /// the loader guarantees this, tests may not.
    pub fn new(columns: Vec<Column>) -> Result<Self, DatasetError> {
        let rows = match columns.first() {
            Some(c) => c.len(),
            None => return Err(DatasetError::Empty),
        };
        debug_assert!(columns.iter().all(|c| c.len() == rows));
        Ok(Self { columns, rows })
    }

    pub fn n_rows(&self) -> usize {
        self.rows
    }

    pub fn n_cols(&self) -> usize {
        self.columns.len()
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Look up a column by name
    pub fn column(&self, name: &str) -> Result<&Column, DatasetError> {
        self.columns
            .iter()
            .find(|c| c.name == name)
            .ok_or_else(|| DatasetError::ColumnNotFound(name.to_string()))
    }

    /// Look up a column by name, requiring a numeric dtype
    pub fn numeric(&self, name: &str) -> Result<&Column, DatasetError> {
        let col = self.column(name)?;
        if !col.dtype.is_numeric() {
            return Err(DatasetError::NotNumeric(name.to_string()));
        }
        Ok(col)
    }

    /// Numeric columns in source order (text columns skipped)
    pub fn numeric_columns(&self) -> Vec<&Column> {
        self.columns
            .iter()
            .filter(|c| c.dtype.is_numeric())
            .collect()
    }
}
