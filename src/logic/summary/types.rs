//! Report types for the stdout summaries
//!
//! Both reports implement `Display` for the console tables and
//! `to_log_entry()` for structured debug logging.

use serde::Serialize;

use crate::logic::dataset::DType;

// ============================================================================
// INFO REPORT
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct ColumnInfo {
    pub name: String,
    pub dtype: DType,
    pub non_null: usize,
}

/// Schema report: row count plus per-column dtype and non-null count
#[derive(Debug, Clone, Serialize)]
pub struct InfoReport {
    pub rows: usize,
    pub columns: Vec<ColumnInfo>,
}

impl InfoReport {
    /// JSON form for debug logging
    pub fn to_log_entry(&self) -> serde_json::Value {
        serde_json::json!({
            "rows": self.rows,
            "columns": self.columns,
        })
    }
}

impl std::fmt::Display for InfoReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name_width = self
            .columns
            .iter()
            .map(|c| c.name.len())
            .max()
            .unwrap_or(6)
            .max(6);

        writeln!(f, "{} entries, {} columns", self.rows, self.columns.len())?;
        writeln!(
            f,
            " #   {:<name_width$}  {:>9}  {}",
            "column", "non-null", "dtype"
        )?;
        for (i, c) in self.columns.iter().enumerate() {
            writeln!(
                f,
                " {:<3} {:<name_width$}  {:>9}  {}",
                i, c.name, c.non_null, c.dtype
            )?;
        }

        let ints = self.columns.iter().filter(|c| c.dtype == DType::Int64).count();
        let floats = self
            .columns
            .iter()
            .filter(|c| c.dtype == DType::Float64)
            .count();
        let texts = self.columns.iter().filter(|c| c.dtype == DType::Text).count();
        write!(f, "dtypes: Int64({}), Float64({}), Text({})", ints, floats, texts)
    }
}

// ============================================================================
// DESCRIBE REPORT
// ============================================================================

/// One numeric column's descriptive statistics
#[derive(Debug, Clone, Serialize)]
pub struct ColumnStats {
    pub name: String,
    pub count: usize,
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub q25: f64,
    pub median: f64,
    pub q75: f64,
    pub max: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct DescribeReport {
    pub columns: Vec<ColumnStats>,
}

impl DescribeReport {
    pub fn column(&self, name: &str) -> Option<&ColumnStats> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// JSON form for debug logging
    pub fn to_log_entry(&self) -> serde_json::Value {
        serde_json::json!({ "columns": self.columns })
    }
}

impl std::fmt::Display for DescribeReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name_width = self
            .columns
            .iter()
            .map(|c| c.name.len())
            .max()
            .unwrap_or(6)
            .max(6);

        writeln!(
            f,
            "{:<name_width$} {:>8} {:>14} {:>14} {:>14} {:>14} {:>14} {:>14} {:>14}",
            "column", "count", "mean", "std", "min", "25%", "50%", "75%", "max"
        )?;
        for c in &self.columns {
            writeln!(
                f,
                "{:<name_width$} {:>8} {:>14} {:>14} {:>14} {:>14} {:>14} {:>14} {:>14}",
                c.name,
                c.count,
                fmt_stat(c.mean),
                fmt_stat(c.std),
                fmt_stat(c.min),
                fmt_stat(c.q25),
                fmt_stat(c.median),
                fmt_stat(c.q75),
                fmt_stat(c.max)
            )?;
        }
        Ok(())
    }
}

fn fmt_stat(v: f64) -> String {
    if v.is_nan() {
        "NaN".to_string()
    } else if v == 0.0 || (v.abs() >= 1e-4 && v.abs() < 1e12) {
        format!("{:.4}", v)
    } else {
        format!("{:.4e}", v)
    }
}
