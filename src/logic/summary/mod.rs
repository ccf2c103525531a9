//! Summary Module - Schema Info & Descriptive Statistics
//!
//! Read-only inspection of the loaded frame:
//! - `dataset_info` mirrors the column/dtype/non-null schema report
//! - `describe` computes count/mean/std/min/quartiles/max per numeric column
//! - `class_counts` tallies the label column for the distribution plot
//!
//! No side effects besides what the caller prints.

pub mod types;
#[cfg(test)]
mod tests;

use std::collections::BTreeMap;

use super::dataset::{ColumnData, DatasetError, Frame};
pub use types::{ColumnInfo, ColumnStats, DescribeReport, InfoReport};

// ============================================================================
// REPORTS
// ============================================================================

/// Schema report: per-column name, dtype, and non-null count
pub fn dataset_info(frame: &Frame) -> InfoReport {
    let columns = frame
        .columns()
        .iter()
        .map(|c| ColumnInfo {
            name: c.name.clone(),
            dtype: c.dtype,
            non_null: c.non_null_count(),
        })
        .collect();

    InfoReport {
        rows: frame.n_rows(),
        columns,
    }
}

/// Descriptive statistics over every numeric column.
///
/// Nulls are skipped cell-wise; a column with no populated cells reports
/// count 0 and NaN for every statistic.
pub fn describe(frame: &Frame) -> DescribeReport {
    let columns = frame
        .numeric_columns()
        .iter()
        .map(|c| {
            let values = c.numeric_values().unwrap_or_default();
            column_stats(&c.name, &values)
        })
        .collect();

    DescribeReport { columns }
}

fn column_stats(name: &str, values: &[f64]) -> ColumnStats {
    let count = values.len();
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    ColumnStats {
        name: name.to_string(),
        count,
        mean: mean(values),
        std: std_dev(values),
        min: sorted.first().copied().unwrap_or(f64::NAN),
        q25: percentile(&sorted, 25.0),
        median: percentile(&sorted, 50.0),
        q75: percentile(&sorted, 75.0),
        max: sorted.last().copied().unwrap_or(f64::NAN),
    }
}

/// Frequency of each distinct non-null label value, sorted by value.
///
/// Numeric labels sort numerically and print without a fractional part
/// when the column is integral; text labels sort lexically.
pub fn class_counts(frame: &Frame, label: &str) -> Result<Vec<(String, usize)>, DatasetError> {
    let column = frame.column(label)?;

    match &column.data {
        ColumnData::Numeric(cells) => {
            let mut values: Vec<f64> = cells.iter().filter_map(|c| *c).collect();
            values.sort_by(|a, b| a.total_cmp(b));

            let mut out: Vec<(String, usize)> = Vec::new();
            for v in values {
                let key = format_label(v);
                match out.last_mut() {
                    Some((last, n)) if *last == key => *n += 1,
                    _ => out.push((key, 1)),
                }
            }
            Ok(out)
        }
        ColumnData::Text(cells) => {
            let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
            for cell in cells.iter().flatten() {
                *counts.entry(cell.as_str()).or_insert(0) += 1;
            }
            Ok(counts
                .into_iter()
                .map(|(k, n)| (k.to_string(), n))
                .collect())
        }
    }
}

fn format_label(v: f64) -> String {
    if v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else {
        format!("{}", v)
    }
}

// ============================================================================
// STATISTICS PRIMITIVES
// ============================================================================

pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample standard deviation (n-1 denominator)
pub fn std_dev(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return f64::NAN;
    }
    let m = mean(values);
    let ss: f64 = values.iter().map(|v| (v - m) * (v - m)).sum();
    (ss / (values.len() - 1) as f64).sqrt()
}

/// Percentile over an ascending-sorted slice, linearly interpolating
/// between order statistics
pub fn percentile(sorted: &[f64], p: f64) -> f64 {
    if sorted.is_empty() {
        return f64::NAN;
    }
    if sorted.len() == 1 {
        return sorted[0];
    }
    let rank = (p / 100.0) * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    let frac = rank - lo as f64;
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}
