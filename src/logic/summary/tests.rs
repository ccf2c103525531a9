use super::*;
use crate::logic::dataset::{Column, ColumnData, DType, Frame};

const EPS: f64 = 1e-9;

fn numeric_column(name: &str, cells: Vec<Option<f64>>) -> Column {
    Column {
        name: name.to_string(),
        dtype: DType::Float64,
        data: ColumnData::Numeric(cells),
    }
}

fn int_column(name: &str, values: &[i64]) -> Column {
    Column {
        name: name.to_string(),
        dtype: DType::Int64,
        data: ColumnData::Numeric(values.iter().map(|v| Some(*v as f64)).collect()),
    }
}

fn text_column(name: &str, values: &[&str]) -> Column {
    Column {
        name: name.to_string(),
        dtype: DType::Text,
        data: ColumnData::Text(values.iter().map(|v| Some(v.to_string())).collect()),
    }
}

#[test]
fn test_describe_known_values() {
    let frame = Frame::new(vec![numeric_column(
        "x",
        vec![Some(1.0), Some(2.0), Some(3.0), Some(4.0), Some(5.0)],
    )])
    .unwrap();

    let report = describe(&frame);
    let stats = report.column("x").unwrap();

    assert_eq!(stats.count, 5);
    assert!((stats.mean - 3.0).abs() < EPS);
    assert!((stats.std - 2.5f64.sqrt()).abs() < EPS);
    assert!((stats.min - 1.0).abs() < EPS);
    assert!((stats.q25 - 2.0).abs() < EPS);
    assert!((stats.median - 3.0).abs() < EPS);
    assert!((stats.q75 - 4.0).abs() < EPS);
    assert!((stats.max - 5.0).abs() < EPS);
}

#[test]
fn test_describe_skips_nulls() {
    let frame = Frame::new(vec![numeric_column(
        "x",
        vec![Some(1.0), None, Some(3.0)],
    )])
    .unwrap();

    let stats = describe(&frame);
    let x = stats.column("x").unwrap();
    assert_eq!(x.count, 2);
    assert!((x.mean - 2.0).abs() < EPS);
}

#[test]
fn test_describe_empty_column_is_nan() {
    let frame = Frame::new(vec![numeric_column("x", vec![None, None])]).unwrap();

    let stats = describe(&frame);
    let x = stats.column("x").unwrap();
    assert_eq!(x.count, 0);
    assert!(x.mean.is_nan());
    assert!(x.min.is_nan());
}

#[test]
fn test_describe_excludes_text_columns() {
    let frame = Frame::new(vec![
        int_column("a", &[1, 2]),
        text_column("proto", &["tcp", "udp"]),
    ])
    .unwrap();

    let stats = describe(&frame);
    assert!(stats.column("a").is_some());
    assert!(stats.column("proto").is_none());
}

#[test]
fn test_percentile_interpolates() {
    let sorted = [1.0, 2.0, 3.0, 4.0];
    assert!((percentile(&sorted, 25.0) - 1.75).abs() < EPS);
    assert!((percentile(&sorted, 50.0) - 2.5).abs() < EPS);
    assert!((percentile(&sorted, 100.0) - 4.0).abs() < EPS);
}

#[test]
fn test_class_counts_sum_to_rows() {
    let frame = Frame::new(vec![int_column("Label", &[0, 1, 0, 1, 0, 1, 1])]).unwrap();

    let counts = class_counts(&frame, "Label").unwrap();
    assert_eq!(counts.len(), 2);
    assert_eq!(counts[0], ("0".to_string(), 3));
    assert_eq!(counts[1], ("1".to_string(), 4));

    let total: usize = counts.iter().map(|(_, n)| n).sum();
    assert_eq!(total, frame.n_rows());
}

#[test]
fn test_class_counts_text_labels() {
    let frame = Frame::new(vec![text_column(
        "Label",
        &["benign", "malicious", "benign"],
    )])
    .unwrap();

    let counts = class_counts(&frame, "Label").unwrap();
    assert_eq!(counts[0], ("benign".to_string(), 2));
    assert_eq!(counts[1], ("malicious".to_string(), 1));
}

#[test]
fn test_class_counts_missing_column() {
    let frame = Frame::new(vec![int_column("a", &[1])]).unwrap();

    let err = class_counts(&frame, "Label").unwrap_err();
    assert!(err.to_string().contains("Label"));
}

#[test]
fn test_info_report() {
    let frame = Frame::new(vec![
        int_column("a", &[1, 2, 3]),
        numeric_column("b", vec![Some(1.5), None, Some(2.5)]),
        text_column("c", &["x", "y", "z"]),
    ])
    .unwrap();

    let info = dataset_info(&frame);
    assert_eq!(info.rows, 3);
    assert_eq!(info.columns.len(), 3);
    assert_eq!(info.columns[1].non_null, 2);

    let rendered = info.to_string();
    assert!(rendered.contains("a"));
    assert!(rendered.contains("Int64(1), Float64(1), Text(1)"));
}

#[test]
fn test_reports_serialize_for_logging() {
    let frame = Frame::new(vec![int_column("a", &[1, 2])]).unwrap();

    let info = dataset_info(&frame).to_log_entry();
    assert_eq!(info["rows"], 2);

    let stats = describe(&frame).to_log_entry();
    assert_eq!(stats["columns"][0]["count"], 2);
}
