use std::path::Path;

use super::loader::load_dataset;
use super::types::{DType, DatasetError};

const SAMPLE: &str = "\
Label,Flow Duration,Total Fwd Packets,Total Backward Packets,Protocol
0,100,3,2,tcp
1,250,10,8,udp
0,90,2,1,tcp
1,400,20,15,tcp
0,120,4,3,udp
";

fn write_csv(dir: &tempfile::TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("cleaned_dataset.csv");
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_load_well_formed_csv() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(&dir, SAMPLE);

    let frame = load_dataset(&path).unwrap();
    assert_eq!(frame.n_rows(), 5);
    assert_eq!(frame.n_cols(), 5);
    assert!(frame.column("Label").is_ok());
    assert!(frame.column("Flow Duration").is_ok());
}

#[test]
fn test_dtype_inference() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(&dir, "a,b,c\n1,1.5,tcp\n2,2.0,udp\n");

    let frame = load_dataset(&path).unwrap();
    assert_eq!(frame.column("a").unwrap().dtype, DType::Int64);
    assert_eq!(frame.column("b").unwrap().dtype, DType::Float64);
    assert_eq!(frame.column("c").unwrap().dtype, DType::Text);
}

#[test]
fn test_nulls_tracked_per_cell() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(&dir, "a,b\n1,x\n,\n3,y\n");

    let frame = load_dataset(&path).unwrap();
    let a = frame.column("a").unwrap();

    // Nulls never promote the dtype
    assert_eq!(a.dtype, DType::Int64);
    assert_eq!(a.len(), 3);
    assert_eq!(a.non_null_count(), 2);
    assert_eq!(a.numeric_values().unwrap(), vec![1.0, 3.0]);

    let b = frame.column("b").unwrap();
    assert_eq!(b.dtype, DType::Text);
    assert_eq!(b.non_null_count(), 2);
}

#[test]
fn test_missing_file_fails() {
    let result = load_dataset(Path::new("no_such_dataset.csv"));
    assert!(matches!(result, Err(DatasetError::IoError(_))));
}

#[test]
fn test_missing_column_lookup() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(&dir, "a\n1\n2\n");

    let frame = load_dataset(&path).unwrap();
    let err = frame.column("Label").unwrap_err();
    assert!(matches!(err, DatasetError::ColumnNotFound(_)));
    assert!(err.to_string().contains("Label"));
}

#[test]
fn test_numeric_rejects_text_column() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(&dir, SAMPLE);

    let frame = load_dataset(&path).unwrap();
    let err = frame.numeric("Protocol").unwrap_err();
    assert!(matches!(err, DatasetError::NotNumeric(_)));
}

#[test]
fn test_ragged_row_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(&dir, "a,b\n1,2\n3\n");

    assert!(matches!(
        load_dataset(&path),
        Err(DatasetError::CsvError(_))
    ));
}

#[test]
fn test_header_whitespace_trimmed() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(&dir, " Label , Flow Duration\n0,100\n");

    let frame = load_dataset(&path).unwrap();
    assert!(frame.column("Label").is_ok());
    assert!(frame.column("Flow Duration").is_ok());
}
