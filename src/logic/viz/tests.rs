use super::heatmap::cell_color;
use super::histogram::{bin_values, density_overlay, silverman_bandwidth};
use super::render::{format_tick, RenderedChart};
use super::{count_plot, histogram, theme, VizError};
use crate::logic::dataset::{Column, ColumnData, DType, DatasetError, Frame};

fn numeric_column(name: &str, vs: &[f64]) -> Column {
    Column {
        name: name.to_string(),
        dtype: DType::Float64,
        data: ColumnData::Numeric(vs.iter().map(|v| Some(*v)).collect()),
    }
}

#[test]
fn test_bins_cover_range() {
    let values: Vec<f64> = (0..=100).map(|v| v as f64).collect();
    let bins = bin_values(&values, 50);

    assert_eq!(bins.counts.len(), 50);
    assert_eq!(bins.lo, 0.0);
    assert_eq!(bins.hi, 100.0);
    assert!((bins.width * 50.0 - 100.0).abs() < 1e-9);
    assert_eq!(bins.counts.iter().sum::<usize>(), values.len());
}

#[test]
fn test_constant_column_gets_unit_span() {
    let bins = bin_values(&[5.0, 5.0, 5.0], 50);
    assert!(bins.width > 0.0);
    assert_eq!(bins.counts.iter().sum::<usize>(), 3);
}

#[test]
fn test_silverman_bandwidth() {
    let values: Vec<f64> = (0..100).map(|v| v as f64).collect();
    assert!(silverman_bandwidth(&values) > 0.0);

    // Degenerate inputs produce no bandwidth (and thus no overlay)
    assert_eq!(silverman_bandwidth(&[3.0, 3.0, 3.0]), 0.0);
    assert_eq!(silverman_bandwidth(&[1.0]), 0.0);
}

#[test]
fn test_density_peaks_at_the_center_of_mass() {
    let values = [-2.0, -1.0, -0.5, 0.0, 0.0, 0.5, 1.0, 2.0];
    let bins = bin_values(&values, 50);
    let overlay = density_overlay(&values, &bins, 201);

    assert_eq!(overlay.len(), 201);
    let mid = overlay[100].1;
    assert!(mid > overlay[0].1);
    assert!(mid > overlay[200].1);
}

#[test]
fn test_density_empty_for_constant_values() {
    let values = [4.0, 4.0, 4.0];
    let bins = bin_values(&values, 50);
    assert!(density_overlay(&values, &bins, 100).is_empty());
}

#[test]
fn test_cell_color_endpoints() {
    let cool = cell_color(-1.0);
    let warm = cell_color(1.0);
    assert!(cool.2 > cool.0, "negative correlation should render blue");
    assert!(warm.0 > warm.2, "positive correlation should render red");

    let nan = cell_color(f64::NAN);
    assert_eq!((nan.0, nan.1, nan.2), (theme::NAN_CELL.0, theme::NAN_CELL.1, theme::NAN_CELL.2));
}

#[test]
fn test_ramps_interpolate_between_anchors() {
    let lo = theme::viridis(0.0);
    assert_eq!((lo.0, lo.1, lo.2), (68, 1, 84));

    let hi = theme::viridis(1.0);
    assert_eq!((hi.0, hi.1, hi.2), (253, 231, 37));

    let mid = theme::coolwarm(0.5);
    assert_eq!((mid.0, mid.1, mid.2), (221, 221, 221));

    // Out-of-range inputs clamp instead of panicking
    let clamped = theme::coolwarm(2.0);
    assert_eq!((clamped.0, clamped.1, clamped.2), (180, 4, 38));
}

#[test]
fn test_argb_packing() {
    let chart = RenderedChart::from_buffer(1, 1, vec![0x0A, 0x14, 0x1E]);
    assert_eq!(chart.to_argb(), vec![0x000A141E]);
}

#[test]
fn test_format_tick() {
    assert_eq!(format_tick(3.0), "3");
    assert_eq!(format_tick(0.25), "0.25");
    assert_eq!(format_tick(2_500_000.0), "2.5e6");
}

#[test]
fn test_count_plot_fails_without_label_column() {
    let frame = Frame::new(vec![numeric_column("Flow Duration", &[1.0, 2.0])]).unwrap();

    let err = count_plot::render(&frame).unwrap_err();
    match err {
        VizError::Dataset(DatasetError::ColumnNotFound(name)) => assert_eq!(name, "Label"),
        other => panic!("expected ColumnNotFound, got {}", other),
    }
}

#[test]
fn test_histograms_fail_without_feature_column() {
    let frame = Frame::new(vec![numeric_column("Label", &[0.0, 1.0])]).unwrap();

    let err = histogram::render(&frame).unwrap_err();
    assert!(err.to_string().contains("Flow Duration"));
}
