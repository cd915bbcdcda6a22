//! Tests for BoundingBox operations over coordinate sequences.

use geo_common::{BoundingBox, Coordinate, CoordinateSequence};

fn seq(points: &[(f64, f64)]) -> CoordinateSequence {
    points
        .iter()
        .map(|&(lat, lon)| Coordinate::new(lat, lon))
        .collect()
}

// ============================================================================
// Constructor tests
// ============================================================================

#[test]
fn test_bbox_new() {
    let bbox = BoundingBox::new(-180.0, -90.0, 180.0, 90.0);
    assert_eq!(bbox.min_x, -180.0);
    assert_eq!(bbox.min_y, -90.0);
    assert_eq!(bbox.max_x, 180.0);
    assert_eq!(bbox.max_y, 90.0);
}

#[test]
fn test_bbox_from_point_is_degenerate() {
    let bbox = BoundingBox::from_point(&Coordinate::new(32.0, 15.0));
    assert_eq!(bbox, BoundingBox::new(15.0, 32.0, 15.0, 32.0));
}

// ============================================================================
// from_sequences tests
// ============================================================================

#[test]
fn test_bbox_single_sequence() {
    let s = seq(&[(20.0, 10.0), (40.0, 30.0), (60.0, 50.0)]);
    let bbox = BoundingBox::from_sequences([&s]).unwrap();
    assert_eq!(bbox.to_geojson_bbox(), [10.0, 20.0, 50.0, 60.0]);
}

#[test]
fn test_bbox_spans_all_sequences() {
    let lines = vec![
        seq(&[(2.0, 1.0), (4.0, 3.0)]),
        seq(&[(6.0, 5.0), (8.0, 7.0)]),
    ];
    let bbox = BoundingBox::from_sequences(&lines).unwrap();
    assert_eq!(bbox.min_x, 1.0);
    assert_eq!(bbox.min_y, 2.0);
    assert_eq!(bbox.max_x, 7.0);
    assert_eq!(bbox.max_y, 8.0);
}

#[test]
fn test_bbox_keeps_out_of_range_values() {
    // No clamping: malformed input may produce values outside the globe.
    let s = seq(&[(120.0, 400.0), (-95.0, -200.0)]);
    let bbox = BoundingBox::from_sequences([&s]).unwrap();
    assert_eq!(bbox.min_x, -200.0);
    assert_eq!(bbox.max_y, 120.0);
}

#[test]
fn test_bbox_skips_empty_sequences() {
    let lines = vec![CoordinateSequence::new(), seq(&[(1.0, 1.0)])];
    let bbox = BoundingBox::from_sequences(&lines).unwrap();
    assert_eq!(bbox, BoundingBox::new(1.0, 1.0, 1.0, 1.0));
}

#[test]
fn test_bbox_expand_to_include() {
    let mut bbox = BoundingBox::from_point(&Coordinate::new(0.0, 0.0));
    bbox.expand_to_include(&Coordinate::new(-5.0, 10.0));
    bbox.expand_to_include(&Coordinate::new(3.0, -2.0));
    assert_eq!(bbox.to_geojson_bbox(), [-2.0, -5.0, 10.0, 3.0]);
}
