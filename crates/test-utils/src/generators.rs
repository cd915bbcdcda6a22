//! Generators for synthetic geometry strings.
//!
//! These produce predictable, verifiable inputs of arbitrary size for
//! parser tests and benchmarks. All output is longitude first.

/// Points of a closed ring approximating a circle.
///
/// The first point is repeated at the end, so the result has
/// `num_points + 1` entries as `(lon, lat)`.
///
/// # Example
///
/// ```
/// use test_utils::create_ring;
///
/// let ring = create_ring(4, (0.0, 0.0), 1.0);
/// assert_eq!(ring.len(), 5);
/// assert_eq!(ring.first(), ring.last());
/// ```
pub fn create_ring(num_points: usize, center: (f64, f64), radius: f64) -> Vec<(f64, f64)> {
    let n = num_points.max(3);
    let mut points = Vec::with_capacity(n + 1);
    for i in 0..n {
        let angle = (i as f64 / n as f64) * std::f64::consts::TAU;
        // Round to 6 decimals so the text form is exact
        let lon = round6(center.0 + radius * angle.cos());
        let lat = round6(center.1 + radius * angle.sin());
        points.push((lon, lat));
    }
    points.push(points[0]);
    points
}

/// A `POLYGON((...))` string for a ring of `num_points` vertices.
pub fn generate_ring_wkt(num_points: usize, center: (f64, f64), radius: f64) -> String {
    format!(
        "POLYGON(({}))",
        join_points(&create_ring(num_points, center, radius))
    )
}

/// A `MULTIPOLYGON` string with `num_polygons` rings laid out along the
/// equator, one every 10 degrees of longitude.
pub fn generate_multipolygon_wkt(num_polygons: usize, points_per_ring: usize) -> String {
    let polygons: Vec<String> = (0..num_polygons)
        .map(|i| {
            let center = (-170.0 + (i % 34) as f64 * 10.0, 0.0);
            format!(
                "(({}))",
                join_points(&create_ring(points_per_ring, center, 2.0))
            )
        })
        .collect();
    format!("MULTIPOLYGON({})", polygons.join(","))
}

/// A `LINESTRING` track of `num_points` points moving north-east.
pub fn generate_linestring_wkt(num_points: usize) -> String {
    let points: Vec<(f64, f64)> = (0..num_points)
        .map(|i| (round6(-100.0 + i as f64 * 0.01), round6(30.0 + i as f64 * 0.005)))
        .collect();
    format!("LINESTRING({})", join_points(&points))
}

fn join_points(points: &[(f64, f64)]) -> String {
    points
        .iter()
        .map(|(lon, lat)| format!("{} {}", lon, lat))
        .collect::<Vec<_>>()
        .join(", ")
}

fn round6(v: f64) -> f64 {
    (v * 1e6).round() / 1e6
}
