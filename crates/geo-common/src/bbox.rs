//! Bounding box types and operations.

use serde::{Deserialize, Serialize};

use crate::coordinate::{Coordinate, CoordinateSequence};

/// A geographic bounding box in degrees.
///
/// x is longitude, y is latitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl BoundingBox {
    /// Create a new bounding box from corner coordinates.
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Degenerate box around a single point.
    pub fn from_point(point: &Coordinate) -> Self {
        Self::new(point.lon, point.lat, point.lon, point.lat)
    }

    /// Smallest box containing every point of every sequence.
    ///
    /// Returns `None` when there are no points at all.
    pub fn from_sequences<'a, I>(sequences: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a CoordinateSequence>,
    {
        let mut bbox: Option<BoundingBox> = None;

        for point in sequences.into_iter().flat_map(|seq| seq.iter()) {
            match bbox.as_mut() {
                Some(b) => b.expand_to_include(point),
                None => bbox = Some(Self::from_point(point)),
            }
        }

        bbox
    }

    /// Grow the box to include a point.
    pub fn expand_to_include(&mut self, point: &Coordinate) {
        self.min_x = self.min_x.min(point.lon);
        self.min_y = self.min_y.min(point.lat);
        self.max_x = self.max_x.max(point.lon);
        self.max_y = self.max_y.max(point.lat);
    }

    /// GeoJSON `bbox` member: `[min_lon, min_lat, max_lon, max_lat]`.
    pub fn to_geojson_bbox(&self) -> [f64; 4] {
        [self.min_x, self.min_y, self.max_x, self.max_y]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_sequences() {
        let a = CoordinateSequence::from_points(vec![
            Coordinate::new(20.0, 10.0),
            Coordinate::new(40.0, 30.0),
        ]);
        let b = CoordinateSequence::from_points(vec![Coordinate::new(-5.0, 50.0)]);

        let bbox = BoundingBox::from_sequences([&a, &b]).unwrap();
        assert_eq!(bbox.min_x, 10.0);
        assert_eq!(bbox.min_y, -5.0);
        assert_eq!(bbox.max_x, 50.0);
        assert_eq!(bbox.max_y, 40.0);
    }

    #[test]
    fn test_from_sequences_empty() {
        let empty: Vec<CoordinateSequence> = Vec::new();
        assert!(BoundingBox::from_sequences(&empty).is_none());
    }
}
