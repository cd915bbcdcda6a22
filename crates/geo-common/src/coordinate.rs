//! Geographic coordinate and coordinate sequence types.

use serde::{Deserialize, Serialize};

/// A single geographic point in degrees.
///
/// No range clamping is performed: values outside [-90, 90] / [-180, 180]
/// are carried as given. Serializes as a GeoJSON position `[lon, lat]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(into = "[f64; 2]", from = "[f64; 2]")]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    /// Create a coordinate from latitude and longitude.
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Create a coordinate from an (x, y) = (lon, lat) pair.
    pub fn from_lon_lat(lon: f64, lat: f64) -> Self {
        Self { lat, lon }
    }

    /// GeoJSON position order.
    pub fn to_position(&self) -> [f64; 2] {
        [self.lon, self.lat]
    }
}

impl From<Coordinate> for [f64; 2] {
    fn from(c: Coordinate) -> Self {
        c.to_position()
    }
}

impl From<[f64; 2]> for Coordinate {
    fn from(position: [f64; 2]) -> Self {
        Coordinate::from_lon_lat(position[0], position[1])
    }
}

/// One drawable line or ring.
///
/// Point order is significant: it defines how points are connected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CoordinateSequence {
    points: Vec<Coordinate>,
}

impl CoordinateSequence {
    /// Create an empty sequence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a sequence from an ordered list of points.
    pub fn from_points(points: Vec<Coordinate>) -> Self {
        Self { points }
    }

    /// Append a point.
    pub fn push(&mut self, point: Coordinate) {
        self.points.push(point);
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The points in connection order.
    pub fn points(&self) -> &[Coordinate] {
        &self.points
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Coordinate> {
        self.points.iter()
    }

    pub fn first(&self) -> Option<&Coordinate> {
        self.points.first()
    }

    /// True when the sequence has at least two points and ends where it starts.
    pub fn is_closed(&self) -> bool {
        self.points.len() > 1 && self.points.first() == self.points.last()
    }

    /// Positions as `[lon, lat]` pairs, in order.
    pub fn positions(&self) -> Vec<[f64; 2]> {
        self.points.iter().map(Coordinate::to_position).collect()
    }
}

impl From<Vec<Coordinate>> for CoordinateSequence {
    fn from(points: Vec<Coordinate>) -> Self {
        Self::from_points(points)
    }
}

impl FromIterator<Coordinate> for CoordinateSequence {
    fn from_iter<I: IntoIterator<Item = Coordinate>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for CoordinateSequence {
    type Item = Coordinate;
    type IntoIter = std::vec::IntoIter<Coordinate>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.into_iter()
    }
}

impl<'a> IntoIterator for &'a CoordinateSequence {
    type Item = &'a Coordinate;
    type IntoIter = std::slice::Iter<'a, Coordinate>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
