//! GeoJSON output for parsed geometry.
//!
//! Each coordinate sequence becomes one `LineString` feature, in parse
//! order, and the collection carries a `bbox` spanning every line so a map
//! view can be framed around the result.

use geo_common::{BoundingBox, CoordinateSequence};
use serde::{Deserialize, Serialize};

/// A GeoJSON FeatureCollection of parsed lines.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeatureCollection {
    /// Type identifier (always "FeatureCollection").
    #[serde(rename = "type")]
    pub type_: String,

    /// `[min_lon, min_lat, max_lon, max_lat]` over all features.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bbox: Option<[f64; 4]>,

    /// One feature per coordinate sequence.
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    /// Create a new empty FeatureCollection.
    pub fn new() -> Self {
        Self {
            type_: "FeatureCollection".to_string(),
            bbox: None,
            features: Vec::new(),
        }
    }

    /// Build a collection from parsed sequences.
    pub fn from_sequences(sequences: &[CoordinateSequence]) -> Self {
        let features = sequences
            .iter()
            .enumerate()
            .map(|(index, seq)| Feature::line_string(index, seq))
            .collect();

        Self {
            type_: "FeatureCollection".to_string(),
            bbox: BoundingBox::from_sequences(sequences).map(|b| b.to_geojson_bbox()),
            features,
        }
    }

    /// Total number of points over all features.
    pub fn point_count(&self) -> usize {
        self.features
            .iter()
            .map(|f| match &f.geometry {
                Geometry::LineString { coordinates } => coordinates.len(),
            })
            .sum()
    }

    /// Serialize to a JSON string.
    pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }
}

impl Default for FeatureCollection {
    fn default() -> Self {
        Self::new()
    }
}

/// A GeoJSON Feature holding one line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Feature {
    /// Type identifier (always "Feature").
    #[serde(rename = "type")]
    pub type_: String,

    /// The line geometry.
    pub geometry: Geometry,

    pub properties: FeatureProperties,
}

impl Feature {
    /// Create a LineString feature for the sequence at `index`.
    pub fn line_string(index: usize, sequence: &CoordinateSequence) -> Self {
        Self {
            type_: "Feature".to_string(),
            geometry: Geometry::LineString {
                coordinates: sequence.positions(),
            },
            properties: FeatureProperties {
                index,
                closed: sequence.is_closed(),
            },
        }
    }
}

/// GeoJSON geometry types produced by the parser.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum Geometry {
    /// A line string geometry.
    LineString {
        /// Array of [longitude, latitude] coordinate pairs.
        coordinates: Vec<[f64; 2]>,
    },
}

/// Properties attached to each line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeatureProperties {
    /// Position of the sequence in the parse result.
    pub index: usize,

    /// Whether the line ends where it starts (a ring).
    pub closed: bool,
}
