//! Permissive geometry string parser.
//!
//! Converts WKT-like text (`POINT(15 32)`, `POLYGON((...))`,
//! `MULTIPOLYGON(((...)),((...)))`, ...) into ordered coordinate sequences
//! suitable for drawing as polylines.
//!
//! The parser is deliberately forgiving: it never validates geometry
//! keywords, non-numeric tokens read as `0.0`, an odd trailing token is
//! dropped and a lone point is doubled into a two-point line. The only
//! failure is an input from which no coordinate at all can be read.
//!
//! # Example
//!
//! ```rust
//! use wkt_parser::{parse, to_wkt, FeatureCollection};
//!
//! let lines = parse("MULTIPOLYGON(((1 2, 3 4)),((5 6, 7 8)))", false).unwrap();
//! assert_eq!(lines.len(), 2);
//!
//! // Lines re-serialize to WKT that parses back to the same points
//! assert_eq!(parse(&to_wkt(&lines), false).unwrap(), lines);
//!
//! let geojson = FeatureCollection::from_sequences(&lines);
//! assert_eq!(geojson.bbox, Some([1.0, 2.0, 7.0, 8.0]));
//! ```

pub mod detect;
pub mod error;
pub mod geojson;
pub mod parser;
pub mod tokens;
pub mod wkt;
pub mod wrapper;

// Re-export commonly used types
pub use detect::{detect_format, InputFormat};
pub use error::{ParseError, ParseResult};
pub use geojson::FeatureCollection;
pub use parser::{parse, GeometryParser, ParserConfig};
pub use tokens::coerce_number;
pub use wkt::to_wkt;

pub use geo_common::{BoundingBox, Coordinate, CoordinateOrder, CoordinateSequence};

/// Media types used for parser output
pub mod media_types {
    /// GeoJSON media type
    pub const GEO_JSON: &str = "application/geo+json";
    /// WKT as plain text
    pub const WKT: &str = "text/plain; charset=utf-8";
}
