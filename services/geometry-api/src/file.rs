//! One-shot parsing of a whole input file.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;
use wkt_parser::{FeatureCollection, GeometryParser};

/// Read `path` as UTF-8 text, parse it and render the GeoJSON output.
///
/// A parse failure is returned as an error carrying the user-facing message.
pub fn parse_file(path: &Path, parser: &GeometryParser, pretty: bool) -> Result<String> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read input file: {:?}", path))?;

    let lines = parser.parse(&text)?;
    let collection = FeatureCollection::from_sequences(&lines);

    info!(
        path = %path.display(),
        sequences = lines.len(),
        points = collection.point_count(),
        "Parsed input file"
    );

    Ok(collection.to_json(pretty)?)
}
