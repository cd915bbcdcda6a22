//! Geometry string parser.
//!
//! Turns loosely structured, WKT-like text into ordered coordinate
//! sequences ready to be drawn as polylines. There is no grammar: the input
//! goes through four permissive stages and anything unexpected degrades to
//! fewer points instead of an error.
//!
//! 1. Format detection: input starting with a word character is `Tagged`
//!    and always read longitude first. Anything else yields nothing.
//! 2. Wrapper stripping: content of the first `WORD (` up to the last `)`.
//! 3. Multi splitting: input containing `MULTI` is split on `"),"`.
//! 4. Token pairing: per chunk, tokens are paired in order. An odd trailing
//!    token is dropped and a lone pair is duplicated.

use geo_common::{CoordinateOrder, CoordinateSequence};
use tracing::debug;

use crate::detect::{detect_format, is_multi, InputFormat};
use crate::error::{ParseError, ParseResult};
use crate::tokens::{extract_tokens, pair_tokens};
use crate::wrapper::{extract_wrapped, split_chunks};

/// Parser configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ParserConfig {
    /// Order used when the input itself does not force one.
    pub default_order: CoordinateOrder,
}

impl ParserConfig {
    pub fn with_order(default_order: CoordinateOrder) -> Self {
        Self { default_order }
    }
}

/// Stateless geometry string parser.
///
/// The configuration is fixed at construction, so one instance can be shared
/// between threads.
#[derive(Debug, Clone, Default)]
pub struct GeometryParser {
    config: ParserConfig,
}

impl GeometryParser {
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse raw text into coordinate sequences.
    ///
    /// Returns [`ParseError::InvalidGeometryString`] when no non-empty
    /// sequence could be read.
    pub fn parse(&self, input: &str) -> ParseResult<Vec<CoordinateSequence>> {
        let text = input.trim();
        let format = detect_format(text);
        let order = effective_order(format, self.config.default_order);

        debug!(
            ?format,
            %order,
            input_len = input.len(),
            "Parsing geometry string"
        );

        let chunks = match format {
            InputFormat::Tagged => {
                let content = extract_wrapped(text).unwrap_or_default();
                split_chunks(content, is_multi(text))
            }
            InputFormat::Untagged => Vec::new(),
        };

        let sequences: Vec<CoordinateSequence> = chunks
            .into_iter()
            .map(|chunk| pair_tokens(&extract_tokens(chunk), order))
            .filter(|seq| !seq.is_empty())
            .collect();

        if sequences.is_empty() {
            let reason = match format {
                InputFormat::Tagged => "no coordinate pairs found inside a GEOMETRY(...) group",
                InputFormat::Untagged => {
                    "input must start with a geometry keyword such as POINT, LINESTRING or POLYGON"
                }
            };
            debug!(?format, reason, "Geometry string rejected");
            return Err(ParseError::InvalidGeometryString(reason.to_string()));
        }

        debug!(
            sequences = sequences.len(),
            points = sequences.iter().map(CoordinateSequence::len).sum::<usize>(),
            "Parsed geometry string"
        );

        Ok(sequences)
    }
}

/// Order actually used for pairing: tagged text always reads longitude first.
pub fn effective_order(format: InputFormat, preferred: CoordinateOrder) -> CoordinateOrder {
    match format {
        InputFormat::Tagged => CoordinateOrder::LngLat,
        InputFormat::Untagged => preferred,
    }
}

/// Parse raw text with a boolean order preference.
///
/// ```
/// use wkt_parser::parse;
///
/// let lines = parse("POINT(15 32)", false).unwrap();
/// assert_eq!(lines.len(), 1);
/// assert_eq!(lines[0].len(), 2);
/// assert_eq!(lines[0].points()[0].lat, 32.0);
/// assert_eq!(lines[0].points()[0].lon, 15.0);
/// ```
pub fn parse(input: &str, longitude_first: bool) -> ParseResult<Vec<CoordinateSequence>> {
    let order = CoordinateOrder::from_longitude_first(longitude_first);
    GeometryParser::new(ParserConfig::with_order(order)).parse(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo_common::Coordinate;

    fn points(seq: &CoordinateSequence) -> Vec<(f64, f64)> {
        seq.iter().map(|c| (c.lat, c.lon)).collect()
    }

    #[test]
    fn test_point_forces_lng_first() {
        for longitude_first in [true, false] {
            let lines = parse("POINT(15 32)", longitude_first).unwrap();
            assert_eq!(lines.len(), 1);
            assert_eq!(points(&lines[0]), vec![(32.0, 15.0), (32.0, 15.0)]);
        }
    }

    #[test]
    fn test_polygon() {
        let lines = parse("POLYGON((10 20, 30 40, 50 60))", false).unwrap();
        assert_eq!(lines.len(), 1);
        assert_eq!(
            points(&lines[0]),
            vec![(20.0, 10.0), (40.0, 30.0), (60.0, 50.0)]
        );
    }

    #[test]
    fn test_multipolygon_chunks_in_order() {
        let lines = parse("MULTIPOLYGON(((1 2, 3 4)),((5 6, 7 8)))", true).unwrap();
        assert_eq!(lines.len(), 2);
        assert_eq!(points(&lines[0]), vec![(2.0, 1.0), (4.0, 3.0)]);
        assert_eq!(points(&lines[1]), vec![(6.0, 5.0), (8.0, 7.0)]);
    }

    #[test]
    fn test_odd_token_dropped() {
        let lines = parse("LINESTRING(1 2 3)", false).unwrap();
        assert_eq!(points(&lines[0]), vec![(2.0, 1.0), (2.0, 1.0)]);
    }

    #[test]
    fn test_malformed_token_coerces_to_zero() {
        let lines = parse("LINESTRING(a 2, 3 4)", false).unwrap();
        assert_eq!(lines[0].points()[0], Coordinate::new(2.0, 0.0));
        assert_eq!(lines[0].points()[1], Coordinate::new(4.0, 3.0));
    }

    #[test]
    fn test_parens_removed_before_splitting() {
        let lines = parse("LINESTRING((1 2)(3 4))", false).unwrap();
        assert_eq!(points(&lines[0]), vec![(23.0, 1.0), (23.0, 1.0)]);
    }

    #[test]
    fn test_whitespace_only_is_invalid() {
        for input in ["", "   ", "\n\t  \r\n"] {
            assert!(matches!(
                parse(input, true),
                Err(ParseError::InvalidGeometryString(_))
            ));
        }
    }

    #[test]
    fn test_untagged_list_yields_nothing() {
        // A bare list is not read, whatever the order preference.
        for longitude_first in [true, false] {
            assert!(parse("(10 20, 30 40)", longitude_first).is_err());
            assert!(parse("-10 20, 30 40", longitude_first).is_err());
            assert!(parse("10 20, 30 40", longitude_first).is_err());
        }
    }

    #[test]
    fn test_tag_without_group_is_invalid() {
        assert!(parse("POINT", false).is_err());
        assert!(parse("POINT EMPTY", false).is_err());
        assert!(parse("POINT()", false).is_err());
    }

    #[test]
    fn test_effective_order() {
        assert_eq!(
            effective_order(InputFormat::Tagged, CoordinateOrder::LatLng),
            CoordinateOrder::LngLat
        );
        assert_eq!(
            effective_order(InputFormat::Untagged, CoordinateOrder::LatLng),
            CoordinateOrder::LatLng
        );
    }

    #[test]
    fn test_parser_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<GeometryParser>();
    }
}
