//! Numeric token extraction, coercion and pairing.

use geo_common::{Coordinate, CoordinateOrder, CoordinateSequence};
use tracing::trace;

/// Value used for any token that is not a finite number.
pub const COERCE_FALLBACK: f64 = 0.0;

/// Convert a token to a number, falling back to [`COERCE_FALLBACK`].
///
/// Malformed tokens never raise an error. Tokens Rust would read as
/// infinite or NaN (`"inf"`, `"NaN"`, `"1e999"`) also fall back, so every
/// coordinate component stays finite.
pub fn coerce_number(token: &str) -> f64 {
    match token.parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => {
            trace!(token, "Coercing non-numeric token to {}", COERCE_FALLBACK);
            COERCE_FALLBACK
        }
    }
}

/// Flatten a chunk into its ordered list of numeric-looking tokens.
///
/// Parentheses are removed first, so text on either side of one is joined
/// (`"(1 2)(3 4)"` reads as `"1 23 4"`). The rest is split on commas into
/// point groups and each group on whitespace. Empty fragments are discarded.
pub fn extract_tokens(chunk: &str) -> Vec<String> {
    chunk
        .replace(['(', ')'], "")
        .split(',')
        .flat_map(str::split_whitespace)
        .map(str::to_string)
        .collect()
}

/// Pair tokens two at a time into coordinates.
///
/// An odd trailing token is dropped. A single pair is duplicated so the
/// sequence always has at least two points for drawing.
pub fn pair_tokens<S: AsRef<str>>(tokens: &[S], order: CoordinateOrder) -> CoordinateSequence {
    let pairs = tokens.chunks_exact(2);

    if let [dropped] = pairs.remainder() {
        trace!(token = dropped.as_ref(), "Dropping unpaired trailing token");
    }

    let mut sequence: CoordinateSequence = pairs
        .map(|pair| to_coordinate(pair[0].as_ref(), pair[1].as_ref(), order))
        .collect();

    if sequence.len() == 1 {
        if let Some(&only) = sequence.first() {
            sequence.push(only);
        }
    }

    sequence
}

fn to_coordinate(first: &str, second: &str, order: CoordinateOrder) -> Coordinate {
    let a = coerce_number(first);
    let b = coerce_number(second);

    match order {
        CoordinateOrder::LngLat => Coordinate::from_lon_lat(a, b),
        CoordinateOrder::LatLng => Coordinate::new(a, b),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coerce_number() {
        assert_eq!(coerce_number("15"), 15.0);
        assert_eq!(coerce_number("-97.5"), -97.5);
        assert_eq!(coerce_number("1e3"), 1000.0);
        assert_eq!(coerce_number("a"), 0.0);
        assert_eq!(coerce_number("12abc"), 0.0);
        assert_eq!(coerce_number(""), 0.0);
    }

    #[test]
    fn test_coerce_non_finite_falls_back() {
        assert_eq!(coerce_number("inf"), 0.0);
        assert_eq!(coerce_number("NaN"), 0.0);
        assert_eq!(coerce_number("1e999"), 0.0);
    }

    #[test]
    fn test_extract_tokens() {
        assert_eq!(
            extract_tokens("((1 2, 3  4)"),
            vec!["1", "2", "3", "4"]
        );
        assert_eq!(extract_tokens("10 20,\n30\t40,,"), vec!["10", "20", "30", "40"]);
        assert!(extract_tokens(" ( ) , ").is_empty());
    }

    #[test]
    fn test_extract_tokens_joins_across_removed_parens() {
        assert_eq!(extract_tokens("(1 2)(3 4)"), vec!["1", "23", "4"]);
        assert_eq!(extract_tokens("1(2, 3)4"), vec!["12", "34"]);
    }

    #[test]
    fn test_pair_tokens_lng_first() {
        let seq = pair_tokens(&["10", "20", "30", "40"], CoordinateOrder::LngLat);
        assert_eq!(
            seq.points(),
            &[Coordinate::new(20.0, 10.0), Coordinate::new(40.0, 30.0)]
        );
    }

    #[test]
    fn test_pair_tokens_lat_first() {
        let seq = pair_tokens(&["10", "20", "30", "40"], CoordinateOrder::LatLng);
        assert_eq!(
            seq.points(),
            &[Coordinate::new(10.0, 20.0), Coordinate::new(30.0, 40.0)]
        );
    }

    #[test]
    fn test_pair_tokens_drops_odd_token() {
        let seq = pair_tokens(&["1", "2", "3", "4", "5"], CoordinateOrder::LngLat);
        assert_eq!(seq.len(), 2);
        assert_eq!(seq.points()[1], Coordinate::new(4.0, 3.0));
    }

    #[test]
    fn test_pair_tokens_duplicates_single_pair() {
        let seq = pair_tokens(&["1", "2", "3"], CoordinateOrder::LngLat);
        assert_eq!(
            seq.points(),
            &[Coordinate::new(2.0, 1.0), Coordinate::new(2.0, 1.0)]
        );
    }

    #[test]
    fn test_pair_tokens_empty() {
        assert!(pair_tokens::<&str>(&[], CoordinateOrder::LngLat).is_empty());
        assert!(pair_tokens(&["7"], CoordinateOrder::LngLat).is_empty());
    }
}
