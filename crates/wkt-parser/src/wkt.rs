//! WKT serialization of parsed coordinate sequences.
//!
//! Output always reads longitude first, matching how tagged input is parsed,
//! so `parse(&to_wkt(&lines), _)` gives back the same points.

use geo_common::CoordinateSequence;

/// Serialize sequences as a `LINESTRING` (one sequence) or a
/// `MULTILINESTRING` (several).
pub fn to_wkt(sequences: &[CoordinateSequence]) -> String {
    match sequences {
        [] => "GEOMETRYCOLLECTION EMPTY".to_string(),
        [single] => format!("LINESTRING({})", write_points(single)),
        many => {
            let parts: Vec<String> = many
                .iter()
                .map(|seq| format!("({})", write_points(seq)))
                .collect();
            format!("MULTILINESTRING({})", parts.join(","))
        }
    }
}

/// `lon lat, lon lat, ...` with shortest round-trip number formatting.
fn write_points(sequence: &CoordinateSequence) -> String {
    let mut out = String::with_capacity(sequence.len() * 16);
    for (i, point) in sequence.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push_str(&format!("{} {}", point.lon, point.lat));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo_common::Coordinate;

    #[test]
    fn test_single_linestring() {
        let seq = CoordinateSequence::from_points(vec![
            Coordinate::new(20.0, 10.0),
            Coordinate::new(40.5, -30.25),
        ]);
        assert_eq!(to_wkt(&[seq]), "LINESTRING(10 20, -30.25 40.5)");
    }

    #[test]
    fn test_multilinestring() {
        let a = CoordinateSequence::from_points(vec![
            Coordinate::new(2.0, 1.0),
            Coordinate::new(4.0, 3.0),
        ]);
        let b = CoordinateSequence::from_points(vec![
            Coordinate::new(6.0, 5.0),
            Coordinate::new(8.0, 7.0),
        ]);
        assert_eq!(
            to_wkt(&[a, b]),
            "MULTILINESTRING((1 2, 3 4),(5 6, 7 8))"
        );
    }

    #[test]
    fn test_empty() {
        assert_eq!(to_wkt(&[]), "GEOMETRYCOLLECTION EMPTY");
    }
}
