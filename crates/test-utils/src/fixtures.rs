//! Common test fixtures for geometry parsing tests.
//!
//! Expected points are written as `(lat, lon)` tuples.

/// A sample input with the sequences it should parse into.
#[derive(Debug, Clone, Copy)]
pub struct GeometryFixture {
    pub name: &'static str,
    pub input: &'static str,
    pub expected: &'static [&'static [(f64, f64)]],
}

/// Well-formed WKT inputs.
pub mod wkt {
    use super::GeometryFixture;

    pub const POINT: GeometryFixture = GeometryFixture {
        name: "point",
        input: "POINT(15 32)",
        expected: &[&[(32.0, 15.0), (32.0, 15.0)]],
    };

    pub const POINT_SPACED: GeometryFixture = GeometryFixture {
        name: "point_spaced",
        input: "  POINT (-97.5 35.2)  ",
        expected: &[&[(35.2, -97.5), (35.2, -97.5)]],
    };

    pub const LINESTRING: GeometryFixture = GeometryFixture {
        name: "linestring",
        input: "LINESTRING(-122.4 37.8, -77.0 38.9, -87.6 41.9)",
        expected: &[&[(37.8, -122.4), (38.9, -77.0), (41.9, -87.6)]],
    };

    pub const POLYGON: GeometryFixture = GeometryFixture {
        name: "polygon",
        input: "POLYGON((10 20, 30 40, 50 60))",
        expected: &[&[(20.0, 10.0), (40.0, 30.0), (60.0, 50.0)]],
    };

    /// Inner rings are not split out: without `MULTI` everything is one chunk.
    pub const POLYGON_WITH_HOLE: GeometryFixture = GeometryFixture {
        name: "polygon_with_hole",
        input: "POLYGON((0 0, 10 0, 10 10, 0 0),(2 2, 3 2, 3 3, 2 2))",
        expected: &[&[
            (0.0, 0.0),
            (0.0, 10.0),
            (10.0, 10.0),
            (0.0, 0.0),
            (2.0, 2.0),
            (2.0, 3.0),
            (3.0, 3.0),
            (2.0, 2.0),
        ]],
    };

    pub const MULTIPOLYGON: GeometryFixture = GeometryFixture {
        name: "multipolygon",
        input: "MULTIPOLYGON(((1 2, 3 4)),((5 6, 7 8)))",
        expected: &[&[(2.0, 1.0), (4.0, 3.0)], &[(6.0, 5.0), (8.0, 7.0)]],
    };

    pub const MULTIPOINT: GeometryFixture = GeometryFixture {
        name: "multipoint",
        input: "MULTIPOINT((1 2),(3 4))",
        expected: &[&[(2.0, 1.0), (2.0, 1.0)], &[(4.0, 3.0), (4.0, 3.0)]],
    };

    pub const MULTILINESTRING_MULTILINE: GeometryFixture = GeometryFixture {
        name: "multilinestring_multiline",
        input: "MULTILINESTRING (\n  (10 10, 20 20, 10 40),\n  (40 40, 30 30, 40 20, 30 10)\n)",
        expected: &[
            &[(10.0, 10.0), (20.0, 20.0), (40.0, 10.0)],
            &[(40.0, 40.0), (30.0, 30.0), (20.0, 40.0), (10.0, 30.0)],
        ],
    };

    /// Every well-formed fixture.
    pub const ALL: &[GeometryFixture] = &[
        POINT,
        POINT_SPACED,
        LINESTRING,
        POLYGON,
        POLYGON_WITH_HOLE,
        MULTIPOLYGON,
        MULTIPOINT,
        MULTILINESTRING_MULTILINE,
    ];
}

/// Inputs that parse, but only thanks to the permissive rules.
pub mod degraded {
    use super::GeometryFixture;

    /// Odd trailing token dropped, lone pair doubled.
    pub const ODD_TOKEN: GeometryFixture = GeometryFixture {
        name: "odd_token",
        input: "LINESTRING(1 2 3)",
        expected: &[&[(2.0, 1.0), (2.0, 1.0)]],
    };

    /// Non-numeric token read as 0.0.
    pub const MALFORMED_NUMBER: GeometryFixture = GeometryFixture {
        name: "malformed_number",
        input: "LINESTRING(a 2, 3 4)",
        expected: &[&[(2.0, 0.0), (4.0, 3.0)]],
    };

    /// Z values shift the pairing; no dimension handling.
    pub const Z_COORDINATES: GeometryFixture = GeometryFixture {
        name: "z_coordinates",
        input: "LINESTRING Z (1 2 3, 4 5 6)",
        expected: &[&[(2.0, 1.0), (4.0, 3.0), (6.0, 5.0)]],
    };

    /// Missing closing paren of an inner group.
    pub const UNBALANCED: GeometryFixture = GeometryFixture {
        name: "unbalanced",
        input: "POLYGON((1 2, 3 4)",
        expected: &[&[(2.0, 1.0), (4.0, 3.0)]],
    };

    /// Lowercase tag: still tagged, but not split as a multi-geometry.
    pub const LOWERCASE_MULTI: GeometryFixture = GeometryFixture {
        name: "lowercase_multi",
        input: "multipoint((1 2),(3 4))",
        expected: &[&[(2.0, 1.0), (4.0, 3.0)]],
    };

    /// Parentheses are removed before splitting, so `2)(3` reads as `23`.
    pub const ADJACENT_GROUPS: GeometryFixture = GeometryFixture {
        name: "adjacent_groups",
        input: "LINESTRING((1 2)(3 4))",
        expected: &[&[(23.0, 1.0), (23.0, 1.0)]],
    };

    pub const ALL: &[GeometryFixture] = &[
        ODD_TOKEN,
        MALFORMED_NUMBER,
        Z_COORDINATES,
        UNBALANCED,
        LOWERCASE_MULTI,
        ADJACENT_GROUPS,
    ];
}

/// Inputs that must be rejected.
pub mod invalid {
    pub const EMPTY: &str = "";
    pub const WHITESPACE: &str = " \t\r\n ";
    pub const BARE_LIST: &str = "10 20, 30 40";
    pub const NEGATIVE_BARE_LIST: &str = "-10.5 20.25, 30 40";
    pub const PAREN_LIST: &str = "(10 20, 30 40)";
    pub const TAG_ONLY: &str = "POINT";
    pub const EMPTY_GEOMETRY: &str = "POINT EMPTY";
    pub const EMPTY_GROUP: &str = "LINESTRING()";
    pub const SINGLE_TOKEN: &str = "POINT(42)";

    pub const ALL: &[&str] = &[
        EMPTY,
        WHITESPACE,
        BARE_LIST,
        NEGATIVE_BARE_LIST,
        PAREN_LIST,
        TAG_ONLY,
        EMPTY_GEOMETRY,
        EMPTY_GROUP,
        SINGLE_TOKEN,
    ];
}
