//! Common types and utilities shared across the geometry workspace.

pub mod bbox;
pub mod coordinate;
pub mod order;

pub use bbox::BoundingBox;
pub use coordinate::{Coordinate, CoordinateSequence};
pub use order::{CoordinateOrder, OrderParseError};
