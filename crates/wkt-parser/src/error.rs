//! Parser error types.

use thiserror::Error;

/// Result type alias using ParseError.
pub type ParseResult<T> = Result<T, ParseError>;

/// Errors that can occur when parsing a geometry string.
///
/// Malformed numbers, odd token counts, unmatched parentheses and a missing
/// tag never surface here; they degrade to fewer or degenerate points.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ParseError {
    /// No coordinate sequence could be read from the input.
    #[error("Invalid geometry string: {0}")]
    InvalidGeometryString(String),
}

impl ParseError {
    /// Stable error code for API responses.
    pub fn code(&self) -> &'static str {
        match self {
            ParseError::InvalidGeometryString(_) => "InvalidGeometryString",
        }
    }

    /// Get the HTTP status code for this error.
    pub fn http_status_code(&self) -> u16 {
        match self {
            ParseError::InvalidGeometryString(_) => 422,
        }
    }
}
