//! Input format detection.

/// Classification of an input string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    /// Starts with a word-like keyword (`POINT`, `POLYGON`, ...).
    /// Always read longitude first.
    Tagged,
    /// Anything else. Yields no coordinates.
    Untagged,
}

/// Letters, digits and underscore.
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Classify the input by its first non-whitespace character.
///
/// A digit counts as a word character, so `"10 20, 30 40"` is `Tagged`; it
/// still produces nothing because it has no parenthesized group.
pub fn detect_format(input: &str) -> InputFormat {
    match input.trim().chars().next() {
        Some(c) if is_word_char(c) => InputFormat::Tagged,
        _ => InputFormat::Untagged,
    }
}

/// Multi-geometry marker check (case-sensitive).
pub fn is_multi(input: &str) -> bool {
    input.contains("MULTI")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_tagged() {
        assert_eq!(detect_format("POINT(15 32)"), InputFormat::Tagged);
        assert_eq!(detect_format("  \n linestring (1 2, 3 4)"), InputFormat::Tagged);
        assert_eq!(detect_format("_x(1 2)"), InputFormat::Tagged);
        assert_eq!(detect_format("10 20"), InputFormat::Tagged);
    }

    #[test]
    fn test_detect_untagged() {
        assert_eq!(detect_format(""), InputFormat::Untagged);
        assert_eq!(detect_format("   \t\n"), InputFormat::Untagged);
        assert_eq!(detect_format("(1 2, 3 4)"), InputFormat::Untagged);
        assert_eq!(detect_format("-10 20, 30 40"), InputFormat::Untagged);
    }

    #[test]
    fn test_is_multi_is_case_sensitive() {
        assert!(is_multi("MULTIPOLYGON(((1 2)))"));
        assert!(is_multi("GEOMETRY MULTI(1 2)"));
        assert!(!is_multi("multipolygon(((1 2)))"));
    }
}
