//! Tag-and-parenthesis wrapper stripping and multi-geometry splitting.

use crate::detect::is_word_char;

/// Delimiter between sub-geometries of a `MULTI*` geometry.
pub const MULTI_DELIMITER: &str = "),";

/// Extract the content of the outermost parenthesized group.
///
/// Finds the first run of word characters followed by optional whitespace
/// and `(`, then captures everything up to the LAST `)` in the text. The
/// capture is greedy so nested groups of multi-geometries stay in one block
/// and may span newlines. Returns `None` when there is no such group.
///
/// ```
/// use wkt_parser::wrapper::extract_wrapped;
///
/// assert_eq!(extract_wrapped("POINT (15 32)"), Some("15 32"));
/// assert_eq!(
///     extract_wrapped("MULTIPOINT((1 2),(3 4))"),
///     Some("(1 2),(3 4)")
/// );
/// assert_eq!(extract_wrapped("15 32"), None);
/// ```
pub fn extract_wrapped(text: &str) -> Option<&str> {
    let close = text.rfind(')')?;
    let mut chars = text.char_indices().peekable();

    while let Some((_, c)) = chars.next() {
        if !is_word_char(c) {
            continue;
        }

        // Rest of the word run
        while chars.next_if(|&(_, c)| is_word_char(c)).is_some() {}
        // Optional whitespace
        while chars.next_if(|&(_, c)| c.is_whitespace()).is_some() {}

        if let Some(&(open, '(')) = chars.peek() {
            // A later candidate can only open further right, so the first
            // candidate decides.
            return if close > open {
                Some(&text[open + 1..close])
            } else {
                None
            };
        }
    }

    None
}

/// Split wrapper content into one raw chunk per sub-geometry.
///
/// Non-multi content is returned whole as a single chunk.
pub fn split_chunks(content: &str, multi: bool) -> Vec<&str> {
    if multi {
        content.split(MULTI_DELIMITER).collect()
    } else {
        vec![content]
    }
}
