//! String rule checks
//!
//! Each check returns `Err(message)` with the user-facing text when the rule
//! fails. Checks are independent of each other; [`crate::validate`] decides
//! the order they run in.

use regex::Regex;

/// Message for a missing required value
pub const REQUIRED: &str = "This field is required";

/// Message for a value that does not match the field's pattern
pub const INVALID_FORMAT: &str = "Invalid format";

/// Whitespace as a browser's `String.prototype.trim` sees it: Unicode
/// whitespace except NEL, plus the byte order mark.
fn is_form_whitespace(c: char) -> bool {
    (c.is_whitespace() && c != '\u{0085}') || c == '\u{FEFF}'
}

/// Fails when the value is empty after trimming whitespace
pub fn check_required(value: &str) -> Result<(), String> {
    if value.trim_matches(is_form_whitespace).is_empty() {
        Err(REQUIRED.to_string())
    } else {
        Ok(())
    }
}

/// Fails when the value has fewer than `min` characters.
///
/// Length is counted in UTF-16 code units, matching an input element's
/// `value.length`, so a character outside the BMP counts as two. The value is
/// not trimmed.
pub fn check_min_length(value: &str, min: usize) -> Result<(), String> {
    if value.encode_utf16().count() >= min {
        Ok(())
    } else {
        Err(format!("Must be at least {} characters long", min))
    }
}

/// Fails when the value does not match `pattern`.
///
/// Patterns stored in a [`crate::RuleSet`] are already anchored, so a match
/// here is a full match.
pub fn check_pattern(value: &str, pattern: &Regex) -> Result<(), String> {
    if pattern.is_match(value) {
        Ok(())
    } else {
        Err(INVALID_FORMAT.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required() {
        assert!(check_required("Ada").is_ok());
        assert!(check_required("  x  ").is_ok());

        assert_eq!(check_required(""), Err(REQUIRED.to_string()));
        assert_eq!(check_required("   "), Err(REQUIRED.to_string()));
        assert_eq!(check_required("\t\n"), Err(REQUIRED.to_string()));
        assert_eq!(check_required("\u{3000}\u{A0}"), Err(REQUIRED.to_string()));
    }

    #[test]
    fn test_required_strips_byte_order_mark() {
        assert_eq!(check_required("\u{FEFF}"), Err(REQUIRED.to_string()));
        assert_eq!(check_required(" \u{FEFF} "), Err(REQUIRED.to_string()));
        assert!(check_required("\u{FEFF}Ada").is_ok());
    }

    #[test]
    fn test_required_keeps_next_line_char() {
        // U+0085 is not trimmed by browsers
        assert!(check_required("\u{0085}").is_ok());
    }

    #[test]
    fn test_min_length() {
        assert!(check_min_length("secret", 6).is_ok());
        assert!(check_min_length("secret1", 6).is_ok());
        assert_eq!(
            check_min_length("abc", 6),
            Err("Must be at least 6 characters long".to_string())
        );

        // Whitespace counts toward the length
        assert!(check_min_length("      ", 6).is_ok());
    }

    #[test]
    fn test_min_length_counts_utf16_units() {
        // 6 units, 12 bytes
        assert!(check_min_length("éééééé", 6).is_ok());
        assert!(check_min_length("ééééé", 6).is_err());

        // Astral chars count as surrogate pairs
        assert!(check_min_length("😀😀😀", 6).is_ok());
        assert!(check_min_length("😀😀", 6).is_err());
    }

    #[test]
    fn test_pattern() {
        let digits = Regex::new("^(?:[0-9]+)$").unwrap();
        assert!(check_pattern("12345", &digits).is_ok());
        assert_eq!(
            check_pattern("12a45", &digits),
            Err(INVALID_FORMAT.to_string())
        );
    }
}
