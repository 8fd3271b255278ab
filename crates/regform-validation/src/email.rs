//! Email pattern

/// Loose email shape: something, `@`, something, `.`, something, with no
/// whitespace and no second `@`.
pub const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";
