//! # Numeric Input Coercion
//!
//! The document tolerates any text in its numeric inputs; this module is the
//! single place that decides what a piece of text is worth.
//!
//! ## Coercion Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Numeric Input Path                                 │
//! │                                                                         │
//! │  User types into quantity / unit price / validity input                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  parse_non_negative_int(text) ← THIS MODULE                            │
//! │       │                                                                 │
//! │       ├── parses as integer ≥ 0? → that value                          │
//! │       │                                                                 │
//! │       └── anything else (empty, letters, negative, overflow) → 0       │
//! │                                                                         │
//! │  No error is ever surfaced; the widget simply shows the coerced        │
//! │  value. This is a local correction, not a propagated failure.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

/// Coerces free text into a non-negative integer.
///
/// Applied uniformly to `quantity`, `unit_price`, and `validity_days`.
/// Returns `0` for anything that does not parse as an integer, and for
/// negative values (the inputs have a zero floor).
///
/// ## Example
/// ```rust
/// use cotiza_core::parse::parse_non_negative_int;
///
/// assert_eq!(parse_non_negative_int("100"), 100);
/// assert_eq!(parse_non_negative_int("  27000 "), 27000);
/// assert_eq!(parse_non_negative_int(""), 0);
/// assert_eq!(parse_non_negative_int("abc"), 0);
/// assert_eq!(parse_non_negative_int("-5"), 0);
/// ```
pub fn parse_non_negative_int(text: &str) -> i64 {
    match text.trim().parse::<i64>() {
        Ok(n) if n >= 0 => n,
        _ => 0,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_plain_integers() {
        assert_eq!(parse_non_negative_int("0"), 0);
        assert_eq!(parse_non_negative_int("1"), 1);
        assert_eq!(parse_non_negative_int("22000"), 22000);
    }

    #[test]
    fn test_trims_whitespace() {
        assert_eq!(parse_non_negative_int(" 5 "), 5);
        assert_eq!(parse_non_negative_int("\t100\n"), 100);
    }

    #[test]
    fn test_unparsable_resets_to_zero() {
        assert_eq!(parse_non_negative_int(""), 0);
        assert_eq!(parse_non_negative_int("   "), 0);
        assert_eq!(parse_non_negative_int("abc"), 0);
        assert_eq!(parse_non_negative_int("12x"), 0);
        assert_eq!(parse_non_negative_int("1.5"), 0);
    }

    #[test]
    fn test_negative_resets_to_zero() {
        assert_eq!(parse_non_negative_int("-1"), 0);
        assert_eq!(parse_non_negative_int("-27000"), 0);
    }

    #[test]
    fn test_overflow_resets_to_zero() {
        assert_eq!(parse_non_negative_int("99999999999999999999999999"), 0);
    }
}
