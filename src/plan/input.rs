//! Parsing of values typed into grid cells.

use crate::core::error::{PlanError, Result};
use crate::core::types::Spend;

/// Parse a spend amount, ignoring currency symbols and separators.
///
/// Every non-digit character is dropped, so `"$12,500"` reads as `12500`.
/// Input without digits reads as `0`.
///
/// # Errors
/// Returns `InvalidSpend` when the digits overflow a spend amount.
pub fn parse_spend(input: &str) -> Result<Spend> {
    let digits: String = input.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return Ok(0);
    }
    digits
        .parse::<Spend>()
        .map_err(|_| PlanError::invalid_spend(input))
}

/// Parse a price or seasonal index the way a lenient number field does.
///
/// Leading whitespace and an optional sign are accepted, then the leading run
/// of digits is read and anything after it ignored. Blank, zero, negative or
/// digit-less input falls back to `default`; a digit run too large for `u32`
/// saturates to `u32::MAX`.
pub fn parse_index(input: &str, default: u32) -> u32 {
    let trimmed = input.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());

    let digits = &rest[..end];
    if negative || digits.is_empty() {
        return default;
    }
    match digits.parse::<u32>() {
        Ok(0) => default,
        Ok(value) => value,
        // Only overflow is left once the run is non-empty ASCII digits.
        Err(_) => u32::MAX,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_spend() {
        assert_eq!(parse_spend("$12,500"), Ok(12_500));
        assert_eq!(parse_spend("42"), Ok(42));
        assert_eq!(parse_spend(""), Ok(0));
        assert_eq!(parse_spend("n/a"), Ok(0));
        assert_eq!(parse_spend("-300"), Ok(300));
    }

    #[test]
    fn test_parse_spend_overflow() {
        assert!(matches!(
            parse_spend("99999999999999999999999"),
            Err(PlanError::InvalidSpend { .. })
        ));
    }

    #[test]
    fn test_parse_index() {
        assert_eq!(parse_index("110", 100), 110);
        assert_eq!(parse_index(" 120abc", 100), 120);
        assert_eq!(parse_index("", 100), 100);
        assert_eq!(parse_index("0", 100), 100);
        assert_eq!(parse_index("-5", 100), 100);
        assert_eq!(parse_index("x12", 100), 100);
        assert_eq!(parse_index("5000000000", 100), u32::MAX);
        assert_eq!(parse_index("-5000000000", 100), 100);
        assert_eq!(parse_index("0000120", 100), 120);
    }
}
