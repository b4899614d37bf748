//! Bounded-range validation of raw form input.

use thiserror::Error;

/// Why a raw input was rejected. The display text is what the form shows.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter a valid number")]
    NotANumber,

    #[error("Value cannot be negative")]
    Negative,

    #[error("Please enter a value less than {max}")]
    AboveMaximum { max: u32 },
}

/// Validates one raw input against `max`.
///
/// An empty string leaves the field unset and is not an error. Otherwise the
/// leading integer is read the way a browser `parseInt` would: leading
/// whitespace and an optional sign, then the longest run of digits, with
/// anything after it ignored.
///
/// ```rust
/// use cleanmelb::validation::{validate_input, ValidationError};
///
/// assert_eq!(validate_input("", 100), Ok(None));
/// assert_eq!(validate_input("40", 100), Ok(Some(40)));
/// assert_eq!(validate_input("101", 100), Err(ValidationError::AboveMaximum { max: 100 }));
/// ```
pub fn validate_input(raw: &str, max: u32) -> Result<Option<u32>, ValidationError> {
    if raw.is_empty() {
        return Ok(None);
    }

    let leading = parse_leading_integer(raw).ok_or(ValidationError::NotANumber)?;

    match leading {
        LeadingInteger::Negative => Err(ValidationError::Negative),
        LeadingInteger::Overflow => Err(ValidationError::AboveMaximum { max }),
        LeadingInteger::Value(value) if value > max => Err(ValidationError::AboveMaximum { max }),
        LeadingInteger::Value(value) => Ok(Some(value)),
    }
}

#[derive(Debug, PartialEq, Eq)]
enum LeadingInteger {
    Value(u32),
    Negative,
    Overflow,
}

fn parse_leading_integer(raw: &str) -> Option<LeadingInteger> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }
    let digits = &rest[..digits_len];

    // "-0" and "-000" read as zero
    if negative {
        return Some(if digits.bytes().all(|b| b == b'0') {
            LeadingInteger::Value(0)
        } else {
            LeadingInteger::Negative
        });
    }

    Some(match digits.parse::<u32>() {
        Ok(value) => LeadingInteger::Value(value),
        Err(_) => LeadingInteger::Overflow,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_unset() {
        assert_eq!(validate_input("", 100), Ok(None));
    }

    #[test]
    fn test_accepts_range_bounds() {
        assert_eq!(validate_input("0", 100), Ok(Some(0)));
        assert_eq!(validate_input("100", 100), Ok(Some(100)));
    }

    #[test]
    fn test_rejects_above_max() {
        assert_eq!(
            validate_input("101", 100),
            Err(ValidationError::AboveMaximum { max: 100 })
        );
        assert_eq!(
            ValidationError::AboveMaximum { max: 500 }.to_string(),
            "Please enter a value less than 500"
        );
    }

    #[test]
    fn test_rejects_negative() {
        assert_eq!(validate_input("-1", 100), Err(ValidationError::Negative));
        assert_eq!(
            ValidationError::Negative.to_string(),
            "Value cannot be negative"
        );
    }

    #[test]
    fn test_negative_zero_is_zero() {
        assert_eq!(validate_input("-0", 100), Ok(Some(0)));
    }

    #[test]
    fn test_rejects_non_numeric() {
        for raw in ["abc", "-", "+", " ", "kg12", ".5"] {
            assert_eq!(
                validate_input(raw, 100),
                Err(ValidationError::NotANumber),
                "input {raw:?}"
            );
        }
        assert_eq!(
            ValidationError::NotANumber.to_string(),
            "Please enter a valid number"
        );
    }

    #[test]
    fn test_leading_integer_rules() {
        assert_eq!(validate_input("  42", 100), Ok(Some(42)));
        assert_eq!(validate_input("+7", 100), Ok(Some(7)));
        assert_eq!(validate_input("12kg", 100), Ok(Some(12)));
        assert_eq!(validate_input("1.9", 100), Ok(Some(1)));
        assert_eq!(validate_input("007", 100), Ok(Some(7)));
    }

    #[test]
    fn test_overflow_is_above_max() {
        assert_eq!(
            validate_input("99999999999999999999", 1000),
            Err(ValidationError::AboveMaximum { max: 1000 })
        );
    }
}
