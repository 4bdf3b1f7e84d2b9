use crate::config::AgeParsing;
use crate::error::{Result, RosterError};

/// Fails with `Validation(field)` when `value` is empty.
pub fn require<'a>(field: &'static str, value: &'a str) -> Result<&'a str> {
    if value.is_empty() {
        return Err(RosterError::Validation(field));
    }
    Ok(value)
}

/// Parses an age under the given policy. Zero, negative and out-of-range
/// values are rejected under every policy.
pub fn parse_age(input: &str, policy: AgeParsing) -> Result<u32> {
    let invalid = || RosterError::InvalidAge(input.to_string());

    let parsed: i64 = match policy {
        AgeParsing::Permissive => leading_integer(input).ok_or_else(invalid)?,
        AgeParsing::Strict => {
            let trimmed = input.trim();
            let digits = trimmed.strip_prefix('+').unwrap_or(trimmed);
            if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid());
            }
            digits.parse().map_err(|_| invalid())?
        }
    };

    if parsed <= 0 {
        return Err(invalid());
    }
    u32::try_from(parsed).map_err(|_| invalid())
}

/// Longest signed run of leading digits after optional whitespace.
/// `"20.9"` and `"20abc"` both yield 20.
fn leading_integer(input: &str) -> Option<i64> {
    let s = input.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let end = rest
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(rest.len());
    if end == 0 {
        return None;
    }

    // Saturate on absurdly long digit runs; the range check rejects them anyway.
    let value = rest[..end].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -value } else { value })
}
