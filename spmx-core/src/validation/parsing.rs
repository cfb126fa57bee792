//! Numeric scanning helpers for the coordinate-list text format
//!
//! Pure functions over `&str` with no allocation. Scanning is split in two
//! steps: the `*_digits` functions find where a number sits in the text,
//! and `parse_unsigned`/`parse_signed` convert it. That lets callers tell a
//! line with no number apart from a number that does not fit its type.

/// Find the first run of ASCII digits anywhere in `line`
///
/// Surrounding text is ignored, so `rows=12`, `12` and `R: 12 rows` all
/// yield `"12"`. Returns `None` when the line has no digits.
pub fn first_digits(line: &str) -> Option<&str> {
    let start = line.bytes().position(|b| b.is_ascii_digit())?;
    let (digits, _) = unsigned_digits(&line[start..])?;
    Some(digits)
}

/// Split a leading run of ASCII digits from the rest of `s`
///
/// Fails if `s` does not start with a digit.
pub fn unsigned_digits(s: &str) -> Option<(&str, &str)> {
    let len = s.bytes().take_while(|b| b.is_ascii_digit()).count();
    if len == 0 {
        return None;
    }
    Some(s.split_at(len))
}

/// Split a leading integer with an optional `-` sign from the rest of `s`
///
/// A `+` sign is not accepted.
pub fn signed_digits(s: &str) -> Option<(&str, &str)> {
    let sign = usize::from(s.starts_with('-'));
    let (digits, _) = unsigned_digits(&s[sign..])?;
    Some(s.split_at(sign + digits.len()))
}

/// Convert a run of ASCII digits to a `usize`
///
/// Returns `None` if the value does not fit or `digits` is not all digits.
pub fn parse_unsigned(digits: &str) -> Option<usize> {
    if digits.is_empty() {
        return None;
    }

    let mut result: usize = 0;
    for byte in digits.bytes() {
        if !byte.is_ascii_digit() {
            return None;
        }
        result = result
            .checked_mul(10)?
            .checked_add(usize::from(byte - b'0'))?;
    }
    Some(result)
}

/// Convert an optionally `-` signed run of ASCII digits to an `i64`
///
/// Returns `None` if the value leaves the `i64` range.
pub fn parse_signed(text: &str) -> Option<i64> {
    let (negative, digits) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };
    if digits.is_empty() {
        return None;
    }

    // Accumulate toward the sign so i64::MIN stays representable
    let mut result: i64 = 0;
    for byte in digits.bytes() {
        if !byte.is_ascii_digit() {
            return None;
        }
        let digit = i64::from(byte - b'0');
        result = result.checked_mul(10)?;
        result = if negative {
            result.checked_sub(digit)?
        } else {
            result.checked_add(digit)?
        };
    }
    Some(result)
}

/// Skip leading ASCII whitespace
pub fn skip_whitespace(s: &str) -> &str {
    s.trim_start_matches(|c: char| c.is_ascii_whitespace())
}
