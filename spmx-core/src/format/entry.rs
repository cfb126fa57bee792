//! Entry lines of the SPMX text format
//!
//! An entry line must start with `(<row>,<ws*><col>,<ws*><value>)`. The
//! row and column are unsigned, the value may carry a leading `-`. Text
//! after the closing parenthesis is ignored. Lines that do not match are
//! [`EntryLine::Malformed`] and the caller skips them. Lines that match but
//! hold a number too large for its type are [`EntryLine::OutOfRange`].

use core::fmt::{self, Write};

use super::constants::{ENTRY_CLOSE, ENTRY_OPEN, ENTRY_SEPARATOR};
use crate::matrix::Entry;
use crate::validation::{
    parse_signed, parse_unsigned, signed_digits, skip_whitespace, unsigned_digits,
};

/// Outcome of reading one line as an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryLine {
    /// A well-formed entry
    Entry(Entry),
    /// Matches the entry grammar but a number does not fit its type
    OutOfRange,
    /// Does not match the entry grammar
    Malformed,
}

/// Parse a single `(row, col, value)` line
pub fn parse_entry_line(line: &str) -> EntryLine {
    let Some((row, col, value)) = split_entry_line(line) else {
        return EntryLine::Malformed;
    };

    match (parse_unsigned(row), parse_unsigned(col), parse_signed(value)) {
        (Some(row), Some(col), Some(value)) => EntryLine::Entry(Entry { row, col, value }),
        _ => EntryLine::OutOfRange,
    }
}

/// Match the entry grammar and return the row, column and value text
fn split_entry_line(line: &str) -> Option<(&str, &str, &str)> {
    let rest = line.strip_prefix(ENTRY_OPEN)?;

    let (row, rest) = unsigned_digits(rest)?;
    let rest = rest.strip_prefix(ENTRY_SEPARATOR)?;

    let (col, rest) = unsigned_digits(skip_whitespace(rest))?;
    let rest = rest.strip_prefix(ENTRY_SEPARATOR)?;

    let (value, rest) = signed_digits(skip_whitespace(rest))?;
    if !rest.starts_with(ENTRY_CLOSE) {
        return None;
    }

    Some((row, col, value))
}

/// Write one entry as `(<row>, <col>, <value>)` followed by a newline
pub fn write_entry_line<W: Write>(out: &mut W, entry: &Entry) -> fmt::Result {
    writeln!(out, "({}, {}, {})", entry.row, entry.col, entry.value)
}
