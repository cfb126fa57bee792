//! Header lines of the SPMX text format
//!
//! The first two lines carry the declared dimensions. Reading is lenient
//! (the first digit run on the line wins, whatever label surrounds it);
//! writing always uses the canonical `rows=<n>` / `cols=<n>` form.

use core::fmt::{self, Write};

use super::constants::{COLS_LABEL, ROWS_LABEL};
use crate::error::{HeaderField, Result, SpmxError};
use crate::validation::{first_digits, parse_unsigned};

/// Declared dimensions read from or written to the header lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatrixHeader {
    /// Number of rows
    pub rows: usize,
    /// Number of columns
    pub cols: usize,
}

impl MatrixHeader {
    /// Create a header for the given dimensions
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Parse the two header lines
    pub fn parse(rows_line: &str, cols_line: &str) -> Result<Self> {
        Ok(Self {
            rows: parse_header_line(rows_line, HeaderField::Rows)?,
            cols: parse_header_line(cols_line, HeaderField::Cols)?,
        })
    }
}

/// Extract the dimension carried by one header line
///
/// Fails with [`SpmxError::InvalidHeader`] when the line has no digits and
/// with [`SpmxError::HeaderOverflow`] when they do not fit a `usize`.
pub fn parse_header_line(line: &str, field: HeaderField) -> Result<usize> {
    let digits = first_digits(line).ok_or(SpmxError::InvalidHeader { field })?;
    parse_unsigned(digits).ok_or(SpmxError::HeaderOverflow { field })
}

/// Write both header lines, each newline-terminated
pub fn write_header<W: Write>(out: &mut W, header: &MatrixHeader) -> fmt::Result {
    writeln!(out, "{ROWS_LABEL}{}", header.rows)?;
    writeln!(out, "{COLS_LABEL}{}", header.cols)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::String;

    #[test]
    fn test_parse_header_line() {
        assert_eq!(parse_header_line("rows=3", HeaderField::Rows), Ok(3));
        assert_eq!(parse_header_line("cols = 10", HeaderField::Cols), Ok(10));
        assert_eq!(parse_header_line("7", HeaderField::Rows), Ok(7));

        assert_eq!(
            parse_header_line("rows=", HeaderField::Rows),
            Err(SpmxError::InvalidHeader {
                field: HeaderField::Rows
            })
        );
        assert_eq!(
            parse_header_line("", HeaderField::Cols),
            Err(SpmxError::InvalidHeader {
                field: HeaderField::Cols
            })
        );
    }

    #[test]
    fn test_header_overflow() {
        assert_eq!(
            parse_header_line("rows=99999999999999999999", HeaderField::Rows),
            Err(SpmxError::HeaderOverflow {
                field: HeaderField::Rows
            })
        );
        assert_eq!(
            MatrixHeader::parse("rows=2", "cols=123456789012345678901234567890"),
            Err(SpmxError::HeaderOverflow {
                field: HeaderField::Cols
            })
        );
    }

    #[test]
    fn test_parse_pair() {
        assert_eq!(
            MatrixHeader::parse("rows=4", "cols=2"),
            Ok(MatrixHeader::new(4, 2))
        );
        assert_eq!(
            MatrixHeader::parse("rows=4", "cols"),
            Err(SpmxError::InvalidHeader {
                field: HeaderField::Cols
            })
        );
    }

    #[test]
    fn test_write_header() {
        let mut out = String::new();
        write_header(&mut out, &MatrixHeader::new(5, 0)).unwrap();
        assert_eq!(out, "rows=5\ncols=0\n");
    }
}
