//! Error types for SPMX operations

/// Which header line a [`SpmxError::InvalidHeader`] refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderField {
    /// Line 1, the row count
    Rows,
    /// Line 2, the column count
    Cols,
}

impl HeaderField {
    /// One-based line number of this header field in the text format
    pub const fn line(&self) -> usize {
        match self {
            HeaderField::Rows => 1,
            HeaderField::Cols => 2,
        }
    }
}

impl core::fmt::Display for HeaderField {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            HeaderField::Rows => write!(f, "rows"),
            HeaderField::Cols => write!(f, "cols"),
        }
    }
}

/// Errors that can occur during SPMX operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpmxError {
    /// Source text has fewer than the two header lines
    MissingHeader {
        /// Number of lines actually present
        found: usize,
    },
    /// A header line carries no digits
    InvalidHeader {
        /// The header field that failed
        field: HeaderField,
    },
    /// A header line's digit run does not fit a `usize`
    HeaderOverflow {
        /// The header field that failed
        field: HeaderField,
    },
    /// An entry line matches the grammar but holds a number too large for
    /// its type
    EntryOutOfRange {
        /// One-based line number in the source text
        line: usize,
    },
    /// Multiplication operands do not chain (`left.cols != right.rows`)
    DimensionMismatch {
        /// Columns of the left operand
        left_cols: usize,
        /// Rows of the right operand
        right_rows: usize,
    },
    /// An entry value left the `i64` range
    ArithmeticOverflow {
        /// Row of the entry being computed
        row: usize,
        /// Column of the entry being computed
        col: usize,
    },
}

/// Coarse classification of [`SpmxError`] values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Malformed source text
    Parse,
    /// Incompatible operand shapes
    Dimension,
    /// Integer overflow while combining entries
    Arithmetic,
}

impl SpmxError {
    /// Get the category of this error
    pub const fn category(&self) -> ErrorCategory {
        match self {
            SpmxError::MissingHeader { .. }
            | SpmxError::InvalidHeader { .. }
            | SpmxError::HeaderOverflow { .. }
            | SpmxError::EntryOutOfRange { .. } => ErrorCategory::Parse,
            SpmxError::DimensionMismatch { .. } => ErrorCategory::Dimension,
            SpmxError::ArithmeticOverflow { .. } => ErrorCategory::Arithmetic,
        }
    }

    /// Whether this error came from parsing source text
    pub const fn is_parse_error(&self) -> bool {
        matches!(self.category(), ErrorCategory::Parse)
    }
}

impl core::fmt::Display for SpmxError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SpmxError::MissingHeader { found } => {
                write!(f, "expected rows and cols header lines, found {found} line(s)")
            }
            SpmxError::InvalidHeader { field } => {
                write!(f, "no {field} count on header line {}", field.line())
            }
            SpmxError::HeaderOverflow { field } => {
                write!(f, "{field} count on header line {} is too large", field.line())
            }
            SpmxError::EntryOutOfRange { line } => {
                write!(f, "entry on line {line} has a number out of range")
            }
            SpmxError::DimensionMismatch {
                left_cols,
                right_rows,
            } => write!(
                f,
                "wrong matrix dimensions for multiplication: left has {left_cols} columns, right has {right_rows} rows"
            ),
            SpmxError::ArithmeticOverflow { row, col } => {
                write!(f, "integer overflow computing entry ({row}, {col})")
            }
        }
    }
}

impl core::error::Error for SpmxError {}

/// Result type for SPMX operations
pub type Result<T> = core::result::Result<T, SpmxError>;

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_categories() {
        assert_eq!(
            SpmxError::MissingHeader { found: 1 }.category(),
            ErrorCategory::Parse
        );
        assert!(SpmxError::InvalidHeader {
            field: HeaderField::Cols
        }
        .is_parse_error());
        assert_eq!(
            SpmxError::DimensionMismatch {
                left_cols: 2,
                right_rows: 3
            }
            .category(),
            ErrorCategory::Dimension
        );
        assert!(!SpmxError::ArithmeticOverflow { row: 0, col: 0 }.is_parse_error());
        assert!(SpmxError::HeaderOverflow {
            field: HeaderField::Rows
        }
        .is_parse_error());
        assert!(SpmxError::EntryOutOfRange { line: 3 }.is_parse_error());
    }

    #[test]
    fn test_display() {
        assert_eq!(
            SpmxError::InvalidHeader {
                field: HeaderField::Cols
            }
            .to_string(),
            "no cols count on header line 2"
        );
        assert_eq!(
            SpmxError::HeaderOverflow {
                field: HeaderField::Rows
            }
            .to_string(),
            "rows count on header line 1 is too large"
        );
        assert_eq!(
            SpmxError::EntryOutOfRange { line: 3 }.to_string(),
            "entry on line 3 has a number out of range"
        );
        assert_eq!(
            SpmxError::DimensionMismatch {
                left_cols: 2,
                right_rows: 3
            }
            .to_string(),
            "wrong matrix dimensions for multiplication: left has 2 columns, right has 3 rows"
        );
    }
}
