//! Format constants for the SPMX coordinate-list text format

/// Label written before the row count on line 1
pub const ROWS_LABEL: &str = "rows=";

/// Label written before the column count on line 2
pub const COLS_LABEL: &str = "cols=";

/// Number of header lines preceding the entry lines
pub const HEADER_LINES: usize = 2;

/// Opening delimiter of an entry line
pub const ENTRY_OPEN: char = '(';

/// Closing delimiter of an entry line
pub const ENTRY_CLOSE: char = ')';

/// Separator between the fields of an entry line
pub const ENTRY_SEPARATOR: char = ',';
