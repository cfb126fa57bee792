//! Coordinate-keyed sparse matrix
//!
//! [`SparseMatrix`] stores only non-zero integer entries in a hash map keyed
//! by `(row, col)`. Absent keys read as zero and writing zero removes the
//! key, so no explicit zero is ever stored.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use hashbrown::HashMap;

use crate::error::{Result, SpmxError};
use crate::format::{parse_entry_line, write_entry_line, write_header, EntryLine, MatrixHeader};
use crate::format::constants::HEADER_LINES;

/// A stored `(row, col, value)` triple
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Entry {
    /// Row index
    pub row: usize,
    /// Column index
    pub col: usize,
    /// Entry value
    pub value: i64,
}

/// Sparse integer matrix with declared dimensions
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SparseMatrix {
    rows: usize,
    cols: usize,
    entries: HashMap<(usize, usize), i64>,
}

impl SparseMatrix {
    /// Create an empty matrix with the given declared dimensions
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            entries: HashMap::new(),
        }
    }

    /// Build a matrix from `(row, col, value)` triples
    ///
    /// Triples go through [`SparseMatrix::set`], so later duplicates
    /// overwrite earlier ones and zero values are dropped.
    pub fn from_triples<I>(rows: usize, cols: usize, triples: I) -> Self
    where
        I: IntoIterator<Item = (usize, usize, i64)>,
    {
        let mut matrix = Self::new(rows, cols);
        for (row, col, value) in triples {
            matrix.set(row, col, value);
        }
        matrix
    }

    /// Parse a matrix from coordinate-list text
    ///
    /// Line 1 and line 2 supply the row and column counts (first digit run
    /// on each line). Every later line that matches the entry grammar is
    /// recorded; any other line is skipped. Fails when the header pair is
    /// missing or unusable, and when an entry line holds a number that does
    /// not fit its type.
    pub fn parse(text: &str) -> Result<Self> {
        let mut lines = text.lines();
        let (rows_line, cols_line) = match (lines.next(), lines.next()) {
            (Some(rows_line), Some(cols_line)) => (rows_line, cols_line),
            (Some(_), None) => return Err(SpmxError::MissingHeader { found: 1 }),
            _ => return Err(SpmxError::MissingHeader { found: 0 }),
        };

        let header = MatrixHeader::parse(rows_line, cols_line)?;
        let mut matrix = Self::new(header.rows, header.cols);

        let mut skipped = 0usize;
        for (index, line) in lines.enumerate() {
            let line_number = index + HEADER_LINES + 1;
            match parse_entry_line(line) {
                EntryLine::Entry(entry) => matrix.set(entry.row, entry.col, entry.value),
                EntryLine::OutOfRange => {
                    return Err(SpmxError::EntryOutOfRange { line: line_number });
                }
                EntryLine::Malformed => {
                    skipped += 1;
                    log::trace!("skipping line {line_number}: not an entry");
                }
            }
        }

        if skipped > 0 {
            log::warn!("skipped {skipped} line(s) that are not entries");
        }

        log::debug!(
            "parsed {}x{} matrix with {} entries",
            matrix.rows,
            matrix.cols,
            matrix.nnz()
        );

        Ok(matrix)
    }

    /// Render the matrix in coordinate-list text form
    ///
    /// Entries are written in ascending `(row, col)` order, so the output
    /// is byte-for-byte deterministic.
    pub fn serialize(&self) -> String {
        let mut out = String::with_capacity(16 + self.nnz() * 16);
        // Writing into a String cannot fail
        let _ = self.write_text(&mut out);
        out
    }

    fn write_text<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        write_header(out, &self.header())?;
        for entry in self.entries() {
            write_entry_line(out, &entry)?;
        }
        Ok(())
    }

    /// Value at `(row, col)`, or zero when nothing is stored there
    ///
    /// No bounds check is made against the declared dimensions; coordinates
    /// outside them simply read as zero.
    pub fn get(&self, row: usize, col: usize) -> i64 {
        self.entries.get(&(row, col)).copied().unwrap_or(0)
    }

    /// Store `value` at `(row, col)`, removing the entry when `value` is zero
    pub fn set(&mut self, row: usize, col: usize, value: i64) {
        if value == 0 {
            self.entries.remove(&(row, col));
        } else {
            self.entries.insert((row, col), value);
        }
    }

    /// Declared number of rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Declared number of columns
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Declared dimensions as (rows, cols)
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Declared dimensions as a format header
    pub fn header(&self) -> MatrixHeader {
        MatrixHeader::new(self.rows, self.cols)
    }

    /// Number of stored (non-zero) entries
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    /// Whether no entry is stored
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Stored entries sorted by ascending `(row, col)`
    pub fn entries(&self) -> Vec<Entry> {
        let mut entries: Vec<Entry> = self.iter().collect();
        entries.sort_unstable();
        entries
    }

    /// Stored entries in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = Entry> + '_ {
        self.entries
            .iter()
            .map(|(&(row, col), &value)| Entry { row, col, value })
    }
}

impl FromStr for SparseMatrix {
    type Err = SpmxError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for SparseMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_text(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HeaderField;
    use alloc::string::ToString;
    use alloc::vec;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_get_and_set() {
        let mut m = SparseMatrix::new(3, 3);
        assert_eq!(m.get(1, 2), 0);

        m.set(1, 2, 7);
        assert_eq!(m.get(1, 2), 7);
        assert_eq!(m.nnz(), 1);

        m.set(1, 2, -3);
        assert_eq!(m.get(1, 2), -3);
        assert_eq!(m.nnz(), 1);

        m.set(1, 2, 0);
        assert_eq!(m.get(1, 2), 0);
        assert!(m.is_empty());

        // Removing an absent key is a no-op
        m.set(0, 0, 0);
        assert!(m.is_empty());
    }

    #[test]
    fn test_get_outside_declared_dimensions() {
        let m = SparseMatrix::from_triples(2, 2, [(0, 0, 1)]);
        assert_eq!(m.get(10, 10), 0);
        assert_eq!(m.get(usize::MAX, 0), 0);
    }

    #[test]
    fn test_random_sets_never_store_zero() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut m = SparseMatrix::new(8, 8);
        for _ in 0..2_000 {
            let value = rng.gen_range(-2..=2);
            m.set(rng.gen_range(0..8), rng.gen_range(0..8), value);
        }
        assert!(m.iter().all(|e| e.value != 0));
    }

    #[test]
    fn test_parse_basic() {
        let m = SparseMatrix::parse("rows=3\ncols=4\n(0, 1, 5)\n(2, 3, -2)\n").unwrap();
        assert_eq!(m.dimensions(), (3, 4));
        assert_eq!(m.nnz(), 2);
        assert_eq!(m.get(0, 1), 5);
        assert_eq!(m.get(2, 3), -2);
    }

    #[test]
    fn test_parse_lenient_headers() {
        let m: SparseMatrix = "number of rows: 12\nR=7 C=9\n".parse().unwrap();
        assert_eq!(m.dimensions(), (12, 7));
        assert!(m.is_empty());
    }

    #[test]
    fn test_parse_skips_malformed_lines() {
        let text = "rows=2\ncols=2\n(0, 0, 1)\nnot an entry\n\n(1,1,4)\n(x, 1, 2)\n";
        let m = SparseMatrix::parse(text).unwrap();
        assert_eq!(m.entries(), vec![
            Entry { row: 0, col: 0, value: 1 },
            Entry { row: 1, col: 1, value: 4 },
        ]);
    }

    #[test]
    fn test_parse_duplicates_overwrite() {
        let m = SparseMatrix::parse("rows=1\ncols=1\n(0, 0, 3)\n(0, 0, 9)\n").unwrap();
        assert_eq!(m.get(0, 0), 9);

        let m = SparseMatrix::parse("rows=1\ncols=1\n(0, 0, 3)\n(0, 0, 0)\n").unwrap();
        assert!(m.is_empty());
    }

    #[test]
    fn test_parse_crlf() {
        let m = SparseMatrix::parse("rows=2\r\ncols=2\r\n(1, 0, 6)\r\n").unwrap();
        assert_eq!(m.dimensions(), (2, 2));
        assert_eq!(m.get(1, 0), 6);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            SparseMatrix::parse(""),
            Err(SpmxError::MissingHeader { found: 0 })
        );
        assert_eq!(
            SparseMatrix::parse("rows=3\n"),
            Err(SpmxError::MissingHeader { found: 1 })
        );
        assert_eq!(
            SparseMatrix::parse("rows=\ncols=3\n"),
            Err(SpmxError::InvalidHeader {
                field: HeaderField::Rows
            })
        );
        assert_eq!(
            SparseMatrix::parse("rows=3\ncols=?\n(0, 0, 1)\n"),
            Err(SpmxError::InvalidHeader {
                field: HeaderField::Cols
            })
        );
        assert_eq!(
            SparseMatrix::parse("rows=99999999999999999999\ncols=3\n"),
            Err(SpmxError::HeaderOverflow {
                field: HeaderField::Rows
            })
        );
    }

    #[test]
    fn test_parse_rejects_out_of_range_entry() {
        assert_eq!(
            SparseMatrix::parse("rows=1\ncols=2\n(0, 0, 99999999999999999999)\n(0, 1, 3)\n"),
            Err(SpmxError::EntryOutOfRange { line: 3 })
        );
        assert_eq!(
            SparseMatrix::parse("rows=1\ncols=2\n(0, 1, 3)\nnote\n(0, 0, -9223372036854775809)\n"),
            Err(SpmxError::EntryOutOfRange { line: 5 })
        );
    }

    #[test]
    fn test_serialize_golden() {
        let m = SparseMatrix::from_triples(2, 3, [(1, 0, 5), (0, 2, 3), (0, 0, 1)]);
        assert_eq!(
            m.serialize(),
            "rows=2\ncols=3\n(0, 0, 1)\n(0, 2, 3)\n(1, 0, 5)\n"
        );
        assert_eq!(m.to_string(), m.serialize());
    }

    #[test]
    fn test_serialize_empty() {
        assert_eq!(SparseMatrix::new(0, 0).serialize(), "rows=0\ncols=0\n");
    }

    #[test]
    fn test_round_trip_random() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            let rows = rng.gen_range(0..20);
            let cols = rng.gen_range(0..20);
            let mut m = SparseMatrix::new(rows, cols);
            if rows > 0 && cols > 0 {
                for _ in 0..rng.gen_range(0..40) {
                    m.set(
                        rng.gen_range(0..rows),
                        rng.gen_range(0..cols),
                        rng.gen_range(-1_000..1_000),
                    );
                }
            }
            let parsed = SparseMatrix::parse(&m.serialize()).unwrap();
            assert_eq!(parsed, m);
        }
    }

    #[test]
    fn test_round_trip_extreme_values() {
        let m = SparseMatrix::from_triples(1, 2, [(0, 0, i64::MIN), (0, 1, i64::MAX)]);
        assert_eq!(SparseMatrix::parse(&m.serialize()), Ok(m));
    }
}
