//! Serializable matrix summaries and dumps

use serde::{Deserialize, Serialize};

use crate::error::Result;
use spmx_core::{Entry, MatrixAccess, MatrixHeader, SparseMatrix};

/// Shape and fill statistics of a matrix
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatrixSummary {
    /// Declared number of rows
    pub rows: usize,
    /// Declared number of columns
    pub cols: usize,
    /// Stored non-zero entries
    pub nnz: usize,
    /// `nnz / (rows * cols)`, or 0 for a matrix with no cells
    pub density: f64,
}

impl MatrixSummary {
    /// Summarize any matrix
    pub fn of<M: MatrixAccess + ?Sized>(matrix: &M) -> Self {
        let (rows, cols) = matrix.dimensions();
        let nnz = matrix.nnz();
        let cells = rows as f64 * cols as f64;
        let density = if cells > 0.0 { nnz as f64 / cells } else { 0.0 };

        Self {
            rows,
            cols,
            nnz,
            density,
        }
    }

    /// Encode as a single-line JSON object
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl std::fmt::Display for MatrixSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Dimensions: {} x {}", self.rows, self.cols)?;
        writeln!(f, "Non-zero elements: {}", self.nnz)?;
        write!(f, "Density: {:.6}%", self.density * 100.0)
    }
}

/// Full contents of a matrix as a JSON-friendly value
///
/// Entries are listed in ascending `(row, col)` order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatrixDump {
    /// Declared dimensions
    pub header: MatrixHeader,
    /// Stored non-zero entries
    pub entries: Vec<Entry>,
}

impl MatrixDump {
    /// Capture the header and every stored entry of `matrix`
    pub fn of(matrix: &SparseMatrix) -> Self {
        Self {
            header: matrix.header(),
            entries: matrix.entries(),
        }
    }

    /// Rebuild the matrix, dropping any zero-valued entries
    pub fn into_matrix(self) -> SparseMatrix {
        SparseMatrix::from_triples(
            self.header.rows,
            self.header.cols,
            self.entries.into_iter().map(|e| (e.row, e.col, e.value)),
        )
    }

    /// Encode as a single-line JSON object
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spmx_core::SparseMatrix;

    #[test]
    fn test_summary() {
        let m = SparseMatrix::from_triples(4, 5, [(0, 0, 1), (3, 4, 2)]);
        let summary = MatrixSummary::of(&m);
        assert_eq!(summary.rows, 4);
        assert_eq!(summary.cols, 5);
        assert_eq!(summary.nnz, 2);
        assert!((summary.density - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_summary_of_empty_shape() {
        let summary = MatrixSummary::of(&SparseMatrix::new(0, 3));
        assert_eq!(summary.density, 0.0);
    }

    #[test]
    fn test_json() {
        let m = SparseMatrix::from_triples(2, 2, [(1, 1, 7)]);
        let json = MatrixSummary::of(&m).to_json().unwrap();
        assert_eq!(json, r#"{"rows":2,"cols":2,"nnz":1,"density":0.25}"#);

        let decoded: MatrixSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, MatrixSummary::of(&m));
    }

    #[test]
    fn test_display() {
        let m = SparseMatrix::from_triples(2, 2, [(1, 1, 7)]);
        assert_eq!(
            MatrixSummary::of(&m).to_string(),
            "Dimensions: 2 x 2\nNon-zero elements: 1\nDensity: 25.000000%"
        );
    }

    #[test]
    fn test_dump_json() {
        let m = SparseMatrix::from_triples(2, 3, [(1, 2, -4), (0, 0, 5)]);
        let json = MatrixDump::of(&m).to_json().unwrap();
        assert_eq!(
            json,
            r#"{"header":{"rows":2,"cols":3},"entries":[{"row":0,"col":0,"value":5},{"row":1,"col":2,"value":-4}]}"#
        );

        let decoded: MatrixDump = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded.into_matrix(), m);
    }

    #[test]
    fn test_dump_into_matrix_drops_zeros() {
        let dump = MatrixDump {
            header: MatrixHeader::new(1, 2),
            entries: vec![
                Entry { row: 0, col: 0, value: 0 },
                Entry { row: 0, col: 1, value: 8 },
            ],
        };
        let m = dump.into_matrix();
        assert_eq!(m.nnz(), 1);
        assert_eq!(m.get(0, 1), 8);
    }
}
