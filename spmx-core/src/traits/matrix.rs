//! Core matrix abstraction traits

use alloc::vec::Vec;

use crate::matrix::SparseMatrix;

/// Read-only sparse matrix access
pub trait MatrixAccess {
    /// Get a stored element
    ///
    /// Returns `None` if nothing non-zero is stored at the position,
    /// including positions outside the declared dimensions.
    fn get_element(&self, row: usize, col: usize) -> Option<i64>;

    /// Get matrix dimensions as (rows, cols)
    fn dimensions(&self) -> (usize, usize);

    /// Get number of non-zero elements stored
    fn nnz(&self) -> usize;
}

/// Row and column extraction
pub trait MatrixOperations: MatrixAccess {
    /// Non-zero elements of a row as `(col, value)`, in column order
    fn get_row(&self, row_index: usize) -> Vec<(usize, i64)>;

    /// Non-zero elements of a column as `(row, value)`, in row order
    fn get_col(&self, col_index: usize) -> Vec<(usize, i64)>;
}

impl MatrixAccess for SparseMatrix {
    fn get_element(&self, row: usize, col: usize) -> Option<i64> {
        match self.get(row, col) {
            0 => None,
            value => Some(value),
        }
    }

    fn dimensions(&self) -> (usize, usize) {
        SparseMatrix::dimensions(self)
    }

    fn nnz(&self) -> usize {
        SparseMatrix::nnz(self)
    }
}

impl MatrixOperations for SparseMatrix {
    fn get_row(&self, row_index: usize) -> Vec<(usize, i64)> {
        let mut row: Vec<(usize, i64)> = self
            .iter()
            .filter(|e| e.row == row_index)
            .map(|e| (e.col, e.value))
            .collect();
        row.sort_unstable_by_key(|&(col, _)| col);
        row
    }

    fn get_col(&self, col_index: usize) -> Vec<(usize, i64)> {
        let mut col: Vec<(usize, i64)> = self
            .iter()
            .filter(|e| e.col == col_index)
            .map(|e| (e.row, e.value))
            .collect();
        col.sort_unstable_by_key(|&(row, _)| row);
        col
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn sample() -> SparseMatrix {
        SparseMatrix::from_triples(3, 3, [(0, 2, 1), (0, 0, 2), (2, 0, 3), (1, 1, -4)])
    }

    #[test]
    fn test_get_element() {
        let m = sample();
        assert_eq!(m.get_element(0, 2), Some(1));
        assert_eq!(m.get_element(0, 1), None);
        assert_eq!(m.get_element(99, 99), None);
        assert_eq!(MatrixAccess::nnz(&m), 4);
        assert_eq!(MatrixAccess::dimensions(&m), (3, 3));
    }

    #[test]
    fn test_get_row_and_col() {
        let m = sample();
        assert_eq!(m.get_row(0), vec![(0, 2), (2, 1)]);
        assert_eq!(m.get_row(1), vec![(1, -4)]);
        assert_eq!(m.get_col(0), vec![(0, 2), (2, 3)]);
        assert!(m.get_col(5).is_empty());
    }
}
