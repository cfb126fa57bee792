//! Addition, subtraction and multiplication of sparse matrices
//!
//! All operations borrow their operands and return a freshly owned result.
//! Values are combined with checked `i64` arithmetic.

use core::ops::{Add, Sub};

use crate::error::{Result, SpmxError};
use crate::matrix::SparseMatrix;

/// Coordinate-wise sum of two matrices
///
/// The result takes the larger declared size on each axis independently;
/// mismatched dimensions are not an error. Entries that cancel to zero are
/// dropped.
pub fn add(a: &SparseMatrix, b: &SparseMatrix) -> Result<SparseMatrix> {
    combine(a, b, i64::checked_add)
}

/// Coordinate-wise difference `a - b`
///
/// Same dimension policy as [`add`].
pub fn subtract(a: &SparseMatrix, b: &SparseMatrix) -> Result<SparseMatrix> {
    combine(a, b, i64::checked_sub)
}

fn combine(
    a: &SparseMatrix,
    b: &SparseMatrix,
    op: fn(i64, i64) -> Option<i64>,
) -> Result<SparseMatrix> {
    let mut result = SparseMatrix::new(a.rows().max(b.rows()), a.cols().max(b.cols()));

    for entry in a.iter() {
        result.set(entry.row, entry.col, entry.value);
    }

    for entry in b.iter() {
        let current = result.get(entry.row, entry.col);
        let value = op(current, entry.value).ok_or(SpmxError::ArithmeticOverflow {
            row: entry.row,
            col: entry.col,
        })?;
        result.set(entry.row, entry.col, value);
    }

    Ok(result)
}

/// Matrix product `a × b`
///
/// Fails with [`SpmxError::DimensionMismatch`] unless `a.cols() == b.rows()`.
/// For every stored entry `(row, k)` of `a`, taken in ascending `(row, k)`
/// order, the columns of `b` are scanned in increasing order and each
/// non-zero `b[k, col]` is accumulated into `result[row, col]`. Cost is
/// `O(nnz(a) * b.cols())`.
pub fn multiply(a: &SparseMatrix, b: &SparseMatrix) -> Result<SparseMatrix> {
    if a.cols() != b.rows() {
        return Err(SpmxError::DimensionMismatch {
            left_cols: a.cols(),
            right_rows: b.rows(),
        });
    }

    let mut result = SparseMatrix::new(a.rows(), b.cols());

    for left in a.entries() {
        for col in 0..b.cols() {
            let right = b.get(left.col, col);
            if right == 0 {
                continue;
            }

            let overflow = SpmxError::ArithmeticOverflow { row: left.row, col };
            let product = left.value.checked_mul(right).ok_or(overflow)?;
            let sum = result
                .get(left.row, col)
                .checked_add(product)
                .ok_or(overflow)?;
            result.set(left.row, col, sum);
        }
    }

    log::debug!(
        "multiplied {}x{} by {}x{}: {} entries",
        a.rows(),
        a.cols(),
        b.rows(),
        b.cols(),
        result.nnz()
    );

    Ok(result)
}

impl SparseMatrix {
    /// See [`multiply`]
    pub fn multiply(&self, other: &SparseMatrix) -> Result<SparseMatrix> {
        multiply(self, other)
    }
}

impl Add for &SparseMatrix {
    type Output = Result<SparseMatrix>;

    fn add(self, rhs: Self) -> Self::Output {
        add(self, rhs)
    }
}

impl Sub for &SparseMatrix {
    type Output = Result<SparseMatrix>;

    fn sub(self, rhs: Self) -> Self::Output {
        subtract(self, rhs)
    }
}
