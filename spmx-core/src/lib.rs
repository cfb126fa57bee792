#![no_std]

//! SPMX Core - Sparse Matrix Type and Text Format
//!
//! This crate provides the coordinate-keyed [`SparseMatrix`], its
//! arithmetic, and the coordinate-list text format it is stored in. It has
//! no I/O; see the `spmx` crate for files and the command line.
//!
//! ```
//! use spmx_core::SparseMatrix;
//!
//! let a: SparseMatrix = "rows=2\ncols=2\n(0, 0, 1)\n(1, 1, 2)\n".parse().unwrap();
//! let b = SparseMatrix::from_triples(2, 2, [(0, 1, 3)]);
//!
//! let product = a.multiply(&b).unwrap();
//! assert_eq!(product.serialize(), "rows=2\ncols=2\n(0, 1, 3)\n");
//! ```

extern crate alloc;

pub mod arithmetic;
pub mod error;
pub mod format;
pub mod matrix;
pub mod traits;
pub mod validation;

pub use arithmetic::{add, multiply, subtract};
pub use error::*;
pub use format::MatrixHeader;
pub use matrix::{Entry, SparseMatrix};
pub use traits::{MatrixAccess, MatrixOperations};
