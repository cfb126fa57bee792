//! Abstract interfaces for SPMX matrices
//!
//! Format-agnostic read access, so summaries and tooling can work against
//! any matrix representation rather than the concrete hash-map store.

pub mod matrix;

pub use matrix::{MatrixAccess, MatrixOperations};
