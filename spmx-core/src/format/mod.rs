//! Coordinate-list text format for SPMX matrices
//!
//! ```text
//! rows=<integer>
//! cols=<integer>
//! (<row>, <col>, <value>)
//! ...
//! ```
//!
//! This module contains the line-level grammar only. Whole-matrix parsing
//! and serialization live on [`crate::SparseMatrix`].

pub mod constants;
pub mod entry;
pub mod header;

pub use entry::{parse_entry_line, write_entry_line, EntryLine};
pub use header::{parse_header_line, write_header, MatrixHeader};
