//! SPMX - Sparse Matrix Files and Arithmetic
//!
//! This library loads sparse integer matrices from coordinate-list text
//! files, combines them, and writes the result back in the same format.
//!
//! ## Architecture
//!
//! - **spmx-core**: the matrix type, its arithmetic and the text format (no I/O)
//! - **spmx**: file loading and saving, operation selection, sessions and the CLI
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use spmx::{read_matrix, write_matrix, Operation};
//!
//! fn example() -> spmx::Result<()> {
//!     let left = read_matrix("easy_sample_02_1.txt")?;
//!     let right = read_matrix("easy_sample_03_1.txt")?;
//!
//!     let op: Operation = "multiply".parse()?;
//!     let result = op.apply(&left, &right)?;
//!     write_matrix("result_matrix.txt", &result)?;
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **mmap**: read input files through a read-only memory map
//! - **serde**: JSON matrix summaries and entry dumps
//! - **cli**: the `spmx` command-line tool

// Re-export core abstractions
pub use spmx_core::{
    // Matrix type and operations
    add, multiply, subtract, Entry, SparseMatrix,
    // Access traits
    MatrixAccess, MatrixOperations,
    // Format
    MatrixHeader,
    // Error handling
    ErrorCategory, HeaderField, SpmxError,
};

pub mod config;
pub mod error;
pub mod file_io;
pub mod operation;
pub mod session;
#[cfg(feature = "serde")]
pub mod summary;

pub use config::SessionConfig;
pub use error::{Error, Result};
pub use file_io::{read_matrix, write_matrix};
pub use operation::Operation;
pub use session::{prompt_operation, run, run_interactive, SessionReport};

#[cfg(feature = "serde")]
pub use summary::{MatrixDump, MatrixSummary};
