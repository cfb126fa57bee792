//! One load-compute-save session
//!
//! A session loads the two operand files named by a [`SessionConfig`],
//! applies an [`Operation`], and writes the result. Both operands are
//! loaded before the operation is asked for, and the output file is only
//! touched once the operation has succeeded.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::config::SessionConfig;
use crate::error::{Error, Result};
use crate::file_io::{read_matrix, write_matrix};
use crate::operation::Operation;
use spmx_core::SparseMatrix;

/// Menu shown when asking for an operation
pub const OPERATION_PROMPT: &str = "Select an option: 1. Add, 2. Subtract, 3. Multiply: ";

/// Outcome of a successful session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionReport {
    /// Operation that was applied
    pub operation: Operation,
    /// File the result was written to
    pub output: PathBuf,
    /// Result dimensions as (rows, cols)
    pub dimensions: (usize, usize),
    /// Number of non-zero entries in the result
    pub nnz: usize,
}

/// Print the operation menu to `output` and read one selection from `input`
///
/// End of input counts as an empty, and therefore invalid, selection.
pub fn prompt_operation<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<Operation> {
    write!(output, "{OPERATION_PROMPT}").map_err(|e| Error::io("write", "<stdout>", e))?;
    output.flush().map_err(|e| Error::io("flush", "<stdout>", e))?;

    let mut line = String::new();
    input
        .read_line(&mut line)
        .map_err(|e| Error::io("read", "<stdin>", e))?;
    line.parse()
}

/// Check that both operand files exist before any of them is read
pub fn check_inputs(config: &SessionConfig) -> Result<()> {
    for path in [config.left(), config.right()] {
        if !path.exists() {
            return Err(Error::NotFound {
                path: path.to_path_buf(),
            });
        }
    }
    Ok(())
}

/// Check and load both operands, left first
pub fn load_operands(config: &SessionConfig) -> Result<(SparseMatrix, SparseMatrix)> {
    check_inputs(config)?;
    let left = read_matrix(config.left())?;
    let right = read_matrix(config.right())?;
    Ok((left, right))
}

/// Load both operands, apply `operation`, and save the result
pub fn run(config: &SessionConfig, operation: Operation) -> Result<SessionReport> {
    let (left, right) = load_operands(config)?;
    compute(config, operation, &left, &right)
}

/// Load both operands, then prompt for the operation and save the result
///
/// Load failures are returned before anything is written to `output`.
pub fn run_interactive<R: BufRead, W: Write>(
    config: &SessionConfig,
    input: &mut R,
    output: &mut W,
) -> Result<SessionReport> {
    let (left, right) = load_operands(config)?;
    let operation = prompt_operation(input, output)?;
    compute(config, operation, &left, &right)
}

/// Apply `operation` to loaded operands and save the result
pub fn compute(
    config: &SessionConfig,
    operation: Operation,
    left: &SparseMatrix,
    right: &SparseMatrix,
) -> Result<SessionReport> {
    let result = operation.apply(left, right)?;
    write_matrix(config.output(), &result)?;

    log::info!(
        "{operation} produced {}x{} result with {} entries",
        result.rows(),
        result.cols(),
        result.nnz()
    );

    Ok(SessionReport {
        operation,
        output: config.output().to_path_buf(),
        dimensions: result.dimensions(),
        nnz: result.nnz(),
    })
}
