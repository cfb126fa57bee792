//! Arithmetic operation selector
//!
//! Accepts either the numeric menu code or the operation name, so `2`,
//! `subtract` and ` Subtract ` all select [`Operation::Subtract`].

use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use spmx_core::{SparseMatrix, SpmxError};

/// A binary operation between two loaded matrices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Menu code 1
    Add,
    /// Menu code 2
    Subtract,
    /// Menu code 3
    Multiply,
}

impl Operation {
    /// All operations in menu order
    pub const ALL: [Operation; 3] = [Operation::Add, Operation::Subtract, Operation::Multiply];

    /// Numeric menu code for this operation
    pub const fn code(&self) -> u8 {
        match self {
            Operation::Add => 1,
            Operation::Subtract => 2,
            Operation::Multiply => 3,
        }
    }

    /// Lower-case operation name
    pub const fn name(&self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
        }
    }

    /// Apply this operation to `left` and `right`
    pub fn apply(
        &self,
        left: &SparseMatrix,
        right: &SparseMatrix,
    ) -> Result<SparseMatrix, SpmxError> {
        match self {
            Operation::Add => spmx_core::add(left, right),
            Operation::Subtract => spmx_core::subtract(left, right),
            Operation::Multiply => spmx_core::multiply(left, right),
        }
    }
}

impl FromStr for Operation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let selector = s.trim().to_ascii_lowercase();
        Operation::ALL
            .into_iter()
            .find(|op| selector == op.name() || selector == op.code().to_string())
            .ok_or_else(|| Error::InvalidOperation(s.trim().to_string()))
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
