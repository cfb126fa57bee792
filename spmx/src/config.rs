//! Session configuration
//!
//! Names the two input matrix files and the output file a session works
//! on. Command-line arguments override the defaults field by field.

use std::path::{Path, PathBuf};

/// Default left operand file
pub const DEFAULT_LEFT_FILE: &str = "easy_sample_02_1.txt";

/// Default right operand file
pub const DEFAULT_RIGHT_FILE: &str = "easy_sample_03_1.txt";

/// Default result file
pub const DEFAULT_OUTPUT_FILE: &str = "result_matrix.txt";

/// Input and output paths for one compute session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Left operand matrix file
    pub left: PathBuf,
    /// Right operand matrix file
    pub right: PathBuf,
    /// Where the result is written
    pub output: PathBuf,
}

impl SessionConfig {
    /// Create config for the given operand files, writing to the default output
    pub fn new(left: impl Into<PathBuf>, right: impl Into<PathBuf>) -> Self {
        Self {
            left: left.into(),
            right: right.into(),
            output: PathBuf::from(DEFAULT_OUTPUT_FILE),
        }
    }

    /// Set the left operand file
    pub fn with_left(mut self, left: impl Into<PathBuf>) -> Self {
        self.left = left.into();
        self
    }

    /// Set the right operand file
    pub fn with_right(mut self, right: impl Into<PathBuf>) -> Self {
        self.right = right.into();
        self
    }

    /// Set the output file
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    /// Left operand file
    pub fn left(&self) -> &Path {
        &self.left
    }

    /// Right operand file
    pub fn right(&self) -> &Path {
        &self.right
    }

    /// Output file
    pub fn output(&self) -> &Path {
        &self.output
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new(DEFAULT_LEFT_FILE, DEFAULT_RIGHT_FILE)
    }
}
