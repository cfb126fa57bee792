//! Text scanning utilities for the SPMX coordinate-list format
//!
//! This module contains pure scanning functions with no I/O dependencies.

pub mod parsing;

pub use parsing::{
    first_digits, parse_signed, parse_unsigned, signed_digits, skip_whitespace, unsigned_digits,
};
