// WMC - wmc-error
// Module: WMC Error Struct
//
// Copyright (c) 2025 The WMC Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Defines the main `Error` struct and its category enumeration.

use core::fmt;

/// `Error` categories for WMC operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ErrorCategory {
    /// Binary decode errors (malformed or truncated input)
    Parse = 1,
    /// Structural validation errors (well-formed bytes, invalid meaning)
    Validation = 2,
    /// Binary encode errors
    Encode = 3,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse => f.write_str("parse"),
            Self::Validation => f.write_str("validation"),
            Self::Encode => f.write_str("encode"),
        }
    }
}

/// WMC `Error` type.
///
/// This is the main error type for the WebAssembly Module Codec. It
/// provides categorized errors with numeric error codes and a message
/// describing the offending byte or offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    /// `Error` category
    pub category: ErrorCategory,
    /// `Error` code
    pub code: u16,
    /// `Error` message
    pub message: String,
}

impl Error {
    /// Create a new error with the given category, code and message.
    pub fn new(category: ErrorCategory, code: u16, message: impl Into<String>) -> Self {
        Self {
            category,
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}][E{:04}] {}", self.category, self.code, self.message)
    }
}

impl std::error::Error for Error {}

/// Result type alias using the WMC [`Error`].
pub type Result<T> = core::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codes;

    #[test]
    fn display_includes_category_and_code() {
        let err = Error::new(
            ErrorCategory::Parse,
            codes::INVALID_OPCODE,
            "invalid opcode: 0xff",
        );
        assert_eq!(err.to_string(), "[parse][E1008] invalid opcode: 0xff");
    }
}
