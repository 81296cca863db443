//! Error types for sheetval

use std::fmt;

use thiserror::Error;

use crate::cell_type::CellType;
use crate::formula_error::FormulaError;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// The key a catalog lookup was performed with
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LookupKey {
    /// Short (one byte) error code
    Byte(u8),
    /// Extended error code
    Int(i32),
    /// Display string such as `#DIV/0!`
    Text(String),
}

impl fmt::Display for LookupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupKey::Byte(b) => write!(f, "error type {b:#04x}"),
            LookupKey::Int(i) => write!(f, "error type {i}"),
            LookupKey::Text(s) => write!(f, "error code {s:?}"),
        }
    }
}

/// Errors that can occur in sheetval
#[derive(Debug, Error)]
pub enum Error {
    /// No catalog entry matches the key
    #[error("Unknown {0}")]
    UnknownCode(LookupKey),

    /// The code is in the catalog but has no [`ErrorEval`](crate::ErrorEval)
    #[error("Unhandled error type for code {0}")]
    UnregisteredWrapper(i32),

    /// Strict accessor used against a value of another kind
    #[error("Invalid value kind: expected {expected}, got {actual}")]
    InvalidKindAccess {
        expected: CellType,
        actual: CellType,
    },

    /// Two catalog entries claim the same key
    #[error("Duplicate catalog key {key}: {first:?} and {second:?}")]
    DuplicateKey {
        key: LookupKey,
        first: FormulaError,
        second: FormulaError,
    },
}

impl Error {
    /// True for lookups that matched no catalog entry
    pub fn is_unknown_code(&self) -> bool {
        matches!(self, Error::UnknownCode(_))
    }

    /// True when the code is valid but no wrapper is registered for it
    pub fn is_unregistered_wrapper(&self) -> bool {
        matches!(self, Error::UnregisteredWrapper(_))
    }
}
