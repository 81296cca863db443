//! Formula error codes
//!
//! The closed set of error values a formula calculation can produce, with
//! the three representations each one has: the one-byte code stored in
//! BIFF records, the extended code used during evaluation, and the display
//! string shown in the cell. See OOO's excelfileformat.pdf (2.5.6).

use std::fmt;
use std::str::FromStr;

use crate::catalog::ErrorCatalog;
use crate::error::{Error, Result};

/// Error values in SpreadsheetML formula calculations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FormulaError {
    /// (no error) - placeholder for "no error present"
    NoError,
    /// #NULL! - Two areas are required to intersect but do not,
    /// e.g. `SUM(B1 C1)` where a comma was intended
    Null,
    /// #DIV/0! - Division by zero. Any error divided by zero stays that error.
    Div0,
    /// #VALUE! - Incompatible argument or operand type
    Value,
    /// #REF! - Invalid cell reference, e.g. after the referenced row was
    /// deleted, or `OFFSET(A1,0,20000)` past the last column
    Ref,
    /// #NAME? - Something that looks like a name is used but not defined
    Name,
    /// #NUM! - Domain error (`SQRT(-1)`) or range error (`FACT(1000)`)
    Num,
    /// #N/A - A designated value is not available. Produced by `NA()`.
    Na,
    /// Engine specific: the formula takes part in a circular reference
    CircularRef,
    /// Engine specific: the function is not implemented by the evaluator
    FunctionNotImplemented,
}

impl FormulaError {
    /// Every catalog entry, in declaration order
    pub const ALL: [FormulaError; 10] = [
        FormulaError::NoError,
        FormulaError::Null,
        FormulaError::Div0,
        FormulaError::Value,
        FormulaError::Ref,
        FormulaError::Name,
        FormulaError::Num,
        FormulaError::Na,
        FormulaError::CircularRef,
        FormulaError::FunctionNotImplemented,
    ];

    /// Extended (internal) numeric code of the error
    ///
    /// The engine specific errors sit outside the byte range so they can
    /// never collide with a code Excel defines.
    pub const fn long_code(&self) -> i32 {
        match self {
            FormulaError::NoError => -1,
            FormulaError::Null => 0x00,
            FormulaError::Div0 => 0x07,
            FormulaError::Value => 0x0F,
            FormulaError::Ref => 0x17,
            FormulaError::Name => 0x1D,
            FormulaError::Num => 0x24,
            FormulaError::Na => 0x2A,
            FormulaError::CircularRef => 0xFFFF_FFC4_u32 as i32,
            FormulaError::FunctionNotImplemented => 0xFFFF_FFE2_u32 as i32,
        }
    }

    /// One-byte numeric code of the error
    ///
    /// Only the standard errors have one; the engine specific errors and
    /// `NoError` exist solely as extended codes.
    pub fn code(&self) -> Option<u8> {
        u8::try_from(self.long_code())
            .ok()
            .filter(|&b| b <= crate::MAX_STANDARD_CODE)
    }

    /// Display string for this error
    ///
    /// The engine specific strings use `~` so they look unlike both the
    /// standard errors and anything else that may appear in a formula.
    pub const fn as_str(&self) -> &'static str {
        match self {
            FormulaError::NoError => "(no error)",
            FormulaError::Null => "#NULL!",
            FormulaError::Div0 => "#DIV/0!",
            FormulaError::Value => "#VALUE!",
            FormulaError::Ref => "#REF!",
            FormulaError::Name => "#NAME?",
            FormulaError::Num => "#NUM!",
            FormulaError::Na => "#N/A",
            FormulaError::CircularRef => "~CIRCULAR~REF~",
            FormulaError::FunctionNotImplemented => "~FUNCTION~NOT~IMPLEMENTED~",
        }
    }

    /// Check if this is one of the seven errors Excel itself defines
    pub fn is_standard(&self) -> bool {
        self.code().is_some()
    }

    /// See [`ErrorCatalog::is_valid_code`]
    pub fn is_valid_code(code: i32) -> bool {
        ErrorCatalog::global().is_valid_code(code)
    }

    /// See [`ErrorCatalog::for_byte`]
    pub fn for_byte(code: u8) -> Result<FormulaError> {
        ErrorCatalog::global().for_byte(code)
    }

    /// See [`ErrorCatalog::for_int`]
    pub fn for_int(code: i32) -> Result<FormulaError> {
        ErrorCatalog::global().for_int(code)
    }

    /// See [`ErrorCatalog::for_string`]
    pub fn for_string(text: &str) -> Result<FormulaError> {
        ErrorCatalog::global().for_string(text)
    }
}

impl fmt::Display for FormulaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormulaError {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        FormulaError::for_string(s)
    }
}
