//! Computed cell values

use std::fmt;
use std::sync::Arc;

use crate::cell_type::CellType;
use crate::error::{Error, Result};
use crate::eval::{ErrorEval, ErrorRegistry};

/// Shared boolean TRUE
pub static TRUE: CellValue = CellValue::Boolean(true);

/// Shared boolean FALSE
pub static FALSE: CellValue = CellValue::Boolean(false);

/// The computed content of a cell
///
/// Values are immutable once built. Booleans obtained through
/// [`CellValue::value_of`] are the shared [`TRUE`] and [`FALSE`] statics.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// Numeric value (all numbers stored as f64, including dates)
    Numeric(f64),

    /// String value
    String(Arc<str>),

    /// Boolean value (TRUE/FALSE)
    Boolean(bool),

    /// Error value, as a raw error code
    ///
    /// The code is not checked against the catalog; an unknown code only
    /// shows up when the value is formatted.
    Error(i32),
}

impl CellValue {
    /// The shared value for `b`
    pub fn value_of(b: bool) -> &'static CellValue {
        if b {
            &TRUE
        } else {
            &FALSE
        }
    }

    /// Create a numeric value
    pub fn number(n: f64) -> Self {
        CellValue::Numeric(n)
    }

    /// Create a new string value
    pub fn string<S: Into<String>>(s: S) -> Self {
        let s: String = s.into();
        CellValue::String(Arc::from(s))
    }

    /// Create an error value holding `code` as given
    pub fn error(code: i32) -> Self {
        CellValue::Error(code)
    }

    /// Kind of this value
    pub fn cell_type(&self) -> CellType {
        match self {
            CellValue::Numeric(_) => CellType::Numeric,
            CellValue::String(_) => CellType::String,
            CellValue::Boolean(_) => CellType::Boolean,
            CellValue::Error(_) => CellType::Error,
        }
    }

    /// Check if the value is an error
    pub fn is_error(&self) -> bool {
        matches!(self, CellValue::Error(_))
    }

    // Lenient accessors: a mismatched kind reads as the default.

    /// The number, or `0.0` for other kinds
    pub fn number_value(&self) -> f64 {
        self.as_number().unwrap_or_default()
    }

    /// The text, or `None` for other kinds
    pub fn string_value(&self) -> Option<&str> {
        self.as_string()
    }

    /// The boolean, or `false` for other kinds
    pub fn boolean_value(&self) -> bool {
        self.as_bool().unwrap_or_default()
    }

    /// The error code, or `0` for other kinds
    pub fn error_value(&self) -> i32 {
        self.as_error().unwrap_or_default()
    }

    /// Try to get the value as a number
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Numeric(n) => Some(*n),
            _ => None,
        }
    }

    /// Try to get the value as a string
    pub fn as_string(&self) -> Option<&str> {
        match self {
            CellValue::String(s) => Some(s.as_ref()),
            _ => None,
        }
    }

    /// Try to get the value as a boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            CellValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get the error code
    pub fn as_error(&self) -> Option<i32> {
        match self {
            CellValue::Error(code) => Some(*code),
            _ => None,
        }
    }

    /// The number, failing on any other kind
    pub fn to_number(&self) -> Result<f64> {
        self.as_number()
            .ok_or_else(|| self.kind_mismatch(CellType::Numeric))
    }

    /// The text, failing on any other kind
    pub fn to_str(&self) -> Result<&str> {
        self.as_string()
            .ok_or_else(|| self.kind_mismatch(CellType::String))
    }

    /// The boolean, failing on any other kind
    pub fn to_bool(&self) -> Result<bool> {
        self.as_bool()
            .ok_or_else(|| self.kind_mismatch(CellType::Boolean))
    }

    /// The error code, failing on any other kind
    pub fn to_error(&self) -> Result<i32> {
        self.as_error()
            .ok_or_else(|| self.kind_mismatch(CellType::Error))
    }

    /// Render the value the way formula debugging output shows it
    ///
    /// Strings are quoted, booleans are `TRUE`/`FALSE` and errors use the
    /// catalog text (non-standard codes render as `~non~std~err(..)~`).
    pub fn format_as_string(&self) -> String {
        match self {
            CellValue::Numeric(n) => format_number(*n),
            CellValue::String(s) => format!("\"{}\"", s),
            CellValue::Boolean(true) => "TRUE".to_string(),
            CellValue::Boolean(false) => "FALSE".to_string(),
            CellValue::Error(code) => ErrorRegistry::global().text(*code).into_owned(),
        }
    }

    fn kind_mismatch(&self, expected: CellType) -> Error {
        Error::InvalidKindAccess {
            expected,
            actual: self.cell_type(),
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_as_string())
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::Boolean(b)
    }
}

impl From<i32> for CellValue {
    fn from(n: i32) -> Self {
        CellValue::Numeric(n as f64)
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Numeric(n)
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::string(s)
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::string(s)
    }
}

impl From<&ErrorEval> for CellValue {
    fn from(e: &ErrorEval) -> Self {
        CellValue::Error(e.error_code())
    }
}

/// Text of a number the way formula debugging output shows it
///
/// Non-finite values are `NaN`, `Infinity` and `-Infinity`. Magnitudes of
/// 1e21 and above or below 1e-6 use exponent form with an explicit sign
/// (`1e+21`, `1.5e-7`); everything else uses plain decimal digits.
fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n == 0.0 {
        return "0".to_string();
    }
    let abs = n.abs();
    if (1e-6..1e21).contains(&abs) {
        return n.to_string();
    }
    let exp = format!("{n:e}");
    match exp.split_once('e') {
        Some((mantissa, power)) if !power.starts_with('-') => format!("{mantissa}e+{power}"),
        _ => exp,
    }
}
