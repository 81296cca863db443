//! Cell kinds

use std::fmt;

/// The kind of content a cell holds
///
/// [`CellValue`](crate::CellValue) only ever reports `Numeric`, `String`,
/// `Boolean` or `Error`. `Blank` and `Formula` belong to the cell model
/// that stores computed values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellType {
    /// Blank cell
    Blank,
    /// Boolean cell
    Boolean,
    /// Error cell
    Error,
    /// Formula cell
    Formula,
    /// Numeric cell (whole numbers, fractional numbers, dates)
    Numeric,
    /// Text cell
    String,
}

impl CellType {
    /// Upper-case name of the kind
    pub fn as_str(&self) -> &'static str {
        match self {
            CellType::Blank => "BLANK",
            CellType::Boolean => "BOOLEAN",
            CellType::Error => "ERROR",
            CellType::Formula => "FORMULA",
            CellType::Numeric => "NUMERIC",
            CellType::String => "STRING",
        }
    }
}

impl fmt::Display for CellType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
