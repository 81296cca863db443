//! # sheetval
//!
//! Computed cell values and formula error codes for a spreadsheet engine.
//!
//! This crate provides:
//! - [`CellValue`] - The computed content of a cell (number, string, boolean, error)
//! - [`FormulaError`] and [`ErrorCatalog`] - The known error codes and their
//!   short code, extended code and display string
//! - [`ErrorEval`] and [`ErrorRegistry`] - Shared wrappers used as formula results
//!
//! ## Example
//!
//! ```rust
//! use sheetval::{CellValue, ErrorEval, FormulaError};
//!
//! let div0 = ErrorEval::value_of(0x07).unwrap();
//! assert_eq!(div0.error_string(), "#DIV/0!");
//!
//! let value = CellValue::from(div0);
//! assert_eq!(value.format_as_string(), "#DIV/0!");
//!
//! assert_eq!(FormulaError::for_string("#N/A").unwrap(), FormulaError::Na);
//! assert!(std::ptr::eq(CellValue::value_of(true), CellValue::value_of(true)));
//! ```

pub mod catalog;
pub mod cell_type;
pub mod error;
pub mod eval;
pub mod formula_error;
pub mod value;

// Re-exports for convenience
pub use catalog::{CatalogOptions, DuplicateKeyPolicy, ErrorCatalog};
pub use cell_type::CellType;
pub use error::{Error, LookupKey, Result};
pub use eval::{ErrorEval, ErrorRegistry};
pub use formula_error::FormulaError;
pub use value::CellValue;

/// Highest short code in the standard Excel error space
pub const MAX_STANDARD_CODE: u8 = 0x7F;
