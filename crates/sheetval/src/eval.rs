//! Error values as formula results
//!
//! An [`ErrorEval`] is a shared, identity-stable wrapper around a
//! [`FormulaError`]. The evaluator hands out references to the statics in
//! this module instead of building new values, so two results carrying
//! the same error can be compared with [`std::ptr::eq`].
//!
//! Only the errors in [`WELL_KNOWN`] have a wrapper. In particular
//! [`FormulaError::NoError`] is in the catalog but is never a formula
//! result, so [`ErrorEval::value_of`] reports it as unregistered.

use std::borrow::Cow;
use std::sync::OnceLock;

use ahash::AHashMap;

use crate::catalog::ErrorCatalog;
use crate::error::{Error, Result};
use crate::formula_error::FormulaError;

static GLOBAL_REGISTRY: OnceLock<ErrorRegistry<'static>> = OnceLock::new();

/// **#NULL!** - Intersection of two cell ranges is empty
pub static NULL_INTERSECTION: ErrorEval = ErrorEval::new(FormulaError::Null);

/// **#DIV/0!** - Division by zero
pub static DIV_ZERO: ErrorEval = ErrorEval::new(FormulaError::Div0);

/// **#VALUE!** - Wrong type of operand
pub static VALUE_INVALID: ErrorEval = ErrorEval::new(FormulaError::Value);

/// **#REF!** - Illegal or deleted cell reference
pub static REF_INVALID: ErrorEval = ErrorEval::new(FormulaError::Ref);

/// **#NAME?** - Wrong function or range name
pub static NAME_INVALID: ErrorEval = ErrorEval::new(FormulaError::Name);

/// **#NUM!** - Value range overflow
pub static NUM_ERROR: ErrorEval = ErrorEval::new(FormulaError::Num);

/// **#N/A** - Argument or function not available
pub static NA: ErrorEval = ErrorEval::new(FormulaError::Na);

/// Function is not implemented by the evaluator
pub static FUNCTION_NOT_IMPLEMENTED: ErrorEval =
    ErrorEval::new(FormulaError::FunctionNotImplemented);

/// Circular reference. Excel has no error code for this condition.
pub static CIRCULAR_REF_ERROR: ErrorEval = ErrorEval::new(FormulaError::CircularRef);

/// All wrappers registered by [`ErrorRegistry::global`]
pub static WELL_KNOWN: [&ErrorEval; 9] = [
    &NULL_INTERSECTION,
    &DIV_ZERO,
    &VALUE_INVALID,
    &REF_INVALID,
    &NAME_INVALID,
    &NUM_ERROR,
    &NA,
    &FUNCTION_NOT_IMPLEMENTED,
    &CIRCULAR_REF_ERROR,
];

/// An error produced as the result of a formula
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct ErrorEval {
    error: FormulaError,
}

impl ErrorEval {
    const fn new(error: FormulaError) -> Self {
        Self { error }
    }

    /// Translate an error code into its shared wrapper
    ///
    /// Fails with [`Error::UnknownCode`] if the code is not in the catalog
    /// and with [`Error::UnregisteredWrapper`] if it is but has no wrapper.
    pub fn value_of(code: i32) -> Result<&'static ErrorEval> {
        ErrorRegistry::global().value_of(code)
    }

    /// Display string for an error code; non-standard codes are handled
    pub fn text(code: i32) -> Cow<'static, str> {
        ErrorRegistry::global().text(code)
    }

    /// Extended code of the wrapped error
    pub fn error_code(&self) -> i32 {
        self.error.long_code()
    }

    /// Display string of the wrapped error
    pub fn error_string(&self) -> &'static str {
        self.error.as_str()
    }

    /// The wrapped catalog entry
    pub fn formula_error(&self) -> FormulaError {
        self.error
    }
}

/// Maps catalog entries to their [`ErrorEval`] wrapper
#[derive(Debug)]
pub struct ErrorRegistry<'c> {
    catalog: &'c ErrorCatalog,
    evals: AHashMap<FormulaError, &'static ErrorEval>,
}

impl<'c> ErrorRegistry<'c> {
    /// Create a registry resolving codes through `catalog`
    ///
    /// A wrapper listed twice for the same error replaces the earlier one.
    pub fn new(catalog: &'c ErrorCatalog, wrappers: &[&'static ErrorEval]) -> Self {
        let evals = wrappers.iter().map(|eval| (eval.error, *eval)).collect();
        Self { catalog, evals }
    }

    /// The catalog codes are resolved through
    pub fn catalog(&self) -> &'c ErrorCatalog {
        self.catalog
    }

    /// Number of registered wrappers
    pub fn len(&self) -> usize {
        self.evals.len()
    }

    /// Check if no wrapper is registered
    pub fn is_empty(&self) -> bool {
        self.evals.is_empty()
    }

    /// Check if `error` has a wrapper
    pub fn contains(&self, error: FormulaError) -> bool {
        self.evals.contains_key(&error)
    }

    /// See [`ErrorEval::value_of`]
    pub fn value_of(&self, code: i32) -> Result<&'static ErrorEval> {
        let error = self.catalog.for_int(code)?;
        self.evals
            .get(&error)
            .copied()
            .ok_or(Error::UnregisteredWrapper(code))
    }

    /// See [`ErrorCatalog::text`]
    pub fn text(&self, code: i32) -> Cow<'static, str> {
        self.catalog.text(code)
    }
}

impl ErrorRegistry<'static> {
    /// The process-wide registry of the [`WELL_KNOWN`] wrappers
    pub fn global() -> &'static ErrorRegistry<'static> {
        GLOBAL_REGISTRY.get_or_init(|| {
            log::debug!("registering {} error wrappers", WELL_KNOWN.len());
            ErrorRegistry::new(ErrorCatalog::global(), &WELL_KNOWN)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogOptions;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_value_of_returns_shared_instance() {
        let eval = ErrorEval::value_of(0x07).unwrap();
        assert!(std::ptr::eq(eval, &DIV_ZERO));
        assert!(std::ptr::eq(ErrorEval::value_of(-60).unwrap(), &CIRCULAR_REF_ERROR));
    }

    #[test]
    fn test_accessors() {
        assert_eq!(NA.error_code(), 0x2A);
        assert_eq!(NA.error_string(), "#N/A");
        assert_eq!(FUNCTION_NOT_IMPLEMENTED.error_code(), -30);
        assert_eq!(NUM_ERROR.formula_error(), FormulaError::Num);
    }

    #[test]
    fn test_no_error_is_unregistered() {
        let err = ErrorEval::value_of(-1).unwrap_err();
        assert!(err.is_unregistered_wrapper());
        assert!(!err.is_unknown_code());
    }

    #[test]
    fn test_unknown_code() {
        let err = ErrorEval::value_of(0x03).unwrap_err();
        assert!(err.is_unknown_code());
        // low bytes of the engine specific codes
        assert!(ErrorEval::value_of(0xC4).unwrap_err().is_unknown_code());
        assert!(ErrorEval::value_of(0xE2).unwrap_err().is_unknown_code());
    }

    #[test]
    fn test_global_registry_covers_catalog_except_no_error() {
        let registry = ErrorRegistry::global();
        assert_eq!(registry.len(), 9);
        for error in FormulaError::ALL {
            assert_eq!(registry.contains(error), error != FormulaError::NoError);
        }
    }

    #[test]
    fn test_partial_registry() {
        let catalog = ErrorCatalog::build(&FormulaError::ALL, &CatalogOptions::default()).unwrap();
        let registry = ErrorRegistry::new(&catalog, &[&DIV_ZERO]);
        assert!(std::ptr::eq(registry.value_of(7).unwrap(), &DIV_ZERO));
        assert!(registry.value_of(0x0F).unwrap_err().is_unregistered_wrapper());
        assert_eq!(registry.text(0x0F), "#VALUE!");
    }
}
