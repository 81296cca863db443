//! Integration tests for the error catalog, the wrapper registry and
//! error-kind cell values.

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use sheetval::{CellType, CellValue, ErrorCatalog, ErrorEval, FormulaError};

/// Codes the evaluator produces: the seven Excel codes plus the two
/// engine specific ones.
const PRODUCED_CODES: [i32; 9] = [0x00, 0x07, 0x0F, 0x17, 0x1D, 0x24, 0x2A, -60, -30];

#[test]
fn test_value_of_reproduces_code() {
    for code in PRODUCED_CODES {
        let eval = ErrorEval::value_of(code).unwrap();
        assert_eq!(eval.error_code(), code, "code {code}");
    }
}

#[test]
fn test_value_of_is_identity_stable() {
    for code in PRODUCED_CODES {
        let a = ErrorEval::value_of(code).unwrap();
        let b = ErrorEval::value_of(code).unwrap();
        assert!(std::ptr::eq(a, b), "code {code}");
    }
}

#[test]
fn test_unregistered_is_not_unknown() {
    let code = FormulaError::NoError.long_code();
    assert!(FormulaError::is_valid_code(code));

    let err = ErrorEval::value_of(code).unwrap_err();
    assert!(err.is_unregistered_wrapper());
    assert_eq!(err.to_string(), "Unhandled error type for code -1");
}

#[test]
fn test_div0_text() {
    assert_eq!(ErrorCatalog::global().text(0x07), "#DIV/0!");
    assert_eq!(ErrorEval::text(0x07), "#DIV/0!");
}

#[test]
fn test_error_value_formats_through_catalog() {
    let value = CellValue::error(0x0F);
    assert_eq!(value.cell_type(), CellType::Error);
    assert_eq!(value.format_as_string(), "#VALUE!");
}

#[test]
fn test_byte_and_int_lookups_agree() {
    let catalog = ErrorCatalog::global();
    for code in 0..=0x7F_u8 {
        if let (Ok(by_byte), Ok(by_int)) = (catalog.for_byte(code), catalog.for_int(i32::from(code))) {
            assert_eq!(by_byte, by_int, "code {code:#04x}");
        }
    }
}

#[test]
fn test_string_round_trip() {
    let catalog = ErrorCatalog::global();
    for error in catalog.entries() {
        assert_eq!(catalog.for_string(error.as_str()).unwrap(), error);
    }
}

#[test]
fn test_global_init_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(|| ErrorEval::value_of(0x2A).unwrap() as *const ErrorEval as usize))
        .collect();
    let addrs: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(addrs.windows(2).all(|w| w[0] == w[1]));
}

proptest! {
    #[test]
    fn prop_unknown_code_text_is_sentinel(code in any::<i32>()) {
        prop_assume!(!ErrorCatalog::global().is_valid_code(code));
        let text = ErrorCatalog::global().text(code);
        prop_assert_eq!(&*text, format!("~non~std~err({code})~"));
        prop_assert!(ErrorCatalog::global().for_string(&text).is_err());
    }

    #[test]
    fn prop_error_value_keeps_raw_code(code in any::<i32>()) {
        let value = CellValue::error(code);
        prop_assert_eq!(value.error_value(), code);
        prop_assert_eq!(value.format_as_string(), ErrorEval::text(code).into_owned());
    }

    #[test]
    fn prop_resolved_wrapper_reproduces_code(code in any::<i32>()) {
        if let Ok(eval) = ErrorEval::value_of(code) {
            prop_assert_eq!(eval.error_code(), code);
        }
    }
}
