//! Tests for product code normalization

use stockroom::record::code;
use stockroom::InventoryError;

#[test]
fn test_normalize_accepts_canonical_code() {
    assert_eq!(code::normalize("SKU12345").unwrap(), "SKU12345");
}

#[test]
fn test_normalize_uppercases_and_strips_spaces() {
    assert_eq!(code::normalize(" sku 123 45 ").unwrap(), "SKU12345");
}

#[test]
fn test_normalize_rejects_short_code() {
    match code::normalize("sku1234") {
        Err(InventoryError::InvalidProductCode(code)) => assert_eq!(code, "SKU1234"),
        other => panic!("expected InvalidProductCode, got {:?}", other),
    }
}

#[test]
fn test_normalize_rejects_long_code() {
    assert!(code::normalize("SKU123456").is_err());
}

#[test]
fn test_normalize_rejects_wrong_prefix() {
    assert!(code::normalize("ABC12345").is_err());
}

#[test]
fn test_normalize_rejects_non_digits() {
    assert!(code::normalize("SKU12a45").is_err());
}

#[test]
fn test_is_valid_is_case_sensitive() {
    assert!(code::is_valid("SKU00001"));
    assert!(!code::is_valid("sku00001"));
}
