//! Tests for Store
//!
//! These tests verify:
//! - Loading skips the header and keeps file order
//! - Fail-fast, whole-batch loads (prior contents survive a bad load)
//! - Lookup by code (last match wins)
//! - Lowest / highest by quantity (first match wins on ties)
//! - Empty-store handling
//! - Restartable full scans

use stockroom::{InventoryError, Record, Store};

// =============================================================================
// Helper Functions
// =============================================================================

const HEADER: &str = "country,code,product,cost,quantity";

fn lines(records: &[&str]) -> Vec<String> {
    std::iter::once(HEADER)
        .chain(records.iter().copied())
        .map(str::to_string)
        .collect()
}

fn sample_store() -> Store {
    Store::from_lines(lines(&[
        "SA,SKU00001,Air Force,120.00,5",
        "SA,SKU00002,Air Max,150.00,2",
        "UK,SKU00003,Cortez,80.00,9",
    ]))
    .unwrap()
}

// =============================================================================
// Load Tests
// =============================================================================

#[test]
fn test_new_store_is_empty() {
    let store = Store::new();
    assert_eq!(store.len(), 0);
    assert!(store.is_empty());
}

#[test]
fn test_load_skips_header() {
    let store = sample_store();

    assert_eq!(store.len(), 3);
    assert_eq!(store.get(0).unwrap().code(), "SKU00001");
}

#[test]
fn test_load_preserves_file_order() {
    let store = sample_store();
    let codes: Vec<&str> = store.iter().map(Record::code).collect();

    assert_eq!(codes, vec!["SKU00001", "SKU00002", "SKU00003"]);
}

#[test]
fn test_load_header_only() {
    let store = Store::from_lines(lines(&[])).unwrap();
    assert!(store.is_empty());
}

#[test]
fn test_load_no_lines_at_all() {
    let store = Store::from_lines(Vec::<String>::new()).unwrap();
    assert!(store.is_empty());
}

#[test]
fn test_load_returns_record_count() {
    let mut store = Store::new();
    let count = store
        .load(lines(&["SA,SKU00001,Air Force,120.00,5"]))
        .unwrap();

    assert_eq!(count, 1);
}

#[test]
fn test_load_replaces_previous_contents() {
    let mut store = sample_store();
    store
        .load(lines(&["JP,SKU00009,Blazer,60.00,1"]))
        .unwrap();

    assert_eq!(store.len(), 1);
    assert_eq!(store.get(0).unwrap().code(), "SKU00009");
}

#[test]
fn test_load_malformed_line_reports_line_number() {
    let result = Store::from_lines(lines(&[
        "SA,SKU00001,Air Force,120.00,5",
        "SA,SKU00002,Air Max,150.00",
    ]));

    match result {
        Err(InventoryError::MalformedRecord { line, content }) => {
            assert_eq!(line, 3);
            assert_eq!(content, "SA,SKU00002,Air Max,150.00");
        }
        other => panic!("expected MalformedRecord, got {:?}", other),
    }
}

#[test]
fn test_load_invalid_cost() {
    let result = Store::from_lines(lines(&["SA,SKU00001,Air Force,abc,5"]));

    match result {
        Err(InventoryError::InvalidNumber { field, line, .. }) => {
            assert_eq!(field, "cost");
            assert_eq!(line, 2);
        }
        other => panic!("expected InvalidNumber, got {:?}", other),
    }
}

#[test]
fn test_load_blank_line_is_malformed() {
    let result = Store::from_lines(lines(&[
        "SA,SKU00001,Air Force,120.00,5",
        "",
        "SA,SKU00002,Air Max,150.00,2",
    ]));

    assert!(matches!(result, Err(InventoryError::MalformedRecord { line: 3, .. })));
}

#[test]
fn test_failed_load_keeps_prior_contents() {
    let mut store = sample_store();
    let before = store.clone();

    let result = store.load(lines(&[
        "JP,SKU00009,Blazer,60.00,1",
        "broken",
    ]));

    assert!(result.is_err());
    assert_eq!(store, before);
}

#[test]
fn test_load_twice_is_identical() {
    let input = lines(&[
        "SA,SKU00001,Air Force,120.00,5",
        "SA,SKU00002,Air Max,150.00,2",
    ]);

    let first = Store::from_lines(&input).unwrap();
    let second = Store::from_lines(&input).unwrap();

    assert_eq!(first, second);
}

// =============================================================================
// Lookup Tests
// =============================================================================

#[test]
fn test_by_code_found() {
    let store = sample_store();
    let record = store.by_code("SKU00003").unwrap();

    assert_eq!(record.product(), "Cortez");
}

#[test]
fn test_by_code_missing() {
    let store = sample_store();
    assert!(store.by_code("SKU99999").is_none());
}

#[test]
fn test_by_code_is_exact_match() {
    let store = sample_store();
    assert!(store.by_code("sku00001").is_none());
}

#[test]
fn test_by_code_last_match_wins() {
    let store = Store::from_lines(lines(&[
        "SA,SKU00001,Air Force,120.00,5",
        "SA,SKU00002,Air Max,150.00,2",
        "UK,SKU00001,Air Force Reissue,130.00,7",
    ]))
    .unwrap();

    let record = store.by_code("SKU00001").unwrap();
    assert_eq!(record.product(), "Air Force Reissue");
    assert_eq!(store.position_of("SKU00001"), Some(2));
}

// =============================================================================
// Min / Max Tests
// =============================================================================

#[test]
fn test_lowest() {
    let store = sample_store();
    let (pos, record) = store.lowest().unwrap();

    assert_eq!(pos, 1);
    assert_eq!(record.code(), "SKU00002");
}

#[test]
fn test_highest() {
    let store = sample_store();
    let (pos, record) = store.highest().unwrap();

    assert_eq!(pos, 2);
    assert_eq!(record.code(), "SKU00003");
}

#[test]
fn test_lowest_tie_returns_first() {
    let store = Store::from_lines(lines(&[
        "SA,SKU00001,Air Force,120.00,8",
        "SA,SKU00002,Air Max,150.00,3",
        "UK,SKU00003,Cortez,80.00,3",
    ]))
    .unwrap();

    let (pos, record) = store.lowest().unwrap();
    assert_eq!(pos, 1);
    assert_eq!(record.code(), "SKU00002");
}

#[test]
fn test_highest_tie_returns_first() {
    let store = Store::from_lines(lines(&[
        "SA,SKU00001,Air Force,120.00,1",
        "SA,SKU00002,Air Max,150.00,9",
        "UK,SKU00003,Cortez,80.00,9",
    ]))
    .unwrap();

    let (pos, record) = store.highest().unwrap();
    assert_eq!(pos, 1);
    assert_eq!(record.code(), "SKU00002");
}

#[test]
fn test_single_record_is_both_extremes() {
    let store = Store::from_lines(lines(&["SA,SKU00001,Air Force,120.00,4"])).unwrap();

    assert_eq!(store.lowest().unwrap().0, 0);
    assert_eq!(store.highest().unwrap().0, 0);
}

#[test]
fn test_negative_quantity_is_lowest() {
    let store = Store::from_lines(lines(&[
        "SA,SKU00001,Air Force,120.00,0",
        "SA,SKU00002,Air Max,150.00,-2",
    ]))
    .unwrap();

    assert_eq!(store.lowest().unwrap().0, 1);
}

#[test]
fn test_lowest_on_empty_store() {
    let store = Store::new();
    assert!(matches!(store.lowest(), Err(InventoryError::EmptyStore)));
}

#[test]
fn test_highest_on_empty_store() {
    let store = Store::new();
    assert!(matches!(store.highest(), Err(InventoryError::EmptyStore)));
}

// =============================================================================
// Scan Tests
// =============================================================================

#[test]
fn test_iter_is_restartable() {
    let store = sample_store();

    let first: Vec<&Record> = store.iter().collect();
    let second: Vec<&Record> = (&store).into_iter().collect();

    assert_eq!(first, second);
    assert_eq!(first.len(), 3);
}

#[test]
fn test_get_out_of_range() {
    let store = sample_store();
    assert!(store.get(3).is_none());
}
