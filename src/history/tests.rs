//! Tests for token history module

use super::*;
use pretty_assertions::assert_eq;
use test_case::test_case;

// ============================================================================
// Insert / Lookup Tests
// ============================================================================

#[test]
fn test_history_default_bound() {
    let history = TokenHistory::new();
    assert!(history.is_empty());
    assert_eq!(history.max_entries(), DEFAULT_MAX_HISTORY_ENTRIES);
    assert_eq!(history.max_entries(), 20);
}

#[test]
fn test_insert_and_get() {
    let mut history = TokenHistory::new();
    assert!(history.insert(2, "A"));
    assert!(history.insert(3, "B"));

    assert_eq!(history.get(2), Some("A"));
    assert_eq!(history.get(3), Some("B"));
    assert_eq!(history.get(4), None);
    assert_eq!(history.len(), 2);
}

#[test_case(0 ; "page zero")]
#[test_case(1 ; "origin page")]
fn test_insert_rejects_pages_without_token(page: u32) {
    let mut history = TokenHistory::new();
    assert!(!history.insert(page, "token"));
    assert!(history.is_empty());
    assert!(!history.contains(page));
}

#[test]
fn test_insert_rejects_empty_token() {
    let mut history = TokenHistory::new();
    assert!(!history.insert(2, ""));
    assert!(history.is_empty());
}

#[test]
fn test_insert_overwrites_same_page() {
    let mut history = TokenHistory::new();
    history.insert(4, "old");
    history.insert(4, "new");
    assert_eq!(history.get(4), Some("new"));
    assert_eq!(history.len(), 1);
}

// ============================================================================
// Eviction Tests
// ============================================================================

#[test]
fn test_sequential_walk_keeps_highest_pages() {
    let bound = 5;
    let mut history = TokenHistory::with_max_entries(bound);
    for page in 2..=(bound as u32 + 5) {
        history.insert(page, format!("t{page}"));
    }

    assert_eq!(history.len(), bound);
    let pages: Vec<u32> = history.pages().collect();
    assert_eq!(pages, vec![6, 7, 8, 9, 10]);
    for evicted in 2..=5 {
        assert_eq!(history.get(evicted), None);
    }
}

#[test]
fn test_eviction_is_by_key_not_recency() {
    let mut history = TokenHistory::with_max_entries(2);
    history.insert(9, "t9");
    history.insert(10, "t10");
    // Page 3 was visited last but has the smallest key, so it goes first
    history.insert(3, "t3");

    let pages: Vec<u32> = history.pages().collect();
    assert_eq!(pages, vec![9, 10]);
}

#[test]
fn test_unbounded_never_evicts() {
    let mut history = TokenHistory::unbounded();
    for page in 2..200 {
        history.insert(page, format!("t{page}"));
    }
    assert_eq!(history.len(), 198);
    assert_eq!(history.get(2), Some("t2"));
}

#[test]
fn test_shrinking_bound_evicts_immediately() {
    let mut history = TokenHistory::unbounded();
    for page in 2..=8 {
        history.insert(page, format!("t{page}"));
    }
    history.set_max_entries(3);
    assert_eq!(history.pages().collect::<Vec<_>>(), vec![6, 7, 8]);
}

#[test]
fn test_clear_keeps_bound() {
    let mut history = TokenHistory::with_max_entries(4);
    history.insert(2, "A");
    history.clear();
    assert!(history.is_empty());
    assert_eq!(history.max_entries(), 4);
}

// ============================================================================
// JSON Codec Tests
// ============================================================================

#[test]
fn test_to_json_shape() {
    let mut history = TokenHistory::new();
    history.insert(3, "B");
    history.insert(2, "A");
    history.insert(10, "J");
    assert_eq!(history.to_json(), r#"{"2":"A","3":"B","10":"J"}"#);
}

#[test]
fn test_empty_history_json() {
    assert_eq!(TokenHistory::new().to_json(), "{}");
}

#[test]
fn test_json_round_trip() {
    let mut history = TokenHistory::new();
    history.insert(2, "eyJvZmZzZXQiOjI1fQ==");
    history.insert(3, "tok/with+chars");

    let restored = TokenHistory::from_json(&history.to_json(), 20).unwrap();
    assert_eq!(restored, history);
}

#[test]
fn test_round_trip_applies_bound_on_decode() {
    let mut history = TokenHistory::unbounded();
    for page in 2..=10 {
        history.insert(page, format!("t{page}"));
    }

    let restored = TokenHistory::from_json(&history.to_json(), 3).unwrap();
    assert_eq!(restored.pages().collect::<Vec<_>>(), vec![8, 9, 10]);

    // Bounding before encoding gives the same mapping
    history.set_max_entries(3);
    assert_eq!(restored, history);
}

#[test_case("{not valid}" ; "invalid json")]
#[test_case("[1,2,3]" ; "array payload")]
#[test_case(r#"{"two":"A"}"# ; "non numeric key")]
#[test_case(r#"{"-2":"A"}"# ; "negative key")]
#[test_case(r#"{"2":5}"# ; "non string token")]
fn test_malformed_json_decodes_empty(payload: &str) {
    assert!(TokenHistory::from_json(payload, 20).is_err());

    let history = TokenHistory::from_json_lossy(payload, 20);
    assert!(history.is_empty());
    assert_eq!(history.max_entries(), 20);
}

#[test_case("" ; "empty")]
#[test_case("   " ; "blank")]
#[test_case("null" ; "json null")]
#[test_case("{}" ; "empty object")]
fn test_absent_history_decodes_empty(payload: &str) {
    let history = TokenHistory::from_json(payload, 20).unwrap();
    assert!(history.is_empty());
}

#[test]
fn test_decode_drops_unrecordable_entries() {
    let history =
        TokenHistory::from_json(r#"{"0":"Z","1":"O","2":"","3":null,"4":"D"}"#, 20).unwrap();
    assert_eq!(history.iter().collect::<Vec<_>>(), vec![(4, "D")]);
}
