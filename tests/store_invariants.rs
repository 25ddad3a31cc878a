//! Store Invariant Tests
//!
//! Tests for the landmark store invariants:
//! - Ids are unique and computed as max(existing ids) + 1
//! - Id generation fails explicitly on a non-numeric stored id
//! - Insertion order survives removal
//! - Replacement is wholesale, with the id preserved

use landmarkd::store::{
    InMemoryLandmarkStore, Landmark, LandmarkDraft, LandmarkStore, StoreError,
};

// =============================================================================
// Helper Functions
// =============================================================================

fn draft(name: &str) -> LandmarkDraft {
    LandmarkDraft {
        name: name.to_string(),
        description: format!("{} description", name),
        image_url: None,
    }
}

fn landmark(id: &str) -> Landmark {
    Landmark {
        id: id.to_string(),
        name: format!("Landmark {}", id),
        description: format!("Description {}", id),
        image_url: None,
    }
}

// =============================================================================
// Id Generation
// =============================================================================

#[test]
fn test_created_ids_are_unique() {
    let store = InMemoryLandmarkStore::new();

    let mut ids = vec![];
    for i in 0..10 {
        let created = store.create(draft(&format!("L{}", i))).unwrap();
        assert!(!ids.contains(&created.id));
        ids.push(created.id);
    }
}

#[test]
fn test_next_id_is_max_plus_one_not_count() {
    let store = InMemoryLandmarkStore::with_records(vec![landmark("1"), landmark("7")]);

    let created = store.create(draft("X")).unwrap();
    assert_eq!(created.id, "8");
}

#[test]
fn test_next_id_after_removing_the_max_reuses_it() {
    let store = InMemoryLandmarkStore::new();
    store.remove("5").unwrap();

    let created = store.create(draft("X")).unwrap();
    assert_eq!(created.id, "5");
}

#[test]
fn test_empty_store_starts_at_one() {
    let store = InMemoryLandmarkStore::with_records(vec![]);

    let created = store.create(draft("First")).unwrap();
    assert_eq!(created.id, "1");
}

#[test]
fn test_non_numeric_id_fails_id_generation() {
    let store = InMemoryLandmarkStore::with_records(vec![landmark("1"), landmark("abc")]);

    let result = store.create(draft("X"));
    assert_eq!(result, Err(StoreError::NonNumericId("abc".to_string())));

    // The failed create must not have appended anything
    assert_eq!(store.list().unwrap().len(), 2);
}

// =============================================================================
// Ordering
// =============================================================================

#[test]
fn test_list_preserves_insertion_order() {
    let store = InMemoryLandmarkStore::with_records(vec![]);
    store.create(draft("A")).unwrap();
    store.create(draft("B")).unwrap();
    store.create(draft("C")).unwrap();

    let names: Vec<String> = store.list().unwrap().into_iter().map(|l| l.name).collect();
    assert_eq!(names, vec!["A", "B", "C"]);
}

#[test]
fn test_remove_preserves_order_of_the_rest() {
    let store = InMemoryLandmarkStore::new();
    store.remove("3").unwrap();

    let ids: Vec<String> = store.list().unwrap().into_iter().map(|l| l.id).collect();
    assert_eq!(ids, vec!["1", "2", "4", "5"]);
}

// =============================================================================
// Replacement
// =============================================================================

#[test]
fn test_replace_is_wholesale() {
    let store = InMemoryLandmarkStore::new();

    // Seed record 1 has an image URL; replacing without one clears it
    let updated = store.replace("1", draft("Replaced")).unwrap();
    assert_eq!(updated.id, "1");
    assert_eq!(updated.name, "Replaced");
    assert_eq!(updated.image_url, None);

    assert_eq!(store.get("1").unwrap(), updated);
}

#[test]
fn test_replace_unknown_id_is_not_found() {
    let store = InMemoryLandmarkStore::new();
    assert_eq!(store.replace("42", draft("X")), Err(StoreError::NotFound));
}

#[test]
fn test_replace_does_not_move_the_record() {
    let store = InMemoryLandmarkStore::new();
    store.replace("2", draft("Moved?")).unwrap();

    let ids: Vec<String> = store.list().unwrap().into_iter().map(|l| l.id).collect();
    assert_eq!(ids, vec!["1", "2", "3", "4", "5"]);
}

// =============================================================================
// Round Trips
// =============================================================================

#[test]
fn test_create_then_get_round_trip() {
    let store = InMemoryLandmarkStore::new();
    let input = LandmarkDraft {
        name: "X".to_string(),
        description: "Y".to_string(),
        image_url: Some("https://example.com/x".to_string()),
    };

    let created = store.create(input.clone()).unwrap();
    let fetched = store.get(&created.id).unwrap();

    assert_eq!(fetched, created);
    assert_eq!(fetched.name, input.name);
    assert_eq!(fetched.description, input.description);
    assert_eq!(fetched.image_url, input.image_url);
}

#[test]
fn test_removed_record_matches_what_was_stored() {
    let store = InMemoryLandmarkStore::new();
    let before = store.get("4").unwrap();

    let removed = store.remove("4").unwrap();
    assert_eq!(removed, before);
    assert_eq!(store.get("4"), Err(StoreError::NotFound));
}
