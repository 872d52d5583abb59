//! Record Store Tests
//!
//! Validates id assignment and the CRUD operations of `RecordStore`.
//!
//! ## Test Scopes
//! - **Id assignment**: `max + 1` allocation, including reuse of a deleted maximum.
//! - **Mutations**: remove/update outcomes and their effect on the collection.
//! - **Rendering**: user-facing outcome messages and record display.

#[cfg(test)]
mod tests {
    use crate::records::store::RecordStore;
    use crate::records::types::{Record, RecordId, Removal, Update};

    fn store_with(n: u32) -> RecordStore {
        let mut store = RecordStore::new();
        for i in 1..=n {
            store.add(format!("Author {}", i), format!("Content {}", i));
        }
        store
    }

    // ============================================================
    // ID ASSIGNMENT
    // ============================================================

    #[test]
    fn test_empty_store_starts_at_one() {
        let store = RecordStore::new();
        assert!(store.is_empty());
        assert_eq!(store.next_id(), RecordId(1));
    }

    #[test]
    fn test_sequential_adds_increment_by_one() {
        let mut store = RecordStore::new();

        let ids: Vec<RecordId> = (0..5).map(|i| store.add("Ann", format!("line {}", i))).collect();

        assert_eq!(ids, vec![RecordId(1), RecordId(2), RecordId(3), RecordId(4), RecordId(5)]);
        assert_eq!(store.len(), 5);
    }

    #[test]
    fn test_deleting_max_id_frees_it_for_next_add() {
        let mut store = store_with(3);

        assert_eq!(store.remove(RecordId(3)), Removal::Removed(RecordId(3)));
        let id = store.add("Bob", "again");

        assert_eq!(id, RecordId(3), "max(1, 2) + 1 reuses the deleted id");
    }

    #[test]
    fn test_deleting_middle_id_does_not_fill_gap() {
        let mut store = store_with(3);

        store.remove(RecordId(2));
        let id = store.add("Bob", "again");

        assert_eq!(id, RecordId(4));
        assert!(store.get(RecordId(2)).is_none());
    }

    #[test]
    fn test_next_id_follows_max_not_last_inserted() {
        let mut store = RecordStore::new();
        store.extend(vec![
            Record::new(RecordId(7), "A", "x"),
            Record::new(RecordId(2), "B", "y"),
        ]);

        assert_eq!(store.next_id(), RecordId(8));
    }

    #[test]
    fn test_next_saturates_at_max() {
        assert_eq!(RecordId(41).next(), RecordId(42));
        assert_eq!(RecordId(i32::MAX).next(), RecordId(i32::MAX));
    }

    #[test]
    fn test_non_positive_ids_are_never_found() {
        let mut store = store_with(2);

        assert_eq!(store.remove(RecordId(0)), Removal::NotFound(RecordId(0)));
        assert_eq!(store.update(RecordId(-3), "X", "Y"), Update::NotFound(RecordId(-3)));
        assert_eq!(Removal::NotFound(RecordId(-3)).to_string(), "No record found with ID: -3.");
        assert_eq!(store.len(), 2);
    }

    // ============================================================
    // REMOVE
    // ============================================================

    #[test]
    fn test_remove_existing_record() {
        let mut store = store_with(2);

        let outcome = store.remove(RecordId(1));

        assert_eq!(outcome, Removal::Removed(RecordId(1)));
        assert_eq!(store.len(), 1);
        assert!(store.list_all().iter().all(|r| r.id() != RecordId(1)));
    }

    #[test]
    fn test_remove_unknown_id_leaves_store_unchanged() {
        let mut store = store_with(2);
        let before = store.list_all().to_vec();

        let outcome = store.remove(RecordId(42));

        assert_eq!(outcome, Removal::NotFound(RecordId(42)));
        assert_eq!(store.list_all(), before.as_slice());
    }

    #[test]
    fn test_remove_deletes_all_duplicates() {
        let mut store = RecordStore::new();
        store.extend(vec![
            Record::new(RecordId(1), "A", "x"),
            Record::new(RecordId(1), "B", "y"),
            Record::new(RecordId(2), "C", "z"),
        ]);

        store.remove(RecordId(1));

        assert_eq!(store.len(), 1);
        assert_eq!(store.list_all()[0].id(), RecordId(2));
    }

    // ============================================================
    // UPDATE
    // ============================================================

    #[test]
    fn test_update_changes_author_and_content_only() {
        let mut store = store_with(3);

        let outcome = store.update(RecordId(2), "New Author", "New content");

        assert_eq!(outcome, Update::Updated(RecordId(2)));
        let record = store.get(RecordId(2)).unwrap();
        assert_eq!(record.id(), RecordId(2));
        assert_eq!(record.author, "New Author");
        assert_eq!(record.content, "New content");

        // Position in insertion order is preserved
        assert_eq!(store.list_all()[1].id(), RecordId(2));
    }

    #[test]
    fn test_update_unknown_id_leaves_store_unchanged() {
        let mut store = store_with(2);
        let before = store.list_all().to_vec();

        let outcome = store.update(RecordId(9), "X", "Y");

        assert_eq!(outcome, Update::NotFound(RecordId(9)));
        assert_eq!(store.list_all(), before.as_slice());
    }

    #[test]
    fn test_update_touches_first_match_only() {
        let mut store = RecordStore::new();
        store.extend(vec![
            Record::new(RecordId(1), "A", "x"),
            Record::new(RecordId(1), "B", "y"),
        ]);

        store.update(RecordId(1), "C", "z");

        assert_eq!(store.list_all()[0].author, "C");
        assert_eq!(store.list_all()[1].author, "B");
    }

    // ============================================================
    // LISTING & RENDERING
    // ============================================================

    #[test]
    fn test_list_all_keeps_insertion_order() {
        let mut store = RecordStore::new();
        store.extend(vec![
            Record::new(RecordId(5), "A", "x"),
            Record::new(RecordId(3), "B", "y"),
        ]);
        store.add("C", "z");

        let ids: Vec<i32> = store.list_all().iter().map(|r| r.id().0).collect();
        assert_eq!(ids, vec![5, 3, 6]);
    }

    #[test]
    fn test_outcome_messages() {
        assert_eq!(Removal::Removed(RecordId(1)).to_string(), "The record was removed.");
        assert_eq!(
            Removal::NotFound(RecordId(4)).to_string(),
            "No record found with ID: 4."
        );
        assert_eq!(
            Update::Updated(RecordId(2)).to_string(),
            "Record with ID 2 has been updated."
        );
        assert_eq!(Update::NotFound(RecordId(3)).to_string(), "No record found with ID 3.");
    }

    #[test]
    fn test_record_display_format() {
        let record = Record::new(RecordId(12), "Jane Doe", "Some sentence");

        assert_eq!(
            record.to_string(),
            "ID: 12\nAuthor: Jane Doe\nData: Some sentence\n"
        );
    }

    #[test]
    fn test_record_serializes_flat_id() {
        let record = Record::new(RecordId(3), "Jane", "Text");

        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(
            json,
            serde_json::json!({"id": 3, "author": "Jane", "content": "Text"})
        );
    }
}
