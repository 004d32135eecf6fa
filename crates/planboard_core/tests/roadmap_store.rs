use planboard_core::model::roadmap::RoadmapField;
use planboard_core::{RoadmapEntry, RoadmapStore};

#[test]
fn append_keeps_insertion_order() {
    let mut store = RoadmapStore::new();
    store
        .append(RoadmapEntry::new("Learn Rust", "Read the book", "2026-01-15"))
        .unwrap();
    store
        .append(RoadmapEntry::new("Ship project", "First release", "2026-03-01"))
        .unwrap();

    let titles: Vec<_> = store.list().iter().map(|e| e.title.as_str()).collect();
    assert_eq!(titles, vec!["Learn Rust", "Ship project"]);
}

#[test]
fn append_with_missing_fields_leaves_store_unchanged() {
    let mut store = RoadmapStore::new();

    let err = store
        .append(RoadmapEntry::new("", "desc", "2026-01-15"))
        .unwrap_err();
    assert_eq!(err.fields, vec![RoadmapField::Title]);

    let err = store
        .append(RoadmapEntry::new("title", "  ", ""))
        .unwrap_err();
    assert_eq!(err.fields, vec![RoadmapField::Desc, RoadmapField::Date]);

    assert!(store.is_empty());
}

#[test]
fn validation_error_lists_every_missing_field_by_name() {
    let err = RoadmapEntry::new("", "", "").validate().unwrap_err();
    let message = err.to_string();
    assert!(message.contains("title"));
    assert!(message.contains("desc"));
    assert!(message.contains("date"));
}

#[test]
fn date_must_be_a_plausible_iso_day() {
    assert!(RoadmapEntry::new("t", "d", "2026-01-15").validate().is_ok());
    assert!(RoadmapEntry::new("t", "d", "2026-12-31").validate().is_ok());

    for bad in ["2026-13-01", "2026-00-10", "2026-01-32", "15-01-2026", "2026/01/15", "soon"] {
        let err = RoadmapEntry::new("t", "d", bad).validate().unwrap_err();
        assert_eq!(err.fields, vec![RoadmapField::Date], "date `{bad}` should fail");
    }
}

#[test]
fn remove_at_shifts_later_entries_down() {
    let mut store = RoadmapStore::new();
    for title in ["a", "b", "c"] {
        store
            .append(RoadmapEntry::new(title, "desc", "2026-01-15"))
            .unwrap();
    }

    let removed = store.remove_at(1).unwrap();
    assert_eq!(removed.title, "b");

    let titles: Vec<_> = store.list().iter().map(|e| e.title.as_str()).collect();
    assert_eq!(titles, vec!["a", "c"]);
    assert_eq!(store.len(), 2);
}

#[test]
fn remove_at_out_of_range_is_rejected_without_mutation() {
    let mut store = RoadmapStore::new();
    store
        .append(RoadmapEntry::new("only", "entry", "2026-01-15"))
        .unwrap();

    assert!(store.remove_at(1).is_none());
    assert!(store.remove_at(usize::MAX).is_none());
    assert_eq!(store.len(), 1);
}
