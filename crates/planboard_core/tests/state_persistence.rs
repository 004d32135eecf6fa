use planboard_core::db::open_db_in_memory;
use planboard_core::{
    Day, RoadmapEntry, SqliteStateRepository, StateRepository, TimetableGrid, ROADMAP_KEY,
    TIMETABLE_KEY,
};
use serde_json::Value;

fn repo() -> SqliteStateRepository {
    SqliteStateRepository::try_new(open_db_in_memory().unwrap()).unwrap()
}

fn stored_text(repo: &SqliteStateRepository, key: &str) -> String {
    repo.connection()
        .query_row(
            "SELECT value FROM planner_state WHERE key = ?1;",
            [key],
            |row| row.get(0),
        )
        .unwrap()
}

fn store_text(repo: &SqliteStateRepository, key: &str, value: &str) {
    repo.connection()
        .execute(
            "INSERT INTO planner_state (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value;",
            [key, value],
        )
        .unwrap();
}

#[test]
fn roadmap_round_trip_is_deep_equal() {
    let repo = repo();
    let entries = vec![
        RoadmapEntry::new("Learn Rust", "Read the book", "2026-01-15"),
        RoadmapEntry::new("Ship project", "First release", "2026-03-01"),
    ];

    repo.save_roadmap(&entries).unwrap();
    assert_eq!(repo.load_roadmap().unwrap(), entries);
}

#[test]
fn timetable_round_trip_is_deep_equal() {
    let repo = repo();
    let mut grid = TimetableGrid::new();
    grid.set_cell(Day::Monday, "09:00", "Math").unwrap();
    grid.set_cell(Day::Sunday, "12:00", "Rest").unwrap();

    repo.save_timetable(&grid).unwrap();
    assert_eq!(repo.load_timetable().unwrap(), grid);
}

#[test]
fn absent_records_load_as_empty_defaults() {
    let repo = repo();

    assert!(repo.load_roadmap().unwrap().is_empty());

    let grid = repo.load_timetable().unwrap();
    assert_eq!(grid, TimetableGrid::new());
    for day in Day::ALL {
        assert_eq!(grid.read_cell(day, "09:00"), "");
    }
}

#[test]
fn corrupt_stored_text_falls_back_to_empty_defaults() {
    let repo = repo();
    store_text(&repo, ROADMAP_KEY, "not json at all");
    store_text(&repo, TIMETABLE_KEY, "{\"Monday\": 42}");

    assert!(repo.load_roadmap().unwrap().is_empty());
    assert_eq!(repo.load_timetable().unwrap(), TimetableGrid::new());
}

#[test]
fn stored_roadmap_shape_matches_the_wire_format() {
    let repo = repo();
    repo.save_roadmap(&[RoadmapEntry::new("Learn Rust", "Read the book", "2026-01-15")])
        .unwrap();

    let value: Value = serde_json::from_str(&stored_text(&repo, ROADMAP_KEY)).unwrap();
    assert_eq!(
        value,
        serde_json::json!([
            {"title": "Learn Rust", "desc": "Read the book", "date": "2026-01-15"}
        ])
    );
}

#[test]
fn stored_timetable_shape_matches_the_wire_format() {
    let repo = repo();
    let mut grid = TimetableGrid::new();
    grid.set_cell(Day::Monday, "09:00", "Math").unwrap();

    repo.save_timetable(&grid).unwrap();

    let value: Value = serde_json::from_str(&stored_text(&repo, TIMETABLE_KEY)).unwrap();
    let object = value.as_object().unwrap();
    assert_eq!(object.len(), 7);
    for day in [
        "Monday",
        "Tuesday",
        "Wednesday",
        "Thursday",
        "Friday",
        "Saturday",
        "Sunday",
    ] {
        assert!(object[day].is_object(), "day `{day}` missing");
    }
    assert_eq!(object["Monday"]["09:00"], "Math");
    assert!(object["Tuesday"].as_object().unwrap().is_empty());
}

#[test]
fn save_overwrites_the_previous_record_unconditionally() {
    let repo = repo();
    repo.save_roadmap(&[RoadmapEntry::new("old", "entry", "2026-01-15")])
        .unwrap();
    repo.save_roadmap(&[RoadmapEntry::new("new", "entry", "2026-02-15")])
        .unwrap();

    let loaded = repo.load_roadmap().unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].title, "new");
}

#[test]
fn timetable_loaded_from_partial_record_regains_all_days() {
    let repo = repo();
    store_text(&repo, TIMETABLE_KEY, "{\"Monday\": {\"09:00\": \"Math\"}}");

    let grid = repo.load_timetable().unwrap();
    assert_eq!(grid.read_cell(Day::Monday, "09:00"), "Math");
    // Missing day keys are restored on load.
    assert_eq!(grid.read_cell(Day::Sunday, "09:00"), "");
    repo.save_timetable(&grid).unwrap();
    let value: Value = serde_json::from_str(&stored_text(&repo, TIMETABLE_KEY)).unwrap();
    assert_eq!(value.as_object().unwrap().len(), 7);
}

#[test]
fn repository_rejects_uninitialized_connection() {
    let conn = rusqlite::Connection::open_in_memory().unwrap();
    let err = SqliteStateRepository::try_new(conn).unwrap_err();
    assert!(err.to_string().contains("schema version"));
}
