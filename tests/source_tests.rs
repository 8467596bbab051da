use std::collections::HashSet;
use std::path::Path;
use wintertv::errors::AppError;
use wintertv::models::{EventTime, Sport};
use wintertv::source;

mod common;
use common::{TWO_EVENTS, write_events};

#[test]
fn test_bundled_schedule_loads() {
    let events = source::bundled().expect("bundled schedule is valid");

    assert!(!events.is_empty());
    let ids: HashSet<u32> = events.iter().map(|e| e.id).collect();
    assert_eq!(ids.len(), events.len());
    assert!(events.iter().any(|e| e.time == EventTime::Unannounced));
}

#[test]
fn test_parse_fields() {
    let events = source::parse_events(TWO_EVENTS).unwrap();

    assert_eq!(events.len(), 2);
    assert_eq!(events[0].category(), Sport::Curling);
    assert_eq!(events[0].date_str(), "2025-11-22");
    assert_eq!(events[0].time.to_string(), "14:00");
    assert!(matches!(events[0].time, EventTime::At(_)));
    assert_eq!(events[1].time, EventTime::Unannounced);
}

#[test]
fn test_malformed_date_rejects_load() {
    let json = r#"[
      {"id": 1, "sport": "curling", "title": "a", "date": "2025-11-22", "time": "TBA"},
      {"id": 7, "sport": "curling", "title": "b", "date": "22/11/2025", "time": "TBA"}
    ]"#;

    match source::parse_events(json) {
        Err(AppError::InvalidDate { id, value }) => {
            assert_eq!(id, 7);
            assert_eq!(value, "22/11/2025");
        }
        other => panic!("expected InvalidDate, got {other:?}"),
    }
}

#[test]
fn test_impossible_calendar_date_rejected() {
    let json = r#"[{"id": 3, "sport": "alpine", "title": "x", "date": "2026-02-30", "time": "10:00"}]"#;
    assert!(matches!(
        source::parse_events(json),
        Err(AppError::InvalidDate { id: 3, .. })
    ));
}

#[test]
fn test_malformed_time_rejected() {
    let json = r#"[{"id": 4, "sport": "alpine", "title": "x", "date": "2026-02-01", "time": "soon"}]"#;
    assert!(matches!(
        source::parse_events(json),
        Err(AppError::InvalidTime { id: 4, .. })
    ));
}

#[test]
fn test_duplicate_id_rejected() {
    let json = r#"[
      {"id": 5, "sport": "curling", "title": "a", "date": "2026-01-01", "time": "TBA"},
      {"id": 5, "sport": "alpine", "title": "b", "date": "2026-01-02", "time": "TBA"}
    ]"#;
    assert!(matches!(source::parse_events(json), Err(AppError::DuplicateId(5))));
}

#[test]
fn test_unknown_sport_is_not_an_error() {
    let json = r#"[{"id": 1, "sport": "bandy", "title": "x", "date": "2026-01-01", "time": "TBA"}]"#;
    let events = source::parse_events(json).unwrap();

    assert_eq!(events[0].sport, "bandy");
    assert_eq!(events[0].category(), Sport::Other);
    assert_eq!(events[0].competition, "");
}

#[test]
fn test_load_from_file_and_missing_file() {
    let path = write_events("source_two_events", TWO_EVENTS);
    let events = source::load(Some(Path::new(&path))).unwrap();
    assert_eq!(events.len(), 2);

    let missing = source::load(Some(Path::new("/definitely/not/here.json")));
    assert!(matches!(missing, Err(AppError::Io(_))));
}

#[test]
fn test_unpadded_time_rejected() {
    let json = r#"[{"id": 8, "sport": "alpine", "title": "x", "date": "2026-02-01", "time": "9:5"}]"#;
    match source::parse_events(json) {
        Err(AppError::InvalidTime { id, value }) => {
            assert_eq!(id, 8);
            assert_eq!(value, "9:5");
        }
        other => panic!("expected InvalidTime, got {other:?}"),
    }
}

#[test]
fn test_unpadded_date_rejected() {
    let json = r#"[{"id": 9, "sport": "alpine", "title": "x", "date": "2026-1-5", "time": "10:00"}]"#;
    assert!(matches!(
        source::parse_events(json),
        Err(AppError::InvalidDate { id: 9, .. })
    ));
}
