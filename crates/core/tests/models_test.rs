use chrono::{Duration, TimeZone, Utc};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{from_str, to_string, Value};
use uuid::Uuid;

use meetsync_core::models::{
    Assignment, CadetRef, JudgeRef, Occupant, ScheduleKind, SchoolRef, ScoreEntry,
};

fn school(name: &str) -> Occupant {
    Occupant::School(SchoolRef {
        id: Uuid::new_v4(),
        name: name.to_string(),
        color: Some("#1d4ed8".to_string()),
    })
}

#[test]
fn test_assignment_serialization() {
    let start = Utc.with_ymd_and_hms(2026, 3, 14, 9, 0, 0).unwrap();
    let assignment = Assignment::occupied(
        "drill",
        "Armed Drill",
        start,
        start + Duration::minutes(30),
        school("Central High"),
    )
    .at_location("Gym A");

    let json = to_string(&assignment).expect("Failed to serialize assignment");
    let deserialized: Assignment = from_str(&json).expect("Failed to deserialize assignment");

    assert_eq!(deserialized, assignment);
}

#[test]
fn test_occupant_serialization_is_tagged() {
    let json = to_string(&school("Central High")).expect("Failed to serialize occupant");
    let value: Value = from_str(&json).unwrap();

    assert_eq!(value["kind"], "school");
    assert_eq!(value["name"], "Central High");
}

#[test]
fn test_schedule_kind_serialization() {
    assert_eq!(to_string(&ScheduleKind::Events).unwrap(), "\"events\"");
    assert_eq!(to_string(&ScheduleKind::Resources).unwrap(), "\"resources\"");
}

#[test]
fn test_display_label_uses_school_name() {
    assert_eq!(school("Central High").display_label(), "Central High");
}

#[rstest]
#[case::judge(Occupant::Judge(JudgeRef { id: Uuid::new_v4(), name: None }))]
#[case::cadet(Occupant::Cadet(CadetRef { id: Uuid::new_v4(), name: None }))]
fn test_display_label_falls_back_to_unknown(#[case] occupant: Occupant) {
    assert_eq!(occupant.display_label(), "Unknown");
}

#[test]
fn test_color_only_for_schools() {
    assert_eq!(school("Central High").color(), Some("#1d4ed8"));

    let judge = Occupant::Judge(JudgeRef {
        id: Uuid::new_v4(),
        name: Some("Maj. Ortiz".to_string()),
    });
    assert_eq!(judge.color(), None);
}

#[test]
fn test_assignment_contains_is_end_exclusive() {
    let start = Utc.with_ymd_and_hms(2026, 3, 14, 9, 0, 0).unwrap();
    let end = start + Duration::minutes(30);
    let assignment = Assignment::unassigned("drill", "Armed Drill", start, end);

    assert!(assignment.contains(start));
    assert!(assignment.contains(end - Duration::minutes(10)));
    assert!(!assignment.contains(end));
    assert!(!assignment.contains(start - Duration::minutes(1)));
}

#[test]
fn test_lunch_break_has_no_occupant() {
    let start = Utc.with_ymd_and_hms(2026, 3, 14, 12, 0, 0).unwrap();
    let lunch = Assignment::lunch_break("drill", "Armed Drill", start, start + Duration::hours(1));

    assert!(lunch.is_lunch_break);
    assert_eq!(lunch.occupant, None);
}

#[test]
fn test_score_entry_builder() {
    let entry = ScoreEntry::new("Inspection", "Alpha")
        .with_score(1, 85.0)
        .with_score(2, 90.0);

    assert_eq!(entry.event_type, "Inspection");
    assert_eq!(entry.scores.len(), 2);
    assert_eq!(entry.scores[1].judge_number, 2);
    assert_eq!(entry.scores[1].score, 90.0);
}
