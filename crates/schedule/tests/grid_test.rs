use chrono::{DateTime, Duration, TimeZone, Utc};
use chrono_tz::Tz;
use pretty_assertions::assert_eq;
use uuid::Uuid;

use meetsync_core::models::{Assignment, CadetRef, JudgeRef, Occupant, ScheduleKind, SchoolRef};
use meetsync_schedule::grid::print::school_itinerary;
use meetsync_schedule::grid::{build_grid, Cell, EntityFilter, GridRow};
use meetsync_schedule::Timeline;

fn at(hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 14, hour, minute, 0).unwrap()
}

fn school_with_id(id: Uuid, name: &str) -> Occupant {
    Occupant::School(SchoolRef {
        id,
        name: name.to_string(),
        color: Some("#b91c1c".to_string()),
    })
}

fn school(name: &str) -> Occupant {
    school_with_id(Uuid::new_v4(), name)
}

fn ten_minutes() -> Duration {
    Duration::minutes(10)
}

fn slot_rows(grid: &meetsync_schedule::ScheduleGrid) -> Vec<&meetsync_schedule::SlotRow> {
    grid.slot_rows().collect()
}

#[test]
fn test_event_grid_cell_states() {
    let assignments = vec![
        Assignment::occupied("drill", "Drill", at(9, 0), at(9, 30), school("Central High")),
        Assignment::unassigned("inspection", "Inspection", at(9, 0), at(9, 10)),
        Assignment::lunch_break("drill", "Drill", at(12, 0), at(12, 10)),
    ];
    let timeline = Timeline::build(&assignments, ten_minutes());
    let grid = build_grid(&timeline, ScheduleKind::Events, &EntityFilter::All, Tz::UTC);

    let rows = slot_rows(&grid);
    // Columns: drill, inspection (first-seen order).
    assert_eq!(
        rows[0].cells[0],
        Cell::Occupied {
            labels: vec!["Central High".to_string()],
            color: Some("#b91c1c".to_string()),
        }
    );
    assert_eq!(rows[0].cells[1], Cell::Unassigned);
    assert_eq!(rows[1].cells[1], Cell::Inactive);

    let lunch_row = rows.iter().find(|row| row.slot == at(12, 0)).unwrap();
    assert_eq!(lunch_row.cells[0], Cell::LunchBreak);
}

#[test]
fn test_judge_grid_has_no_colors() {
    let judge = Occupant::Judge(JudgeRef {
        id: Uuid::new_v4(),
        name: Some("Maj. Ortiz".to_string()),
    });
    let assignments = vec![Assignment::occupied(
        "judge-1",
        "Judge 1",
        at(9, 0),
        at(9, 10),
        judge,
    )];
    let timeline = Timeline::build(&assignments, ten_minutes());
    let grid = build_grid(&timeline, ScheduleKind::Judges, &EntityFilter::All, Tz::UTC);

    assert_eq!(
        slot_rows(&grid)[0].cells[0],
        Cell::Occupied {
            labels: vec!["Maj. Ortiz".to_string()],
            color: None,
        }
    );
}

#[test]
fn test_resource_grid_joins_simultaneous_cadets() {
    let cadet = |name: &str| {
        Occupant::Cadet(CadetRef {
            id: Uuid::new_v4(),
            name: Some(name.to_string()),
        })
    };
    let assignments = vec![
        Assignment::occupied("gym-a", "Gym A", at(9, 0), at(9, 10), cadet("Cadet Smith")),
        Assignment::occupied("gym-a", "Gym A", at(9, 0), at(9, 10), cadet("Cadet Jones")),
    ];
    let timeline = Timeline::build(&assignments, ten_minutes());
    let grid = build_grid(&timeline, ScheduleKind::Resources, &EntityFilter::All, Tz::UTC);

    assert_eq!(
        slot_rows(&grid)[0].cells[0],
        Cell::Occupied {
            labels: vec!["Cadet Smith".to_string(), "Cadet Jones".to_string()],
            color: None,
        }
    );
}

#[test]
fn test_missing_judge_profile_renders_unknown() {
    let assignments = vec![Assignment::occupied(
        "judge-1",
        "Judge 1",
        at(9, 0),
        at(9, 10),
        Occupant::Judge(JudgeRef {
            id: Uuid::new_v4(),
            name: None,
        }),
    )];
    let timeline = Timeline::build(&assignments, ten_minutes());
    let grid = build_grid(&timeline, ScheduleKind::Judges, &EntityFilter::All, Tz::UTC);

    assert_eq!(
        slot_rows(&grid)[0].cells[0],
        Cell::Occupied {
            labels: vec!["Unknown".to_string()],
            color: None,
        }
    );
}

#[test]
fn test_day_headers_inserted_on_date_change() {
    let assignments = vec![
        Assignment::unassigned("drill", "Drill", at(9, 0), at(9, 10)),
        Assignment::unassigned("drill", "Drill", at(9, 0) + Duration::days(1), at(9, 10) + Duration::days(1)),
    ];
    let timeline = Timeline::build(&assignments, ten_minutes());
    let grid = build_grid(&timeline, ScheduleKind::Events, &EntityFilter::All, Tz::UTC);

    let headers: Vec<&str> = grid
        .rows
        .iter()
        .filter_map(|row| match row {
            GridRow::DayHeader { label, .. } => Some(label.as_str()),
            GridRow::Slots(_) => None,
        })
        .collect();
    assert_eq!(
        headers,
        vec!["Saturday, March 14, 2026", "Sunday, March 15, 2026"]
    );
    // The first row is always a day header.
    assert!(matches!(grid.rows[0], GridRow::DayHeader { .. }));
}

#[test]
fn test_slot_labels_use_display_timezone() {
    let assignments = vec![Assignment::unassigned("drill", "Drill", at(14, 0), at(14, 10))];
    let timeline = Timeline::build(&assignments, ten_minutes());
    let grid = build_grid(
        &timeline,
        ScheduleKind::Events,
        &EntityFilter::All,
        chrono_tz::America::Chicago,
    );

    // 14:00 UTC is 09:00 in Chicago (CDT on this date).
    assert_eq!(slot_rows(&grid)[0].label, "09:00");
}

#[test]
fn test_filter_drops_rows_where_selection_is_inactive() {
    let assignments = vec![
        Assignment::unassigned("drill", "Drill", at(9, 0), at(9, 20)),
        Assignment::unassigned("inspection", "Inspection", at(9, 0), at(10, 0)),
    ];
    let timeline = Timeline::build(&assignments, ten_minutes());
    let filter = EntityFilter::Only("drill".to_string());
    let grid = build_grid(&timeline, ScheduleKind::Events, &filter, Tz::UTC);

    assert_eq!(grid.selected.as_deref(), Some("drill"));
    let rows = slot_rows(&grid);
    assert_eq!(rows.len(), 2);
    // Every surviving row has the selected entity active.
    assert!(rows
        .iter()
        .all(|row| timeline.is_active("drill", row.slot)));
}

#[test]
fn test_empty_timeline_renders_empty_grid() {
    let timeline = Timeline::build(&[], ten_minutes());
    let grid = build_grid(&timeline, ScheduleKind::Events, &EntityFilter::All, Tz::UTC);

    assert!(grid.is_empty());
    assert!(grid.rows.is_empty());
}

#[test]
fn test_school_itinerary_is_sorted_and_deduplicated() {
    let alpha = Uuid::new_v4();
    let assignments = vec![
        Assignment::occupied("inspection", "Inspection", at(11, 0), at(11, 30), school_with_id(alpha, "Alpha"))
            .at_location("Cafeteria"),
        Assignment::occupied("drill", "Drill", at(9, 0), at(9, 30), school_with_id(alpha, "Alpha"))
            .at_location("Gym A"),
        // Duplicate row, as produced by overlapping fetches upstream.
        Assignment::occupied("drill", "Drill", at(9, 0), at(9, 30), school_with_id(alpha, "Alpha"))
            .at_location("Gym A"),
        // Another school's assignment is excluded.
        Assignment::occupied("drill", "Drill", at(10, 0), at(10, 30), school("Bravo")),
    ];

    let rows = school_itinerary(&assignments, alpha, Tz::UTC);

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].event, "Drill");
    assert_eq!(rows[0].time, "09:00 - 09:30");
    assert_eq!(rows[0].location.as_deref(), Some("Gym A"));
    assert_eq!(rows[1].event, "Inspection");
    assert_eq!(rows[1].date_label, "Saturday, March 14, 2026");
}

#[test]
fn test_school_itinerary_empty_for_unknown_school() {
    let assignments = vec![Assignment::occupied(
        "drill",
        "Drill",
        at(9, 0),
        at(9, 30),
        school("Alpha"),
    )];

    assert!(school_itinerary(&assignments, Uuid::new_v4(), Tz::UTC).is_empty());
}
