//! Print-oriented linear itinerary for a single school.
//!
//! The print view flattens the event grid into chronological
//! (date, time, event, location) rows for one school, collapsing duplicate
//! entries. It works directly from the assignment snapshot rather than the
//! slot grid, so each assignment contributes one row regardless of how many
//! slots it spans.

use chrono::NaiveDate;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use meetsync_core::models::{Assignment, Occupant};

/// One line of the printed itinerary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItineraryRow {
    pub date: NaiveDate,
    /// e.g. "Saturday, March 14, 2026"
    pub date_label: String,
    /// e.g. "09:00 - 09:30", in the display timezone.
    pub time: String,
    pub event: String,
    pub location: Option<String>,
}

/// Builds the printed itinerary for one school from the event-schedule
/// assignments: every assignment occupied by that school, sorted
/// chronologically, with duplicates collapsed.
pub fn school_itinerary(assignments: &[Assignment], school_id: Uuid, tz: Tz) -> Vec<ItineraryRow> {
    let mut school_assignments: Vec<&Assignment> = assignments
        .iter()
        .filter(|assignment| match &assignment.occupant {
            Some(Occupant::School(school)) => school.id == school_id,
            _ => false,
        })
        .collect();
    school_assignments.sort_by(|a, b| {
        (a.start_time, &a.entity_label).cmp(&(b.start_time, &b.entity_label))
    });

    let mut rows: Vec<ItineraryRow> = school_assignments
        .into_iter()
        .map(|assignment| {
            let start = assignment.start_time.with_timezone(&tz);
            let end = assignment.end_time.with_timezone(&tz);
            ItineraryRow {
                date: start.date_naive(),
                date_label: start.format("%A, %B %-d, %Y").to_string(),
                time: format!("{} - {}", start.format("%H:%M"), end.format("%H:%M")),
                event: assignment.entity_label.clone(),
                location: assignment.location.clone(),
            }
        })
        .collect();
    rows.dedup();

    rows
}
