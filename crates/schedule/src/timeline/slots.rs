use chrono::{DateTime, Duration, Utc};

use meetsync_core::models::Assignment;

/// Builds the discrete slot sequence for a set of assignments.
///
/// Slots start at the earliest `start_time` across all assignments and advance
/// by `step` while strictly before the latest `end_time`, so a slot is emitted
/// for the start of every active range but never for the instant the last
/// assignment ends. The sequence is strictly ascending with no duplicates and
/// may span several calendar days.
///
/// An empty assignment collection produces an empty sequence.
pub fn build_slot_sequence(assignments: &[Assignment], step: Duration) -> Vec<DateTime<Utc>> {
    // A non-positive step would never terminate.
    if step <= Duration::zero() {
        return Vec::new();
    }

    let Some(first) = assignments.iter().map(|a| a.start_time).min() else {
        return Vec::new();
    };
    let Some(last) = assignments.iter().map(|a| a.end_time).max() else {
        return Vec::new();
    };

    let mut slots = Vec::new();
    let mut slot = first;
    while slot < last {
        slots.push(slot);
        slot += step;
    }

    slots
}
