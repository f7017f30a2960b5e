use chrono::{DateTime, Utc};
use std::collections::HashMap;

use meetsync_core::models::{Assignment, Occupant};

/// One assignment's active range, kept in fetch order via `seq`.
#[derive(Debug, Clone)]
struct Span {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    occupant: Option<Occupant>,
    is_lunch_break: bool,
    seq: usize,
}

impl Span {
    fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant < self.end
    }
}

/// Per-entity occupancy lookup over a fixed assignment snapshot.
///
/// Spans for each entity are sorted by start time, so a lookup binary-searches
/// for the candidates starting at or before the queried instant and then
/// filters by the end-exclusive containment test. Assignment sets are small
/// (dozens of rows per competition), so the trailing scan over candidates is
/// negligible.
///
/// Overlapping spans for one entity are an upstream data-integrity violation;
/// single-occupant lookups resolve them deterministically in favor of the
/// assignment that appeared last in the fetched collection.
#[derive(Debug, Clone, Default)]
pub struct OccupancyIndex {
    spans: HashMap<String, Vec<Span>>,
}

impl OccupancyIndex {
    pub fn build(assignments: &[Assignment]) -> Self {
        let mut spans: HashMap<String, Vec<Span>> = HashMap::new();

        for (seq, assignment) in assignments.iter().enumerate() {
            spans
                .entry(assignment.entity_id.clone())
                .or_default()
                .push(Span {
                    start: assignment.start_time,
                    end: assignment.end_time,
                    occupant: assignment.occupant.clone(),
                    is_lunch_break: assignment.is_lunch_break,
                    seq,
                });
        }

        for entity_spans in spans.values_mut() {
            entity_spans.sort_by_key(|span| (span.start, span.seq));
        }

        Self { spans }
    }

    /// All spans for `entity_id` active at `instant`, in fetch order.
    fn active_spans(&self, entity_id: &str, instant: DateTime<Utc>) -> Vec<&Span> {
        let Some(entity_spans) = self.spans.get(entity_id) else {
            return Vec::new();
        };

        // Spans starting after the instant cannot contain it.
        let candidates = entity_spans.partition_point(|span| span.start <= instant);
        let mut active: Vec<&Span> = entity_spans[..candidates]
            .iter()
            .filter(|span| span.contains(instant))
            .collect();
        active.sort_by_key(|span| span.seq);

        active
    }

    /// The winning span at `instant`: last-fetched among any that overlap.
    fn winning_span(&self, entity_id: &str, instant: DateTime<Utc>) -> Option<&Span> {
        self.active_spans(entity_id, instant).into_iter().last()
    }

    /// True if any assignment range for the entity contains the instant.
    /// An instant exactly at a range's end is not active.
    pub fn is_active(&self, entity_id: &str, instant: DateTime<Utc>) -> bool {
        self.winning_span(entity_id, instant).is_some()
    }

    /// True if the active assignment at this instant is a lunch-break marker.
    pub fn is_lunch_break(&self, entity_id: &str, instant: DateTime<Utc>) -> bool {
        self.winning_span(entity_id, instant)
            .is_some_and(|span| span.is_lunch_break)
    }

    /// The single occupant at this instant, or `None` when the entity is
    /// inactive or the active range is unassigned.
    pub fn occupant_at(&self, entity_id: &str, instant: DateTime<Utc>) -> Option<&Occupant> {
        self.winning_span(entity_id, instant)
            .and_then(|span| span.occupant.as_ref())
    }

    /// Every occupant active at this instant, in fetch order. The resource
    /// schedule allows a location to host several cadets at once.
    pub fn occupants_at(&self, entity_id: &str, instant: DateTime<Utc>) -> Vec<&Occupant> {
        self.active_spans(entity_id, instant)
            .into_iter()
            .filter_map(|span| span.occupant.as_ref())
            .collect()
    }
}
