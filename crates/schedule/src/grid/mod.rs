//! # Grid Rendering
//!
//! Turns a [`Timeline`] into the view structure consumed by the on-screen
//! schedule grid: slot rows grouped under day-header rows, one cell per
//! entity column. Cells distinguish inactive slots, lunch breaks, unassigned
//! active ranges, and occupied ranges (with the assigned school's color on
//! the event schedule).
//!
//! The display timezone only affects slot labels and day-header placement;
//! occupancy itself is bucketed on absolute instants.

pub mod print;

use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use meetsync_core::models::ScheduleKind;

use crate::timeline::{EntityColumn, Timeline};

/// One cell of the schedule grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Cell {
    /// The entity has no assignment covering this slot.
    Inactive,
    /// The active assignment is a designated lunch break.
    LunchBreak,
    /// An assignment covers this slot but nobody is assigned yet.
    Unassigned,
    /// Occupied. Multiple labels only occur on the resource schedule;
    /// `color` is set only for school occupants on the event schedule.
    Occupied {
        labels: Vec<String>,
        color: Option<String>,
    },
}

/// A row of cells for one time slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotRow {
    pub slot: DateTime<Utc>,
    /// Slot start formatted in the display timezone, e.g. "09:10".
    pub label: String,
    /// One cell per grid column, in column order.
    pub cells: Vec<Cell>,
}

/// A grid row: either a day-separator header or a slot row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "row", rename_all = "snake_case")]
pub enum GridRow {
    DayHeader { date: NaiveDate, label: String },
    Slots(SlotRow),
}

/// Narrows the grid to a single entity, or shows everything.
///
/// Filtering drops slot rows where the selected entity is inactive, so a
/// filtered grid never contains a row without an active cell for the
/// selection. The selection is also recorded on the grid so the view layer
/// can highlight that column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityFilter {
    All,
    Only(String),
}

impl EntityFilter {
    fn keeps(&self, timeline: &Timeline, slot: DateTime<Utc>) -> bool {
        match self {
            EntityFilter::All => true,
            EntityFilter::Only(entity_id) => timeline.is_active(entity_id, slot),
        }
    }
}

/// The rendered schedule grid for one variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleGrid {
    pub kind: ScheduleKind,
    pub columns: Vec<EntityColumn>,
    /// Entity selected by the filter, for cell highlighting.
    pub selected: Option<String>,
    pub rows: Vec<GridRow>,
}

impl ScheduleGrid {
    /// True when there is nothing to show; callers render an empty-state
    /// message instead of a grid.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The slot rows, skipping day headers.
    pub fn slot_rows(&self) -> impl Iterator<Item = &SlotRow> {
        self.rows.iter().filter_map(|row| match row {
            GridRow::Slots(slot_row) => Some(slot_row),
            GridRow::DayHeader { .. } => None,
        })
    }
}

/// Renders a timeline as a grid of time slots by entities.
///
/// Day headers are inserted whenever the slot's local date (in the display
/// timezone) changes, including before the first slot row, and only for days
/// that still have visible rows after filtering.
pub fn build_grid(
    timeline: &Timeline,
    kind: ScheduleKind,
    filter: &EntityFilter,
    tz: Tz,
) -> ScheduleGrid {
    let mut rows = Vec::new();
    let mut current_day: Option<NaiveDate> = None;

    for &slot in timeline.slots() {
        if !filter.keeps(timeline, slot) {
            continue;
        }

        let local = slot.with_timezone(&tz);
        let date = local.date_naive();
        if current_day != Some(date) {
            rows.push(GridRow::DayHeader {
                date,
                label: local.format("%A, %B %-d, %Y").to_string(),
            });
            current_day = Some(date);
        }

        let cells = timeline
            .entities()
            .iter()
            .map(|entity| build_cell(timeline, kind, &entity.id, slot))
            .collect();

        rows.push(GridRow::Slots(SlotRow {
            slot,
            label: local.format("%H:%M").to_string(),
            cells,
        }));
    }

    ScheduleGrid {
        kind,
        columns: timeline.entities().to_vec(),
        selected: match filter {
            EntityFilter::Only(entity_id) => Some(entity_id.clone()),
            EntityFilter::All => None,
        },
        rows,
    }
}

fn build_cell(timeline: &Timeline, kind: ScheduleKind, entity_id: &str, slot: DateTime<Utc>) -> Cell {
    if !timeline.is_active(entity_id, slot) {
        return Cell::Inactive;
    }
    if timeline.is_lunch_break(entity_id, slot) {
        return Cell::LunchBreak;
    }

    let occupants = match kind {
        // A location can host several cadets in the same slot.
        ScheduleKind::Resources => timeline.assigned_occupants(entity_id, slot),
        ScheduleKind::Events | ScheduleKind::Judges => timeline
            .assigned_occupant(entity_id, slot)
            .into_iter()
            .collect(),
    };

    if occupants.is_empty() {
        return Cell::Unassigned;
    }

    let color = match kind {
        ScheduleKind::Events => occupants[0].color().map(str::to_owned),
        _ => None,
    };

    Cell::Occupied {
        labels: occupants
            .iter()
            .map(|occupant| occupant.display_label().to_owned())
            .collect(),
        color,
    }
}
