//! # Timeline Construction
//!
//! A [`Timeline`] is the derived, read-only structure behind every schedule
//! grid. It is built fresh from a fetched assignment snapshot on every load
//! and holds:
//!
//! 1. the sorted, de-duplicated slot sequence covering the union of all
//!    assignment ranges at fixed step granularity, and
//! 2. an occupancy index answering, per `(entity, slot)` pair, whether the
//!    entity is active, whether the slot is a lunch break, and who occupies it.
//!
//! Range containment is end-exclusive throughout: a slot exactly at an
//! assignment's end time is not active, so back-to-back assignments never
//! double-book the shared boundary instant.

pub mod occupancy;
pub mod slots;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use meetsync_core::models::{Assignment, Occupant};

use occupancy::OccupancyIndex;

/// A column of the schedule grid: one event, judge, or location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityColumn {
    pub id: String,
    pub label: String,
}

/// Read-only occupancy queries over a slot sequence and entity set, derived
/// from one assignment snapshot. Disposable: rebuilt on every load, never
/// mutated afterwards.
#[derive(Debug, Clone, Default)]
pub struct Timeline {
    slots: Vec<DateTime<Utc>>,
    entities: Vec<EntityColumn>,
    index: OccupancyIndex,
}

impl Timeline {
    /// Derives a timeline from a materialized assignment snapshot at the
    /// given slot granularity. Entities keep the order in which they first
    /// appear in the snapshot.
    pub fn build(assignments: &[Assignment], step: Duration) -> Self {
        let slots = slots::build_slot_sequence(assignments, step);

        let mut entities: Vec<EntityColumn> = Vec::new();
        for assignment in assignments {
            if !entities.iter().any(|e| e.id == assignment.entity_id) {
                entities.push(EntityColumn {
                    id: assignment.entity_id.clone(),
                    label: assignment.entity_label.clone(),
                });
            }
        }

        let index = OccupancyIndex::build(assignments);

        debug!(
            slots = slots.len(),
            entities = entities.len(),
            assignments = assignments.len(),
            "built timeline"
        );

        Self {
            slots,
            entities,
            index,
        }
    }

    /// The full sorted slot sequence.
    pub fn slots(&self) -> &[DateTime<Utc>] {
        &self.slots
    }

    /// Grid columns, in first-seen snapshot order.
    pub fn entities(&self) -> &[EntityColumn] {
        &self.entities
    }

    /// True when the snapshot had no assignments at all.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// True if the slot falls within any assignment range for the entity
    /// (end-exclusive).
    pub fn is_active(&self, entity_id: &str, slot: DateTime<Utc>) -> bool {
        self.index.is_active(entity_id, slot)
    }

    /// True if the active assignment at the slot is a lunch-break marker.
    pub fn is_lunch_break(&self, entity_id: &str, slot: DateTime<Utc>) -> bool {
        self.index.is_lunch_break(entity_id, slot)
    }

    /// The occupant active at the slot, or `None` when inactive or
    /// unassigned. On overlapping input the last-fetched assignment wins.
    pub fn assigned_occupant(&self, entity_id: &str, slot: DateTime<Utc>) -> Option<&Occupant> {
        self.index.occupant_at(entity_id, slot)
    }

    /// All occupants active at the slot, for the resource schedule where a
    /// location hosts several cadets at once.
    pub fn assigned_occupants(&self, entity_id: &str, slot: DateTime<Utc>) -> Vec<&Occupant> {
        self.index.occupants_at(entity_id, slot)
    }
}
