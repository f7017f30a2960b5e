use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::occupant::Occupant;

/// Selects which schedule variant a grid is built for. The resource
/// schedule allows multiple simultaneous occupants per cell; the event
/// schedule colors cells by the assigned school.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScheduleKind {
    Events,
    Judges,
    Resources,
}

/// A time-bounded occupancy entry linking a column entity (event, judge,
/// or location) to an occupant over a start/end range. The range is
/// inclusive of `start_time` and exclusive of `end_time`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    /// Event id, judge id, or location string, depending on the variant.
    pub entity_id: String,
    pub entity_label: String,
    /// Where the assignment takes place, when the entity itself is not
    /// a location. Shown on the print itinerary.
    pub location: Option<String>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub occupant: Option<Occupant>,
    pub is_lunch_break: bool,
}

impl Assignment {
    /// An assignment occupied by a school, judge, or cadet.
    pub fn occupied(
        entity_id: impl Into<String>,
        entity_label: impl Into<String>,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
        occupant: Occupant,
    ) -> Self {
        Self {
            entity_id: entity_id.into(),
            entity_label: entity_label.into(),
            location: None,
            start_time,
            end_time,
            occupant: Some(occupant),
            is_lunch_break: false,
        }
    }

    /// An active range with no occupant assigned yet.
    pub fn unassigned(
        entity_id: impl Into<String>,
        entity_label: impl Into<String>,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
    ) -> Self {
        Self {
            entity_id: entity_id.into(),
            entity_label: entity_label.into(),
            location: None,
            start_time,
            end_time,
            occupant: None,
            is_lunch_break: false,
        }
    }

    /// A designated lunch break. Lunch breaks never carry an occupant.
    pub fn lunch_break(
        entity_id: impl Into<String>,
        entity_label: impl Into<String>,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
    ) -> Self {
        Self {
            entity_id: entity_id.into(),
            entity_label: entity_label.into(),
            location: None,
            start_time,
            end_time,
            occupant: None,
            is_lunch_break: true,
        }
    }

    pub fn at_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// End-exclusive range test: true for instants in `[start_time, end_time)`.
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start_time <= instant && instant < self.end_time
    }
}
