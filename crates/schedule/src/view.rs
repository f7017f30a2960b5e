//! # View Loaders
//!
//! Async glue between the persistence boundary and the derivation core:
//! fetch one competition's rows from an [`AssignmentSource`], then build the
//! requested grid or results tables from the materialized snapshot.
//!
//! Fetch failures surface as [`MeetError::Load`]; there is no retry here —
//! superseding or retrying a fetch belongs to the caller's data-fetching
//! layer. A competition with no data yields an empty grid (a valid
//! empty-state), never an error.

use tracing::info;
use uuid::Uuid;

use meetsync_core::errors::MeetResult;
use meetsync_core::models::ScheduleKind;

use crate::config::ScheduleConfig;
use crate::grid::print::{school_itinerary, ItineraryRow};
use crate::grid::{build_grid, EntityFilter, ScheduleGrid};
use crate::results::{aggregate_results, EventResults};
use crate::source::AssignmentSource;
use crate::timeline::Timeline;

/// Loads the event schedule: columns are events, occupants are schools.
pub async fn load_event_grid(
    source: &dyn AssignmentSource,
    competition_id: Uuid,
    config: &ScheduleConfig,
    filter: &EntityFilter,
) -> MeetResult<ScheduleGrid> {
    let assignments = source.event_assignments(competition_id).await?;
    info!(%competition_id, rows = assignments.len(), "loaded event assignments");

    let timeline = Timeline::build(&assignments, config.slot_step());
    Ok(build_grid(&timeline, ScheduleKind::Events, filter, config.timezone))
}

/// Loads the judge schedule: columns are judges.
pub async fn load_judge_grid(
    source: &dyn AssignmentSource,
    competition_id: Uuid,
    config: &ScheduleConfig,
    filter: &EntityFilter,
) -> MeetResult<ScheduleGrid> {
    let assignments = source.judge_assignments(competition_id).await?;
    info!(%competition_id, rows = assignments.len(), "loaded judge assignments");

    let timeline = Timeline::build(&assignments, config.slot_step());
    Ok(build_grid(&timeline, ScheduleKind::Judges, filter, config.timezone))
}

/// Loads the resource schedule: columns are locations, cells may hold
/// several cadets at once.
pub async fn load_resource_grid(
    source: &dyn AssignmentSource,
    competition_id: Uuid,
    config: &ScheduleConfig,
    filter: &EntityFilter,
) -> MeetResult<ScheduleGrid> {
    let assignments = source.resource_assignments(competition_id).await?;
    info!(%competition_id, rows = assignments.len(), "loaded resource assignments");

    let timeline = Timeline::build(&assignments, config.slot_step());
    Ok(build_grid(&timeline, ScheduleKind::Resources, filter, config.timezone))
}

/// Loads the print itinerary for one school from the event schedule.
pub async fn load_school_itinerary(
    source: &dyn AssignmentSource,
    competition_id: Uuid,
    school_id: Uuid,
    config: &ScheduleConfig,
) -> MeetResult<Vec<ItineraryRow>> {
    let assignments = source.event_assignments(competition_id).await?;
    Ok(school_itinerary(&assignments, school_id, config.timezone))
}

/// Loads and aggregates the competition's score sheets into ranked
/// per-event results tables.
pub async fn load_results(
    source: &dyn AssignmentSource,
    competition_id: Uuid,
) -> MeetResult<Vec<EventResults>> {
    let entries = source.score_entries(competition_id).await?;
    info!(%competition_id, entries = entries.len(), "loaded score entries");

    Ok(aggregate_results(&entries))
}
