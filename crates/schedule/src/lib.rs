//! # MeetSync Schedule
//!
//! Schedule derivation and results aggregation for the MeetSync competition
//! portal. This crate turns already-fetched assignment records into read-only
//! timelines, renders them as slot-by-entity grids with day separators, flattens
//! a single school's assignments into a print itinerary, and aggregates score
//! sheets into ranked per-event results tables.
//!
//! ## Architecture
//!
//! - **Config**: slot granularity and display timezone, loaded from the
//!   environment and passed explicitly to the derivation functions
//! - **Source**: the persistence-service boundary, an async trait returning
//!   materialized assignment snapshots
//! - **Timeline**: slot-sequence and occupancy-index construction
//! - **Grid**: view structures for the on-screen grid and the print itinerary
//! - **Results**: score-sheet aggregation into ranked standings
//! - **View**: async glue that fetches from a source and builds the above
//!
//! All derivation is synchronous and operates on a complete snapshot; the only
//! suspension point is the fetch boundary. Every load builds an independent,
//! disposable timeline.

pub mod config;
pub mod grid;
pub mod mock;
pub mod results;
pub mod source;
pub mod timeline;
pub mod view;

pub use config::ScheduleConfig;
pub use grid::{Cell, EntityFilter, GridRow, ScheduleGrid, SlotRow};
pub use results::{EventResults, SchoolStanding};
pub use source::{AssignmentSource, CompetitionSnapshot, StaticSource};
pub use timeline::Timeline;
