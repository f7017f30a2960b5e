//! The persistence-service boundary.
//!
//! The portal's backend is an external collaborator; this crate only ever sees
//! fully materialized collections of assignment rows and score entries. The
//! [`AssignmentSource`] trait is that boundary. Fetch failures are opaque
//! collaborator errors (`eyre::Report`); retry policy belongs to the caller's
//! data-fetching layer, not to this crate.

use async_trait::async_trait;
use eyre::Result;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use meetsync_core::models::{Assignment, ScoreEntry};

/// Read access to one competition's assignment and score data.
#[async_trait]
pub trait AssignmentSource: Send + Sync {
    /// Event registrations: columns are events, occupants are schools.
    async fn event_assignments(&self, competition_id: Uuid) -> Result<Vec<Assignment>>;

    /// Judge assignments: columns are judges, occupants are judge profiles.
    async fn judge_assignments(&self, competition_id: Uuid) -> Result<Vec<Assignment>>;

    /// Resource assignments: columns are locations, occupants are cadets.
    /// A location may host several cadets at once.
    async fn resource_assignments(&self, competition_id: Uuid) -> Result<Vec<Assignment>>;

    /// Scored entries from the competition's score sheets.
    async fn score_entries(&self, competition_id: Uuid) -> Result<Vec<ScoreEntry>>;
}

/// A complete materialized snapshot of one competition's data, as handed
/// over by the backend.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompetitionSnapshot {
    #[serde(default)]
    pub event_assignments: Vec<Assignment>,
    #[serde(default)]
    pub judge_assignments: Vec<Assignment>,
    #[serde(default)]
    pub resource_assignments: Vec<Assignment>,
    #[serde(default)]
    pub score_entries: Vec<ScoreEntry>,
}

/// An in-memory source serving a fixed snapshot. Used by the print binary
/// and by tests.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    snapshot: CompetitionSnapshot,
}

impl StaticSource {
    pub fn new(snapshot: CompetitionSnapshot) -> Self {
        Self { snapshot }
    }
}

#[async_trait]
impl AssignmentSource for StaticSource {
    async fn event_assignments(&self, _competition_id: Uuid) -> Result<Vec<Assignment>> {
        Ok(self.snapshot.event_assignments.clone())
    }

    async fn judge_assignments(&self, _competition_id: Uuid) -> Result<Vec<Assignment>> {
        Ok(self.snapshot.judge_assignments.clone())
    }

    async fn resource_assignments(&self, _competition_id: Uuid) -> Result<Vec<Assignment>> {
        Ok(self.snapshot.resource_assignments.clone())
    }

    async fn score_entries(&self, _competition_id: Uuid) -> Result<Vec<ScoreEntry>> {
        Ok(self.snapshot.score_entries.clone())
    }
}
