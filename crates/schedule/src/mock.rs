//! Mock source for testing view loaders without a backend.

use async_trait::async_trait;
use eyre::Result;
use mockall::mock;
use uuid::Uuid;

use meetsync_core::models::{Assignment, ScoreEntry};

use crate::source::AssignmentSource;

mock! {
    pub Source {}

    #[async_trait]
    impl AssignmentSource for Source {
        async fn event_assignments(&self, competition_id: Uuid) -> Result<Vec<Assignment>>;
        async fn judge_assignments(&self, competition_id: Uuid) -> Result<Vec<Assignment>>;
        async fn resource_assignments(&self, competition_id: Uuid) -> Result<Vec<Assignment>>;
        async fn score_entries(&self, competition_id: Uuid) -> Result<Vec<ScoreEntry>>;
    }
}
