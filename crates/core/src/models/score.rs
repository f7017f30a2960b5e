use serde::{Deserialize, Serialize};

/// One judge's score on a score sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JudgeScore {
    pub judge_number: u32,
    pub score: f64,
}

/// A scored entry from a competition score sheet: one school's performance
/// in one event, broken down per judge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub event_type: String,
    pub school: String,
    pub scores: Vec<JudgeScore>,
}

impl ScoreEntry {
    pub fn new(event_type: impl Into<String>, school: impl Into<String>) -> Self {
        Self {
            event_type: event_type.into(),
            school: school.into(),
            scores: Vec::new(),
        }
    }

    pub fn with_score(mut self, judge_number: u32, score: f64) -> Self {
        self.scores.push(JudgeScore {
            judge_number,
            score,
        });
        self
    }
}
