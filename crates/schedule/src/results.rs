//! # Results Aggregation
//!
//! Groups scored score-sheet entries by event type, then by school, summing
//! each school's scores across judges (and across multiple sheets for the
//! same school) into ranked standings per event.
//!
//! Judge columns are the ascending union of judge numbers seen in the event;
//! a school that a judge never scored gets `None` in that column (rendered as
//! a dash). Standings are ordered by total descending; exact ties break by
//! school name ascending so the ranking is deterministic.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

use meetsync_core::models::ScoreEntry;

/// One school's ranked line in an event's results table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchoolStanding {
    /// 1-based position after sorting.
    pub rank: usize,
    pub school: String,
    pub total: f64,
    /// One cell per judge column; `None` when that judge did not score
    /// this school.
    pub by_judge: Vec<Option<f64>>,
}

/// The results table for one event type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventResults {
    pub event_type: String,
    /// Column headers: every judge number seen in this event, ascending.
    pub judge_numbers: Vec<u32>,
    pub standings: Vec<SchoolStanding>,
}

struct SchoolAcc {
    school: String,
    total: f64,
    by_judge: BTreeMap<u32, f64>,
}

struct EventAcc {
    event_type: String,
    judges: BTreeSet<u32>,
    schools: Vec<SchoolAcc>,
}

/// Aggregates a flat list of score entries into per-event results tables.
/// Events appear in first-seen order; an empty entry list produces no tables.
pub fn aggregate_results(entries: &[ScoreEntry]) -> Vec<EventResults> {
    let mut events: Vec<EventAcc> = Vec::new();

    for entry in entries {
        let event_idx = match events
            .iter()
            .position(|event| event.event_type == entry.event_type)
        {
            Some(idx) => idx,
            None => {
                events.push(EventAcc {
                    event_type: entry.event_type.clone(),
                    judges: BTreeSet::new(),
                    schools: Vec::new(),
                });
                events.len() - 1
            }
        };
        let event = &mut events[event_idx];

        let school_idx = match event
            .schools
            .iter()
            .position(|school| school.school == entry.school)
        {
            Some(idx) => idx,
            None => {
                event.schools.push(SchoolAcc {
                    school: entry.school.clone(),
                    total: 0.0,
                    by_judge: BTreeMap::new(),
                });
                event.schools.len() - 1
            }
        };

        for judge_score in &entry.scores {
            event.judges.insert(judge_score.judge_number);
            let school = &mut event.schools[school_idx];
            school.total += judge_score.score;
            *school.by_judge.entry(judge_score.judge_number).or_insert(0.0) += judge_score.score;
        }
    }

    debug!(events = events.len(), entries = entries.len(), "aggregated results");

    events
        .into_iter()
        .map(|event| {
            let judge_numbers: Vec<u32> = event.judges.iter().copied().collect();

            let mut standings: Vec<SchoolStanding> = event
                .schools
                .into_iter()
                .map(|school| SchoolStanding {
                    rank: 0,
                    by_judge: judge_numbers
                        .iter()
                        .map(|judge| school.by_judge.get(judge).copied())
                        .collect(),
                    school: school.school,
                    total: school.total,
                })
                .collect();

            standings.sort_by(|a, b| {
                b.total
                    .total_cmp(&a.total)
                    .then_with(|| a.school.cmp(&b.school))
            });
            for (position, standing) in standings.iter_mut().enumerate() {
                standing.rank = position + 1;
            }

            EventResults {
                event_type: event.event_type,
                judge_numbers,
                standings,
            }
        })
        .collect()
}
