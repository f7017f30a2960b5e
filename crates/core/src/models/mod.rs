pub mod assignment;
pub mod occupant;
pub mod score;

pub use assignment::{Assignment, ScheduleKind};
pub use occupant::{CadetRef, JudgeRef, Occupant, SchoolRef};
pub use score::{JudgeScore, ScoreEntry};
