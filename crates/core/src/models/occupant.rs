use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A school registered for a competition event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchoolRef {
    pub id: Uuid,
    pub name: String,
    /// Display color configured by the school, as a CSS color string.
    pub color: Option<String>,
}

/// A judge profile. The name is `None` when the referenced profile
/// no longer exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JudgeRef {
    pub id: Uuid,
    pub name: Option<String>,
}

/// A cadet assigned to a resource/location duty. The name is `None`
/// when the referenced profile no longer exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CadetRef {
    pub id: Uuid,
    pub name: Option<String>,
}

/// The party filling an assignment: a school registration on the event
/// schedule, a judge profile on the judge schedule, or a cadet on the
/// resource schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Occupant {
    School(SchoolRef),
    Judge(JudgeRef),
    Cadet(CadetRef),
}

impl Occupant {
    /// Label shown in a grid cell. Occupants whose referenced profile was
    /// deleted upstream render as "Unknown" rather than failing the grid.
    pub fn display_label(&self) -> &str {
        match self {
            Occupant::School(school) => &school.name,
            Occupant::Judge(judge) => judge.name.as_deref().unwrap_or("Unknown"),
            Occupant::Cadet(cadet) => cadet.name.as_deref().unwrap_or("Unknown"),
        }
    }

    /// Configured display color, present only for school occupants.
    pub fn color(&self) -> Option<&str> {
        match self {
            Occupant::School(school) => school.color.as_deref(),
            _ => None,
        }
    }
}
