use crate::day::Day;
use serde::{Deserialize, Serialize};

/// A single workout as it is stored, keyed by a caller-opaque string id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutEntry {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub duration: String,
    pub day: Day,
    pub category: String,
}

impl WorkoutEntry {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        duration: impl Into<String>,
        day: Day,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            duration: duration.into(),
            day,
            category: category.into(),
        }
    }
}

/// Entry fields as supplied by a caller, before an id has been assigned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryDraft {
    pub name: String,
    pub description: Option<String>,
    pub duration: String,
    pub day: Day,
    pub category: String,
}

impl EntryDraft {
    pub fn new(
        name: impl Into<String>,
        duration: impl Into<String>,
        day: Day,
        category: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: None,
            duration: duration.into(),
            day,
            category: category.into(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn into_entry(self, id: impl Into<String>) -> WorkoutEntry {
        WorkoutEntry {
            id: id.into(),
            name: self.name,
            description: self.description,
            duration: self.duration,
            day: self.day,
            category: self.category,
        }
    }
}
