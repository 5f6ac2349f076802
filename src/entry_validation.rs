use crate::entry::{EntryDraft, WorkoutEntry};
use std::collections::HashSet;
use std::fmt;

const MIN_NAME_CHARS: usize = 2;

#[derive(Debug, Clone)]
pub struct EntryValidationError {
    message: String,
}

impl EntryValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for EntryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for EntryValidationError {}

/// Form-level rules, checked before a draft is handed to the store.
pub fn validate_draft(draft: &EntryDraft) -> Result<(), EntryValidationError> {
    if draft.name.trim().chars().count() < MIN_NAME_CHARS {
        return Err(EntryValidationError::new(format!(
            "workout name must be at least {} characters",
            MIN_NAME_CHARS
        )));
    }

    if draft.duration.trim().is_empty() {
        return Err(EntryValidationError::new("duration is required"));
    }

    if draft.category.trim().is_empty() {
        return Err(EntryValidationError::new("category is required"));
    }

    Ok(())
}

pub fn validate_entry_collection<'a, I>(entries: I) -> Result<(), EntryValidationError>
where
    I: IntoIterator<Item = &'a WorkoutEntry>,
{
    let mut seen_ids = HashSet::new();
    for entry in entries {
        if entry.id.trim().is_empty() {
            return Err(EntryValidationError::new(format!(
                "entry '{}' has an empty id",
                entry.name
            )));
        }
        if !seen_ids.insert(entry.id.as_str()) {
            return Err(EntryValidationError::new(format!(
                "duplicate entry id {}",
                entry.id
            )));
        }
    }
    Ok(())
}
