use crate::Schedule;
use crate::entry_validation;
use serde_json::Error as SerdeJsonError;
use std::fmt;
use std::io;

/// Key the weekly schedule snapshot is stored under, shared by every
/// storage backend.
pub const SCHEDULE_KEY: &str = "workoutSchedule";

#[derive(Debug)]
pub enum PersistenceError {
    Serialization(SerdeJsonError),
    Io(io::Error),
    #[cfg(feature = "sqlite")]
    Sqlite(rusqlite::Error),
    Csv(csv::Error),
    InvalidData(String),
}

impl fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PersistenceError::Serialization(err) => write!(f, "serialization error: {err}"),
            PersistenceError::Io(err) => write!(f, "io error: {err}"),
            #[cfg(feature = "sqlite")]
            PersistenceError::Sqlite(err) => write!(f, "sqlite error: {err}"),
            PersistenceError::Csv(err) => write!(f, "csv error: {err}"),
            PersistenceError::InvalidData(msg) => write!(f, "invalid data: {msg}"),
        }
    }
}

impl std::error::Error for PersistenceError {}

impl From<SerdeJsonError> for PersistenceError {
    fn from(value: SerdeJsonError) -> Self {
        Self::Serialization(value)
    }
}

impl From<io::Error> for PersistenceError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

#[cfg(feature = "sqlite")]
impl From<rusqlite::Error> for PersistenceError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

impl From<csv::Error> for PersistenceError {
    fn from(value: csv::Error) -> Self {
        Self::Csv(value)
    }
}

pub type PersistenceResult<T> = Result<T, PersistenceError>;

/// String key-value storage backing the schedule across sessions. A key
/// that was never written reads back as None.
pub trait StorageSubstrate {
    fn get(&self, key: &str) -> PersistenceResult<Option<String>>;
    fn put(&self, key: &str, value: &str) -> PersistenceResult<()>;
}

/// Structural checks applied on both sides of the snapshot boundary:
/// ids must be non-empty and unique across the whole week, and every
/// entry must carry the day of the bucket holding it.
pub fn validate_schedule(schedule: &Schedule) -> PersistenceResult<()> {
    entry_validation::validate_entry_collection(schedule.entries())
        .map_err(|err| PersistenceError::InvalidData(err.to_string()))?;

    for (day, entries) in schedule.buckets() {
        for entry in entries {
            if entry.day != day {
                return Err(PersistenceError::InvalidData(format!(
                    "entry {} sits in the {} bucket but carries day {}",
                    entry.id, day, entry.day
                )));
            }
        }
    }
    Ok(())
}

/// Encodes the schedule as the compact JSON snapshot stored under
/// [`SCHEDULE_KEY`].
pub fn encode_schedule(schedule: &Schedule) -> PersistenceResult<String> {
    validate_schedule(schedule)?;
    Ok(serde_json::to_string(schedule)?)
}

pub fn decode_schedule(raw: &str) -> PersistenceResult<Schedule> {
    let schedule: Schedule = serde_json::from_str(raw)?;
    validate_schedule(&schedule)?;
    Ok(schedule)
}

#[cfg(feature = "sqlite")]
pub mod sqlite;
pub mod file;
pub mod memory;

pub use file::{
    FileStorage, load_schedule_from_csv, load_schedule_from_json, save_schedule_to_csv,
    save_schedule_to_json,
};
pub use memory::MemoryStorage;
