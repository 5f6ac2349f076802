pub mod day;
pub mod entry;
pub mod entry_validation;
pub mod filter;
pub mod persistence;
pub mod schedule;
pub mod store;

pub use day::Day;
pub use entry::{EntryDraft, WorkoutEntry};
pub use entry_validation::{EntryValidationError, validate_draft};
pub use filter::{CategoryFilter, DayFilter, FilterQuery, filter_schedule};
#[cfg(feature = "sqlite")]
pub use persistence::sqlite::SqliteStorage;
pub use persistence::{
    FileStorage, MemoryStorage, PersistenceError, PersistenceResult, SCHEDULE_KEY,
    StorageSubstrate, decode_schedule, encode_schedule, load_schedule_from_csv,
    load_schedule_from_json, save_schedule_to_csv, save_schedule_to_json, validate_schedule,
};
pub use schedule::Schedule;
pub use store::ScheduleStore;
