use super::{PersistenceError, PersistenceResult, StorageSubstrate};
use crate::{Day, Schedule, WorkoutEntry};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

/// Stores each key as `<key>.json` under a root directory.
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    pub fn new<P: AsRef<Path>>(root: P) -> PersistenceResult<Self> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

impl StorageSubstrate for FileStorage {
    fn get(&self, key: &str) -> PersistenceResult<Option<String>> {
        match fs::read_to_string(self.key_path(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn put(&self, key: &str, value: &str) -> PersistenceResult<()> {
        fs::write(self.key_path(key), value)?;
        Ok(())
    }
}

pub fn save_schedule_to_json<P: AsRef<Path>>(
    schedule: &Schedule,
    path: P,
) -> PersistenceResult<()> {
    super::validate_schedule(schedule)?;
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, schedule)?;
    Ok(())
}

pub fn load_schedule_from_json<P: AsRef<Path>>(path: P) -> PersistenceResult<Schedule> {
    let file = File::open(path)?;
    let schedule: Schedule = serde_json::from_reader(file)?;
    super::validate_schedule(&schedule)?;
    Ok(schedule)
}

#[derive(Serialize, Deserialize)]
struct EntryCsvRecord {
    id: String,
    name: String,
    description: String,
    duration: String,
    day: String,
    category: String,
}

impl From<&WorkoutEntry> for EntryCsvRecord {
    fn from(entry: &WorkoutEntry) -> Self {
        Self {
            id: entry.id.clone(),
            name: entry.name.clone(),
            description: entry.description.clone().unwrap_or_default(),
            duration: entry.duration.clone(),
            day: entry.day.as_str().to_string(),
            category: entry.category.clone(),
        }
    }
}

impl EntryCsvRecord {
    fn into_entry(self) -> PersistenceResult<WorkoutEntry> {
        let day = Day::from_str(&self.day)
            .ok_or_else(|| PersistenceError::InvalidData(format!("invalid day '{}'", self.day)))?;
        Ok(WorkoutEntry {
            id: self.id,
            name: self.name,
            description: parse_string_option(self.description),
            duration: self.duration,
            day,
            category: self.category,
        })
    }
}

pub fn save_schedule_to_csv<P: AsRef<Path>>(
    schedule: &Schedule,
    path: P,
) -> PersistenceResult<()> {
    super::validate_schedule(schedule)?;
    let file = File::create(path)?;
    let mut writer = csv::Writer::from_writer(file);
    for entry in schedule.entries() {
        writer.serialize(EntryCsvRecord::from(entry))?;
    }
    writer.flush()?;
    Ok(())
}

/// Rebuilds a schedule from a flat CSV export. Buckets that were present
/// but empty do not survive this format; a file with no records loads as
/// an empty week.
pub fn load_schedule_from_csv<P: AsRef<Path>>(path: P) -> PersistenceResult<Schedule> {
    let file = File::open(path)?;
    let mut reader = csv::Reader::from_reader(file);
    let mut schedule = Schedule::new();
    for record in reader.deserialize::<EntryCsvRecord>() {
        let record = record?;
        schedule.push_entry(record.into_entry()?);
    }
    super::validate_schedule(&schedule)?;
    Ok(schedule)
}

fn parse_string_option(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}
