use crate::day::Day;
use crate::entry::{EntryDraft, WorkoutEntry};
use crate::persistence::{self, PersistenceResult, SCHEDULE_KEY, StorageSubstrate};
use crate::schedule::Schedule;
use uuid::Uuid;

/// Owns the in-memory schedule and keeps the storage snapshot in step
/// with it. Every mutation writes the full snapshot back, whether or not
/// it changed anything, so the stored state never lags the session.
pub struct ScheduleStore {
    storage: Box<dyn StorageSubstrate>,
    schedule: Schedule,
}

impl ScheduleStore {
    /// Hydrates from the substrate once, at open. An absent snapshot
    /// starts an empty week; a malformed one is an error rather than a
    /// silent reset.
    pub fn open(storage: Box<dyn StorageSubstrate>) -> PersistenceResult<Self> {
        let schedule = match storage.get(SCHEDULE_KEY)? {
            Some(raw) => persistence::decode_schedule(&raw)?,
            None => Schedule::new(),
        };
        Ok(Self { storage, schedule })
    }

    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    /// Assigns a fresh id to the draft and appends it to its day's
    /// bucket. Returns the stored entry, id included.
    pub fn add(&mut self, draft: EntryDraft) -> PersistenceResult<WorkoutEntry> {
        let entry = draft.into_entry(Uuid::new_v4().to_string());
        self.schedule.push_entry(entry.clone());
        self.persist()?;
        Ok(entry)
    }

    /// Replaces the entry with the same id wherever it lives, relocating
    /// it when its day changed. An unknown id leaves the schedule alone
    /// and returns false.
    pub fn update(&mut self, entry: WorkoutEntry) -> PersistenceResult<bool> {
        let replaced = self.schedule.replace_entry(entry);
        self.persist()?;
        Ok(replaced)
    }

    /// Removes the entry with `id` from the bucket for `day`. Unknown
    /// ids and absent buckets return false.
    pub fn delete(&mut self, id: &str, day: Day) -> PersistenceResult<bool> {
        let removed = self.schedule.remove_entry(id, day);
        self.persist()?;
        Ok(removed)
    }

    /// Swaps in a whole new schedule, as after an import.
    pub fn replace_schedule(&mut self, schedule: Schedule) -> PersistenceResult<()> {
        self.schedule = schedule;
        self.persist()
    }

    fn persist(&self) -> PersistenceResult<()> {
        let raw = persistence::encode_schedule(&self.schedule)?;
        self.storage.put(SCHEDULE_KEY, &raw)
    }
}
