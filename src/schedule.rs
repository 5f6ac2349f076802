use crate::day::Day;
use crate::entry::WorkoutEntry;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The week's workouts, grouped per day. A day with an empty bucket is
/// distinct from a day with no bucket at all, and both shapes survive a
/// round trip through the persisted snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schedule {
    buckets: BTreeMap<Day, Vec<WorkoutEntry>>,
}

impl Schedule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.values().all(Vec::is_empty)
    }

    pub fn entry_count(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    pub fn has_bucket(&self, day: Day) -> bool {
        self.buckets.contains_key(&day)
    }

    /// Entries scheduled under `day`, in insertion order. Absent buckets
    /// read as empty.
    pub fn bucket(&self, day: Day) -> &[WorkoutEntry] {
        self.buckets.get(&day).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn buckets(&self) -> impl Iterator<Item = (Day, &[WorkoutEntry])> {
        self.buckets
            .iter()
            .map(|(day, entries)| (*day, entries.as_slice()))
    }

    pub fn entries(&self) -> impl Iterator<Item = &WorkoutEntry> {
        self.buckets.values().flatten()
    }

    pub fn find_entry(&self, id: &str) -> Option<&WorkoutEntry> {
        self.entries().find(|entry| entry.id == id)
    }

    pub fn day_of(&self, id: &str) -> Option<Day> {
        self.find_entry(id).map(|entry| entry.day)
    }

    /// Materializes an empty bucket for `day` if none exists yet.
    pub fn ensure_bucket(&mut self, day: Day) {
        self.buckets.entry(day).or_default();
    }

    /// Appends the entry to the bucket named by its own `day` field.
    pub fn push_entry(&mut self, entry: WorkoutEntry) {
        self.buckets.entry(entry.day).or_default().push(entry);
    }

    /// Replaces the entry carrying the same id, wherever it currently
    /// lives. A same-day replacement keeps its position in the bucket; a
    /// day change removes it from the old bucket and appends it to the
    /// new one. Returns false without touching anything when the id is
    /// unknown.
    pub fn replace_entry(&mut self, entry: WorkoutEntry) -> bool {
        let Some(current_day) = self.day_of(&entry.id) else {
            return false;
        };

        if current_day != entry.day {
            if let Some(old_bucket) = self.buckets.get_mut(&current_day) {
                old_bucket.retain(|existing| existing.id != entry.id);
            }
            self.buckets.entry(entry.day).or_default().push(entry);
            return true;
        }

        let Some(bucket) = self.buckets.get_mut(&current_day) else {
            return false;
        };
        match bucket.iter_mut().find(|existing| existing.id == entry.id) {
            Some(slot) => {
                *slot = entry;
                true
            }
            None => false,
        }
    }

    /// Removes the entry with `id` from the bucket for `day`. The bucket
    /// stays behind even when this empties it. Unknown ids and absent
    /// buckets are a no-op returning false.
    pub fn remove_entry(&mut self, id: &str, day: Day) -> bool {
        let Some(bucket) = self.buckets.get_mut(&day) else {
            return false;
        };
        let before = bucket.len();
        bucket.retain(|existing| existing.id != id);
        bucket.len() != before
    }
}
