use crate::day::Day;
use crate::entry::WorkoutEntry;
use crate::schedule::Schedule;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DayFilter {
    #[default]
    All,
    Only(Day),
}

impl DayFilter {
    /// Parses "all" (any casing) or a day label. Anything else is None.
    pub fn parse(input: &str) -> Option<DayFilter> {
        let trimmed = input.trim();
        if trimmed.eq_ignore_ascii_case("all") {
            return Some(DayFilter::All);
        }
        Day::from_str(trimmed).map(DayFilter::Only)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Named(String),
}

impl CategoryFilter {
    pub fn parse(input: &str) -> CategoryFilter {
        let trimmed = input.trim();
        if trimmed.eq_ignore_ascii_case("all") {
            CategoryFilter::All
        } else {
            CategoryFilter::Named(trimmed.to_string())
        }
    }

    fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Named(wanted) => wanted.to_lowercase() == category.to_lowercase(),
        }
    }
}

/// The three view criteria, combined with AND. The default query keeps
/// everything.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterQuery {
    pub search_term: String,
    pub day: DayFilter,
    pub category: CategoryFilter,
}

impl FilterQuery {
    pub fn is_unfiltered(&self) -> bool {
        self.search_term.is_empty()
            && self.day == DayFilter::All
            && self.category == CategoryFilter::All
    }

    fn keeps(&self, entry: &WorkoutEntry) -> bool {
        entry
            .name
            .to_lowercase()
            .contains(&self.search_term.to_lowercase())
            && self.category.matches(&entry.category)
    }
}

/// Projects the schedule down to the entries the query keeps. The source
/// is left untouched.
///
/// With the day filter off, every bucket present in the source stays
/// present in the output, emptied where search or category dropped all
/// of its entries. With a specific day selected the output holds exactly
/// that one bucket, materialized empty when the source has no entries
/// for it. Bucket order and entry order within a bucket are preserved.
pub fn filter_schedule(schedule: &Schedule, query: &FilterQuery) -> Schedule {
    let mut filtered = Schedule::new();
    match query.day {
        DayFilter::All => {
            for (day, entries) in schedule.buckets() {
                collect_bucket(&mut filtered, day, entries, query);
            }
        }
        DayFilter::Only(day) => {
            collect_bucket(&mut filtered, day, schedule.bucket(day), query);
        }
    }
    filtered
}

fn collect_bucket(out: &mut Schedule, day: Day, entries: &[WorkoutEntry], query: &FilterQuery) {
    out.ensure_bucket(day);
    for entry in entries {
        if query.keeps(entry) {
            out.push_entry(entry.clone());
        }
    }
}
