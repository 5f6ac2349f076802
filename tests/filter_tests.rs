use workout_schedule::{
    CategoryFilter, Day, DayFilter, FilterQuery, Schedule, WorkoutEntry, filter_schedule,
};

fn entry(id: &str, name: &str, day: Day, category: &str) -> WorkoutEntry {
    WorkoutEntry::new(id, name, "30 minutes", day, category)
}

fn build_sample_schedule() -> Schedule {
    let mut schedule = Schedule::new();
    schedule.push_entry(entry("a", "Morning Run", Day::Senin, "cardio"));
    schedule.push_entry(entry("b", "Pushups", Day::Senin, "strength"));
    schedule.push_entry(entry("c", "Yoga Flow", Day::Rabu, "flexibility"));
    schedule
}

fn search(term: &str) -> FilterQuery {
    FilterQuery {
        search_term: term.to_string(),
        ..FilterQuery::default()
    }
}

fn category(name: &str) -> FilterQuery {
    FilterQuery {
        category: CategoryFilter::Named(name.to_string()),
        ..FilterQuery::default()
    }
}

fn only(day: Day) -> FilterQuery {
    FilterQuery {
        day: DayFilter::Only(day),
        ..FilterQuery::default()
    }
}

#[test]
fn default_query_keeps_everything() {
    let schedule = build_sample_schedule();
    let filtered = filter_schedule(&schedule, &FilterQuery::default());
    assert_eq!(filtered, schedule);
}

#[test]
fn search_matches_case_insensitive_substring() {
    let schedule = build_sample_schedule();
    let filtered = filter_schedule(&schedule, &search("rUn"));

    let names: Vec<&str> = filtered.entries().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["Morning Run"]);
}

#[test]
fn search_looks_at_names_only() {
    let schedule = build_sample_schedule();
    // "cardio" appears as a category but in no name.
    let filtered = filter_schedule(&schedule, &search("cardio"));
    assert_eq!(filtered.entry_count(), 0);
}

#[test]
fn emptied_buckets_stay_present() {
    let schedule = build_sample_schedule();
    let filtered = filter_schedule(&schedule, &search("yoga"));

    assert!(filtered.has_bucket(Day::Senin));
    assert!(filtered.bucket(Day::Senin).is_empty());
    assert_eq!(filtered.bucket(Day::Rabu).len(), 1);
}

#[test]
fn day_filter_narrows_output_to_one_bucket() {
    let schedule = build_sample_schedule();
    let filtered = filter_schedule(&schedule, &only(Day::Senin));

    assert!(filtered.has_bucket(Day::Senin));
    assert!(!filtered.has_bucket(Day::Rabu));
    assert_eq!(filtered.bucket(Day::Senin).len(), 2);
}

#[test]
fn day_filter_materializes_missing_bucket_empty() {
    let schedule = build_sample_schedule();
    let filtered = filter_schedule(&schedule, &only(Day::Jumat));

    assert!(filtered.has_bucket(Day::Jumat));
    assert!(filtered.bucket(Day::Jumat).is_empty());
    assert_eq!(filtered.buckets().count(), 1);
}

#[test]
fn category_filter_is_exact_case_insensitive_match() {
    let schedule = build_sample_schedule();

    let names: Vec<String> = filter_schedule(&schedule, &category("CARDIO"))
        .entries()
        .map(|e| e.name.clone())
        .collect();
    assert_eq!(names, vec!["Morning Run"]);

    // Substrings are not enough for categories.
    assert_eq!(filter_schedule(&schedule, &category("card")).entry_count(), 0);
}

#[test]
fn criteria_combine_with_and() {
    let schedule = build_sample_schedule();
    let query = FilterQuery {
        search_term: "u".to_string(),
        day: DayFilter::Only(Day::Senin),
        category: CategoryFilter::Named("strength".to_string()),
    };
    let filtered = filter_schedule(&schedule, &query);

    let names: Vec<&str> = filtered.entries().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["Pushups"]);
}

#[test]
fn keeps_bucket_order_of_matches() {
    let mut schedule = Schedule::new();
    schedule.push_entry(entry("a", "Run A", Day::Senin, "cardio"));
    schedule.push_entry(entry("b", "Pushups", Day::Senin, "strength"));
    schedule.push_entry(entry("c", "Run B", Day::Senin, "cardio"));

    let filtered = filter_schedule(&schedule, &search("run"));
    let names: Vec<&str> = filtered
        .bucket(Day::Senin)
        .iter()
        .map(|e| e.name.as_str())
        .collect();
    assert_eq!(names, vec!["Run A", "Run B"]);
}

#[test]
fn filtering_twice_changes_nothing_more() {
    let schedule = build_sample_schedule();
    let query = FilterQuery {
        search_term: "o".to_string(),
        day: DayFilter::All,
        category: CategoryFilter::Named("cardio".to_string()),
    };
    let once = filter_schedule(&schedule, &query);
    let twice = filter_schedule(&once, &query);
    assert_eq!(once, twice);
}

#[test]
fn single_entry_walkthrough() {
    let mut schedule = Schedule::new();
    schedule.push_entry(entry("wk-1", "Run", Day::Senin, "cardio"));

    let by_search = filter_schedule(&schedule, &search("ru"));
    assert_eq!(by_search.bucket(Day::Senin).len(), 1);

    let by_category = filter_schedule(&schedule, &category("strength"));
    assert!(by_category.has_bucket(Day::Senin));
    assert_eq!(by_category.entry_count(), 0);
}

#[test]
fn sentinel_and_day_labels_parse_case_insensitively() {
    assert_eq!(DayFilter::parse("all"), Some(DayFilter::All));
    assert_eq!(DayFilter::parse(" ALL "), Some(DayFilter::All));
    assert_eq!(DayFilter::parse("rabu"), Some(DayFilter::Only(Day::Rabu)));
    assert_eq!(DayFilter::parse("someday"), None);

    assert_eq!(CategoryFilter::parse("All"), CategoryFilter::All);
    assert_eq!(CategoryFilter::parse(" all "), CategoryFilter::All);
    assert_eq!(
        CategoryFilter::parse("Cardio"),
        CategoryFilter::Named("Cardio".to_string())
    );
}
