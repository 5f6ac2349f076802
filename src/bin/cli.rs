use std::env;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[cfg(feature = "sqlite")]
use workout_schedule::SqliteStorage;
use workout_schedule::{
    CategoryFilter, Day, DayFilter, EntryDraft, FileStorage, FilterQuery, PersistenceError,
    Schedule, ScheduleStore, StorageSubstrate, WorkoutEntry, filter_schedule,
    load_schedule_from_csv, load_schedule_from_json, save_schedule_to_csv, save_schedule_to_json,
    validate_draft,
};

fn print_help() {
    println!(
        "Commands:\n  help                                Show this help\n  show                                Show the schedule through the active filters\n  today                               Show today's workouts, unfiltered\n  add <day> | <name> | <duration> | <category> [| <description>]\n                                      Add a workout (fields separated by '|')\n  edit <id> <day> | <name> | <duration> | <category> [| <description>]\n                                      Rewrite a workout; a new day moves it\n  delete <id> <day>                   Remove a workout from a day's bucket\n  search <text...>                    Set the name search\n  search clear                        Clear the name search\n  filter day <all|day>                Restrict the view to one day\n  filter category <all|name>          Restrict the view to one category\n  filter clear                        Drop the search and both filters\n  filter                              Show the active filters\n  export <json|csv> <path>            Write the schedule to a file\n  import <json|csv> <path>            Replace the schedule from a file\n  quit|exit                           Exit\n\nIds may be abbreviated to any unique prefix.\nDays: Senin, Selasa, Rabu, Kamis, Jumat, Sabtu, Minggu"
    );
}

fn day_list() -> String {
    Day::ALL
        .iter()
        .map(|day| day.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

fn split_fields(input: &str) -> Vec<String> {
    input.split('|').map(|part| part.trim().to_string()).collect()
}

fn render_entry(entry: &WorkoutEntry) -> String {
    let mut line = format!(
        "  [{}] {} - {} ({})",
        entry.id, entry.name, entry.duration, entry.category
    );
    if let Some(description) = &entry.description {
        line.push_str("\n        ");
        line.push_str(description);
    }
    line
}

fn render_view(schedule: &Schedule, query: &FilterQuery) -> String {
    let filtered = filter_schedule(schedule, query);
    let days: Vec<Day> = match query.day {
        DayFilter::All => Day::ALL.to_vec(),
        DayFilter::Only(day) => vec![day],
    };

    let mut out = String::new();
    for day in days {
        out.push_str(day.as_str());
        out.push('\n');
        let bucket = filtered.bucket(day);
        if bucket.is_empty() {
            match query.day {
                DayFilter::All => out.push_str("  No workouts scheduled.\n"),
                DayFilter::Only(_) => out.push_str("  No workouts match the current filters.\n"),
            }
            continue;
        }
        for entry in bucket {
            out.push_str(&render_entry(entry));
            out.push('\n');
        }
    }
    out
}

fn describe_filters(query: &FilterQuery) -> String {
    if query.is_unfiltered() {
        return "none".to_string();
    }
    let mut parts = Vec::new();
    if !query.search_term.is_empty() {
        parts.push(format!("search='{}'", query.search_term));
    }
    if let DayFilter::Only(day) = query.day {
        parts.push(format!("day={}", day));
    }
    if let CategoryFilter::Named(name) = &query.category {
        parts.push(format!("category={}", name));
    }
    parts.join(", ")
}

// An exact id wins even when longer ids extend it.
fn resolve_entry_id(schedule: &Schedule, prefix: &str) -> Result<String, String> {
    if schedule.find_entry(prefix).is_some() {
        return Ok(prefix.to_string());
    }
    let mut matches = schedule
        .entries()
        .filter(|entry| entry.id.starts_with(prefix));
    match (matches.next(), matches.next()) {
        (Some(entry), None) => Ok(entry.id.clone()),
        (Some(_), Some(_)) => Err(format!("Id prefix '{}' is ambiguous.", prefix)),
        (None, _) => Err(format!("No workout with id '{}'.", prefix)),
    }
}

fn resolve_bucket_entry_id(schedule: &Schedule, day: Day, prefix: &str) -> Result<String, String> {
    let bucket = schedule.bucket(day);
    if bucket.iter().any(|entry| entry.id == prefix) {
        return Ok(prefix.to_string());
    }
    let mut matches = bucket.iter().filter(|entry| entry.id.starts_with(prefix));
    match (matches.next(), matches.next()) {
        (Some(entry), None) => Ok(entry.id.clone()),
        (Some(_), Some(_)) => Err(format!("Id prefix '{}' is ambiguous under {}.", prefix, day)),
        (None, _) => Err(format!("No workout with id '{}' under {}.", prefix, day)),
    }
}

fn default_storage_root() -> PathBuf {
    match dirs::data_dir() {
        Some(dir) => dir.join("workout-schedule"),
        None => PathBuf::from(".workout-schedule"),
    }
}

fn open_storage(path: &Path) -> Result<Box<dyn StorageSubstrate>, PersistenceError> {
    #[cfg(feature = "sqlite")]
    {
        let is_sqlite_file = matches!(
            path.extension().and_then(|ext| ext.to_str()),
            Some("db") | Some("sqlite") | Some("sqlite3")
        );
        if is_sqlite_file {
            return Ok(Box::new(SqliteStorage::new(path)?));
        }
    }
    Ok(Box::new(FileStorage::new(path)?))
}

fn draft_from_fields(day: Day, fields: &[String]) -> EntryDraft {
    let mut draft = EntryDraft::new(fields[1].clone(), fields[2].clone(), day, fields[3].clone());
    if let Some(description) = fields.get(4) {
        if !description.is_empty() {
            draft = draft.with_description(description.clone());
        }
    }
    draft
}

fn main() {
    let storage_path = env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(default_storage_root);
    let storage = match open_storage(&storage_path) {
        Ok(storage) => storage,
        Err(e) => {
            eprintln!("Error opening storage at {}: {}", storage_path.display(), e);
            std::process::exit(1);
        }
    };
    let mut store = match ScheduleStore::open(storage) {
        Ok(store) => store,
        Err(e) => {
            eprintln!("Error loading schedule: {}", e);
            std::process::exit(1);
        }
    };
    let mut query = FilterQuery::default();

    println!("Weekly Workout Schedule (CLI) - type 'help' for commands\n");
    print!("{}", render_view(store.schedule(), &query));

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("> ");
        let _ = io::stdout().flush();
        line.clear();
        match stdin.read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        let mut parts = input.split_whitespace();
        let cmd = parts.next().unwrap_or("");

        match cmd {
            "help" => {
                print_help();
            }
            "quit" | "exit" => break,
            "show" => {
                print!("{}", render_view(store.schedule(), &query));
            }
            "today" => {
                let today_query = FilterQuery {
                    day: DayFilter::Only(Day::today()),
                    ..FilterQuery::default()
                };
                print!("{}", render_view(store.schedule(), &today_query));
            }
            "add" => {
                let rest = parts.collect::<Vec<&str>>().join(" ");
                let fields = split_fields(&rest);
                if fields.len() < 4 || fields.len() > 5 {
                    println!("Usage: add <day> | <name> | <duration> | <category> [| <description>]");
                    continue;
                }
                let day = match Day::from_str(&fields[0]) {
                    Some(day) => day,
                    None => {
                        println!("Unknown day '{}'. Days: {}", fields[0], day_list());
                        continue;
                    }
                };
                let draft = draft_from_fields(day, &fields);
                if let Err(e) = validate_draft(&draft) {
                    println!("Error: {}", e);
                    continue;
                }
                match store.add(draft) {
                    Ok(entry) => {
                        println!("Workout added (id={}).", entry.id);
                        print!("{}", render_view(store.schedule(), &query));
                    }
                    Err(e) => println!("Error: {}", e),
                }
            }
            "edit" => {
                let rest = parts.collect::<Vec<&str>>().join(" ");
                let fields = split_fields(&rest);
                if fields.len() < 4 || fields.len() > 5 {
                    println!("Usage: edit <id> <day> | <name> | <duration> | <category> [| <description>]");
                    continue;
                }
                let head: Vec<&str> = fields[0].split_whitespace().collect();
                if head.len() != 2 {
                    println!("Usage: edit <id> <day> | <name> | <duration> | <category> [| <description>]");
                    continue;
                }
                let id = match resolve_entry_id(store.schedule(), head[0]) {
                    Ok(id) => id,
                    Err(msg) => {
                        println!("{}", msg);
                        continue;
                    }
                };
                let day = match Day::from_str(head[1]) {
                    Some(day) => day,
                    None => {
                        println!("Unknown day '{}'. Days: {}", head[1], day_list());
                        continue;
                    }
                };
                let draft = draft_from_fields(day, &fields);
                if let Err(e) = validate_draft(&draft) {
                    println!("Error: {}", e);
                    continue;
                }
                match store.update(draft.into_entry(id)) {
                    Ok(true) => {
                        println!("Workout updated.");
                        print!("{}", render_view(store.schedule(), &query));
                    }
                    Ok(false) => println!("No workout with id '{}'.", head[0]),
                    Err(e) => println!("Error: {}", e),
                }
            }
            "delete" => {
                let prefix = parts.next();
                let day_s = parts.next();
                match (prefix, day_s) {
                    (Some(prefix), Some(day_s)) => {
                        let day = match Day::from_str(day_s) {
                            Some(day) => day,
                            None => {
                                println!("Unknown day '{}'. Days: {}", day_s, day_list());
                                continue;
                            }
                        };
                        let id = match resolve_bucket_entry_id(store.schedule(), day, prefix) {
                            Ok(id) => id,
                            Err(msg) => {
                                println!("{}", msg);
                                continue;
                            }
                        };
                        match store.delete(&id, day) {
                            Ok(true) => {
                                println!("Workout deleted.");
                                print!("{}", render_view(store.schedule(), &query));
                            }
                            Ok(false) => {
                                println!("No workout with id '{}' under {}.", prefix, day)
                            }
                            Err(e) => println!("Error: {}", e),
                        }
                    }
                    _ => println!("Usage: delete <id> <day>"),
                }
            }
            "search" => {
                let term = parts.collect::<Vec<&str>>().join(" ");
                if term.is_empty() || term == "clear" {
                    query.search_term.clear();
                    println!("Search cleared.");
                } else {
                    println!("Search set to '{}'.", term);
                    query.search_term = term;
                }
                print!("{}", render_view(store.schedule(), &query));
            }
            "filter" => {
                let sub = parts.next();
                let rest = parts.collect::<Vec<&str>>().join(" ");
                match sub {
                    None => println!("Active filters: {}", describe_filters(&query)),
                    Some("clear") => {
                        query = FilterQuery::default();
                        println!("Filters cleared.");
                        print!("{}", render_view(store.schedule(), &query));
                    }
                    Some("day") => {
                        if rest.is_empty() {
                            println!("Usage: filter day <all|day>");
                            continue;
                        }
                        match DayFilter::parse(&rest) {
                            Some(DayFilter::All) => {
                                query.day = DayFilter::All;
                                println!("Day filter cleared.");
                                print!("{}", render_view(store.schedule(), &query));
                            }
                            Some(DayFilter::Only(day)) => {
                                query.day = DayFilter::Only(day);
                                println!("Day filter set to {}.", day);
                                print!("{}", render_view(store.schedule(), &query));
                            }
                            None => println!("Unknown day '{}'. Days: {}", rest, day_list()),
                        }
                    }
                    Some("category") => {
                        if rest.is_empty() {
                            println!("Usage: filter category <all|name>");
                            continue;
                        }
                        match CategoryFilter::parse(&rest) {
                            CategoryFilter::All => {
                                query.category = CategoryFilter::All;
                                println!("Category filter cleared.");
                            }
                            CategoryFilter::Named(name) => {
                                println!("Category filter set to '{}'.", name);
                                query.category = CategoryFilter::Named(name);
                            }
                        }
                        print!("{}", render_view(store.schedule(), &query));
                    }
                    Some(_) => {
                        println!("Usage: filter [day <all|day> | category <all|name> | clear]")
                    }
                }
            }
            "export" => {
                let format = parts.next();
                let path = parts.next();
                match (format, path) {
                    (Some("json"), Some(path)) => {
                        match save_schedule_to_json(store.schedule(), path) {
                            Ok(()) => println!("Schedule exported to {}.", path),
                            Err(e) => println!("Error: {}", e),
                        }
                    }
                    (Some("csv"), Some(path)) => {
                        match save_schedule_to_csv(store.schedule(), path) {
                            Ok(()) => println!("Schedule exported to {}.", path),
                            Err(e) => println!("Error: {}", e),
                        }
                    }
                    _ => println!("Usage: export <json|csv> <path>"),
                }
            }
            "import" => {
                let format = parts.next();
                let path = parts.next();
                let loaded = match (format, path) {
                    (Some("json"), Some(path)) => Some((load_schedule_from_json(path), path)),
                    (Some("csv"), Some(path)) => Some((load_schedule_from_csv(path), path)),
                    _ => {
                        println!("Usage: import <json|csv> <path>");
                        None
                    }
                };
                if let Some((result, path)) = loaded {
                    match result.and_then(|schedule| store.replace_schedule(schedule)) {
                        Ok(()) => {
                            println!("Schedule imported from {}.", path);
                            print!("{}", render_view(store.schedule(), &query));
                        }
                        Err(e) => println!("Error: {}", e),
                    }
                }
            }
            _ => {
                println!("Unknown command. Type 'help'.");
            }
        }
    }
}
