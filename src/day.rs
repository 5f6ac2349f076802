use chrono::{Datelike, Local, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Weekday labels exactly as they appear in persisted snapshots, Monday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Day {
    Senin,
    Selasa,
    Rabu,
    Kamis,
    Jumat,
    Sabtu,
    Minggu,
}

impl Day {
    pub const ALL: [Day; 7] = [
        Day::Senin,
        Day::Selasa,
        Day::Rabu,
        Day::Kamis,
        Day::Jumat,
        Day::Sabtu,
        Day::Minggu,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Day::Senin => "Senin",
            Day::Selasa => "Selasa",
            Day::Rabu => "Rabu",
            Day::Kamis => "Kamis",
            Day::Jumat => "Jumat",
            Day::Sabtu => "Sabtu",
            Day::Minggu => "Minggu",
        }
    }

    pub fn from_str(input: &str) -> Option<Day> {
        let trimmed = input.trim();
        Day::ALL
            .iter()
            .copied()
            .find(|day| day.as_str().eq_ignore_ascii_case(trimmed))
    }

    pub fn from_weekday(weekday: Weekday) -> Day {
        match weekday {
            Weekday::Mon => Day::Senin,
            Weekday::Tue => Day::Selasa,
            Weekday::Wed => Day::Rabu,
            Weekday::Thu => Day::Kamis,
            Weekday::Fri => Day::Jumat,
            Weekday::Sat => Day::Sabtu,
            Weekday::Sun => Day::Minggu,
        }
    }

    pub fn today() -> Day {
        Day::from_weekday(Local::now().weekday())
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
