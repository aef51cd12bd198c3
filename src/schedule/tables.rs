//! Fixed locale tables used by the recurrence calculator.
//!
//! Both tables are plain constants so the mappings can be read and tested
//! on their own.

use crate::error::{PropgenError, Result};
use chrono::{Datelike, NaiveDate, Weekday};

/// Italian weekday names, in the order of [`WEEKDAYS`].
pub const WEEKDAY_NAMES: [&str; 7] = [
    "domenica",
    "lunedì",
    "martedì",
    "mercoledì",
    "giovedì",
    "venerdì",
    "sabato",
];

const WEEKDAYS: [Weekday; 7] = [
    Weekday::Sun,
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
];

/// School-year month labels, indexed from October.
///
/// The school year proper runs October to May; the summer months follow so
/// that any calendar date maps to a label.
pub const SCHOOL_YEAR_MONTHS: [&str; 12] = [
    "Ottobre",
    "Novembre",
    "Dicembre",
    "Gennaio",
    "Febbraio",
    "Marzo",
    "Aprile",
    "Maggio",
    "Giugno",
    "Luglio",
    "Agosto",
    "Settembre",
];

/// Zero-based calendar month that opens the school year (October).
const SCHOOL_YEAR_FIRST_MONTH0: u32 = 9;

/// Look up a weekday by its Italian name, ignoring case.
pub fn weekday_from_name(name: &str) -> Result<Weekday> {
    let wanted = name.trim().to_lowercase();
    WEEKDAY_NAMES
        .iter()
        .position(|candidate| *candidate == wanted)
        .map(|i| WEEKDAYS[i])
        .ok_or_else(|| PropgenError::InvalidWeekday(name.to_string()))
}

/// Index of `date` in [`SCHOOL_YEAR_MONTHS`].
pub fn school_year_index(date: NaiveDate) -> usize {
    let month0 = date.month0();
    let index = if month0 >= SCHOOL_YEAR_FIRST_MONTH0 {
        month0 - SCHOOL_YEAR_FIRST_MONTH0
    } else {
        month0 + (12 - SCHOOL_YEAR_FIRST_MONTH0)
    };
    index as usize
}

/// School-year month label for `date`.
pub fn school_year_month(date: NaiveDate) -> &'static str {
    SCHOOL_YEAR_MONTHS[school_year_index(date)]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn weekday_lookup_covers_the_whole_week() {
        assert_eq!(weekday_from_name("domenica").unwrap(), Weekday::Sun);
        assert_eq!(weekday_from_name("lunedì").unwrap(), Weekday::Mon);
        assert_eq!(weekday_from_name("martedì").unwrap(), Weekday::Tue);
        assert_eq!(weekday_from_name("mercoledì").unwrap(), Weekday::Wed);
        assert_eq!(weekday_from_name("giovedì").unwrap(), Weekday::Thu);
        assert_eq!(weekday_from_name("venerdì").unwrap(), Weekday::Fri);
        assert_eq!(weekday_from_name("sabato").unwrap(), Weekday::Sat);
    }

    #[test]
    fn weekday_lookup_is_case_insensitive() {
        assert_eq!(weekday_from_name("Mercoledì").unwrap(), Weekday::Wed);
        assert_eq!(weekday_from_name("MERCOLEDÌ").unwrap(), Weekday::Wed);
        assert_eq!(weekday_from_name(" Sabato ").unwrap(), Weekday::Sat);
    }

    #[test]
    fn unknown_weekday_is_rejected() {
        let err = weekday_from_name("wednesday").unwrap_err();
        match err {
            PropgenError::InvalidWeekday(name) => assert_eq!(name, "wednesday"),
            other => panic!("unexpected error: {:?}", other),
        }

        // The accent is part of the name.
        assert!(weekday_from_name("mercoledi").is_err());
    }

    #[test]
    fn school_year_starts_in_october() {
        assert_eq!(school_year_month(date(2024, 10, 1)), "Ottobre");
        assert_eq!(school_year_month(date(2024, 11, 15)), "Novembre");
        assert_eq!(school_year_month(date(2024, 12, 31)), "Dicembre");
        assert_eq!(school_year_month(date(2025, 1, 1)), "Gennaio");
        assert_eq!(school_year_month(date(2025, 2, 28)), "Febbraio");
        assert_eq!(school_year_month(date(2025, 3, 5)), "Marzo");
        assert_eq!(school_year_month(date(2025, 4, 30)), "Aprile");
        assert_eq!(school_year_month(date(2025, 5, 31)), "Maggio");
    }

    #[test]
    fn summer_months_follow_may() {
        assert_eq!(school_year_index(date(2025, 6, 1)), 8);
        assert_eq!(school_year_month(date(2025, 6, 1)), "Giugno");
        assert_eq!(school_year_month(date(2025, 7, 1)), "Luglio");
        assert_eq!(school_year_month(date(2025, 8, 1)), "Agosto");
        assert_eq!(school_year_month(date(2025, 9, 30)), "Settembre");
    }
}
