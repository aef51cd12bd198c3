//! Recurrence calculator.
//!
//! Given a date range, a weekday and a list of exclusion intervals (holidays),
//! finds every qualifying session date and summarises them per school-year
//! month.
//!
//! # Rules
//!
//! - The first session is the first matching weekday on or after `start`.
//! - Sessions repeat every 7 days while the date is `<= end`.
//! - A date inside any exclusion interval (both bounds inclusive) is skipped.
//! - With zero sessions the average is `0` and first/last are absent.

mod tables;


pub use tables::{SCHOOL_YEAR_MONTHS, WEEKDAY_NAMES, school_year_month, weekday_from_name};

use crate::costs::Amount;
use crate::error::Result;
use chrono::{Datelike, NaiveDate};
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// Display format for first/last session dates.
pub const SESSION_DATE_FORMAT: &str = "%d/%m/%Y";

/// An inclusive date interval during which no session takes place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exclusion {
    #[serde(rename = "inizio")]
    pub start: NaiveDate,
    #[serde(rename = "fine")]
    pub end: NaiveDate,
}

impl Exclusion {
    /// Create an interval covering `start..=end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Whether `date` lies inside the interval, bounds included.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Input of [`compute_schedule`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleConfig {
    pub start: NaiveDate,
    pub end: NaiveDate,
    /// Italian weekday name, matched case-insensitively.
    pub weekday: String,
    /// Intervals may overlap and need not be sorted.
    pub exclusions: Vec<Exclusion>,
}

/// Session counts per school-year month, in chronological order of first
/// occurrence.
///
/// Serializes as a map so templates can address `dettaglio_per_mese.Ottobre`
/// directly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MonthlyCounts(Vec<(&'static str, u32)>);

impl MonthlyCounts {
    fn record(&mut self, month: &'static str) {
        match self.0.iter_mut().find(|(label, _)| *label == month) {
            Some((_, count)) => *count += 1,
            None => self.0.push((month, 1)),
        }
    }

    /// Count for `month`, if any session fell in it.
    pub fn get(&self, month: &str) -> Option<u32> {
        self.0
            .iter()
            .find(|(label, _)| *label == month)
            .map(|(_, count)| *count)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, u32)> + '_ {
        self.0.iter().copied()
    }

    /// Sum of all month counts.
    pub fn total(&self) -> u32 {
        self.0.iter().map(|(_, count)| count).sum()
    }
}

impl Serialize for MonthlyCounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (label, count) in &self.0 {
            map.serialize_entry(label, count)?;
        }
        map.end()
    }
}

/// Output of [`compute_schedule`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleResult {
    #[serde(rename = "totale_incontri")]
    pub total_sessions: u32,

    /// Sessions per month, rounded to one decimal.
    #[serde(rename = "media_per_mese", serialize_with = "serialize_compact")]
    pub average_per_month: f64,

    #[serde(rename = "dettaglio_per_mese")]
    pub sessions_by_month: MonthlyCounts,

    /// First session as `dd/mm/YYYY`.
    #[serde(rename = "primo_incontro")]
    pub first_session: Option<String>,

    /// Last session as `dd/mm/YYYY`.
    #[serde(rename = "ultimo_incontro")]
    pub last_session: Option<String>,

    /// Every qualifying date, ascending.
    #[serde(skip)]
    pub sessions: Vec<NaiveDate>,
}

/// Compute the session calendar for `config`.
///
/// Fails only when the weekday name is not in the weekday table.
pub fn compute_schedule(config: &ScheduleConfig) -> Result<ScheduleResult> {
    let target = weekday_from_name(&config.weekday)?;

    let first = config
        .start
        .iter_days()
        .take(7)
        .find(|date| date.weekday() == target);

    let mut sessions = Vec::new();
    let mut sessions_by_month = MonthlyCounts::default();

    if let Some(first) = first {
        for date in first.iter_weeks().take_while(|date| *date <= config.end) {
            if config.exclusions.iter().any(|ex| ex.contains(date)) {
                continue;
            }
            sessions_by_month.record(school_year_month(date));
            sessions.push(date);
        }
    }

    let total_sessions = sessions.len() as u32;
    let average_per_month = average_per_month(total_sessions, sessions_by_month.len());

    log::debug!(
        "schedule: {} sessions over {} months (weekday {:?}, {} exclusions)",
        total_sessions,
        sessions_by_month.len(),
        target,
        config.exclusions.len()
    );

    Ok(ScheduleResult {
        total_sessions,
        average_per_month,
        sessions_by_month,
        first_session: sessions.first().map(format_session_date),
        last_session: sessions.last().map(format_session_date),
        sessions,
    })
}

/// `total / months`, rounded half-up to one decimal; `0` when no month qualifies.
fn average_per_month(total: u32, months: usize) -> f64 {
    if months == 0 {
        return 0.0;
    }
    let raw = f64::from(total) / months as f64;
    (raw * 10.0).round() / 10.0
}

fn format_session_date(date: &NaiveDate) -> String {
    date.format(SESSION_DATE_FORMAT).to_string()
}

/// Emit whole numbers without a trailing `.0`, the same way amounts are.
fn serialize_compact<S: Serializer>(
    value: &f64,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    Amount::Decimal(*value).serialize(serializer)
}
