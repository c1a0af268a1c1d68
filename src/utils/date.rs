//! Date-only values parsed from the attendance export.

use chrono::{Datelike, NaiveDate, Weekday};
use regex::Regex;
use std::sync::OnceLock;

/// `YYYY-MM-DD` or `YYYY/MM/DD`
fn iso_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(\d{4})[-/](\d{2})[-/](\d{2})$").expect("valid regex"))
}

/// `DD-MM-YYYY` or `DD/MM/YYYY` (day first, never month first)
fn dmy_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(\d{2})[-/](\d{2})[-/](\d{4})$").expect("valid regex"))
}

/// A calendar day with no time-of-day component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// Parse one of the two recognised shapes.
    /// Returns `None` for anything else, including impossible days like 31/02.
    pub fn parse(input: &str) -> Option<Self> {
        let s = input.trim();

        if let Some(caps) = iso_pattern().captures(s) {
            return Self::from_parts(&caps[1], &caps[2], &caps[3]);
        }

        if let Some(caps) = dmy_pattern().captures(s) {
            return Self::from_parts(&caps[3], &caps[2], &caps[1]);
        }

        None
    }

    fn from_parts(year: &str, month: &str, day: &str) -> Option<Self> {
        let y = year.parse().ok()?;
        let m = month.parse().ok()?;
        let d = day.parse().ok()?;
        Self::from_ymd(y, m, d)
    }

    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    /// Signed day count from `self` to `later`.
    pub fn days_until(&self, later: &CalendarDate) -> i64 {
        (later.0 - self.0).num_days()
    }
}
