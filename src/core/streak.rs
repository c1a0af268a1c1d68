//! Consecutive-workday streak detection.

use crate::models::attendance::Attendance;
use crate::models::streak::AnalystStreak;
use crate::utils::date::CalendarDate;
use chrono::Weekday;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

/// An analyst is eligible when their longest run is strictly above this.
pub const STREAK_THRESHOLD: u32 = 10;

/// Which attendance statuses count as a worked day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum AttendancePolicy {
    /// Everything except statuses containing an off marker (folga, férias, ...)
    #[default]
    Exclusion,
    /// Only statuses equal to the worked token (escalado)
    Inclusion,
}

impl AttendancePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttendancePolicy::Exclusion => "exclusion",
            AttendancePolicy::Inclusion => "inclusion",
        }
    }
}

/// Status filter built from the policy and its tokens, already case-folded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusFilter {
    policy: AttendancePolicy,
    worked_token: String,
    off_markers: Vec<String>,
}

impl StatusFilter {
    pub fn new(policy: AttendancePolicy, worked_token: &str, off_markers: &[String]) -> Self {
        Self {
            policy,
            worked_token: worked_token.trim().to_lowercase(),
            off_markers: off_markers
                .iter()
                .map(|m| m.trim().to_lowercase())
                .filter(|m| !m.is_empty())
                .collect(),
        }
    }

    pub fn is_workday(&self, status: &str) -> bool {
        let status = status.trim().to_lowercase();
        match self.policy {
            AttendancePolicy::Exclusion => !self.off_markers.iter().any(|m| status.contains(m)),
            AttendancePolicy::Inclusion => status == self.worked_token,
        }
    }
}

impl Default for StatusFilter {
    fn default() -> Self {
        Self::new(
            AttendancePolicy::Exclusion,
            "escalado",
            &["folga".to_string(), "férias".to_string(), "ferias".to_string()],
        )
    }
}

/// Decides whether two consecutive distinct dates continue a run.
pub trait GapPredicate {
    fn accepts(&self, gap_days: i64, prev: Weekday, next: Weekday) -> bool;
}

impl<F> GapPredicate for F
where
    F: Fn(i64, Weekday, Weekday) -> bool,
{
    fn accepts(&self, gap_days: i64, prev: Weekday, next: Weekday) -> bool {
        self(gap_days, prev, next)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum GapRule {
    /// Only back-to-back calendar days
    #[default]
    Calendar,
    /// Calendar days, plus a Friday → Monday weekend skip
    BusinessWeek,
}

impl GapRule {
    pub fn as_str(&self) -> &'static str {
        match self {
            GapRule::Calendar => "calendar",
            GapRule::BusinessWeek => "business_week",
        }
    }
}

impl GapPredicate for GapRule {
    fn accepts(&self, gap_days: i64, prev: Weekday, next: Weekday) -> bool {
        match self {
            GapRule::Calendar => gap_days == 1,
            GapRule::BusinessWeek => {
                gap_days == 1 || (gap_days == 3 && prev == Weekday::Fri && next == Weekday::Mon)
            }
        }
    }
}

/// Length of the longest run in a sorted set of distinct dates.
pub fn longest_run<G: GapPredicate + ?Sized>(dates: &BTreeSet<CalendarDate>, gap: &G) -> u32 {
    let mut iter = dates.iter();
    let Some(mut prev) = iter.next() else {
        return 0;
    };

    let mut current = 1u32;
    let mut max = 1u32;

    for next in iter {
        let days = prev.days_until(next);
        if gap.accepts(days, prev.weekday(), next.weekday()) {
            current += 1;
        } else {
            max = max.max(current);
            current = 1;
        }
        prev = next;
    }

    max.max(current)
}

/// Distinct qualifying dates per analyst, analysts in first-seen order.
pub fn workdays_by_analyst(
    records: &[Attendance],
    filter: &StatusFilter,
) -> Vec<(String, BTreeSet<CalendarDate>)> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut grouped: Vec<(String, BTreeSet<CalendarDate>)> = Vec::new();

    for rec in records.iter().filter(|r| filter.is_workday(&r.status)) {
        let slot = *index.entry(rec.analyst.as_str()).or_insert_with(|| {
            grouped.push((rec.analyst.clone(), BTreeSet::new()));
            grouped.len() - 1
        });
        grouped[slot].1.insert(rec.date);
    }

    grouped
}

/// Analysts whose longest run of qualifying days exceeds `STREAK_THRESHOLD`.
pub fn detect_streaks<G: GapPredicate + ?Sized>(
    records: &[Attendance],
    filter: &StatusFilter,
    gap: &G,
) -> Vec<AnalystStreak> {
    let mut out = Vec::new();

    for (analyst, dates) in workdays_by_analyst(records, filter) {
        if dates.len() <= STREAK_THRESHOLD as usize {
            continue;
        }

        let max = longest_run(&dates, gap);
        tracing::trace!(analyst = %analyst, days = dates.len(), max, "streak computed");

        if max > STREAK_THRESHOLD {
            out.push(AnalystStreak {
                analyst,
                max_consecutive_days: max,
            });
        }
    }

    out
}
