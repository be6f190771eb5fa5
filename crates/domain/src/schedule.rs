use chrono::{Datelike, Days, NaiveDate};
use derive_more::Display;

use crate::{DaysPerWeek, Level};

pub const WEEKS: u32 = 4;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Split {
    #[display("push")]
    Push,
    #[display("pull")]
    Pull,
    #[display("legs")]
    Legs,
    #[display("upper")]
    Upper,
    #[display("lower")]
    Lower,
    #[display("full")]
    Full,
}

impl Split {
    /// Weekly rotation of splits for the given training frequency.
    #[must_use]
    pub fn cycle(days_per_week: DaysPerWeek) -> &'static [Split] {
        match u32::from(days_per_week) {
            3 => &[Split::Push, Split::Pull, Split::Legs],
            4 => &[Split::Upper, Split::Lower, Split::Upper, Split::Lower],
            _ => &[Split::Full],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledSession {
    pub session_number: u32,
    pub week: u32,
    pub split: Split,
    pub date: NaiveDate,
}

/// Lays out all sessions of the plan, starting on the Monday after `today`.
#[must_use]
pub fn schedule(days_per_week: DaysPerWeek, today: NaiveDate) -> Vec<ScheduledSession> {
    let days = u32::from(days_per_week);
    let cycle = Split::cycle(days_per_week);
    let start = start_date(today);

    (0..days * WEEKS)
        .map(|i| ScheduledSession {
            session_number: i + 1,
            week: i / days + 1,
            split: cycle[i as usize % cycle.len()],
            date: session_date(start, days_per_week, i),
        })
        .collect()
}

/// The next Monday strictly after `today`.
#[must_use]
pub fn start_date(today: NaiveDate) -> NaiveDate {
    let days_until_monday = 7 - u64::from(today.weekday().num_days_from_monday());
    today + Days::new(days_until_monday)
}

/// Date of the session with the 0-based `index`. Up to five sessions per
/// week leave the weekend free after every fifth session.
#[must_use]
pub fn session_date(start: NaiveDate, days_per_week: DaysPerWeek, index: u32) -> NaiveDate {
    let offset = if u32::from(days_per_week) <= 5 {
        index + 2 * (index / 5)
    } else {
        index
    };
    start + Days::new(u64::from(offset))
}

#[must_use]
pub fn has_circuit(experience: Level, session_number: u32) -> bool {
    experience != Level::Beginner && session_number % 3 == 0
}
