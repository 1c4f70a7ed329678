//! Type definitions and constants for date arithmetic and reporting.

use std::collections::BTreeSet;

use chrono::{Datelike, Days, Locale, NaiveDate};

use crate::error::InputError;

/// Evaluation context shared by every command of a session.
#[derive(Clone, Debug)]
pub struct DiffContext {
    /// Reference date for single-date and day-count commands.
    pub today: NaiveDate,
    /// Locale used for weekday names.
    pub locale: Locale,
    /// Fixed holidays excluded from business-day counts.
    pub holidays: HolidaySet,
    /// Whether to use ANSI color codes in output.
    pub color: bool,
}

/// Inclusive range of calendar days, always ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    earlier: NaiveDate,
    later: NaiveDate,
}

impl DateRange {
    /// Build a range from two dates in any order.
    pub fn new(a: NaiveDate, b: NaiveDate) -> Self {
        if a <= b {
            DateRange {
                earlier: a,
                later: b,
            }
        } else {
            DateRange {
                earlier: b,
                later: a,
            }
        }
    }

    pub fn earlier(&self) -> NaiveDate {
        self.earlier
    }

    pub fn later(&self) -> NaiveDate {
        self.later
    }

    /// Whole days between the endpoints (0 for a single-day range).
    pub fn elapsed_days(&self) -> u64 {
        self.later.signed_duration_since(self.earlier).num_days() as u64
    }

    /// Number of days in the range, both endpoints included.
    pub fn len_days(&self) -> u64 {
        self.elapsed_days() + 1
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.earlier <= date && date <= self.later
    }

    /// Iterate every day from `earlier` to `later`, inclusive.
    ///
    /// Steps by offset from `earlier` so a range ending on `NaiveDate::MAX`
    /// still yields its last day.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + use<> {
        let earlier = self.earlier;
        (0..self.len_days())
            .filter_map(move |offset| earlier.checked_add_days(Days::new(offset)))
    }
}

/// Normalized calendar gap between two dates plus the raw day count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CalendarDifference {
    pub years: u32,
    /// 0..=11 after borrowing.
    pub months: u32,
    /// 0..=30 after borrowing.
    pub days: u32,
    pub total_days: u64,
}

impl CalendarDifference {
    /// True when both dates were the same day.
    pub fn is_zero(&self) -> bool {
        self.total_days == 0
    }
}

/// Annually recurring holidays matched by (month, day).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolidaySet {
    days: BTreeSet<(u32, u32)>,
}

impl HolidaySet {
    pub fn new<I: IntoIterator<Item = (u32, u32)>>(days: I) -> Self {
        HolidaySet {
            days: days.into_iter().collect(),
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.days.contains(&(date.month(), date.day()))
    }

    /// (month, day) pairs in calendar order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.days.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

impl Default for HolidaySet {
    fn default() -> Self {
        HolidaySet::new(FIXED_HOLIDAYS)
    }
}

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    /// Positive number of days to project from today.
    DayCount(u64),
    /// Compare a date against today.
    SingleDate(NaiveDate),
    /// Compare two dates.
    TwoDates(NaiveDate, NaiveDate),
    Invalid(InputError),
}

/// Everything needed to render a comparison between two dates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DifferenceReport {
    /// Date shown first in the title.
    pub first: NaiveDate,
    /// Date shown second in the title.
    pub second: NaiveDate,
    /// Whether `first` is today (single-date mode).
    pub first_is_today: bool,
    pub difference: CalendarDifference,
    /// Business days in the inclusive range.
    pub business_days: u64,
}

/// Dates and business-day windows around today for a day count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OffsetReport {
    pub today: NaiveDate,
    pub days: u64,
    pub future: NaiveDate,
    pub past: NaiveDate,
    /// Business days in `(today, future]`.
    pub business_days_ahead: u64,
    /// Business days in `[past, today)`.
    pub business_days_behind: u64,
}

/// Units that appear in reports, each with its own plural form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Year,
    Month,
    Day,
    BusinessDay,
}

impl Unit {
    pub fn singular(self) -> &'static str {
        match self {
            Unit::Year => "ano",
            Unit::Month => "mês",
            Unit::Day => "dia",
            Unit::BusinessDay => "dia útil",
        }
    }

    pub fn plural(self) -> &'static str {
        match self {
            Unit::Year => "anos",
            Unit::Month => "meses",
            Unit::Day => "dias",
            Unit::BusinessDay => "dias úteis",
        }
    }
}

// Brazilian national holidays with a fixed date
pub const FIXED_HOLIDAYS: [(u32, u32); 8] = [
    (1, 1),   // Confraternização Universal
    (4, 21),  // Tiradentes
    (5, 1),   // Dia do Trabalho
    (9, 7),   // Independência
    (10, 12), // Nossa Senhora Aparecida
    (11, 2),  // Finados
    (11, 15), // Proclamação da República
    (12, 25), // Natal
];

pub const DATE_FORMAT: &str = "%d-%m-%Y";
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

pub const DEFAULT_LOCALE: &str = "pt_BR";

/// Environment variable that pins "today" (YYYY-MM-DD).
pub const TEST_TIME_VAR: &str = "DIFFDATE_TEST_TIME";

// ANSI color codes
pub const COLOR_RESET: &str = "\x1b[0m";
pub const COLOR_RED: &str = "\x1b[91m";
pub const COLOR_TEAL: &str = "\x1b[96m";
pub const COLOR_SAND_YELLOW: &str = "\x1b[93m";
