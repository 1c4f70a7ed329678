//! Calendar difference and business-day arithmetic on the proleptic Gregorian calendar.

use chrono::{Datelike, Days, NaiveDate, Weekday};
use tracing::trace;

use crate::error::InputError;
use crate::types::{CalendarDifference, DateRange, HolidaySet};

/// Gregorian rule: divisible by 4, except centuries unless divisible by 400.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 30,
    }
}

/// Month before `(year, month)`, crossing into the previous year from January.
pub fn previous_month(year: i32, month: u32) -> (i32, u32) {
    if month == 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    }
}

pub fn is_weekend(weekday: Weekday) -> bool {
    matches!(weekday, Weekday::Sat | Weekday::Sun)
}

/// Normalized years/months/days gap between two dates, in either order.
///
/// Days are borrowed from the months preceding the later date, walking
/// backwards until the day component is non-negative; months then borrow
/// from years. Adding the result to the earlier date (years, then months
/// keeping the day of month and rolling overflow forward, then days) gives
/// back the later date.
pub fn diff(a: NaiveDate, b: NaiveDate) -> CalendarDifference {
    let range = DateRange::new(a, b);
    let (lo, hi) = (range.earlier(), range.later());

    let mut years = hi.year() - lo.year();
    let mut months = hi.month() as i32 - lo.month() as i32;
    let mut days = hi.day() as i32 - lo.day() as i32;

    let (mut borrow_year, mut borrow_month) = (hi.year(), hi.month());
    while days < 0 {
        (borrow_year, borrow_month) = previous_month(borrow_year, borrow_month);
        months -= 1;
        days += days_in_month(borrow_year, borrow_month) as i32;
    }

    while months < 0 {
        years -= 1;
        months += 12;
    }

    let difference = CalendarDifference {
        years: years as u32,
        months: months as u32,
        days: days as u32,
        total_days: range.elapsed_days(),
    };
    trace!(%lo, %hi, ?difference, "calendar difference");
    difference
}

/// Count business days in an inclusive range.
///
/// Full weeks contribute five days each; the leftover days at the end of the
/// range are checked one by one. Holidays are then located per year and
/// removed when they fall on a weekday inside the range.
pub fn business_days(range: DateRange, holidays: &HolidaySet) -> u64 {
    let len = range.len_days();
    let full_weeks = len / 7;

    // Counted back from `later`, never past it
    let remainder = match len % 7 {
        0 => 0,
        leftover => range
            .later()
            .checked_sub_days(Days::new(leftover - 1))
            .map_or(0, |start| {
                DateRange::new(start, range.later())
                    .days()
                    .filter(|d| !is_weekend(d.weekday()))
                    .count() as u64
            }),
    };

    let observed = (range.earlier().year()..=range.later().year())
        .flat_map(move |year| {
            holidays
                .iter()
                .filter_map(move |(month, day)| NaiveDate::from_ymd_opt(year, month, day))
        })
        .filter(|date| range.contains(*date) && !is_weekend(date.weekday()))
        .count() as u64;

    let count = full_weeks * 5 + remainder - observed;
    trace!(
        earlier = %range.earlier(),
        later = %range.later(),
        count,
        observed,
        "business days"
    );
    count
}

/// Business days in `(today, future]`; today itself is not counted.
pub fn business_days_ahead(today: NaiveDate, future: NaiveDate, holidays: &HolidaySet) -> u64 {
    match today.succ_opt() {
        Some(start) if start <= future => business_days(DateRange::new(start, future), holidays),
        _ => 0,
    }
}

/// Business days in `[past, today)`; today itself is not counted.
pub fn business_days_behind(past: NaiveDate, today: NaiveDate, holidays: &HolidaySet) -> u64 {
    match today.pred_opt() {
        Some(end) if past <= end => business_days(DateRange::new(past, end), holidays),
        _ => 0,
    }
}

/// Dates `days` after and before `today`.
pub fn offset_dates(today: NaiveDate, days: u64) -> Result<(NaiveDate, NaiveDate), InputError> {
    let offset = Days::new(days);
    let future = today
        .checked_add_days(offset)
        .ok_or_else(|| InputError::DayCountOutOfRange(days.to_string()))?;
    let past = today
        .checked_sub_days(offset)
        .ok_or_else(|| InputError::DayCountOutOfRange(days.to_string()))?;
    Ok((future, past))
}
