//! Free-form input line parsing.
//!
//! Accepted forms: `q`, a positive day count, one date or two dates
//! (`DD-MM-YYYY`, `DD/MM/YYYY` or `YYYY-MM-DD`).

use std::num::IntErrorKind;

use chrono::NaiveDate;

use crate::error::InputError;
use crate::types::{Command, DATE_FORMAT, ISO_DATE_FORMAT};

/// Classify one line of input.
pub fn parse_command(line: &str) -> Command {
    let line = line.trim();
    if line.eq_ignore_ascii_case("q") {
        return Command::Quit;
    }

    let tokens: Vec<&str> = line.split_whitespace().collect();
    match tokens.as_slice() {
        [] => Command::Invalid(InputError::Empty),
        [token] => parse_single(token),
        [first, second] => match (parse_date(first), parse_date(second)) {
            (Ok(a), Ok(b)) => Command::TwoDates(a, b),
            (Err(e), _) | (_, Err(e)) => Command::Invalid(e),
        },
        _ => Command::Invalid(InputError::WrongTokenCount(tokens.len())),
    }
}

fn parse_single(token: &str) -> Command {
    match token.parse::<i64>() {
        Ok(n) if n > 0 => return Command::DayCount(n as u64),
        Ok(_) => return Command::Invalid(InputError::NonPositiveDayCount(token.to_string())),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => {
                return Command::Invalid(InputError::DayCountOutOfRange(token.to_string()));
            }
            IntErrorKind::NegOverflow => {
                return Command::Invalid(InputError::NonPositiveDayCount(token.to_string()));
            }
            _ => {}
        },
    }
    match parse_date(token) {
        Ok(date) => Command::SingleDate(date),
        Err(e) => Command::Invalid(e),
    }
}

/// Parse a date token, normalizing `/` separators to `-`.
pub fn parse_date(token: &str) -> Result<NaiveDate, InputError> {
    let normalized = token.replace('/', "-");
    NaiveDate::parse_from_str(&normalized, DATE_FORMAT)
        .or_else(|_| NaiveDate::parse_from_str(&normalized, ISO_DATE_FORMAT))
        .map_err(|_| InputError::MalformedDate(token.to_string()))
}
