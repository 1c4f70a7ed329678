//! Date arithmetic utility.
//!
//! Features:
//! - Normalized years/months/days difference between two dates
//! - Business-day counting that skips weekends and fixed holidays
//! - Dates N days ahead of and behind today
//! - One-shot arguments or an interactive prompt

pub mod args;
pub mod calendar;
pub mod command;
pub mod error;
pub mod formatter;
pub mod logging;
pub mod session;
pub mod types;
