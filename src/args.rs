//! Command-line argument parsing using clap.
//!
//! Input words are joined into a single line: `diffdate 01-01-2020 31-12-2020`
//! is the same as typing `01-01-2020 31-12-2020` at the prompt.

use clap::{ArgAction, Parser, ValueHint};
use std::io::IsTerminal;
use tracing::{debug, warn};

use crate::formatter::resolve_locale;
use crate::types::{DEFAULT_LOCALE, DiffContext, HolidaySet, ISO_DATE_FORMAT, TEST_TIME_VAR};

#[derive(Parser, Debug)]
#[command(name = "diffdate")]
#[command(about = "Calculates date differences, business days and day offsets", long_about = None)]
#[command(version)]
#[command(after_help = HELP_MESSAGE)]
pub struct Args {
    /// Day count, one date or two dates; starts the interactive prompt when omitted.
    #[arg(value_name = "input", num_args = 0.., value_hint = ValueHint::Other)]
    pub input: Vec<String>,

    /// Locale for weekday names.
    #[arg(
        long,
        default_value = DEFAULT_LOCALE,
        help_heading = "Output options",
        value_name = "name"
    )]
    pub locale: String,

    /// Disable colorized output.
    #[arg(long, help_heading = "Output options")]
    pub no_color: bool,

    /// Do not print the banner before the interactive prompt.
    #[arg(long, help_heading = "Output options")]
    pub no_banner: bool,

    /// List the fixed holidays of the current year and exit.
    #[arg(short = 'H', long = "holidays", help_heading = "Display options")]
    pub holidays: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(
        short = 'v',
        long = "verbose",
        action = ArgAction::Count,
        help_heading = "Output options"
    )]
    pub verbose: u8,
}

/// Help message displayed with --help.
const HELP_MESSAGE: &str = "Input forms:
  N                        Dates N days ahead of and behind today
  DD-MM-YYYY               Difference between today and the date
  DD-MM-YYYY DD-MM-YYYY    Difference between two dates
  q                        Quit the interactive prompt

Dates may also be written DD/MM/YYYY or YYYY-MM-DD.
Business days exclude weekends and fixed national holidays.

Examples:
  diffdate                         Start the interactive prompt
  diffdate 30                      Today, 30 days ahead and 30 days back
  diffdate 25-12-2026              From today until Christmas
  diffdate 01-01-2020 31-12-2020   Difference between two dates
  diffdate -H                      List the fixed holidays";

impl Args {
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Positional words as one input line, or `None` for interactive mode.
    pub fn input_line(&self) -> Option<String> {
        (!self.input.is_empty()).then(|| self.input.join(" "))
    }
}

impl DiffContext {
    pub fn new(args: &Args) -> Self {
        let today = get_today_date();

        let locale = resolve_locale(&args.locale).unwrap_or_else(|| {
            warn!(
                locale = %args.locale,
                "locale unavailable, falling back to default weekday names"
            );
            chrono::Locale::POSIX
        });

        let color = !args.no_color && std::io::stdout().is_terminal();

        debug!(%today, ?locale, color, "context ready");

        DiffContext {
            today,
            locale,
            holidays: HolidaySet::default(),
            color,
        }
    }
}

/// Get today's date, respecting DIFFDATE_TEST_TIME environment variable for testing.
pub fn get_today_date() -> chrono::NaiveDate {
    if let Ok(test_time) = std::env::var(TEST_TIME_VAR)
        && let Ok(date) = chrono::NaiveDate::parse_from_str(&test_time, ISO_DATE_FORMAT)
    {
        return date;
    }
    chrono::Local::now().date_naive()
}
