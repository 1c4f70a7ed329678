//! Command execution and the interactive prompt loop.

use std::io::{self, BufRead, Write};

use tracing::{debug, info, warn};

use crate::calendar::{
    business_days, business_days_ahead, business_days_behind, diff, offset_dates,
};
use crate::command::parse_command;
use crate::error::{DiffDateError, InputError};
use crate::formatter::{
    FAREWELL, PROMPT, format_banner, format_difference_report, format_invalid_input,
    format_offset_report,
};
use crate::types::{Command, DateRange, DiffContext, DifferenceReport, OffsetReport};

/// Result of a successfully executed command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Report(Vec<String>),
    Quit,
}

/// Run one command against the context.
pub fn execute(ctx: &DiffContext, command: &Command) -> Result<Outcome, InputError> {
    let lines = match command {
        Command::Quit => return Ok(Outcome::Quit),
        Command::Invalid(err) => return Err(err.clone()),
        Command::DayCount(days) => format_offset_report(ctx, &offset_report(ctx, *days)?),
        Command::SingleDate(date) => {
            format_difference_report(ctx, &difference_report(ctx, ctx.today, *date, true))
        }
        Command::TwoDates(a, b) => {
            let range = DateRange::new(*a, *b);
            format_difference_report(
                ctx,
                &difference_report(ctx, range.earlier(), range.later(), false),
            )
        }
    };
    Ok(Outcome::Report(lines))
}

/// Compare two dates; business days are counted over the inclusive range.
pub fn difference_report(
    ctx: &DiffContext,
    first: chrono::NaiveDate,
    second: chrono::NaiveDate,
    first_is_today: bool,
) -> DifferenceReport {
    let difference = diff(first, second);
    let business_days = business_days(DateRange::new(first, second), &ctx.holidays);
    debug!(%first, %second, ?difference, business_days, "difference computed");

    DifferenceReport {
        first,
        second,
        first_is_today,
        difference,
        business_days,
    }
}

/// Project `days` around today; both business-day windows leave today out.
pub fn offset_report(ctx: &DiffContext, days: u64) -> Result<OffsetReport, InputError> {
    let (future, past) = offset_dates(ctx.today, days)?;
    let report = OffsetReport {
        today: ctx.today,
        days,
        future,
        past,
        business_days_ahead: business_days_ahead(ctx.today, future, &ctx.holidays),
        business_days_behind: business_days_behind(past, ctx.today, &ctx.holidays),
    };
    debug!(?report, "offset computed");
    Ok(report)
}

pub fn write_lines<W: Write>(out: &mut W, lines: &[String]) -> io::Result<()> {
    for line in lines {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

/// Process a single input line given on the command line.
pub fn run_once<W: Write>(
    ctx: &DiffContext,
    line: &str,
    out: &mut W,
) -> Result<(), DiffDateError> {
    let command = parse_command(line);
    debug!(?command, "parsed argument input");

    match execute(ctx, &command)? {
        Outcome::Quit => writeln!(out, "{}", FAREWELL)?,
        Outcome::Report(lines) => write_lines(out, &lines)?,
    }
    Ok(())
}

/// Prompt, read and execute lines until `q` or end of input.
///
/// Invalid lines are reported and the loop continues. A read failure ends the
/// session like end of input does.
pub fn run_interactive<R: BufRead, W: Write>(
    ctx: &DiffContext,
    mut input: R,
    out: &mut W,
    show_banner: bool,
) -> io::Result<()> {
    info!(today = %ctx.today, "interactive session started");
    if show_banner {
        write_lines(out, &format_banner(ctx))?;
        writeln!(out)?;
    }

    loop {
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        let mut line = String::new();
        match input.read_line(&mut line) {
            Ok(0) => {
                debug!("end of input");
                writeln!(out)?;
                return Ok(());
            }
            Ok(_) => {}
            Err(e) => {
                warn!(error = %e, "failed to read input, ending session");
                writeln!(out)?;
                return Ok(());
            }
        }

        let command = parse_command(&line);
        debug!(?command, "parsed prompt input");

        match execute(ctx, &command) {
            Ok(Outcome::Quit) => {
                info!("quit requested");
                writeln!(out, "{}", FAREWELL)?;
                return Ok(());
            }
            Ok(Outcome::Report(lines)) => write_lines(out, &lines)?,
            Err(err) => write_lines(out, &format_invalid_input(ctx, &err))?,
        }
        writeln!(out)?;
    }
}
