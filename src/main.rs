//! Date difference CLI application.
//!
//! # Usage
//! ```ignore
//! diffdate                         // Interactive prompt
//! diffdate 30                      // Today, 30 days ahead and back
//! diffdate 25-12-2026              // Today until a date
//! diffdate 01-01-2020 31-12-2020   // Two dates
//! ```

use std::io::{self, Write};

use chrono::Datelike;

use diffdate::args::Args;
use diffdate::error::DiffDateError;
use diffdate::formatter::format_holidays;
use diffdate::logging;
use diffdate::session::{run_interactive, run_once, write_lines};
use diffdate::types::DiffContext;

fn main() {
    let args = Args::parse();
    logging::init(args.verbose);

    if let Err(e) = run(&args) {
        eprintln!("diffdate: {}", e);
        std::process::exit(e.exit_code());
    }
}

fn run(args: &Args) -> Result<(), DiffDateError> {
    let ctx = DiffContext::new(args);
    let mut out = io::stdout().lock();

    if args.holidays {
        write_lines(&mut out, &format_holidays(&ctx, ctx.today.year()))?;
    } else if let Some(line) = args.input_line() {
        run_once(&ctx, &line, &mut out)?;
    } else {
        run_interactive(&ctx, io::stdin().lock(), &mut out, !args.no_banner)?;
    }

    out.flush()?;
    Ok(())
}
