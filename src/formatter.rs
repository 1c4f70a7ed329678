//! Report formatting with localized weekday names and color support.

use chrono::{Datelike, Locale, NaiveDate};
use unicode_width::UnicodeWidthStr;

use crate::error::InputError;
use crate::types::{
    COLOR_RED, COLOR_RESET, COLOR_SAND_YELLOW, COLOR_TEAL, CalendarDifference, DATE_FORMAT,
    DiffContext, DifferenceReport, OffsetReport, Unit,
};

pub const PROMPT: &str =
    "Insira uma data (DD-MM-AAAA), duas datas, um número de dias ou 'q' para sair: ";

pub const FAREWELL: &str = "Até logo!";

const USAGE_HINT: &str = "Insira uma data no formato DD-MM-AAAA, duas datas separadas por espaço \
ou um número inteiro maior ou igual a 1.";

const BANNER: [&str; 3] = [
    "    ,╔╦╗┬┌─┐┌─┐   ,╔╦╗┌─┐┌┬┐┌─┐   ,",
    "  ,'  ║║│├┤ ├┤  ,'  ║║├─┤ │ ├┤  ,' ",
    " '   ═╩╝┴└  └  '   ═╩╝┴ ┴ ┴ └─┘'   ",
];

/// Parse a locale name such as `pt_BR`, `pt_BR.UTF-8` or `de_DE@euro`.
pub fn resolve_locale(name: &str) -> Option<Locale> {
    name.split('.')
        .next()
        .unwrap_or(name)
        .split('@')
        .next()
        .unwrap_or(name)
        .parse()
        .ok()
}

/// Full weekday name for the locale.
///
/// Portuguese uses the complete `-feira` forms.
pub fn weekday_name(date: NaiveDate, locale: Locale) -> String {
    match locale {
        Locale::pt_BR | Locale::pt_PT => [
            "segunda-feira",
            "terça-feira",
            "quarta-feira",
            "quinta-feira",
            "sexta-feira",
            "sábado",
            "domingo",
        ][date.weekday().num_days_from_monday() as usize]
            .to_string(),
        _ => date.format_localized("%A", locale).to_string(),
    }
}

/// `DD-MM-YYYY (weekday)`.
pub fn format_date(date: NaiveDate, locale: Locale) -> String {
    format!(
        "{} ({})",
        date.format(DATE_FORMAT),
        weekday_name(date, locale)
    )
}

/// Magnitude with its unit; only 1 takes the singular.
pub fn pluralize(count: u64, unit: Unit) -> String {
    let name = if count == 1 {
        unit.singular()
    } else {
        unit.plural()
    };
    format!("{} {}", count, name)
}

/// Years, months and days joined by commas, zero units left out.
pub fn format_breakdown(difference: &CalendarDifference) -> String {
    if difference.is_zero() {
        return "As datas são idênticas.".to_string();
    }

    [
        (difference.years, Unit::Year),
        (difference.months, Unit::Month),
        (difference.days, Unit::Day),
    ]
    .iter()
    .filter(|(value, _)| *value != 0)
    .map(|&(value, unit)| pluralize(value as u64, unit))
    .collect::<Vec<_>>()
    .join(", ")
}

/// Title line, optionally colored.
fn format_title(ctx: &DiffContext, title: &str) -> String {
    if ctx.color {
        format!("{}{}{}", COLOR_TEAL, title, COLOR_RESET)
    } else {
        title.to_string()
    }
}

/// Horizontal rule as wide as the title on screen.
fn rule(title: &str) -> String {
    "─".repeat(title.width())
}

pub fn format_difference_report(ctx: &DiffContext, report: &DifferenceReport) -> Vec<String> {
    let first = format_date(report.first, ctx.locale);
    let second = format_date(report.second, ctx.locale);
    let title = if report.first_is_today {
        format!("Diferença entre hoje {} e {}:", first, second)
    } else {
        format!("Diferença entre {} e {}:", first, second)
    };

    vec![
        format_title(ctx, &title),
        rule(&title),
        format!("  {}", format_breakdown(&report.difference)),
        format!(
            "  Total: {}",
            pluralize(report.difference.total_days, Unit::Day)
        ),
        format!("  Dias úteis: {}", report.business_days),
    ]
}

pub fn format_offset_report(ctx: &DiffContext, report: &OffsetReport) -> Vec<String> {
    let span = pluralize(report.days, Unit::Day);
    vec![
        format_title(
            ctx,
            &format!("Hoje: {}", format_date(report.today, ctx.locale)),
        ),
        format!(
            "Daqui a {}: {}",
            span,
            format_date(report.future, ctx.locale)
        ),
        format!("Há {}: {}", span, format_date(report.past, ctx.locale)),
        format!(
            "Dias úteis até {} (sem contar hoje): {}",
            report.future.format(DATE_FORMAT),
            report.business_days_ahead
        ),
        format!(
            "Dias úteis desde {} (sem contar hoje): {}",
            report.past.format(DATE_FORMAT),
            report.business_days_behind
        ),
    ]
}

pub fn format_invalid_input(ctx: &DiffContext, err: &InputError) -> Vec<String> {
    let message = format!("Entrada inválida: {}.", err);
    let message = if ctx.color {
        format!("{}{}{}", COLOR_RED, message, COLOR_RESET)
    } else {
        message
    };
    vec![message, USAGE_HINT.to_string()]
}

/// Fixed holidays of `year` with their weekdays; weekend ones are marked.
pub fn format_holidays(ctx: &DiffContext, year: i32) -> Vec<String> {
    let mut lines = vec![format_title(ctx, &format!("Feriados fixos em {}:", year))];
    if ctx.holidays.is_empty() {
        lines.push("  nenhum feriado cadastrado".to_string());
    }
    for (month, day) in ctx.holidays.iter() {
        let Some(date) = NaiveDate::from_ymd_opt(year, month, day) else {
            continue;
        };
        let mut line = format!("  {}", format_date(date, ctx.locale));
        if crate::calendar::is_weekend(date.weekday()) {
            line.push_str(" - fim de semana");
        }
        lines.push(line);
    }
    lines
}

pub fn format_banner(ctx: &DiffContext) -> Vec<String> {
    BANNER
        .iter()
        .map(|line| {
            if ctx.color {
                format!("{}{}{}", COLOR_SAND_YELLOW, line, COLOR_RESET)
            } else {
                line.to_string()
            }
        })
        .collect()
}
