//! Presentation helpers for the chat and the detail modal.
//!
//! All user-facing text is Spanish (Peru locale conventions).

use std::borrow::Cow;
use std::fmt;

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, TimeZone};

/// Placeholder for fields the backend left empty
pub const UNSPECIFIED: &str = "No especificado";

const MONTHS: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

/// `HH:MM` in whatever zone `ts` carries.
pub fn format_time<Tz: TimeZone>(ts: &DateTime<Tz>) -> String
where
    Tz::Offset: fmt::Display,
{
    ts.format("%H:%M").to_string()
}

/// Long Spanish date (`15 de marzo de 2025`).
///
/// Empty input gives [`UNSPECIFIED`]; anything that doesn't parse as a date
/// is shown as-is.
pub fn format_long_date(raw: &str) -> String {
    let raw = raw.trim();
    if raw.is_empty() {
        return UNSPECIFIED.to_string();
    }
    match parse_date(raw) {
        Some(date) => format!(
            "{} de {} de {}",
            date.day(),
            MONTHS[date.month0() as usize],
            date.year()
        ),
        None => raw.to_string(),
    }
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    DateTime::parse_from_rfc3339(raw)
        .map(|d| d.date_naive())
        .ok()
        .or_else(|| {
            ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"]
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
                .map(|dt| dt.date())
        })
        .or_else(|| {
            ["%Y-%m-%d", "%d/%m/%Y"]
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
        })
}

/// Non-empty, trimmed lines of a requirements block
pub fn requirement_lines(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

/// Career name without the `PREGRADO/` category prefix
pub fn major_tag(major: &str) -> Cow<'_, str> {
    if major.contains("PREGRADO/") {
        Cow::Owned(major.replacen("PREGRADO/", "", 1))
    } else {
        Cow::Borrowed(major)
    }
}

pub fn or_unspecified(value: &str) -> &str {
    or_default(value, UNSPECIFIED)
}

pub fn or_default<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.trim().is_empty() {
        fallback
    } else {
        value
    }
}

/// `n/max caracteres`, counted in characters
pub fn char_counter(input: &str, max: usize) -> String {
    format!("{}/{} caracteres", input.chars().count(), max)
}

/// First `max_chars` characters of `text`, with an ellipsis when cut.
pub fn preview(text: &str, max_chars: usize) -> Cow<'_, str> {
    match text.char_indices().nth(max_chars) {
        None => Cow::Borrowed(text),
        Some((idx, _)) => Cow::Owned(format!("{}…", text[..idx].trim_end())),
    }
}
