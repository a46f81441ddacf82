use chrono::{Datelike, NaiveDate};
use shared::Period;

const SHORT_MONTHS: [&str; 12] = [
    "ene", "feb", "mar", "abr", "may", "jun", "jul", "ago", "sept", "oct", "nov", "dic",
];

const MONTHS: [&str; 12] = [
    "Enero", "Febrero", "Marzo", "Abril", "Mayo", "Junio",
    "Julio", "Agosto", "Septiembre", "Octubre", "Noviembre", "Diciembre",
];

/// Today's date on the local calendar
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn to_iso(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Parse a YYYY-MM-DD string as a calendar date (no time zone involved)
pub fn parse_iso_date(date_str: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date_str.trim(), "%Y-%m-%d").ok()
}

/// Abbreviated month name, e.g. "ene" for 1
pub fn short_month_name(month: u32) -> &'static str {
    SHORT_MONTHS
        .get(month.wrapping_sub(1) as usize)
        .copied()
        .unwrap_or("ene")
}

/// Full month name, e.g. "Marzo" for 3
pub fn month_name(month: u32) -> &'static str {
    MONTHS
        .get(month.wrapping_sub(1) as usize)
        .copied()
        .unwrap_or("Enero")
}

/// Format a date for display (e.g., "5 mar 2025")
pub fn format_naive_date(date: NaiveDate) -> String {
    format!("{} {} {}", date.day(), short_month_name(date.month()), date.year())
}

/// Format a YYYY-MM-DD date string for display; unparseable input is returned as-is
pub fn format_date(date_str: &str) -> String {
    match parse_iso_date(date_str) {
        Some(date) => format_naive_date(date),
        None => date_str.to_string(),
    }
}

/// Label for the period selector (e.g., "Marzo 2025")
pub fn period_label(period: Period) -> String {
    format!("{} {}", month_name(period.month), period.year)
}
