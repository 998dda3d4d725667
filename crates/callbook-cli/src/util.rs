use crate::error::invalid_input;
use anyhow::Result;
use callbook_core::rules::{validate_window_days, MAX_WINDOW_DAYS};
use chrono::{Local, NaiveDate};

pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn parse_today(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| invalid_input("invalid --today: expected YYYY-MM-DD"))
}

pub fn check_window_days(days: i64) -> Result<i64> {
    validate_window_days(days).map_err(|_| {
        invalid_input(format!(
            "invalid --window-days: expected 0..={MAX_WINDOW_DAYS}, got {days}"
        ))
    })
}

/// Splits a prompt line into a lowercased command and its arguments.
/// Blank lines yield `None`.
pub fn parse_input(line: &str) -> Option<(String, Vec<String>)> {
    let mut parts = line.split_whitespace();
    let command = parts.next()?.to_lowercase();
    let args = parts.map(str::to_string).collect();
    Some((command, args))
}
