use crate::error::CoreError;
use chrono::{Datelike, NaiveDate};
use std::fmt;
use std::str::FromStr;

pub const BIRTHDAY_FORMAT: &str = "%Y.%m.%d";

/// A birth date, written `YYYY.MM.DD` on input and output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Birthday(NaiveDate);

impl Birthday {
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }
}

impl FromStr for Birthday {
    type Err = CoreError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        if !has_birthday_shape(raw) {
            return Err(CoreError::InvalidDateFormat);
        }

        let year: i32 = parse_part(&raw[0..4])?;
        let month: u32 = parse_part(&raw[5..7])?;
        let day: u32 = parse_part(&raw[8..10])?;
        if year == 0 {
            return Err(CoreError::InvalidDateFormat);
        }

        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or(CoreError::InvalidDateFormat)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_birthday_date(self.0))
    }
}

pub fn format_birthday_date(date: NaiveDate) -> String {
    date.format(BIRTHDAY_FORMAT).to_string()
}

// 4-2-2 digit groups separated by periods; chrono's `%Y`/`%m` alone would
// accept signs and unpadded fields.
fn has_birthday_shape(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(idx, b)| match idx {
            4 | 7 => *b == b'.',
            _ => b.is_ascii_digit(),
        })
}

fn parse_part<T: FromStr>(part: &str) -> Result<T, CoreError> {
    part.parse().map_err(|_| CoreError::InvalidDateFormat)
}
