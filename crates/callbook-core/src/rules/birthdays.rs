use crate::domain::{Birthday, Record};
use crate::dto::UpcomingBirthday;
use crate::error::CoreError;
use chrono::{Datelike, Days, NaiveDate, Weekday};

pub const DEFAULT_WINDOW_DAYS: i64 = 7;
pub const MAX_WINDOW_DAYS: i64 = 365;

/// Where a Feb 29 birthday lands in a year without one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LeapDayPolicy {
    #[default]
    Feb28,
    Mar1,
}

impl LeapDayPolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            LeapDayPolicy::Feb28 => "feb28",
            LeapDayPolicy::Mar1 => "mar1",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthdayWindow {
    pub days: i64,
    pub leap_day: LeapDayPolicy,
}

impl Default for BirthdayWindow {
    fn default() -> Self {
        Self {
            days: DEFAULT_WINDOW_DAYS,
            leap_day: LeapDayPolicy::default(),
        }
    }
}

impl BirthdayWindow {
    pub fn new(days: i64, leap_day: LeapDayPolicy) -> Result<Self, CoreError> {
        Ok(Self {
            days: validate_window_days(days)?,
            leap_day,
        })
    }
}

pub fn validate_window_days(days: i64) -> Result<i64, CoreError> {
    if !(0..=MAX_WINDOW_DAYS).contains(&days) {
        return Err(CoreError::InvalidWindowDays(days));
    }
    Ok(days)
}

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Places `month`/`day` in `year`. Only Feb 29 can miss, and it follows
/// `policy`. `None` means `year` is outside chrono's supported range.
pub fn project_onto_year(
    month: u32,
    day: u32,
    year: i32,
    policy: LeapDayPolicy,
) -> Option<NaiveDate> {
    if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
        return Some(date);
    }
    if month == 2 && day == 29 && !is_leap_year(year) {
        return match policy {
            LeapDayPolicy::Feb28 => NaiveDate::from_ymd_opt(year, 2, 28),
            LeapDayPolicy::Mar1 => NaiveDate::from_ymd_opt(year, 3, 1),
        };
    }
    None
}

/// First occurrence of the birthday on or after `today`, before any
/// weekend shift.
pub fn next_occurrence(
    birthday: Birthday,
    today: NaiveDate,
    policy: LeapDayPolicy,
) -> Option<NaiveDate> {
    let this_year = project_onto_year(birthday.month(), birthday.day(), today.year(), policy)?;
    if this_year < today {
        return project_onto_year(birthday.month(), birthday.day(), today.year() + 1, policy);
    }
    Some(this_year)
}

/// Saturday and Sunday roll forward to Monday.
pub fn observed_date(date: NaiveDate) -> Option<NaiveDate> {
    let shift = match date.weekday() {
        Weekday::Sat => 2,
        Weekday::Sun => 1,
        _ => 0,
    };
    date.checked_add_days(Days::new(shift))
}

/// Birthdays observed within `[today, today + window.days]`, ordered by
/// observed date. Records sharing a date keep the order they were given in.
pub fn upcoming_birthdays<'a, I>(
    records: I,
    today: NaiveDate,
    window: BirthdayWindow,
) -> Vec<UpcomingBirthday>
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut items = Vec::new();
    for record in records {
        let Some(birthday) = record.birthday() else {
            continue;
        };
        let Some(observed) =
            next_occurrence(birthday, today, window.leap_day).and_then(observed_date)
        else {
            continue;
        };

        let days_until = observed.signed_duration_since(today).num_days();
        if (0..=window.days).contains(&days_until) {
            items.push(UpcomingBirthday {
                name: record.name().clone(),
                observed_date: observed,
                days_until,
            });
        }
    }

    items.sort_by_key(|item| item.observed_date);
    items
}
