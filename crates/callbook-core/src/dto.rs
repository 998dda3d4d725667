use crate::domain::Name;
use chrono::NaiveDate;

/// One row of the upcoming-birthdays query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    pub name: Name,
    /// Birthday in the current cycle, moved off the weekend onto Monday.
    pub observed_date: NaiveDate,
    pub days_until: i64,
}
