pub mod birthdays;

pub use birthdays::{
    is_leap_year, next_occurrence, observed_date, project_onto_year, upcoming_birthdays,
    validate_window_days, BirthdayWindow, LeapDayPolicy, DEFAULT_WINDOW_DAYS, MAX_WINDOW_DAYS,
};
