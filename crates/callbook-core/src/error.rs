use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("contact name is required")]
    EmptyName,
    #[error("Phone number must contain 10 digits.")]
    InvalidPhone,
    #[error("Invalid date format. Use YYYY.MM.DD")]
    InvalidDateFormat,
    #[error("invalid birthday window days: {0}")]
    InvalidWindowDays(i64),
}
