use crate::error::CommandError;
use crate::util::local_today;
use callbook_core::rules::BirthdayWindow;
use callbook_core::Directory;
use chrono::NaiveDate;
use tracing::debug;

pub mod birthdays;
pub mod contacts;

pub type CommandResult = Result<String, CommandError>;

pub struct Context {
    pub directory: Directory,
    pub window: BirthdayWindow,
    /// Pinned reference date; the local date is used when unset.
    pub today: Option<NaiveDate>,
}

impl Context {
    pub fn new(window: BirthdayWindow, today: Option<NaiveDate>) -> Self {
        Self {
            directory: Directory::new(),
            window,
            today,
        }
    }

    pub fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(local_today)
    }
}

/// Collapses a handler outcome into the line printed at the prompt.
pub fn respond(command: &str, result: CommandResult) -> String {
    match result {
        Ok(message) => message,
        Err(err) => {
            debug!(command, error = ?err, "command failed");
            err.user_message()
        }
    }
}

pub(crate) fn required_arg(args: &[String], index: usize) -> Result<&str, CommandError> {
    args.get(index)
        .map(String::as_str)
        .ok_or(CommandError::MissingArguments)
}
