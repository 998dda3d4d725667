use anyhow::Error;
use callbook_config::ConfigError;
use callbook_core::CoreError;
use std::process::ExitCode;
use thiserror::Error as ThisError;

pub const EXIT_FAILURE: u8 = 1;
pub const EXIT_INVALID_INPUT: u8 = 3;

#[derive(Debug, ThisError)]
pub enum CliError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Failures a command handler reports back to the prompt. The display text is
/// exactly what the user sees.
#[derive(Debug, ThisError, PartialEq, Eq)]
pub enum CommandError {
    #[error("Phone number must contain 10 digits.")]
    InvalidPhone,
    #[error("Invalid date format. Use YYYY.MM.DD")]
    InvalidDateFormat,
    #[error("Contact not found.")]
    ContactNotFound,
    #[error("Missing required arguments.")]
    MissingArguments,
    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}

impl CommandError {
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}

impl From<CoreError> for CommandError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::InvalidPhone => CommandError::InvalidPhone,
            CoreError::InvalidDateFormat => CommandError::InvalidDateFormat,
            other => CommandError::Unexpected(other.to_string()),
        }
    }
}

pub fn invalid_input(message: impl Into<String>) -> Error {
    CliError::InvalidInput(message.into()).into()
}

pub fn report_error(err: &Error, verbose: bool) {
    if verbose {
        eprintln!("error: {:#}", err);
    } else {
        eprintln!("error: {}", err);
    }
}

pub fn exit_code_for(err: &Error) -> ExitCode {
    for cause in err.chain() {
        if cause.downcast_ref::<CliError>().is_some() {
            return ExitCode::from(EXIT_INVALID_INPUT);
        }
        if let Some(config_err) = cause.downcast_ref::<ConfigError>() {
            return ExitCode::from(config_exit_code(config_err));
        }
    }
    ExitCode::from(EXIT_FAILURE)
}

fn config_exit_code(err: &ConfigError) -> u8 {
    match err {
        ConfigError::MissingHomeDir => EXIT_FAILURE,
        ConfigError::InvalidConfigPath(_)
        | ConfigError::MissingConfigFile(_)
        | ConfigError::InvalidWindowDays(_)
        | ConfigError::Read { .. }
        | ConfigError::Parse { .. } => EXIT_INVALID_INPUT,
    }
}

#[cfg(test)]
mod tests {
    use super::{invalid_input, CommandError};
    use callbook_core::CoreError;

    #[test]
    fn core_errors_map_to_user_messages() {
        assert_eq!(
            CommandError::from(CoreError::InvalidPhone).user_message(),
            "Phone number must contain 10 digits."
        );
        assert_eq!(
            CommandError::from(CoreError::InvalidDateFormat).user_message(),
            "Invalid date format. Use YYYY.MM.DD"
        );
        assert_eq!(
            CommandError::from(CoreError::EmptyName).user_message(),
            "An unexpected error occurred: contact name is required"
        );
    }

    #[test]
    fn lookup_and_arity_messages() {
        assert_eq!(
            CommandError::ContactNotFound.user_message(),
            "Contact not found."
        );
        assert_eq!(
            CommandError::MissingArguments.user_message(),
            "Missing required arguments."
        );
    }

    #[test]
    fn invalid_input_wraps_cli_error() {
        let err = invalid_input("bad date");
        assert_eq!(err.to_string(), "invalid input: bad date");
    }
}
