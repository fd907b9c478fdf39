//! Error types for the address book.
//!
//! Domain validation failures live in [`crate::domain::ValidationError`];
//! this module holds the errors raised by records, configuration and the shell.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors returned by phone mutations on a [`crate::models::Record`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// The candidate phone failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No phone with the given value exists on the record
    #[error("Phone not found: {0}")]
    PhoneNotFound(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Errors produced while parsing or executing a shell command.
#[derive(Error, Debug)]
pub enum CommandError {
    /// The line is not a valid command; clap's message already starts with "error:"
    #[error("{}", .0.render().to_string().trim_end())]
    Parse(#[from] clap::Error),

    /// The input line is not valid UTF-8
    #[error("Input is not valid UTF-8")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    /// No record exists under the given name
    #[error("Record not found: {0}")]
    RecordNotFound(String),

    /// A name or phone argument failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A phone mutation on an existing record failed
    #[error(transparent)]
    Record(#[from] RecordError),

    /// Rendering the book as JSON failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results with RecordError
pub type RecordResult<T> = Result<T, RecordError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RecordError::PhoneNotFound("1234567890".to_string());
        assert_eq!(err.to_string(), "Phone not found: 1234567890");

        let err = RecordError::from(ValidationError::InvalidPhone("1".to_string()));
        assert_eq!(err.to_string(), "The phone should contain 10 digits");

        let err = CommandError::RecordNotFound("Jane".to_string());
        assert_eq!(err.to_string(), "Record not found: Jane");

        let err = ConfigError::InvalidValue {
            var: "ADDRESS_BOOK_JSON_PRETTY".to_string(),
            reason: "Must be true or false".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value for ADDRESS_BOOK_JSON_PRETTY: Must be true or false"
        );
    }

    #[test]
    fn test_command_error_wraps_record_error() {
        let err: CommandError = RecordError::from(ValidationError::EmptyName).into();
        assert_eq!(err.to_string(), "Name can't be empty");
    }
}
