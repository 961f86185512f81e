//! Custom error types for the booking application
//!
//! Library code returns the crate `Result<T>`; the binary wraps it in
//! `anyhow` at the top level.

use thiserror::Error;

use crate::navigation::Screen;

/// Main error type for the booking application
#[derive(Error, Debug)]
pub enum FutsalError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Rejected screen transitions
    #[error("Navigation error: {0}")]
    Navigation(#[from] NavigationError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Terminal/UI errors
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// System clipboard errors
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("{0}")]
    Other(String),
}

/// Configuration-related errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not determine the configuration directory")]
    DirectoryUnavailable,

    #[error("Failed to load configuration file: {0}")]
    LoadFailed(String),

    #[error("Failed to save configuration file: {0}")]
    SaveFailed(String),

    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}

/// Errors raised when a screen transition is refused
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavigationError {
    #[error("Cannot go from '{}' to '{}'", from.id(), to.id())]
    IllegalTransition { from: Screen, to: Screen },

    #[error("Booking is incomplete for '{}': missing {}", screen.id(), missing.join(", "))]
    IncompleteDraft {
        screen: Screen,
        missing: Vec<&'static str>,
    },
}

/// Validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Unknown venue: {0}")]
    UnknownVenue(u32),

    #[error("Unknown time slot: {0}")]
    UnknownSlot(String),

    #[error("Time slot {0} is already booked")]
    SlotUnavailable(String),

    #[error("{0} is already booked")]
    CourtUnavailable(String),

    #[error("Invalid duration: {0}. Must be 1, 2 or 3 hours")]
    InvalidDuration(u32),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Password confirmation does not match")]
    PasswordMismatch,

    #[error("Terms and conditions must be accepted")]
    TermsNotAccepted,
}

/// Result type alias for the booking application
pub type Result<T> = std::result::Result<T, FutsalError>;

impl From<anyhow::Error> for FutsalError {
    fn from(err: anyhow::Error) -> Self {
        FutsalError::Other(err.to_string())
    }
}

impl From<arboard::Error> for FutsalError {
    fn from(err: arboard::Error) -> Self {
        FutsalError::Clipboard(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FutsalError::Validation(ValidationError::InvalidDuration(5));
        assert!(err.to_string().contains("Must be 1, 2 or 3 hours"));

        let err = FutsalError::Config(ConfigError::DirectoryUnavailable);
        assert!(err.to_string().contains("configuration directory"));
    }

    #[test]
    fn test_navigation_error_names_screens() {
        let err = NavigationError::IllegalTransition {
            from: Screen::Welcome,
            to: Screen::Pembayaran,
        };
        assert_eq!(err.to_string(), "Cannot go from 'welcome' to 'pembayaran'");

        let err = NavigationError::IncompleteDraft {
            screen: Screen::ReviewBooking,
            missing: vec!["lapangan", "price"],
        };
        assert!(err.to_string().ends_with("missing lapangan, price"));
    }

    #[test]
    fn test_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: FutsalError = io_err.into();
        assert!(matches!(err, FutsalError::Io(_)));

        let err: FutsalError = NavigationError::IllegalTransition {
            from: Screen::Home,
            to: Screen::ETicket,
        }
        .into();
        assert!(matches!(err, FutsalError::Navigation(_)));
    }
}
