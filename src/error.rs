use miette::{Diagnostic, Result};
use thiserror::Error;

/// Main error type for the application
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("Environment error: {0}")]
    #[diagnostic(code(crm_autopilot::environment))]
    Environment(String),

    #[error("Configuration error: {0}")]
    #[diagnostic(code(crm_autopilot::config))]
    Config(String),

    #[error("Google auth error: {0}")]
    #[diagnostic(code(crm_autopilot::google_auth))]
    GoogleAuth(String),

    #[error("Google Calendar API error: {0}")]
    #[diagnostic(code(crm_autopilot::google_calendar))]
    GoogleCalendar(String),

    #[error("Google Sheets API error: {0}")]
    #[diagnostic(code(crm_autopilot::google_sheets))]
    GoogleSheets(String),

    #[error("Transcript provider error: {0}")]
    #[diagnostic(code(crm_autopilot::transcript))]
    Transcript(String),

    #[error("Summarizer error: {0}")]
    #[diagnostic(code(crm_autopilot::summarizer))]
    Summarizer(String),

    #[error(transparent)]
    #[diagnostic(code(crm_autopilot::io))]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    #[diagnostic(code(crm_autopilot::serialization))]
    Serialization(String),

    #[error("Other error: {0}")]
    #[diagnostic(code(crm_autopilot::other))]
    Other(String),
}

// Implement From for JSON serialization errors
impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

/// Type alias for Result with our Error type
pub type SyncResult<T> = Result<T, Error>;

/// Helper to create environment errors
pub fn env_error(var: &str) -> Error {
    Error::Environment(format!("Missing environment variable: {}", var))
}

/// Helper to create configuration errors
pub fn config_error(message: &str) -> Error {
    Error::Config(message.to_string())
}

/// Helper to create Google auth errors
pub fn google_auth_error(message: &str) -> Error {
    Error::GoogleAuth(message.to_string())
}

/// Helper to create Google Calendar errors
pub fn google_calendar_error(message: &str) -> Error {
    Error::GoogleCalendar(message.to_string())
}

/// Helper to create Google Sheets errors
pub fn google_sheets_error(message: &str) -> Error {
    Error::GoogleSheets(message.to_string())
}

/// Helper to create transcript provider errors
pub fn transcript_error(message: &str) -> Error {
    Error::Transcript(message.to_string())
}

/// Helper to create summarizer errors
pub fn summarizer_error(message: &str) -> Error {
    Error::Summarizer(message.to_string())
}

/// Helper to create other errors
#[allow(dead_code)]
pub fn other_error(message: &str) -> Error {
    Error::Other(message.to_string())
}
