use thiserror::Error;

use crate::listing::FieldKey;

/// Error type that captures wizard, persistence and configuration failures.
#[derive(Debug, Error)]
pub enum WizardError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Field `{key}` expects {expected}")]
    FieldMismatch { key: FieldKey, expected: &'static str },
    #[error("Invalid listing: {0}")]
    Validation(String),
    #[error("Submission failed: {0}")]
    Submission(String),
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, WizardError>;

/// User-facing CLI error wrapper.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] WizardError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Readline(#[from] rustyline::error::ReadlineError),
    #[error(transparent)]
    Dialoguer(#[from] dialoguer::Error),
    #[error("Invalid input: {0}")]
    Input(String),
}
