use thiserror::Error;

/// Errors from the layers around the calculator: file loading, config, input checks.
/// The calculator itself cannot fail.
#[derive(Error, Debug)]
pub enum GpaError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Validation error: {message}")]
    Validation { message: String },
}

impl GpaError {
    pub fn config(message: impl Into<String>) -> Self {
        GpaError::Config {
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        GpaError::Validation {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, GpaError>;
