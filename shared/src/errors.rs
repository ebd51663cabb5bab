//! Shared error types for the FAQ generation system

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SharedError {
    #[error("Deserialization failed: {message}")]
    DeserializationError { message: String },

    #[error("Invalid configuration: {field} = {value}")]
    InvalidConfig { field: String, value: String },
}

impl From<serde_json::Error> for SharedError {
    fn from(err: serde_json::Error) -> Self {
        SharedError::DeserializationError { message: err.to_string() }
    }
}

pub type SharedResult<T> = Result<T, SharedError>;

/// Interpret an environment flag the way shell users expect (`1`, `true`, `yes`, `y`, `on`)
pub fn truthy_flag(value: &str) -> bool {
    matches!(value.trim().to_lowercase().as_str(), "1" | "true" | "yes" | "y" | "on")
}
