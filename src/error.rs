//! Error Handling
//!
//! Error types shared by the store, the validation layer and the HTTP boundary.

use thiserror::Error;

/// Result type alias for salary_stats operations
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// One or more field-level validation failures, in check order
    #[error("validation failed: {}", .0.join(", "))]
    Validation(Vec<String>),

    #[error("An employee named {name} was not found")]
    NotFound { name: String },

    #[error("missing or invalid authorization")]
    Unauthorized,

    #[error("malformed request body: {0}")]
    MalformedBody(String),

    #[error("failed to load dataset {path}: {message}")]
    Dataset { path: String, message: String },

    #[error("configuration error: {0}")]
    Config(String),
}

impl Error {
    pub fn not_found(name: impl Into<String>) -> Self {
        Error::NotFound { name: name.into() }
    }

    pub fn dataset(path: impl Into<String>, message: impl ToString) -> Self {
        Error::Dataset {
            path: path.into(),
            message: message.to_string(),
        }
    }
}
