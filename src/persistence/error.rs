//! Persistence layer error types

use thiserror::Error;

/// Errors that can occur in the persistence layer
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// Database connection error
    #[error("Database connection error: {0}")]
    Connection(String),

    /// Record not found
    #[error("{entity_type} not found: '{identifier}'")]
    NotFound {
        entity_type: String,
        identifier: String,
    },

    /// Migration error
    #[error("Migration error: {0}")]
    Migration(String),

    /// Database error from SQLx
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// JSON error decoding a stored column
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl PersistenceError {
    /// Shorthand for a missing form record
    pub fn form_not_found(id: &str) -> Self {
        Self::NotFound {
            entity_type: "Form".to_string(),
            identifier: id.to_string(),
        }
    }

    /// Convert to HTTP status code for API responses
    pub fn status_code(&self) -> axum::http::StatusCode {
        use axum::http::StatusCode;
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
