use thiserror::Error;

use crate::config::Settings;
use crate::persistence::DatabaseBackend;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}

pub struct ConfigValidator;

impl ConfigValidator {
    pub fn validate(settings: &Settings) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if settings.server.host.is_empty() {
            errors.push(ValidationError::MissingField("server.host".to_string()));
        }

        if settings.server.port == 0 {
            errors.push(ValidationError::InvalidValue {
                field: "server.port".to_string(),
                reason: "Port must be greater than 0".to_string(),
            });
        }

        if settings.persistence.url.is_empty() {
            errors.push(ValidationError::MissingField(
                "persistence.url".to_string(),
            ));
        } else if let Err(e) = DatabaseBackend::from_url(&settings.persistence.url) {
            errors.push(ValidationError::InvalidValue {
                field: "persistence.url".to_string(),
                reason: e.to_string(),
            });
        }

        if settings.persistence.max_connections == 0 {
            errors.push(ValidationError::InvalidValue {
                field: "persistence.max_connections".to_string(),
                reason: "Pool size must be greater than 0".to_string(),
            });
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
