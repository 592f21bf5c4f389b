//! Repository for form responses
//!
//! Responses are append-only: they are created via the submit path and
//! removed only as part of the owning form's cascade delete.

use crate::persistence::error::PersistenceError;
use crate::persistence::models::FormResponse;
use crate::persistence::pool::ConnectionPool;
use async_trait::async_trait;
use serde_json::Value;
use sqlx::Row;

/// Repository trait for response operations
#[async_trait]
pub trait ResponseRepository: Send + Sync {
    /// Persist a new response for a form. The caller is responsible for
    /// having verified that the form exists and the data passed validation.
    async fn create(&self, form_id: &str, data: &Value) -> Result<FormResponse, PersistenceError>;

    /// List all responses for a form, newest first
    async fn list_by_form(&self, form_id: &str) -> Result<Vec<FormResponse>, PersistenceError>;
}

/// SQLx-based implementation of ResponseRepository
pub struct SqlxResponseRepository {
    pool: ConnectionPool,
}

impl SqlxResponseRepository {
    pub fn new(pool: ConnectionPool) -> Self {
        Self { pool }
    }

    /// Parse a row into a FormResponse, decoding the JSON data column
    fn parse_row(row: &sqlx::any::AnyRow) -> Result<FormResponse, PersistenceError> {
        let data_str: String = row.try_get("data")?;
        let data: Value = serde_json::from_str(&data_str)?;

        Ok(FormResponse {
            id: row.try_get("id")?,
            form_id: row.try_get("form_id")?,
            data,
            created_at: row.try_get("created_at")?,
        })
    }
}

#[async_trait]
impl ResponseRepository for SqlxResponseRepository {
    async fn create(&self, form_id: &str, data: &Value) -> Result<FormResponse, PersistenceError> {
        let id = uuid::Uuid::new_v4().to_string();
        let now = chrono::Utc::now().to_rfc3339();
        let data_str = serde_json::to_string(data)?;

        sqlx::query(
            "INSERT INTO form_responses (id, form_id, data, created_at) VALUES (?, ?, ?, ?)",
        )
        .bind(&id)
        .bind(form_id)
        .bind(&data_str)
        .bind(&now)
        .execute(self.pool.pool())
        .await?;

        Ok(FormResponse {
            id,
            form_id: form_id.to_string(),
            data: data.clone(),
            created_at: now,
        })
    }

    async fn list_by_form(&self, form_id: &str) -> Result<Vec<FormResponse>, PersistenceError> {
        let rows =
            sqlx::query("SELECT * FROM form_responses WHERE form_id = ? ORDER BY created_at DESC")
                .bind(form_id)
                .fetch_all(self.pool.pool())
                .await?;

        let mut responses = Vec::new();
        for row in rows {
            responses.push(Self::parse_row(&row)?);
        }

        Ok(responses)
    }
}
