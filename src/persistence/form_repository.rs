//! Repository for form records

use crate::persistence::error::PersistenceError;
use crate::persistence::models::{Form, FormInput};
use crate::persistence::pool::ConnectionPool;
use async_trait::async_trait;
use sqlx::Row;

/// Repository trait for form CRUD operations
#[async_trait]
pub trait FormRepository: Send + Sync {
    /// List all forms, newest first
    async fn list(&self) -> Result<Vec<Form>, PersistenceError>;

    /// Create a new form with a generated id and timestamps
    async fn create(&self, input: &FormInput) -> Result<Form, PersistenceError>;

    /// Get a form by id
    async fn get(&self, id: &str) -> Result<Form, PersistenceError>;

    /// Replace a form's title, description and schema
    async fn update(&self, id: &str, input: &FormInput) -> Result<Form, PersistenceError>;

    /// Delete a form and all of its responses as one atomic unit
    async fn delete(&self, id: &str) -> Result<(), PersistenceError>;
}

/// SQLx-based implementation of FormRepository
pub struct SqlxFormRepository {
    pool: ConnectionPool,
}

impl SqlxFormRepository {
    pub fn new(pool: ConnectionPool) -> Self {
        Self { pool }
    }

    /// Parse a row into a Form, decoding the JSON schema column
    fn parse_row(row: &sqlx::any::AnyRow) -> Result<Form, PersistenceError> {
        let schema_str: String = row.try_get("schema")?;
        let schema: Vec<serde_json::Value> = serde_json::from_str(&schema_str)?;

        Ok(Form {
            id: row.try_get("id")?,
            title: row.try_get("title")?,
            description: row.try_get("description")?,
            schema,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }
}

#[async_trait]
impl FormRepository for SqlxFormRepository {
    async fn list(&self) -> Result<Vec<Form>, PersistenceError> {
        let rows = sqlx::query("SELECT * FROM forms ORDER BY created_at DESC")
            .fetch_all(self.pool.pool())
            .await?;

        let mut forms = Vec::new();
        for row in rows {
            forms.push(Self::parse_row(&row)?);
        }

        Ok(forms)
    }

    async fn create(&self, input: &FormInput) -> Result<Form, PersistenceError> {
        let id = uuid::Uuid::new_v4().to_string();
        let now = chrono::Utc::now().to_rfc3339();
        let schema_str = serde_json::to_string(&input.schema)?;

        sqlx::query(
            "INSERT INTO forms (id, title, description, schema, created_at, updated_at) VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(&id)
        .bind(&input.title)
        .bind(&input.description)
        .bind(&schema_str)
        .bind(&now)
        .bind(&now)
        .execute(self.pool.pool())
        .await?;

        Ok(Form {
            id,
            title: input.title.clone(),
            description: input.description.clone(),
            schema: input.schema.clone(),
            created_at: now.clone(),
            updated_at: now,
        })
    }

    async fn get(&self, id: &str) -> Result<Form, PersistenceError> {
        let row = sqlx::query("SELECT * FROM forms WHERE id = ?")
            .bind(id)
            .fetch_optional(self.pool.pool())
            .await?;

        match row {
            Some(row) => Self::parse_row(&row),
            None => Err(PersistenceError::form_not_found(id)),
        }
    }

    async fn update(&self, id: &str, input: &FormInput) -> Result<Form, PersistenceError> {
        let now = chrono::Utc::now().to_rfc3339();
        let schema_str = serde_json::to_string(&input.schema)?;

        let result = sqlx::query(
            "UPDATE forms SET title = ?, description = ?, schema = ?, updated_at = ? WHERE id = ?",
        )
        .bind(&input.title)
        .bind(&input.description)
        .bind(&schema_str)
        .bind(&now)
        .bind(id)
        .execute(self.pool.pool())
        .await?;

        if result.rows_affected() == 0 {
            return Err(PersistenceError::form_not_found(id));
        }

        self.get(id).await
    }

    async fn delete(&self, id: &str) -> Result<(), PersistenceError> {
        // Single transaction so an interrupted delete cannot orphan responses
        let mut tx = self.pool.pool().begin().await?;

        sqlx::query("DELETE FROM form_responses WHERE form_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM forms WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            tx.rollback().await?;
            return Err(PersistenceError::form_not_found(id));
        }

        tx.commit().await?;
        Ok(())
    }
}
