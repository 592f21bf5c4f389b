//! Database models for the persistence layer
//!
//! The `schema` and `data` columns hold JSON text and are decoded into
//! structured values at the store boundary, so callers never see raw strings.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A stored form: a named schema describing expected submission fields
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Form {
    /// Unique identifier (UUID), server-assigned and immutable
    pub id: String,
    /// Form title, non-empty, at most 255 characters
    pub title: String,
    /// Optional free-text description
    pub description: Option<String>,
    /// Ordered field descriptors; each is a JSON mapping with a field-name
    /// key and an optional boolean "required" marker
    pub schema: Vec<Value>,
    /// Creation timestamp (RFC3339)
    pub created_at: String,
    /// Last update timestamp (RFC3339)
    pub updated_at: String,
}

/// One stored submission of data against a specific form
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormResponse {
    /// Unique identifier (UUID)
    pub id: String,
    /// Owning form id; responses are deleted when the form is deleted
    pub form_id: String,
    /// The full submitted payload, stored verbatim
    pub data: Value,
    /// Creation timestamp (RFC3339)
    pub created_at: String,
}

/// Mutable form fields accepted by create and update
#[derive(Debug, Clone)]
pub struct FormInput {
    pub title: String,
    pub description: Option<String>,
    pub schema: Vec<Value>,
}
