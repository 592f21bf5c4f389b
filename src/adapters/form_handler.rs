//! REST API handlers for forms and form responses
//!
//! Request bodies for create, update, and submit are taken as raw JSON values
//! so that shape problems (a non-string title, a non-array schema) surface as
//! structured 422 validation errors instead of framework-level rejections.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::{json, Value};

use crate::domain::validation::{
    derive_required_fields, validate_form_payload, validate_submission, ValidationErrors,
};
use crate::persistence::{DataStore, FormRepository, PersistenceError, ResponseRepository};

/// Shared application state for API handlers
#[derive(Clone)]
pub struct ApiState {
    pub store: DataStore,
}

/// 422 response carrying per-field validation messages
fn validation_failed(errors: ValidationErrors) -> (StatusCode, Json<Value>) {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(json!({
            "message": "The given data was invalid.",
            "errors": errors.errors(),
        })),
    )
}

/// Map a persistence error onto its HTTP response
fn persistence_error(err: PersistenceError) -> (StatusCode, Json<Value>) {
    let status = err.status_code();
    if status == StatusCode::NOT_FOUND {
        (status, Json(json!({"message": "Form not found"})))
    } else {
        tracing::error!("Store error: {}", err);
        (status, Json(json!({"message": err.to_string()})))
    }
}

/// GET /api/forms - List all forms, newest first
pub async fn list_forms(State(state): State<ApiState>) -> impl IntoResponse {
    match state.store.forms().list().await {
        Ok(forms) => (StatusCode::OK, Json(json!(forms))),
        Err(e) => persistence_error(e),
    }
}

/// POST /api/forms - Create a new form
pub async fn create_form(
    State(state): State<ApiState>,
    Json(body): Json<Value>,
) -> impl IntoResponse {
    let input = match validate_form_payload(&body) {
        Ok(input) => input,
        Err(errors) => return validation_failed(errors),
    };

    match state.store.forms().create(&input).await {
        Ok(form) => (StatusCode::CREATED, Json(json!(form))),
        Err(e) => persistence_error(e),
    }
}

/// GET /api/forms/:id - Get a single form
pub async fn get_form(
    State(state): State<ApiState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    match state.store.forms().get(&id).await {
        Ok(form) => (StatusCode::OK, Json(json!(form))),
        Err(e) => persistence_error(e),
    }
}

/// PUT /api/forms/:id - Replace a form's title, description and schema
///
/// The existence check runs before payload validation, so an unknown id is a
/// 404 even when the payload is also invalid.
pub async fn update_form(
    State(state): State<ApiState>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> impl IntoResponse {
    if let Err(e) = state.store.forms().get(&id).await {
        return persistence_error(e);
    }

    let input = match validate_form_payload(&body) {
        Ok(input) => input,
        Err(errors) => return validation_failed(errors),
    };

    match state.store.forms().update(&id, &input).await {
        Ok(form) => (StatusCode::OK, Json(json!(form))),
        Err(e) => persistence_error(e),
    }
}

/// DELETE /api/forms/:id - Delete a form and all of its responses
pub async fn delete_form(
    State(state): State<ApiState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    match state.store.forms().delete(&id).await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({"message": "Form deleted successfully"})),
        ),
        Err(e) => persistence_error(e),
    }
}

/// POST /api/forms/:id/submit - Validate and store a submission
///
/// The required-field rule set is derived from the form's schema at submit
/// time; on success the full incoming payload is stored, including fields the
/// schema does not mention.
pub async fn submit_form(
    State(state): State<ApiState>,
    Path(id): Path<String>,
    Json(payload): Json<Value>,
) -> impl IntoResponse {
    let form = match state.store.forms().get(&id).await {
        Ok(form) => form,
        Err(e) => return persistence_error(e),
    };

    let required = derive_required_fields(&form.schema);
    if let Err(errors) = validate_submission(&required, &payload) {
        return validation_failed(errors);
    }

    match state.store.responses().create(&form.id, &payload).await {
        Ok(response) => (StatusCode::CREATED, Json(json!(response))),
        Err(e) => persistence_error(e),
    }
}

/// GET /api/forms/:id/responses - Get a form together with its responses
pub async fn list_form_responses(
    State(state): State<ApiState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let form = match state.store.forms().get(&id).await {
        Ok(form) => form,
        Err(e) => return persistence_error(e),
    };

    match state.store.responses().list_by_form(&form.id).await {
        Ok(responses) => (
            StatusCode::OK,
            Json(json!({"form": form, "responses": responses})),
        ),
        Err(e) => persistence_error(e),
    }
}
