//! Core domain logic: field-level validation for forms and submissions

pub mod validation;

pub use validation::{
    derive_required_fields, field_name, validate_form_payload, validate_submission,
    ValidationErrors,
};
