//! External-facing adapters: HTTP handlers and the API client

pub mod api_client;
pub mod form_handler;
pub mod health_handler;
