//! # formbase - Form Builder Service
//!
//! A small CRUD service for form schemas and their submissions. A form holds
//! an ordered list of field descriptors; submissions against a form are
//! validated for required fields at submit time and stored verbatim.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use formbase::config::Settings;
//! use formbase::persistence::DataStore;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let settings = Settings::new()?;
//!     let store = DataStore::new(&settings.persistence).await?;
//!     store.migrate().await?;
//!
//!     let app = formbase::create_app(store);
//!     // serve `app` with axum
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! - **Domain**: validation rules derived from form schemas
//! - **Persistence**: sqlx-backed form and response repositories
//! - **Adapters**: HTTP handlers and the API client
//! - **Config**: configuration management

pub mod adapters;
pub mod cli;
pub mod config;
pub mod domain;
pub mod persistence;

use crate::adapters::form_handler::{self, ApiState};
use crate::adapters::health_handler;
use crate::persistence::DataStore;
use axum::{
    routing::{get, post},
    Router,
};

/// Creates the Axum application router with all endpoints configured.
///
/// # Arguments
///
/// * `store` - Connected data store backing the form and response repositories
///
/// # Returns
///
/// Configured Axum Router
pub fn create_app(store: DataStore) -> Router {
    let api_state = ApiState { store };

    // Form CRUD + submissions
    let api_router = Router::new()
        .route(
            "/forms",
            get(form_handler::list_forms).post(form_handler::create_form),
        )
        .route(
            "/forms/:id",
            get(form_handler::get_form)
                .put(form_handler::update_form)
                .delete(form_handler::delete_form),
        )
        .route("/forms/:id/submit", post(form_handler::submit_form))
        .route("/forms/:id/responses", get(form_handler::list_form_responses));

    let router = Router::new()
        .route("/health", get(health_handler::health))
        .route("/health/ready", get(health_handler::ready))
        .nest("/api", api_router)
        .with_state(api_state);

    router.layer(
        tower_http::cors::CorsLayer::new()
            .allow_origin(tower_http::cors::Any)
            .allow_methods(tower_http::cors::Any)
            .allow_headers(tower_http::cors::Any),
    )
}
