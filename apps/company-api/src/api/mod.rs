//! API route wiring.
//!
//! Each submodule binds one domain's handlers to the shared application
//! state; the combined router is merged at the root since the public
//! surface uses flat paths.

use axum::Router;

use crate::state::AppState;

pub mod companies;
pub mod tasks;
pub mod templates;

/// Create the combined API router
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .merge(companies::router(state))
        .merge(tasks::router(state))
        .merge(templates::router(state))
}
