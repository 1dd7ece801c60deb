//! Companies API routes
//!
//! This module wires up the companies domain to HTTP routes.

use axum::Router;
use domain_companies::{CompanyService, FirestoreCompanyRepository, handlers};

use crate::state::AppState;

/// Create companies router
pub fn router(state: &AppState) -> Router {
    // Create the Firestore repository
    let repository = FirestoreCompanyRepository::new(state.firestore.clone());

    // Create the service
    let service = CompanyService::new(repository);

    // Return the domain's router
    handlers::router(service)
}
