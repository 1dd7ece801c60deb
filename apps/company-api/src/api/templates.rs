//! Templates API routes
//!
//! This module wires up the templates domain to HTTP routes. The template
//! service composes repositories from three domains because assignment
//! fans out into task creation after checking company existence.

use axum::Router;
use domain_companies::FirestoreCompanyRepository;
use domain_tasks::FirestoreTaskRepository;
use domain_templates::{FirestoreTemplateRepository, TemplateService, handlers};

use crate::state::AppState;

/// Create templates router
pub fn router(state: &AppState) -> Router {
    let templates = FirestoreTemplateRepository::new(state.firestore.clone());
    let companies = FirestoreCompanyRepository::new(state.firestore.clone());
    let tasks = FirestoreTaskRepository::new(state.firestore.clone());

    let service = TemplateService::new(templates, companies, tasks);

    handlers::router(service)
}
