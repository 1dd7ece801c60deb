//! Tasks API routes
//!
//! This module wires up the tasks domain to HTTP routes.

use axum::Router;
use domain_tasks::{FirestoreTaskRepository, TaskService, handlers};

use crate::state::AppState;

/// Create tasks router
pub fn router(state: &AppState) -> Router {
    let repository = FirestoreTaskRepository::new(state.firestore.clone());
    let service = TaskService::new(repository);

    handlers::router(service)
}
