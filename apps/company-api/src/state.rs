//! Application state management.
//!
//! This module defines the shared application state passed to all request
//! handlers. The state contains:
//! - Configuration
//! - Firestore client

use firestore_client::FirestoreClient;

/// Shared application state.
///
/// Cloning is inexpensive (the Firestore client shares its HTTP pool and
/// token cache behind an Arc).
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    /// Firestore client shared by every repository
    pub firestore: FirestoreClient,
}
