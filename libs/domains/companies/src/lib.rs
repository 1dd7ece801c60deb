//! Companies Domain
//!
//! Complete domain implementation for managing companies backed by Firestore.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Business logic, validation
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + Firestore implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entities, DTOs
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_companies::{CompanyService, FirestoreCompanyRepository, handlers};
//! use firestore_client::{FirestoreClient, FirestoreConfig};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = FirestoreClient::new(FirestoreConfig::new("p", "svc@x", "key"))?;
//!
//! let repository = FirestoreCompanyRepository::new(client);
//! let service = CompanyService::new(repository);
//!
//! // Create Axum router
//! let router = handlers::router(service);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod firestore;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{CompanyError, CompanyResult};
pub use firestore::FirestoreCompanyRepository;
pub use handlers::ApiDoc;
pub use models::{Company, CreateCompany, UpdateCompany};
pub use repository::CompanyRepository;
pub use service::CompanyService;
