//! Task Templates Domain
//!
//! Templates are reusable task blueprints. Besides the usual
//! create/list/delete lifecycle, a template can be assigned to a set of
//! companies: each assignment fans out into one new Task per target company,
//! copying the template's title and description. Assignment never mutates
//! the template.
//!
//! The fan-out composes the company and task repository traits from their
//! domains, so this crate depends on `domain_companies` and `domain_tasks`.

pub mod error;
pub mod firestore;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{TemplateError, TemplateResult};
pub use firestore::FirestoreTemplateRepository;
pub use handlers::ApiDoc;
pub use models::{AssignTemplate, CreateTemplate, TaskTemplate, TemplateAssignment};
pub use repository::TemplateRepository;
pub use service::TemplateService;
