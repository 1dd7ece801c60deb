//! Tasks Domain
//!
//! Complete domain implementation for managing tasks backed by Firestore.
//! A task is a unit of work tied to a company through an unchecked
//! `companyId` reference; the store enforces no referential integrity, and
//! neither does this domain.
//!
//! The layering matches the companies domain: handlers → service →
//! repository trait → Firestore implementation.

pub mod error;
pub mod firestore;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{TaskError, TaskResult};
pub use firestore::FirestoreTaskRepository;
pub use handlers::ApiDoc;
pub use models::{CreateTask, Task, UpdateTask};
pub use repository::TaskRepository;
pub use service::TaskService;
