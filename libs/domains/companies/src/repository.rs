use async_trait::async_trait;
use uuid::Uuid;

use crate::error::CompanyResult;
use crate::models::{Company, CreateCompany, UpdateCompany};

/// Repository trait for Company persistence
///
/// This trait defines the data access interface for companies.
/// Implementations can use different storage backends (Firestore, etc.)
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompanyRepository: Send + Sync {
    /// Create a new company
    async fn create(&self, input: CreateCompany) -> CompanyResult<Company>;

    /// Get a company by ID
    async fn get_by_id(&self, id: Uuid) -> CompanyResult<Option<Company>>;

    /// List every company in the collection
    async fn list(&self) -> CompanyResult<Vec<Company>>;

    /// Update an existing company
    async fn update(&self, id: Uuid, input: UpdateCompany) -> CompanyResult<Company>;

    /// Delete a company by ID; returns false when the id does not exist
    async fn delete(&self, id: Uuid) -> CompanyResult<bool>;
}
