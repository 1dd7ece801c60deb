use async_trait::async_trait;
use uuid::Uuid;

use crate::error::TemplateResult;
use crate::models::{CreateTemplate, TaskTemplate};

/// Repository trait for TaskTemplate persistence
///
/// Templates have no update operation: the lifecycle is create, list,
/// delete, with assignment handled at the service layer.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TemplateRepository: Send + Sync {
    /// Create a new template
    async fn create(&self, input: CreateTemplate) -> TemplateResult<TaskTemplate>;

    /// Get a template by ID
    async fn get_by_id(&self, id: Uuid) -> TemplateResult<Option<TaskTemplate>>;

    /// List every template in the collection
    async fn list(&self) -> TemplateResult<Vec<TaskTemplate>>;

    /// Delete a template by ID; returns false when the id does not exist
    async fn delete(&self, id: Uuid) -> TemplateResult<bool>;
}
