use async_trait::async_trait;
use uuid::Uuid;

use crate::error::TaskResult;
use crate::models::{CreateTask, Task, UpdateTask};

/// Repository trait for Task persistence
///
/// This trait defines the data access interface for tasks.
/// Implementations can use different storage backends (Firestore, etc.)
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Create a new task
    async fn create(&self, input: CreateTask) -> TaskResult<Task>;

    /// Get a task by ID
    async fn get_by_id(&self, id: Uuid) -> TaskResult<Option<Task>>;

    /// List every task in the collection
    async fn list(&self) -> TaskResult<Vec<Task>>;

    /// Update an existing task
    async fn update(&self, id: Uuid, input: UpdateTask) -> TaskResult<Task>;

    /// Delete a task by ID; returns false when the id does not exist
    async fn delete(&self, id: Uuid) -> TaskResult<bool>;
}
