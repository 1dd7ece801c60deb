//! Firestore implementation of TaskRepository

use async_trait::async_trait;
use firestore_client::FirestoreClient;
use tracing::instrument;
use uuid::Uuid;

use crate::error::{TaskError, TaskResult};
use crate::models::{CreateTask, Task, UpdateTask};
use crate::repository::TaskRepository;

const COLLECTION: &str = "tasks";

/// Firestore implementation of the TaskRepository
pub struct FirestoreTaskRepository {
    client: FirestoreClient,
    collection: String,
}

impl FirestoreTaskRepository {
    /// Create a repository over the default `tasks` collection.
    pub fn new(client: FirestoreClient) -> Self {
        Self::with_collection(client, COLLECTION)
    }

    /// Create a repository with a custom collection name
    pub fn with_collection(client: FirestoreClient, collection: &str) -> Self {
        Self {
            client,
            collection: collection.to_string(),
        }
    }
}

#[async_trait]
impl TaskRepository for FirestoreTaskRepository {
    #[instrument(skip(self, input), fields(task_title = %input.title))]
    async fn create(&self, input: CreateTask) -> TaskResult<Task> {
        let task = Task::new(input);

        self.client
            .upsert(&self.collection, &task.id.to_string(), &task)
            .await?;

        tracing::info!(task_id = %task.id, company_id = %task.company_id, "Task created successfully");
        Ok(task)
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: Uuid) -> TaskResult<Option<Task>> {
        let task = self.client.get(&self.collection, &id.to_string()).await?;
        Ok(task)
    }

    #[instrument(skip(self))]
    async fn list(&self) -> TaskResult<Vec<Task>> {
        let tasks = self.client.list_all(&self.collection).await?;
        Ok(tasks)
    }

    #[instrument(skip(self, input))]
    async fn update(&self, id: Uuid, input: UpdateTask) -> TaskResult<Task> {
        let existing: Option<Task> = self.client.get(&self.collection, &id.to_string()).await?;
        let mut updated = existing.ok_or(TaskError::NotFound(id))?;

        updated.apply_update(input);

        self.client
            .upsert(&self.collection, &id.to_string(), &updated)
            .await?;

        tracing::info!(task_id = %id, "Task updated successfully");
        Ok(updated)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> TaskResult<bool> {
        // Firestore deletes succeed even for unknown ids, so existence is
        // checked first; a second delete of the same id reports false.
        let existing: Option<Task> = self.client.get(&self.collection, &id.to_string()).await?;
        if existing.is_none() {
            return Ok(false);
        }

        self.client.delete(&self.collection, &id.to_string()).await?;

        tracing::info!(task_id = %id, "Task deleted successfully");
        Ok(true)
    }
}
