//! Task Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;
use validator::Validate;

use crate::error::{TaskError, TaskResult};
use crate::models::{CreateTask, Task, UpdateTask};
use crate::repository::TaskRepository;

/// Task service providing business logic operations.
///
/// The `companyId` carried by a task is an unchecked reference: creating or
/// updating a task does not verify that the company exists, mirroring the
/// store's lack of referential integrity.
pub struct TaskService<R: TaskRepository> {
    repository: Arc<R>,
}

impl<R: TaskRepository> TaskService<R> {
    /// Create a new TaskService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a new task
    #[instrument(skip(self, input), fields(task_title = %input.title))]
    pub async fn create_task(&self, input: CreateTask) -> TaskResult<Task> {
        input
            .validate()
            .map_err(|e| TaskError::Validation(e.to_string()))?;

        self.repository.create(input).await
    }

    /// Get a task by ID
    #[instrument(skip(self))]
    pub async fn get_task(&self, id: Uuid) -> TaskResult<Task> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(TaskError::NotFound(id))
    }

    /// List every task
    #[instrument(skip(self))]
    pub async fn list_tasks(&self) -> TaskResult<Vec<Task>> {
        self.repository.list().await
    }

    /// Update an existing task
    #[instrument(skip(self, input))]
    pub async fn update_task(&self, id: Uuid, input: UpdateTask) -> TaskResult<Task> {
        input
            .validate()
            .map_err(|e| TaskError::Validation(e.to_string()))?;

        self.repository.update(id, input).await
    }

    /// Delete a task.
    ///
    /// Deletion is not idempotent: a second delete of the same id fails with
    /// NotFound.
    #[instrument(skip(self))]
    pub async fn delete_task(&self, id: Uuid) -> TaskResult<()> {
        let deleted = self.repository.delete(id).await?;

        if !deleted {
            return Err(TaskError::NotFound(id));
        }

        Ok(())
    }
}

impl<R: TaskRepository> Clone for TaskService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockTaskRepository;

    fn create_input() -> CreateTask {
        CreateTask {
            company_id: Uuid::new_v4(),
            title: "Renew the registration".to_string(),
            description: None,
            completed: false,
        }
    }

    #[tokio::test]
    async fn test_create_task_returns_record_with_id() {
        let mut mock_repo = MockTaskRepository::new();
        mock_repo
            .expect_create()
            .returning(|input| Ok(Task::new(input)));

        let service = TaskService::new(mock_repo);
        let task = service.create_task(create_input()).await.unwrap();

        assert!(!task.id.is_nil());
        assert_eq!(task.title, "Renew the registration");
    }

    #[tokio::test]
    async fn test_create_task_rejects_empty_title_before_store() {
        let mut mock_repo = MockTaskRepository::new();
        mock_repo.expect_create().never();

        let service = TaskService::new(mock_repo);
        let input = CreateTask {
            title: String::new(),
            ..create_input()
        };

        let err = service.create_task(input).await.unwrap_err();
        assert!(matches!(err, TaskError::Validation(_)));
    }

    #[tokio::test]
    async fn test_get_task_not_found() {
        let mut mock_repo = MockTaskRepository::new();
        let id = Uuid::new_v4();
        mock_repo
            .expect_get_by_id()
            .with(mockall::predicate::eq(id))
            .returning(|_| Ok(None));

        let service = TaskService::new(mock_repo);
        let err = service.get_task(id).await.unwrap_err();

        assert!(matches!(err, TaskError::NotFound(missing) if missing == id));
    }

    #[tokio::test]
    async fn test_list_tasks_returns_all() {
        let mut mock_repo = MockTaskRepository::new();
        mock_repo
            .expect_list()
            .returning(|| Ok(vec![Task::new(create_input())]));

        let service = TaskService::new(mock_repo);
        let tasks = service.list_tasks().await.unwrap();

        assert_eq!(tasks.len(), 1);
    }

    #[tokio::test]
    async fn test_update_task_passes_through_repository() {
        let mut mock_repo = MockTaskRepository::new();
        let task = Task::new(create_input());
        let id = task.id;
        let stored = task.clone();
        mock_repo.expect_update().returning(move |_, update| {
            let mut updated = stored.clone();
            updated.apply_update(update);
            Ok(updated)
        });

        let service = TaskService::new(mock_repo);
        let updated = service
            .update_task(
                id,
                UpdateTask {
                    completed: Some(true),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert!(updated.completed);
    }

    #[tokio::test]
    async fn test_delete_task_twice_second_is_not_found() {
        let mut mock_repo = MockTaskRepository::new();
        let mut first = true;
        mock_repo.expect_delete().times(2).returning(move |_| {
            let existed = first;
            first = false;
            Ok(existed)
        });

        let service = TaskService::new(mock_repo);
        let id = Uuid::new_v4();

        assert!(service.delete_task(id).await.is_ok());
        let err = service.delete_task(id).await.unwrap_err();
        assert!(matches!(err, TaskError::NotFound(_)));
    }
}
