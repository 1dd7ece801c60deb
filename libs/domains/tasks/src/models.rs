use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Task entity - a unit of work tied to a company, stored in the `tasks`
/// collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Task {
    /// Unique identifier
    pub id: Uuid,
    /// Owning company; opaque reference, existence is not enforced
    #[serde(rename = "companyId")]
    pub company_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    /// Completion flag
    #[serde(default)]
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// DTO for creating a new task.
///
/// Unknown fields are rejected at the boundary rather than silently
/// dropped.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateTask {
    #[serde(rename = "companyId")]
    pub company_id: Uuid,
    #[validate(length(min = 1, max = 500))]
    pub title: String,
    #[validate(length(max = 2000))]
    pub description: Option<String>,
    #[serde(default)]
    pub completed: bool,
}

/// DTO for updating an existing task
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateTask {
    #[serde(rename = "companyId")]
    pub company_id: Option<Uuid>,
    #[validate(length(min = 1, max = 500))]
    pub title: Option<String>,
    #[validate(length(max = 2000))]
    pub description: Option<String>,
    pub completed: Option<bool>,
}

impl Task {
    /// Create a new task from a CreateTask DTO
    pub fn new(input: CreateTask) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            company_id: input.company_id,
            title: input.title,
            description: input.description,
            completed: input.completed,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply updates from an UpdateTask DTO
    pub fn apply_update(&mut self, update: UpdateTask) {
        if let Some(company_id) = update.company_id {
            self.company_id = company_id;
        }
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(description) = update.description {
            self.description = Some(description);
        }
        if let Some(completed) = update.completed {
            self.completed = completed;
        }
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    fn create_input() -> CreateTask {
        CreateTask {
            company_id: Uuid::new_v4(),
            title: "File the annual report".to_string(),
            description: Some("Due at the end of Q1".to_string()),
            completed: false,
        }
    }

    #[test]
    fn test_new_assigns_id_and_defaults() {
        let input = create_input();
        let company_id = input.company_id;
        let task = Task::new(input);

        assert!(!task.id.is_nil());
        assert_eq!(task.company_id, company_id);
        assert!(!task.completed);
        assert_eq!(task.created_at, task.updated_at);
    }

    #[test]
    fn test_company_id_wire_name() {
        let task = Task::new(create_input());
        let json = serde_json::to_value(&task).unwrap();
        assert!(json.get("companyId").is_some());
        assert!(json.get("company_id").is_none());
    }

    #[test]
    fn test_apply_update_toggles_completed() {
        let mut task = Task::new(create_input());
        task.apply_update(UpdateTask {
            completed: Some(true),
            ..Default::default()
        });
        assert!(task.completed);
        assert_eq!(task.title, "File the annual report");
    }

    #[test]
    fn test_create_rejects_empty_title() {
        let input = CreateTask {
            title: String::new(),
            ..create_input()
        };
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_create_accepts_missing_description() {
        let input = CreateTask {
            description: None,
            ..create_input()
        };
        assert!(input.validate().is_ok());
    }
}
