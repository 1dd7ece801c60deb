use chrono::{DateTime, Utc};
use domain_tasks::Task;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// TaskTemplate entity - a reusable task blueprint stored in the
/// `templates` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TaskTemplate {
    /// Unique identifier
    pub id: Uuid,
    /// Owner reference; opaque, existence is not enforced
    pub user_id: String,
    pub title: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// DTO for creating a new template.
///
/// Unknown fields are rejected at the boundary rather than silently
/// dropped.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateTemplate {
    #[validate(length(min = 1, max = 200))]
    pub user_id: String,
    #[validate(length(min = 1, max = 500))]
    pub title: String,
    #[validate(length(max = 2000))]
    pub description: Option<String>,
}

/// Request body for assigning a template to a set of companies
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct AssignTemplate {
    /// Target companies, processed in input order
    #[serde(rename = "companyIds")]
    pub company_ids: Vec<Uuid>,
}

/// Outcome of a fan-out assignment.
///
/// Assignment is best-effort: one failing target does not abort the rest.
/// Targets that are not companies land in `skippedCompanies`; targets whose
/// task write failed land in `failedCompanies`.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TemplateAssignment {
    #[serde(rename = "templateId")]
    pub template_id: Uuid,
    /// Tasks created by this assignment, one per successful target
    pub created: Vec<Task>,
    #[serde(rename = "skippedCompanies")]
    pub skipped_companies: Vec<Uuid>,
    #[serde(rename = "failedCompanies")]
    pub failed_companies: Vec<Uuid>,
}

impl TaskTemplate {
    /// Create a new template from a CreateTemplate DTO
    pub fn new(input: CreateTemplate) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id: input.user_id,
            title: input.title,
            description: input.description,
            created_at: now,
            updated_at: now,
        }
    }
}
