//! Template Service - Business logic layer, including fan-out assignment

use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;
use validator::Validate;

use domain_companies::CompanyRepository;
use domain_tasks::{CreateTask, TaskRepository};

use crate::error::{TemplateError, TemplateResult};
use crate::models::{AssignTemplate, CreateTemplate, TaskTemplate, TemplateAssignment};
use crate::repository::TemplateRepository;

/// Template service providing business logic operations.
///
/// Assignment fans out over the company and task repositories, so the
/// service composes all three data-access traits.
pub struct TemplateService<T, C, K>
where
    T: TemplateRepository,
    C: CompanyRepository,
    K: TaskRepository,
{
    templates: Arc<T>,
    companies: Arc<C>,
    tasks: Arc<K>,
}

impl<T, C, K> TemplateService<T, C, K>
where
    T: TemplateRepository,
    C: CompanyRepository,
    K: TaskRepository,
{
    /// Create a new TemplateService over the three repositories
    pub fn new(templates: T, companies: C, tasks: K) -> Self {
        Self {
            templates: Arc::new(templates),
            companies: Arc::new(companies),
            tasks: Arc::new(tasks),
        }
    }

    /// Create a new template
    #[instrument(skip(self, input), fields(template_title = %input.title))]
    pub async fn create_template(&self, input: CreateTemplate) -> TemplateResult<TaskTemplate> {
        input
            .validate()
            .map_err(|e| TemplateError::Validation(e.to_string()))?;

        self.templates.create(input).await
    }

    /// List every template
    #[instrument(skip(self))]
    pub async fn list_templates(&self) -> TemplateResult<Vec<TaskTemplate>> {
        self.templates.list().await
    }

    /// Delete a template.
    ///
    /// Deletion is not idempotent: a second delete of the same id fails with
    /// NotFound. Tasks created from the template are unaffected.
    #[instrument(skip(self))]
    pub async fn delete_template(&self, id: Uuid) -> TemplateResult<()> {
        let deleted = self.templates.delete(id).await?;

        if !deleted {
            return Err(TemplateError::NotFound(id));
        }

        Ok(())
    }

    /// Assign a template to a set of companies, creating one task per target.
    ///
    /// Best-effort: each target is processed independently, in input order.
    /// Unknown companies are skipped, store failures on individual targets
    /// are recorded, and the loop always runs to completion. Only a missing
    /// template aborts the whole operation.
    #[instrument(skip(self, input), fields(target_count = input.company_ids.len()))]
    pub async fn assign_template(
        &self,
        template_id: Uuid,
        input: AssignTemplate,
    ) -> TemplateResult<TemplateAssignment> {
        let template = self
            .templates
            .get_by_id(template_id)
            .await?
            .ok_or(TemplateError::NotFound(template_id))?;

        let mut created = Vec::new();
        let mut skipped_companies = Vec::new();
        let mut failed_companies = Vec::new();

        for company_id in input.company_ids {
            match self.companies.get_by_id(company_id).await {
                Ok(Some(_)) => {}
                Ok(None) => {
                    tracing::info!(%company_id, "Skipping unknown company in assignment");
                    skipped_companies.push(company_id);
                    continue;
                }
                Err(e) => {
                    tracing::warn!(%company_id, error = %e, "Company lookup failed during assignment");
                    failed_companies.push(company_id);
                    continue;
                }
            }

            let task_input = CreateTask {
                company_id,
                title: template.title.clone(),
                description: template.description.clone(),
                completed: false,
            };

            match self.tasks.create(task_input).await {
                Ok(task) => created.push(task),
                Err(e) => {
                    tracing::warn!(%company_id, error = %e, "Task creation failed during assignment");
                    failed_companies.push(company_id);
                }
            }
        }

        tracing::info!(
            %template_id,
            created = created.len(),
            skipped = skipped_companies.len(),
            failed = failed_companies.len(),
            "Template assignment completed"
        );

        Ok(TemplateAssignment {
            template_id,
            created,
            skipped_companies,
            failed_companies,
        })
    }
}

impl<T, C, K> Clone for TemplateService<T, C, K>
where
    T: TemplateRepository,
    C: CompanyRepository,
    K: TaskRepository,
{
    fn clone(&self) -> Self {
        Self {
            templates: Arc::clone(&self.templates),
            companies: Arc::clone(&self.companies),
            tasks: Arc::clone(&self.tasks),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockTemplateRepository;
    use async_trait::async_trait;
    use domain_companies::{Company, CompanyError, CompanyResult, CreateCompany, UpdateCompany};
    use domain_tasks::{Task, TaskError, TaskResult, UpdateTask};
    use firestore_client::FirestoreError;

    // The company and task mocks live here because automock only generates
    // them inside their own crate's test builds.
    mockall::mock! {
        CompanyRepo {}

        #[async_trait]
        impl CompanyRepository for CompanyRepo {
            async fn create(&self, input: CreateCompany) -> CompanyResult<Company>;
            async fn get_by_id(&self, id: Uuid) -> CompanyResult<Option<Company>>;
            async fn list(&self) -> CompanyResult<Vec<Company>>;
            async fn update(&self, id: Uuid, input: UpdateCompany) -> CompanyResult<Company>;
            async fn delete(&self, id: Uuid) -> CompanyResult<bool>;
        }
    }

    mockall::mock! {
        TaskRepo {}

        #[async_trait]
        impl TaskRepository for TaskRepo {
            async fn create(&self, input: CreateTask) -> TaskResult<Task>;
            async fn get_by_id(&self, id: Uuid) -> TaskResult<Option<Task>>;
            async fn list(&self) -> TaskResult<Vec<Task>>;
            async fn update(&self, id: Uuid, input: UpdateTask) -> TaskResult<Task>;
            async fn delete(&self, id: Uuid) -> TaskResult<bool>;
        }
    }

    fn sample_template() -> TaskTemplate {
        TaskTemplate::new(CreateTemplate {
            user_id: "user-1".to_string(),
            title: "Quarterly filing".to_string(),
            description: Some("Standard quarterly checklist".to_string()),
        })
    }

    fn sample_company(id: Uuid) -> Company {
        let mut company = Company::new(CreateCompany {
            name: "Acme".to_string(),
            ein: "12-3456789".to_string(),
            start_date: "2024-01-01".to_string(),
            state_incorporated: "CA".to_string(),
            contact_person_name: "John Doe".to_string(),
            contact_person_ph_number: "555-1234".to_string(),
            address1: "123 Main St".to_string(),
            address2: None,
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            zip: "94105".to_string(),
        });
        company.id = id;
        company
    }

    #[tokio::test]
    async fn test_assign_creates_one_task_per_company() {
        let template = sample_template();
        let template_id = template.id;
        let c1 = Uuid::new_v4();
        let c2 = Uuid::new_v4();

        let mut templates = MockTemplateRepository::new();
        templates
            .expect_get_by_id()
            .returning(move |_| Ok(Some(template.clone())));

        let mut companies = MockCompanyRepo::new();
        companies
            .expect_get_by_id()
            .returning(|id| Ok(Some(sample_company(id))));

        let mut tasks = MockTaskRepo::new();
        tasks
            .expect_create()
            .times(2)
            .returning(|input| Ok(Task::new(input)));

        let service = TemplateService::new(templates, companies, tasks);
        let outcome = service
            .assign_template(
                template_id,
                AssignTemplate {
                    company_ids: vec![c1, c2],
                },
            )
            .await
            .unwrap();

        assert_eq!(outcome.created.len(), 2);
        assert_eq!(outcome.created[0].company_id, c1);
        assert_eq!(outcome.created[1].company_id, c2);
        for task in &outcome.created {
            assert_eq!(task.title, "Quarterly filing");
            assert_eq!(
                task.description.as_deref(),
                Some("Standard quarterly checklist")
            );
            assert!(!task.completed);
        }
        assert!(outcome.skipped_companies.is_empty());
        assert!(outcome.failed_companies.is_empty());
    }

    #[tokio::test]
    async fn test_assign_missing_template_is_not_found() {
        let mut templates = MockTemplateRepository::new();
        templates.expect_get_by_id().returning(|_| Ok(None));

        let mut companies = MockCompanyRepo::new();
        companies.expect_get_by_id().never();
        let mut tasks = MockTaskRepo::new();
        tasks.expect_create().never();

        let service = TemplateService::new(templates, companies, tasks);
        let err = service
            .assign_template(
                Uuid::new_v4(),
                AssignTemplate {
                    company_ids: vec![Uuid::new_v4()],
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, TemplateError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_assign_skips_unknown_companies() {
        let template = sample_template();
        let template_id = template.id;
        let known = Uuid::new_v4();
        let unknown = Uuid::new_v4();

        let mut templates = MockTemplateRepository::new();
        templates
            .expect_get_by_id()
            .returning(move |_| Ok(Some(template.clone())));

        let mut companies = MockCompanyRepo::new();
        companies.expect_get_by_id().returning(move |id| {
            if id == known {
                Ok(Some(sample_company(id)))
            } else {
                Ok(None)
            }
        });

        let mut tasks = MockTaskRepo::new();
        tasks
            .expect_create()
            .times(1)
            .returning(|input| Ok(Task::new(input)));

        let service = TemplateService::new(templates, companies, tasks);
        let outcome = service
            .assign_template(
                template_id,
                AssignTemplate {
                    company_ids: vec![unknown, known],
                },
            )
            .await
            .unwrap();

        assert_eq!(outcome.created.len(), 1);
        assert_eq!(outcome.created[0].company_id, known);
        assert_eq!(outcome.skipped_companies, vec![unknown]);
        assert!(outcome.failed_companies.is_empty());
    }

    #[tokio::test]
    async fn test_assign_continues_after_task_create_failure() {
        let template = sample_template();
        let template_id = template.id;
        let failing = Uuid::new_v4();
        let succeeding = Uuid::new_v4();

        let mut templates = MockTemplateRepository::new();
        templates
            .expect_get_by_id()
            .returning(move |_| Ok(Some(template.clone())));

        let mut companies = MockCompanyRepo::new();
        companies
            .expect_get_by_id()
            .returning(|id| Ok(Some(sample_company(id))));

        let mut tasks = MockTaskRepo::new();
        tasks.expect_create().times(2).returning(move |input| {
            if input.company_id == failing {
                Err(TaskError::Store(FirestoreError::Unavailable {
                    status: 503,
                }))
            } else {
                Ok(Task::new(input))
            }
        });

        let service = TemplateService::new(templates, companies, tasks);
        let outcome = service
            .assign_template(
                template_id,
                AssignTemplate {
                    company_ids: vec![failing, succeeding],
                },
            )
            .await
            .unwrap();

        assert_eq!(outcome.created.len(), 1);
        assert_eq!(outcome.created[0].company_id, succeeding);
        assert_eq!(outcome.failed_companies, vec![failing]);
    }

    #[tokio::test]
    async fn test_assign_records_company_lookup_failure() {
        let template = sample_template();
        let template_id = template.id;
        let target = Uuid::new_v4();

        let mut templates = MockTemplateRepository::new();
        templates
            .expect_get_by_id()
            .returning(move |_| Ok(Some(template.clone())));

        let mut companies = MockCompanyRepo::new();
        companies.expect_get_by_id().returning(|_| {
            Err(CompanyError::Store(FirestoreError::Timeout))
        });

        let mut tasks = MockTaskRepo::new();
        tasks.expect_create().never();

        let service = TemplateService::new(templates, companies, tasks);
        let outcome = service
            .assign_template(
                template_id,
                AssignTemplate {
                    company_ids: vec![target],
                },
            )
            .await
            .unwrap();

        assert!(outcome.created.is_empty());
        assert_eq!(outcome.failed_companies, vec![target]);
    }

    #[tokio::test]
    async fn test_create_template_rejects_empty_title_before_store() {
        let mut templates = MockTemplateRepository::new();
        templates.expect_create().never();
        let companies = MockCompanyRepo::new();
        let tasks = MockTaskRepo::new();

        let service = TemplateService::new(templates, companies, tasks);
        let err = service
            .create_template(CreateTemplate {
                user_id: "user-1".to_string(),
                title: String::new(),
                description: None,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, TemplateError::Validation(_)));
    }

    #[tokio::test]
    async fn test_delete_template_missing_is_not_found() {
        let mut templates = MockTemplateRepository::new();
        templates.expect_delete().returning(|_| Ok(false));
        let companies = MockCompanyRepo::new();
        let tasks = MockTaskRepo::new();

        let service = TemplateService::new(templates, companies, tasks);
        let err = service.delete_template(Uuid::new_v4()).await.unwrap_err();

        assert!(matches!(err, TemplateError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_list_templates_returns_all() {
        let mut templates = MockTemplateRepository::new();
        templates
            .expect_list()
            .returning(|| Ok(vec![sample_template(), sample_template()]));
        let companies = MockCompanyRepo::new();
        let tasks = MockTaskRepo::new();

        let service = TemplateService::new(templates, companies, tasks);
        assert_eq!(service.list_templates().await.unwrap().len(), 2);
    }
}
