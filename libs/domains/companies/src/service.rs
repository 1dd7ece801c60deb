//! Company Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;
use validator::Validate;

use crate::error::{CompanyError, CompanyResult};
use crate::models::{Company, CreateCompany, UpdateCompany};
use crate::repository::CompanyRepository;

/// Company service providing business logic operations
///
/// The service layer handles validation and orchestrates repository
/// operations. Everything here is a thin translation onto store calls.
pub struct CompanyService<R: CompanyRepository> {
    repository: Arc<R>,
}

impl<R: CompanyRepository> CompanyService<R> {
    /// Create a new CompanyService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a new company
    #[instrument(skip(self, input), fields(company_name = %input.name))]
    pub async fn create_company(&self, input: CreateCompany) -> CompanyResult<Company> {
        input
            .validate()
            .map_err(|e| CompanyError::Validation(e.to_string()))?;

        self.repository.create(input).await
    }

    /// Get a company by ID
    #[instrument(skip(self))]
    pub async fn get_company(&self, id: Uuid) -> CompanyResult<Company> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(CompanyError::NotFound(id))
    }

    /// List every company
    #[instrument(skip(self))]
    pub async fn list_companies(&self) -> CompanyResult<Vec<Company>> {
        self.repository.list().await
    }

    /// Update an existing company
    #[instrument(skip(self, input))]
    pub async fn update_company(&self, id: Uuid, input: UpdateCompany) -> CompanyResult<Company> {
        input
            .validate()
            .map_err(|e| CompanyError::Validation(e.to_string()))?;

        self.repository.update(id, input).await
    }

    /// Delete a company.
    ///
    /// Deletion is not idempotent: a second delete of the same id fails with
    /// NotFound.
    #[instrument(skip(self))]
    pub async fn delete_company(&self, id: Uuid) -> CompanyResult<()> {
        let deleted = self.repository.delete(id).await?;

        if !deleted {
            return Err(CompanyError::NotFound(id));
        }

        Ok(())
    }
}

impl<R: CompanyRepository> Clone for CompanyService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockCompanyRepository;

    fn create_input() -> CreateCompany {
        CreateCompany {
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
        }
    }

    #[tokio::test]
    async fn test_create_company_returns_record_with_id() {
        let mut mock_repo = MockCompanyRepository::new();
        mock_repo
            .expect_create()
            .returning(|input| Ok(Company::new(input)));

        let service = CompanyService::new(mock_repo);
        let company = service.create_company(create_input()).await.unwrap();

        assert!(!company.id.is_nil());
        assert_eq!(company.name, "Acme");
    }

    #[tokio::test]
    async fn test_create_company_rejects_invalid_input_before_store() {
        let mut mock_repo = MockCompanyRepository::new();
        // The repository must never be called for invalid input
        mock_repo.expect_create().never();

        let service = CompanyService::new(mock_repo);
        let input = CreateCompany {
            name: String::new(),
            ..create_input()
        };

        let err = service.create_company(input).await.unwrap_err();
        assert!(matches!(err, CompanyError::Validation(_)));
    }

    #[tokio::test]
    async fn test_get_company_not_found() {
        let mut mock_repo = MockCompanyRepository::new();
        let id = Uuid::new_v4();
        mock_repo
            .expect_get_by_id()
            .with(mockall::predicate::eq(id))
            .returning(|_| Ok(None));

        let service = CompanyService::new(mock_repo);
        let err = service.get_company(id).await.unwrap_err();

        assert!(matches!(err, CompanyError::NotFound(missing) if missing == id));
    }

    #[tokio::test]
    async fn test_get_company_found() {
        let mut mock_repo = MockCompanyRepository::new();
        let company = Company::new(create_input());
        let id = company.id;
        let stored = company.clone();
        mock_repo
            .expect_get_by_id()
            .returning(move |_| Ok(Some(stored.clone())));

        let service = CompanyService::new(mock_repo);
        let found = service.get_company(id).await.unwrap();

        assert_eq!(found, company);
    }

    #[tokio::test]
    async fn test_list_companies_returns_all() {
        let mut mock_repo = MockCompanyRepository::new();
        mock_repo.expect_list().returning(|| {
            Ok(vec![Company::new(create_input()), Company::new(create_input())])
        });

        let service = CompanyService::new(mock_repo);
        let companies = service.list_companies().await.unwrap();

        assert_eq!(companies.len(), 2);
    }

    #[tokio::test]
    async fn test_update_company_rejects_invalid_input_before_store() {
        let mut mock_repo = MockCompanyRepository::new();
        mock_repo.expect_update().never();

        let service = CompanyService::new(mock_repo);
        let update = UpdateCompany {
            name: Some(String::new()),
            ..Default::default()
        };

        let err = service.update_company(Uuid::new_v4(), update).await.unwrap_err();
        assert!(matches!(err, CompanyError::Validation(_)));
    }

    #[tokio::test]
    async fn test_delete_company_missing_is_not_found() {
        let mut mock_repo = MockCompanyRepository::new();
        let id = Uuid::new_v4();
        mock_repo.expect_delete().returning(|_| Ok(false));

        let service = CompanyService::new(mock_repo);
        let err = service.delete_company(id).await.unwrap_err();

        assert!(matches!(err, CompanyError::NotFound(missing) if missing == id));
    }

    #[tokio::test]
    async fn test_delete_company_success() {
        let mut mock_repo = MockCompanyRepository::new();
        mock_repo.expect_delete().returning(|_| Ok(true));

        let service = CompanyService::new(mock_repo);
        assert!(service.delete_company(Uuid::new_v4()).await.is_ok());
    }
}
