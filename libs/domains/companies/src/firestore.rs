//! Firestore implementation of CompanyRepository

use async_trait::async_trait;
use firestore_client::FirestoreClient;
use tracing::instrument;
use uuid::Uuid;

use crate::error::{CompanyError, CompanyResult};
use crate::models::{Company, CreateCompany, UpdateCompany};
use crate::repository::CompanyRepository;

const COLLECTION: &str = "companies";

/// Firestore implementation of the CompanyRepository
pub struct FirestoreCompanyRepository {
    client: FirestoreClient,
    collection: String,
}

impl FirestoreCompanyRepository {
    /// Create a repository over the default `companies` collection.
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
impl CompanyRepository for FirestoreCompanyRepository {
    #[instrument(skip(self, input), fields(company_name = %input.name))]
    async fn create(&self, input: CreateCompany) -> CompanyResult<Company> {
        let company = Company::new(input);

        self.client
            .upsert(&self.collection, &company.id.to_string(), &company)
            .await?;

        tracing::info!(company_id = %company.id, "Company created successfully");
        Ok(company)
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: Uuid) -> CompanyResult<Option<Company>> {
        let company = self.client.get(&self.collection, &id.to_string()).await?;
        Ok(company)
    }

    #[instrument(skip(self))]
    async fn list(&self) -> CompanyResult<Vec<Company>> {
        let companies = self.client.list_all(&self.collection).await?;
        Ok(companies)
    }

    #[instrument(skip(self, input))]
    async fn update(&self, id: Uuid, input: UpdateCompany) -> CompanyResult<Company> {
        let existing: Option<Company> = self.client.get(&self.collection, &id.to_string()).await?;
        let mut updated = existing.ok_or(CompanyError::NotFound(id))?;

        updated.apply_update(input);

        self.client
            .upsert(&self.collection, &id.to_string(), &updated)
            .await?;

        tracing::info!(company_id = %id, "Company updated successfully");
        Ok(updated)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> CompanyResult<bool> {
        // Firestore deletes succeed even for unknown ids, so existence is
        // checked first; a second delete of the same id reports false.
        let existing: Option<Company> = self.client.get(&self.collection, &id.to_string()).await?;
        if existing.is_none() {
            return Ok(false);
        }

        self.client.delete(&self.collection, &id.to_string()).await?;

        tracing::info!(company_id = %id, "Company deleted successfully");
        Ok(true)
    }
}
