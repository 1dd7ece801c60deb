//! Firestore implementation of TemplateRepository

use async_trait::async_trait;
use firestore_client::FirestoreClient;
use tracing::instrument;
use uuid::Uuid;

use crate::error::TemplateResult;
use crate::models::{CreateTemplate, TaskTemplate};
use crate::repository::TemplateRepository;

const COLLECTION: &str = "templates";

/// Firestore implementation of the TemplateRepository
pub struct FirestoreTemplateRepository {
    client: FirestoreClient,
    collection: String,
}

impl FirestoreTemplateRepository {
    /// Create a repository over the default `templates` collection.
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
impl TemplateRepository for FirestoreTemplateRepository {
    #[instrument(skip(self, input), fields(template_title = %input.title))]
    async fn create(&self, input: CreateTemplate) -> TemplateResult<TaskTemplate> {
        let template = TaskTemplate::new(input);

        self.client
            .upsert(&self.collection, &template.id.to_string(), &template)
            .await?;

        tracing::info!(template_id = %template.id, "Template created successfully");
        Ok(template)
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: Uuid) -> TemplateResult<Option<TaskTemplate>> {
        let template = self.client.get(&self.collection, &id.to_string()).await?;
        Ok(template)
    }

    #[instrument(skip(self))]
    async fn list(&self) -> TemplateResult<Vec<TaskTemplate>> {
        let templates = self.client.list_all(&self.collection).await?;
        Ok(templates)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> TemplateResult<bool> {
        // Firestore deletes succeed even for unknown ids, so existence is
        // checked first; a second delete of the same id reports false.
        let existing: Option<TaskTemplate> =
            self.client.get(&self.collection, &id.to_string()).await?;
        if existing.is_none() {
            return Ok(false);
        }

        self.client.delete(&self.collection, &id.to_string()).await?;

        tracing::info!(template_id = %id, "Template deleted successfully");
        Ok(true)
    }
}
