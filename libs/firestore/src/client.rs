//! The Firestore REST client.

use serde::{Serialize, de::DeserializeOwned};
use std::sync::Arc;
use std::time::Duration;
use tracing::instrument;

use crate::auth::TokenProvider;
use crate::config::FirestoreConfig;
use crate::document::{self, Document};
use crate::error::{FirestoreError, FirestoreResult};

/// Slow store calls surface as timeouts rather than stalling the handler
/// indefinitely.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);
const CONNECT_TIMEOUT: Duration = Duration::from_secs(2);

/// Typed client for one Firestore database.
///
/// Cloning is cheap (shared `Arc` over the HTTP pool and token cache), so a
/// single client is created at startup and handed to every repository.
#[derive(Clone)]
pub struct FirestoreClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    http: reqwest::Client,
    config: FirestoreConfig,
    auth: TokenProvider,
}

#[derive(serde::Deserialize)]
struct ListResponse {
    #[serde(default)]
    documents: Vec<Document>,
    #[serde(rename = "nextPageToken")]
    next_page_token: Option<String>,
}

impl FirestoreClient {
    /// Build a client from configuration.
    ///
    /// Fails if the HTTP client cannot be constructed or the service-account
    /// key does not parse.
    pub fn new(config: FirestoreConfig) -> FirestoreResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .connect_timeout(CONNECT_TIMEOUT)
            .build()?;

        let auth = TokenProvider::new(http.clone(), &config)?;

        Ok(Self {
            inner: Arc::new(ClientInner { http, config, auth }),
        })
    }

    pub fn config(&self) -> &FirestoreConfig {
        &self.inner.config
    }

    fn collection_url(&self, collection: &str) -> String {
        format!(
            "{}/{}/{}",
            self.inner.config.base_url,
            self.inner.config.documents_root(),
            collection
        )
    }

    fn document_url(&self, collection: &str, id: &str) -> String {
        format!("{}/{}", self.collection_url(collection), id)
    }

    /// Fetch every document in a collection, following page tokens until the
    /// store reports no further pages.
    #[instrument(skip(self))]
    pub async fn list_all<T: DeserializeOwned>(&self, collection: &str) -> FirestoreResult<Vec<T>> {
        let url = self.collection_url(collection);
        let mut out = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let token = self.inner.auth.token().await?;
            let mut request = self.inner.http.get(&url).bearer_auth(&token);
            if let Some(ref t) = page_token {
                request = request.query(&[("pageToken", t.as_str())]);
            }

            let response = request.send().await?;
            let status = response.status();
            if !status.is_success() {
                return Err(FirestoreError::from_status(status, collection));
            }

            let page: ListResponse = response
                .json()
                .await
                .map_err(|e| FirestoreError::Decode(e.to_string()))?;

            for doc in page.documents {
                out.push(document::from_document(doc)?);
            }

            match page.next_page_token {
                Some(t) if !t.is_empty() => page_token = Some(t),
                _ => break,
            }
        }

        Ok(out)
    }

    /// Fetch one document. Returns `None` when the id does not exist.
    #[instrument(skip(self))]
    pub async fn get<T: DeserializeOwned>(
        &self,
        collection: &str,
        id: &str,
    ) -> FirestoreResult<Option<T>> {
        let token = self.inner.auth.token().await?;
        let response = self
            .inner
            .http
            .get(self.document_url(collection, id))
            .bearer_auth(&token)
            .send()
            .await?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(FirestoreError::from_status(
                status,
                &format!("{}/{}", collection, id),
            ));
        }

        let doc: Document = response
            .json()
            .await
            .map_err(|e| FirestoreError::Decode(e.to_string()))?;

        Ok(Some(document::from_document(doc)?))
    }

    /// Create or replace the document at `collection/id`.
    ///
    /// PATCH against a named document creates it when absent, which is how
    /// writes with caller-chosen ids work on the REST surface.
    #[instrument(skip(self, value))]
    pub async fn upsert<T: Serialize>(
        &self,
        collection: &str,
        id: &str,
        value: &T,
    ) -> FirestoreResult<()> {
        let fields = document::to_fields(value)?;
        let token = self.inner.auth.token().await?;

        let response = self
            .inner
            .http
            .patch(self.document_url(collection, id))
            .bearer_auth(&token)
            .json(&serde_json::json!({ "fields": fields }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FirestoreError::from_status(
                status,
                &format!("{}/{}", collection, id),
            ));
        }

        Ok(())
    }

    /// Delete the document at `collection/id`.
    ///
    /// The store reports success even when the document never existed;
    /// callers that need missing-id detection check existence first.
    #[instrument(skip(self))]
    pub async fn delete(&self, collection: &str, id: &str) -> FirestoreResult<()> {
        let token = self.inner.auth.token().await?;
        let response = self
            .inner
            .http
            .delete(self.document_url(collection, id))
            .bearer_auth(&token)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FirestoreError::from_status(
                status,
                &format!("{}/{}", collection, id),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_response_tolerates_missing_documents_key() {
        // An empty collection comes back as `{}`
        let page: ListResponse = serde_json::from_str("{}").unwrap();
        assert!(page.documents.is_empty());
        assert!(page.next_page_token.is_none());
    }

    #[test]
    fn test_list_response_parses_page_token() {
        let page: ListResponse = serde_json::from_value(serde_json::json!({
            "documents": [
                { "name": "projects/p/databases/(default)/documents/tasks/t1",
                  "fields": { "title": { "stringValue": "x" } } }
            ],
            "nextPageToken": "abc"
        }))
        .unwrap();
        assert_eq!(page.documents.len(), 1);
        assert_eq!(page.next_page_token.as_deref(), Some("abc"));
    }
}
