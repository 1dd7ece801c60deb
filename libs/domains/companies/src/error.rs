use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use firestore_client::FirestoreError;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum CompanyError {
    #[error("Company not found: {0}")]
    NotFound(Uuid),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Document store error: {0}")]
    Store(#[from] FirestoreError),
}

pub type CompanyResult<T> = Result<T, CompanyError>;

/// Convert CompanyError to AppError for standardized error responses
impl From<CompanyError> for AppError {
    fn from(err: CompanyError) -> Self {
        match err {
            CompanyError::NotFound(id) => AppError::NotFound(format!("Company {} not found", id)),
            CompanyError::Validation(msg) => AppError::UnprocessableEntity(msg),
            CompanyError::Store(e) => store_error_to_app(e),
        }
    }
}

impl IntoResponse for CompanyError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

/// Map a store-level failure onto the API error taxonomy.
///
/// Transient conditions (unreachable, rate-limited, timed out) become 503;
/// rejected credentials become 403 and are not retryable.
pub(crate) fn store_error_to_app(err: FirestoreError) -> AppError {
    match err {
        FirestoreError::PermissionDenied { .. } => AppError::Forbidden(err.to_string()),
        FirestoreError::NotFound { .. } => AppError::NotFound(err.to_string()),
        FirestoreError::TokenExchange { status } if status >= 500 => {
            AppError::ServiceUnavailable(err.to_string())
        }
        FirestoreError::TokenExchange { .. } => AppError::Forbidden(err.to_string()),
        ref e if e.is_transient() => AppError::ServiceUnavailable(err.to_string()),
        _ => AppError::InternalServerError(err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[tokio::test]
    async fn test_not_found_renders_404_with_id() {
        let id = Uuid::new_v4();
        let response = CompanyError::NotFound(id).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_store_unavailable_renders_503() {
        let err = CompanyError::Store(FirestoreError::Unavailable { status: 503 });
        assert_eq!(err.into_response().status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_store_timeout_renders_503() {
        let err = CompanyError::Store(FirestoreError::Timeout);
        assert_eq!(err.into_response().status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_permission_denied_renders_403() {
        let err = CompanyError::Store(FirestoreError::PermissionDenied { status: 403 });
        assert_eq!(err.into_response().status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_validation_renders_422() {
        let err = CompanyError::Validation("name: length".to_string());
        assert_eq!(err.into_response().status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
