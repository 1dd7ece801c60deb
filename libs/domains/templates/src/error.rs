use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use firestore_client::FirestoreError;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Template not found: {0}")]
    NotFound(Uuid),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Document store error: {0}")]
    Store(#[from] FirestoreError),
}

pub type TemplateResult<T> = Result<T, TemplateError>;

/// Convert TemplateError to AppError for standardized error responses
impl From<TemplateError> for AppError {
    fn from(err: TemplateError) -> Self {
        match err {
            TemplateError::NotFound(id) => {
                AppError::NotFound(format!("Template {} not found", id))
            }
            TemplateError::Validation(msg) => AppError::UnprocessableEntity(msg),
            TemplateError::Store(e) => store_error_to_app(e),
        }
    }
}

impl IntoResponse for TemplateError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

/// Map a store-level failure onto the API error taxonomy.
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
