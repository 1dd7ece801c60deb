use reqwest::StatusCode;
use thiserror::Error;

/// Errors reported by the Firestore client.
///
/// The variants mirror the API-level error taxonomy: callers map
/// `PermissionDenied` to a 403, `NotFound` to a 404, and the
/// transient/transport variants to a 503.
#[derive(Debug, Error)]
pub enum FirestoreError {
    #[error("document store rejected the credentials (status {status})")]
    PermissionDenied { status: u16 },

    #[error("document {path} not found")]
    NotFound { path: String },

    #[error("document store unavailable (status {status})")]
    Unavailable { status: u16 },

    #[error("document store request timed out")]
    Timeout,

    #[error("transport error: {0}")]
    Transport(reqwest::Error),

    #[error("token exchange failed (status {status})")]
    TokenExchange { status: u16 },

    #[error("failed to sign service account assertion: {0}")]
    Assertion(#[from] jsonwebtoken::errors::Error),

    #[error("failed to decode store document: {0}")]
    Decode(String),

    #[error("failed to encode store document: {0}")]
    Encode(String),

    #[error("unexpected store response (status {status})")]
    Unexpected { status: u16 },
}

pub type FirestoreResult<T> = Result<T, FirestoreError>;

impl From<reqwest::Error> for FirestoreError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FirestoreError::Timeout
        } else {
            FirestoreError::Transport(err)
        }
    }
}

impl FirestoreError {
    /// Map a non-success HTTP status from the store to an error variant.
    ///
    /// `path` names the document or collection the request targeted.
    pub(crate) fn from_status(status: StatusCode, path: &str) -> Self {
        match status.as_u16() {
            401 | 403 => FirestoreError::PermissionDenied {
                status: status.as_u16(),
            },
            404 => FirestoreError::NotFound {
                path: path.to_string(),
            },
            408 | 429 | 500..=599 => FirestoreError::Unavailable {
                status: status.as_u16(),
            },
            _ => FirestoreError::Unexpected {
                status: status.as_u16(),
            },
        }
    }

    /// True when the error means the requested document does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, FirestoreError::NotFound { .. })
    }

    /// True for transient conditions where a caller could retry later.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            FirestoreError::Unavailable { .. }
                | FirestoreError::Timeout
                | FirestoreError::Transport(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_statuses_map_to_permission_denied() {
        for status in [StatusCode::UNAUTHORIZED, StatusCode::FORBIDDEN] {
            let err = FirestoreError::from_status(status, "companies/x");
            assert!(matches!(err, FirestoreError::PermissionDenied { .. }));
        }
    }

    #[test]
    fn test_404_maps_to_not_found() {
        let err = FirestoreError::from_status(StatusCode::NOT_FOUND, "companies/x");
        assert!(err.is_not_found());
        assert!(err.to_string().contains("companies/x"));
    }

    #[test]
    fn test_transient_statuses_map_to_unavailable() {
        for code in [408u16, 429, 500, 502, 503, 504] {
            let status = StatusCode::from_u16(code).unwrap();
            let err = FirestoreError::from_status(status, "tasks");
            assert!(matches!(err, FirestoreError::Unavailable { .. }), "{}", code);
            assert!(err.is_transient());
        }
    }

    #[test]
    fn test_other_statuses_are_unexpected() {
        let err = FirestoreError::from_status(StatusCode::IM_A_TEAPOT, "tasks");
        assert!(matches!(err, FirestoreError::Unexpected { status: 418 }));
        assert!(!err.is_transient());
    }
}
