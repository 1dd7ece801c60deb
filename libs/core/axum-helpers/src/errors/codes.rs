//! Type-safe error codes for API responses.
//!
//! This module provides a single source of truth for error codes used across
//! the application. Each error code includes:
//! - String representation for client consumption (e.g., "VALIDATION_ERROR")
//! - Integer code for logging and monitoring (e.g., 1001)
//! - Default human-readable message
//!
//! # Example
//!
//! ```rust
//! use axum_helpers::errors::ErrorCode;
//!
//! let code = ErrorCode::ValidationError;
//! assert_eq!(code.as_str(), "VALIDATION_ERROR");
//! assert_eq!(code.code(), 1001);
//! assert_eq!(code.default_message(), "Request validation failed");
//! ```

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Standardized error codes for API responses.
///
/// Combines string identifiers (for clients), integer codes (for monitoring),
/// and default messages (for consistency).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Client errors (1000-1999)
    /// Request validation failed
    ValidationError,

    /// Invalid UUID format in path or query parameter
    InvalidUuid,

    /// Requested resource was not found
    NotFound,

    /// Authenticated caller lacks sufficient permissions
    Forbidden,

    /// Request conflicts with current resource state
    Conflict,

    /// Request payload is semantically incorrect
    UnprocessableEntity,

    /// JSON extraction from request body failed
    JsonExtraction,

    /// An unexpected internal server error occurred
    InternalError,

    /// Service is temporarily unavailable
    ServiceUnavailable,

    // Document store errors (2000-2999)
    /// Document was not found in the store
    StoreNotFound,

    /// Store credentials are rejected or insufficient
    StorePermissionDenied,

    /// Store is unreachable, rate-limited, or returned a transient failure
    StoreUnavailable,

    /// Store request timed out
    StoreTimeout,

    /// Failed to decode a store document
    StoreDecode,

    /// Failed to encode a store document
    StoreEncode,

    /// Unhandled store error
    StoreUnhandled,

    // I/O errors (4000s)
    /// File system I/O error
    IoError,

    // JSON parsing errors (5000s)
    /// JSON serialization/deserialization error
    SerdeJsonError,
}

impl ErrorCode {
    /// Get the string representation for client consumption.
    ///
    /// This returns a SCREAMING_SNAKE_CASE identifier that clients can use
    /// to programmatically handle specific error types.
    ///
    /// # Example
    ///
    /// ```rust
    /// use axum_helpers::errors::ErrorCode;
    ///
    /// assert_eq!(ErrorCode::ValidationError.as_str(), "VALIDATION_ERROR");
    /// assert_eq!(ErrorCode::NotFound.as_str(), "NOT_FOUND");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ValidationError => "VALIDATION_ERROR",
            Self::InvalidUuid => "INVALID_UUID",
            Self::NotFound => "NOT_FOUND",
            Self::Forbidden => "FORBIDDEN",
            Self::Conflict => "CONFLICT",
            Self::UnprocessableEntity => "UNPROCESSABLE_ENTITY",
            Self::JsonExtraction => "JSON_EXTRACTION",
            Self::InternalError => "INTERNAL_ERROR",
            Self::ServiceUnavailable => "SERVICE_UNAVAILABLE",
            Self::StoreNotFound => "STORE_NOT_FOUND",
            Self::StorePermissionDenied => "STORE_PERMISSION_DENIED",
            Self::StoreUnavailable => "STORE_UNAVAILABLE",
            Self::StoreTimeout => "STORE_TIMEOUT",
            Self::StoreDecode => "STORE_DECODE",
            Self::StoreEncode => "STORE_ENCODE",
            Self::StoreUnhandled => "STORE_UNHANDLED",
            Self::IoError => "IO_ERROR",
            Self::SerdeJsonError => "SERDE_JSON_ERROR",
        }
    }

    /// Get the integer code for logging and monitoring.
    ///
    /// These codes are used in structured logs to identify error types.
    /// They are organized into ranges:
    /// - 1000-1999: Client errors
    /// - 2000-2999: Document store errors
    /// - 4000-4999: I/O errors
    /// - 5000-5999: Serialization errors
    pub fn code(&self) -> i32 {
        match self {
            // Client errors (1000-1999)
            Self::ValidationError => 1001,
            Self::InvalidUuid => 1002,
            Self::JsonExtraction => 1003,
            Self::NotFound => 1004,
            Self::InternalError => 1005,
            Self::Forbidden => 1007,
            Self::Conflict => 1008,
            Self::UnprocessableEntity => 1009,
            Self::ServiceUnavailable => 1011,

            // Document store errors (2000-2999)
            Self::StoreNotFound => 2001,
            Self::StorePermissionDenied => 2002,
            Self::StoreUnavailable => 2003,
            Self::StoreTimeout => 2004,
            Self::StoreDecode => 2005,
            Self::StoreEncode => 2006,
            Self::StoreUnhandled => 2099,

            // I/O errors (4000s)
            Self::IoError => 4001,

            // JSON parsing errors (5000s)
            Self::SerdeJsonError => 5001,
        }
    }

    /// Get the default user-facing error message.
    ///
    /// Individual handlers can override these with more specific details.
    pub fn default_message(&self) -> &'static str {
        match self {
            Self::ValidationError => "Request validation failed",
            Self::InvalidUuid => "Invalid UUID format",
            Self::NotFound => "Resource not found",
            Self::Forbidden => "Access forbidden",
            Self::Conflict => "Request conflicts with current resource state",
            Self::UnprocessableEntity => "Request payload is semantically incorrect",
            Self::JsonExtraction => "Failed to parse JSON request body",
            Self::InternalError => "An internal server error occurred",
            Self::ServiceUnavailable => "Service is temporarily unavailable",
            Self::StoreNotFound => "Document not found in the store",
            Self::StorePermissionDenied => "Document store rejected the credentials",
            Self::StoreUnavailable => "Document store is temporarily unavailable",
            Self::StoreTimeout => "Document store request timed out",
            Self::StoreDecode => "Failed to decode document store response",
            Self::StoreEncode => "Failed to encode document store request",
            Self::StoreUnhandled => "Unhandled document store error",
            Self::IoError => "An I/O error occurred",
            Self::SerdeJsonError => "JSON serialization error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_error_codes_in_range() {
        assert_eq!(ErrorCode::ValidationError.code(), 1001);
        assert_eq!(ErrorCode::NotFound.code(), 1004);
        assert!(ErrorCode::ServiceUnavailable.code() < 2000);
    }

    #[test]
    fn test_store_error_codes_in_range() {
        for code in [
            ErrorCode::StoreNotFound,
            ErrorCode::StorePermissionDenied,
            ErrorCode::StoreUnavailable,
            ErrorCode::StoreTimeout,
            ErrorCode::StoreDecode,
            ErrorCode::StoreEncode,
            ErrorCode::StoreUnhandled,
        ] {
            assert!((2000..3000).contains(&code.code()), "{:?}", code);
        }
    }

    #[test]
    fn test_as_str_is_screaming_snake_case() {
        assert_eq!(ErrorCode::StoreUnavailable.as_str(), "STORE_UNAVAILABLE");
        assert_eq!(
            ErrorCode::StorePermissionDenied.as_str(),
            "STORE_PERMISSION_DENIED"
        );
    }
}
