//! Unified error types for all layers of the application.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for all layers of Userhub.
#[derive(Error, Debug)]
pub enum UserHubError {
    /// Resource not found
    #[error("{resource_type} not found by id {id}")]
    NotFound {
        resource_type: &'static str,
        id: String,
    },

    /// Database error
    #[error("Database error: {0}")]
    Database(String),

    /// Redis/Cache error
    #[error("Cache error: {0}")]
    Cache(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Generic error wrapper
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl UserHubError {
    /// Returns the HTTP status code for this error.
    ///
    /// `NotFound` maps to 404; infrastructure failures (database, cache,
    /// configuration) surface as 500 with no retry.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::NotFound { .. } => 404,
            Self::Database(_)
            | Self::Cache(_)
            | Self::Configuration(_)
            | Self::Internal(_)
            | Self::Other(_) => 500,
        }
    }

    /// Returns a machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Cache(_) => "CACHE_ERROR",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::Internal(_) | Self::Other(_) => "INTERNAL_ERROR",
        }
    }

    /// Creates a not found error for a resource.
    #[must_use]
    pub fn not_found<T: ToString>(resource_type: &'static str, id: T) -> Self {
        Self::NotFound {
            resource_type,
            id: id.to_string(),
        }
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal<T: Into<String>>(message: T) -> Self {
        Self::Internal(message.into())
    }

    /// Creates a cache error.
    #[must_use]
    pub fn cache<T: Into<String>>(message: T) -> Self {
        Self::Cache(message.into())
    }
}

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for UserHubError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => Self::NotFound {
                resource_type: "database_row",
                id: "unknown".to_string(),
            },
            _ => Self::Database(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for UserHubError {
    fn from(err: serde_json::Error) -> Self {
        Self::Internal(format!("JSON serialization error: {}", err))
    }
}

/// Serializable error response for API responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ErrorResponse {
    /// Machine-readable error code
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

impl ErrorResponse {
    /// Creates a new error response from a `UserHubError`.
    #[must_use]
    pub fn from_error(error: &UserHubError) -> Self {
        Self {
            code: error.error_code().to_string(),
            message: error.to_string(),
        }
    }
}

impl From<&UserHubError> for ErrorResponse {
    fn from(error: &UserHubError) -> Self {
        Self::from_error(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(UserHubError::not_found("User", 1).status_code(), 404);
        assert_eq!(UserHubError::Database("db error".to_string()).status_code(), 500);
        assert_eq!(UserHubError::cache("redis down").status_code(), 500);
        assert_eq!(UserHubError::internal("oops").status_code(), 500);
        assert_eq!(
            UserHubError::Configuration("missing".to_string()).status_code(),
            500
        );
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(UserHubError::not_found("User", 1).error_code(), "NOT_FOUND");
        assert_eq!(
            UserHubError::Database("db".to_string()).error_code(),
            "DATABASE_ERROR"
        );
        assert_eq!(UserHubError::cache("c").error_code(), "CACHE_ERROR");
        assert_eq!(UserHubError::internal("err").error_code(), "INTERNAL_ERROR");
    }

    #[test]
    fn test_not_found_message() {
        let err = UserHubError::not_found("User", 42);
        assert_eq!(err.to_string(), "User not found by id 42");
    }

    #[test]
    fn test_error_response_from_error() {
        let err = UserHubError::not_found("User", 1);
        let response = ErrorResponse::from_error(&err);
        assert_eq!(response.code, "NOT_FOUND");
        assert!(!response.message.is_empty());
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<i64>("not a number").unwrap_err();
        let err = UserHubError::from(json_err);
        assert_eq!(err.error_code(), "INTERNAL_ERROR");
    }
}
