//! Unified error types for all layers of the application.

use std::fmt::Debug;
use thiserror::Error;

/// Unified error type for all layers of the Johnjud backend.
///
/// The transport layer maps each variant onto one caller-facing status
/// category; storage and RPC failures are re-wrapped by the services before
/// they reach it.
#[derive(Error, Debug)]
pub enum JohnjudError {
    // ============ Domain Errors ============
    /// Resource not found (or soft-deleted)
    #[error("Resource not found: {resource_type} with id {id}")]
    NotFound {
        resource_type: &'static str,
        id: String,
    },

    /// Malformed input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Conflict error (e.g., duplicate entry)
    #[error("Conflict: {0}")]
    Conflict(String),

    // ============ Infrastructure Errors ============
    /// Database error
    #[error("Database error: {0}")]
    Database(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// External service error
    #[error("External service error: {service} - {message}")]
    ExternalService { service: String, message: String },

    /// A collaborator could not be reached
    #[error("Service unavailable: {0}")]
    Unavailable(String),

    // ============ Internal Errors ============
    /// Operation exists on the surface but has no implementation
    #[error("Not implemented: {0}")]
    NotImplemented(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Generic error wrapper
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl JohnjudError {
    /// Creates a not found error for a resource.
    #[must_use]
    pub fn not_found<T: ToString>(resource_type: &'static str, id: T) -> Self {
        Self::NotFound {
            resource_type,
            id: id.to_string(),
        }
    }

    /// Creates a validation error.
    #[must_use]
    pub fn validation<T: Into<String>>(message: T) -> Self {
        Self::Validation(message.into())
    }

    /// Creates a conflict error.
    #[must_use]
    pub fn conflict<T: Into<String>>(message: T) -> Self {
        Self::Conflict(message.into())
    }

    /// Creates an unavailable error.
    #[must_use]
    pub fn unavailable<T: Into<String>>(message: T) -> Self {
        Self::Unavailable(message.into())
    }

    /// Creates a not implemented error.
    #[must_use]
    pub fn not_implemented<T: Into<String>>(operation: T) -> Self {
        Self::NotImplemented(operation.into())
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal<T: Into<String>>(message: T) -> Self {
        Self::Internal(message.into())
    }

    /// Returns true for `NotFound`.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Returns true when the failure means a collaborator could not be reached.
    #[must_use]
    pub const fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable(_))
    }
}

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for JohnjudError {
    /// Keeps the driver text only on the variants that never reach a caller.
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => Self::NotFound {
                resource_type: "database_row",
                id: "unknown".to_string(),
            },
            sqlx::Error::Database(db_err) => match db_err.code().as_deref() {
                // PostgreSQL unique violation
                Some("23505") => {
                    tracing::debug!("unique violation: {}", db_err);
                    Self::Conflict("duplicate entry".to_string())
                }
                // PostgreSQL foreign key violation
                Some("23503") => {
                    tracing::debug!("foreign key violation: {}", db_err);
                    Self::Validation("referenced record does not exist".to_string())
                }
                _ => Self::Database(err.to_string()),
            },
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
                tracing::warn!("database unreachable: {}", err);
                Self::Unavailable("database unavailable".to_string())
            }
            _ => Self::Database(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_constructors() {
        let not_found = JohnjudError::not_found("Pet", "123");
        assert!(not_found.to_string().contains("Pet"));
        assert!(not_found.to_string().contains("123"));

        let validation = JohnjudError::validation("invalid field");
        assert!(validation.to_string().contains("invalid field"));

        let conflict = JohnjudError::conflict("duplicate");
        assert!(matches!(conflict, JohnjudError::Conflict(_)));
    }

    #[test]
    fn test_classification_helpers() {
        assert!(JohnjudError::not_found("Like", "x").is_not_found());
        assert!(!JohnjudError::internal("x").is_not_found());
        assert!(JohnjudError::unavailable("x").is_unavailable());
        assert!(!JohnjudError::Database("x".to_string()).is_unavailable());
    }

    #[test]
    fn test_from_sqlx_row_not_found() {
        let err = JohnjudError::from(sqlx::Error::RowNotFound);
        assert!(err.is_not_found());
    }

    #[test]
    fn test_from_sqlx_pool_timeout_is_unavailable() {
        let err = JohnjudError::from(sqlx::Error::PoolTimedOut);
        assert!(err.is_unavailable());
        assert!(!err.to_string().contains("pool timed out"));
    }

    #[test]
    fn test_from_anyhow() {
        let err: JohnjudError = anyhow::anyhow!("wrapped").into();
        assert!(matches!(err, JohnjudError::Other(_)));
        assert_eq!(err.to_string(), "wrapped");
    }
}
