//! Error types for GraphQL operations.
//!
//! Failures surface to clients as request-level GraphQL errors carrying
//! a machine-readable `extensions.code`; resolver signatures stay on
//! `async_graphql::Result`.

use async_graphql::ErrorExtensions;
use bibliograph_auth::AuthError;
use bibliograph_storage::StorageError;

/// Errors that can occur while executing GraphQL operations.
#[derive(Debug, thiserror::Error)]
pub enum GraphQLError {
    /// Authentication required or credentials unverifiable. Uniform
    /// message; the cause stays in the logs.
    #[error("Authentication required")]
    Unauthenticated,

    /// Verified credentials, insufficient role.
    #[error("{0}")]
    Forbidden(String),

    /// Input rejected at the boundary.
    #[error("Invalid input: {0}")]
    Validation(String),

    /// A referenced record does not exist.
    #[error("{entity} {id} not found")]
    NotFound {
        /// Kind of the missing record.
        entity: &'static str,
        /// Identifier that did not resolve.
        id: String,
    },

    /// A uniqueness constraint was violated.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// The persistence layer failed.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl GraphQLError {
    /// Returns the error code for GraphQL error extensions.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Unauthenticated => "UNAUTHENTICATED",
            Self::Forbidden(_) => "FORBIDDEN",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Conflict(_) => "CONFLICT",
            Self::Storage(_) => "STORAGE_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl ErrorExtensions for GraphQLError {
    fn extend(&self) -> async_graphql::Error {
        async_graphql::Error::new(self.to_string())
            .extend_with(|_, e| e.set("code", self.error_code()))
    }
}

impl From<AuthError> for GraphQLError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::Unauthenticated => Self::Unauthenticated,
            AuthError::Forbidden { .. } => Self::Forbidden(err.to_string()),
        }
    }
}

impl From<StorageError> for GraphQLError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::NotFound { entity, id } => Self::NotFound { entity, id },
            StorageError::AlreadyExists { .. } => Self::Conflict(err.to_string()),
            other => Self::Storage(other.to_string()),
        }
    }
}

/// Maps a storage failure to an extension-carrying GraphQL error.
pub(crate) fn storage_err(err: StorageError) -> async_graphql::Error {
    GraphQLError::from(err).extend()
}
