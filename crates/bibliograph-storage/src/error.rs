//! Storage error types for the persistence gateway.

/// Errors that can occur during storage operations.
///
/// Absence of a record is not represented here: find operations return
/// `Option` and deletes return `bool`. `NotFound` is reserved for a
/// *referenced* record that must exist, such as the author of a new book.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// A referenced record does not exist.
    #[error("{entity} {id} not found")]
    NotFound {
        /// The kind of record that was missing (e.g. `"Author"`).
        entity: &'static str,
        /// The identifier that did not resolve.
        id: String,
    },

    /// A uniqueness constraint was violated.
    #[error("{entity} with {field} {value:?} already exists")]
    AlreadyExists {
        /// The kind of record (e.g. `"User"`).
        entity: &'static str,
        /// The constrained field (e.g. `"email"`).
        field: &'static str,
        /// The conflicting value.
        value: String,
    },

    /// Failed to reach the storage backend.
    #[error("Connection error: {message}")]
    Connection {
        /// Description of the connection failure.
        message: String,
    },

    /// An internal backend error occurred.
    #[error("Internal storage error: {message}")]
    Internal {
        /// Description of the internal error.
        message: String,
    },
}

impl StorageError {
    /// Creates a new `NotFound` error.
    #[must_use]
    pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity,
            id: id.into(),
        }
    }

    /// Creates a new `AlreadyExists` error.
    #[must_use]
    pub fn already_exists(
        entity: &'static str,
        field: &'static str,
        value: impl Into<String>,
    ) -> Self {
        Self::AlreadyExists {
            entity,
            field,
            value: value.into(),
        }
    }

    /// Creates a new `Connection` error.
    #[must_use]
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Creates a new `Internal` error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Returns `true` if this is a not found error.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Returns `true` if this is a uniqueness conflict.
    #[must_use]
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::AlreadyExists { .. })
    }
}
