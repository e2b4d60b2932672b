//! Authorization error types.

use bibliograph_core::Role;

/// Errors raised by the authorization pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// Missing, malformed, expired or otherwise unverifiable
    /// credentials. Deliberately cause-free: the caller learns only that
    /// authentication failed, the log learns why.
    #[error("Authentication required")]
    Unauthenticated,

    /// Verified credentials lacking the required role.
    #[error("Permission denied: {required} role required")]
    Forbidden {
        /// The role the operation demands.
        required: Role,
    },
}

impl AuthError {
    /// Returns the machine-readable code surfaced in API error
    /// extensions.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Unauthenticated => "UNAUTHENTICATED",
            Self::Forbidden { .. } => "FORBIDDEN",
        }
    }
}
