//! # bibliograph-auth
//!
//! Authentication and authorization primitives for Bibliograph.
//!
//! ## Scope
//!
//! This crate **verifies** credentials; it never issues them. Tokens are
//! minted by an external issuer sharing the HS256 secret. What lives
//! here:
//!
//! - [`Claims`] — the verified token payload (holder identity + role).
//! - [`TokenVerifier`] — signature/expiry verification and the
//!   [`TokenVerifier::authorize`] pipeline stage used to gate resolvers:
//!   bearer extraction, verification, optional exact role match.
//! - [`password`] — argon2id credential hashing for stored users.
//!
//! ## Error surface
//!
//! Every verification failure collapses to [`AuthError::Unauthenticated`]
//! with a uniform message; the distinguishing cause is logged at `debug`
//! and never surfaced to the caller. A verified token with the wrong
//! role is [`AuthError::Forbidden`].

mod claims;
mod error;
pub mod password;
mod token;

pub use claims::Claims;
pub use error::AuthError;
pub use token::{TokenVerifier, bearer_token};

/// Result type for auth operations.
pub type AuthResult<T> = Result<T, AuthError>;
