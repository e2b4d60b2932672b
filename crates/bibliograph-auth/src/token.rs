//! Bearer token extraction and verification.

use bibliograph_core::Role;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

use crate::claims::Claims;
use crate::error::AuthError;

/// Extracts the token from an `Authorization` header value.
///
/// Returns `None` unless the value is `Bearer <non-empty token>`.
#[must_use]
pub fn bearer_token(header: Option<&str>) -> Option<&str> {
    header?.strip_prefix("Bearer ").filter(|t| !t.is_empty())
}

/// Verifies HS256-signed bearer tokens against the server secret.
///
/// Constructed once at startup and shared; verification itself is pure
/// CPU work over the request's header.
pub struct TokenVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenVerifier {
    /// Creates a verifier for tokens signed with `secret`.
    #[must_use]
    pub fn new(secret: &[u8]) -> Self {
        Self {
            decoding_key: DecodingKey::from_secret(secret),
            validation: Validation::new(Algorithm::HS256),
        }
    }

    /// Verifies a raw token's signature and expiry.
    ///
    /// # Errors
    ///
    /// Any failure — bad signature, expired, malformed payload — is
    /// `AuthError::Unauthenticated`; the cause is logged at `debug`.
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                tracing::debug!(error = %e, "token verification failed");
                AuthError::Unauthenticated
            })
    }

    /// The full authorization pipeline stage applied in front of a
    /// gated resolver: extract the bearer token from the
    /// `Authorization` header value, verify it, then require an exact
    /// role match when `required` is set.
    ///
    /// # Errors
    ///
    /// `Unauthenticated` if extraction or verification fails;
    /// `Forbidden` if `required` is set and the verified role differs
    /// from it. Roles are compared for equality only — no hierarchy.
    pub fn authorize(
        &self,
        authorization: Option<&str>,
        required: Option<Role>,
    ) -> Result<Claims, AuthError> {
        let token = bearer_token(authorization).ok_or_else(|| {
            tracing::debug!("missing or malformed Authorization header");
            AuthError::Unauthenticated
        })?;
        let claims = self.verify(token)?;
        if let Some(required) = required {
            if claims.role != required {
                tracing::debug!(sub = %claims.sub, held = %claims.role, required = %required, "role mismatch");
                return Err(AuthError::Forbidden { required });
            }
        }
        Ok(claims)
    }
}
