//! Verified token payload.

use bibliograph_core::Role;
use serde::{Deserialize, Serialize};

/// The payload of a verified bearer token.
///
/// A `Claims` value only exists after [`TokenVerifier`] has checked the
/// signature and expiry — holding one is proof of authentication. It is
/// read per request and discarded, never stored.
///
/// [`TokenVerifier`]: crate::TokenVerifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Holder identity (user ID or username, issuer's choice).
    pub sub: String,
    /// Access role granted to the holder.
    pub role: Role,
    /// Issued-at, seconds since the Unix epoch.
    pub iat: i64,
    /// Expiry, seconds since the Unix epoch.
    pub exp: i64,
}
