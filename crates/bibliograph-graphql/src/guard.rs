//! Resolver authorization guard.

use async_graphql::{Context, ErrorExtensions, Guard};
use bibliograph_core::Role;

use crate::context::{AuthHeader, services};
use crate::error::GraphQLError;

/// Gates a resolver behind bearer-token verification and, optionally, an
/// exact role requirement.
///
/// Attached per resolver via the `guard` attribute, so each operation
/// opts into one of three postures by composition: no guard, any valid
/// token ([`AccessGuard::authenticated`]), or a specific role
/// ([`AccessGuard::role`]). Guards run before the resolver body; on
/// failure the resolver is never invoked, so a rejected request has no
/// partial side effects.
pub struct AccessGuard {
    required: Option<Role>,
}

impl AccessGuard {
    /// Requires any structurally valid, correctly signed token.
    #[must_use]
    pub fn authenticated() -> Self {
        Self { required: None }
    }

    /// Requires a verified token carrying exactly `required`.
    #[must_use]
    pub fn role(required: impl Into<Role>) -> Self {
        Self {
            required: Some(required.into()),
        }
    }
}

impl Guard for AccessGuard {
    async fn check(&self, ctx: &Context<'_>) -> async_graphql::Result<()> {
        let verifier = &services(ctx)?.verifier;
        let authorization = ctx
            .data_opt::<AuthHeader>()
            .and_then(|header| header.0.as_deref());
        verifier
            .authorize(authorization, self.required)
            .map_err(|e| GraphQLError::from(e).extend())?;
        Ok(())
    }
}
