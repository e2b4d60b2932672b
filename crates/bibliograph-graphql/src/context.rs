//! GraphQL execution context.
//!
//! Shared services are installed once as schema data; the request's
//! `Authorization` header is injected per execution by the HTTP handler.

use std::sync::Arc;

use async_graphql::{Context, ErrorExtensions};
use bibliograph_auth::TokenVerifier;
use bibliograph_cache::ListingCache;
use bibliograph_storage::DynStorage;

use crate::error::GraphQLError;

/// Cache key for the book listing snapshot.
pub const BOOKS_CACHE_KEY: &str = "books";

/// Cache key for the user listing snapshot.
pub const USERS_CACHE_KEY: &str = "users";

/// Long-lived services shared by every resolver.
///
/// Constructed once at startup and installed as schema data — explicit
/// dependencies, no module-level singletons, so tests swap in fakes by
/// building a schema around them.
#[derive(Clone)]
pub struct CatalogContext {
    /// Persistence gateway.
    pub storage: DynStorage,

    /// Read-through listing cache.
    pub listings: ListingCache,

    /// Bearer token verifier holding the server secret.
    pub verifier: Arc<TokenVerifier>,
}

impl CatalogContext {
    /// Creates the shared resolver context.
    #[must_use]
    pub fn new(storage: DynStorage, listings: ListingCache, verifier: Arc<TokenVerifier>) -> Self {
        Self {
            storage,
            listings,
            verifier,
        }
    }
}

/// The raw `Authorization` header value of the current request, if any.
///
/// Captured verbatim by the HTTP handler; bearer extraction and
/// verification happen in the guard so that failures are uniform.
pub struct AuthHeader(pub Option<String>);

/// Fetches the shared services from the execution context.
pub(crate) fn services<'ctx>(ctx: &Context<'ctx>) -> async_graphql::Result<&'ctx CatalogContext> {
    ctx.data::<CatalogContext>()
        .map_err(|_| GraphQLError::Internal("catalog context not installed".into()).extend())
}
