//! # bibliograph-graphql
//!
//! GraphQL API layer for the Bibliograph catalog.
//!
//! ## Overview
//!
//! The schema is static: queries over books, authors and users, and four
//! mutations. Two pieces of policy wrap the otherwise plain resolvers:
//!
//! - the book and user listings are served read-through from
//!   [`ListingCache`] and invalidated (never patched) by the mutations
//!   that change them;
//! - mutations are gated by [`AccessGuard`], which verifies the bearer
//!   token from the request's `Authorization` header and optionally
//!   requires an exact role, before the resolver body runs.
//!
//! ## Endpoints
//!
//! - `POST /graphql` — operation execution
//! - `GET /graphql` — GraphiQL, when enabled
//!
//! ## Modules
//!
//! - [`context`] — shared services and per-request data
//! - [`guard`] — the authorization guard
//! - [`types`] — object types mirroring the domain model
//! - [`query`] / [`mutation`] — the resolver roots
//! - [`handler`] — axum binding
//! - [`error`] — error-to-extension mapping
//!
//! [`ListingCache`]: bibliograph_cache::ListingCache
//! [`AccessGuard`]: guard::AccessGuard

pub mod context;
pub mod error;
pub mod guard;
pub mod handler;
pub mod mutation;
pub mod query;
pub mod types;

pub use context::{AuthHeader, BOOKS_CACHE_KEY, CatalogContext, USERS_CACHE_KEY};
pub use error::GraphQLError;
pub use guard::AccessGuard;
pub use handler::{CatalogSchema, build_schema, graphiql_handler, graphql_handler};
pub use mutation::MutationRoot;
pub use query::QueryRoot;
