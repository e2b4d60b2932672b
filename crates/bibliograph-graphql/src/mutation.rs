//! Mutation resolvers.
//!
//! Every mutation is guarded: `addBook` accepts any verified token,
//! the rest require `ADMIN`. Cache invalidation runs only after the
//! persistence write succeeds, and only when the underlying collection
//! actually changed.

use async_graphql::{Context, ErrorExtensions, ID, Object};
use bibliograph_auth::password;
use bibliograph_storage::{CatalogStorage, NewBook, NewUser};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use crate::context::{BOOKS_CACHE_KEY, USERS_CACHE_KEY, services};
use crate::error::{GraphQLError, storage_err};
use crate::guard::AccessGuard;
use crate::types::{Book, Role, User, parse_id};

/// Root mutation type.
pub struct MutationRoot;

fn require_non_empty(field: &'static str, value: String) -> async_graphql::Result<String> {
    if value.trim().is_empty() {
        return Err(GraphQLError::Validation(format!("{field} must not be empty")).extend());
    }
    Ok(value)
}

#[Object]
impl MutationRoot {
    /// Adds a book to the catalog. Contributing requires a valid token;
    /// no particular role.
    #[graphql(guard = "AccessGuard::authenticated()")]
    async fn add_book(
        &self,
        ctx: &Context<'_>,
        title: String,
        author_id: ID,
        published_at: String,
        genre: Option<String>,
    ) -> async_graphql::Result<Book> {
        let services = services(ctx)?;
        let title = require_non_empty("title", title)?;
        let author_id = parse_id(&author_id)?;
        let published_at = OffsetDateTime::parse(&published_at, &Rfc3339).map_err(|_| {
            GraphQLError::Validation("publishedAt must be an RFC 3339 timestamp".into()).extend()
        })?;

        let created = services
            .storage
            .create_book(NewBook {
                title,
                author_id,
                published_at,
                genre,
            })
            .await
            .map_err(storage_err)?;

        services.listings.invalidate(BOOKS_CACHE_KEY).await;
        tracing::info!(book_id = %created.book.id, "book added");
        Ok(Book(created))
    }

    /// Removes a book. Returns `true` iff one was removed.
    #[graphql(guard = "AccessGuard::role(Role::Admin)")]
    async fn delete_book(&self, ctx: &Context<'_>, id: ID) -> async_graphql::Result<bool> {
        let services = services(ctx)?;
        let id = parse_id(&id)?;
        let removed = services.storage.delete_book(id).await.map_err(storage_err)?;
        if removed {
            services.listings.invalidate(BOOKS_CACHE_KEY).await;
            tracing::info!(book_id = %id, "book deleted");
        }
        Ok(removed)
    }

    /// Creates a user. The password is hashed before it reaches the
    /// gateway; `role` defaults to `USER`.
    #[graphql(guard = "AccessGuard::role(Role::Admin)")]
    async fn add_user(
        &self,
        ctx: &Context<'_>,
        email: String,
        username: String,
        password: String,
        role: Option<Role>,
    ) -> async_graphql::Result<User> {
        let services = services(ctx)?;
        let email = require_non_empty("email", email)?;
        if !email.contains('@') {
            return Err(GraphQLError::Validation("email must contain '@'".into()).extend());
        }
        let username = require_non_empty("username", username)?;
        if password.is_empty() {
            return Err(GraphQLError::Validation("password must not be empty".into()).extend());
        }

        // Argon2id is CPU-bound; keep it off the async workers.
        let password_hash = tokio::task::spawn_blocking(move || password::hash_password(&password))
            .await
            .map_err(|e| GraphQLError::Internal(format!("hashing task failed: {e}")).extend())?
            .map_err(|e| GraphQLError::Internal(format!("password hashing failed: {e}")).extend())?;

        let created = services
            .storage
            .create_user(NewUser {
                email,
                username,
                password_hash,
                role: role.map(Into::into).unwrap_or_default(),
            })
            .await
            .map_err(storage_err)?;

        services.listings.invalidate(USERS_CACHE_KEY).await;
        tracing::info!(user_id = %created.id, role = %created.role, "user added");
        Ok(User(created))
    }

    /// Removes a user. Returns `true` iff one was removed.
    #[graphql(guard = "AccessGuard::role(Role::Admin)")]
    async fn delete_user(&self, ctx: &Context<'_>, id: ID) -> async_graphql::Result<bool> {
        let services = services(ctx)?;
        let id = parse_id(&id)?;
        let removed = services.storage.delete_user(id).await.map_err(storage_err)?;
        if removed {
            services.listings.invalidate(USERS_CACHE_KEY).await;
            tracing::info!(user_id = %id, "user deleted");
        }
        Ok(removed)
    }
}
