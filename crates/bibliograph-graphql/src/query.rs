//! Query resolvers.

use async_graphql::{Context, ID, Object};
use bibliograph_core::BookWithAuthor;
use bibliograph_storage::CatalogStorage;

use crate::context::{BOOKS_CACHE_KEY, USERS_CACHE_KEY, services};
use crate::error::storage_err;
use crate::types::{Author, Book, User, parse_id};

/// Root query type. All queries are public.
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// The full book listing with authors embedded, served read-through
    /// from the listing cache.
    async fn books(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Book>> {
        let services = services(ctx)?;
        if let Some(listing) = services
            .listings
            .get::<Vec<BookWithAuthor>>(BOOKS_CACHE_KEY)
            .await
        {
            return Ok(listing.into_iter().map(Book).collect());
        }

        let listing = services.storage.list_books().await.map_err(storage_err)?;
        tracing::debug!(count = listing.len(), "book listing fetched from storage");
        services.listings.put(BOOKS_CACHE_KEY, &listing).await;
        Ok(listing.into_iter().map(Book).collect())
    }

    /// A single book by ID; `null` when absent.
    async fn book(&self, ctx: &Context<'_>, id: ID) -> async_graphql::Result<Option<Book>> {
        let services = services(ctx)?;
        let id = parse_id(&id)?;
        let found = services.storage.find_book(id).await.map_err(storage_err)?;
        Ok(found.map(Book))
    }

    /// All authors; each author's books resolve lazily.
    async fn authors(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Author>> {
        let services = services(ctx)?;
        let authors = services.storage.list_authors().await.map_err(storage_err)?;
        Ok(authors.into_iter().map(Author).collect())
    }

    /// The user listing, served read-through like `books`.
    async fn users(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<User>> {
        let services = services(ctx)?;
        if let Some(listing) = services
            .listings
            .get::<Vec<bibliograph_core::User>>(USERS_CACHE_KEY)
            .await
        {
            return Ok(listing.into_iter().map(User).collect());
        }

        let listing = services.storage.list_users().await.map_err(storage_err)?;
        tracing::debug!(count = listing.len(), "user listing fetched from storage");
        services.listings.put(USERS_CACHE_KEY, &listing).await;
        Ok(listing.into_iter().map(User).collect())
    }

    /// A single user by ID; `null` when absent.
    async fn user(&self, ctx: &Context<'_>, id: ID) -> async_graphql::Result<Option<User>> {
        let services = services(ctx)?;
        let id = parse_id(&id)?;
        let found = services.storage.find_user(id).await.map_err(storage_err)?;
        Ok(found.map(User))
    }
}
