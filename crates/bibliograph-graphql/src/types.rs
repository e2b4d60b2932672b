//! GraphQL object types over the catalog domain model.

use async_graphql::{Context, Enum, ErrorExtensions, ID, Object};
use bibliograph_core::BookWithAuthor;
use bibliograph_storage::CatalogStorage;
use time::format_description::well_known::Rfc3339;
use uuid::Uuid;

use crate::context::services;
use crate::error::{GraphQLError, storage_err};

/// Access role exposed on users and accepted by `addUser`.
#[derive(Enum, Copy, Clone, Eq, PartialEq, Debug)]
#[graphql(remote = "bibliograph_core::Role")]
pub enum Role {
    User,
    Admin,
}

/// Parses a GraphQL `ID` argument as a UUID at the boundary.
pub(crate) fn parse_id(id: &ID) -> async_graphql::Result<Uuid> {
    Uuid::parse_str(id)
        .map_err(|_| GraphQLError::Validation(format!("malformed id {:?}", id.as_str())).extend())
}

/// A catalog book with its author embedded.
pub struct Book(pub(crate) BookWithAuthor);

#[Object]
impl Book {
    async fn id(&self) -> ID {
        ID(self.0.book.id.to_string())
    }

    async fn title(&self) -> &str {
        &self.0.book.title
    }

    async fn author(&self) -> Author {
        Author(self.0.author.clone())
    }

    /// Publication timestamp in RFC 3339 form.
    async fn published_at(&self) -> async_graphql::Result<String> {
        self.0
            .book
            .published_at
            .format(&Rfc3339)
            .map_err(|e| GraphQLError::Internal(e.to_string()).extend())
    }

    async fn genre(&self) -> Option<&str> {
        self.0.book.genre.as_deref()
    }
}

/// An author; `books` resolves lazily against the gateway.
pub struct Author(pub(crate) bibliograph_core::Author);

#[Object]
impl Author {
    async fn id(&self) -> ID {
        ID(self.0.id.to_string())
    }

    async fn name(&self) -> &str {
        &self.0.name
    }

    async fn books(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Book>> {
        let services = services(ctx)?;
        let books = services
            .storage
            .books_by_author(self.0.id)
            .await
            .map_err(storage_err)?;
        Ok(books
            .into_iter()
            .map(|book| {
                Book(BookWithAuthor {
                    book,
                    author: self.0.clone(),
                })
            })
            .collect())
    }
}

/// An identity record. The stored credential hash is deliberately not
/// part of the schema.
pub struct User(pub(crate) bibliograph_core::User);

#[Object]
impl User {
    async fn id(&self) -> ID {
        ID(self.0.id.to_string())
    }

    async fn email(&self) -> &str {
        &self.0.email
    }

    async fn username(&self) -> &str {
        &self.0.username
    }

    async fn role(&self) -> Role {
        self.0.role.into()
    }
}
