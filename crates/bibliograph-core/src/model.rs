//! Catalog entity records.
//!
//! These are the persisted shapes, independent of any API surface. The
//! GraphQL layer maps them to its own object types; the cache layer
//! serializes them as listing snapshots.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::Role;

/// An author of one or more books.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: Uuid,
    pub name: String,
}

/// A catalog book. `author_id` references an existing [`Author`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: Uuid,
    pub title: String,
    pub author_id: Uuid,
    #[serde(with = "time::serde::rfc3339")]
    pub published_at: OffsetDateTime,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub genre: Option<String>,
}

/// A book joined with its author, as served by the listing query and
/// stored in listing cache snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookWithAuthor {
    pub book: Book,
    pub author: Author,
}

/// An identity record. `password_hash` is an argon2id PHC string; the
/// plaintext password never reaches this type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub username: String,
    pub password_hash: String,
    pub role: Role,
}
