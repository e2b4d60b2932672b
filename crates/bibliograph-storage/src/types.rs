//! Input records accepted by the persistence gateway.
//!
//! These carry everything a backend needs to mint a stored record. IDs
//! are assigned by the backend; password hashing happens above the
//! gateway, so `NewUser` already carries the hash.

use bibliograph_core::Role;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

/// Input for creating an author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAuthor {
    pub name: String,
}

impl NewAuthor {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Input for creating a book. `author_id` must reference an existing
/// author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewBook {
    pub title: String,
    pub author_id: Uuid,
    #[serde(with = "time::serde::rfc3339")]
    pub published_at: OffsetDateTime,
    pub genre: Option<String>,
}

/// Input for creating a user. `password_hash` is the already-hashed
/// credential; backends never see plaintext.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub email: String,
    pub username: String,
    pub password_hash: String,
    pub role: Role,
}
