//! # bibliograph-core
//!
//! Core domain types for the Bibliograph catalog service.
//!
//! This crate defines the entities shared across the workspace: books,
//! authors, users and the access role enum. It carries no I/O and no
//! framework types; the persistence gateway, cache and GraphQL layers all
//! build on these records.

pub mod model;
pub mod role;

pub use model::{Author, Book, BookWithAuthor, User};
pub use role::{Role, RoleParseError};
