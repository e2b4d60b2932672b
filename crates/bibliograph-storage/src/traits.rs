//! The persistence gateway trait.

use async_trait::async_trait;
use bibliograph_core::{Author, Book, BookWithAuthor, User};
use uuid::Uuid;

use crate::error::StorageError;
use crate::types::{NewAuthor, NewBook, NewUser};

/// Typed persistence operations over the catalog entities.
///
/// Implementations must be thread-safe (`Send + Sync`); a single backend
/// instance is shared across all in-flight requests. Errors are reserved
/// for infrastructure failures and constraint violations — a missing
/// record on `find_*` is `Ok(None)` and on `delete_*` is `Ok(false)`.
///
/// # Example
///
/// ```ignore
/// use bibliograph_storage::{CatalogStorage, StorageError};
/// use bibliograph_core::BookWithAuthor;
/// use uuid::Uuid;
///
/// async fn fetch(storage: &dyn CatalogStorage, id: Uuid) -> Result<BookWithAuthor, StorageError> {
///     storage
///         .find_book(id)
///         .await?
///         .ok_or_else(|| StorageError::not_found("Book", id.to_string()))
/// }
/// ```
#[async_trait]
pub trait CatalogStorage: Send + Sync {
    // ==================== Authors ====================

    /// Creates a new author and returns the stored record.
    async fn create_author(&self, author: NewAuthor) -> Result<Author, StorageError>;

    /// Finds an author by ID. Returns `None` if absent.
    async fn find_author(&self, id: Uuid) -> Result<Option<Author>, StorageError>;

    /// Lists all authors in a deterministic order.
    async fn list_authors(&self) -> Result<Vec<Author>, StorageError>;

    // ==================== Books ====================

    /// Creates a new book and returns it joined with its author.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::NotFound` for `Author` if `author_id` does
    /// not reference an existing author.
    async fn create_book(&self, book: NewBook) -> Result<BookWithAuthor, StorageError>;

    /// Finds a book by ID, joined with its author. Returns `None` if
    /// absent.
    async fn find_book(&self, id: Uuid) -> Result<Option<BookWithAuthor>, StorageError>;

    /// Lists all books joined with their authors, in a deterministic
    /// order.
    async fn list_books(&self) -> Result<Vec<BookWithAuthor>, StorageError>;

    /// Lists the books of one author, in a deterministic order.
    async fn books_by_author(&self, author_id: Uuid) -> Result<Vec<Book>, StorageError>;

    /// Deletes a book. Returns `true` iff a record was removed.
    async fn delete_book(&self, id: Uuid) -> Result<bool, StorageError>;

    // ==================== Users ====================

    /// Creates a new user.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::AlreadyExists` if the email or username is
    /// already taken.
    async fn create_user(&self, user: NewUser) -> Result<User, StorageError>;

    /// Finds a user by ID. Returns `None` if absent.
    async fn find_user(&self, id: Uuid) -> Result<Option<User>, StorageError>;

    /// Lists all users in a deterministic order.
    async fn list_users(&self) -> Result<Vec<User>, StorageError>;

    /// Deletes a user. Returns `true` iff a record was removed.
    async fn delete_user(&self, id: Uuid) -> Result<bool, StorageError>;

    // ==================== Metadata ====================

    /// Returns the name of this backend for logging.
    fn backend_name(&self) -> &'static str;
}
