//! Concurrent-map catalog storage.

use async_trait::async_trait;
use bibliograph_core::{Author, Book, BookWithAuthor, User};
use bibliograph_storage::{CatalogStorage, NewAuthor, NewBook, NewUser, StorageError};
use dashmap::DashMap;
use uuid::Uuid;

/// In-memory catalog backend over per-entity concurrent maps.
///
/// Listings are sorted (books by title, authors by name, users by
/// username, ID as tiebreak) so repeated reads observe a stable order.
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    authors: DashMap<Uuid, Author>,
    books: DashMap<Uuid, Book>,
    users: DashMap<Uuid, User>,
}

impl InMemoryCatalog {
    /// Creates an empty in-memory catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn author_of(&self, book: &Book) -> Result<Author, StorageError> {
        self.authors
            .get(&book.author_id)
            .map(|a| a.value().clone())
            // A book can only be created against an existing author and
            // authors cannot be deleted, so a dangling reference means
            // the maps themselves are corrupt.
            .ok_or_else(|| {
                StorageError::internal(format!(
                    "book {} references missing author {}",
                    book.id, book.author_id
                ))
            })
    }
}

#[async_trait]
impl CatalogStorage for InMemoryCatalog {
    async fn create_author(&self, author: NewAuthor) -> Result<Author, StorageError> {
        let record = Author {
            id: Uuid::new_v4(),
            name: author.name,
        };
        self.authors.insert(record.id, record.clone());
        Ok(record)
    }

    async fn find_author(&self, id: Uuid) -> Result<Option<Author>, StorageError> {
        Ok(self.authors.get(&id).map(|a| a.value().clone()))
    }

    async fn list_authors(&self) -> Result<Vec<Author>, StorageError> {
        let mut authors: Vec<Author> = self.authors.iter().map(|a| a.value().clone()).collect();
        authors.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
        Ok(authors)
    }

    async fn create_book(&self, book: NewBook) -> Result<BookWithAuthor, StorageError> {
        let author = self
            .authors
            .get(&book.author_id)
            .map(|a| a.value().clone())
            .ok_or_else(|| StorageError::not_found("Author", book.author_id.to_string()))?;

        let record = Book {
            id: Uuid::new_v4(),
            title: book.title,
            author_id: author.id,
            published_at: book.published_at,
            genre: book.genre,
        };
        self.books.insert(record.id, record.clone());
        Ok(BookWithAuthor {
            book: record,
            author,
        })
    }

    async fn find_book(&self, id: Uuid) -> Result<Option<BookWithAuthor>, StorageError> {
        let Some(book) = self.books.get(&id).map(|b| b.value().clone()) else {
            return Ok(None);
        };
        let author = self.author_of(&book)?;
        Ok(Some(BookWithAuthor { book, author }))
    }

    async fn list_books(&self) -> Result<Vec<BookWithAuthor>, StorageError> {
        let mut books: Vec<Book> = self.books.iter().map(|b| b.value().clone()).collect();
        books.sort_by(|a, b| a.title.cmp(&b.title).then(a.id.cmp(&b.id)));
        books
            .into_iter()
            .map(|book| {
                let author = self.author_of(&book)?;
                Ok(BookWithAuthor { book, author })
            })
            .collect()
    }

    async fn books_by_author(&self, author_id: Uuid) -> Result<Vec<Book>, StorageError> {
        let mut books: Vec<Book> = self
            .books
            .iter()
            .filter(|b| b.author_id == author_id)
            .map(|b| b.value().clone())
            .collect();
        books.sort_by(|a, b| a.title.cmp(&b.title).then(a.id.cmp(&b.id)));
        Ok(books)
    }

    async fn delete_book(&self, id: Uuid) -> Result<bool, StorageError> {
        Ok(self.books.remove(&id).is_some())
    }

    async fn create_user(&self, user: NewUser) -> Result<User, StorageError> {
        if self.users.iter().any(|u| u.email == user.email) {
            return Err(StorageError::already_exists("User", "email", user.email));
        }
        if self.users.iter().any(|u| u.username == user.username) {
            return Err(StorageError::already_exists(
                "User",
                "username",
                user.username,
            ));
        }

        let record = User {
            id: Uuid::new_v4(),
            email: user.email,
            username: user.username,
            password_hash: user.password_hash,
            role: user.role,
        };
        self.users.insert(record.id, record.clone());
        Ok(record)
    }

    async fn find_user(&self, id: Uuid) -> Result<Option<User>, StorageError> {
        Ok(self.users.get(&id).map(|u| u.value().clone()))
    }

    async fn list_users(&self) -> Result<Vec<User>, StorageError> {
        let mut users: Vec<User> = self.users.iter().map(|u| u.value().clone()).collect();
        users.sort_by(|a, b| a.username.cmp(&b.username).then(a.id.cmp(&b.id)));
        Ok(users)
    }

    async fn delete_user(&self, id: Uuid) -> Result<bool, StorageError> {
        Ok(self.users.remove(&id).is_some())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
