//! Shared fixture for the GraphQL integration tests.
//!
//! Builds the real schema around an in-memory backend wrapped in a
//! call-counting decorator, so tests can assert which persistence
//! operations actually ran.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_graphql::{Request, Response};
use async_trait::async_trait;
use bibliograph_auth::{Claims, TokenVerifier};
use bibliograph_cache::{CacheBackend, ListingCache};
use bibliograph_core::{Author, Book, BookWithAuthor, Role, User};
use bibliograph_db_memory::InMemoryCatalog;
use bibliograph_graphql::{AuthHeader, CatalogContext, CatalogSchema, build_schema};
use bibliograph_storage::{
    CatalogStorage, DynStorage, NewAuthor, NewBook, NewUser, StorageError,
};
use jsonwebtoken::{EncodingKey, Header, encode};
use time::OffsetDateTime;
use time::macros::datetime;
use uuid::Uuid;

pub const TEST_SECRET: &[u8] = b"integration-test-secret-0123456789";

/// Storage decorator counting the calls the cache policy is supposed to
/// save or the guard is supposed to prevent.
pub struct CountingStorage {
    inner: InMemoryCatalog,
    pub list_books_calls: AtomicUsize,
    pub list_users_calls: AtomicUsize,
    pub create_book_calls: AtomicUsize,
}

impl CountingStorage {
    pub fn new() -> Self {
        Self {
            inner: InMemoryCatalog::new(),
            list_books_calls: AtomicUsize::new(0),
            list_users_calls: AtomicUsize::new(0),
            create_book_calls: AtomicUsize::new(0),
        }
    }

    /// Seeds an author without touching the counters.
    pub async fn seed_author(&self, name: &str) -> Author {
        self.inner.create_author(NewAuthor::new(name)).await.unwrap()
    }

    /// Seeds a book without touching the counters.
    pub async fn seed_book(&self, author_id: Uuid, title: &str) -> BookWithAuthor {
        self.inner
            .create_book(NewBook {
                title: title.to_string(),
                author_id,
                published_at: datetime!(1965-08-01 00:00:00 UTC),
                genre: None,
            })
            .await
            .unwrap()
    }

    pub fn list_books_count(&self) -> usize {
        self.list_books_calls.load(Ordering::SeqCst)
    }

    pub fn list_users_count(&self) -> usize {
        self.list_users_calls.load(Ordering::SeqCst)
    }

    pub fn create_book_count(&self) -> usize {
        self.create_book_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CatalogStorage for CountingStorage {
    async fn create_author(&self, author: NewAuthor) -> Result<Author, StorageError> {
        self.inner.create_author(author).await
    }

    async fn find_author(&self, id: Uuid) -> Result<Option<Author>, StorageError> {
        self.inner.find_author(id).await
    }

    async fn list_authors(&self) -> Result<Vec<Author>, StorageError> {
        self.inner.list_authors().await
    }

    async fn create_book(&self, book: NewBook) -> Result<BookWithAuthor, StorageError> {
        self.create_book_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.create_book(book).await
    }

    async fn find_book(&self, id: Uuid) -> Result<Option<BookWithAuthor>, StorageError> {
        self.inner.find_book(id).await
    }

    async fn list_books(&self) -> Result<Vec<BookWithAuthor>, StorageError> {
        self.list_books_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.list_books().await
    }

    async fn books_by_author(&self, author_id: Uuid) -> Result<Vec<Book>, StorageError> {
        self.inner.books_by_author(author_id).await
    }

    async fn delete_book(&self, id: Uuid) -> Result<bool, StorageError> {
        self.inner.delete_book(id).await
    }

    async fn create_user(&self, user: NewUser) -> Result<User, StorageError> {
        self.inner.create_user(user).await
    }

    async fn find_user(&self, id: Uuid) -> Result<Option<User>, StorageError> {
        self.inner.find_user(id).await
    }

    async fn list_users(&self) -> Result<Vec<User>, StorageError> {
        self.list_users_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.list_users().await
    }

    async fn delete_user(&self, id: Uuid) -> Result<bool, StorageError> {
        self.inner.delete_user(id).await
    }

    fn backend_name(&self) -> &'static str {
        "counting-memory"
    }
}

pub struct TestApp {
    pub schema: CatalogSchema,
    pub storage: Arc<CountingStorage>,
}

/// Builds the schema with a custom listing TTL.
pub fn app_with_ttl(ttl: Duration) -> TestApp {
    let storage = Arc::new(CountingStorage::new());
    let shared: DynStorage = storage.clone();
    let listings = ListingCache::new(CacheBackend::new_memory(), ttl);
    let verifier = Arc::new(TokenVerifier::new(TEST_SECRET));
    let context = CatalogContext::new(shared, listings, verifier);
    TestApp {
        schema: build_schema(context),
        storage,
    }
}

/// Builds the schema with the default 120 s listing TTL.
pub fn app() -> TestApp {
    app_with_ttl(Duration::from_secs(120))
}

/// Mints a token signed with the test secret.
pub fn token(role: Role) -> String {
    let now = OffsetDateTime::now_utc().unix_timestamp();
    let claims = Claims {
        sub: "tester".to_string(),
        role,
        iat: now,
        exp: now + 3600,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(TEST_SECRET),
    )
    .unwrap()
}

/// Mints a token signed with the wrong secret.
pub fn forged_token(role: Role) -> String {
    let now = OffsetDateTime::now_utc().unix_timestamp();
    let claims = Claims {
        sub: "intruder".to_string(),
        role,
        iat: now,
        exp: now + 3600,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(b"not-the-server-secret"),
    )
    .unwrap()
}

/// Executes an operation without credentials.
pub async fn exec(app: &TestApp, operation: &str) -> Response {
    app.schema
        .execute(Request::new(operation).data(AuthHeader(None)))
        .await
}

/// Executes an operation with a bearer token.
pub async fn exec_as(app: &TestApp, operation: &str, token: &str) -> Response {
    let header = AuthHeader(Some(format!("Bearer {token}")));
    app.schema
        .execute(Request::new(operation).data(header))
        .await
}

/// Returns the `extensions.code` of the first error, if any.
pub fn error_code(response: &Response) -> Option<String> {
    let extensions = response.errors.first()?.extensions.as_ref()?;
    let json = serde_json::to_value(extensions).ok()?;
    json["code"].as_str().map(str::to_owned)
}

/// Unwraps a successful response into its JSON data.
pub fn data(response: Response) -> serde_json::Value {
    assert!(
        response.errors.is_empty(),
        "unexpected errors: {:?}",
        response.errors
    );
    response.data.into_json().unwrap()
}
