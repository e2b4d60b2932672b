//! Listing cache behavior through the full GraphQL stack: read-through
//! population, invalidate-on-write, TTL expiry.

mod common;

use std::time::Duration;

use bibliograph_core::Role;
use common::*;

const BOOKS_QUERY: &str = "{ books { id title publishedAt genre author { id name } } }";
const USERS_QUERY: &str = "{ users { id username email role } }";

#[tokio::test]
async fn test_books_read_through_hits_storage_once() {
    let app = app();
    let author = app.storage.seed_author("Frank Herbert").await;
    app.storage.seed_book(author.id, "Dune").await;

    let first = data(exec(&app, BOOKS_QUERY).await);
    assert_eq!(app.storage.list_books_count(), 1);
    assert_eq!(first["books"][0]["title"], "Dune");

    let second = data(exec(&app, BOOKS_QUERY).await);
    assert_eq!(
        app.storage.list_books_count(),
        1,
        "second read must be served from cache"
    );
    assert_eq!(second, first, "cached read must be identical to the first");
}

#[tokio::test]
async fn test_add_book_invalidates_books_listing() {
    let app = app();
    let author = app.storage.seed_author("Ursula K. Le Guin").await;
    app.storage.seed_book(author.id, "The Dispossessed").await;

    data(exec(&app, BOOKS_QUERY).await);
    assert_eq!(app.storage.list_books_count(), 1);

    let mutation = format!(
        r#"mutation {{ addBook(title: "The Left Hand of Darkness", authorId: "{}", publishedAt: "1969-03-01T00:00:00Z") {{ id title }} }}"#,
        author.id
    );
    data(exec_as(&app, &mutation, &token(Role::User)).await);

    let listing = data(exec(&app, BOOKS_QUERY).await);
    assert_eq!(
        app.storage.list_books_count(),
        2,
        "post-write read must go back to storage"
    );
    let titles: Vec<&str> = listing["books"]
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["title"].as_str().unwrap())
        .collect();
    assert!(titles.contains(&"The Left Hand of Darkness"));
}

#[tokio::test]
async fn test_delete_book_invalidates_books_listing() {
    let app = app();
    let author = app.storage.seed_author("Mary Shelley").await;
    let stored = app.storage.seed_book(author.id, "Frankenstein").await;

    data(exec(&app, BOOKS_QUERY).await);
    assert_eq!(app.storage.list_books_count(), 1);

    let mutation = format!(r#"mutation {{ deleteBook(id: "{}") }}"#, stored.book.id);
    let result = data(exec_as(&app, &mutation, &token(Role::Admin)).await);
    assert_eq!(result["deleteBook"], true);

    let listing = data(exec(&app, BOOKS_QUERY).await);
    assert_eq!(app.storage.list_books_count(), 2);
    assert!(listing["books"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_delete_of_absent_book_is_false_and_keeps_cache() {
    let app = app();
    let author = app.storage.seed_author("Italo Calvino").await;
    app.storage.seed_book(author.id, "Invisible Cities").await;

    data(exec(&app, BOOKS_QUERY).await);
    assert_eq!(app.storage.list_books_count(), 1);

    let mutation = format!(
        r#"mutation {{ deleteBook(id: "{}") }}"#,
        uuid::Uuid::new_v4()
    );
    let result = data(exec_as(&app, &mutation, &token(Role::Admin)).await);
    assert_eq!(result["deleteBook"], false);

    // Nothing changed, so the snapshot is still live.
    data(exec(&app, BOOKS_QUERY).await);
    assert_eq!(app.storage.list_books_count(), 1);
}

#[tokio::test]
async fn test_expired_snapshot_triggers_refetch() {
    let app = app_with_ttl(Duration::from_millis(20));
    let author = app.storage.seed_author("Stanislaw Lem").await;
    app.storage.seed_book(author.id, "Solaris").await;

    data(exec(&app, BOOKS_QUERY).await);
    assert_eq!(app.storage.list_books_count(), 1);

    tokio::time::sleep(Duration::from_millis(50)).await;

    data(exec(&app, BOOKS_QUERY).await);
    assert_eq!(
        app.storage.list_books_count(),
        2,
        "an expired snapshot must read as a miss"
    );
}

#[tokio::test]
async fn test_users_listing_read_through_and_invalidation() {
    let app = app();

    let first = data(exec(&app, USERS_QUERY).await);
    assert!(first["users"].as_array().unwrap().is_empty());
    data(exec(&app, USERS_QUERY).await);
    assert_eq!(app.storage.list_users_count(), 1);

    let mutation = r#"mutation { addUser(email: "sam@shelf.dev", username: "sam", password: "hunter2") { id } }"#;
    data(exec_as(&app, mutation, &token(Role::Admin)).await);

    let listing = data(exec(&app, USERS_QUERY).await);
    assert_eq!(app.storage.list_users_count(), 2);
    assert_eq!(listing["users"][0]["username"], "sam");
}
