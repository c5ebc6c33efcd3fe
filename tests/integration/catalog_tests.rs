//! Catalog service tests against an in-memory store

use biblio_server::{repository::Repository, services::catalog::CatalogService};
use chrono::{TimeZone, Utc};
use sqlx::sqlite::SqlitePoolOptions;

/// Build a repository backed by an in-memory SQLite database.
///
/// The pool is pinned to one connection so the in-memory database outlives
/// individual queries.
async fn test_repository() -> Repository {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to open in-memory database");

    let repository = Repository::new(pool);
    repository
        .init_schema()
        .await
        .expect("Failed to initialize schema");
    repository
}

async fn test_catalog() -> CatalogService {
    CatalogService::new(test_repository().await)
}

#[tokio::test]
async fn find_or_create_author_is_idempotent_by_name() {
    let catalog = test_catalog().await;

    let first = catalog
        .find_or_create_author("Jane Austen")
        .await
        .expect("Failed to create author");
    let second = catalog
        .find_or_create_author("Jane Austen")
        .await
        .expect("Failed to look up author");

    assert_eq!(first.id, second.id);

    let authors = catalog.list_authors().await.expect("Failed to list authors");
    assert_eq!(authors.len(), 1);
    assert_eq!(authors[0].name, "Jane Austen");
}

#[tokio::test]
async fn author_round_trips_through_listing() {
    let catalog = test_catalog().await;

    let created = catalog
        .find_or_create_author("Jane Austen")
        .await
        .expect("Failed to create author");
    assert!(created.id > 0);

    let authors = catalog.list_authors().await.expect("Failed to list authors");
    assert_eq!(authors.len(), 1);
    assert_eq!(authors[0].id, created.id);
    assert_eq!(authors[0].name, "Jane Austen");
}

#[tokio::test]
async fn author_name_match_is_case_sensitive() {
    let catalog = test_catalog().await;

    let upper = catalog
        .find_or_create_author("Jane Austen")
        .await
        .expect("Failed to create author");
    let lower = catalog
        .find_or_create_author("jane austen")
        .await
        .expect("Failed to create author");

    assert_ne!(upper.id, lower.id);

    let authors = catalog.list_authors().await.expect("Failed to list authors");
    assert_eq!(authors.len(), 2);
}

#[tokio::test]
async fn create_book_creates_unseen_author() {
    let catalog = test_catalog().await;

    let book = catalog
        .create_book("Emma", "Jane Austen", None)
        .await
        .expect("Failed to create book");

    let authors = catalog.list_authors().await.expect("Failed to list authors");
    assert_eq!(authors.len(), 1);
    assert_eq!(authors[0].name, "Jane Austen");
    assert_eq!(book.author_id, authors[0].id);

    let books = catalog.list_books().await.expect("Failed to list books");
    assert_eq!(books.len(), 1);
    assert_eq!(books[0].title, "Emma");
    assert_eq!(books[0].author_name, "Jane Austen");
    assert_eq!(books[0].author_id, authors[0].id);
}

#[tokio::test]
async fn create_book_reuses_existing_author() {
    let catalog = test_catalog().await;

    let author = catalog
        .find_or_create_author("Jane Austen")
        .await
        .expect("Failed to create author");

    let emma = catalog
        .create_book("Emma", "Jane Austen", None)
        .await
        .expect("Failed to create book");
    let persuasion = catalog
        .create_book("Persuasion", "Jane Austen", None)
        .await
        .expect("Failed to create book");

    assert_eq!(emma.author_id, author.id);
    assert_eq!(persuasion.author_id, author.id);

    let authors = catalog.list_authors().await.expect("Failed to list authors");
    assert_eq!(authors.len(), 1);

    let books = catalog.list_books().await.expect("Failed to list books");
    assert_eq!(books.len(), 2);
}

#[tokio::test]
async fn explicit_publication_date_is_preserved() {
    let catalog = test_catalog().await;

    let date = Utc.with_ymd_and_hms(1815, 12, 23, 0, 0, 0).unwrap();
    let book = catalog
        .create_book("Emma", "Jane Austen", Some(date))
        .await
        .expect("Failed to create book");

    assert_eq!(book.publication_date, date);

    let books = catalog.list_books().await.expect("Failed to list books");
    assert_eq!(books[0].publication_date, date);
}

#[tokio::test]
async fn publication_date_defaults_to_insertion_time() {
    let catalog = test_catalog().await;

    let before = Utc::now();
    let book = catalog
        .create_book("Emma", "Jane Austen", None)
        .await
        .expect("Failed to create book");
    let after = Utc::now();

    assert!(book.publication_date >= before);
    assert!(book.publication_date <= after);
}

#[tokio::test]
async fn listing_length_matches_row_count() {
    let catalog = test_catalog().await;

    for name in ["A", "B", "C"] {
        catalog
            .find_or_create_author(name)
            .await
            .expect("Failed to create author");
    }
    catalog
        .create_book("One", "A", None)
        .await
        .expect("Failed to create book");
    catalog
        .create_book("Two", "B", None)
        .await
        .expect("Failed to create book");

    let authors = catalog.list_authors().await.expect("Failed to list authors");
    assert_eq!(authors.len(), 3);

    let books = catalog.list_books().await.expect("Failed to list books");
    assert_eq!(books.len(), 2);
}

#[tokio::test]
async fn duplicate_author_insert_violates_unique_constraint() {
    let repository = test_repository().await;

    repository
        .authors
        .create("Jane Austen")
        .await
        .expect("Failed to create author");

    // Bypassing the find-or-create lookup hits the unique name constraint
    let result = repository.authors.create("Jane Austen").await;
    assert!(result.is_err());
}
