//! Catalog management service

use chrono::{DateTime, Utc};

use crate::{
    error::AppResult,
    models::{Author, Book, BookWithAuthor},
    repository::Repository,
};

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List all authors
    pub async fn list_authors(&self) -> AppResult<Vec<Author>> {
        self.repository.authors.list().await
    }

    /// List all books with their author names
    pub async fn list_books(&self) -> AppResult<Vec<BookWithAuthor>> {
        self.repository.books.list_with_authors().await
    }

    /// Find an author by exact name, creating it when absent.
    ///
    /// This is a read-then-write sequence, not an atomic upsert: two
    /// concurrent requests for the same unseen name can both pass the
    /// lookup, and the losing insert then fails on the unique name
    /// constraint.
    pub async fn find_or_create_author(&self, name: &str) -> AppResult<Author> {
        if let Some(author) = self.repository.authors.find_by_name(name).await? {
            return Ok(author);
        }

        let author = self.repository.authors.create(name).await?;
        tracing::info!("Created author id={} name={:?}", author.id, author.name);
        Ok(author)
    }

    /// Create a book, resolving its author by name first.
    ///
    /// An unseen author name creates the author row before the book insert.
    pub async fn create_book(
        &self,
        title: &str,
        author_name: &str,
        publication_date: Option<DateTime<Utc>>,
    ) -> AppResult<Book> {
        let author = self.find_or_create_author(author_name).await?;
        let book = self
            .repository
            .books
            .create(title, author.id, publication_date)
            .await?;

        tracing::info!(
            "Created book id={} title={:?} author_id={}",
            book.id,
            book.title,
            book.author_id
        );

        Ok(book)
    }
}
