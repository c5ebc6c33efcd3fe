//! Books repository for database operations

use chrono::{DateTime, Utc};
use sqlx::{Pool, Sqlite};

use crate::{
    error::AppResult,
    models::{Book, BookWithAuthor},
};

#[derive(Clone)]
pub struct BooksRepository {
    pool: Pool<Sqlite>,
}

impl BooksRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    /// List all books joined with their author's name, in insertion order
    pub async fn list_with_authors(&self) -> AppResult<Vec<BookWithAuthor>> {
        let books = sqlx::query_as::<_, BookWithAuthor>(
            r#"
            SELECT b.id, b.title, b.publication_date, b.author_id, a.name AS author_name
            FROM book b
            JOIN author a ON a.id = b.author_id
            ORDER BY b.id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(books)
    }

    /// Insert a new book row.
    ///
    /// The publication date defaults to the insertion time when not supplied.
    pub async fn create(
        &self,
        title: &str,
        author_id: i64,
        publication_date: Option<DateTime<Utc>>,
    ) -> AppResult<Book> {
        let publication_date = publication_date.unwrap_or_else(Utc::now);

        let book = sqlx::query_as::<_, Book>(
            r#"
            INSERT INTO book (title, publication_date, author_id)
            VALUES ($1, $2, $3)
            RETURNING id, title, publication_date, author_id
            "#,
        )
        .bind(title)
        .bind(publication_date)
        .bind(author_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(book)
    }
}
