//! Authors repository for database operations

use sqlx::{Pool, Sqlite};

use crate::{error::AppResult, models::Author};

#[derive(Clone)]
pub struct AuthorsRepository {
    pool: Pool<Sqlite>,
}

impl AuthorsRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    /// List all authors in insertion order
    pub async fn list(&self) -> AppResult<Vec<Author>> {
        let authors = sqlx::query_as::<_, Author>("SELECT id, name FROM author ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(authors)
    }

    /// Find an author by name. Matching is exact and case-sensitive.
    pub async fn find_by_name(&self, name: &str) -> AppResult<Option<Author>> {
        let author = sqlx::query_as::<_, Author>("SELECT id, name FROM author WHERE name = $1")
            .bind(name)
            .fetch_optional(&self.pool)
            .await?;

        Ok(author)
    }

    /// Insert a new author row.
    ///
    /// Callers must have checked `find_by_name` first; a duplicate name
    /// violates the unique constraint and surfaces as a database error.
    pub async fn create(&self, name: &str) -> AppResult<Author> {
        let author = sqlx::query_as::<_, Author>(
            "INSERT INTO author (name) VALUES ($1) RETURNING id, name",
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await?;

        Ok(author)
    }
}
