//! Book model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Full book row from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub publication_date: DateTime<Utc>,
    pub author_id: i64,
}

/// Book row joined with its author's name, as returned by `GET /books`
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct BookWithAuthor {
    pub id: i64,
    pub title: String,
    pub publication_date: DateTime<Utc>,
    pub author_id: i64,
    pub author_name: String,
}

/// Book creation form (`POST /books`)
///
/// `author` is the author's name; an unseen name creates the author row
/// before the book insert.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateBook {
    pub title: String,
    pub author: String,
    /// Explicit publication timestamp (RFC 3339); defaults to insertion time.
    #[serde(default)]
    pub publication_date: Option<DateTime<Utc>>,
}
