//! Book endpoints

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    Form, Json,
};

use crate::{
    error::AppResult,
    models::{BookWithAuthor, CreateBook},
};

/// List all books with their author names
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    responses(
        (status = 200, description = "List of books", body = Vec<BookWithAuthor>)
    )
)]
pub async fn list_books(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<BookWithAuthor>>> {
    let books = state.services.catalog.list_books().await?;
    Ok(Json(books))
}

/// Create a book from the home page form.
///
/// The author is resolved by name; an unseen name creates the author first.
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body(content = CreateBook, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 302, description = "Book created; redirect to home page"),
        (status = 400, description = "Missing required field")
    )
)]
pub async fn create_book(
    State(state): State<crate::AppState>,
    Form(form): Form<CreateBook>,
) -> AppResult<impl IntoResponse> {
    state
        .services
        .catalog
        .create_book(&form.title, &form.author, form.publication_date)
        .await?;

    Ok((StatusCode::FOUND, [(header::LOCATION, "/")]))
}
