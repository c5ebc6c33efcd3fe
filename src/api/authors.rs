//! Author endpoints

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    Form, Json,
};

use crate::{
    error::AppResult,
    models::{Author, CreateAuthor},
};

/// List all authors
#[utoipa::path(
    get,
    path = "/authors",
    tag = "authors",
    responses(
        (status = 200, description = "List of authors", body = Vec<Author>)
    )
)]
pub async fn list_authors(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<Author>>> {
    let authors = state.services.catalog.list_authors().await?;
    Ok(Json(authors))
}

/// Create an author from the home page form.
///
/// Idempotent by name: posting an existing name reuses the row.
#[utoipa::path(
    post,
    path = "/authors",
    tag = "authors",
    request_body(content = CreateAuthor, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 302, description = "Author created or reused; redirect to home page"),
        (status = 400, description = "Missing required field")
    )
)]
pub async fn create_author(
    State(state): State<crate::AppState>,
    Form(form): Form<CreateAuthor>,
) -> AppResult<impl IntoResponse> {
    state.services.catalog.find_or_create_author(&form.name).await?;

    Ok((StatusCode::FOUND, [(header::LOCATION, "/")]))
}
