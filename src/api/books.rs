//! Book catalog endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use axum_extra::extract::WithRejection;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookPayload},
    AppState,
};

/// List response wrapper carrying the deployment label
#[derive(Serialize, ToSchema)]
pub struct BookListResponse {
    /// Deployment label from process configuration
    pub deployment: String,
    pub books: Vec<Book>,
}

/// Count response
#[derive(Serialize, ToSchema)]
pub struct CountResponse {
    pub count: i64,
}

/// Search query string
#[derive(Deserialize, IntoParams)]
pub struct SearchQuery {
    /// Substring to match, case-insensitive
    pub q: String,
}

/// List all books
#[utoipa::path(
    get,
    path = "/api/books",
    tag = "books",
    responses(
        (status = 200, description = "All books with deployment label", body = BookListResponse)
    )
)]
pub async fn list_books(State(state): State<AppState>) -> AppResult<Json<BookListResponse>> {
    tracing::info!(
        "GET /api/books - Fetching all books (deployment: {})",
        state.config.deployment
    );
    let books = state.services.catalog.get_all_books().await?;
    Ok(Json(BookListResponse {
        deployment: state.config.deployment.clone(),
        books,
    }))
}

/// Get a book by ID
#[utoipa::path(
    get,
    path = "/api/books/{id}",
    tag = "books",
    params(("id" = i64, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book details", body = Book),
        (status = 404, description = "Book not found")
    )
)]
pub async fn get_book(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Book>> {
    let book = state.services.catalog.get_book_by_id(id).await?;
    Ok(Json(book))
}

/// Get a book by ISBN
#[utoipa::path(
    get,
    path = "/api/books/isbn/{isbn}",
    tag = "books",
    params(("isbn" = String, Path, description = "Book ISBN")),
    responses(
        (status = 200, description = "Book details", body = Book),
        (status = 404, description = "Book not found")
    )
)]
pub async fn get_book_by_isbn(
    State(state): State<AppState>,
    Path(isbn): Path<String>,
) -> AppResult<Json<Book>> {
    let book = state.services.catalog.get_book_by_isbn(&isbn).await?;
    Ok(Json(book))
}

/// Search books by author
#[utoipa::path(
    get,
    path = "/api/books/search/author",
    tag = "books",
    params(SearchQuery),
    responses(
        (status = 200, description = "Matching books, possibly empty", body = Vec<Book>)
    )
)]
pub async fn search_by_author(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> AppResult<Json<Vec<Book>>> {
    let books = state.services.catalog.search_by_author(&query.q).await?;
    Ok(Json(books))
}

/// Search books by title
#[utoipa::path(
    get,
    path = "/api/books/search/title",
    tag = "books",
    params(SearchQuery),
    responses(
        (status = 200, description = "Matching books, possibly empty", body = Vec<Book>)
    )
)]
pub async fn search_by_title(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> AppResult<Json<Vec<Book>>> {
    let books = state.services.catalog.search_by_title(&query.q).await?;
    Ok(Json(books))
}

/// Create a new book
#[utoipa::path(
    post,
    path = "/api/books",
    tag = "books",
    request_body = BookPayload,
    responses(
        (status = 201, description = "Book created", body = Book),
        (status = 400, description = "Duplicate ISBN or validation failure", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_book(
    State(state): State<AppState>,
    WithRejection(Json(payload), _): WithRejection<Json<BookPayload>, AppError>,
) -> AppResult<(StatusCode, Json<Book>)> {
    payload.validate()?;
    let created = state.services.catalog.create_book(payload).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Update an existing book
#[utoipa::path(
    put,
    path = "/api/books/{id}",
    tag = "books",
    params(("id" = i64, Path, description = "Book ID")),
    request_body = BookPayload,
    responses(
        (status = 200, description = "Book updated", body = Book),
        (status = 400, description = "Validation failure", body = crate::error::ErrorResponse),
        (status = 404, description = "Book not found")
    )
)]
pub async fn update_book(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    WithRejection(Json(payload), _): WithRejection<Json<BookPayload>, AppError>,
) -> AppResult<Json<Book>> {
    payload.validate()?;
    let updated = state.services.catalog.update_book(id, payload).await?;
    Ok(Json(updated))
}

/// Delete a book
#[utoipa::path(
    delete,
    path = "/api/books/{id}",
    tag = "books",
    params(("id" = i64, Path, description = "Book ID")),
    responses(
        (status = 204, description = "Book deleted"),
        (status = 404, description = "Book not found")
    )
)]
pub async fn delete_book(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    if state.services.catalog.delete_book(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("Book {} not found", id)))
    }
}

/// Count all books
#[utoipa::path(
    get,
    path = "/api/books/count",
    tag = "books",
    responses(
        (status = 200, description = "Total number of books", body = CountResponse)
    )
)]
pub async fn count_books(State(state): State<AppState>) -> AppResult<Json<CountResponse>> {
    let count = state.services.catalog.get_book_count().await?;
    Ok(Json(CountResponse { count }))
}
