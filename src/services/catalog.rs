//! Catalog service: business rules over the books repository

use std::sync::Arc;

use chrono::Utc;

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookPayload, NewBook},
    repository::BookRepository,
};

#[derive(Clone)]
pub struct CatalogService {
    repository: Arc<dyn BookRepository>,
}

impl CatalogService {
    pub fn new(repository: Arc<dyn BookRepository>) -> Self {
        Self { repository }
    }

    /// List all books
    pub async fn get_all_books(&self) -> AppResult<Vec<Book>> {
        self.repository.find_all().await
    }

    /// Get book by ID
    pub async fn get_book_by_id(&self, id: i64) -> AppResult<Book> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Book {} not found", id)))
    }

    /// Get book by ISBN
    pub async fn get_book_by_isbn(&self, isbn: &str) -> AppResult<Book> {
        self.repository
            .find_by_isbn(isbn)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Book with ISBN {} not found", isbn)))
    }

    /// Case-insensitive substring search on author
    pub async fn search_by_author(&self, query: &str) -> AppResult<Vec<Book>> {
        self.repository.find_by_author_containing(query).await
    }

    /// Case-insensitive substring search on title
    pub async fn search_by_title(&self, query: &str) -> AppResult<Vec<Book>> {
        self.repository.find_by_title_containing(query).await
    }

    /// Total number of books
    pub async fn get_book_count(&self) -> AppResult<i64> {
        self.repository.count().await
    }

    /// Create a new book. ISBN must not collide with an existing row;
    /// the unique constraint remains the final authority under races.
    pub async fn create_book(&self, payload: BookPayload) -> AppResult<Book> {
        tracing::info!("Creating new book: {}", payload.title);
        if self.repository.exists_by_isbn(&payload.isbn).await? {
            return Err(AppError::Conflict(format!(
                "Book with ISBN {} already exists",
                payload.isbn
            )));
        }
        let book = NewBook::from_payload(payload, Utc::now());
        self.repository.insert(&book).await
    }

    /// Update an existing book. Missing id is NotFound, never an upsert.
    /// Overwrites every mutable field, preserves id and created_at,
    /// refreshes updated_at.
    pub async fn update_book(&self, id: i64, payload: BookPayload) -> AppResult<Book> {
        tracing::info!("Updating book with id: {}", id);
        let existing = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Book {} not found", id)))?;

        // Changing the ISBN to one owned by another row is a duplicate
        if payload.isbn != existing.isbn {
            if let Some(other) = self.repository.find_by_isbn(&payload.isbn).await? {
                if other.id != id {
                    return Err(AppError::Conflict(format!(
                        "Book with ISBN {} already exists",
                        payload.isbn
                    )));
                }
            }
        }

        let book = Book {
            id: existing.id,
            title: payload.title,
            author: payload.author,
            isbn: payload.isbn,
            price: payload.price,
            description: payload.description,
            published_year: payload.published_year,
            quantity: payload.quantity,
            created_at: existing.created_at,
            updated_at: Utc::now(),
        };
        self.repository.update(&book).await
    }

    /// Delete a book, reporting whether a row was removed.
    /// A second delete observes false, not an error.
    pub async fn delete_book(&self, id: i64) -> AppResult<bool> {
        tracing::info!("Deleting book with id: {}", id);
        if !self.repository.exists_by_id(id).await? {
            return Ok(false);
        }
        self.repository.delete_by_id(id).await
    }
}
