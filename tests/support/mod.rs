//! Shared test support: in-memory repository and app construction

#![allow(dead_code)]

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;

use bookshelf_server::{
    api,
    models::book::{Book, NewBook},
    repository::BookRepository,
    services::Services,
    AppConfig, AppError, AppResult, AppState,
};

/// In-memory stand-in for the books table. Mirrors the Postgres repository's
/// observable behavior, including the unique-isbn conflict on insert.
pub struct InMemoryBooks {
    next_id: AtomicI64,
    rows: Mutex<Vec<Book>>,
}

impl InMemoryBooks {
    pub fn new() -> Self {
        Self {
            next_id: AtomicI64::new(1),
            rows: Mutex::new(Vec::new()),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }
}

#[async_trait]
impl BookRepository for InMemoryBooks {
    async fn find_all(&self) -> AppResult<Vec<Book>> {
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Book>> {
        Ok(self.rows.lock().unwrap().iter().find(|b| b.id == id).cloned())
    }

    async fn find_by_isbn(&self, isbn: &str) -> AppResult<Option<Book>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|b| b.isbn == isbn)
            .cloned())
    }

    async fn find_by_author_containing(&self, query: &str) -> AppResult<Vec<Book>> {
        let needle = query.to_lowercase();
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|b| b.author.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }

    async fn find_by_title_containing(&self, query: &str) -> AppResult<Vec<Book>> {
        let needle = query.to_lowercase();
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|b| b.title.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }

    async fn exists_by_isbn(&self, isbn: &str) -> AppResult<bool> {
        Ok(self.rows.lock().unwrap().iter().any(|b| b.isbn == isbn))
    }

    async fn exists_by_id(&self, id: i64) -> AppResult<bool> {
        Ok(self.rows.lock().unwrap().iter().any(|b| b.id == id))
    }

    async fn count(&self) -> AppResult<i64> {
        Ok(self.rows.lock().unwrap().len() as i64)
    }

    async fn insert(&self, book: &NewBook) -> AppResult<Book> {
        let mut rows = self.rows.lock().unwrap();
        if rows.iter().any(|b| b.isbn == book.isbn) {
            return Err(AppError::Conflict(format!(
                "Book with ISBN {} already exists",
                book.isbn
            )));
        }
        let row = Book {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            title: book.title.clone(),
            author: book.author.clone(),
            isbn: book.isbn.clone(),
            price: book.price,
            description: book.description.clone(),
            published_year: book.published_year,
            quantity: book.quantity,
            created_at: book.created_at,
            updated_at: book.updated_at,
        };
        rows.push(row.clone());
        Ok(row)
    }

    async fn update(&self, book: &Book) -> AppResult<Book> {
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|b| b.id == book.id)
            .ok_or_else(|| AppError::NotFound(format!("Book {} not found", book.id)))?;
        // created_at is never overwritten, matching the SQL SET list
        row.title = book.title.clone();
        row.author = book.author.clone();
        row.isbn = book.isbn.clone();
        row.price = book.price;
        row.description = book.description.clone();
        row.published_year = book.published_year;
        row.quantity = book.quantity;
        row.updated_at = book.updated_at;
        Ok(row.clone())
    }

    async fn delete_by_id(&self, id: i64) -> AppResult<bool> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|b| b.id != id);
        Ok(rows.len() < before)
    }
}

/// Application state over the given repository, with the access log pointed
/// at a temp file
pub fn test_state(repository: Arc<dyn BookRepository>) -> AppState {
    let mut config = AppConfig::default();
    config.logging.http_file = std::env::temp_dir()
        .join("bookshelf-test-access.log")
        .to_string_lossy()
        .into_owned();
    AppState {
        config: Arc::new(config),
        services: Arc::new(Services::new(repository)),
    }
}

/// Router over a fresh in-memory store, plus a handle to observe it
pub fn test_app() -> (Router, Arc<InMemoryBooks>) {
    let repository = Arc::new(InMemoryBooks::new());
    let router = api::create_router(test_state(repository.clone()));
    (router, repository)
}
