//! Repository layer for database operations

pub mod books;

pub use books::PgBookRepository;

use async_trait::async_trait;

use crate::{
    error::AppResult,
    models::book::{Book, NewBook},
};

/// Data-access contract for the books table.
///
/// Substring searches are case-insensitive and match anywhere in the field;
/// result ordering is storage-defined (id order for the Postgres impl).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookRepository: Send + Sync {
    async fn find_all(&self) -> AppResult<Vec<Book>>;

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Book>>;

    async fn find_by_isbn(&self, isbn: &str) -> AppResult<Option<Book>>;

    async fn find_by_author_containing(&self, query: &str) -> AppResult<Vec<Book>>;

    async fn find_by_title_containing(&self, query: &str) -> AppResult<Vec<Book>>;

    async fn exists_by_isbn(&self, isbn: &str) -> AppResult<bool>;

    async fn exists_by_id(&self, id: i64) -> AppResult<bool>;

    async fn count(&self) -> AppResult<i64>;

    /// Insert a new row; storage assigns the id
    async fn insert(&self, book: &NewBook) -> AppResult<Book>;

    /// Overwrite all mutable columns of an existing row
    async fn update(&self, book: &Book) -> AppResult<Book>;

    /// Delete a row, reporting whether it existed
    async fn delete_by_id(&self, id: i64) -> AppResult<bool>;
}
