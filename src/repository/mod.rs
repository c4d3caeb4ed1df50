//! Repository layer for database operations

pub mod book_copies;
pub mod books;
#[cfg(test)]
pub(crate) mod memory;

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    models::{
        book::BookSummary,
        book_copy::{BookCopy, NewBookCopy},
    },
};

/// Record store for book copies.
///
/// No operation locks or versions rows: concurrent replaces of the same copy
/// both succeed and the last write wins.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookCopyStore: Send + Sync {
    /// Copy by id, without resolving its catalog entry
    async fn find_by_id(&self, id: i32) -> AppResult<Option<BookCopy>>;

    /// Copy by id with its catalog title resolved when the entry exists
    async fn find_with_book(&self, id: i32) -> AppResult<Option<BookCopy>>;

    /// Every copy with catalog titles resolved
    async fn list_with_books(&self) -> AppResult<Vec<BookCopy>>;

    /// Insert a copy; the store assigns the identifier
    async fn insert(&self, data: &NewBookCopy) -> AppResult<BookCopy>;

    /// Replace all mutable fields of copy `id`, keeping the identifier
    async fn replace(&self, id: i32, data: &NewBookCopy) -> AppResult<BookCopy>;

    /// Delete copy `id`; deleting an absent copy is not an error
    async fn delete(&self, id: i32) -> AppResult<()>;

    /// Check that the store answers
    async fn ping(&self) -> AppResult<()>;
}

/// Read access to the catalog entries copies refer to
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogLookup: Send + Sync {
    /// All catalog entries, sorted by title ascending
    async fn list_by_title(&self) -> AppResult<Vec<BookSummary>>;
}

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}
