//! In-memory store and catalog used by unit tests

use std::{
    collections::BTreeMap,
    sync::{Arc, Mutex},
};

use async_trait::async_trait;

use super::{BookCopyStore, CatalogLookup};
use crate::{
    error::{AppError, AppResult},
    models::{
        book::BookSummary,
        book_copy::{BookCopy, NewBookCopy},
    },
};

#[derive(Default)]
struct Tables {
    next_id: i32,
    books: BTreeMap<i32, BookSummary>,
    copies: BTreeMap<i32, BookCopy>,
}

/// Shared in-memory tables; clones see the same data
#[derive(Clone, Default)]
pub struct MemoryStore {
    tables: Arc<Mutex<Tables>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_book(&self, id: i32, title: &str) {
        self.tables.lock().unwrap().books.insert(
            id,
            BookSummary {
                id,
                title: title.to_string(),
            },
        );
    }

    pub fn copies(&self) -> Vec<BookCopy> {
        self.tables.lock().unwrap().copies.values().cloned().collect()
    }

    fn resolve(tables: &Tables, copy: &BookCopy) -> BookCopy {
        BookCopy {
            book_title: tables.books.get(&copy.book_id).map(|b| b.title.clone()),
            ..copy.clone()
        }
    }
}

#[async_trait]
impl BookCopyStore for MemoryStore {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<BookCopy>> {
        Ok(self.tables.lock().unwrap().copies.get(&id).cloned())
    }

    async fn find_with_book(&self, id: i32) -> AppResult<Option<BookCopy>> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.copies.get(&id).map(|c| Self::resolve(&tables, c)))
    }

    async fn list_with_books(&self) -> AppResult<Vec<BookCopy>> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.copies.values().map(|c| Self::resolve(&tables, c)).collect())
    }

    async fn insert(&self, data: &NewBookCopy) -> AppResult<BookCopy> {
        let mut tables = self.tables.lock().unwrap();
        tables.next_id += 1;
        let copy = BookCopy {
            id: tables.next_id,
            book_id: data.book_id,
            imprint: data.imprint.clone(),
            status: data.status.clone(),
            due_back: data.due_back,
            book_title: None,
        };
        tables.copies.insert(copy.id, copy.clone());
        Ok(copy)
    }

    async fn replace(&self, id: i32, data: &NewBookCopy) -> AppResult<BookCopy> {
        let mut tables = self.tables.lock().unwrap();
        let copy = tables
            .copies
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound(format!("Book copy {} not found", id)))?;
        copy.book_id = data.book_id;
        copy.imprint = data.imprint.clone();
        copy.status = data.status.clone();
        copy.due_back = data.due_back;
        Ok(copy.clone())
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        self.tables.lock().unwrap().copies.remove(&id);
        Ok(())
    }

    async fn ping(&self) -> AppResult<()> {
        Ok(())
    }
}

#[async_trait]
impl CatalogLookup for MemoryStore {
    async fn list_by_title(&self) -> AppResult<Vec<BookSummary>> {
        let mut books: Vec<BookSummary> = self
            .tables
            .lock()
            .unwrap()
            .books
            .values()
            .cloned()
            .collect();
        books.sort_by(|a, b| a.title.cmp(&b.title));
        Ok(books)
    }
}
