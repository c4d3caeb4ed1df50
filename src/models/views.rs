//! View-models handed to the page renderer

use chrono::NaiveDate;
use serde::Serialize;
use utoipa::ToSchema;

use super::{
    book::BookSummary,
    book_copy::{BookCopy, BookCopyDraft, CopyStatus, FieldError},
};

pub const LIST_TITLE: &str = "Book Instance List";
pub const DETAIL_TITLE: &str = "Book Copy";
pub const CREATE_TITLE: &str = "Create book instance";
pub const UPDATE_TITLE: &str = "Update book instance";
pub const DELETE_TITLE: &str = "Delete Copy";

/// Whether a copy form creates a new record or edits an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Update,
}

impl FormMode {
    pub fn title(&self) -> &'static str {
        match self {
            FormMode::Create => CREATE_TITLE,
            FormMode::Update => UPDATE_TITLE,
        }
    }
}

/// A copy as rendered, with its catalog entry resolved
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct BookCopyView {
    pub id: i32,
    pub url: String,
    pub book_id: i32,
    /// Absent when the catalog entry no longer exists
    pub book: Option<BookSummary>,
    pub imprint: String,
    pub status: String,
    /// Typed status, absent when the stored text is not a known status
    pub status_kind: Option<CopyStatus>,
    pub due_back: Option<NaiveDate>,
    pub due_back_formatted: Option<String>,
}

impl From<BookCopy> for BookCopyView {
    fn from(copy: BookCopy) -> Self {
        Self {
            url: copy.url(),
            book: copy.book(),
            status_kind: copy.status_kind(),
            due_back_formatted: copy.due_back_formatted(),
            id: copy.id,
            book_id: copy.book_id,
            imprint: copy.imprint,
            status: copy.status,
            due_back: copy.due_back,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CopyListView {
    pub title: String,
    pub bookinstance_list: Vec<BookCopyView>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CopyDetailView {
    pub title: String,
    pub bookinstance: BookCopyView,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DeleteConfirmationView {
    pub title: String,
    pub copy: BookCopyView,
}

/// Copy form page: empty, pre-filled from a record, or echoing a rejected submission
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CopyFormView {
    pub title: String,
    pub book_list: Vec<BookSummary>,
    pub bookinstance: Option<BookCopyDraft>,
    /// Catalog entry to pre-select
    pub selected_book: Option<String>,
    pub errors: Vec<FieldError>,
}

impl CopyFormView {
    /// Blank create form
    pub fn empty(book_list: Vec<BookSummary>) -> Self {
        Self {
            title: FormMode::Create.title().to_string(),
            book_list,
            bookinstance: None,
            selected_book: None,
            errors: Vec::new(),
        }
    }

    /// Update form pre-filled from the stored record
    pub fn for_record(copy: &BookCopy, book_list: Vec<BookSummary>) -> Self {
        Self {
            title: FormMode::Update.title().to_string(),
            book_list,
            bookinstance: Some(BookCopyDraft::from(copy)),
            selected_book: Some(copy.book_id.to_string()),
            errors: Vec::new(),
        }
    }

    /// Form echoing the sanitized values of a rejected submission with its errors
    pub fn reentry(
        mode: FormMode,
        draft: BookCopyDraft,
        errors: Vec<FieldError>,
        book_list: Vec<BookSummary>,
    ) -> Self {
        let selected_book = Some(draft.book.clone()).filter(|b| !b.is_empty());
        Self {
            title: mode.title().to_string(),
            book_list,
            bookinstance: Some(draft),
            selected_book,
            errors,
        }
    }
}
