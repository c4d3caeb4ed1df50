//! Data models for the book copy server

pub mod book;
pub mod book_copy;
pub mod views;

// Re-export commonly used types
pub use book::BookSummary;
pub use book_copy::{
    BookCopy, BookCopyDraft, CopyForm, CopyStatus, DeleteCopyForm, FieldError, FieldErrorKind,
    NewBookCopy,
};
pub use views::{
    BookCopyView, CopyDetailView, CopyFormView, CopyListView, DeleteConfirmationView, FormMode,
};
