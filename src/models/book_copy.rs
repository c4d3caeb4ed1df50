//! Book copy (physical instance of a catalog book) model and related types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use super::book::BookSummary;

/// Location of the copy list
pub const COPY_LIST_LOCATION: &str = "/catalog/bookinstances";

/// Canonical location of a single copy
pub fn copy_location(id: i32) -> String {
    format!("/catalog/bookinstance/{}", id)
}

/// Known lifecycle states of a copy.
///
/// Records keep the status as submitted text; this type is the typed view of it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum CopyStatus {
    Available,
    #[default]
    Maintenance,
    Loaned,
    Reserved,
}

impl CopyStatus {
    pub const ALL: [CopyStatus; 4] = [
        CopyStatus::Available,
        CopyStatus::Maintenance,
        CopyStatus::Loaned,
        CopyStatus::Reserved,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CopyStatus::Available => "Available",
            CopyStatus::Maintenance => "Maintenance",
            CopyStatus::Loaned => "Loaned",
            CopyStatus::Reserved => "Reserved",
        }
    }

    /// Exact, case-sensitive match against the known statuses
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }
}

impl std::fmt::Display for CopyStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Persisted copy record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct BookCopy {
    pub id: i32,
    /// Catalog entry this copy belongs to (not enforced by the store)
    pub book_id: i32,
    pub imprint: String,
    pub status: String,
    pub due_back: Option<NaiveDate>,
    // Resolved catalog title (populated when queried with a JOIN, None otherwise)
    #[sqlx(default)]
    #[serde(default)]
    pub book_title: Option<String>,
}

impl BookCopy {
    pub fn url(&self) -> String {
        copy_location(self.id)
    }

    /// Typed status, `None` when the stored text is not a known status
    pub fn status_kind(&self) -> Option<CopyStatus> {
        CopyStatus::parse(&self.status)
    }

    /// Resolved catalog entry, `None` when the reference dangles or was not joined
    pub fn book(&self) -> Option<BookSummary> {
        self.book_title.as_ref().map(|title| BookSummary {
            id: self.book_id,
            title: title.clone(),
        })
    }

    /// Due date for display, e.g. `May 1, 2024`
    pub fn due_back_formatted(&self) -> Option<String> {
        self.due_back.map(|d| d.format("%b %-d, %Y").to_string())
    }
}

/// Validated field values, ready to be inserted or to replace a record.
///
/// Only the validation pipeline builds these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBookCopy {
    pub book_id: i32,
    pub imprint: String,
    pub status: String,
    pub due_back: Option<NaiveDate>,
}

/// Raw copy form as submitted by the client
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CopyForm {
    /// Catalog entry identifier
    #[serde(default)]
    pub book: String,
    #[serde(default)]
    pub imprint: String,
    pub status: Option<String>,
    /// ISO-8601 date, empty for none
    pub due_back: Option<String>,
}

/// Delete confirmation form
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct DeleteCopyForm {
    /// Copy identifier echoed by the confirmation page
    pub copyid: Option<String>,
}

/// Sanitized, not yet validated copy values.
///
/// Echoed back to the client when a submission is rejected; never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Validate, ToSchema)]
pub struct BookCopyDraft {
    /// Identifier of the record being edited, `None` when creating
    pub id: Option<i32>,
    #[validate(length(min = 1))]
    pub book: String,
    #[validate(length(min = 1))]
    pub imprint: String,
    pub status: String,
    pub due_back: Option<String>,
}

impl From<&BookCopy> for BookCopyDraft {
    fn from(copy: &BookCopy) -> Self {
        Self {
            id: Some(copy.id),
            book: copy.book_id.to_string(),
            imprint: copy.imprint.clone(),
            status: copy.status.clone(),
            due_back: copy.due_back.map(|d| d.format("%Y-%m-%d").to_string()),
        }
    }
}

/// Kind of problem found on a submitted field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub enum FieldErrorKind {
    RequiredFieldMissing,
    InvalidDateFormat,
    InvalidReference,
    InvalidStatus,
}

/// Field-level validation error reported back with the form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct FieldError {
    pub field: String,
    pub kind: FieldErrorKind,
    pub msg: String,
    /// Sanitized value that was rejected
    pub value: String,
}

impl FieldError {
    pub fn new(field: &str, kind: FieldErrorKind, msg: &str, value: &str) -> Self {
        Self {
            field: field.to_string(),
            kind,
            msg: msg.to_string(),
            value: value.to_string(),
        }
    }
}
