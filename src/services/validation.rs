//! Copy form sanitization and validation
//!
//! A pure pipeline: raw form fields in, either validated values or the
//! sanitized draft together with every field error found. Nothing here
//! touches the store.

use chrono::{DateTime, NaiveDate};
use validator::Validate;

use crate::{
    config::ValidationConfig,
    models::book_copy::{
        BookCopyDraft, CopyForm, CopyStatus, FieldError, FieldErrorKind, NewBookCopy,
    },
};

const BOOK: &str = "book";
const IMPRINT: &str = "imprint";
const STATUS: &str = "status";
const DUE_BACK: &str = "due_back";

/// Switches applied on top of the fixed field rules
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidationRules {
    pub enforce_status: bool,
}

impl From<&ValidationConfig> for ValidationRules {
    fn from(config: &ValidationConfig) -> Self {
        Self {
            enforce_status: config.enforce_status,
        }
    }
}

/// A rejected submission: what the user sent (sanitized) and why it failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidSubmission {
    pub draft: BookCopyDraft,
    /// Never empty, in field order
    pub errors: Vec<FieldError>,
}

/// Escape the characters that are unsafe in HTML text and attributes
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            '/' => out.push_str("&#x2F;"),
            '\\' => out.push_str("&#x5C;"),
            '`' => out.push_str("&#96;"),
            _ => out.push(c),
        }
    }
    out
}

/// Parse an ISO-8601 calendar date (`2024-05-01`) or RFC 3339 timestamp
pub fn parse_due_back(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(value).ok().map(|dt| dt.date_naive()))
}

fn provided_due_back(form: &CopyForm) -> Option<&str> {
    form.due_back.as_deref().filter(|v| !v.is_empty())
}

/// Catalog identifier in canonical decimal form: digits only, no sign and
/// no leading zeros, so the stored id reads back exactly as submitted
fn parse_book_reference(value: &str) -> Option<i32> {
    let canonical = !value.is_empty()
        && value.bytes().all(|b| b.is_ascii_digit())
        && (value == "0" || !value.starts_with('0'));
    if canonical {
        value.parse().ok()
    } else {
        None
    }
}

/// Trim and escape the submitted fields.
///
/// `id` is the identifier of the record being edited and is never read from the form.
pub fn sanitize(form: &CopyForm, id: Option<i32>) -> BookCopyDraft {
    BookCopyDraft {
        id,
        book: escape_html(form.book.trim()),
        imprint: escape_html(form.imprint.trim()),
        status: form
            .status
            .as_deref()
            .map(escape_html)
            .unwrap_or_else(|| CopyStatus::default().to_string()),
        due_back: provided_due_back(form).map(escape_html),
    }
}

/// Run the whole pipeline, collecting every field error before reporting
pub fn validate(
    form: &CopyForm,
    id: Option<i32>,
    rules: ValidationRules,
) -> Result<NewBookCopy, InvalidSubmission> {
    let draft = sanitize(form, id);
    let report = draft.validate().err();
    let missing =
        |field: &str| report.as_ref().is_some_and(|r| r.field_errors().contains_key(field));
    let mut errors = Vec::new();

    let book_id = if missing(BOOK) {
        errors.push(FieldError::new(
            BOOK,
            FieldErrorKind::RequiredFieldMissing,
            "Book must be specified",
            &draft.book,
        ));
        None
    } else {
        match parse_book_reference(&draft.book) {
            Some(book_id) => Some(book_id),
            None => {
                errors.push(FieldError::new(
                    BOOK,
                    FieldErrorKind::InvalidReference,
                    "Book must reference a catalog entry",
                    &draft.book,
                ));
                None
            }
        }
    };

    if missing(IMPRINT) {
        errors.push(FieldError::new(
            IMPRINT,
            FieldErrorKind::RequiredFieldMissing,
            "Imprint must be specified",
            &draft.imprint,
        ));
    }

    if rules.enforce_status && CopyStatus::parse(&draft.status).is_none() {
        errors.push(FieldError::new(
            STATUS,
            FieldErrorKind::InvalidStatus,
            "Status must be one of Available, Maintenance, Loaned, Reserved",
            &draft.status,
        ));
    }

    let due_back = match provided_due_back(form) {
        None => None,
        Some(raw) => {
            let parsed = parse_due_back(raw);
            if parsed.is_none() {
                errors.push(FieldError::new(
                    DUE_BACK,
                    FieldErrorKind::InvalidDateFormat,
                    "Invalid date",
                    draft.due_back.as_deref().unwrap_or_default(),
                ));
            }
            parsed
        }
    };

    match book_id {
        Some(book_id) if errors.is_empty() => Ok(NewBookCopy {
            book_id,
            imprint: draft.imprint,
            status: draft.status,
            due_back,
        }),
        _ => Err(InvalidSubmission { draft, errors }),
    }
}
