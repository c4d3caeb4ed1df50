//! Book copy lifecycle: list, detail, create, update and delete workflows

use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    models::{
        book_copy::{copy_location, CopyForm, COPY_LIST_LOCATION},
        views::{
            BookCopyView, CopyDetailView, CopyFormView, CopyListView, DeleteConfirmationView,
            FormMode, DELETE_TITLE, DETAIL_TITLE, LIST_TITLE,
        },
    },
    repository::{BookCopyStore, CatalogLookup},
};

use super::validation::{self, InvalidSubmission, ValidationRules};

/// Outcome of a form submission
#[derive(Debug)]
pub enum Submission {
    /// Stored; continue at this location
    Redirect(String),
    /// Rejected; show the form again. Nothing was stored.
    Redisplay(CopyFormView),
}

#[derive(Clone)]
pub struct BookCopiesService {
    store: Arc<dyn BookCopyStore>,
    catalog: Arc<dyn CatalogLookup>,
    rules: ValidationRules,
}

impl BookCopiesService {
    pub fn new(
        store: Arc<dyn BookCopyStore>,
        catalog: Arc<dyn CatalogLookup>,
        rules: ValidationRules,
    ) -> Self {
        Self {
            store,
            catalog,
            rules,
        }
    }

    /// All copies with their catalog entries resolved
    pub async fn list(&self) -> AppResult<CopyListView> {
        let copies = self.store.list_with_books().await?;
        Ok(CopyListView {
            title: LIST_TITLE.to_string(),
            bookinstance_list: copies.into_iter().map(BookCopyView::from).collect(),
        })
    }

    pub async fn detail(&self, id: i32) -> AppResult<CopyDetailView> {
        let copy = self
            .store
            .find_with_book(id)
            .await?
            .ok_or_else(|| not_found(id))?;
        if copy.book_title.is_none() {
            tracing::warn!("Book copy {} references missing book {}", id, copy.book_id);
        }

        Ok(CopyDetailView {
            title: DETAIL_TITLE.to_string(),
            bookinstance: BookCopyView::from(copy),
        })
    }

    pub async fn create_form(&self) -> AppResult<CopyFormView> {
        let books = self.catalog.list_by_title().await?;
        Ok(CopyFormView::empty(books))
    }

    pub async fn create_submit(&self, form: &CopyForm) -> AppResult<Submission> {
        match validation::validate(form, None, self.rules) {
            Ok(data) => {
                let created = self.store.insert(&data).await?;
                tracing::info!("Created book copy id={} for book {}", created.id, created.book_id);
                Ok(Submission::Redirect(created.url()))
            }
            Err(rejected) => self.redisplay(FormMode::Create, rejected).await,
        }
    }

    /// Form pre-filled from an existing copy
    pub async fn update_form(&self, id: i32) -> AppResult<CopyFormView> {
        let (copy, books) = tokio::try_join!(self.store.find_by_id(id), self.catalog.list_by_title())?;
        let copy = copy.ok_or_else(|| not_found(id))?;
        Ok(CopyFormView::for_record(&copy, books))
    }

    /// Replace every mutable field of copy `id`.
    ///
    /// The identifier always comes from `id`, whatever the form carries. A copy
    /// deleted between the form and this write yields `NotFound`.
    pub async fn update_submit(&self, id: i32, form: &CopyForm) -> AppResult<Submission> {
        match validation::validate(form, Some(id), self.rules) {
            Ok(data) => {
                let updated = self.store.replace(id, &data).await?;
                tracing::info!("Updated book copy id={}", updated.id);
                Ok(Submission::Redirect(copy_location(updated.id)))
            }
            Err(rejected) => self.redisplay(FormMode::Update, rejected).await,
        }
    }

    /// Confirmation page, `None` when the copy is already gone
    pub async fn delete_form(&self, id: i32) -> AppResult<Option<DeleteConfirmationView>> {
        let copy = self.store.find_with_book(id).await?;
        Ok(copy.map(|copy| DeleteConfirmationView {
            title: DELETE_TITLE.to_string(),
            copy: BookCopyView::from(copy),
        }))
    }

    /// Delete `id` and return the list location. Absent copies are not an error.
    pub async fn delete_submit(&self, id: i32) -> AppResult<String> {
        self.store.delete(id).await?;
        tracing::info!("Deleted book copy id={}", id);
        Ok(COPY_LIST_LOCATION.to_string())
    }

    /// Check that the record store answers
    pub async fn ping(&self) -> AppResult<()> {
        self.store.ping().await
    }

    async fn redisplay(&self, mode: FormMode, rejected: InvalidSubmission) -> AppResult<Submission> {
        tracing::debug!(
            "Rejected book copy form ({:?}): {} field error(s)",
            mode,
            rejected.errors.len()
        );
        let books = self.catalog.list_by_title().await?;
        Ok(Submission::Redisplay(CopyFormView::reentry(
            mode,
            rejected.draft,
            rejected.errors,
            books,
        )))
    }
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Book copy {} not found", id))
}
