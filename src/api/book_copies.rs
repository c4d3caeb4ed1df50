//! Book copy endpoints

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
    Form, Json,
};

use crate::{
    error::AppResult,
    models::{
        book_copy::{CopyForm, DeleteCopyForm, COPY_LIST_LOCATION},
        views::{CopyDetailView, CopyFormView, CopyListView},
    },
    services::book_copies::Submission,
};

impl IntoResponse for Submission {
    fn into_response(self) -> Response {
        match self {
            Submission::Redirect(location) => Redirect::to(&location).into_response(),
            Submission::Redisplay(view) => Json(view).into_response(),
        }
    }
}

/// List all book copies
#[utoipa::path(
    get,
    path = "/catalog/bookinstances",
    tag = "bookinstances",
    responses(
        (status = 200, description = "All copies with their books", body = CopyListView)
    )
)]
pub async fn list_copies(State(state): State<crate::AppState>) -> AppResult<Json<CopyListView>> {
    let view = state.services.book_copies.list().await?;
    Ok(Json(view))
}

/// Get a book copy by ID
#[utoipa::path(
    get,
    path = "/catalog/bookinstance/{id}",
    tag = "bookinstances",
    params(("id" = i32, Path, description = "Book copy ID")),
    responses(
        (status = 200, description = "Book copy details", body = CopyDetailView),
        (status = 404, description = "Book copy not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_copy(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<CopyDetailView>> {
    let view = state.services.book_copies.detail(id).await?;
    Ok(Json(view))
}

/// Empty create form
#[utoipa::path(
    get,
    path = "/catalog/bookinstance/create",
    tag = "bookinstances",
    responses(
        (status = 200, description = "Create form with the book list", body = CopyFormView)
    )
)]
pub async fn create_form(State(state): State<crate::AppState>) -> AppResult<Json<CopyFormView>> {
    let view = state.services.book_copies.create_form().await?;
    Ok(Json(view))
}

/// Create a book copy
#[utoipa::path(
    post,
    path = "/catalog/bookinstance/create",
    tag = "bookinstances",
    request_body(content = CopyForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Created, redirect to the new copy"),
        (status = 200, description = "Invalid form, re-displayed with errors", body = CopyFormView)
    )
)]
pub async fn create_copy(
    State(state): State<crate::AppState>,
    Form(form): Form<CopyForm>,
) -> AppResult<Submission> {
    state.services.book_copies.create_submit(&form).await
}

/// Update form pre-filled with the copy
#[utoipa::path(
    get,
    path = "/catalog/bookinstance/{id}/update",
    tag = "bookinstances",
    params(("id" = i32, Path, description = "Book copy ID")),
    responses(
        (status = 200, description = "Update form", body = CopyFormView),
        (status = 404, description = "Book copy not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_form(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<CopyFormView>> {
    let view = state.services.book_copies.update_form(id).await?;
    Ok(Json(view))
}

/// Update a book copy
#[utoipa::path(
    post,
    path = "/catalog/bookinstance/{id}/update",
    tag = "bookinstances",
    params(("id" = i32, Path, description = "Book copy ID")),
    request_body(content = CopyForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Updated, redirect to the copy"),
        (status = 200, description = "Invalid form, re-displayed with errors", body = CopyFormView),
        (status = 404, description = "Book copy not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_copy(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Form(form): Form<CopyForm>,
) -> AppResult<Submission> {
    state.services.book_copies.update_submit(id, &form).await
}

/// Delete confirmation page
#[utoipa::path(
    get,
    path = "/catalog/bookinstance/{id}/delete",
    tag = "bookinstances",
    params(("id" = i32, Path, description = "Book copy ID")),
    responses(
        (status = 200, description = "Delete confirmation", body = crate::models::views::DeleteConfirmationView),
        (status = 303, description = "Copy already gone, redirect to the list")
    )
)]
pub async fn delete_form(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Response> {
    let response = match state.services.book_copies.delete_form(id).await? {
        Some(view) => Json(view).into_response(),
        None => Redirect::to(COPY_LIST_LOCATION).into_response(),
    };
    Ok(response)
}

/// Delete a book copy.
///
/// The copy named by the path is deleted; a `copyid` field that disagrees
/// with it is ignored.
#[utoipa::path(
    post,
    path = "/catalog/bookinstance/{id}/delete",
    tag = "bookinstances",
    params(("id" = i32, Path, description = "Book copy ID")),
    request_body(content = DeleteCopyForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Deleted (or already absent), redirect to the list")
    )
)]
pub async fn delete_copy(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    payload: Option<Form<DeleteCopyForm>>,
) -> AppResult<Redirect> {
    // The body is optional: the path alone names the copy
    let copyid = payload
        .as_ref()
        .and_then(|Form(form)| form.copyid.as_deref())
        .map(str::trim)
        .filter(|c| !c.is_empty());
    if let Some(copyid) = copyid {
        if copyid != id.to_string() {
            tracing::warn!(
                "Delete of book copy {}: ignoring mismatched copyid '{}'",
                id,
                copyid
            );
        }
    }
    let location = state.services.book_copies.delete_submit(id).await?;
    Ok(Redirect::to(&location))
}
