//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{book_copies, health};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Book Copy API",
        version = "1.0.0",
        description = "Lifecycle of physical book copies in the library catalog",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Book copies
        book_copies::list_copies,
        book_copies::get_copy,
        book_copies::create_form,
        book_copies::create_copy,
        book_copies::update_form,
        book_copies::update_copy,
        book_copies::delete_form,
        book_copies::delete_copy,
    ),
    components(
        schemas(
            // Book copies
            crate::models::book::BookSummary,
            crate::models::book_copy::CopyForm,
            crate::models::book_copy::DeleteCopyForm,
            crate::models::book_copy::BookCopyDraft,
            crate::models::book_copy::CopyStatus,
            crate::models::book_copy::FieldError,
            crate::models::book_copy::FieldErrorKind,
            crate::models::views::BookCopyView,
            crate::models::views::CopyListView,
            crate::models::views::CopyDetailView,
            crate::models::views::CopyFormView,
            crate::models::views::DeleteConfirmationView,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "bookinstances", description = "Book copy management")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
