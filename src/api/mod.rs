//! API handlers and routing

pub mod book_copies;
pub mod health;
pub mod openapi;

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::AppState;

/// Create the application router with all routes
pub fn router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let catalog = Router::new()
        .route("/bookinstances", get(book_copies::list_copies))
        .route(
            "/bookinstance/create",
            get(book_copies::create_form).post(book_copies::create_copy),
        )
        .route("/bookinstance/:id", get(book_copies::get_copy))
        .route(
            "/bookinstance/:id/update",
            get(book_copies::update_form).post(book_copies::update_copy),
        )
        .route(
            "/bookinstance/:id/delete",
            get(book_copies::delete_form).post(book_copies::delete_copy),
        );

    let app = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        .nest("/catalog", catalog)
        .with_state(state);

    Router::new()
        .merge(app)
        .merge(openapi::create_openapi_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
