//! Book copy server
//!
//! Manages the physical copies of catalog books: listing, detail, creation,
//! update and deletion, with form validation that echoes rejected input back
//! to the client instead of storing it.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
