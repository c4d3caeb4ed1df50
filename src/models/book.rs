//! Catalog entry (book) model
//!
//! Books are owned by the catalog; this server only reads them to resolve
//! the reference held by each copy and to fill selection lists.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Catalog entry as shown in selection controls and copy listings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct BookSummary {
    pub id: i32,
    pub title: String,
}
