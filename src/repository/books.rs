//! Catalog entry lookups

use async_trait::async_trait;

use super::{CatalogLookup, Repository};
use crate::{
    error::AppResult,
    models::book::BookSummary,
};

#[async_trait]
impl CatalogLookup for Repository {
    async fn list_by_title(&self) -> AppResult<Vec<BookSummary>> {
        let rows = sqlx::query_as::<_, BookSummary>("SELECT id, title FROM books ORDER BY title ASC")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }
}
