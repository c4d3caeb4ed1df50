//! Book copy queries

use async_trait::async_trait;

use super::{BookCopyStore, Repository};
use crate::{
    error::{AppError, AppResult},
    models::book_copy::{BookCopy, NewBookCopy},
};

const SELECT_WITH_BOOK: &str = r#"
    SELECT c.id, c.book_id, c.imprint, c.status, c.due_back, b.title AS book_title
    FROM book_copies c
    LEFT JOIN books b ON b.id = c.book_id
"#;

#[async_trait]
impl BookCopyStore for Repository {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<BookCopy>> {
        let row = sqlx::query_as::<_, BookCopy>(
            "SELECT id, book_id, imprint, status, due_back FROM book_copies WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn find_with_book(&self, id: i32) -> AppResult<Option<BookCopy>> {
        let row = sqlx::query_as::<_, BookCopy>(&format!("{} WHERE c.id = $1", SELECT_WITH_BOOK))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn list_with_books(&self) -> AppResult<Vec<BookCopy>> {
        let rows = sqlx::query_as::<_, BookCopy>(&format!("{} ORDER BY c.id", SELECT_WITH_BOOK))
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn insert(&self, data: &NewBookCopy) -> AppResult<BookCopy> {
        let row = sqlx::query_as::<_, BookCopy>(
            r#"
            INSERT INTO book_copies (book_id, imprint, status, due_back)
            VALUES ($1, $2, $3, $4)
            RETURNING id, book_id, imprint, status, due_back
            "#,
        )
        .bind(data.book_id)
        .bind(&data.imprint)
        .bind(&data.status)
        .bind(data.due_back)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn replace(&self, id: i32, data: &NewBookCopy) -> AppResult<BookCopy> {
        sqlx::query_as::<_, BookCopy>(
            r#"
            UPDATE book_copies
            SET book_id = $1, imprint = $2, status = $3, due_back = $4
            WHERE id = $5
            RETURNING id, book_id, imprint, status, due_back
            "#,
        )
        .bind(data.book_id)
        .bind(&data.imprint)
        .bind(&data.status)
        .bind(data.due_back)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Book copy {} not found", id)))
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM book_copies WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            tracing::debug!("Book copy {} already absent, nothing deleted", id);
        }
        Ok(())
    }

    async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
