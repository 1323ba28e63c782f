//! # Book Repository
//!
//! SQLite-backed [`BookStore`].
//!
//! ## Write Path
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    One Transaction per Write                            │
//! │                                                                         │
//! │  BEGIN                                                                  │
//! │    INSERT / UPDATE / DELETE ... WHERE id = ?1                          │
//! │    rows_affected == 0? ──► drop tx (rollback) ──► NotFound             │
//! │  COMMIT                                                                 │
//! │                                                                         │
//! │  Concurrent writes to one id: last commit wins.                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::debug;
use uuid::Uuid;

use crate::error::{DbError, DbResult};
use bookshelf_core::{Book, BookRecord, BookStore, BookSummary, StoreResult};

/// Repository for book database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = BookRepository::new(pool);
/// let id = repo.insert(&record).await?;
/// let book = repo.find_by_id(&id).await?;
/// ```
#[derive(Debug, Clone)]
pub struct BookRepository {
    pool: SqlitePool,
}

impl BookRepository {
    /// Creates a new BookRepository.
    pub fn new(pool: SqlitePool) -> Self {
        BookRepository { pool }
    }

    /// Inserts a new book and returns the generated id.
    pub async fn insert(&self, record: &BookRecord) -> DbResult<String> {
        let id = generate_book_id();
        debug!(id = %id, name = %record.name, "Inserting book");

        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            INSERT INTO books (
                id, name, year, author, summary, publisher,
                page_count, read_page, finished, reading,
                created_at, updated_at
            ) VALUES (
                ?1, ?2, ?3, ?4, ?5, ?6,
                ?7, ?8, ?9, ?10,
                ?11, ?12
            )
            "#,
        )
        .bind(&id)
        .bind(&record.name)
        .bind(record.year)
        .bind(&record.author)
        .bind(&record.summary)
        .bind(&record.publisher)
        .bind(record.page_count)
        .bind(record.read_page)
        .bind(record.finished)
        .bind(record.reading)
        .bind(record.created_at)
        .bind(record.updated_at)
        .execute(&mut *tx)
        .await?;

        tx.commit()
            .await
            .map_err(|e| DbError::TransactionFailed(e.to_string()))?;

        Ok(id)
    }

    /// Lists all books as `{id, name, publisher}` in insertion order.
    pub async fn list_summaries(&self) -> DbResult<Vec<BookSummary>> {
        let books = sqlx::query_as::<_, BookSummary>(
            "SELECT id, name, publisher FROM books ORDER BY rowid",
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(count = books.len(), "Listed books");
        Ok(books)
    }

    /// Gets a book by its ID.
    ///
    /// ## Returns
    /// * `Ok(Some(Book))` - Book found
    /// * `Ok(None)` - Book not found
    pub async fn find_by_id(&self, id: &str) -> DbResult<Option<Book>> {
        let book = sqlx::query_as::<_, Book>(
            r#"
            SELECT
                id, name, year, author, summary, publisher,
                page_count, read_page, finished, reading,
                created_at, updated_at
            FROM books
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(book)
    }

    /// Replaces every column of an existing book.
    ///
    /// ## Returns
    /// * `Ok(())` - Update successful
    /// * `Err(DbError::NotFound)` - Book doesn't exist (nothing written)
    pub async fn replace(&self, id: &str, record: &BookRecord) -> DbResult<()> {
        debug!(id = %id, "Replacing book");

        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            r#"
            UPDATE books SET
                name = ?2,
                year = ?3,
                author = ?4,
                summary = ?5,
                publisher = ?6,
                page_count = ?7,
                read_page = ?8,
                finished = ?9,
                reading = ?10,
                created_at = ?11,
                updated_at = ?12
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .bind(&record.name)
        .bind(record.year)
        .bind(&record.author)
        .bind(&record.summary)
        .bind(&record.publisher)
        .bind(record.page_count)
        .bind(record.read_page)
        .bind(record.finished)
        .bind(record.reading)
        .bind(record.created_at)
        .bind(record.updated_at)
        .execute(&mut *tx)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Book", id));
        }

        tx.commit()
            .await
            .map_err(|e| DbError::TransactionFailed(e.to_string()))?;

        Ok(())
    }

    /// Hard-deletes a book.
    ///
    /// ## Returns
    /// * `Ok(())` - Row removed
    /// * `Err(DbError::NotFound)` - No such id (never existed or already deleted)
    pub async fn delete(&self, id: &str) -> DbResult<()> {
        debug!(id = %id, "Deleting book");

        let mut tx = self.pool.begin().await?;

        let result = sqlx::query("DELETE FROM books WHERE id = ?1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Book", id));
        }

        tx.commit()
            .await
            .map_err(|e| DbError::TransactionFailed(e.to_string()))?;

        Ok(())
    }

    /// Counts stored books (for diagnostics).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM books")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

#[async_trait]
impl BookStore for BookRepository {
    async fn create(&self, record: &BookRecord) -> StoreResult<String> {
        Ok(self.insert(record).await?)
    }

    async fn list_projected(&self) -> StoreResult<Vec<BookSummary>> {
        Ok(self.list_summaries().await?)
    }

    async fn get_by_id(&self, id: &str) -> StoreResult<Option<Book>> {
        Ok(self.find_by_id(id).await?)
    }

    async fn update_by_id(&self, id: &str, record: &BookRecord) -> StoreResult<()> {
        Ok(self.replace(id, record).await?)
    }

    async fn delete_by_id(&self, id: &str) -> StoreResult<()> {
        Ok(self.delete(id).await?)
    }

    async fn ping(&self) -> StoreResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(DbError::from)?;
        Ok(())
    }
}

/// Generates a new book id (UUID v4, never reused).
pub fn generate_book_id() -> String {
    Uuid::new_v4().to_string()
}

// =============================================================================
// Unit Tests
// =============================================================================
