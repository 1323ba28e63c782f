//! # Book Store Gateway
//!
//! The narrow interface the core uses to reach persistence.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Book Store Gateway                                   │
//! │                                                                         │
//! │  BookService                                                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  dyn BookStore                                                         │
//! │  ├── create(record)          → id                                      │
//! │  ├── list_projected()        → [{id, name, publisher}]                 │
//! │  ├── get_by_id(id)           → Option<Book>                            │
//! │  ├── update_by_id(id, rec)   → () | NotFound                           │
//! │  ├── delete_by_id(id)        → () | NotFound                           │
//! │  └── ping()                  → () | Unavailable                        │
//! │       │                                                                 │
//! │       ├──► MemoryBookStore  (this crate, tests)                        │
//! │       └──► BookRepository   (bookshelf-db, SQLite)                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Contract
//! - Ids are assigned by the store and never reused.
//! - `update_by_id` replaces the whole record and never creates one.
//! - `delete_by_id` is a hard delete; a second delete reports `NotFound`.
//! - Each write is atomic; SQL stores use one transaction per call.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::StoreResult;
use crate::types::{Book, BookRecord, BookSummary};

/// Persistence gateway for books.
#[async_trait]
pub trait BookStore: Send + Sync {
    /// Persists a new record and returns its assigned id.
    async fn create(&self, record: &BookRecord) -> StoreResult<String>;

    /// Lists every book projected to `{id, name, publisher}`.
    async fn list_projected(&self) -> StoreResult<Vec<BookSummary>>;

    /// Fetches a book by id.
    async fn get_by_id(&self, id: &str) -> StoreResult<Option<Book>>;

    /// Replaces the stored record for `id`.
    async fn update_by_id(&self, id: &str, record: &BookRecord) -> StoreResult<()>;

    /// Removes the record for `id`.
    async fn delete_by_id(&self, id: &str) -> StoreResult<()>;

    /// Checks the backing engine is reachable.
    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }
}

#[async_trait]
impl<T: BookStore + ?Sized> BookStore for Arc<T> {
    async fn create(&self, record: &BookRecord) -> StoreResult<String> {
        (**self).create(record).await
    }

    async fn list_projected(&self) -> StoreResult<Vec<BookSummary>> {
        (**self).list_projected().await
    }

    async fn get_by_id(&self, id: &str) -> StoreResult<Option<Book>> {
        (**self).get_by_id(id).await
    }

    async fn update_by_id(&self, id: &str, record: &BookRecord) -> StoreResult<()> {
        (**self).update_by_id(id, record).await
    }

    async fn delete_by_id(&self, id: &str) -> StoreResult<()> {
        (**self).delete_by_id(id).await
    }

    async fn ping(&self) -> StoreResult<()> {
        (**self).ping().await
    }
}
