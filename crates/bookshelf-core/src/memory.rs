//! # In-Memory Book Store
//!
//! A [`BookStore`] kept in process memory. Used by tests and by anything
//! that wants the service without a database.
//!
//! Books are kept in insertion order. `set_offline(true)` makes every call
//! fail with `StoreError::Unavailable`, which is how the storage-failure
//! paths get exercised without a real engine.

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::error::{StoreError, StoreResult};
use crate::store::BookStore;
use crate::types::{Book, BookRecord, BookSummary};

/// Process-local book store.
#[derive(Debug, Default)]
pub struct MemoryBookStore {
    books: RwLock<Vec<Book>>,
    offline: AtomicBool,
}

impl MemoryBookStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulates the backing engine going away (or coming back).
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    /// Number of stored books.
    pub async fn len(&self) -> usize {
        self.books.read().await.len()
    }

    /// Whether the store holds no books.
    pub async fn is_empty(&self) -> bool {
        self.books.read().await.is_empty()
    }

    fn ensure_online(&self) -> StoreResult<()> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("memory store is offline".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl BookStore for MemoryBookStore {
    async fn create(&self, record: &BookRecord) -> StoreResult<String> {
        self.ensure_online()?;

        let id = Uuid::new_v4().to_string();
        debug!(id = %id, "Inserting book into memory store");

        self.books
            .write()
            .await
            .push(Book::from_record(id.clone(), record.clone()));
        Ok(id)
    }

    async fn list_projected(&self) -> StoreResult<Vec<BookSummary>> {
        self.ensure_online()?;
        Ok(self.books.read().await.iter().map(Book::summary).collect())
    }

    async fn get_by_id(&self, id: &str) -> StoreResult<Option<Book>> {
        self.ensure_online()?;
        Ok(self.books.read().await.iter().find(|b| b.id == id).cloned())
    }

    async fn update_by_id(&self, id: &str, record: &BookRecord) -> StoreResult<()> {
        self.ensure_online()?;

        let mut books = self.books.write().await;
        let slot = books
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or_else(|| StoreError::not_found(id))?;
        *slot = Book::from_record(id, record.clone());
        Ok(())
    }

    async fn delete_by_id(&self, id: &str) -> StoreResult<()> {
        self.ensure_online()?;

        let mut books = self.books.write().await;
        let index = books
            .iter()
            .position(|b| b.id == id)
            .ok_or_else(|| StoreError::not_found(id))?;
        books.remove(index);
        Ok(())
    }

    async fn ping(&self) -> StoreResult<()> {
        self.ensure_online()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
