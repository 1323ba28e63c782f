//! # Book Service
//!
//! Orchestrates validation, record building and the store for each
//! operation.
//!
//! ## Operation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      BookService                                        │
//! │                                                                         │
//! │  create_book(input)                                                    │
//! │    validate_book ──► build_new(now) ──► store.create ──► id            │
//! │                                                                         │
//! │  update_book(id, input)                                                │
//! │    validate_book ──► store.get_by_id ──► build_replacement(now)        │
//! │        │                  │                    │                        │
//! │        ▼                  ▼                    ▼                        │
//! │    Validation        BookNotFound       store.update_by_id             │
//! │                                                                         │
//! │  list_books / get_book / delete_book ──► store                         │
//! │                                                                         │
//! │  Any error short-circuits: nothing is written after a failure.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::Utc;
use tracing::{debug, info};

use crate::error::{CoreError, CoreResult};
use crate::record::{build_new, build_replacement};
use crate::store::BookStore;
use crate::types::{Book, BookInput, BookSummary};
use crate::validation::validate_book;

/// Book operations over an injected store.
#[derive(Debug, Clone)]
pub struct BookService<S> {
    store: S,
}

impl<S: BookStore> BookService<S> {
    /// Creates a service backed by `store`.
    pub fn new(store: S) -> Self {
        BookService { store }
    }

    /// Returns the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Validates and stores a new book, returning its id.
    pub async fn create_book(&self, input: &BookInput) -> CoreResult<String> {
        validate_book(input)?;

        let record = build_new(input, Utc::now());
        let id = self.store.create(&record).await?;

        info!(book_id = %id, finished = record.finished, "Book created");
        Ok(id)
    }

    /// Lists every book in projected form.
    pub async fn list_books(&self) -> CoreResult<Vec<BookSummary>> {
        let books = self.store.list_projected().await?;
        debug!(count = books.len(), "Listed books");
        Ok(books)
    }

    /// Fetches one book.
    pub async fn get_book(&self, id: &str) -> CoreResult<Book> {
        self.store
            .get_by_id(id)
            .await?
            .ok_or_else(|| CoreError::BookNotFound(id.to_string()))
    }

    /// Replaces every field of an existing book.
    ///
    /// Validation runs before the existence check, so an invalid body on an
    /// unknown id reports the validation error.
    pub async fn update_book(&self, id: &str, input: &BookInput) -> CoreResult<()> {
        validate_book(input)?;

        let existing = self.get_book(id).await?;
        let record = build_replacement(input, existing.created_at, Utc::now());
        self.store.update_by_id(id, &record).await?;

        info!(book_id = %id, "Book updated");
        Ok(())
    }

    /// Deletes a book.
    pub async fn delete_book(&self, id: &str) -> CoreResult<()> {
        self.store.delete_by_id(id).await?;
        info!(book_id = %id, "Book deleted");
        Ok(())
    }

    /// Checks that the store is reachable.
    pub async fn health(&self) -> CoreResult<()> {
        self.store.ping().await.map_err(CoreError::from)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{StoreError, ValidationError};
    use crate::memory::MemoryBookStore;
    use std::sync::Arc;

    fn service() -> (BookService<Arc<MemoryBookStore>>, Arc<MemoryBookStore>) {
        let store = Arc::new(MemoryBookStore::new());
        (BookService::new(store.clone()), store)
    }

    fn dune() -> BookInput {
        BookInput {
            name: Some("Dune".to_string()),
            year: Some(1965),
            author: Some("Frank Herbert".to_string()),
            summary: Some("Spice".to_string()),
            publisher: Some("Chilton".to_string()),
            page_count: Some(100),
            read_page: Some(100),
            reading: Some(false),
        }
    }

    #[tokio::test]
    async fn test_create_then_get_round_trip() {
        let (service, _) = service();
        let id = service.create_book(&dune()).await.unwrap();

        let book = service.get_book(&id).await.unwrap();
        assert_eq!(book.id, id);
        assert_eq!(book.name, "Dune");
        assert_eq!(book.year, Some(1965));
        assert_eq!(book.author.as_deref(), Some("Frank Herbert"));
        assert_eq!(book.summary.as_deref(), Some("Spice"));
        assert_eq!(book.publisher.as_deref(), Some("Chilton"));
        assert_eq!(book.page_count, Some(100));
        assert_eq!(book.read_page, Some(100));
        assert_eq!(book.reading, Some(false));
        assert!(book.finished);
        assert_eq!(book.created_at, book.updated_at);
    }

    #[tokio::test]
    async fn test_invalid_create_persists_nothing() {
        let (service, store) = service();

        let no_name = BookInput {
            name: None,
            ..dune()
        };
        assert!(matches!(
            service.create_book(&no_name).await,
            Err(CoreError::Validation(ValidationError::MissingName))
        ));

        let overread = BookInput {
            page_count: Some(50),
            read_page: Some(60),
            ..dune()
        };
        assert!(matches!(
            service.create_book(&overread).await,
            Err(CoreError::Validation(
                ValidationError::ReadPageExceedsPageCount { .. }
            ))
        ));

        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_update_replaces_fully() {
        let (service, _) = service();
        let id = service.create_book(&dune()).await.unwrap();
        let before = service.get_book(&id).await.unwrap();

        let replacement = BookInput {
            name: Some("Dune Messiah".to_string()),
            page_count: Some(256),
            read_page: Some(12),
            ..Default::default()
        };
        service.update_book(&id, &replacement).await.unwrap();

        let after = service.get_book(&id).await.unwrap();
        assert_eq!(after.name, "Dune Messiah");
        assert_eq!(after.author, None);
        assert_eq!(after.publisher, None);
        assert_eq!(after.year, None);
        assert_eq!(after.reading, None);
        assert!(!after.finished);
        assert_eq!(after.created_at, before.created_at);
        assert!(after.updated_at >= before.updated_at);
    }

    #[tokio::test]
    async fn test_invalid_update_leaves_record_unchanged() {
        let (service, _) = service();
        let id = service.create_book(&dune()).await.unwrap();
        let before = service.get_book(&id).await.unwrap();

        let blank = BookInput {
            name: Some(String::new()),
            ..dune()
        };
        assert!(matches!(
            service.update_book(&id, &blank).await,
            Err(CoreError::Validation(ValidationError::MissingName))
        ));

        assert_eq!(service.get_book(&id).await.unwrap(), before);
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_not_found_and_creates_nothing() {
        let (service, store) = service();

        assert!(matches!(
            service.update_book("missing", &dune()).await,
            Err(CoreError::BookNotFound(_))
        ));
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_invalid_update_on_unknown_id_reports_validation() {
        let (service, _) = service();
        let no_name = BookInput {
            name: None,
            ..dune()
        };

        assert!(matches!(
            service.update_book("missing", &no_name).await,
            Err(CoreError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_delete_is_not_found_after_first_delete() {
        let (service, _) = service();
        let id = service.create_book(&dune()).await.unwrap();

        service.delete_book(&id).await.unwrap();
        for _ in 0..2 {
            assert!(matches!(
                service.delete_book(&id).await,
                Err(CoreError::BookNotFound(_))
            ));
        }
        assert!(matches!(
            service.get_book(&id).await,
            Err(CoreError::BookNotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_list_books_projects() {
        let (service, _) = service();
        let id = service.create_book(&dune()).await.unwrap();

        let books = service.list_books().await.unwrap();
        assert_eq!(books.len(), 1);
        assert_eq!(books[0].id, id);
        assert_eq!(books[0].name, "Dune");
        assert_eq!(books[0].publisher.as_deref(), Some("Chilton"));
    }

    #[tokio::test]
    async fn test_storage_failure_surfaces_immediately() {
        let (service, store) = service();
        store.set_offline(true);

        assert!(matches!(
            service.create_book(&dune()).await,
            Err(CoreError::Storage(StoreError::Unavailable(_)))
        ));
        assert!(matches!(
            service.list_books().await,
            Err(CoreError::Storage(_))
        ));
        assert!(service.health().await.is_err());
    }
}
