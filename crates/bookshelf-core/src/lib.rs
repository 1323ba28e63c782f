//! # bookshelf-core: Domain Logic for Bookshelf
//!
//! This crate holds every rule about books: what input is acceptable, how
//! the persisted record is derived, and which storage call each operation
//! makes. It performs no I/O of its own.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Bookshelf Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 bookshelf-api (axum)                            │   │
//! │  │    POST/GET/PUT/DELETE /books ──► JSON envelopes               │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ bookshelf-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │validation │  │  record   │  │  service  │  │   store   │  │   │
//! │  │   │ name,     │─►│ finished, │─►│ BookSvc   │─►│ BookStore │  │   │
//! │  │   │ pages     │  │ timestamps│  │           │  │ (trait)   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └─────┬─────┘  │   │
//! │  └─────────────────────────────────────────────────────────┼───────┘   │
//! │                                                            │            │
//! │  ┌─────────────────────────────────────────────────────────▼───────┐   │
//! │  │                bookshelf-db (BookRepository, SQLite)            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - BookInput, BookRecord, Book, BookSummary
//! - [`validation`] - Input rules
//! - [`record`] - Derived fields and timestamps
//! - [`store`] - The `BookStore` gateway trait
//! - [`memory`] - In-memory `BookStore`
//! - [`service`] - `BookService` orchestration
//! - [`error`] - Error taxonomy
//!
//! ## Example Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use bookshelf_core::{BookInput, BookService, MemoryBookStore};
//!
//! let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
//! rt.block_on(async {
//!     let service = BookService::new(Arc::new(MemoryBookStore::new()));
//!     let id = service
//!         .create_book(&BookInput {
//!             name: Some("Dune".to_string()),
//!             page_count: Some(100),
//!             read_page: Some(100),
//!             ..Default::default()
//!         })
//!         .await
//!         .unwrap();
//!
//!     assert!(service.get_book(&id).await.unwrap().finished);
//! });
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod memory;
pub mod record;
pub mod service;
pub mod store;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, StoreError, StoreResult, ValidationError};
pub use memory::MemoryBookStore;
pub use service::BookService;
pub use store::BookStore;
pub use types::*;
pub use validation::validate_book;
