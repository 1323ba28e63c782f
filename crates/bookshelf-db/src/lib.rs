//! # bookshelf-db: Database Layer for Bookshelf
//!
//! SQLite storage for books, using sqlx for async operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Bookshelf Data Flow                              │
//! │                                                                         │
//! │  BookService (bookshelf-core)                                          │
//! │       │  dyn BookStore                                                  │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   bookshelf-db (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │   Database    │    │  Repository   │    │  Migrations  │  │   │
//! │  │   │   (pool.rs)   │◄───│   (book.rs)   │    │  (embedded)  │  │   │
//! │  │   │  SqlitePool   │    │ BookRepository│    │ 001_books    │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  bookshelf.db (SQLite, WAL)                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use bookshelf_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("bookshelf.db")).await?;
//! let store = db.books(); // impl BookStore
//! ```

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};
pub use repository::book::BookRepository;
