//! # Repository Module
//!
//! Database repository implementations for Bookshelf.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern                                   │
//! │                                                                         │
//! │  BookService (bookshelf-core)                                          │
//! │       │                                                                 │
//! │       │  store.get_by_id("...")                                        │
//! │       ▼                                                                 │
//! │  BookRepository: impl BookStore                                        │
//! │  ├── create(&self, record)                                             │
//! │  ├── list_projected(&self)                                             │
//! │  ├── get_by_id(&self, id)                                              │
//! │  ├── update_by_id(&self, id, record)                                   │
//! │  └── delete_by_id(&self, id)                                           │
//! │       │                                                                 │
//! │       │  SQL Query                                                      │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod book;
