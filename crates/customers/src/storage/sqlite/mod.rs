//! SQLite storage backend.
//!
//! Uses `rusqlite` for statements and `tokio-rusqlite` to drive the single
//! shared connection from async handlers.

mod conversions;
mod error;
mod repository;
mod schema;

pub use repository::SqliteRepository;
