//! Storage backend implementations.
//!
//! Concrete implementations of the repository traits defined in
//! `customers_core::storage`.

pub mod sqlite;

pub use sqlite::SqliteRepository;
