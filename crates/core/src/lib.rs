//! Functional core for the customers service.
//!
//! Pure domain types, request payloads and storage contracts. Nothing in
//! this crate performs I/O; the server crate supplies the repository
//! implementation and the HTTP shell.

pub mod customer;
pub mod serde;
pub mod storage;
