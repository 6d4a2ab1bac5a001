//! Error types for the storage layer.
//!
//! # Design
//! The in-memory store never fails, but the `ItemStore` trait is written for
//! swappable backends, so every operation returns `Result<_, StoreError>`.
//! A disk- or network-backed implementation can surface its failures through
//! the same signature without changing the service layer.

use thiserror::Error;

/// Errors surfaced by `ItemStore` implementations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing store could not complete the operation.
    #[error("storage backend error: {0}")]
    Backend(String),
}
