//! Domain core for the menu service.
//!
//! # Overview
//! Holds everything below the HTTP layer: the `Item` record and its request
//! DTOs, the five-operation `ItemStore` abstraction with its in-memory
//! implementation, and the `ItemService` that owns id generation, startup
//! seeding, and merge-on-update policy.
//!
//! # Design
//! - `ItemStore` is an object-safe async trait so a persistent backend can
//!   replace the in-memory map without touching the service layer.
//! - `ItemService` is constructed explicitly with an injected store — plain
//!   parameter passing, no framework wiring.
//! - DTOs are defined independently of the web framework; the server crate
//!   only wraps them in extractors.

pub mod error;
pub mod item;
pub mod service;
pub mod store;

pub use error::StoreError;
pub use item::{Item, NewItem, UpdateItem};
pub use service::{ItemService, Upsert};
pub use store::{InMemoryStore, ItemStore};
