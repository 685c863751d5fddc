//! Core library for the Food Tracker meal journal.
//!
//! The surface is intentionally small: a validated [`Record`] for each meal and
//! a [`RecordStore`] that keeps the ordered list and persists it to a single
//! archive file. Screens and other front-ends drive the store through
//! [`Edit`] messages.
pub mod models;
pub mod store;

/// The domain type every other layer manipulates.
pub use models::{Record, RecordError, MAX_RATING};

/// Persistence entry points typically used by `main.rs` and front-ends.
pub use store::{archive_path, load, seed, Edit, RecordStore, StoreError};
