//! Storage Layer - SQLite-backed persistence
//!
//! System of record is SQLite with a single table:
//! - parcel(number, client, status, address, created_at)
//!
//! The connection is owned by the caller and borrowed by the store; the
//! schema is applied at bootstrap via [`schema::ensure_schema`].

pub mod schema;
pub mod sqlite;

pub use sqlite::{ParcelStore, TrackerStats};
