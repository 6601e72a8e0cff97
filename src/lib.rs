//! # Parceltrack - parcel lifecycle tracker
//!
//! Tracks physical parcels from registration to delivery.
//!
//! Parceltrack provides:
//! - A `Parcel` record (owner, status, address, registration time) with a
//!   closed three-state lifecycle: registered → sent → delivered
//! - SQLite-backed persistence over a caller-owned connection
//! - Lifecycle guards: the address is frozen and the record becomes
//!   undeletable once a parcel ships, and the status never moves backward

pub mod config;
pub mod parcel;
pub mod storage;
pub mod ui;

// Re-exports for convenient access
pub use parcel::{Parcel, ParcelStatus};
pub use storage::{ParcelStore, TrackerStats};

/// Result type alias for parceltrack operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for parceltrack operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No parcel with this number, or the parcel is not in a state the
    /// requested mutation allows. Callers branch on this to tell "missing"
    /// apart from every other failure.
    #[error("parcel {0} not found")]
    ParcelNotFound(i64),

    #[error("storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("invalid parcel status: {0}")]
    InvalidStatus(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
