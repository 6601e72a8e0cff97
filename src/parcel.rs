//! Parcel types - the tracked shipment record and its lifecycle
//!
//! A parcel moves through exactly three states:
//! - `Registered`: accepted into the system, not yet handed to a courier
//! - `Sent`: in transit
//! - `Delivered`: handed to the recipient (terminal)
//!
//! The status only ever moves forward; the store rejects backward updates.

use crate::{Error, Result};
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Lifecycle state of a parcel.
///
/// A closed set: these three variants are the only values that ever reach
/// storage, and every match over them is exhaustive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParcelStatus {
    /// Accepted into the system; address still editable, record still deletable
    Registered,
    /// Handed to a courier and in transit
    Sent,
    /// Received by the recipient - terminal state
    Delivered,
}

impl ParcelStatus {
    /// Get the string representation stored in the database
    pub fn as_str(&self) -> &'static str {
        match self {
            ParcelStatus::Registered => "registered",
            ParcelStatus::Sent => "sent",
            ParcelStatus::Delivered => "delivered",
        }
    }

    /// Get all statuses in lifecycle order
    pub fn all() -> &'static [ParcelStatus] {
        &[
            ParcelStatus::Registered,
            ParcelStatus::Sent,
            ParcelStatus::Delivered,
        ]
    }

    /// Position in the lifecycle; status changes must never decrease it
    pub fn rank(&self) -> i64 {
        match self {
            ParcelStatus::Registered => 0,
            ParcelStatus::Sent => 1,
            ParcelStatus::Delivered => 2,
        }
    }

    /// Check whether this is the initial state, in which the address may
    /// still change and the record may still be deleted
    pub fn is_registered(&self) -> bool {
        matches!(self, ParcelStatus::Registered)
    }
}

impl FromStr for ParcelStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "registered" => Ok(ParcelStatus::Registered),
            "sent" => Ok(ParcelStatus::Sent),
            "delivered" => Ok(ParcelStatus::Delivered),
            _ => Err(Error::InvalidStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for ParcelStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A tracked shipment record.
///
/// `number` is assigned by the store on insert and is immutable afterwards;
/// a freshly built parcel carries `0` until [`ParcelStore::add`] returns the
/// real identifier.
///
/// [`ParcelStore::add`]: crate::storage::ParcelStore::add
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parcel {
    /// Store-assigned identifier, unique and never reused
    pub number: i64,
    /// Identifier of the owning client
    pub client: i64,
    /// Current lifecycle state
    pub status: ParcelStatus,
    /// Current shipping address
    pub address: String,
    /// Registration time, RFC3339 in UTC; set once at creation
    pub created_at: String,
}

impl Parcel {
    /// Create a parcel in the initial state, stamped with the current time.
    ///
    /// This is the caller-side constructor used at registration; the store
    /// assigns `number` when the parcel is added.
    pub fn new(client: i64, address: impl Into<String>) -> Self {
        Self {
            number: 0,
            client,
            status: ParcelStatus::Registered,
            address: address.into(),
            created_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_roundtrip() {
        for status in ParcelStatus::all() {
            let s = status.as_str();
            let parsed: ParcelStatus = s.parse().unwrap();
            assert_eq!(*status, parsed);
        }
    }

    #[test]
    fn test_status_parse_is_case_insensitive() {
        assert_eq!(
            ParcelStatus::from_str("Registered").unwrap(),
            ParcelStatus::Registered
        );
        assert_eq!(
            ParcelStatus::from_str("SENT").unwrap(),
            ParcelStatus::Sent
        );
    }

    #[test]
    fn test_status_rejects_unknown() {
        let err = ParcelStatus::from_str("lost").unwrap_err();
        assert!(matches!(err, Error::InvalidStatus(_)));
    }

    #[test]
    fn test_status_rank_is_lifecycle_order() {
        assert!(ParcelStatus::Registered.rank() < ParcelStatus::Sent.rank());
        assert!(ParcelStatus::Sent.rank() < ParcelStatus::Delivered.rank());
    }

    #[test]
    fn test_new_parcel_starts_registered() {
        let parcel = Parcel::new(1000, "test");
        assert_eq!(parcel.number, 0);
        assert_eq!(parcel.client, 1000);
        assert_eq!(parcel.status, ParcelStatus::Registered);
        assert!(parcel.status.is_registered());
        assert!(!ParcelStatus::Sent.is_registered());
        assert_eq!(parcel.address, "test");
        assert!(chrono::DateTime::parse_from_rfc3339(&parcel.created_at).is_ok());
        assert!(parcel.created_at.ends_with('Z'));
    }
}
