//! SQLite storage implementation
//!
//! [`ParcelStore`] is the only code that touches the parcel table. The
//! lifecycle rules (address frozen after shipping, no deleting shipped
//! parcels, status never moves backward) are enforced in the WHERE clause of
//! each mutation, so the check and the write are a single atomic statement.

use crate::parcel::{Parcel, ParcelStatus};
use crate::{Error, Result};
use rusqlite::{params, Connection, OptionalExtension};
use serde::Serialize;

/// SQLite-backed store for parcel records.
///
/// Borrows a connection opened (and eventually closed) by the caller; the
/// store never opens, closes, or migrates the database. Apply
/// [`schema::ensure_schema`] before constructing one.
///
/// [`schema::ensure_schema`]: crate::storage::schema::ensure_schema
pub struct ParcelStore<'c> {
    conn: &'c Connection,
}

impl<'c> ParcelStore<'c> {
    /// Create a store over an already-opened connection
    pub fn new(conn: &'c Connection) -> Self {
        Self { conn }
    }

    /// Insert a new parcel and return its store-assigned number.
    ///
    /// The caller-side `number` is ignored; `client`, `status`, `address`
    /// and `created_at` are persisted as given.
    pub fn add(&self, parcel: &Parcel) -> Result<i64> {
        self.conn.execute(
            "INSERT INTO parcel (client, status, address, created_at) VALUES (?1, ?2, ?3, ?4)",
            params![
                parcel.client,
                parcel.status.as_str(),
                parcel.address,
                parcel.created_at,
            ],
        )?;

        let number = self.conn.last_insert_rowid();
        tracing::debug!("parcel {} registered for client {}", number, parcel.client);
        Ok(number)
    }

    /// Get a parcel by number.
    ///
    /// Fails with [`Error::ParcelNotFound`] when no such row exists, so
    /// callers can tell "missing" apart from a broken store.
    pub fn get(&self, number: i64) -> Result<Parcel> {
        self.conn
            .query_row(
                "SELECT number, client, status, address, created_at FROM parcel WHERE number = ?1",
                [number],
                row_to_parcel,
            )
            .optional()?
            .ok_or(Error::ParcelNotFound(number))
    }

    /// Get all parcels owned by a client, ordered by number.
    ///
    /// An empty result is not an error: a client with no parcels gets an
    /// empty list.
    pub fn get_by_client(&self, client: i64) -> Result<Vec<Parcel>> {
        let mut stmt = self.conn.prepare(
            "SELECT number, client, status, address, created_at FROM parcel WHERE client = ?1 ORDER BY number",
        )?;

        let parcels = stmt
            .query_map([client], row_to_parcel)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(parcels)
    }

    /// Change the shipping address of a parcel that has not shipped yet.
    ///
    /// The update only matches a row still in the registered state; once a
    /// parcel is sent its address is frozen. Zero matched rows (missing
    /// parcel or shipped parcel alike) fail with [`Error::ParcelNotFound`].
    pub fn set_address(&self, number: i64, address: &str) -> Result<()> {
        let affected = self.conn.execute(
            "UPDATE parcel SET address = ?2 WHERE number = ?1 AND status = ?3",
            params![number, address, ParcelStatus::Registered.as_str()],
        )?;

        if affected == 0 {
            return Err(Error::ParcelNotFound(number));
        }
        Ok(())
    }

    /// Move a parcel to a new lifecycle state.
    ///
    /// The update only matches while the stored status does not outrank the
    /// requested one, so the status never moves backward. Forward jumps are
    /// accepted: a parcel whose sent scan was missed can still be marked
    /// delivered. Zero matched rows (missing parcel or backward request)
    /// fail with [`Error::ParcelNotFound`].
    pub fn set_status(&self, number: i64, status: ParcelStatus) -> Result<()> {
        let affected = self.conn.execute(
            "UPDATE parcel SET status = ?2 WHERE number = ?1
               AND (CASE status
                        WHEN 'registered' THEN 0
                        WHEN 'sent' THEN 1
                        WHEN 'delivered' THEN 2
                    END) <= ?3",
            params![number, status.as_str(), status.rank()],
        )?;

        if affected == 0 {
            return Err(Error::ParcelNotFound(number));
        }
        tracing::debug!("parcel {} moved to {}", number, status);
        Ok(())
    }

    /// Delete a parcel that has not shipped yet.
    ///
    /// Shipped parcels are never deleted: their rows are the delivery
    /// history. Zero matched rows fail with [`Error::ParcelNotFound`].
    pub fn delete(&self, number: i64) -> Result<()> {
        let affected = self.conn.execute(
            "DELETE FROM parcel WHERE number = ?1 AND status = ?2",
            params![number, ParcelStatus::Registered.as_str()],
        )?;

        if affected == 0 {
            return Err(Error::ParcelNotFound(number));
        }
        Ok(())
    }

    /// Count parcels per lifecycle state
    pub fn stats(&self) -> Result<TrackerStats> {
        let mut stmt = self
            .conn
            .prepare("SELECT status, COUNT(*) FROM parcel GROUP BY status")?;

        let rows = stmt.query_map([], |row| {
            let status: String = row.get(0)?;
            let count: i64 = row.get(1)?;
            Ok((status, count))
        })?;

        let mut stats = TrackerStats::default();
        for row in rows {
            let (status, count) = row?;
            match status.parse::<ParcelStatus>()? {
                ParcelStatus::Registered => stats.registered = count as usize,
                ParcelStatus::Sent => stats.sent = count as usize,
                ParcelStatus::Delivered => stats.delivered = count as usize,
            }
        }
        Ok(stats)
    }
}

/// Decode one row of the parcel table
fn row_to_parcel(row: &rusqlite::Row) -> rusqlite::Result<Parcel> {
    let status_str: String = row.get(2)?;
    let status = status_str.parse::<ParcelStatus>().map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(2, rusqlite::types::Type::Text, Box::new(e))
    })?;

    Ok(Parcel {
        number: row.get(0)?,
        client: row.get(1)?,
        status,
        address: row.get(3)?,
        created_at: row.get(4)?,
    })
}

/// Parcel counts per lifecycle state
#[derive(Debug, Clone, Default, Serialize)]
pub struct TrackerStats {
    pub registered: usize,
    pub sent: usize,
    pub delivered: usize,
}

impl TrackerStats {
    /// Total number of tracked parcels
    pub fn total(&self) -> usize {
        self.registered + self.sent + self.delivered
    }
}

impl std::fmt::Display for TrackerStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Parcels: {}", self.total())?;
        writeln!(f, "  Registered: {}", self.registered)?;
        writeln!(f, "  Sent: {}", self.sent)?;
        write!(f, "  Delivered: {}", self.delivered)
    }
}
