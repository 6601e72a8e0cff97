//! Database schema definitions
//!
//! The schema is provisioned by whoever owns the connection (the CLI at
//! startup, tests in their setup), never by [`ParcelStore`] itself.
//!
//! [`ParcelStore`]: crate::storage::ParcelStore

use crate::Result;
use rusqlite::Connection;

/// SQL to create the parcel table.
///
/// `AUTOINCREMENT` keeps numbers strictly increasing: a deleted parcel's
/// number is never handed out again.
pub const CREATE_PARCEL_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS parcel (
    number INTEGER PRIMARY KEY AUTOINCREMENT,
    client INTEGER NOT NULL,
    status TEXT NOT NULL CHECK (status IN ('registered', 'sent', 'delivered')),
    address TEXT NOT NULL,
    created_at TEXT NOT NULL
)
"#;

/// SQL to create indexes
pub const CREATE_INDEXES: &[&str] =
    &["CREATE INDEX IF NOT EXISTS idx_parcel_client ON parcel(client)"];

/// All schema creation statements
pub fn all_schema_statements() -> Vec<&'static str> {
    let mut stmts = vec![CREATE_PARCEL_TABLE];
    stmts.extend(CREATE_INDEXES.iter().copied());
    stmts
}

/// Apply the schema to a freshly opened connection. Idempotent.
pub fn ensure_schema(conn: &Connection) -> Result<()> {
    for stmt in all_schema_statements() {
        conn.execute(stmt, [])?;
    }
    Ok(())
}
