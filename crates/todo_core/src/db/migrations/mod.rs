//! Ordered schema steps for the slot database.
//!
//! # Invariants
//! - Step versions start at 1 and increase by one.
//! - All pending steps commit in one transaction or none do.

use crate::db::{DbError, DbResult};
use log::info;
use rusqlite::Connection;

/// `(version, sql)` pairs applied in order.
const STEPS: &[(u32, &str)] = &[(1, include_str!("0001_init.sql"))];

/// Schema version this binary reads and writes.
pub fn latest_version() -> u32 {
    STEPS.last().map_or(0, |(version, _)| *version)
}

/// Reads `PRAGMA user_version`.
pub fn schema_version(conn: &Connection) -> DbResult<u32> {
    Ok(conn.query_row("PRAGMA user_version;", [], |row| row.get::<_, u32>(0))?)
}

/// Fails unless `conn` is exactly at [`latest_version`].
pub fn ensure_current(conn: &Connection) -> DbResult<()> {
    match DbError::schema_mismatch(schema_version(conn)?, latest_version()) {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

/// Runs every step newer than the stored version.
///
/// # Errors
/// - `SchemaAhead` when the database is newer than this binary.
pub fn apply_migrations(conn: &mut Connection) -> DbResult<()> {
    let from = schema_version(conn)?;
    let to = latest_version();
    if from > to {
        return Err(DbError::SchemaAhead {
            db_version: from,
            supported: to,
        });
    }

    let pending = STEPS
        .iter()
        .filter(|(version, _)| *version > from)
        .collect::<Vec<_>>();
    if pending.is_empty() {
        return Ok(());
    }

    let tx = conn.transaction()?;
    for (version, sql) in &pending {
        tx.execute_batch(sql)?;
        tx.pragma_update(None, "user_version", version)?;
    }
    tx.commit()?;

    info!(
        "event=db_migrate module=db status=ok from={} to={} steps={}",
        from,
        to,
        pending.len()
    );
    Ok(())
}
