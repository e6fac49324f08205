//! SQLite backing for the durable key-value store.
//!
//! # Responsibility
//! - Open and configure SQLite connections.
//! - Bring the schema to the version this binary expects.
//!
//! # Invariants
//! - Schema version is tracked via `PRAGMA user_version`.
//! - No slot is read or written on a connection whose schema is not current.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod migrations;
mod open;

pub use open::{open_db, open_db_in_memory};

pub type DbResult<T> = Result<T, DbError>;

/// Storage failures below the slot layer.
#[derive(Debug)]
pub enum DbError {
    Sqlite(rusqlite::Error),
    /// Database was written by a newer binary.
    SchemaAhead { db_version: u32, supported: u32 },
    /// Connection was handed over before migrations ran.
    SchemaNotMigrated { db_version: u32, expected: u32 },
}

impl DbError {
    /// Classifies a version mismatch by direction.
    ///
    /// Returns `None` when the versions agree.
    pub fn schema_mismatch(db_version: u32, expected: u32) -> Option<Self> {
        match db_version.cmp(&expected) {
            std::cmp::Ordering::Greater => Some(Self::SchemaAhead {
                db_version,
                supported: expected,
            }),
            std::cmp::Ordering::Less => Some(Self::SchemaNotMigrated {
                db_version,
                expected,
            }),
            std::cmp::Ordering::Equal => None,
        }
    }
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "sqlite: {err}"),
            Self::SchemaAhead {
                db_version,
                supported,
            } => write!(
                f,
                "database schema version {db_version} is newer than supported {supported}"
            ),
            Self::SchemaNotMigrated {
                db_version,
                expected,
            } => write!(
                f,
                "database schema version {db_version} is not migrated; expected {expected} (open it with open_db)"
            ),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::SchemaAhead { .. } | Self::SchemaNotMigrated { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

#[cfg(test)]
mod tests {
    use super::DbError;

    #[test]
    fn schema_mismatch_names_direction() {
        assert!(DbError::schema_mismatch(1, 1).is_none());

        let behind = DbError::schema_mismatch(0, 1).unwrap();
        assert!(matches!(
            behind,
            DbError::SchemaNotMigrated { db_version: 0, expected: 1 }
        ));
        assert_eq!(
            behind.to_string(),
            "database schema version 0 is not migrated; expected 1 (open it with open_db)"
        );

        let ahead = DbError::schema_mismatch(7, 1).unwrap();
        assert_eq!(
            ahead.to_string(),
            "database schema version 7 is newer than supported 1"
        );
    }
}
