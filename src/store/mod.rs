//! SQLite-backed record store
//!
//! One `Store` is opened per invoked operation; there is no pooling, no
//! caching, and no transaction spans more than one statement. Foreign keys
//! are declared in the schema but enforcement is left at SQLite's default
//! (off), matching existing database files: deleting a supplier leaves
//! dependent items, orders, and logistics entries dangling.

mod item;
mod logistics;
mod order;
mod schema;
mod supplier;

use std::path::Path;

use rusqlite::Connection;

use crate::core::error::{StoreError, StoreResult};

/// Handle to the liquor supply database.
#[derive(Debug)]
pub struct Store {
    conn: Connection,
}

impl Store {
    /// Open the database file, creating it and the schema if absent.
    pub fn open(path: &Path) -> StoreResult<Self> {
        let conn = Connection::open(path).map_err(|e| StoreError::Open {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let store = Self { conn };
        store.init_schema()?;
        Ok(store)
    }

    /// In-memory store for tests.
    pub fn open_in_memory() -> StoreResult<Self> {
        let conn = Connection::open_in_memory().map_err(|e| StoreError::Open {
            path: ":memory:".into(),
            message: e.to_string(),
        })?;
        let store = Self { conn };
        store.init_schema()?;
        Ok(store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_init_is_idempotent() {
        let store = Store::open_in_memory().unwrap();
        store.init_schema().unwrap();
        store.init_schema().unwrap();
    }

    #[test]
    fn test_constraint_violation_is_classified() {
        let store = Store::open_in_memory().unwrap();
        let err = store
            .conn
            .execute("INSERT INTO suppliers (name) VALUES (NULL)", [])
            .map_err(StoreError::from)
            .unwrap_err();
        assert!(matches!(err, StoreError::Constraint(_)));
    }

    #[test]
    fn test_malformed_statement_is_classified() {
        let store = Store::open_in_memory().unwrap();
        let err = store
            .conn
            .prepare("SELEC id FROM suppliers")
            .map_err(StoreError::from)
            .unwrap_err();
        assert!(matches!(err, StoreError::Statement(_)));
    }

    #[test]
    fn test_open_rejects_unusable_path() {
        let tmp = tempfile::TempDir::new().unwrap();
        let err = Store::open(tmp.path()).unwrap_err();
        assert!(matches!(err, StoreError::Open { .. }));
    }
}
