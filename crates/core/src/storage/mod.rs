//! SQLite storage layer for Newsdesk
//!
//! The client persists exactly one logical key: the serialized current
//! user. The schema still goes through versioned migrations so later
//! additions (drafts, read positions) slot in without ad-hoc DDL.

mod migrations;
mod session;

pub use session::SessionStore;

use std::path::Path;

use rusqlite::Connection;
use tracing::instrument;

use crate::error::Result;

/// Main database handle
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open or create database at the given path
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open(path)?;
        let db = Self { conn };
        db.init()?;
        Ok(db)
    }

    /// Open in-memory database (for testing)
    #[instrument]
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.init()?;
        Ok(db)
    }

    /// Initialize database schema via migrations
    fn init(&self) -> Result<()> {
        migrations::run_migrations(&self.conn)?;
        Ok(())
    }

    /// Get current schema version
    pub fn schema_version(&self) -> u32 {
        self.conn
            .query_row("SELECT MAX(version) FROM schema_migrations", [], |row| {
                row.get(0)
            })
            .unwrap_or(0)
    }

    /// Get session store (persisted current user)
    pub fn session(&self) -> SessionStore<'_> {
        SessionStore::new(&self.conn)
    }
}
