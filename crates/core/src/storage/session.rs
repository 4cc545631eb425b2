//! Persisted session storage
//!
//! One durable key holding the serialized current user. Absence means
//! anonymous; presence is trusted at start-up without independent remote
//! verification (a profile re-fetch refreshes it).

use chrono::Utc;
use rusqlite::{params, Connection};
use tracing::instrument;

use crate::error::Result;
use crate::models::User;

const CURRENT_USER_KEY: &str = "current_user";

/// Session persistence store
pub struct SessionStore<'a> {
    conn: &'a Connection,
}

impl<'a> SessionStore<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Persist the current user, replacing any previous one
    #[instrument(skip(self, user), fields(user_id = user.id))]
    pub fn save_user(&self, user: &User) -> Result<()> {
        let value = serde_json::to_string(user)?;
        self.conn.execute(
            "INSERT OR REPLACE INTO session_store (key, value, updated_at)
             VALUES (?1, ?2, ?3)",
            params![CURRENT_USER_KEY, value, Utc::now().to_rfc3339()],
        )?;
        Ok(())
    }

    /// Load the persisted user, if any
    #[instrument(skip(self))]
    pub fn load_user(&self) -> Result<Option<User>> {
        let result = self.conn.query_row(
            "SELECT value FROM session_store WHERE key = ?1",
            params![CURRENT_USER_KEY],
            |row| row.get::<_, String>(0),
        );

        match result {
            Ok(value) => Ok(Some(serde_json::from_str(&value)?)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Remove the persisted user (logout)
    pub fn clear(&self) -> Result<()> {
        self.conn.execute(
            "DELETE FROM session_store WHERE key = ?1",
            params![CURRENT_USER_KEY],
        )?;
        Ok(())
    }
}
