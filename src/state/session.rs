use chrono::Utc;
use rusqlite::{Connection, OptionalExtension};
use std::path::{Path, PathBuf};

use super::data::{Session, User};
use crate::error::SessionError;

const TOKEN_KEY: &str = "token";
const USER_KEY: &str = "user";

/// The SessionStore persists the login session in a small SQLite
/// key-value table, so it survives restarts.
///
/// Two keys are used: `token` (the bearer string) and `user` (the
/// cached profile as JSON). A missing `token` means logged out, whatever
/// `user` holds.
pub struct SessionStore {
    conn: Connection,
    db_path: Option<PathBuf>,
}

impl SessionStore {
    /// Open (or create) the store at `path`.
    pub fn open(path: &Path) -> Result<Self, SessionError> {
        // Ensure the parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(path)?;
        tracing::info!(path = %path.display(), "📁 session store opened");

        let store = SessionStore {
            conn,
            db_path: Some(path.to_path_buf()),
        };
        store.init_schema()?;
        Ok(store)
    }

    /// Non-durable store, for when the data directory is unavailable
    pub fn in_memory() -> Result<Self, SessionError> {
        let store = SessionStore {
            conn: Connection::open_in_memory()?,
            db_path: None,
        };
        store.init_schema()?;
        Ok(store)
    }

    /// Default location:
    /// - Linux: ~/.local/share/snappro/session.db
    /// - macOS: ~/Library/Application Support/snappro/session.db
    /// - Windows: %APPDATA%\snappro\session.db
    pub fn default_path() -> Option<PathBuf> {
        let mut path = dirs::data_dir().or_else(dirs::home_dir)?;
        path.push("snappro");
        path.push("session.db");
        Some(path)
    }

    fn init_schema(&self) -> Result<(), SessionError> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS session (
                key         TEXT PRIMARY KEY,
                value       TEXT NOT NULL,
                updated_at  INTEGER NOT NULL
            )",
            [],
        )?;
        Ok(())
    }

    pub fn path(&self) -> Option<&Path> {
        self.db_path.as_deref()
    }

    /// Persist a freshly obtained session
    pub fn save(&self, session: &Session) -> Result<(), SessionError> {
        let user_json = serde_json::to_string(&session.user)?;
        self.put(TOKEN_KEY, &session.token)?;
        self.put(USER_KEY, &user_json)?;
        tracing::info!(user = %session.user.email, "🔑 session saved");
        Ok(())
    }

    /// Forget the session
    pub fn logout(&self) -> Result<(), SessionError> {
        self.conn.execute(
            "DELETE FROM session WHERE key IN (?1, ?2)",
            rusqlite::params![TOKEN_KEY, USER_KEY],
        )?;
        tracing::info!("👋 logged out");
        Ok(())
    }

    /// Presence of a token, not its validity
    pub fn is_authenticated(&self) -> bool {
        matches!(self.token(), Ok(Some(_)))
    }

    pub fn token(&self) -> Result<Option<String>, SessionError> {
        self.get(TOKEN_KEY)
    }

    /// The cached user profile. Unreadable data counts as no user.
    pub fn current_user(&self) -> Option<User> {
        let raw = match self.get(USER_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(error) => {
                tracing::error!(%error, "failed to read cached user");
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(error) => {
                tracing::error!(%error, "error parsing cached user data");
                None
            }
        }
    }

    fn get(&self, key: &str) -> Result<Option<String>, SessionError> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM session WHERE key = ?1",
                [key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    fn put(&self, key: &str, value: &str) -> Result<(), SessionError> {
        self.conn.execute(
            "INSERT INTO session (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            rusqlite::params![key, value, Utc::now().timestamp()],
        )?;
        Ok(())
    }
}

// Implement Debug for better error messages
impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("db_path", &self.db_path)
            .finish()
    }
}
