//! SQLite-backed local store.
//!
//! Provides persistent storage for:
//! - Journal entries (structured table)
//! - A generic key-value store for JSON records, counters and flags
//!
//! The kv table is the Rust-side analogue of the browser's string-keyed
//! local storage: forum posts, blog posts, the mindfulness session counter
//! and the admin flag all live there as JSON-serialized values. Malformed
//! or absent stored data reads back as "no data" (empty list, zero counter,
//! false flag) rather than an error.

use chrono::{DateTime, NaiveDate, Utc};
use rusqlite::{params, Connection};
use serde::{de::DeserializeOwned, Serialize};

use crate::error::{DatabaseError, Result};
use crate::journal::JournalEntry;

use super::data_dir;

/// Key for the persisted mindfulness session counter.
const SESSION_COUNT_KEY: &str = "mindfulness_sessions";
/// Key for the admin flag.
const ADMIN_FLAG_KEY: &str = "is_admin";
/// Key for the local anonymous user id.
const USER_ID_KEY: &str = "user_id";

/// SQLite database for journal entries and the key-value store.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Get a reference to the underlying SQLite connection.
    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Open the database at `~/.config/wellnesshub/wellnesshub.db`.
    ///
    /// Creates the database file and schema if they don't exist.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or migrated.
    pub fn open() -> Result<Self> {
        let path = data_dir()?.join("wellnesshub.db");
        log::debug!("opening database at {}", path.display());
        let conn = Connection::open(&path)
            .map_err(|source| DatabaseError::OpenFailed { path, source })?;
        let db = Self { conn };
        db.migrate().map_err(DatabaseError::from)?;
        Ok(db)
    }

    /// Open an in-memory database (for tests).
    pub fn open_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(DatabaseError::from)?;
        let db = Self { conn };
        db.migrate().map_err(DatabaseError::from)?;
        Ok(db)
    }

    fn migrate(&self) -> Result<(), rusqlite::Error> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS journal_entries (
                id          INTEGER PRIMARY KEY,
                title       TEXT NOT NULL,
                content     TEXT NOT NULL,
                mood        TEXT NOT NULL,
                entry_date  TEXT NOT NULL,
                created_at  TEXT NOT NULL
            );

            CREATE TABLE IF NOT EXISTS kv (
                key   TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_journal_entries_date ON journal_entries(entry_date);",
        )?;
        Ok(())
    }

    // ── Journal entries ──────────────────────────────────────────────

    /// Insert a journal entry. Entries are immutable once created; there is
    /// no update or delete path.
    ///
    /// # Errors
    /// Returns an error if the insert fails (including a duplicate id).
    pub fn insert_entry(&self, entry: &JournalEntry) -> Result<(), DatabaseError> {
        self.conn.execute(
            "INSERT INTO journal_entries (id, title, content, mood, entry_date, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                entry.id,
                entry.title,
                entry.content,
                entry.mood.as_str(),
                entry.date.format("%Y-%m-%d").to_string(),
                entry.created_at.to_rfc3339(),
            ],
        )?;
        Ok(())
    }

    /// List all journal entries, newest first.
    ///
    /// Rows that fail to parse are skipped rather than surfaced as errors.
    pub fn list_entries(&self) -> Result<Vec<JournalEntry>, DatabaseError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, title, content, mood, entry_date, created_at
             FROM journal_entries
             ORDER BY id DESC",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, i64>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, String>(3)?,
                row.get::<_, String>(4)?,
                row.get::<_, String>(5)?,
            ))
        })?;

        let mut entries = Vec::new();
        for row in rows {
            let (id, title, content, mood, date, created_at) = row?;
            let Ok(mood) = mood.parse() else { continue };
            let Ok(date) = NaiveDate::parse_from_str(&date, "%Y-%m-%d") else {
                continue;
            };
            let Ok(created_at) = DateTime::parse_from_rfc3339(&created_at) else {
                continue;
            };
            entries.push(JournalEntry {
                id,
                title,
                content,
                mood,
                date,
                created_at: created_at.with_timezone(&Utc),
            });
        }
        Ok(entries)
    }

    /// Calendar dates of all journal entries (duplicates included).
    pub fn entry_dates(&self) -> Result<Vec<NaiveDate>, DatabaseError> {
        let mut stmt = self
            .conn
            .prepare("SELECT entry_date FROM journal_entries")?;
        let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;
        let mut dates = Vec::new();
        for row in rows {
            if let Ok(date) = NaiveDate::parse_from_str(&row?, "%Y-%m-%d") {
                dates.push(date);
            }
        }
        Ok(dates)
    }

    pub fn entry_count(&self) -> Result<u64, DatabaseError> {
        let count: u64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM journal_entries", [], |row| row.get(0))?;
        Ok(count)
    }

    // ── Session counter ──────────────────────────────────────────────

    /// Completed mindfulness session count. Malformed stored values read
    /// as zero.
    pub fn session_count(&self) -> Result<u64, DatabaseError> {
        Ok(self
            .kv_get(SESSION_COUNT_KEY)?
            .and_then(|v| v.parse().ok())
            .unwrap_or(0))
    }

    /// Increment the session counter by one and return the new count.
    pub fn increment_session_count(&self) -> Result<u64, DatabaseError> {
        let count = self.session_count()? + 1;
        self.kv_set(SESSION_COUNT_KEY, &count.to_string())?;
        Ok(count)
    }

    // ── Admin flag and local identity ────────────────────────────────

    /// Whether the admin flag is set. Anything but the literal "true"
    /// reads as false.
    pub fn is_admin(&self) -> Result<bool, DatabaseError> {
        Ok(self.kv_get(ADMIN_FLAG_KEY)?.as_deref() == Some("true"))
    }

    pub fn set_admin(&self, admin: bool) -> Result<(), DatabaseError> {
        if admin {
            self.kv_set(ADMIN_FLAG_KEY, "true")
        } else {
            self.kv_delete(ADMIN_FLAG_KEY)
        }
    }

    /// The local anonymous user id, generated on first use.
    pub fn user_id(&self) -> Result<String, DatabaseError> {
        if let Some(id) = self.kv_get(USER_ID_KEY)? {
            return Ok(id);
        }
        let id = format!("user_{}", uuid::Uuid::new_v4().simple());
        self.kv_set(USER_ID_KEY, &id)?;
        Ok(id)
    }

    // ── Key-value store ──────────────────────────────────────────────

    /// Get a value from the kv store.
    pub fn kv_get(&self, key: &str) -> Result<Option<String>, DatabaseError> {
        let mut stmt = self.conn.prepare("SELECT value FROM kv WHERE key = ?1")?;
        let result = stmt.query_row(params![key], |row| row.get::<_, String>(0));
        match result {
            Ok(v) => Ok(Some(v)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Set a value in the kv store.
    pub fn kv_set(&self, key: &str, value: &str) -> Result<(), DatabaseError> {
        self.conn.execute(
            "INSERT OR REPLACE INTO kv (key, value) VALUES (?1, ?2)",
            params![key, value],
        )?;
        Ok(())
    }

    /// Remove a key from the kv store. Removing an absent key is a no-op.
    pub fn kv_delete(&self, key: &str) -> Result<(), DatabaseError> {
        self.conn
            .execute("DELETE FROM kv WHERE key = ?1", params![key])?;
        Ok(())
    }

    /// Load a JSON record from the kv store.
    ///
    /// Returns `None` when the key is absent and the default when the
    /// stored value is malformed.
    pub fn load_json<T: DeserializeOwned + Default>(&self, key: &str) -> Result<Option<T>> {
        match self.kv_get(key)? {
            None => Ok(None),
            Some(raw) => Ok(Some(serde_json::from_str(&raw).unwrap_or_default())),
        }
    }

    /// Store a JSON record in the kv store.
    pub fn store_json<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let raw = serde_json::to_string(value)?;
        self.kv_set(key, &raw)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::journal::Mood;

    fn entry(id: i64, date: &str) -> JournalEntry {
        JournalEntry {
            id,
            title: "A day".into(),
            content: "Some thoughts".into(),
            mood: Mood::Good,
            date: date.parse().unwrap(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn insert_and_list_newest_first() {
        let db = Database::open_memory().unwrap();
        db.insert_entry(&entry(1, "2026-08-29")).unwrap();
        db.insert_entry(&entry(2, "2026-08-30")).unwrap();
        let entries = db.list_entries().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].id, 2);
        assert_eq!(db.entry_count().unwrap(), 2);
    }

    #[test]
    fn kv_store() {
        let db = Database::open_memory().unwrap();
        assert!(db.kv_get("test").unwrap().is_none());
        db.kv_set("test", "hello").unwrap();
        assert_eq!(db.kv_get("test").unwrap().unwrap(), "hello");
        db.kv_delete("test").unwrap();
        assert!(db.kv_get("test").unwrap().is_none());
    }

    #[test]
    fn session_counter_starts_at_zero() {
        let db = Database::open_memory().unwrap();
        assert_eq!(db.session_count().unwrap(), 0);
        assert_eq!(db.increment_session_count().unwrap(), 1);
        assert_eq!(db.session_count().unwrap(), 1);
    }

    #[test]
    fn malformed_session_counter_reads_as_zero() {
        let db = Database::open_memory().unwrap();
        db.kv_set("mindfulness_sessions", "not a number").unwrap();
        assert_eq!(db.session_count().unwrap(), 0);
    }

    #[test]
    fn admin_flag_defaults_to_false() {
        let db = Database::open_memory().unwrap();
        assert!(!db.is_admin().unwrap());
        db.set_admin(true).unwrap();
        assert!(db.is_admin().unwrap());
        db.set_admin(false).unwrap();
        assert!(!db.is_admin().unwrap());
    }

    #[test]
    fn user_id_is_stable() {
        let db = Database::open_memory().unwrap();
        let first = db.user_id().unwrap();
        assert!(first.starts_with("user_"));
        assert_eq!(db.user_id().unwrap(), first);
    }

    #[test]
    fn malformed_json_reads_as_default() {
        let db = Database::open_memory().unwrap();
        db.kv_set("posts", "{not json").unwrap();
        let posts: Option<Vec<String>> = db.load_json("posts").unwrap();
        assert_eq!(posts, Some(vec![]));
    }
}
