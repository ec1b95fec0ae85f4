//! SQLite backend for persisted readings.

use std::path::Path;

use rusqlite::{params, Connection};

use crate::error::StoreError;
use crate::models::Reading;

const TABLE_NAME: &str = "readings";


/// Narrow contract the store needs from its storage engine: a single
/// key-ordered table with create, insert, full read, and reset.
///
/// The store treats the engine as opaque; anything that can durably
/// hold rows in insertion order can sit behind this trait.
pub trait Backend: Send {
    /// Create the readings table if it does not exist yet.
    fn ensure_schema(&mut self) -> Result<(), StoreError>;

    /// Append one reading. The backend assigns the row id.
    fn insert_reading(&mut self, reading: &Reading) -> Result<(), StoreError>;

    /// Every persisted reading, in primary-key (insertion) order.
    fn load_all(&mut self) -> Result<Vec<Reading>, StoreError>;

    /// Drop the readings table if present and recreate it empty.
    fn reset(&mut self) -> Result<(), StoreError>;
}


/// SQLite-backed implementation of [`Backend`].
pub struct SqliteBackend {
    conn: Connection,
}


impl SqliteBackend {
    /// Open (or create) the database at `path`.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| StoreError::DataDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let conn = Connection::open(path)?;
        Ok(Self { conn })
    }

    /// Open a throwaway in-memory database.
    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()?;
        Ok(Self { conn })
    }
}


impl Backend for SqliteBackend {
    fn ensure_schema(&mut self) -> Result<(), StoreError> {
        self.conn.execute(
            &format!(
                "CREATE TABLE IF NOT EXISTS {TABLE_NAME} (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    date_tested TEXT NOT NULL,
                    time_tested TEXT NOT NULL,
                    amount INTEGER NOT NULL
                )"
            ),
            [],
        )?;
        Ok(())
    }

    fn insert_reading(&mut self, reading: &Reading) -> Result<(), StoreError> {
        self.conn.execute(
            &format!(
                "INSERT INTO {TABLE_NAME} (date_tested, time_tested, amount)
                 VALUES (?1, ?2, ?3)"
            ),
            params![reading.date_tested, reading.time_tested, reading.amount],
        )?;
        Ok(())
    }

    fn load_all(&mut self) -> Result<Vec<Reading>, StoreError> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT date_tested, time_tested, amount FROM {TABLE_NAME} ORDER BY id"
        ))?;

        let readings = stmt
            .query_map([], |row| {
                Ok(Reading {
                    date_tested: row.get(0)?,
                    time_tested: row.get(1)?,
                    amount: row.get(2)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(readings)
    }

    fn reset(&mut self) -> Result<(), StoreError> {
        self.conn
            .execute(&format!("DROP TABLE IF EXISTS {TABLE_NAME}"), [])?;
        self.ensure_schema()
    }
}
