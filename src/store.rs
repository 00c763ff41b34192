//! Score persistence.
//!
//! One sqlite table, `scores (name TEXT, score INTEGER)`, created on open.
//! Rows are append-only: one insert per completed battle, never updated or
//! deleted. Reads are top-N by score descending; ties come back in the
//! store's natural retrieval order.

use std::path::Path;

use rusqlite::{Connection, params};

use crate::error::GameResult;

/// One persisted (name, score) row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreRecord {
    /// Player name as entered at the score prompt.
    pub name: String,
    /// Session points at the time the battle ended.
    pub score: i32,
}

/// Append-only score store backed by sqlite.
#[derive(Debug)]
pub struct ScoreStore {
    conn: Connection,
}

impl ScoreStore {
    /// Open the store at `path`, creating the file and schema if absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or the schema
    /// cannot be created.
    pub fn open(path: &Path) -> GameResult<Self> {
        Self::from_connection(Connection::open(path)?)
    }

    /// Open an in-memory store. Used by tests.
    ///
    /// # Errors
    ///
    /// Returns an error if the schema cannot be created.
    pub fn open_in_memory() -> GameResult<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> GameResult<Self> {
        conn.execute(
            "CREATE TABLE IF NOT EXISTS scores (name TEXT, score INTEGER)",
            [],
        )?;
        Ok(Self { conn })
    }

    /// Append one score row.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn record(&self, name: &str, score: i32) -> GameResult<()> {
        self.conn.execute(
            "INSERT INTO scores (name, score) VALUES (?1, ?2)",
            params![name, score],
        )?;
        Ok(())
    }

    /// Up to `limit` scores, highest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn top(&self, limit: u32) -> GameResult<Vec<ScoreRecord>> {
        let mut stmt = self
            .conn
            .prepare("SELECT name, score FROM scores ORDER BY score DESC LIMIT ?1")?;
        let rows = stmt.query_map([limit], |row| {
            Ok(ScoreRecord {
                name: row.get(0)?,
                score: row.get(1)?,
            })
        })?;
        let mut records = Vec::new();
        for row in rows {
            records.push(row?);
        }
        Ok(records)
    }
}
