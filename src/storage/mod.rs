#![allow(dead_code)]
//! Persistent match history using SQLite (rusqlite)
//!
//! This module provides:
//! - OS-standard data directory location (via `directories` crate)
//! - SQLite database with schema versioning
//! - An append-only record of finished matches

use directories::ProjectDirs;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

/// Current schema version. Bump this when making schema changes.
/// Version history:
/// - v1: meta and matches tables
const SCHEMA_VERSION: u32 = 1;

/// Errors that can occur during storage operations.
#[derive(Debug)]
pub enum StorageError {
    /// Database error from SQLite
    Database(rusqlite::Error),
    /// Could not determine data directory
    NoDataDirectory,
    /// Failed to create data directory
    CreateDirFailed(std::io::Error),
    /// Schema version mismatch (future version)
    FutureSchemaVersion { found: u32, supported: u32 },
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::Database(e) => write!(f, "database error: {}", e),
            StorageError::NoDataDirectory => write!(f, "could not determine data directory"),
            StorageError::CreateDirFailed(e) => write!(f, "failed to create data directory: {}", e),
            StorageError::FutureSchemaVersion { found, supported } => {
                write!(
                    f,
                    "database schema version {} is newer than supported version {}",
                    found, supported
                )
            }
        }
    }
}

impl std::error::Error for StorageError {}

impl From<rusqlite::Error> for StorageError {
    fn from(e: rusqlite::Error) -> Self {
        StorageError::Database(e)
    }
}

/// Who won a finished match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    HumanWin,
    OpponentWin,
    Draw,
}

impl MatchOutcome {
    pub fn from_scores(human_score: u32, opponent_score: u32) -> Self {
        match human_score.cmp(&opponent_score) {
            std::cmp::Ordering::Greater => MatchOutcome::HumanWin,
            std::cmp::Ordering::Less => MatchOutcome::OpponentWin,
            std::cmp::Ordering::Equal => MatchOutcome::Draw,
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            MatchOutcome::HumanWin => "human",
            MatchOutcome::OpponentWin => "opponent",
            MatchOutcome::Draw => "draw",
        }
    }
}

/// A finished match, ready to be recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchRecord {
    pub human_score: u32,
    pub opponent_score: u32,
    pub turns: u32,
    pub outcome: MatchOutcome,
}

impl MatchRecord {
    pub fn new(human_score: u32, opponent_score: u32, turns: u32) -> Self {
        Self {
            human_score,
            opponent_score,
            turns,
            outcome: MatchOutcome::from_scores(human_score, opponent_score),
        }
    }
}

/// Handle on the match-history database.
pub struct Storage {
    conn: Connection,
}

impl Storage {
    /// Open or create the database under the OS data directory.
    ///
    /// - Linux: `$XDG_DATA_HOME/tilecross/` or `~/.local/share/tilecross/`
    /// - macOS: `~/Library/Application Support/tilecross/`
    pub fn open() -> Result<Self, StorageError> {
        let data_dir = Self::data_dir()?;
        std::fs::create_dir_all(&data_dir).map_err(StorageError::CreateDirFailed)?;
        let conn = Connection::open(data_dir.join("tilecross.db"))?;
        Self::from_connection(conn)
    }

    /// Open an in-memory database (for testing).
    #[cfg(test)]
    pub fn open_in_memory() -> Result<Self, StorageError> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self, StorageError> {
        let storage = Storage { conn };
        storage.initialize_schema()?;
        Ok(storage)
    }

    fn data_dir() -> Result<PathBuf, StorageError> {
        ProjectDirs::from("", "", "tilecross")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .ok_or(StorageError::NoDataDirectory)
    }

    fn initialize_schema(&self) -> Result<(), StorageError> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS meta (
                 key TEXT PRIMARY KEY,
                 value INTEGER NOT NULL
             );
             CREATE TABLE IF NOT EXISTS matches (
                 id INTEGER PRIMARY KEY AUTOINCREMENT,
                 played_at INTEGER NOT NULL,
                 human_score INTEGER NOT NULL,
                 opponent_score INTEGER NOT NULL,
                 turns INTEGER NOT NULL,
                 outcome TEXT NOT NULL
             );",
        )?;

        let version: Option<u32> = self
            .conn
            .query_row(
                "SELECT value FROM meta WHERE key = 'schema_version'",
                [],
                |row| row.get(0),
            )
            .optional()?;

        match version {
            None => {
                self.conn.execute(
                    "INSERT INTO meta (key, value) VALUES ('schema_version', ?1)",
                    params![SCHEMA_VERSION],
                )?;
                Ok(())
            }
            Some(found) if found > SCHEMA_VERSION => Err(StorageError::FutureSchemaVersion {
                found,
                supported: SCHEMA_VERSION,
            }),
            Some(_) => Ok(()),
        }
    }

    /// Append a finished match to the history.
    pub fn record_match(&self, record: &MatchRecord) -> Result<(), StorageError> {
        let played_at = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs() as i64)
            .unwrap_or(0);
        self.conn.execute(
            "INSERT INTO matches (played_at, human_score, opponent_score, turns, outcome)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                played_at,
                record.human_score,
                record.opponent_score,
                record.turns,
                record.outcome.as_str()
            ],
        )?;
        Ok(())
    }

    /// Total number of recorded matches.
    pub fn match_count(&self) -> Result<u32, StorageError> {
        let count = self
            .conn
            .query_row("SELECT COUNT(*) FROM matches", [], |row| row.get(0))?;
        Ok(count)
    }

    /// Number of recorded matches with the given outcome.
    pub fn outcome_count(&self, outcome: MatchOutcome) -> Result<u32, StorageError> {
        let count = self.conn.query_row(
            "SELECT COUNT(*) FROM matches WHERE outcome = ?1",
            params![outcome.as_str()],
            |row| row.get(0),
        )?;
        Ok(count)
    }

    /// Highest score the player has recorded; None before the first match.
    pub fn best_human_score(&self) -> Result<Option<u32>, StorageError> {
        let best = self
            .conn
            .query_row("SELECT MAX(human_score) FROM matches", [], |row| row.get(0))?;
        Ok(best)
    }
}
