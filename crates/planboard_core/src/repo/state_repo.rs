//! Planner state repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Persist the two planner records as UTF-8 JSON text in `planner_state`.
//! - Keep SQL and serialization details inside the persistence boundary.
//!
//! # Invariants
//! - The stored shapes are the external wire formats: `roadmapData` is an
//!   array of entries, `timetableData` an object keyed by day name.
//! - While the process is live the in-memory stores are the source of
//!   truth; the stored rows only mirror the last successful save.

use crate::db::{migrations::latest_version, DbError};
use crate::model::roadmap::RoadmapEntry;
use crate::model::timetable::TimetableGrid;
use log::{debug, warn};
use rusqlite::{params, Connection, OptionalExtension};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Storage key for the persisted roadmap record.
pub const ROADMAP_KEY: &str = "roadmapData";
/// Storage key for the persisted timetable record.
pub const TIMETABLE_KEY: &str = "timetableData";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for planner state persistence.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    Serialize(serde_json::Error),
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Serialize(err) => write!(f, "failed to serialize planner record: {err}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection schema version {actual_version} does not match expected {expected_version}"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "required table `{table}` is missing")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Serialize(err) => Some(err),
            Self::UninitializedConnection { .. } => None,
            Self::MissingRequiredTable(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

impl From<serde_json::Error> for RepoError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialize(value)
    }
}

/// Persistence contract for the two planner records.
pub trait StateRepository {
    fn save_roadmap(&self, entries: &[RoadmapEntry]) -> RepoResult<()>;
    fn load_roadmap(&self) -> RepoResult<Vec<RoadmapEntry>>;
    fn save_timetable(&self, grid: &TimetableGrid) -> RepoResult<()>;
    fn load_timetable(&self) -> RepoResult<TimetableGrid>;
}

/// SQLite-backed planner state repository. Owns its connection.
#[derive(Debug)]
pub struct SqliteStateRepository {
    conn: Connection,
}

impl SqliteStateRepository {
    /// Wraps a bootstrapped connection after checking it is usable.
    ///
    /// # Errors
    /// - `UninitializedConnection` when `PRAGMA user_version` does not match
    ///   the latest migration (i.e. `open_db` was bypassed).
    /// - `MissingRequiredTable` when `planner_state` is absent.
    pub fn try_new(conn: Connection) -> RepoResult<Self> {
        let actual_version: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
        let expected_version = latest_version();
        if actual_version != expected_version {
            return Err(RepoError::UninitializedConnection {
                expected_version,
                actual_version,
            });
        }

        let table_exists: i64 = conn.query_row(
            "SELECT EXISTS(
                SELECT 1 FROM sqlite_master
                WHERE type = 'table' AND name = 'planner_state'
            );",
            [],
            |row| row.get(0),
        )?;
        if table_exists != 1 {
            return Err(RepoError::MissingRequiredTable("planner_state"));
        }

        Ok(Self { conn })
    }

    /// Read access for callers that need raw queries (tests, diagnostics).
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    fn write_record(&self, key: &str, value: &str) -> RepoResult<()> {
        self.conn.execute(
            "INSERT INTO planner_state (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![key, value],
        )?;
        debug!("event=state_save module=repo status=ok key={key} bytes={}", value.len());
        Ok(())
    }

    fn read_record(&self, key: &str) -> RepoResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM planner_state WHERE key = ?1;",
                params![key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }
}

impl StateRepository for SqliteStateRepository {
    fn save_roadmap(&self, entries: &[RoadmapEntry]) -> RepoResult<()> {
        let text = serde_json::to_string(entries)?;
        self.write_record(ROADMAP_KEY, &text)
    }

    fn load_roadmap(&self) -> RepoResult<Vec<RoadmapEntry>> {
        let Some(text) = self.read_record(ROADMAP_KEY)? else {
            return Ok(Vec::new());
        };
        match serde_json::from_str(&text) {
            Ok(entries) => Ok(entries),
            Err(err) => {
                warn!(
                    "event=state_load module=repo status=fallback key={ROADMAP_KEY} error={err}"
                );
                Ok(Vec::new())
            }
        }
    }

    fn save_timetable(&self, grid: &TimetableGrid) -> RepoResult<()> {
        let text = serde_json::to_string(grid)?;
        self.write_record(TIMETABLE_KEY, &text)
    }

    fn load_timetable(&self) -> RepoResult<TimetableGrid> {
        let Some(text) = self.read_record(TIMETABLE_KEY)? else {
            return Ok(TimetableGrid::new());
        };
        match serde_json::from_str::<TimetableGrid>(&text) {
            Ok(mut grid) => {
                // Older saves may predate a day key; the invariant is
                // restored here rather than trusted from storage.
                grid.ensure_days();
                Ok(grid)
            }
            Err(err) => {
                warn!(
                    "event=state_load module=repo status=fallback key={TIMETABLE_KEY} error={err}"
                );
                Ok(TimetableGrid::new())
            }
        }
    }
}
