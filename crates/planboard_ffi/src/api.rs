//! FFI use-case API for UI-facing calls.
//!
//! # Responsibility
//! - Expose the planner's user actions as stable, envelope-returning
//!   functions.
//! - Hold the single process-wide planner context behind a lock.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Validation failures return `ok=false` with a message naming the
//!   missing fields; state is unchanged.
//! - Clearing the timetable without `confirmed=true` is a silent no-op.

use log::debug;
use planboard_core::db::open_db;
use planboard_core::model::hours;
use planboard_core::model::timetable::{TimetableField, TimetableValidationError};
use planboard_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    Day, PlannerError, PlannerService, SqliteStateRepository, TextExporter,
};
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};

const DB_FILE_NAME: &str = "planboard.sqlite3";
static DB_PATH: OnceLock<PathBuf> = OnceLock::new();
static SESSION: OnceLock<Mutex<PlannerService<SqliteStateRepository>>> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Sync call; may perform small file-system setup work.
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on
///   failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Generic action response envelope for planner commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannerActionResponse {
    /// Whether the operation succeeded.
    pub ok: bool,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl PlannerActionResponse {
    fn success(message: impl Into<String>) -> Self {
        Self {
            ok: true,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: message.into(),
        }
    }
}

/// One roadmap entry as shown by the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoadmapItem {
    pub title: String,
    pub desc: String,
    /// Calendar date as `YYYY-MM-DD`.
    pub date: String,
}

/// Roadmap listing envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoadmapListResponse {
    /// Entries in insertion order (empty on failure).
    pub items: Vec<RoadmapItem>,
    /// Human-readable response message for diagnostics.
    pub message: String,
}

/// One rendered timetable row: a day plus its 24 ordered cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimetableRow {
    pub day: String,
    /// Subjects in canonical hour display order; empty string = unset.
    pub cells: Vec<String>,
}

/// Timetable view envelope: column labels plus one row per day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimetableViewResponse {
    /// The 24 hour labels in display order.
    pub header: Vec<String>,
    /// Seven rows, Monday first (empty on failure).
    pub rows: Vec<TimetableRow>,
    /// Human-readable response message for diagnostics.
    pub message: String,
}

/// Export envelope; `bytes` is empty unless `ok` is true.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimetableExportResponse {
    pub ok: bool,
    pub message: String,
    pub bytes: Vec<u8>,
}

/// Appends a dated goal to the roadmap.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics.
/// - Missing fields reject the whole action with a message naming them.
#[flutter_rust_bridge::frb(sync)]
pub fn roadmap_add(title: String, desc: String, date: String) -> PlannerActionResponse {
    match with_session(|service| service.add_roadmap_entry(&title, &desc, &date)) {
        Ok(()) => PlannerActionResponse::success("Roadmap entry added."),
        Err(err) => rejected("roadmap_add", err),
    }
}

/// Removes the roadmap entry at `index` (0-based display position).
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn roadmap_delete(index: u32) -> PlannerActionResponse {
    match with_session(|service| service.remove_roadmap_entry(index as usize).map(|_| ())) {
        Ok(()) => PlannerActionResponse::success("Roadmap entry removed."),
        Err(err) => rejected("roadmap_delete", err),
    }
}

/// Lists roadmap entries in insertion order.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics; failure yields an empty list plus a message.
#[flutter_rust_bridge::frb(sync)]
pub fn roadmap_list() -> RoadmapListResponse {
    match with_session(|service| {
        Ok(service
            .roadmap()
            .list()
            .iter()
            .map(|entry| RoadmapItem {
                title: entry.title.clone(),
                desc: entry.desc.clone(),
                date: entry.date.clone(),
            })
            .collect::<Vec<_>>())
    }) {
        Ok(items) => {
            let message = format!("{} entries.", items.len());
            RoadmapListResponse { items, message }
        }
        Err(message) => RoadmapListResponse {
            items: Vec::new(),
            message,
        },
    }
}

/// Writes one timetable cell.
///
/// `time_slot` accepts `HH:MM`; minutes are truncated to the hour slot.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics.
/// - Missing fields reject the whole action with a message naming them.
#[flutter_rust_bridge::frb(sync)]
pub fn timetable_add(day: String, time_slot: String, subject: String) -> PlannerActionResponse {
    let Some(day) = Day::parse(day.trim()) else {
        let err = PlannerError::TimetableValidation(TimetableValidationError {
            fields: vec![TimetableField::Day],
        });
        return rejected("timetable_add", err.to_string());
    };
    match with_session(|service| service.add_timetable_entry(day, &time_slot, &subject)) {
        Ok(()) => PlannerActionResponse::success("Timetable entry added."),
        Err(err) => rejected("timetable_add", err),
    }
}

/// Restores the timetable state before the most recent change.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics; empty history returns `ok=false` without mutation.
#[flutter_rust_bridge::frb(sync)]
pub fn timetable_undo() -> PlannerActionResponse {
    match with_session(|service| service.undo_last_timetable_change()) {
        Ok(true) => PlannerActionResponse::success("Undid last timetable change."),
        Ok(false) => PlannerActionResponse::failure("Nothing to undo."),
        Err(err) => rejected("timetable_undo", err),
    }
}

/// Whether any undo history exists; the UI disables its undo control on
/// `false`.
///
/// # FFI contract
/// - Sync call. Never panics; failure reads as `false`.
#[flutter_rust_bridge::frb(sync)]
pub fn timetable_can_undo() -> bool {
    with_session(|service| Ok(service.can_undo())).unwrap_or(false)
}

/// Clears the whole timetable after explicit confirmation.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics.
/// - `confirmed=false` aborts silently with no mutation.
#[flutter_rust_bridge::frb(sync)]
pub fn timetable_clear(confirmed: bool) -> PlannerActionResponse {
    if !confirmed {
        return PlannerActionResponse::failure("Clear aborted: not confirmed.");
    }
    match with_session(|service| service.clear_timetable()) {
        Ok(()) => PlannerActionResponse::success("Timetable cleared."),
        Err(err) => rejected("timetable_clear", err),
    }
}

/// Returns the current grid as ordered labels and day rows.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics; failure yields empty rows plus a message.
#[flutter_rust_bridge::frb(sync)]
pub fn timetable_view() -> TimetableViewResponse {
    let header = hours::ordered_slots()
        .iter()
        .map(|slot| slot.label.clone())
        .collect::<Vec<_>>();
    match with_session(|service| {
        let grid = service.timetable();
        Ok(Day::ALL
            .iter()
            .map(|&day| TimetableRow {
                day: day.as_str().to_string(),
                cells: hours::ordered_slots()
                    .iter()
                    .map(|slot| grid.read_cell(day, &slot.key).to_string())
                    .collect(),
            })
            .collect::<Vec<_>>())
    }) {
        Ok(rows) => TimetableViewResponse {
            header,
            rows,
            message: String::new(),
        },
        Err(message) => TimetableViewResponse {
            header,
            rows: Vec::new(),
            message,
        },
    }
}

/// Exports the current timetable through the shipped text exporter.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics; failure returns `ok=false` and empty bytes.
#[flutter_rust_bridge::frb(sync)]
pub fn timetable_export() -> TimetableExportResponse {
    match with_session(|service| service.export_timetable(&TextExporter::new())) {
        Ok(bytes) => TimetableExportResponse {
            ok: true,
            message: "Timetable exported.".to_string(),
            bytes,
        },
        Err(message) => TimetableExportResponse {
            ok: false,
            message,
            bytes: Vec::new(),
        },
    }
}

fn rejected(action: &str, err: impl std::fmt::Display) -> PlannerActionResponse {
    let message = format!("{action} failed: {err}");
    debug!("event=ffi_action module=ffi status=rejected action={action} error={err}");
    PlannerActionResponse::failure(message)
}

fn resolve_db_path() -> PathBuf {
    DB_PATH
        .get_or_init(|| {
            if let Ok(raw) = std::env::var("PLANBOARD_DB_PATH") {
                let trimmed = raw.trim();
                if !trimmed.is_empty() {
                    return PathBuf::from(trimmed);
                }
            }
            std::env::temp_dir().join(DB_FILE_NAME)
        })
        .clone()
}

fn with_session<T>(
    f: impl FnOnce(&mut PlannerService<SqliteStateRepository>) -> Result<T, PlannerError>,
) -> Result<T, String> {
    let mutex = match SESSION.get() {
        Some(mutex) => mutex,
        None => {
            let conn =
                open_db(resolve_db_path()).map_err(|err| format!("planner DB open failed: {err}"))?;
            let repo = SqliteStateRepository::try_new(conn)
                .map_err(|err| format!("planner repo init failed: {err}"))?;
            let service =
                PlannerService::load(repo).map_err(|err| format!("planner load failed: {err}"))?;
            SESSION.get_or_init(|| Mutex::new(service))
        }
    };
    let mut guard = mutex
        .lock()
        .map_err(|_| "planner state lock poisoned".to_string())?;
    f(&mut guard).map_err(|err| err.to_string())
}
