//! Core domain logic for Planboard.
//! This crate is the single source of truth for planner invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod render;
pub mod repo;
pub mod service;
pub mod undo;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::day::Day;
pub use model::hours::{normalize_slot_key, ordered_slots, slot_key, slot_label, HourSlot};
pub use model::roadmap::{RoadmapEntry, RoadmapStore, RoadmapValidationError};
pub use model::timetable::{TimetableGrid, TimetableValidationError};
pub use render::{ExportError, TextExporter, TextRenderer, TimetableExporter};
pub use repo::state_repo::{
    RepoError, RepoResult, SqliteStateRepository, StateRepository, ROADMAP_KEY, TIMETABLE_KEY,
};
pub use service::planner_service::{PlannerError, PlannerService};
pub use undo::UndoStack;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
