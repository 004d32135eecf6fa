//! Planner use-case service: the top-level application context.
//!
//! # Responsibility
//! - Own the live roadmap, timetable and undo history for one process.
//! - Apply the action protocol: validate, snapshot, mutate, save.
//!
//! # Invariants
//! - Every mutating action fully applies (including its save) or fully
//!   aborts; a failed save rolls the in-memory state back.
//! - Every non-undo timetable mutation records the pre-mutation grid in
//!   the undo history. Roadmap mutations record nothing.
//! - Undo is strictly LIFO; there is no redo.

use crate::model::day::Day;
use crate::model::hours;
use crate::model::roadmap::{RoadmapEntry, RoadmapStore, RoadmapValidationError};
use crate::model::timetable::{TimetableGrid, TimetableValidationError};
use crate::render::{ExportError, TimetableExporter};
use crate::repo::state_repo::{RepoError, StateRepository};
use crate::undo::UndoStack;
use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Error surfaced by planner actions.
#[derive(Debug)]
pub enum PlannerError {
    RoadmapValidation(RoadmapValidationError),
    TimetableValidation(TimetableValidationError),
    IndexOutOfRange { index: usize, len: usize },
    Export(ExportError),
    Repo(RepoError),
}

impl Display for PlannerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RoadmapValidation(err) => write!(f, "{err}"),
            Self::TimetableValidation(err) => write!(f, "{err}"),
            Self::IndexOutOfRange { index, len } => {
                write!(f, "roadmap index {index} out of range for {len} entries")
            }
            Self::Export(err) => write!(f, "{err}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for PlannerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::RoadmapValidation(err) => Some(err),
            Self::TimetableValidation(err) => Some(err),
            Self::IndexOutOfRange { .. } => None,
            Self::Export(err) => Some(err),
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<RoadmapValidationError> for PlannerError {
    fn from(value: RoadmapValidationError) -> Self {
        Self::RoadmapValidation(value)
    }
}

impl From<TimetableValidationError> for PlannerError {
    fn from(value: TimetableValidationError) -> Self {
        Self::TimetableValidation(value)
    }
}

impl From<ExportError> for PlannerError {
    fn from(value: ExportError) -> Self {
        Self::Export(value)
    }
}

impl From<RepoError> for PlannerError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Top-level application context owning all live planner state.
///
/// Boundaries (CLI, FFI) hold exactly one of these per process and route
/// every user action through it.
pub struct PlannerService<R: StateRepository> {
    repo: R,
    roadmap: RoadmapStore,
    timetable: TimetableGrid,
    undo: UndoStack,
}

impl<R: StateRepository> PlannerService<R> {
    /// Hydrates both stores from persistence.
    ///
    /// Absent or corrupt records come back as empty defaults from the
    /// repository; only storage-level failures abort startup.
    pub fn load(repo: R) -> Result<Self, PlannerError> {
        let roadmap = RoadmapStore::from_entries(repo.load_roadmap()?);
        let timetable = repo.load_timetable()?;
        Ok(Self {
            repo,
            roadmap,
            timetable,
            undo: UndoStack::new(),
        })
    }

    /// Appends a roadmap entry and saves the roadmap record.
    ///
    /// # Errors
    /// - Validation failure aborts with no mutation and no save.
    pub fn add_roadmap_entry(
        &mut self,
        title: &str,
        desc: &str,
        date: &str,
    ) -> Result<(), PlannerError> {
        let entry = RoadmapEntry::new(title.trim(), desc.trim(), date.trim());
        let before = self.roadmap.clone();
        self.roadmap.append(entry)?;
        if let Err(err) = self.repo.save_roadmap(self.roadmap.list()) {
            self.roadmap = before;
            return Err(err.into());
        }
        Ok(())
    }

    /// Removes the roadmap entry at `index` and saves the roadmap record.
    pub fn remove_roadmap_entry(&mut self, index: usize) -> Result<RoadmapEntry, PlannerError> {
        let before = self.roadmap.clone();
        let removed = self
            .roadmap
            .remove_at(index)
            .ok_or(PlannerError::IndexOutOfRange {
                index,
                len: before.len(),
            })?;
        if let Err(err) = self.repo.save_roadmap(self.roadmap.list()) {
            self.roadmap = before;
            return Err(err.into());
        }
        Ok(removed)
    }

    /// Writes one timetable cell, recording the pre-mutation grid for undo.
    ///
    /// The raw `time_slot` may carry minutes (`"09:30"`); it is truncated
    /// to its hour slot before validation.
    ///
    /// # Errors
    /// - Validation failure aborts with no mutation, no save and no undo
    ///   history entry.
    pub fn add_timetable_entry(
        &mut self,
        day: Day,
        time_slot: &str,
        subject: &str,
    ) -> Result<(), PlannerError> {
        let slot_key = hours::normalize_slot_key(time_slot.trim());
        let before = self.timetable.snapshot();
        self.timetable.set_cell(day, &slot_key, subject)?;
        if let Err(err) = self.repo.save_timetable(&self.timetable) {
            self.timetable = before;
            return Err(err.into());
        }
        self.undo.push_snapshot(&before);
        Ok(())
    }

    /// Clears every timetable cell, recording the pre-mutation grid for
    /// undo. Confirmation is the boundary's responsibility.
    pub fn clear_timetable(&mut self) -> Result<(), PlannerError> {
        let before = self.timetable.snapshot();
        self.timetable.clear_all();
        if let Err(err) = self.repo.save_timetable(&self.timetable) {
            self.timetable = before;
            return Err(err.into());
        }
        self.undo.push_snapshot(&before);
        Ok(())
    }

    /// Restores the most recent undo snapshot, if any, and saves it.
    ///
    /// Returns `Ok(false)` when the history is empty; callers use
    /// [`Self::can_undo`] to disable their undo control instead of
    /// treating that as an error.
    pub fn undo_last_timetable_change(&mut self) -> Result<bool, PlannerError> {
        let Some(restored) = self.undo.pop_snapshot() else {
            return Ok(false);
        };
        let current = std::mem::replace(&mut self.timetable, restored);
        if let Err(err) = self.repo.save_timetable(&self.timetable) {
            let restored = std::mem::replace(&mut self.timetable, current);
            self.undo.push_snapshot(&restored);
            return Err(err.into());
        }
        Ok(true)
    }

    /// Runs the injected exporter against the current grid.
    ///
    /// Failures are logged and surfaced; no partial payload is returned.
    pub fn export_timetable(
        &self,
        exporter: &dyn TimetableExporter,
    ) -> Result<Vec<u8>, PlannerError> {
        match exporter.export(&self.timetable) {
            Ok(bytes) => {
                info!(
                    "event=timetable_export module=service status=ok bytes={}",
                    bytes.len()
                );
                Ok(bytes)
            }
            Err(err) => {
                error!("event=timetable_export module=service status=error error={err}");
                Err(err.into())
            }
        }
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.undo.len()
    }

    pub fn roadmap(&self) -> &RoadmapStore {
        &self.roadmap
    }

    pub fn timetable(&self) -> &TimetableGrid {
        &self.timetable
    }

    /// The owned repository, for boundaries and tests that need to read
    /// persisted state back.
    pub fn repository(&self) -> &R {
        &self.repo
    }
}
