//! Weekly timetable grid keyed by day and hour slot.
//!
//! # Responsibility
//! - Hold the day-by-hour subject labels behind validated mutation APIs.
//! - Provide the deep-copy snapshot used by the undo history.
//!
//! # Invariants
//! - All seven `Day` keys exist in the outer map at all times.
//! - Inner maps are sparse: an absent slot key means an empty cell.
//! - Cell writes are last-write-wins; there is no merge or append.

use crate::model::day::Day;
use crate::model::hours;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Required input that failed validation on an add-timetable-entry action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimetableField {
    Day,
    TimeSlot,
    Subject,
}

impl TimetableField {
    fn label(self) -> &'static str {
        match self {
            TimetableField::Day => "day",
            TimetableField::TimeSlot => "time slot",
            TimetableField::Subject => "subject",
        }
    }
}

/// Validation failure for a timetable cell write.
///
/// Carries every offending field so the caller can list them to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimetableValidationError {
    pub fields: Vec<TimetableField>,
}

impl Display for TimetableValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let names = self
            .fields
            .iter()
            .map(|field| field.label())
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "missing or invalid required field(s): {names}")
    }
}

impl Error for TimetableValidationError {}

/// Day-by-hour grid of subject labels.
///
/// Serialized as the persisted `timetableData` shape: an object keyed by the
/// seven day names, each value an object keyed by `"HH:00"` slot keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimetableGrid {
    cells: BTreeMap<Day, BTreeMap<String, String>>,
}

impl Default for TimetableGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl TimetableGrid {
    /// Creates an empty grid with all seven day keys present.
    pub fn new() -> Self {
        let mut grid = Self {
            cells: BTreeMap::new(),
        };
        grid.ensure_days();
        grid
    }

    /// Inserts any missing day keys. Idempotent; run after hydration.
    pub fn ensure_days(&mut self) {
        for day in Day::ALL {
            self.cells.entry(day).or_default();
        }
    }

    /// Writes one cell after validating the slot key and subject.
    ///
    /// # Errors
    /// - `TimeSlot` when `slot_key` is not one of the 24 canonical keys.
    /// - `Subject` when `subject` is empty or whitespace.
    /// - Any failure leaves the grid untouched.
    pub fn set_cell(
        &mut self,
        day: Day,
        slot_key: &str,
        subject: &str,
    ) -> Result<(), TimetableValidationError> {
        let mut fields = Vec::new();
        if !hours::is_slot_key(slot_key) {
            fields.push(TimetableField::TimeSlot);
        }
        if subject.trim().is_empty() {
            fields.push(TimetableField::Subject);
        }
        if !fields.is_empty() {
            return Err(TimetableValidationError { fields });
        }

        self.cells
            .entry(day)
            .or_default()
            .insert(slot_key.to_string(), subject.trim().to_string());
        Ok(())
    }

    /// Replaces the whole grid with seven empty day maps.
    ///
    /// Recoverable only through a snapshot taken before the call.
    pub fn clear_all(&mut self) {
        self.cells = BTreeMap::new();
        self.ensure_days();
    }

    /// Subject at the cell, or `""` when unset.
    pub fn read_cell(&self, day: Day, slot_key: &str) -> &str {
        self.cells
            .get(&day)
            .and_then(|slots| slots.get(slot_key))
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Independent deep copy for the undo history.
    ///
    /// All keys and values are owned, so a clone shares no state with the
    /// live grid.
    pub fn snapshot(&self) -> TimetableGrid {
        self.clone()
    }

    /// Number of non-empty cells across all days.
    pub fn occupied_cells(&self) -> usize {
        self.cells.values().map(BTreeMap::len).sum()
    }
}
