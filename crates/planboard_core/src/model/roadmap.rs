//! Roadmap entries and their ordered store.
//!
//! # Responsibility
//! - Define the dated-goal record persisted under `roadmapData`.
//! - Enforce the append-time validation rules on required fields.
//!
//! # Invariants
//! - Entries keep insertion order; display order equals insertion order.
//! - Identity is positional. Removal shifts later entries down by one.
//! - Roadmap mutations have no undo. Only the timetable keeps history.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

static DATE_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-(\d{2})-(\d{2})$").expect("date pattern must compile"));

/// One dated goal on the roadmap.
///
/// Serialized field names match the persisted wire shape, so `desc` stays
/// abbreviated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoadmapEntry {
    pub title: String,
    pub desc: String,
    /// Calendar date as `YYYY-MM-DD`.
    pub date: String,
}

/// Required field that failed validation on an add action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoadmapField {
    Title,
    Desc,
    Date,
}

impl RoadmapField {
    fn label(self) -> &'static str {
        match self {
            RoadmapField::Title => "title",
            RoadmapField::Desc => "desc",
            RoadmapField::Date => "date",
        }
    }
}

/// Validation failure for an add-roadmap-entry action.
///
/// Carries every offending field so the caller can list them to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoadmapValidationError {
    pub fields: Vec<RoadmapField>,
}

impl Display for RoadmapValidationError {
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

impl Error for RoadmapValidationError {}

impl RoadmapEntry {
    pub fn new(
        title: impl Into<String>,
        desc: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            desc: desc.into(),
            date: date.into(),
        }
    }

    /// Checks the append-time rules: title and desc non-empty, date present
    /// in `YYYY-MM-DD` shape with an in-range month and day.
    ///
    /// # Errors
    /// - Returns every failed field in declaration order.
    pub fn validate(&self) -> Result<(), RoadmapValidationError> {
        let mut fields = Vec::new();
        if self.title.trim().is_empty() {
            fields.push(RoadmapField::Title);
        }
        if self.desc.trim().is_empty() {
            fields.push(RoadmapField::Desc);
        }
        if !date_is_valid(&self.date) {
            fields.push(RoadmapField::Date);
        }
        if fields.is_empty() {
            Ok(())
        } else {
            Err(RoadmapValidationError { fields })
        }
    }
}

fn date_is_valid(date: &str) -> bool {
    let Some(captures) = DATE_SHAPE.captures(date) else {
        return false;
    };
    let month: u8 = captures[1].parse().unwrap_or(0);
    let day: u8 = captures[2].parse().unwrap_or(0);
    (1..=12).contains(&month) && (1..=31).contains(&day)
}

/// Ordered sequence of roadmap entries, insertion order preserved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoadmapStore {
    entries: Vec<RoadmapEntry>,
}

impl RoadmapStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a store from persisted entries, as loaded.
    ///
    /// Hydration does not re-validate: whatever was saved is what the user
    /// sees again after restart.
    pub fn from_entries(entries: Vec<RoadmapEntry>) -> Self {
        Self { entries }
    }

    /// Appends a validated entry.
    ///
    /// # Errors
    /// - Validation failure leaves the store untouched.
    pub fn append(&mut self, entry: RoadmapEntry) -> Result<(), RoadmapValidationError> {
        entry.validate()?;
        self.entries.push(entry);
        Ok(())
    }

    /// Removes the entry at `index`, shifting later entries down.
    ///
    /// Returns `None` without mutating when `index` is out of range.
    pub fn remove_at(&mut self, index: usize) -> Option<RoadmapEntry> {
        if index < self.entries.len() {
            Some(self.entries.remove(index))
        } else {
            None
        }
    }

    /// Entries in insertion order.
    pub fn list(&self) -> &[RoadmapEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
