//! Rendering and export seams.
//!
//! # Responsibility
//! - Define the collaborator interface the core calls to export a
//!   timetable; actual image rendering lives outside this crate.
//! - Ship a deterministic plain-text renderer for CLI output and tests.
//!
//! # Invariants
//! - Exporters either return the complete payload or an error; the core
//!   never hands out partial output.

use crate::model::timetable::TimetableGrid;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod text;

pub use text::{TextExporter, TextRenderer};

/// Failure in the external rendering path.
#[derive(Debug)]
pub struct ExportError {
    pub message: String,
}

impl ExportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Display for ExportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "timetable export failed: {}", self.message)
    }
}

impl Error for ExportError {}

/// Injected capability that turns the current grid into exportable bytes.
///
/// The shipped implementation renders plain text; a UI host substitutes an
/// image renderer behind the same contract.
pub trait TimetableExporter {
    fn export(&self, grid: &TimetableGrid) -> Result<Vec<u8>, ExportError>;
}
