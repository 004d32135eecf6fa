//! Domain model for the roadmap and the weekly timetable.
//!
//! # Responsibility
//! - Define the canonical data structures mutated by planner actions.
//! - Keep validation rules next to the data they protect.
//!
//! # Invariants
//! - The timetable grid always contains all seven `Day` keys.
//! - Roadmap entries are identified by position, not by stable IDs.

pub mod day;
pub mod hours;
pub mod roadmap;
pub mod timetable;
