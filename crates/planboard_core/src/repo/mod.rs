//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the persisted-record access contract used by the service layer.
//! - Isolate SQLite and JSON-text details from business orchestration.
//!
//! # Invariants
//! - Saves overwrite the stored record unconditionally.
//! - Loads fall back to the empty default when a record is absent or its
//!   stored text no longer deserializes.

pub mod state_repo;
