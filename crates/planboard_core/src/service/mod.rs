//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate store mutations, undo history and persistence into the
//!   planner's user-facing actions.
//! - Keep UI/FFI layers decoupled from storage details.

pub mod planner_service;
