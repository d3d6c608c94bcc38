//! Layout loading and initialisation systems.
//!
//! Runs the loading stage of the app: fetch the layout JSON, seed the
//! room store from it, and frame the camera before the planner becomes
//! interactive.

/// Layout JSON loading, store seeding and camera framing.
pub mod layout_loader;

/// Loading progress tracking resource for state transitions.
pub mod progress;
