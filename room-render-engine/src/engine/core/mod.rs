//! Core application setup and state management.
//!
//! Handles application lifecycle, window configuration, state transitions,
//! and plugin initialisation.

/// Application setup and plugin configuration for the Bevy engine.
///
/// Creates the main app with asset loading, the room store, interaction
/// tools and the render scene wired into one schedule.
pub mod app_setup;

/// Application state machine and the loading transition.
pub mod app_state;

/// Primary window configuration.
pub mod window_config;
