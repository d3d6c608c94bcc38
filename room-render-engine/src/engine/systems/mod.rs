//! Runtime diagnostics systems.

/// FPS overlay updates for performance monitoring.
pub mod fps_tracking;
