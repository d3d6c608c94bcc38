//! Viewport camera for room scene navigation.
//!
//! Provides free-flying camera controls with ground-plane intersection,
//! smooth interpolation, and keyboard/mouse input handling.

/// Viewport camera resource and controller system for scene navigation.
pub mod viewport_camera;
