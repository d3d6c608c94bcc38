//! Interaction tools for the room planner.
//!
//! Tools sit between raw input and the room store. Scene picking turns
//! cursor clicks into object selections, the control panels turn button
//! presses into control actions, and the move controller turns cursor
//! travel into position updates. None of them mutate [`crate::store`]
//! state directly; everything crosses as an event and is applied by the
//! store systems, which keeps input handling and room mutation apart.
//!
//! ```text
//! cursor click ──► object_selection ──► ObjectClickEvent ─────┐
//! panel press ──► control_panel ─────► ControlActionEvent ────┼──► store
//! cursor drag ──► move_controller ───► ObjectMoveEvent ───────┘
//! ```

/// Contextual control panels and the texture picker.
pub mod control_panel;
/// Ground-plane move mode for placed objects.
pub mod move_controller;
/// Ray-cast scene picking and hover cursor feedback.
pub mod object_selection;
