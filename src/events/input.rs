//! Logical input events.
//!
//! This module defines [`InputEvent`], which is triggered by
//! [`poll_input_system`](crate::systems::input::poll_input_system) for every
//! edge accumulated since the previous poll. Systems can subscribe to these
//! events to react to input without reading the
//! [`InputSnapshot`](crate::resources::inputlatch::InputSnapshot) resource.
//!
//! Edges are coalesced per tick: however many times an input went down
//! between two polls, at most one press event is emitted (and likewise for
//! releases). A press-and-release within a single tick emits both, press
//! first.

use bevy_ecs::prelude::*;

/// Event emitted when a logical input was pressed or released since the
/// previous poll.
#[derive(Event, Debug, Clone)]
pub struct InputEvent {
    /// The logical input name (as registered with the latch).
    pub input: String,
    /// Whether the input was pressed (true) or released (false).
    pub pressed: bool,
}
