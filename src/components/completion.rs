//! Optional completion capability for sequenced units.
//!
//! The *presence* of [`Completion`] on an entity is the capability: the
//! sequence systems query it with `Option<&Completion>` and only consult
//! `done` when the component exists. Units without it are considered done
//! once they deactivate themselves (see
//! [`sequence_tick_system`](crate::systems::sequence::sequence_tick_system)).

use bevy_ecs::prelude::Component;

/// Completion flag for a unit that knows when it is finished.
///
/// Gameplay systems set `done` (or call [`finish`](Completion::finish));
/// the sequence never clears it — resetting is the unit's own business.
#[derive(Component, Debug, Clone, Copy)]
pub struct Completion {
    /// Whether the unit reports itself finished.
    pub done: bool,
}

impl Completion {
    /// A unit that has not finished yet.
    pub fn pending() -> Self {
        Self { done: false }
    }

    /// A unit that is already finished.
    pub fn finished() -> Self {
        Self { done: true }
    }

    pub fn finish(&mut self) {
        self.done = true;
    }
}

impl Default for Completion {
    fn default() -> Self {
        Self::pending()
    }
}
