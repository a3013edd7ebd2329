//! Chain progress events.
//!
//! [`SequenceAdvancedEvent`] is triggered each time a
//! [`Sequence`](crate::components::sequence::Sequence) steps past a completed
//! unit, and [`SequenceFinishedEvent`] once when the chain reaches its
//! terminal state.
//!
//! # Usage
//!
//! Observers can listen for these events to react to chain progress:
//!
//! ```ignore
//! fn on_finished(trigger: On<SequenceFinishedEvent>) {
//!     println!("Chain {:?} is done", trigger.event().entity);
//! }
//!
//! world.add_observer(on_finished);
//! ```

use bevy_ecs::prelude::*;

/// Event emitted when a chain steps past a completed unit.
///
/// Triggered by [`sequence_tick_system`](crate::systems::sequence::sequence_tick_system)
/// after the cursor has moved and before the next unit (if any) is activated.
#[derive(Event, Debug, Clone, Copy)]
pub struct SequenceAdvancedEvent {
    /// The entity holding the sequence.
    pub entity: Entity,
    /// Index of the unit that just completed.
    pub index: usize,
}

/// Event emitted once when a chain reaches its terminal state.
///
/// Also emitted immediately for empty chains when they start.
#[derive(Event, Debug, Clone, Copy)]
pub struct SequenceFinishedEvent {
    /// The entity holding the sequence.
    pub entity: Entity,
}
