//! Ordered activation chain component.
//!
//! A [`Sequence`] holds a fixed, ordered list of unit entities and a cursor.
//! Units are switched on one at a time: the cursor's unit runs until it
//! reports completion, then the next unit is activated. The list is captured
//! at construction and never grows or shrinks afterwards.
//!
//! # Architecture
//!
//! - **Units are entities** – anything carrying an
//!   [`Activation`](crate::components::activation::Activation) component can
//!   be chained, regardless of what else it is
//! - **Completion is a capability** – units with a
//!   [`Completion`](crate::components::completion::Completion) component are
//!   asked directly; units without one count as done when they switch
//!   themselves off
//! - **One step per tick** – the cursor advances at most once per run of
//!   [`sequence_tick_system`](crate::systems::sequence::sequence_tick_system),
//!   even if the freshly activated unit is already done
//!
//! # Example
//!
//! ```ignore
//! let door = world.spawn((Activation::inactive(), Completion::pending())).id();
//! let lift = world.spawn((Activation::inactive(),)).id();
//! world.spawn((Sequence::new(vec![door, lift]),));
//! ```
//!
//! # Related
//!
//! - [`crate::systems::sequence`] – systems that start and advance chains
//! - [`crate::events::sequence::SequenceAdvancedEvent`] – emitted per step
//! - [`crate::events::sequence::SequenceFinishedEvent`] – emitted at the end

use bevy_ecs::prelude::*;

/// Ordered chain of unit entities activated one at a time.
///
/// The cursor lives in `[0, len]`; `cursor == len` is the terminal state in
/// which every unit has completed and the chain does nothing further.
#[derive(Component, Debug, Clone)]
pub struct Sequence {
    /// The units, in activation order. Fixed after construction.
    units: Vec<Entity>,
    /// Index of the unit currently mid-flight. Equal to `units.len()` once
    /// the whole chain has completed.
    cursor: usize,
}

impl Sequence {
    /// Capture an ordered unit list with the cursor at the start.
    ///
    /// An empty list is legal and yields a chain that is terminal from the
    /// moment it starts.
    pub fn new(units: Vec<Entity>) -> Self {
        Self { units, cursor: 0 }
    }

    /// The units in activation order.
    pub fn units(&self) -> &[Entity] {
        &self.units
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Index of the unit currently mid-flight.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The unit the chain is currently waiting on, or `None` once terminal.
    pub fn current(&self) -> Option<Entity> {
        self.units.get(self.cursor).copied()
    }

    /// Whether every unit has completed.
    pub fn is_finished(&self) -> bool {
        self.cursor >= self.units.len()
    }

    /// Move the cursor one step forward, returning the index of the unit
    /// that just completed. Must not be called in the terminal state.
    pub(crate) fn advance(&mut self) -> usize {
        debug_assert!(self.cursor < self.units.len());
        let completed = self.cursor;
        self.cursor += 1;
        completed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_sequence_is_finished() {
        let seq = Sequence::new(Vec::new());
        assert!(seq.is_finished());
        assert!(seq.is_empty());
        assert_eq!(seq.current(), None);
    }

    #[test]
    fn test_new_sequence_points_at_first_unit() {
        let a = Entity::from_bits(99998);
        let b = Entity::from_bits(99999);
        let seq = Sequence::new(vec![a, b]);
        assert_eq!(seq.cursor(), 0);
        assert_eq!(seq.current(), Some(a));
        assert!(!seq.is_finished());
    }

    #[test]
    fn test_advance_walks_to_terminal() {
        let a = Entity::from_bits(99998);
        let b = Entity::from_bits(99999);
        let mut seq = Sequence::new(vec![a, b]);
        assert_eq!(seq.advance(), 0);
        assert_eq!(seq.current(), Some(b));
        assert_eq!(seq.advance(), 1);
        assert!(seq.is_finished());
        assert_eq!(seq.current(), None);
    }
}
