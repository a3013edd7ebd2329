//! Chain activation systems.
//!
//! This module provides the systems that drive
//! [`Sequence`](crate::components::sequence::Sequence) components:
//!
//! - [`sequence_start_system`] – initializes newly added chains: deactivates
//!   every unit, then activates unit 0
//! - [`sequence_tick_system`] – evaluates the current unit's completion once
//!   per tick and advances the cursor when it is done
//!
//! # System Ordering
//!
//! These systems should run in order:
//! 1. `sequence_start_system` – bring new chains into their starting state
//! 2. `sequence_tick_system` – advance running chains
//!
//! # Completion policy
//!
//! A unit is considered done when:
//! - its [`Activation`] is off (self-deactivation counts as completion —
//!   the fallback for units without the completion capability), or
//! - it carries a [`Completion`] component whose `done` flag is set.
//!
//! A unit that is active and has no `Completion` component is never done;
//! a chain waiting on one stalls until the outside world deactivates it.
//! There is no timeout on purpose.
//!
//! The cursor moves at most one step per tick per chain. A unit that is
//! already done on the tick it gets activated is only stepped past on the
//! following tick.
//!
//! [`Activation`]: crate::components::activation::Activation
//! [`Completion`]: crate::components::completion::Completion

use bevy_ecs::prelude::*;

use crate::components::activation::Activation;
use crate::components::completion::Completion;
use crate::components::sequence::Sequence;
use crate::events::sequence::{SequenceAdvancedEvent, SequenceFinishedEvent};

/// Bring newly added chains into their starting state.
///
/// Every unit is deactivated first, so the chain fully owns the initial
/// activation pattern regardless of how the units were spawned. Then unit 0
/// is activated. An empty chain is terminal from the start and triggers
/// [`SequenceFinishedEvent`] immediately.
///
/// # Panics
///
/// Panics if a unit entity is missing its [`Activation`] component or has
/// been despawned; a chain referencing such a unit is a caller bug.
pub fn sequence_start_system(
    sequences: Query<(Entity, &Sequence), Added<Sequence>>,
    mut units: Query<&mut Activation>,
    mut commands: Commands,
) {
    for (entity, sequence) in sequences.iter() {
        for &unit in sequence.units() {
            let mut activation = units.get_mut(unit).unwrap_or_else(|_| {
                panic!("sequence {entity:?} references unit {unit:?} without an Activation component")
            });
            activation.deactivate();
        }
        match sequence.current() {
            Some(first) => {
                // Existence was just verified by the loop above.
                units.get_mut(first).unwrap().activate();
                log::debug!(
                    "sequence {entity:?} started with {} unit(s)",
                    sequence.len()
                );
            }
            None => {
                log::debug!("sequence {entity:?} is empty, finishing immediately");
                commands.trigger(SequenceFinishedEvent { entity });
            }
        }
    }
}

/// Evaluate the current unit of every chain and advance on completion.
///
/// Runs once per tick. For each non-terminal chain:
///
/// 1. Applies the two-branch completion policy to the current unit
/// 2. If done: steps the cursor, triggers [`SequenceAdvancedEvent`], and
///    either activates the next unit or triggers [`SequenceFinishedEvent`]
/// 3. If not done: leaves the chain untouched this tick
///
/// The just-completed unit is left in whatever state it put itself in;
/// the chain never deactivates it.
///
/// # Panics
///
/// Panics if a unit entity is missing its [`Activation`] component or has
/// been despawned.
pub fn sequence_tick_system(
    mut sequences: Query<(Entity, &mut Sequence)>,
    mut units: Query<(&mut Activation, Option<&Completion>)>,
    mut commands: Commands,
) {
    for (entity, mut sequence) in sequences.iter_mut() {
        let Some(current) = sequence.current() else {
            continue; // terminal
        };

        let done = {
            let (activation, completion) = units.get(current).unwrap_or_else(|_| {
                panic!(
                    "sequence {entity:?} references unit {current:?} without an Activation component"
                )
            });
            if !activation.active {
                true
            } else if let Some(completion) = completion {
                completion.done
            } else {
                false
            }
        };

        if !done {
            continue;
        }

        let index = sequence.advance();
        commands.trigger(SequenceAdvancedEvent { entity, index });

        match sequence.current() {
            Some(next) => {
                let (mut activation, _) = units.get_mut(next).unwrap_or_else(|_| {
                    panic!(
                        "sequence {entity:?} references unit {next:?} without an Activation component"
                    )
                });
                activation.activate();
            }
            None => {
                log::debug!("sequence {entity:?} finished");
                commands.trigger(SequenceFinishedEvent { entity });
            }
        }
    }
}
