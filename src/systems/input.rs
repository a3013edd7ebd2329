//! Input systems.
//!
//! - [`replay_input_script`] feeds scripted edges into the
//!   [`InputLatch`](crate::resources::inputlatch::InputLatch), standing in
//!   for a real input device in the headless runner and in tests.
//! - [`poll_input_system`] polls the latch exactly once per tick, publishes
//!   the resulting [`InputSnapshot`] resource, and triggers an
//!   [`InputEvent`] for every accumulated edge.
//!
//! `replay_input_script` must run before `poll_input_system` so that edges
//! scheduled for the current tick land in the same snapshot.

use bevy_ecs::prelude::*;

use crate::events::input::InputEvent;
use crate::resources::inputlatch::{InputLatch, InputSnapshot};
use crate::resources::inputscript::InputScript;
use crate::resources::simtime::SimTime;

/// Deliver scripted edges that are due this tick into the latch.
///
/// Does nothing when no [`InputScript`] resource is present. Recording an
/// edge against an input the latch does not know is a precondition
/// violation and panics, same as any other raw input source would.
pub fn replay_input_script(
    time: Res<SimTime>,
    script: Option<ResMut<InputScript>>,
    mut latch: ResMut<InputLatch>,
) {
    let Some(mut script) = script else {
        return;
    };
    for cue in script.take_due(time.tick) {
        latch.record_edge(&cue.input, cue.edge);
    }
}

/// Poll the latch once per tick and publish the snapshot.
///
/// For every input that accumulated edges since the previous poll, an
/// [`InputEvent`] is triggered — press before release for the same input.
/// Edge counts are not preserved, only occurrence.
pub fn poll_input_system(
    mut latch: ResMut<InputLatch>,
    mut snapshot: ResMut<InputSnapshot>,
    mut commands: Commands,
) {
    let polled = latch.poll_and_reset();

    for (input, reading) in polled.iter() {
        if reading.went_down {
            commands.trigger(InputEvent {
                input: input.to_string(),
                pressed: true,
            });
        }
        if reading.went_up {
            commands.trigger(InputEvent {
                input: input.to_string(),
                pressed: false,
            });
        }
    }

    *snapshot = polled;
}
