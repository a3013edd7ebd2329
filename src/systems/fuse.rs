//! Fuse burn-down system.
//!
//! This module provides the [`fuse_system`] that burns
//! [`Fuse`](crate::components::fuse::Fuse) timers on active units and
//! completes them when the fuse runs out.
//!
//! # System Flow
//!
//! Each tick:
//!
//! 1. `fuse_system` iterates all entities with a `Fuse` and an `Activation`
//! 2. Skips units that are currently switched off (the fuse only burns
//!    while the unit is active)
//! 3. Adds `delta` to `elapsed`
//! 4. When the fuse is burned out, marks the unit complete: through its
//!    [`Completion`](crate::components::completion::Completion) component if
//!    it has one, by deactivation otherwise
//!
//! The deactivation path is exactly the fallback completion policy of
//! [`sequence_tick_system`](crate::systems::sequence::sequence_tick_system),
//! so capability-less units with a fuse still advance their chain.
//!
//! # Time Scaling
//!
//! The burn respects [`SimTime::time_scale`](crate::resources::simtime::SimTime)
//! since `delta` is already scaled.

use bevy_ecs::prelude::*;

use crate::components::activation::Activation;
use crate::components::completion::Completion;
use crate::components::fuse::Fuse;
use crate::resources::simtime::SimTime;

/// Burn fuses on active units and complete them when they run out.
pub fn fuse_system(
    time: Res<SimTime>,
    mut query: Query<(Entity, &mut Fuse, &mut Activation, Option<&mut Completion>)>,
) {
    let dt = time.delta; // delta is already scaled by time_scale
    for (entity, mut fuse, mut activation, completion) in query.iter_mut() {
        if !activation.active {
            continue;
        }
        fuse.elapsed += dt;
        if !fuse.burned_out() {
            continue;
        }
        match completion {
            Some(mut completion) => completion.finish(),
            None => activation.deactivate(),
        }
        log::debug!("fuse on {entity:?} burned out after {:.2}s", fuse.elapsed);
    }
}
