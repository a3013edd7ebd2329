//! Time update system.
//!
//! Updates the shared [`SimTime`](crate::resources::simtime::SimTime)
//! resource once per tick, applying `time_scale` to the provided delta.
use bevy_ecs::prelude::*;

use crate::resources::simtime::SimTime;

/// Update elapsed and delta seconds on the `SimTime` resource.
///
/// `dt` is expected to be the unscaled step delta in seconds. The system
/// applies the current `time_scale`, writes both `elapsed` and `delta`,
/// and bumps the tick counter.
pub fn advance_sim_time(world: &mut World, dt: f32) {
    let mut time = world.resource_mut::<SimTime>();
    let scaled_dt = dt * time.time_scale;
    time.elapsed += scaled_dt;
    time.delta = scaled_dt;
    time.tick += 1;
}
