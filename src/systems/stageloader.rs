//! Stage spawning system.
//!
//! The [`stage_spawn_system`] processes newly added
//! [`StageLayout`](crate::components::stagelayout::StageLayout) components,
//! loads their JSON data, and spawns one entity per declared unit plus a
//! [`Sequence`](crate::components::sequence::Sequence) entity chaining them
//! in file order.
//!
//! # JSON Format
//!
//! ```json
//! {
//!   "name": "intro",
//!   "units": [
//!     { "name": "gate", "completion": true, "fuse": 1.5 },
//!     { "name": "bridge" }
//!   ],
//!   "cues": [
//!     { "tick": 10, "input": "jump", "edge": "down" },
//!     { "tick": 12, "input": "jump", "edge": "up" }
//!   ]
//! }
//! ```
//!
//! Units with `"completion": true` carry the completion capability; a
//! `"fuse"` makes the unit self-complete after that many active seconds.
//! Optional `cues` are installed as an
//! [`InputScript`](crate::resources::inputscript::InputScript) resource.

use bevy_ecs::prelude::*;

use crate::components::activation::Activation;
use crate::components::completion::Completion;
use crate::components::fuse::Fuse;
use crate::components::sequence::Sequence;
use crate::components::stagelayout::{StageData, StageLayout, UnitTag};
use crate::resources::inputscript::{InputCue, InputScript};

/// System that processes StageLayout components and spawns the unit chain.
pub fn stage_spawn_system(
    mut commands: Commands,
    mut query: Query<&mut StageLayout, Added<StageLayout>>,
) {
    for mut layout in query.iter_mut() {
        if layout.spawned {
            continue; // Skip if already spawned
        }

        // Load the stage data from the specified JSON file
        let data = match StageData::load_from_file(&layout.path) {
            Ok(data) => data,
            Err(err) => {
                log::error!("Failed to load stage from {}: {}", layout.path, err);
                layout.spawned = true; // Prevent retrying
                continue;
            }
        };

        // Spawn one entity per unit, in file order
        let mut units = Vec::with_capacity(data.units.len());
        for unit in &data.units {
            let mut spawned = commands.spawn((
                UnitTag {
                    name: unit.name.clone(),
                },
                Activation::inactive(),
            ));
            if unit.completion {
                spawned.insert(Completion::pending());
            }
            if let Some(duration) = unit.fuse {
                spawned.insert(Fuse::new(duration));
            }
            units.push(spawned.id());
        }

        commands.spawn((Sequence::new(units),));

        if !data.cues.is_empty() {
            let cues = data
                .cues
                .iter()
                .map(|cue| InputCue {
                    tick: cue.tick,
                    input: cue.input.clone(),
                    edge: cue.edge.into(),
                })
                .collect();
            commands.insert_resource(InputScript::new(cues));
        }

        layout.spawned = true;

        log::info!(
            "Spawned stage '{}' with {} unit(s) from {}",
            data.name,
            data.units.len(),
            layout.path
        );
    }
}
