// Scripted raw input edges, replayed by tick number. Stands in for a real
// input device in the headless runner and in tests.
use bevy_ecs::prelude::Resource;

use crate::resources::inputlatch::Edge;

/// One scripted edge, delivered when the simulation reaches `tick`.
#[derive(Debug, Clone)]
pub struct InputCue {
    pub tick: u64,
    pub input: String,
    pub edge: Edge,
}

/// Resource holding the remaining scripted edges.
#[derive(Resource, Debug, Clone, Default)]
pub struct InputScript {
    cues: Vec<InputCue>,
}

impl InputScript {
    pub fn new(mut cues: Vec<InputCue>) -> Self {
        cues.sort_by_key(|cue| cue.tick);
        Self { cues }
    }

    pub fn is_empty(&self) -> bool {
        self.cues.is_empty()
    }

    /// Remove and return every cue scheduled at or before `tick`.
    pub fn take_due(&mut self, tick: u64) -> Vec<InputCue> {
        let split = self.cues.partition_point(|cue| cue.tick <= tick);
        self.cues.drain(..split).collect()
    }
}
