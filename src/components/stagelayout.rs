//! Stage layout component for data-driven chain spawning.
//!
//! The [`StageLayout`] component references a JSON file describing a chain
//! of units. When the component is added, the
//! [`stage_spawn_system`](crate::systems::stageloader::stage_spawn_system)
//! reads the file, spawns one entity per unit and a [`Sequence`] entity
//! chaining them in file order.
//!
//! This keeps set-piece choreography (doors, lifts, scripted sequences)
//! out of code and in external data files.
//!
//! [`Sequence`]: crate::components::sequence::Sequence

use bevy_ecs::prelude::*;
use serde::{Deserialize, Serialize};

use crate::resources::inputlatch::Edge;

/// A stage layout component that spawns a unit chain when added.
#[derive(Component, Debug, Clone)]
pub struct StageLayout {
    /// Path to the JSON file defining the stage.
    pub path: String,
    /// Whether this layout has been processed.
    pub spawned: bool,
}

impl StageLayout {
    /// Creates a new StageLayout component.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            spawned: false,
        }
    }
}

/// Name tag attached to spawned units so logs and observers can refer to
/// them by something friendlier than an `Entity` id.
#[derive(Component, Debug, Clone)]
pub struct UnitTag {
    pub name: String,
}

/// Structure representing the stage data loaded from JSON.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct StageData {
    pub name: String,
    pub units: Vec<StageUnit>,
    /// Scripted raw input edges, replayed by tick number. Optional.
    #[serde(default)]
    pub cues: Vec<StageCue>,
}

/// Structure representing a single unit in the stage definition.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct StageUnit {
    pub name: String,
    /// Whether the unit carries the completion capability.
    #[serde(default)]
    pub completion: bool,
    /// Self-complete after this many seconds of activity.
    #[serde(default)]
    pub fuse: Option<f32>,
}

/// A scripted raw input edge, delivered on the given tick.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct StageCue {
    pub tick: u64,
    pub input: String,
    pub edge: CueEdge,
}

/// Edge direction as written in stage files.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CueEdge {
    Down,
    Up,
}

impl From<CueEdge> for Edge {
    fn from(edge: CueEdge) -> Self {
        match edge {
            CueEdge::Down => Edge::Down,
            CueEdge::Up => Edge::Up,
        }
    }
}

impl StageData {
    /// Loads stage data from a JSON file at the specified path.
    pub fn load_from_file(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let file_content = std::fs::read_to_string(path)?;
        let stage_data: StageData = serde_json::from_str(&file_content)?;
        Ok(stage_data)
    }
}
