//! Edge-accumulating input latch.
//!
//! Raw input sampling and game-logic updates do not necessarily run at the
//! same cadence. If logic only looked at level state once per tick, a press
//! that started *and* ended between two ticks would be invisible. The
//! [`InputLatch`] resource closes that gap: every raw edge is recorded as it
//! arrives via [`record_edge`](InputLatch::record_edge), and once per tick
//! [`poll_and_reset`](InputLatch::poll_and_reset) hands out a snapshot and
//! clears the accumulated edges in the same call.
//!
//! Edges are coalesced: two presses within one tick still report a single
//! `went_down`. Occurrence is preserved, count is not. Level state in the
//! snapshot is the state at poll time, not mid-tick.
//!
//! The latch assumes cooperative scheduling — `record_edge` interleaves
//! with, but never runs in parallel with, the polling tick. The single
//! `&mut self` access path is what makes read+reset atomic here; under
//! preemptive threading the latch would need a lock around it.

use bevy_ecs::prelude::Resource;
use rustc_hash::FxHashMap;

/// A raw transition direction for a logical input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    /// The input went from released to held.
    Down,
    /// The input went from held to released.
    Up,
}

/// Pending state for one registered input between polls.
#[derive(Debug, Clone, Copy, Default)]
struct KeyLatch {
    /// Level state, tracked from the last recorded edge.
    held: bool,
    /// A down edge arrived since the last poll.
    went_down: bool,
    /// An up edge arrived since the last poll.
    went_up: bool,
}

/// What one input looked like at poll time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputReading {
    /// Whether the input was held when the poll happened.
    pub held: bool,
    /// Whether at least one down edge arrived since the previous poll.
    pub went_down: bool,
    /// Whether at least one up edge arrived since the previous poll.
    pub went_up: bool,
}

/// Resource accumulating raw input edges between polls.
///
/// Inputs must be registered before edges are recorded against them;
/// recording against an unknown input is a programmer error and panics
/// rather than silently inventing state.
#[derive(Resource, Debug, Default)]
pub struct InputLatch {
    inputs: FxHashMap<String, KeyLatch>,
}

impl InputLatch {
    /// Track a logical input. Idempotent; re-registering an input keeps
    /// its current state.
    pub fn register(&mut self, input: impl Into<String>) {
        self.inputs.entry(input.into()).or_default();
    }

    pub fn is_registered(&self, input: &str) -> bool {
        self.inputs.contains_key(input)
    }

    /// Record a raw transition for a registered input.
    ///
    /// Callable any number of times between polls; edges accumulate and the
    /// level state follows the last recorded direction.
    ///
    /// # Panics
    ///
    /// Panics if `input` was never registered.
    pub fn record_edge(&mut self, input: &str, edge: Edge) {
        let Some(latch) = self.inputs.get_mut(input) else {
            panic!("record_edge on unregistered input '{input}'");
        };
        match edge {
            Edge::Down => {
                latch.held = true;
                latch.went_down = true;
            }
            Edge::Up => {
                latch.held = false;
                latch.went_up = true;
            }
        }
    }

    /// Take a snapshot of every tracked input and clear the accumulated
    /// edges in the same call.
    ///
    /// Level state is untouched by the reset — only edges clear. Two
    /// consecutive polls with no edges in between therefore yield a second
    /// snapshot whose edge flags are all false and whose level state
    /// matches the first.
    pub fn poll_and_reset(&mut self) -> InputSnapshot {
        let mut states = FxHashMap::default();
        for (name, latch) in self.inputs.iter_mut() {
            states.insert(
                name.clone(),
                InputReading {
                    held: latch.held,
                    went_down: latch.went_down,
                    went_up: latch.went_up,
                },
            );
            latch.went_down = false;
            latch.went_up = false;
        }
        InputSnapshot { states }
    }
}

/// Per-tick view of all tracked inputs, published by
/// [`poll_input_system`](crate::systems::input::poll_input_system).
#[derive(Resource, Debug, Clone, Default)]
pub struct InputSnapshot {
    states: FxHashMap<String, InputReading>,
}

impl InputSnapshot {
    /// The reading for a tracked input.
    ///
    /// # Panics
    ///
    /// Panics if `input` was never registered with the latch.
    pub fn reading(&self, input: &str) -> InputReading {
        match self.states.get(input) {
            Some(reading) => *reading,
            None => panic!("no reading for unregistered input '{input}'"),
        }
    }

    pub fn is_held(&self, input: &str) -> bool {
        self.reading(input).held
    }

    pub fn went_down(&self, input: &str) -> bool {
        self.reading(input).went_down
    }

    pub fn went_up(&self, input: &str) -> bool {
        self.reading(input).went_up
    }

    /// Iterate over all readings in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &InputReading)> {
        self.states.iter().map(|(name, reading)| (name.as_str(), reading))
    }
}
