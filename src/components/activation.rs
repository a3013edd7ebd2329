// The on/off switch of a sequenced unit. Every entity referenced by a
// Sequence must carry this component.

use bevy_ecs::prelude::Component;

#[derive(Component, Debug, Clone, Copy)]
pub struct Activation {
    /// Whether the unit is currently switched on.
    pub active: bool,
}

impl Activation {
    /// Create the component switched off (the state units wait in).
    pub fn inactive() -> Self {
        Self { active: false }
    }

    /// Create the component switched on.
    pub fn active() -> Self {
        Self { active: true }
    }

    pub fn activate(&mut self) {
        self.active = true;
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}

impl Default for Activation {
    fn default() -> Self {
        Self::inactive()
    }
}
