// Burns for a number of seconds while the unit is active, then completes it.
use bevy_ecs::prelude::Component;

#[derive(Component, Debug, Clone, Copy)]
pub struct Fuse {
    pub duration: f32,
    pub elapsed: f32,
}

impl Fuse {
    pub fn new(duration: f32) -> Self {
        Fuse {
            duration,
            elapsed: 0.0,
        }
    }

    pub fn reset(&mut self) {
        self.elapsed = 0.0;
    }

    pub fn burned_out(&self) -> bool {
        self.elapsed >= self.duration
    }
}
