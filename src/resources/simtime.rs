use bevy_ecs::prelude::Resource;

#[derive(Resource, Clone, Copy)]
pub struct SimTime {
    pub elapsed: f32,
    pub delta: f32,
    pub time_scale: f32,
    pub tick: u64,
}

impl Default for SimTime {
    fn default() -> Self {
        SimTime {
            elapsed: 0.0,
            delta: 0.0,
            time_scale: 1.0,
            tick: 0,
        }
    }
}

impl SimTime {
    pub fn with_time_scale(mut self, time_scale: f32) -> Self {
        self.time_scale = time_scale;
        self
    }
}
