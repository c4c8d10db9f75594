use super::SpaceScene;
use crate::space::{ExplosionBurst, RocketState};
use kiss3d::procedural::RenderMesh;

/// Burst handle of a [`HeadlessScene`].
#[derive(Debug, PartialEq, Eq)]
pub struct HeadlessBurst {
    id: usize,
}

impl HeadlessBurst {
    /// Spawn order of the burst, starting at 0.
    pub fn id(&self) -> usize {
        self.id
    }
}

/// A scene that draws nothing and keeps count.
#[derive(Debug, Default)]
pub struct HeadlessScene {
    spawned: usize,
    released: usize,
    rockets: usize,
    last_opacity: Option<f32>,
}

impl HeadlessScene {
    /// Creates an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bursts spawned and not yet released.
    pub fn live_bursts(&self) -> usize {
        self.spawned - self.released
    }

    /// Bursts spawned so far.
    pub fn spawned_bursts(&self) -> usize {
        self.spawned
    }

    /// Bursts released so far.
    pub fn released_bursts(&self) -> usize {
        self.released
    }

    /// Opacity of the last faded burst.
    pub fn last_opacity(&self) -> Option<f32> {
        self.last_opacity
    }

    /// Number of rocket models attached.
    pub fn rockets_attached(&self) -> usize {
        self.rockets
    }
}

impl SpaceScene for HeadlessScene {
    type Burst = HeadlessBurst;

    fn spawn_burst(&mut self, _: &ExplosionBurst) -> HeadlessBurst {
        let id = self.spawned;
        self.spawned += 1;
        HeadlessBurst { id }
    }

    fn fade_burst(&mut self, _: &mut HeadlessBurst, opacity: f32) {
        self.last_opacity = Some(opacity);
    }

    fn release_burst(&mut self, _: HeadlessBurst) {
        self.released += 1;
    }

    fn attach_rocket(&mut self, _: RenderMesh, _: &RocketState) {
        self.rockets += 1;
    }
}
