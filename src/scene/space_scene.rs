use crate::space::{ExplosionBurst, RocketState};
use kiss3d::procedural::RenderMesh;

/// Scene-graph operations needed by the space scene.
///
/// Pool members are not managed through this trait: they are never created
/// or destroyed after startup, and their transforms are mirrored once per
/// frame by the renderer. Only objects with a real lifecycle go through here.
pub trait SpaceScene {
    /// Handle of a burst living in the scene.
    type Burst;

    /// Adds a burst to the scene at full opacity.
    fn spawn_burst(&mut self, burst: &ExplosionBurst) -> Self::Burst;

    /// Updates the opacity of a live burst.
    fn fade_burst(&mut self, burst: &mut Self::Burst, opacity: f32);

    /// Removes a burst and frees its geometry.
    fn release_burst(&mut self, burst: Self::Burst);

    /// Adds the rocket model. Called at most once.
    fn attach_rocket(&mut self, model: RenderMesh, rocket: &RocketState);
}
