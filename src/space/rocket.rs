//! The rocket model and its lifecycle.

use crate::config::RocketConfig;
use crate::loader::{AssetPoll, PendingAsset};
use crate::scene::SpaceScene;
use crate::space::pools::euler_xyz;
use glamx::{Quat, Vec3};
use kiss3d::procedural::RenderMesh;

/// Placement of the loaded rocket.
///
/// The rocket cruises at a fixed rate: its motion does not depend on the
/// speed scalar.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RocketState {
    position: Vec3,
    rotation: Vec3,
    scale: f32,
    spin: f32,
    far_limit: f32,
    reset_depth: f32,
}

impl RocketState {
    /// Places the rocket as configured.
    pub fn new(config: &RocketConfig) -> Self {
        RocketState {
            position: config.position,
            rotation: config.rotation,
            scale: config.scale,
            spin: config.spin,
            far_limit: config.far_limit,
            reset_depth: config.reset_depth,
        }
    }

    /// Current position.
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Moves the rocket.
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    /// Euler angles, XYZ order.
    pub fn rotation(&self) -> Vec3 {
        self.rotation
    }

    /// Orientation as a quaternion.
    pub fn orientation(&self) -> Quat {
        euler_xyz(self.rotation)
    }

    /// Uniform scale of the model.
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Spins the rocket by one tick and pulls it back if it drifted too far.
    pub fn advance(&mut self) {
        self.rotation.y += self.spin;

        if self.position.z < self.far_limit {
            self.position.z = self.reset_depth;
        }
    }
}

/// The rocket, which may not exist yet.
#[derive(Debug)]
pub enum RocketSlot {
    /// The model is still loading.
    Loading(PendingAsset<RenderMesh>),
    /// The model arrived and is in the scene.
    Present(RocketState),
    /// No rocket, for good: never requested or the load failed.
    Absent,
}

impl RocketSlot {
    /// The rocket, if it is in the scene.
    pub fn rocket(&self) -> Option<&RocketState> {
        match self {
            RocketSlot::Present(rocket) => Some(rocket),
            _ => None,
        }
    }

    /// Whether the model is still loading.
    pub fn is_loading(&self) -> bool {
        matches!(self, RocketSlot::Loading(_))
    }

    /// Runs one tick of the rocket lifecycle.
    ///
    /// A finished load attaches the model to the scene once. A failed load is
    /// logged and the slot becomes [`RocketSlot::Absent`] without retrying.
    /// Returns `true` on the tick the rocket appears.
    pub fn update<S: SpaceScene>(&mut self, config: &RocketConfig, scene: &mut S) -> bool {
        match self {
            RocketSlot::Loading(pending) => match pending.poll() {
                AssetPoll::Pending => false,
                AssetPoll::Ready(model) => {
                    let rocket = RocketState::new(config);
                    scene.attach_rocket(model, &rocket);
                    log::info!("rocket {} in place", pending.label());
                    *self = RocketSlot::Present(rocket);
                    true
                }
                AssetPoll::Failed(e) => {
                    log::debug!("no rocket, {} failed to load: {}", pending.label(), e);
                    *self = RocketSlot::Absent;
                    false
                }
            },
            RocketSlot::Present(rocket) => {
                rocket.advance();
                false
            }
            RocketSlot::Absent => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::{LoadError, PendingAsset};
    use crate::scene::HeadlessScene;
    use approx::assert_relative_eq;
    use kiss3d::procedural::IndexBuffer;

    fn triangle() -> RenderMesh {
        RenderMesh::new(
            vec![Vec3::ZERO, Vec3::X, Vec3::Y],
            None,
            None,
            Some(IndexBuffer::Unified(vec![[0, 1, 2]])),
        )
    }

    #[test]
    fn rocket_spins_at_fixed_rate() {
        let cfg = RocketConfig::default();
        let mut rocket = RocketState::new(&cfg);
        let y0 = rocket.rotation().y;

        for _ in 0..100 {
            rocket.advance();
        }

        assert_relative_eq!(rocket.rotation().y, y0 + 1.0, epsilon = 1e-4);
        assert_eq!(rocket.position(), cfg.position);
    }

    #[test]
    fn rocket_past_far_limit_is_pulled_back() {
        let cfg = RocketConfig::default();
        let mut rocket = RocketState::new(&cfg);
        rocket.set_position(Vec3::new(1.0, -6.0, -130.0));

        rocket.advance();
        assert_eq!(rocket.position(), Vec3::new(1.0, -6.0, -40.0));
    }

    #[test]
    fn loaded_model_is_attached_once() {
        let cfg = RocketConfig::default();
        let mut scene = HeadlessScene::new();
        let (completer, pending) = PendingAsset::manual("rocket.glb");
        let mut slot = RocketSlot::Loading(pending);

        assert!(!slot.update(&cfg, &mut scene));
        assert!(slot.rocket().is_none());

        completer.complete(Ok(triangle()));
        assert!(slot.update(&cfg, &mut scene));
        assert!(slot.rocket().is_some());

        for _ in 0..5 {
            assert!(!slot.update(&cfg, &mut scene));
        }
        assert_eq!(scene.rockets_attached(), 1);
    }

    #[test]
    fn failed_load_leaves_rocket_absent_forever() {
        let cfg = RocketConfig::default();
        let mut scene = HeadlessScene::new();
        let mut slot = RocketSlot::Loading(PendingAsset::resolved(
            "rocket.glb",
            Err(LoadError::Disconnected),
        ));

        for _ in 0..100 {
            assert!(!slot.update(&cfg, &mut scene));
            assert!(slot.rocket().is_none());
        }
        assert!(matches!(slot, RocketSlot::Absent));
        assert_eq!(scene.rockets_attached(), 0);
    }
}
