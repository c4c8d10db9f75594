//! Tunable constants of both scenes.
//!
//! Every number the animation depends on lives here so that the update rules
//! stay free of literals. The defaults reproduce the reference look of the
//! scenes; tests shrink pools or change probabilities through the `with_*`
//! builders.

use crate::color::{self, Color};
use glamx::Vec3;
use rand::Rng;
use std::f32::consts::PI;

/// An axis-aligned box from which pool members draw their spawn position.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpawnBox {
    /// Lower corner.
    pub min: Vec3,
    /// Upper corner.
    pub max: Vec3,
}

impl SpawnBox {
    /// Creates a spawn box from its two corners.
    pub const fn new(min: Vec3, max: Vec3) -> Self {
        SpawnBox { min, max }
    }

    /// Draws a uniformly random point inside the box.
    ///
    /// Degenerate axes (`min == max`) always yield `min`.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> Vec3 {
        Vec3::new(
            uniform(rng, self.min.x, self.max.x),
            uniform(rng, self.min.y, self.max.y),
            uniform(rng, self.min.z, self.max.z),
        )
    }

    /// Whether `p` lies inside the box, bounds included.
    pub fn contains(&self, p: Vec3) -> bool {
        p.x >= self.min.x
            && p.x <= self.max.x
            && p.y >= self.min.y
            && p.y <= self.max.y
            && p.z >= self.min.z
            && p.z <= self.max.z
    }
}

/// Uniform sample in `[min, max)`, or `min` when the range is empty.
pub(crate) fn uniform<R: Rng>(rng: &mut R, min: f32, max: f32) -> f32 {
    if max > min {
        rng.random_range(min..max)
    } else {
        min
    }
}

/// Recycling rule shared by planets and asteroids.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PoolConfig {
    /// Depth past which a member is recycled.
    pub recycle_depth: f32,
    /// Where recycled members reappear.
    pub spawn: SpawnBox,
    /// Multiple of the speed scalar added to the depth each tick.
    pub speed_factor: f32,
}

impl PoolConfig {
    /// The largest depth advance a member can make in one tick.
    pub fn max_advance(&self, speed: &SpeedConfig) -> f32 {
        self.speed_factor * speed.max
    }
}

/// A planet placed when the scene is built.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlanetSeed {
    /// Surface color.
    pub color: Color,
    /// Initial position.
    pub position: Vec3,
    /// Sphere radius.
    pub radius: f32,
}

/// Planets pool.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlanetConfig {
    /// Recycling rule.
    pub pool: PoolConfig,
    /// Initial planets; the pool cardinality is the length of this list.
    pub seeds: Vec<PlanetSeed>,
}

impl Default for PlanetConfig {
    fn default() -> Self {
        PlanetConfig {
            pool: PoolConfig {
                recycle_depth: -10.0,
                spawn: SpawnBox::new(
                    Vec3::new(-60.0, -40.0, -900.0),
                    Vec3::new(60.0, 40.0, -700.0),
                ),
                speed_factor: 1.0,
            },
            seeds: vec![
                PlanetSeed {
                    color: color::PLANET_BLUE,
                    position: Vec3::new(-20.0, 10.0, -500.0),
                    radius: 28.0,
                },
                PlanetSeed {
                    color: color::PLANET_ORANGE,
                    position: Vec3::new(30.0, -10.0, -700.0),
                    radius: 36.0,
                },
                PlanetSeed {
                    color: color::PLANET_GREEN,
                    position: Vec3::new(0.0, -5.0, -900.0),
                    radius: 24.0,
                },
            ],
        }
    }
}

/// Asteroid field.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AsteroidConfig {
    /// Recycling rule. The spawn box is also used for the initial placement.
    pub pool: PoolConfig,
    /// Number of asteroids.
    pub count: usize,
    /// Radius range, `[min, max)`.
    pub radius: (f32, f32),
    /// Initial rotation range per axis.
    pub initial_rotation: (f32, f32),
    /// Angular velocity range per axis, radians per tick.
    pub spin: (f32, f32),
    /// Chance that a recycled asteroid leaves an explosion behind.
    pub explosion_chance: f64,
    /// Offset from the asteroid position to the explosion center.
    pub explosion_offset: Vec3,
}

impl Default for AsteroidConfig {
    fn default() -> Self {
        AsteroidConfig {
            pool: PoolConfig {
                recycle_depth: -30.0,
                spawn: SpawnBox::new(
                    Vec3::new(-120.0, -80.0, -900.0),
                    Vec3::new(120.0, 80.0, -200.0),
                ),
                speed_factor: 2.0,
            },
            count: 120,
            radius: (1.0, 4.0),
            initial_rotation: (0.0, PI),
            spin: (-0.02, 0.02),
            explosion_chance: 0.25,
            explosion_offset: Vec3::new(0.0, 0.0, -5.0),
        }
    }
}

/// Background point cloud.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StarfieldConfig {
    /// Number of stars.
    pub count: usize,
    /// Half extent of the cube the stars are scattered in.
    pub half_extent: f32,
    /// Rotation about the view axis, radians per tick.
    pub spin: f32,
    /// Point size in pixels.
    pub point_size: f32,
    /// Point opacity.
    pub opacity: f32,
}

impl Default for StarfieldConfig {
    fn default() -> Self {
        StarfieldConfig {
            count: 1000,
            half_extent: 1000.0,
            spin: 0.0005,
            point_size: 2.0,
            opacity: 0.9,
        }
    }
}

/// Explosion bursts.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExplosionConfig {
    /// Number of particles per burst.
    pub particles: usize,
    /// Side of the cube the particles are scattered in.
    pub spread: f32,
    /// Lifetime in ticks.
    pub life: u32,
    /// Opacity multiplier applied every tick.
    pub fade: f32,
    /// Alpha of the particle material at full opacity.
    pub base_alpha: f32,
    /// Point size in pixels.
    pub point_size: f32,
    /// Particle color.
    pub color: Color,
}

impl Default for ExplosionConfig {
    fn default() -> Self {
        ExplosionConfig {
            particles: 120,
            spread: 12.0,
            life: 24,
            fade: 0.9,
            base_alpha: 0.95,
            point_size: 3.0,
            color: color::SPARK,
        }
    }
}

/// Speed scalar bounds and step.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpeedConfig {
    /// Floor, also the initial value.
    pub min: f32,
    /// Ceiling.
    pub max: f32,
    /// Change per press or release.
    pub step: f32,
}

impl Default for SpeedConfig {
    fn default() -> Self {
        SpeedConfig {
            min: 0.25,
            max: 1.0,
            step: 0.15,
        }
    }
}

/// Rocket model placement and motion.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RocketConfig {
    /// glTF/GLB file to load.
    pub model_path: String,
    /// Uniform scale of the model.
    pub scale: f32,
    /// Position the rocket is placed at.
    pub position: Vec3,
    /// Initial Euler rotation (XYZ order).
    pub rotation: Vec3,
    /// Rotation about Y, radians per tick.
    pub spin: f32,
    /// When the rocket depth falls below this value it is moved back to
    /// `reset_depth`.
    pub far_limit: f32,
    /// Depth the rocket is moved back to.
    pub reset_depth: f32,
}

impl Default for RocketConfig {
    fn default() -> Self {
        RocketConfig {
            model_path: "models/rocket.glb".to_string(),
            scale: 5.0,
            position: Vec3::new(0.0, -6.0, -40.0),
            rotation: Vec3::new(-PI / 2.0, PI * 0.25, 0.0),
            spin: 0.01,
            far_limit: -120.0,
            reset_depth: -40.0,
        }
    }
}

/// Camera, lights and background of the space scene.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StagingConfig {
    /// Window background.
    pub background: Color,
    /// Camera eye.
    pub eye: Vec3,
    /// Camera target.
    pub at: Vec3,
    /// Key light color.
    pub key_light: Color,
    /// Key light intensity.
    pub key_intensity: f32,
    /// Key light position; it shines towards the origin.
    pub key_position: Vec3,
    /// Ambient light intensity.
    pub ambient_intensity: f32,
    /// Fixed simulation rate.
    pub ticks_per_second: u32,
}

impl Default for StagingConfig {
    fn default() -> Self {
        StagingConfig {
            background: color::SPACE_BACKGROUND,
            eye: Vec3::new(0.0, 0.0, 50.0),
            at: Vec3::ZERO,
            key_light: color::MOONLIGHT,
            key_intensity: 1.8,
            key_position: Vec3::new(-30.0, 50.0, 50.0),
            ambient_intensity: 0.4,
            ticks_per_second: 60,
        }
    }
}

/// Everything the space-flight scene needs.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpaceConfig {
    /// Planets pool.
    pub planets: PlanetConfig,
    /// Asteroid field.
    pub asteroids: AsteroidConfig,
    /// Background stars.
    pub starfield: StarfieldConfig,
    /// Explosion bursts.
    pub explosions: ExplosionConfig,
    /// Speed scalar.
    pub speed: SpeedConfig,
    /// Rocket model.
    pub rocket: RocketConfig,
    /// Camera, lights, background.
    pub staging: StagingConfig,
}

impl SpaceConfig {
    /// Replaces the asteroid count.
    pub fn with_asteroid_count(mut self, count: usize) -> Self {
        self.asteroids.count = count;
        self
    }

    /// Replaces the chance of an explosion on asteroid recycling.
    pub fn with_explosion_chance(mut self, chance: f64) -> Self {
        self.asteroids.explosion_chance = chance;
        self
    }

    /// Replaces the number of background stars.
    pub fn with_star_count(mut self, count: usize) -> Self {
        self.starfield.count = count;
        self
    }

    /// Replaces the rocket model path.
    pub fn with_rocket_model(mut self, path: impl Into<String>) -> Self {
        self.rocket.model_path = path.into();
        self
    }
}

/// The primitives showcase scene.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShowcaseConfig {
    /// Window background.
    pub background: Color,
    /// Ambient light intensity.
    pub ambient_intensity: f32,
    /// Camera eye.
    pub eye: Vec3,
    /// Texture applied to the torus knot.
    pub knot_texture: String,
    /// Texture applied to the ground quad.
    pub ground_texture: String,
    /// Torus knot winding numbers `(p, q)`.
    pub knot_windings: (u32, u32),
    /// Torus knot main radius.
    pub knot_radius: f32,
    /// Torus knot tube radius.
    pub knot_tube: f32,
    /// Segments along the knot curve.
    pub knot_tubular_segments: u32,
    /// Segments around the tube.
    pub knot_radial_segments: u32,
    /// Uniform scale applied to the knot node.
    pub knot_scale: f32,
    /// Half width of the grid helper.
    pub grid_half_size: f32,
    /// Number of cells per grid side.
    pub grid_divisions: u32,
    /// Point light position.
    pub point_light: Vec3,
    /// Directional light direction.
    pub sun_direction: Vec3,
    /// Rotation of the primitives, radians per tick.
    pub spin: f32,
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        ShowcaseConfig {
            background: color::SPACE_BACKGROUND,
            ambient_intensity: 0.3,
            eye: Vec3::new(0.0, 6.0, 18.0),
            knot_texture: "textures/torus.png".to_string(),
            ground_texture: "textures/ground.png".to_string(),
            knot_windings: (2, 3),
            knot_radius: 10.0,
            knot_tube: 3.0,
            knot_tubular_segments: 128,
            knot_radial_segments: 16,
            knot_scale: 0.2,
            grid_half_size: 10.0,
            grid_divisions: 10,
            point_light: Vec3::new(4.0, 6.0, 4.0),
            sun_direction: Vec3::new(-1.0, -1.0, -0.5),
            spin: 0.01,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn samples_stay_in_box() {
        let mut rng = StdRng::seed_from_u64(7);
        let bounds = AsteroidConfig::default().pool.spawn;

        for _ in 0..1000 {
            assert!(bounds.contains(bounds.sample(&mut rng)));
        }
    }

    #[test]
    fn degenerate_box_yields_corner() {
        let mut rng = StdRng::seed_from_u64(1);
        let p = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(SpawnBox::new(p, p).sample(&mut rng), p);
    }

    #[test]
    fn spawn_boxes_lie_behind_recycle_depth() {
        let cfg = SpaceConfig::default();
        assert!(cfg.planets.pool.spawn.max.z < cfg.planets.pool.recycle_depth);
        assert!(cfg.asteroids.pool.spawn.max.z < cfg.asteroids.pool.recycle_depth);
    }

    #[test]
    fn builders_override_fields() {
        let cfg = SpaceConfig::default()
            .with_asteroid_count(3)
            .with_explosion_chance(1.0)
            .with_star_count(10)
            .with_rocket_model("missing.glb");
        assert_eq!(cfg.asteroids.count, 3);
        assert_eq!(cfg.asteroids.explosion_chance, 1.0);
        assert_eq!(cfg.starfield.count, 10);
        assert_eq!(cfg.rocket.model_path, "missing.glb");
    }
}
