//! Object pools and their motion rules.
//!
//! Pool members fly towards the camera (increasing Z) and are teleported back
//! to a random far position once they cross their pool's recycle depth. They
//! are never destroyed.

use crate::color::Color;
use crate::config::{uniform, AsteroidConfig, PlanetConfig, PoolConfig, StarfieldConfig};
use glamx::{Quat, Vec3};
use rand::Rng;

/// Moves `position` forward and recycles it if it crossed the threshold.
///
/// Returns the pre-reset position when a recycle happened.
fn advance<R: Rng>(
    position: &mut Vec3,
    pool: &PoolConfig,
    speed: f32,
    rng: &mut R,
) -> Option<Vec3> {
    position.z += speed * pool.speed_factor;

    if position.z > pool.recycle_depth {
        let old = *position;
        *position = pool.spawn.sample(rng);
        Some(old)
    } else {
        None
    }
}

/// A planet sphere.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Planet {
    /// Current position.
    pub position: Vec3,
    /// Sphere radius.
    pub radius: f32,
    /// Surface color.
    pub color: Color,
}

/// The planets, recycled in place.
#[derive(Clone, Debug)]
pub struct PlanetPool {
    config: PoolConfig,
    planets: Vec<Planet>,
}

impl PlanetPool {
    /// Places the configured planets.
    pub fn new(config: &PlanetConfig) -> Self {
        PlanetPool {
            config: config.pool,
            planets: config
                .seeds
                .iter()
                .map(|seed| Planet {
                    position: seed.position,
                    radius: seed.radius,
                    color: seed.color,
                })
                .collect(),
        }
    }

    /// The planets, in pool order.
    pub fn planets(&self) -> &[Planet] {
        &self.planets
    }

    /// Recycling rule of this pool.
    pub fn config(&self) -> &PoolConfig {
        &self.config
    }

    /// Advances every planet by one tick. Returns how many were recycled.
    pub fn advance<R: Rng>(&mut self, speed: f32, rng: &mut R) -> usize {
        let mut recycled = 0;

        for (i, planet) in self.planets.iter_mut().enumerate() {
            if let Some(old) = advance(&mut planet.position, &self.config, speed, rng) {
                log::trace!("planet {} recycled at z = {:.1}", i, old.z);
                recycled += 1;
            }
        }

        recycled
    }
}

/// A spinning rock.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Asteroid {
    /// Current position.
    pub position: Vec3,
    /// Euler angles, XYZ order.
    pub rotation: Vec3,
    /// Added to `rotation` every tick; fixed for the asteroid's lifetime.
    pub spin: Vec3,
    /// Radius of the rock mesh.
    pub radius: f32,
}

impl Asteroid {
    /// Orientation as a quaternion.
    pub fn orientation(&self) -> Quat {
        euler_xyz(self.rotation)
    }
}

/// Converts XYZ-order Euler angles to a quaternion.
pub fn euler_xyz(angles: Vec3) -> Quat {
    Quat::from_rotation_x(angles.x)
        * Quat::from_rotation_y(angles.y)
        * Quat::from_rotation_z(angles.z)
}

/// The asteroid field.
#[derive(Clone, Debug)]
pub struct AsteroidField {
    config: AsteroidConfig,
    asteroids: Vec<Asteroid>,
}

impl AsteroidField {
    /// Scatters `config.count` asteroids over the spawn box.
    pub fn new<R: Rng>(config: &AsteroidConfig, rng: &mut R) -> Self {
        let (rot_min, rot_max) = config.initial_rotation;
        let (spin_min, spin_max) = config.spin;

        let asteroids = (0..config.count)
            .map(|_| Asteroid {
                radius: uniform(rng, config.radius.0, config.radius.1),
                position: config.pool.spawn.sample(rng),
                rotation: Vec3::new(
                    uniform(rng, rot_min, rot_max),
                    uniform(rng, rot_min, rot_max),
                    uniform(rng, rot_min, rot_max),
                ),
                spin: Vec3::new(
                    uniform(rng, spin_min, spin_max),
                    uniform(rng, spin_min, spin_max),
                    uniform(rng, spin_min, spin_max),
                ),
            })
            .collect();

        AsteroidField {
            config: *config,
            asteroids,
        }
    }

    /// The asteroids, in pool order.
    pub fn asteroids(&self) -> &[Asteroid] {
        &self.asteroids
    }

    /// Mutable access, for placing asteroids by hand.
    pub fn asteroids_mut(&mut self) -> &mut [Asteroid] {
        &mut self.asteroids
    }

    /// Field configuration.
    pub fn config(&self) -> &AsteroidConfig {
        &self.config
    }

    /// Advances every asteroid by one tick.
    ///
    /// Recycled asteroids trigger an explosion with the configured chance;
    /// the explosion centers are pushed to `explosions`. Returns how many
    /// asteroids were recycled.
    pub fn advance<R: Rng>(
        &mut self,
        speed: f32,
        rng: &mut R,
        explosions: &mut Vec<Vec3>,
    ) -> usize {
        let mut recycled = 0;

        for asteroid in &mut self.asteroids {
            asteroid.rotation += asteroid.spin;

            if let Some(old) = advance(&mut asteroid.position, &self.config.pool, speed, rng) {
                recycled += 1;

                if rng.random_bool(self.config.explosion_chance.clamp(0.0, 1.0)) {
                    explosions.push(old + self.config.explosion_offset);
                }
            }
        }

        recycled
    }
}

/// The background point cloud.
#[derive(Clone, Debug)]
pub struct Starfield {
    points: Vec<Vec3>,
    angle: f32,
    spin: f32,
}

impl Starfield {
    /// Scatters the stars in a cube centered on the origin.
    pub fn new<R: Rng>(config: &StarfieldConfig, rng: &mut R) -> Self {
        let h = config.half_extent;
        let points = (0..config.count)
            .map(|_| Vec3::new(uniform(rng, -h, h), uniform(rng, -h, h), uniform(rng, -h, h)))
            .collect();

        Starfield {
            points,
            angle: 0.0,
            spin: config.spin,
        }
    }

    /// Star positions in the starfield's local frame.
    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    /// Accumulated rotation about Z.
    pub fn angle(&self) -> f32 {
        self.angle
    }

    /// Rotation of the whole cloud.
    pub fn orientation(&self) -> Quat {
        Quat::from_rotation_z(self.angle)
    }

    /// Rotates the cloud by one tick.
    pub fn advance(&mut self) {
        self.angle += self.spin;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SpaceConfig;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(0x5eed)
    }

    #[test]
    fn planets_advance_by_speed() {
        let cfg = SpaceConfig::default();
        let mut pool = PlanetPool::new(&cfg.planets);
        let before: Vec<f32> = pool.planets().iter().map(|p| p.position.z).collect();

        assert_eq!(pool.advance(0.4, &mut rng()), 0);
        for (p, z) in pool.planets().iter().zip(before) {
            assert_relative_eq!(p.position.z, z + 0.4);
        }
    }

    #[test]
    fn planet_recycles_into_spawn_box() {
        let cfg = SpaceConfig::default();
        let mut pool = PlanetPool::new(&cfg.planets);
        pool.planets[0].position = Vec3::new(5.0, 5.0, -10.1);

        assert_eq!(pool.advance(0.25, &mut rng()), 1);
        assert!(cfg.planets.pool.spawn.contains(pool.planets()[0].position));
        assert_eq!(pool.planets()[0].radius, 28.0);
    }

    #[test]
    fn asteroid_advances_twice_as_fast_and_spins() {
        let cfg = SpaceConfig::default().with_asteroid_count(1);
        let mut field = AsteroidField::new(&cfg.asteroids, &mut rng());
        field.asteroids_mut()[0].position = Vec3::new(0.0, 0.0, -100.0);
        let a = field.asteroids()[0];

        let mut explosions = Vec::new();
        field.advance(0.25, &mut rng(), &mut explosions);

        let b = field.asteroids()[0];
        assert_relative_eq!(b.position.z, -99.5);
        assert_eq!(b.rotation, a.rotation + a.spin);
        assert!(explosions.is_empty());
    }

    #[test]
    fn recycled_asteroid_explodes_at_old_position() {
        let cfg = SpaceConfig::default()
            .with_asteroid_count(1)
            .with_explosion_chance(1.0);
        let mut field = AsteroidField::new(&cfg.asteroids, &mut rng());
        field.asteroids_mut()[0].position = Vec3::new(3.0, -2.0, -30.2);

        let mut explosions = Vec::new();
        assert_eq!(field.advance(0.25, &mut rng(), &mut explosions), 1);

        assert_eq!(explosions.len(), 1);
        assert_relative_eq!(explosions[0].x, 3.0);
        assert_relative_eq!(explosions[0].y, -2.0);
        assert_relative_eq!(explosions[0].z, -30.2 + 0.5 - 5.0, epsilon = 1e-4);
        assert!(cfg.asteroids.pool.spawn.contains(field.asteroids()[0].position));
    }

    #[test]
    fn explosion_chance_zero_never_explodes() {
        let cfg = SpaceConfig::default().with_explosion_chance(0.0);
        let mut field = AsteroidField::new(&cfg.asteroids, &mut rng());
        let mut r = rng();
        let mut explosions = Vec::new();

        for _ in 0..2000 {
            field.advance(1.0, &mut r, &mut explosions);
        }
        assert!(explosions.is_empty());
    }

    #[test]
    fn explosion_rate_is_about_a_quarter() {
        let cfg = SpaceConfig::default();
        let mut field = AsteroidField::new(&cfg.asteroids, &mut rng());
        let mut r = rng();
        let mut explosions = Vec::new();
        let mut recycled = 0;

        for _ in 0..5000 {
            recycled += field.advance(1.0, &mut r, &mut explosions);
        }

        let rate = explosions.len() as f64 / recycled as f64;
        assert!(recycled > 500);
        assert!((rate - 0.25).abs() < 0.05, "rate = {}", rate);
    }

    #[test]
    fn depth_never_passes_threshold_after_a_tick() {
        let cfg = SpaceConfig::default();
        let mut r = rng();
        let mut planets = PlanetPool::new(&cfg.planets);
        let mut field = AsteroidField::new(&cfg.asteroids, &mut r);
        let mut explosions = Vec::new();

        for tick in 0..3000 {
            let speed = if tick % 7 < 3 { 1.0 } else { 0.25 };
            planets.advance(speed, &mut r);
            field.advance(speed, &mut r, &mut explosions);

            for p in planets.planets() {
                assert!(p.position.z <= cfg.planets.pool.recycle_depth);
                assert!(p.position.z >= cfg.planets.pool.spawn.min.z);
            }
            for a in field.asteroids() {
                assert!(a.position.z <= cfg.asteroids.pool.recycle_depth);
                assert!(a.position.x.abs() <= 120.0 && a.position.y.abs() <= 80.0);
            }
        }
    }

    #[test]
    fn members_move_at_most_max_advance_per_tick() {
        let cfg = SpaceConfig::default();
        let mut r = rng();
        let mut field = AsteroidField::new(&cfg.asteroids, &mut r);
        let limit = cfg.asteroids.pool.max_advance(&cfg.speed);
        let mut explosions = Vec::new();

        for _ in 0..500 {
            let before: Vec<f32> = field.asteroids().iter().map(|a| a.position.z).collect();
            field.advance(cfg.speed.max, &mut r, &mut explosions);

            for (a, z) in field.asteroids().iter().zip(before) {
                // A recycled member jumps backwards, never forwards.
                assert!(a.position.z - z <= limit + 1.0e-4);
            }
        }
    }

    #[test]
    fn initial_asteroids_respect_ranges() {
        let cfg = SpaceConfig::default();
        let field = AsteroidField::new(&cfg.asteroids, &mut rng());

        assert_eq!(field.asteroids().len(), 120);
        for a in field.asteroids() {
            assert!(a.radius >= 1.0 && a.radius < 4.0);
            assert!(a.spin.abs().max_element() <= 0.02);
            assert!(a.rotation.min_element() >= 0.0);
            assert!(cfg.asteroids.pool.spawn.contains(a.position));
        }
    }

    #[test]
    fn starfield_spins_at_fixed_rate() {
        let cfg = SpaceConfig::default();
        let mut stars = Starfield::new(&cfg.starfield, &mut rng());
        assert_eq!(stars.points().len(), 1000);
        assert!(stars.points().iter().all(|p| p.abs().max_element() <= 1000.0));

        for _ in 0..10 {
            stars.advance();
        }
        assert_relative_eq!(stars.angle(), 0.005, epsilon = 1e-6);
    }

    #[test]
    fn euler_identity() {
        assert_eq!(euler_xyz(Vec3::ZERO), Quat::IDENTITY);
    }
}
