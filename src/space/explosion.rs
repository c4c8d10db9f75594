//! Particle bursts left behind by recycled asteroids.

use crate::config::{uniform, ExplosionConfig};
use crate::scene::SpaceScene;
use glamx::Vec3;
use rand::Rng;

/// A short-lived cloud of sparks.
#[derive(Clone, Debug, PartialEq)]
pub struct ExplosionBurst {
    position: Vec3,
    offsets: Vec<Vec3>,
    opacity: f32,
    life: u32,
}

impl ExplosionBurst {
    /// Scatters `config.particles` sparks in a cube of side `config.spread`
    /// centered on `position`, at full opacity.
    pub fn new<R: Rng>(position: Vec3, config: &ExplosionConfig, rng: &mut R) -> Self {
        let h = config.spread / 2.0;
        let offsets = (0..config.particles)
            .map(|_| Vec3::new(uniform(rng, -h, h), uniform(rng, -h, h), uniform(rng, -h, h)))
            .collect();

        ExplosionBurst {
            position,
            offsets,
            opacity: 1.0,
            life: config.life,
        }
    }

    /// Center of the burst.
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Spark positions relative to the center.
    pub fn offsets(&self) -> &[Vec3] {
        &self.offsets
    }

    /// Current opacity in [0, 1].
    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    /// Ticks left before the burst is removed.
    pub fn life(&self) -> u32 {
        self.life
    }

    /// Ages the burst by one tick. Returns `false` once its life is over.
    pub fn age(&mut self, fade: f32) -> bool {
        self.opacity *= fade;
        self.life = self.life.saturating_sub(1);
        self.life > 0
    }
}

/// All live bursts, each paired with its scene handle `H`.
pub struct Explosions<H> {
    config: ExplosionConfig,
    bursts: Vec<(ExplosionBurst, H)>,
}

impl<H> Explosions<H> {
    /// Creates an empty set.
    pub fn new(config: ExplosionConfig) -> Self {
        Explosions {
            config,
            bursts: Vec::new(),
        }
    }

    /// Number of live bursts.
    pub fn len(&self) -> usize {
        self.bursts.len()
    }

    /// Whether no burst is alive.
    pub fn is_empty(&self) -> bool {
        self.bursts.is_empty()
    }

    /// Live bursts, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &ExplosionBurst> {
        self.bursts.iter().map(|(b, _)| b)
    }

    /// Creates a burst at `position` and hands it to the scene.
    pub fn spawn<R, S>(&mut self, position: Vec3, rng: &mut R, scene: &mut S)
    where
        R: Rng,
        S: SpaceScene<Burst = H>,
    {
        let burst = ExplosionBurst::new(position, &self.config, rng);
        let handle = scene.spawn_burst(&burst);
        self.bursts.push((burst, handle));
    }

    /// Ages every burst by one tick, releasing those whose life ran out.
    ///
    /// Returns the number of bursts released.
    pub fn advance<S>(&mut self, scene: &mut S) -> usize
    where
        S: SpaceScene<Burst = H>,
    {
        let fade = self.config.fade;
        let before = self.bursts.len();
        let mut live = Vec::with_capacity(before);

        for (mut burst, mut handle) in self.bursts.drain(..) {
            if burst.age(fade) {
                scene.fade_burst(&mut handle, burst.opacity());
                live.push((burst, handle));
            } else {
                scene.release_burst(handle);
            }
        }

        self.bursts = live;
        before - self.bursts.len()
    }
}
