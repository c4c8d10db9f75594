//! The update context of the space-flight scene.

use crate::config::SpaceConfig;
use crate::input::{BoostControl, SpeedState};
use crate::loader::{spawn_model, PendingAsset};
use crate::scene::SpaceScene;
use crate::space::explosion::Explosions;
use crate::space::pools::{AsteroidField, PlanetPool, Starfield};
use crate::space::rocket::{RocketSlot, RocketState};
use glamx::Vec3;
use kiss3d::event::WindowEvent;
use kiss3d::procedural::RenderMesh;
use rand::Rng;

/// What happened during one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Planets teleported back to the far range.
    pub planets_recycled: usize,
    /// Asteroids teleported back to the far range.
    pub asteroids_recycled: usize,
    /// New explosion bursts.
    pub bursts_spawned: usize,
    /// Bursts whose life ran out.
    pub bursts_released: usize,
    /// Whether the rocket model appeared this tick.
    pub rocket_arrived: bool,
}

/// All mutable state of the space scene.
///
/// `H` is the scene handle type of an explosion burst, see
/// [`SpaceScene::Burst`].
pub struct SpaceWorld<H> {
    config: SpaceConfig,
    speed: SpeedState,
    boost: BoostControl,
    planets: PlanetPool,
    asteroids: AsteroidField,
    starfield: Starfield,
    explosions: Explosions<H>,
    rocket: RocketSlot,
    ticks: u64,
    triggered: Vec<Vec3>,
}

impl<H> SpaceWorld<H> {
    /// Builds the pools. The rocket starts absent, see
    /// [`load_rocket`](Self::load_rocket).
    pub fn new<R: Rng>(config: SpaceConfig, rng: &mut R) -> Self {
        let planets = PlanetPool::new(&config.planets);
        let asteroids = AsteroidField::new(&config.asteroids, rng);
        let starfield = Starfield::new(&config.starfield, rng);

        log::info!(
            "space world: {} planets, {} asteroids, {} stars",
            planets.planets().len(),
            asteroids.asteroids().len(),
            starfield.points().len()
        );

        SpaceWorld {
            speed: SpeedState::new(config.speed),
            boost: BoostControl::new(),
            explosions: Explosions::new(config.explosions),
            rocket: RocketSlot::Absent,
            ticks: 0,
            triggered: Vec::new(),
            planets,
            asteroids,
            starfield,
            config,
        }
    }

    /// Starts loading the configured rocket model in the background.
    pub fn load_rocket(&mut self) {
        let pending = spawn_model(self.config.rocket.model_path.clone());
        self.await_rocket(pending);
    }

    /// Uses `pending` as the source of the rocket model.
    pub fn await_rocket(&mut self, pending: PendingAsset<RenderMesh>) {
        self.rocket = RocketSlot::Loading(pending);
    }

    /// Feeds a window event to the boost control.
    pub fn handle_event(&mut self, event: &WindowEvent) -> bool {
        self.boost.handle_event(event, &mut self.speed)
    }

    /// Advances the whole scene by one tick.
    pub fn tick<R, S>(&mut self, rng: &mut R, scene: &mut S) -> TickReport
    where
        R: Rng,
        S: SpaceScene<Burst = H>,
    {
        let speed = self.speed.value();
        let mut report = TickReport::default();

        self.starfield.advance();
        report.planets_recycled = self.planets.advance(speed, rng);
        report.bursts_released = self.explosions.advance(scene);

        self.triggered.clear();
        report.asteroids_recycled = self.asteroids.advance(speed, rng, &mut self.triggered);
        for &at in &self.triggered {
            self.explosions.spawn(at, rng, scene);
        }
        report.bursts_spawned = self.triggered.len();

        report.rocket_arrived = self.rocket.update(&self.config.rocket, scene);

        self.ticks += 1;
        report
    }

    /// Scene configuration.
    pub fn config(&self) -> &SpaceConfig {
        &self.config
    }

    /// Speed scalar.
    pub fn speed(&self) -> &SpeedState {
        &self.speed
    }

    /// Mutable speed scalar, for driving it without window events.
    pub fn speed_mut(&mut self) -> &mut SpeedState {
        &mut self.speed
    }

    /// Planets pool.
    pub fn planets(&self) -> &PlanetPool {
        &self.planets
    }

    /// Asteroid field.
    pub fn asteroids(&self) -> &AsteroidField {
        &self.asteroids
    }

    /// Mutable asteroid field.
    pub fn asteroids_mut(&mut self) -> &mut AsteroidField {
        &mut self.asteroids
    }

    /// Background stars.
    pub fn starfield(&self) -> &Starfield {
        &self.starfield
    }

    /// Live explosion bursts.
    pub fn explosions(&self) -> &Explosions<H> {
        &self.explosions
    }

    /// The rocket, if loaded.
    pub fn rocket(&self) -> Option<&RocketState> {
        self.rocket.rocket()
    }

    /// The rocket slot, including its loading state.
    pub fn rocket_slot(&self) -> &RocketSlot {
        &self.rocket
    }

    /// Number of ticks run so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::LoadError;
    use crate::scene::{HeadlessBurst, HeadlessScene};
    use approx::assert_relative_eq;
    use kiss3d::event::{Action, Key, Modifiers};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn world(config: SpaceConfig) -> (SpaceWorld<HeadlessBurst>, StdRng) {
        let mut rng = StdRng::seed_from_u64(2024);
        (SpaceWorld::new(config, &mut rng), rng)
    }

    #[test]
    fn boost_key_changes_speed_read_by_motion() {
        let (mut world, mut rng) = world(SpaceConfig::default().with_asteroid_count(0));
        let mut scene = HeadlessScene::new();

        let press = WindowEvent::Key(Key::Space, Action::Press, Modifiers::empty());
        let release = WindowEvent::Key(Key::Space, Action::Release, Modifiers::empty());
        let other = WindowEvent::Key(Key::A, Action::Press, Modifiers::empty());

        assert!(!world.handle_event(&other));
        assert!(world.handle_event(&press));
        assert!(world.handle_event(&press));
        assert_relative_eq!(world.speed().value(), 0.40);

        let z0 = world.planets().planets()[0].position.z;
        world.tick(&mut rng, &mut scene);
        assert_relative_eq!(world.planets().planets()[0].position.z, z0 + 0.40);

        assert!(world.handle_event(&release));
        assert_relative_eq!(world.speed().value(), 0.25);
    }

    #[test]
    fn asteroid_near_threshold_recycles_and_explodes() {
        let (mut world, mut rng) = world(
            SpaceConfig::default()
                .with_asteroid_count(1)
                .with_explosion_chance(1.0),
        );
        let mut scene = HeadlessScene::new();
        world.asteroids_mut().asteroids_mut()[0].position = Vec3::new(10.0, 20.0, -30.4);

        // 2 × 0.25 brings it to -29.9, past the threshold.
        let report = world.tick(&mut rng, &mut scene);
        assert_eq!(report.asteroids_recycled, 1);
        assert_eq!(report.bursts_spawned, 1);
        assert_eq!(scene.live_bursts(), 1);

        let burst = world.explosions().iter().next().cloned().unwrap();
        assert_relative_eq!(burst.position().z, -34.9, epsilon = 1e-4);
        assert_relative_eq!(burst.position().x, 10.0);

        let a = world.asteroids().asteroids()[0];
        assert!(world.config().asteroids.pool.spawn.contains(a.position));
    }

    #[test]
    fn new_bursts_are_aged_from_the_next_tick() {
        let (mut world, mut rng) = world(
            SpaceConfig::default()
                .with_asteroid_count(1)
                .with_explosion_chance(1.0),
        );
        let mut scene = HeadlessScene::new();
        world.asteroids_mut().asteroids_mut()[0].position = Vec3::new(0.0, 0.0, -30.1);
        world.tick(&mut rng, &mut scene);

        let life = |w: &SpaceWorld<HeadlessBurst>| w.explosions().iter().next().map(|b| b.life());
        assert_eq!(life(&world), Some(24));

        world.tick(&mut rng, &mut scene);
        assert_eq!(life(&world), Some(23));
    }

    #[test]
    fn long_run_keeps_invariants() {
        let (mut world, mut rng) = world(SpaceConfig::default());
        let mut scene = HeadlessScene::new();
        let mut spawned = 0;
        let mut released = 0;

        for tick in 0..4000 {
            if tick % 300 == 0 {
                world.speed_mut().press();
            }
            if tick % 450 == 0 {
                world.speed_mut().release();
            }

            let report = world.tick(&mut rng, &mut scene);
            spawned += report.bursts_spawned;
            released += report.bursts_released;

            let speed = world.speed().value();
            assert!((0.25..=1.0).contains(&speed));
            assert_eq!(scene.live_bursts(), world.explosions().len());
            assert!(world.explosions().iter().all(|b| b.life() > 0));
        }

        assert!(spawned > 0);
        assert_eq!(spawned - released, world.explosions().len());
        assert_eq!(world.ticks(), 4000);
    }

    #[test]
    fn failed_rocket_load_does_not_disturb_the_loop() {
        let (mut world, mut rng) = world(SpaceConfig::default().with_asteroid_count(4));
        let mut scene = HeadlessScene::new();
        world.await_rocket(PendingAsset::resolved(
            "rocket.glb",
            Err(LoadError::EmptyModel("rocket.glb".into())),
        ));

        for _ in 0..200 {
            let report = world.tick(&mut rng, &mut scene);
            assert!(!report.rocket_arrived);
            assert!(world.rocket().is_none());
        }
        assert_eq!(scene.rockets_attached(), 0);
    }

    #[test]
    fn missing_rocket_file_is_swallowed() {
        let (mut world, mut rng) = world(
            SpaceConfig::default()
                .with_asteroid_count(0)
                .with_rocket_model("no/such/rocket.glb"),
        );
        let mut scene = HeadlessScene::new();
        world.load_rocket();

        let deadline = std::time::Instant::now() + std::time::Duration::from_secs(10);
        while world.rocket_slot().is_loading() && std::time::Instant::now() < deadline {
            world.tick(&mut rng, &mut scene);
            std::thread::sleep(std::time::Duration::from_millis(1));
        }

        assert!(!world.rocket_slot().is_loading());
        assert!(world.rocket().is_none());
    }
}
