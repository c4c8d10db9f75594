//! The space-flight animation.
//!
//! Hold the space bar to fly faster. The rocket model is read from
//! `models/rocket.glb`; without it the scene runs without a rocket.
use kiss3d::prelude::*;
use starflight::prelude::*;

#[kiss3d::main]
async fn main() {
    env_logger::init();

    let config = SpaceConfig::default();
    let mut window = Window::new("Starflight").await;
    stage_window(&mut window, &config.staging);

    let mut camera = OrbitCamera3d::new(config.staging.eye, config.staging.at);
    let mut scene = SceneNode3d::empty();
    let mut clock = FixedStepClock::new(config.staging.ticks_per_second);
    let mut viewport = Viewport::new(window.width(), window.height(), window.scale_factor());

    let mut rng = rand::rng();
    let mut world = SpaceWorld::new(config, &mut rng);
    world.load_rocket();
    let mut stage = Stage::build(&mut scene, &world);

    while window.render_3d(&mut scene, &mut camera).await {
        for event in window.events().iter() {
            world.handle_event(&event.value);
            if viewport.handle_event(&event.value, window.scale_factor()) {
                log::trace!("aspect now {:.3}", viewport.aspect());
            }
        }

        for _ in 0..clock.ticks_due() {
            let report = world.tick(&mut rng, &mut stage);
            if report.rocket_arrived {
                log::info!("rocket joined after {} ticks", world.ticks());
            }
        }

        stage.sync(&world);
    }
}
