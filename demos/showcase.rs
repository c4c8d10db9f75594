//! Primitives, lights and helpers around a textured torus knot.
//!
//! Textures are read from `textures/torus.png` and `textures/ground.png`.
use kiss3d::prelude::*;
use starflight::prelude::*;

#[kiss3d::main]
async fn main() {
    env_logger::init();

    let config = ShowcaseConfig::default();
    let mut window = Window::new("Starflight: showcase").await;
    window.set_background_color(config.background);
    window.set_ambient(config.ambient_intensity);

    let mut camera = OrbitCamera3d::new(config.eye, Vec3::ZERO);
    let mut scene = SceneNode3d::empty();
    let mut clock = FixedStepClock::new(60);
    let mut viewport = Viewport::new(window.width(), window.height(), window.scale_factor());
    let mut showcase = Showcase::build(&mut scene, config);

    while window.render_3d(&mut scene, &mut camera).await {
        for event in window.events().iter() {
            viewport.handle_event(&event.value, window.scale_factor());
        }

        for _ in 0..clock.ticks_due() {
            showcase.tick();
        }

        showcase.draw_helpers(&mut window);
    }
}
