/*!
# Starflight

A small space-flight animation built on [kiss3d](https://docs.rs/kiss3d).

The camera hangs in front of a slowly turning starfield. Three planets and a
field of tumbling asteroids stream towards it; whatever passes the camera is
teleported back into the distance, and some asteroids burst into a shower of
sparks when they do. A rocket model, loaded in the background from a glTF
file, cruises ahead. Holding the space bar speeds everything up.

The crate keeps the simulation apart from the renderer:

* [`space::SpaceWorld`] owns every pool and advances them one tick at a time.
* [`scene::SpaceScene`] is the only thing the world knows about the renderer.
  [`scene::Stage`] implements it with kiss3d nodes, [`scene::HeadlessScene`]
  with plain counters for tests.
* [`clock::TickSource`] decides how many ticks run per rendered frame.

A second scene, [`showcase::Showcase`], displays the primitives, lights and
helpers of the renderer around a textured torus knot.

## Example

```no_run
use starflight::prelude::*;

#[kiss3d::main]
async fn main() {
    let config = SpaceConfig::default();
    let mut window = Window::new("starflight").await;
    stage_window(&mut window, &config.staging);

    let mut camera = OrbitCamera3d::new(config.staging.eye, config.staging.at);
    let mut scene = SceneNode3d::empty();
    let mut rng = rand::rng();
    let mut world = SpaceWorld::new(config, &mut rng);
    world.load_rocket();
    let mut stage = Stage::build(&mut scene, &world);

    while window.render_3d(&mut scene, &mut camera).await {
        world.tick(&mut rng, &mut stage);
        stage.sync(&world);
    }
}
```

## Running

```text
cargo run --bin space_flight
cargo run --bin showcase
```

Both binaries read assets relative to the working directory: `models/rocket.glb`
for the rocket, `textures/torus.png` and `textures/ground.png` for the showcase.
Missing files are logged and skipped.
*/

pub mod clock;
pub mod color;
pub mod config;
pub mod input;
pub mod loader;
pub mod procedural;
pub mod scene;
pub mod showcase;
pub mod space;
pub mod viewport;

pub mod prelude {
    pub use crate::clock::{FixedStepClock, TickSource};
    pub use crate::config::{ShowcaseConfig, SpaceConfig};
    pub use crate::input::{BoostControl, SpeedState};
    pub use crate::scene::{stage_window, SpaceScene, Stage};
    pub use crate::showcase::Showcase;
    pub use crate::space::SpaceWorld;
    pub use crate::viewport::Viewport;
    pub use kiss3d::prelude::*;
}
