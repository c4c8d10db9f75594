//! The space-flight scene: pools, motion rules, explosions and the rocket.
//!
//! Everything here is independent of the renderer. The scene graph is only
//! reached through the [`SpaceScene`](crate::scene::SpaceScene) trait, so the
//! whole animation can run headless.

pub use self::explosion::{ExplosionBurst, Explosions};
pub use self::pools::{euler_xyz, Asteroid, AsteroidField, Planet, PlanetPool, Starfield};
pub use self::rocket::{RocketSlot, RocketState};
pub use self::world::{SpaceWorld, TickReport};

mod explosion;
mod pools;
mod rocket;
mod world;
