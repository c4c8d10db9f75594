//! The seam between the animation and the scene graph.
//!
//! [`SpaceScene`] is what the update context asks of a renderer.
//! [`Stage`] implements it on top of kiss3d scene nodes, [`HeadlessScene`]
//! only counts calls and is used to run the animation without a window.

pub use self::headless::{HeadlessBurst, HeadlessScene};
pub use self::space_scene::SpaceScene;
pub use self::stage::{stage_window, Stage};

mod headless;
mod space_scene;
mod stage;
