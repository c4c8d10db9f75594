//! Procedural meshes and line sets the renderer does not ship.

pub use self::grid::{axes_lines, grid_lines, GridLine};
pub use self::torus_knot::{torus_knot, unit_torus_knot};

mod grid;
mod torus_knot;
