//! Palette used by both scenes.
//!
//! Colors are RGBA with f32 components in [0.0, 1.0], the same type kiss3d
//! takes. Most of them are written as `0xRRGGBB` literals and converted with
//! [`hex`].
//!
//! # Example
//! ```no_run
//! use starflight::color;
//!
//! let orange = color::hex(0xff8844);
//! assert_eq!(orange.r, 1.0);
//! ```

pub use rgb::Rgba;

/// The color type shared with kiss3d.
pub type Color = Rgba<f32>;

/// Converts a `0xRRGGBB` literal to an opaque [`Color`].
///
/// Bits above the lowest 24 are ignored.
pub const fn hex(code: u32) -> Color {
    Color::new(
        ((code >> 16) & 0xff) as f32 / 255.0,
        ((code >> 8) & 0xff) as f32 / 255.0,
        (code & 0xff) as f32 / 255.0,
        1.0,
    )
}

/// Returns `color` with its alpha channel replaced by `alpha`.
#[inline]
pub fn with_alpha(color: Color, alpha: f32) -> Color {
    Color::new(color.r, color.g, color.b, alpha)
}

/// Deep blue-black used as the scene background.
pub const SPACE_BACKGROUND: Color = hex(0x111122);
/// Cold moonlight tint of the key light.
pub const MOONLIGHT: Color = hex(0x99ccff);
/// Starfield points.
pub const STAR: Color = hex(0xffffff);
/// Asteroid rock.
pub const ROCK: Color = hex(0x777777);
/// Explosion sparks.
pub const SPARK: Color = hex(0xffaa33);
/// Rocket hull, used when the model carries no material color.
pub const HULL: Color = hex(0xd8d8e0);

/// Blue planet.
pub const PLANET_BLUE: Color = hex(0x2244ff);
/// Orange planet.
pub const PLANET_ORANGE: Color = hex(0xff8844);
/// Green planet.
pub const PLANET_GREEN: Color = hex(0x44ffaa);

/// Grid helper main lines.
pub const GRID_MAJOR: Color = hex(0x888888);
/// Grid helper secondary lines.
pub const GRID_MINOR: Color = hex(0x444444);
/// Light helper markers.
pub const HELPER: Color = hex(0xffff66);
/// Axes helper, x axis.
pub const AXIS_X: Color = hex(0xff0000);
/// Axes helper, y axis.
pub const AXIS_Y: Color = hex(0x00ff00);
/// Axes helper, z axis.
pub const AXIS_Z: Color = hex(0x0000ff);
