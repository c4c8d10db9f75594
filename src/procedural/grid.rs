use crate::color::{self, Color};
use glamx::Vec3;

/// A line segment of a helper.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridLine {
    /// First end.
    pub from: Vec3,
    /// Second end.
    pub to: Vec3,
    /// Draw color.
    pub color: Color,
}

/// Lines of a square grid lying on the `y = 0` plane, centered at the origin.
///
/// The grid spans `[-half_size, half_size]` on both the x and z axes and is
/// cut into `divisions` cells per side. The two lines through the origin
/// (present when `divisions` is even) use [`color::GRID_MAJOR`], the others
/// [`color::GRID_MINOR`].
///
/// # Returns
/// `2 * (divisions + 1)` lines, none if `divisions` is zero.
pub fn grid_lines(half_size: f32, divisions: u32) -> Vec<GridLine> {
    if divisions == 0 {
        return Vec::new();
    }

    let step = 2.0 * half_size / divisions as f32;
    let mut lines = Vec::with_capacity(2 * (divisions as usize + 1));

    for i in 0..=divisions {
        let k = -half_size + i as f32 * step;
        let color = if 2 * i == divisions {
            color::GRID_MAJOR
        } else {
            color::GRID_MINOR
        };

        lines.push(GridLine {
            from: Vec3::new(k, 0.0, -half_size),
            to: Vec3::new(k, 0.0, half_size),
            color,
        });
        lines.push(GridLine {
            from: Vec3::new(-half_size, 0.0, k),
            to: Vec3::new(half_size, 0.0, k),
            color,
        });
    }

    lines
}

/// The three positive half-axes of length `len`, colored x red, y green and z blue.
pub fn axes_lines(len: f32) -> [GridLine; 3] {
    [
        (Vec3::X, color::AXIS_X),
        (Vec3::Y, color::AXIS_Y),
        (Vec3::Z, color::AXIS_Z),
    ]
    .map(|(axis, color)| GridLine {
        from: Vec3::ZERO,
        to: axis * len,
        color,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn ten_by_ten_grid() {
        let lines = grid_lines(5.0, 10);

        assert_eq!(lines.len(), 22);
        assert_eq!(
            lines.iter().filter(|l| l.color == color::GRID_MAJOR).count(),
            2
        );
        for l in &lines {
            assert_relative_eq!(l.from.y, 0.0);
            assert_relative_eq!((l.to - l.from).length(), 10.0, epsilon = 1.0e-5);
        }
    }

    #[test]
    fn odd_divisions_have_no_center_line() {
        let lines = grid_lines(1.0, 3);
        assert_eq!(lines.len(), 8);
        assert!(lines.iter().all(|l| l.color == color::GRID_MINOR));
    }

    #[test]
    fn zero_divisions_draw_nothing() {
        assert!(grid_lines(5.0, 0).is_empty());
    }

    #[test]
    fn axes_point_along_positive_axes() {
        let [x, y, z] = axes_lines(2.0);
        assert_eq!(x.to, Vec3::new(2.0, 0.0, 0.0));
        assert_eq!(y.to, Vec3::new(0.0, 2.0, 0.0));
        assert_eq!(z.to, Vec3::new(0.0, 0.0, 2.0));
        assert_eq!(x.color, color::AXIS_X);
    }
}
