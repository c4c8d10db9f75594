use glamx::{Vec2, Vec3};
use kiss3d::procedural::{IndexBuffer, RenderMesh};
use std::f32::consts::TAU;

/// Point of the knot centerline at parameter `u`.
fn knot_point(u: f32, p: u32, q: u32, radius: f32) -> Vec3 {
    let quop = q as f32 / p as f32 * u;
    let cs = quop.cos();

    Vec3::new(
        radius * (2.0 + cs) * 0.5 * u.cos(),
        radius * (2.0 + cs) * 0.5 * u.sin(),
        radius * quop.sin() * 0.5,
    )
}

/// Generates a `(p, q)` torus knot tube.
///
/// The centerline winds `p` times around the axis of revolution and `q` times
/// around the interior circle of the torus. A tube of radius `tube` is swept
/// along it.
///
/// # Arguments
/// * `p` - Windings around the axis of revolution, at least 1
/// * `q` - Windings around the interior circle
/// * `radius` - Radius of the underlying torus
/// * `tube` - Radius of the swept tube
/// * `tubular_segments` - Subdivisions along the centerline, at least 3
/// * `radial_segments` - Subdivisions around the tube, at least 3
///
/// # Returns
/// A `RenderMesh` with `(tubular_segments + 1) * (radial_segments + 1)`
/// vertices, normals, UVs and `2 * tubular_segments * radial_segments`
/// triangles. The seam vertices are duplicated so the texture wraps once.
///
/// # Example
/// ```no_run
/// # use starflight::procedural::torus_knot;
/// let knot = torus_knot(2, 3, 10.0, 3.0, 128, 16);
/// assert_eq!(knot.num_triangles(), 2 * 128 * 16);
/// ```
pub fn torus_knot(
    p: u32,
    q: u32,
    radius: f32,
    tube: f32,
    tubular_segments: u32,
    radial_segments: u32,
) -> RenderMesh {
    let p = p.max(1);
    let tubular_segments = tubular_segments.max(3);
    let radial_segments = radial_segments.max(3);

    let nverts = ((tubular_segments + 1) * (radial_segments + 1)) as usize;
    let mut coords = Vec::with_capacity(nverts);
    let mut normals = Vec::with_capacity(nverts);
    let mut uvs = Vec::with_capacity(nverts);

    for j in 0..=radial_segments {
        let v = j as f32 / radial_segments as f32;
        let (sv, cv) = (v * TAU).sin_cos();

        for i in 0..=tubular_segments {
            let u = i as f32 / tubular_segments as f32 * p as f32 * TAU;

            // Frenet-like frame from a finite difference of the centerline.
            let p1 = knot_point(u, p, q, radius);
            let p2 = knot_point(u + 0.01, p, q, radius);
            let tangent = p2 - p1;
            let binormal = tangent.cross(p2 + p1).normalize_or_zero();
            let normal = binormal.cross(tangent).normalize_or_zero();

            let vertex = p1 + normal * (-tube * cv) + binormal * (tube * sv);
            coords.push(vertex);
            normals.push((vertex - p1).normalize_or_zero());
            uvs.push(Vec2::new(i as f32 / tubular_segments as f32, v));
        }
    }

    let row = tubular_segments + 1;
    let mut indices = Vec::with_capacity((2 * tubular_segments * radial_segments) as usize);

    for j in 1..=radial_segments {
        for i in 1..=tubular_segments {
            let a = row * (j - 1) + (i - 1);
            let b = row * j + (i - 1);
            let c = row * j + i;
            let d = row * (j - 1) + i;

            indices.push([a, b, d]);
            indices.push([b, c, d]);
        }
    }

    RenderMesh::new(
        coords,
        Some(normals),
        Some(uvs),
        Some(IndexBuffer::Unified(indices)),
    )
}

/// Generates a `(2, 3)` trefoil knot of torus radius 1 and tube radius 0.3.
///
/// # Arguments
/// * `tubular_segments` - Subdivisions along the centerline
/// * `radial_segments` - Subdivisions around the tube
pub fn unit_torus_knot(tubular_segments: u32, radial_segments: u32) -> RenderMesh {
    torus_knot(2, 3, 1.0, 0.3, tubular_segments, radial_segments)
}
