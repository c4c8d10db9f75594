//! A static scene showing the renderer primitives, lights and helpers.
//!
//! Four primitives and a textured torus knot spin above a textured ground
//! quad. A point light and a directional light are marked by small spheres,
//! and the axes and a grid are drawn as lines every frame.

pub use self::textures::TextureQueue;

mod textures;

use crate::color::{self, Color};
use crate::config::ShowcaseConfig;
use crate::loader::{spawn_texture, TextureData};
use crate::procedural::{axes_lines, grid_lines, torus_knot, GridLine};
use kiss3d::prelude::*;
use std::f32::consts::FRAC_PI_2;

/// Objects that can receive a texture.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Textured {
    /// The torus knot.
    Knot,
    /// The ground quad.
    Ground,
}

/// Line width of the helpers, in pixels.
const HELPER_WIDTH: f32 = 2.0;

/// The showcase scene and its per-tick animation.
pub struct Showcase {
    config: ShowcaseConfig,
    primitives: Vec<SceneNode3d>,
    knot: SceneNode3d,
    ground: SceneNode3d,
    textures: TextureQueue<Textured>,
    helpers: Vec<GridLine>,
}

impl Showcase {
    /// Populates `scene` and starts loading the textures.
    pub fn build(scene: &mut SceneNode3d, config: ShowcaseConfig) -> Showcase {
        let palette: [Color; 4] = [
            color::PLANET_BLUE,
            color::PLANET_ORANGE,
            color::PLANET_GREEN,
            color::HULL,
        ];

        let mut primitives = vec![
            scene.add_cube(1.0, 1.0, 1.0),
            scene.add_sphere(0.6),
            scene.add_cone(0.6, 1.2),
            scene.add_cylinder(0.5, 1.2),
        ];
        for (i, (node, color)) in primitives.iter_mut().zip(palette).enumerate() {
            node.set_color(color)
                .set_position(Vec3::new(-4.5 + 3.0 * i as f32, 1.0, 0.0));
        }

        let (p, q) = config.knot_windings;
        let mesh = torus_knot(
            p,
            q,
            config.knot_radius,
            config.knot_tube,
            config.knot_tubular_segments,
            config.knot_radial_segments,
        );
        let knot = scene
            .add_render_mesh(mesh, Vec3::splat(config.knot_scale))
            .set_color(color::SPARK)
            .set_position(Vec3::new(0.0, 4.5, -3.0));

        // kiss3d quads lie in the xy plane.
        let side = 2.0 * config.grid_half_size;
        let ground = scene
            .add_quad(side, side, 1, 1)
            .set_color(color::GRID_MINOR)
            .set_rotation(Quat::from_rotation_x(-FRAC_PI_2))
            .set_position(Vec3::new(0.0, -0.01, 0.0));

        scene
            .add_light(Light::point(60.0).with_intensity(4.0))
            .set_position(config.point_light);
        scene
            .add_sphere(0.15)
            .set_color(color::HELPER)
            .set_position(config.point_light);

        let sun = config.sun_direction.normalize_or_zero();
        scene.add_light(Light::directional(sun).with_intensity(1.5));
        scene
            .add_sphere(0.25)
            .set_color(color::HELPER)
            .set_position(-sun * config.grid_half_size);

        let mut textures = TextureQueue::new();
        textures.request(Textured::Knot, spawn_texture(&config.knot_texture));
        textures.request(Textured::Ground, spawn_texture(&config.ground_texture));

        let mut helpers = grid_lines(config.grid_half_size, config.grid_divisions);
        helpers.extend(axes_lines(config.grid_half_size * 0.5));

        log::debug!("showcase built with {} helper lines", helpers.len());

        Showcase {
            config,
            primitives,
            knot,
            ground,
            textures,
            helpers,
        }
    }

    /// Applies the textures that finished loading and spins the objects by
    /// one tick.
    pub fn tick(&mut self) {
        let knot = &mut self.knot;
        let ground = &mut self.ground;
        self.textures.poll(|target, data: TextureData| {
            let node = match target {
                Textured::Knot => &mut *knot,
                Textured::Ground => &mut *ground,
            };
            let TextureData { name, image } = data;
            let mut image = Some(image);
            let texture = TextureManager::get_global_manager(|tm| {
                image.take().map(|image| tm.add_image(image, &name))
            });

            if let Some(texture) = texture {
                node.set_color(color::STAR).set_texture(texture);
                log::info!("texture {} applied to {:?}", name, target);
            }
        });

        let spin = self.config.spin;
        let turn = Quat::from_rotation_y(spin);
        for node in &mut self.primitives {
            node.rotate(turn);
        }
        self.knot
            .rotate(Quat::from_rotation_x(spin) * Quat::from_rotation_y(spin * 0.5));
    }

    /// Draws the axes and the grid for the next frame.
    pub fn draw_helpers(&self, window: &mut Window) {
        for line in &self.helpers {
            window.draw_line(line.from, line.to, line.color, HELPER_WIDTH, false);
        }
    }
}
