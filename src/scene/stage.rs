use super::SpaceScene;
use crate::color::{self, Color};
use crate::config::{ExplosionConfig, StagingConfig};
use crate::space::{ExplosionBurst, RocketState, SpaceWorld};
use kiss3d::prelude::*;
use kiss3d::procedural::RenderMesh;

/// Builds a point-cloud node: vertices only, no surface.
fn point_cloud(
    parent: &mut SceneNode3d,
    points: Vec<Vec3>,
    size: f32,
    color: Color,
) -> SceneNode3d {
    let mesh = Rc::new(RefCell::new(GpuMesh3d::new(
        points,
        Vec::new(),
        None,
        None,
        false,
    )));

    parent
        .add_mesh(mesh, Vec3::splat(1.0))
        .set_points_size(size, false)
        .set_points_color(Some(color))
        .set_surface_rendering_activation(false)
}

/// Sets the background and ambient term of the window.
pub fn stage_window(window: &mut Window, config: &StagingConfig) {
    window.set_background_color(config.background);
    window.set_ambient(config.ambient_intensity);
}

/// The kiss3d side of the space scene.
///
/// Owns one node per pool member and mirrors the world transforms into them
/// with [`sync`](Self::sync).
pub struct Stage {
    root: SceneNode3d,
    stars: SceneNode3d,
    planets: Vec<SceneNode3d>,
    asteroids: Vec<SceneNode3d>,
    rocket: Option<SceneNode3d>,
    sparks: ExplosionConfig,
}

impl Stage {
    /// Creates the nodes of every pool member and the key light under `scene`.
    pub fn build<H>(scene: &mut SceneNode3d, world: &SpaceWorld<H>) -> Stage {
        let config = world.config();
        let mut root = scene.add_group();

        let staging = &config.staging;
        let to_origin = (staging.at - staging.key_position).normalize_or_zero();
        root.add_light(
            Light::directional(to_origin)
                .with_color(staging.key_light)
                .with_intensity(staging.key_intensity),
        )
        .set_position(staging.key_position);

        let starfield = &config.starfield;
        let stars = point_cloud(
            &mut root,
            world.starfield().points().to_vec(),
            starfield.point_size,
            color::with_alpha(color::STAR, starfield.opacity),
        );

        let planets = world
            .planets()
            .planets()
            .iter()
            .map(|p| {
                root.add_sphere_with_subdiv(p.radius, 48, 48)
                    .set_color(p.color)
                    .set_roughness(0.9)
                    .set_metallic(0.1)
                    .set_position(p.position)
            })
            .collect();

        // Coarse spheres read as rocks.
        let asteroids = world
            .asteroids()
            .asteroids()
            .iter()
            .map(|a| {
                root.add_sphere_with_subdiv(a.radius, 6, 5)
                    .set_color(color::ROCK)
                    .set_roughness(1.0)
                    .set_metallic(0.2)
                    .set_position(a.position)
                    .set_rotation(a.orientation())
            })
            .collect();

        log::debug!("space stage built");

        Stage {
            root,
            stars,
            planets,
            asteroids,
            rocket: None,
            sparks: config.explosions,
        }
    }

    /// Copies the pool transforms of `world` into the scene nodes.
    pub fn sync<H>(&mut self, world: &SpaceWorld<H>) {
        self.stars.set_rotation(world.starfield().orientation());

        for (node, planet) in self.planets.iter_mut().zip(world.planets().planets()) {
            node.set_position(planet.position);
        }

        for (node, asteroid) in self.asteroids.iter_mut().zip(world.asteroids().asteroids()) {
            node.set_position(asteroid.position);
            node.set_rotation(asteroid.orientation());
        }

        if let (Some(node), Some(rocket)) = (self.rocket.as_mut(), world.rocket()) {
            node.set_position(rocket.position());
            node.set_rotation(rocket.orientation());
        }
    }
}

impl SpaceScene for Stage {
    type Burst = SceneNode3d;

    fn spawn_burst(&mut self, burst: &ExplosionBurst) -> SceneNode3d {
        let alpha = self.sparks.base_alpha;
        point_cloud(
            &mut self.root,
            burst.offsets().to_vec(),
            self.sparks.point_size,
            color::with_alpha(self.sparks.color, alpha),
        )
        .set_position(burst.position())
    }

    fn fade_burst(&mut self, burst: &mut SceneNode3d, opacity: f32) {
        let alpha = self.sparks.base_alpha * opacity;
        burst.set_points_color(Some(color::with_alpha(self.sparks.color, alpha)));
    }

    fn release_burst(&mut self, mut burst: SceneNode3d) {
        // Dropping the last handle frees the GPU buffers.
        burst.remove();
    }

    fn attach_rocket(&mut self, model: RenderMesh, rocket: &RocketState) {
        let node = self
            .root
            .add_render_mesh(model, Vec3::splat(rocket.scale()))
            .set_color(color::HULL)
            .set_position(rocket.position())
            .set_rotation(rocket.orientation());
        self.rocket = Some(node);
    }
}
