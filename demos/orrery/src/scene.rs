/// Orrery — static solar-system scene.
///
/// Scene population runs once at init: sun, four planets with orbit
/// rings, a 400-star particle field, two point lights. The per-tick
/// update only advances each planet's spin angle by its fixed
/// increment; nothing reads the angles back. Camera movement comes
/// from the orbit controls and the scroll dolly, both outside this
/// module.

use glam::Vec3;
use std::f32::consts::FRAC_PI_2;

use stellar_engine::*;
use stellar_engine::api::app::AppConfig;
use stellar_engine::assets::manifest::MaterialHandles;
use stellar_engine::input::queue::InputQueue;

use crate::bodies::{self, PLANET_COUNT, PLANETS};

/// Frame-info event kind sent to the host each tick.
const EVENT_FRAME_INFO: f32 = 1.0;

const TEXTURE_MANIFEST: &str = include_str!("../textures.json");

pub struct Orrery {
    planet_ids: [Option<NodeId>; PLANET_COUNT],
}

impl Orrery {
    pub fn new() -> Self {
        Self {
            planet_ids: [None; PLANET_COUNT],
        }
    }

    /// Request all scene textures. A manifest that fails to parse (or
    /// images that never arrive) leaves bodies flat-colored; nothing
    /// here blocks scene construction.
    fn load_textures(ctx: &mut EngineContext) -> std::collections::HashMap<String, MaterialHandles> {
        match TextureManifest::from_json(TEXTURE_MANIFEST) {
            Ok(manifest) => manifest.register(&mut ctx.textures),
            Err(err) => {
                log::warn!("texture manifest unreadable, rendering untextured: {err}");
                Default::default()
            }
        }
    }

    fn spawn_sun(ctx: &mut EngineContext, material: Option<&MaterialHandles>) {
        let mut mesh = MeshComponent::sphere(bodies::SUN_RADIUS, bodies::SPHERE_SEGMENTS);
        if let Some(m) = material {
            mesh = mesh.with_map(m.map);
        }
        let id = ctx.next_id();
        ctx.scene.add(
            Node::new(id)
                .with_tag("sun")
                .with_pos(Vec3::new(0.0, 0.0, bodies::SUN_Z))
                .with_mesh(mesh),
        );
    }

    fn spawn_planet(
        ctx: &mut EngineContext,
        desc: &bodies::PlanetDesc,
        material: Option<&MaterialHandles>,
    ) -> NodeId {
        let mut mesh = MeshComponent::sphere(desc.radius, bodies::SPHERE_SEGMENTS);
        if let Some(m) = material {
            mesh = mesh.with_map(m.map);
            if let Some(normal) = m.normal_map {
                mesh = mesh.with_normal_map(normal);
            }
        }
        let id = ctx.next_id();
        ctx.scene.add(
            Node::new(id)
                .with_tag(desc.name)
                .with_pos(Vec3::new(0.0, 0.0, desc.position_z))
                .with_mesh(mesh),
        );

        // Decorative ring marking the orbit, rotated flat into the
        // orbital plane around the sun.
        let ring_id = ctx.next_id();
        ctx.scene.add(
            Node::new(ring_id)
                .with_tag(format!("{}-orbit", desc.name))
                .with_pos(Vec3::new(0.0, 0.0, bodies::ORBIT_Z))
                .with_rotation(Vec3::new(FRAC_PI_2, 0.0, 0.0))
                .with_mesh(MeshComponent::torus(
                    desc.orbit_radius,
                    bodies::ORBIT_TUBE,
                    bodies::ORBIT_RADIAL_SEGMENTS,
                    bodies::ORBIT_TUBULAR_SEGMENTS,
                )),
        );

        id
    }

    fn spawn_starfield(ctx: &mut EngineContext) {
        for _ in 0..bodies::STAR_COUNT {
            let pos = Vec3::new(
                ctx.rng.float_spread(bodies::STAR_SPREAD),
                ctx.rng.float_spread(bodies::STAR_SPREAD),
                ctx.rng.float_spread(bodies::STAR_SPREAD),
            );
            let id = ctx.next_id();
            ctx.scene.add(
                Node::new(id)
                    .with_tag("star")
                    .with_pos(pos)
                    .with_mesh(MeshComponent::sphere(bodies::STAR_RADIUS, bodies::STAR_SEGMENTS)),
            );
        }
    }
}

impl Default for Orrery {
    fn default() -> Self {
        Self::new()
    }
}

impl App for Orrery {
    fn config(&self) -> AppConfig {
        AppConfig {
            fixed_dt: 1.0 / 60.0,
            // 1 sun + 4 planets + 4 rings + 400 stars, with headroom.
            max_instances: 512,
            max_lights: 2,
            ..AppConfig::default()
        }
    }

    fn init(&mut self, ctx: &mut EngineContext) {
        ctx.camera.fov_y_deg = bodies::CAMERA_FOV_DEG;
        ctx.camera.near = bodies::CAMERA_NEAR;
        ctx.camera.far = bodies::CAMERA_FAR;
        ctx.camera.set_depth(bodies::CAMERA_START_Z);

        let (fx, fy, fz) = bodies::LIGHT_FRONT;
        let (bx, by, bz) = bodies::LIGHT_BACK;
        ctx.lights.add(PointLight::white(Vec3::new(fx, fy, fz)));
        ctx.lights.add(PointLight::white(Vec3::new(bx, by, bz)));

        let materials = Self::load_textures(ctx);

        Self::spawn_sun(ctx, materials.get("sun"));
        for (i, desc) in PLANETS.iter().enumerate() {
            self.planet_ids[i] = Some(Self::spawn_planet(ctx, desc, materials.get(desc.name)));
        }
        Self::spawn_starfield(ctx);

        log::info!(
            "orrery scene built: {} nodes, {} textures requested",
            ctx.scene.len(),
            ctx.textures.len()
        );
    }

    fn update(&mut self, ctx: &mut EngineContext, _input: &InputQueue) {
        // Each planet advances by its own fixed increment; the updates
        // touch disjoint nodes, so ordering across planets is free.
        for (i, desc) in PLANETS.iter().enumerate() {
            if let Some(id) = self.planet_ids[i] {
                if let Some(node) = ctx.scene.get_mut(id) {
                    node.rotation.y += desc.spin_per_tick;
                }
            }
        }

        ctx.emit_event(FrameEvent {
            kind: EVENT_FRAME_INFO,
            a: ctx.camera.pos.z,
            b: ctx.scene.len() as f32,
            c: 0.0,
        });
    }
}
