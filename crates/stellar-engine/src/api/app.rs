use crate::api::types::{NodeId, FrameEvent};
use crate::assets::textures::TextureRegistry;
use crate::core::rng::Rng;
use crate::core::scene::Scene;
use crate::input::queue::InputQueue;
use crate::renderer::camera::PerspectiveCamera;
use crate::renderer::instance::RenderBuffer;
use crate::systems::lighting::LightState;

/// Configuration for the engine, provided by the app.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Fixed timestep in seconds (default: 1/60).
    pub fixed_dt: f32,
    /// Initial viewport width in CSS pixels.
    pub viewport_width: f32,
    /// Initial viewport height in CSS pixels.
    pub viewport_height: f32,
    /// Maximum number of render instances (default: 512).
    pub max_instances: usize,
    /// Maximum number of point lights (default: 8).
    pub max_lights: usize,
    /// Maximum number of frame events per tick (default: 32).
    pub max_events: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            fixed_dt: 1.0 / 60.0,
            viewport_width: 1280.0,
            viewport_height: 720.0,
            max_instances: 512,
            max_lights: 8,
            max_events: 32,
        }
    }
}

/// The core contract every scene app must fulfill.
pub trait App {
    /// Return engine configuration. Called once before init.
    fn config(&self) -> AppConfig {
        AppConfig::default()
    }

    /// Setup initial state: spawn nodes, position the camera, add lights.
    fn init(&mut self, ctx: &mut EngineContext);

    /// The per-tick update. Advance animation state, react to input.
    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue);

    /// Optional read-only render pass for custom render commands.
    fn render(&self, _ctx: &mut RenderContext) {}
}

/// Mutable access to engine state, passed to App::init and App::update.
///
/// Owned by the runner and threaded through the app callbacks, so there
/// is exactly one writer per field per frame: the app mutates scene and
/// rotation state, the controls and the scroll handler mutate the camera,
/// the texture loader mutates registry slots.
pub struct EngineContext {
    pub scene: Scene,
    pub camera: PerspectiveCamera,
    pub lights: LightState,
    pub textures: TextureRegistry,
    pub events: Vec<FrameEvent>,
    pub rng: Rng,
    next_id: u32,
}

impl EngineContext {
    pub fn new() -> Self {
        Self::with_seed(42)
    }

    /// Create an EngineContext with a specific RNG seed.
    /// Scene population that samples the RNG is reproducible per seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            scene: Scene::new(),
            camera: PerspectiveCamera::default(),
            lights: LightState::new(),
            textures: TextureRegistry::new(),
            events: Vec::new(),
            rng: Rng::new(seed),
            next_id: 1,
        }
    }

    /// Generate the next unique node ID.
    pub fn next_id(&mut self) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Emit a frame event to be forwarded to the host.
    pub fn emit_event(&mut self, event: FrameEvent) {
        self.events.push(event);
    }

    /// Clear per-tick transient data.
    pub fn clear_frame_data(&mut self) {
        self.events.clear();
    }
}

impl Default for EngineContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Render context for optional custom render commands.
pub struct RenderContext<'a> {
    pub render_buffer: &'a mut RenderBuffer,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_id_is_unique_and_increasing() {
        let mut ctx = EngineContext::new();
        let a = ctx.next_id();
        let b = ctx.next_id();
        assert_ne!(a, b);
        assert_eq!(a.0 + 1, b.0);
    }

    #[test]
    fn clear_frame_data_drops_events() {
        let mut ctx = EngineContext::new();
        ctx.emit_event(FrameEvent { kind: 1.0, a: 2.0, b: 3.0, c: 4.0 });
        assert_eq!(ctx.events.len(), 1);
        ctx.clear_frame_data();
        assert!(ctx.events.is_empty());
    }

    #[test]
    fn same_seed_same_samples() {
        let mut a = EngineContext::with_seed(7);
        let mut b = EngineContext::with_seed(7);
        for _ in 0..32 {
            assert_eq!(a.rng.float_spread(600.0), b.rng.float_spread(600.0));
        }
    }
}
