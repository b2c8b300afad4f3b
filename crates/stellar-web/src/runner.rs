use stellar_engine::{
    App, AppConfig, EngineContext, RenderContext,
    InputEvent, InputQueue, RenderBuffer, CameraUniform,
    FrameClock, ProtocolLayout, OrbitControls, TextureId,
    build_render_buffer, dolly_depth,
};

/// Generic scene runner that wires up the engine loop.
///
/// Each concrete app (e.g., `orrery`) creates a `thread_local!`
/// AppRunner and exports free functions via `#[wasm_bindgen]`, because
/// wasm-bindgen cannot export generic structs directly.
///
/// The host re-arms `tick` from its per-frame callback for as long as
/// `is_running()` reports true; `stop()` is the explicit teardown
/// signal that ends the loop.
pub struct AppRunner<A: App> {
    app: A,
    ctx: EngineContext,
    input: InputQueue,
    controls: OrbitControls,
    render_buffer: RenderBuffer,
    camera_uniform: CameraUniform,
    clock: FrameClock,
    config: AppConfig,
    layout: ProtocolLayout,
    initialized: bool,
    running: bool,
}

impl<A: App> AppRunner<A> {
    pub fn new(app: A) -> Self {
        let config = app.config();
        let clock = FrameClock::new(config.fixed_dt);
        let layout = ProtocolLayout::from_config(&config);
        let render_buffer = RenderBuffer::with_capacity(config.max_instances);

        Self {
            app,
            ctx: EngineContext::new(),
            input: InputQueue::new(),
            controls: OrbitControls::new(),
            render_buffer,
            camera_uniform: CameraUniform {
                view_proj: [[0.0; 4]; 4],
            },
            clock,
            config,
            layout,
            initialized: false,
            running: true,
        }
    }

    /// Initialize the app. Call once after construction.
    pub fn init(&mut self) {
        self.config = self.app.config();
        self.layout = ProtocolLayout::from_config(&self.config);
        self.ctx
            .camera
            .resize(self.config.viewport_width, self.config.viewport_height);
        self.app.init(&mut self.ctx);
        self.camera_uniform = self.ctx.camera.uniform();
        self.initialized = true;
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one frame tick: update the scene, apply controls, extract
    /// the render buffer. A no-op once stopped.
    pub fn tick(&mut self, dt: f32) {
        if !self.initialized || !self.running {
            return;
        }

        // Clear per-tick transient data
        self.ctx.clear_frame_data();

        // Fixed timestep accumulation
        let steps = self.clock.accumulate(dt);
        for _ in 0..steps {
            self.app.update(&mut self.ctx, &self.input);
        }

        // Drain input into the controls, then apply their accumulated
        // adjustment to the camera once.
        for event in self.input.drain() {
            self.controls.feed(&event);
        }
        self.controls.update(&mut self.ctx.camera);

        // Build render buffer from scene nodes
        build_render_buffer(self.ctx.scene.iter(), &self.ctx.textures, &mut self.render_buffer);

        // Allow the app to add custom render commands
        {
            let mut render_ctx = RenderContext {
                render_buffer: &mut self.render_buffer,
            };
            self.app.render(&mut render_ctx);
        }

        self.camera_uniform = self.ctx.camera.uniform();
    }

    /// Scroll-linked camera dolly: synchronous, per scroll event.
    /// Overwrites the camera depth immediately — no smoothing, no
    /// debouncing, no waiting for the next tick.
    pub fn scroll(&mut self, offset: f32) {
        self.ctx.camera.set_depth(dolly_depth(offset));
        self.camera_uniform = self.ctx.camera.uniform();
    }

    /// Viewport resize: recompute aspect and record the new size.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.config.viewport_width = width;
        self.config.viewport_height = height;
        self.ctx.camera.resize(width, height);
        self.camera_uniform = self.ctx.camera.uniform();
    }

    /// Explicit cancellation: the host stops re-arming its per-frame
    /// callback once this is set.
    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    // ---- Texture loader callbacks ----

    /// Pending texture load requests as a JSON array for the host
    /// image loader.
    pub fn take_texture_requests(&mut self) -> String {
        let requests = self.ctx.textures.take_requests();
        serde_json::to_string(&requests).unwrap_or_else(|_| "[]".to_string())
    }

    pub fn texture_loaded(&mut self, id: u32, slot: u32) {
        self.ctx.textures.resolve(TextureId(id), slot);
    }

    pub fn texture_failed(&mut self, id: u32) {
        self.ctx.textures.fail(TextureId(id));
    }

    // ---- Pointer accessors for SharedArrayBuffer reads ----

    pub fn instances_ptr(&self) -> *const f32 {
        self.render_buffer.instances_ptr()
    }

    pub fn instance_count(&self) -> u32 {
        self.render_buffer.instance_count()
    }

    pub fn camera_ptr(&self) -> *const f32 {
        self.camera_uniform.view_proj.as_ptr() as *const f32
    }

    pub fn lights_ptr(&self) -> *const f32 {
        self.ctx.lights.buffer_ptr()
    }

    pub fn light_count(&self) -> u32 {
        self.ctx.lights.count() as u32
    }

    pub fn events_ptr(&self) -> *const f32 {
        self.ctx.events.as_ptr() as *const f32
    }

    pub fn event_count(&self) -> u32 {
        self.ctx.events.len() as u32
    }

    pub fn frame_ticks(&self) -> u64 {
        self.clock.ticks()
    }

    pub fn viewport_width(&self) -> f32 {
        self.config.viewport_width
    }

    pub fn viewport_height(&self) -> f32 {
        self.config.viewport_height
    }

    // ---- Capacity accessors (read by TypeScript via wasm_bindgen exports) ----

    pub fn max_instances(&self) -> u32 {
        self.layout.max_instances as u32
    }

    pub fn max_lights(&self) -> u32 {
        self.layout.max_lights as u32
    }

    pub fn max_events(&self) -> u32 {
        self.layout.max_events as u32
    }

    pub fn buffer_total_floats(&self) -> u32 {
        self.layout.buffer_total_floats as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;
    use stellar_engine::{MeshComponent, Node};

    /// Minimal app: one spinning sphere.
    struct Spinner;

    impl App for Spinner {
        fn init(&mut self, ctx: &mut EngineContext) {
            let id = ctx.next_id();
            ctx.scene.add(
                Node::new(id)
                    .with_tag("ball")
                    .with_mesh(MeshComponent::sphere(1.0, 8)),
            );
            ctx.camera.pos = Vec3::new(0.0, 0.0, 30.0);
        }

        fn update(&mut self, ctx: &mut EngineContext, _input: &InputQueue) {
            if let Some(node) = ctx.scene.find_by_tag_mut("ball") {
                node.rotation.y += 0.01;
            }
        }
    }

    #[test]
    fn tick_runs_update_and_extracts_instances() {
        let mut runner = AppRunner::new(Spinner);
        runner.init();
        runner.tick(1.0 / 60.0);
        assert_eq!(runner.instance_count(), 1);
        assert_eq!(runner.frame_ticks(), 1);
    }

    #[test]
    fn stop_halts_the_loop() {
        let mut runner = AppRunner::new(Spinner);
        runner.init();
        runner.stop();
        assert!(!runner.is_running());
        runner.tick(1.0 / 60.0);
        assert_eq!(runner.frame_ticks(), 0);
    }

    #[test]
    fn scroll_writes_camera_depth_immediately() {
        let mut runner = AppRunner::new(Spinner);
        runner.init();
        runner.scroll(-250.0);
        // No tick in between: the write is synchronous.
        assert_eq!(runner.ctx.camera.pos.z, 25.0);
    }

    #[test]
    fn tick_before_init_is_a_noop() {
        let mut runner = AppRunner::new(Spinner);
        runner.tick(1.0 / 60.0);
        assert_eq!(runner.instance_count(), 0);
    }
}
