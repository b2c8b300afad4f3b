pub mod api;
pub mod core;
pub mod components;
pub mod systems;
pub mod renderer;
pub mod bridge;
pub mod input;
pub mod assets;

// Re-export key types at crate root for convenience
pub use api::app::{App, AppConfig, EngineContext, RenderContext};
pub use api::types::{NodeId, FrameEvent};
pub use components::node::Node;
pub use components::mesh::{MeshComponent, Shape, Color};
pub use core::scene::Scene;
pub use core::time::FrameClock;
pub use core::rng::Rng;
pub use renderer::instance::{RenderInstance, RenderBuffer};
pub use renderer::camera::{PerspectiveCamera, CameraUniform, dolly_depth};
pub use input::queue::{InputEvent, InputQueue};
pub use assets::manifest::TextureManifest;
pub use assets::textures::{TextureId, TextureState, TextureRegistry, UNTEXTURED_SLOT};
pub use bridge::protocol::ProtocolLayout;
pub use systems::render::build_render_buffer;
pub use systems::controls::OrbitControls;
pub use systems::lighting::{PointLight, LightState};
pub use bridge::protocol::LIGHT_FLOATS;
