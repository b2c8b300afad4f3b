use bytemuck::{Pod, Zeroable};

/// Shape discriminants in the instance wire format.
pub const SHAPE_SPHERE: f32 = 0.0;
pub const SHAPE_TORUS: f32 = 1.0;

/// Per-instance render data written to SharedArrayBuffer for the host
/// renderer. Must match the TypeScript protocol: 16 floats = 64 bytes
/// stride.
///
/// `param_a`/`param_b` are shape parameters: sphere radius for spheres,
/// torus radius and tube radius for tori. `seg_a`/`seg_b` carry the
/// tessellation counts the host uses when (re)building geometry.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct RenderInstance {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    /// Euler rotation in radians.
    pub rot_x: f32,
    pub rot_y: f32,
    pub rot_z: f32,
    /// Shape discriminant (SHAPE_SPHERE / SHAPE_TORUS).
    pub shape: f32,
    pub param_a: f32,
    pub param_b: f32,
    pub seg_a: f32,
    pub seg_b: f32,
    /// Flat material color, used until textures resolve.
    pub r: f32,
    pub g: f32,
    pub b: f32,
    /// Host texture slot for the base color map (UNTEXTURED_SLOT if unresolved).
    pub map_slot: f32,
    /// Host texture slot for the normal map (UNTEXTURED_SLOT if unresolved).
    pub normal_slot: f32,
}

impl RenderInstance {
    pub const FLOATS: usize = 16;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// Render buffer containing all mesh instances for one frame.
pub struct RenderBuffer {
    pub instances: Vec<RenderInstance>,
}

impl RenderBuffer {
    pub fn new() -> Self {
        Self {
            instances: Vec::with_capacity(512),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            instances: Vec::with_capacity(capacity),
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
    }

    pub fn push(&mut self, instance: RenderInstance) {
        self.instances.push(instance);
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    /// Raw pointer to instance data for SharedArrayBuffer reads.
    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }
}

impl Default for RenderBuffer {
    fn default() -> Self {
        Self::new()
    }
}
