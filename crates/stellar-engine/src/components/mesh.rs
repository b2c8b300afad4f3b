use crate::assets::textures::TextureId;

/// RGB color for mesh materials.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const WHITE: Color = Color { r: 1.0, g: 1.0, b: 1.0 };

    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

/// Geometric shape primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Sphere {
        radius: f32,
        /// Tessellation segments (both latitude and longitude).
        segments: u32,
    },
    Torus {
        /// Distance from torus center to tube center.
        radius: f32,
        /// Tube cross-section radius.
        tube: f32,
        radial_segments: u32,
        tubular_segments: u32,
    },
}

impl Shape {
    pub fn sphere(radius: f32, segments: u32) -> Self {
        Shape::Sphere { radius, segments }
    }

    pub fn torus(radius: f32, tube: f32, radial_segments: u32, tubular_segments: u32) -> Self {
        Shape::Torus { radius, tube, radial_segments, tubular_segments }
    }
}

/// Component pairing a shape with a surface material.
///
/// Texture slots hold registry handles; a mesh whose handle has not
/// resolved yet renders flat-colored until the load completes.
#[derive(Debug, Clone, Copy)]
pub struct MeshComponent {
    pub shape: Shape,
    pub color: Color,
    /// Base color texture.
    pub map: Option<TextureId>,
    /// Normal/detail map.
    pub normal_map: Option<TextureId>,
}

impl MeshComponent {
    pub fn new(shape: Shape) -> Self {
        Self {
            shape,
            color: Color::default(),
            map: None,
            normal_map: None,
        }
    }

    pub fn sphere(radius: f32, segments: u32) -> Self {
        Self::new(Shape::sphere(radius, segments))
    }

    pub fn torus(radius: f32, tube: f32, radial_segments: u32, tubular_segments: u32) -> Self {
        Self::new(Shape::torus(radius, tube, radial_segments, tubular_segments))
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_map(mut self, map: TextureId) -> Self {
        self.map = Some(map);
        self
    }

    pub fn with_normal_map(mut self, normal_map: TextureId) -> Self {
        self.normal_map = Some(normal_map);
        self
    }
}
