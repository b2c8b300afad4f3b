use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};

/// Scroll offset → camera depth mapping for the scroll-linked dolly.
/// The magnitude of the page scroll offset scaled by 0.1; the result is
/// never negative regardless of scroll direction.
pub const DOLLY_PER_SCROLL_PX: f32 = 0.1;

pub fn dolly_depth(scroll_offset: f32) -> f32 {
    scroll_offset.abs() * DOLLY_PER_SCROLL_PX
}

/// Perspective camera for 3D rendering.
/// Produces a view-projection matrix mapping world units to clip space.
pub struct PerspectiveCamera {
    /// Vertical field of view in degrees.
    pub fov_y_deg: f32,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Near clip plane distance.
    pub near: f32,
    /// Far clip plane distance.
    pub far: f32,
    /// Camera position in world space. Looks down -Z unless the orbit
    /// controls have rotated it around the target.
    pub pos: Vec3,
    /// Point the camera orients toward when orbit controls engage.
    pub target: Vec3,
}

/// GPU-side uniform data for the camera.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
}

impl CameraUniform {
    pub const FLOATS: usize = 16;
}

impl PerspectiveCamera {
    pub fn new(fov_y_deg: f32, aspect: f32, near: f32, far: f32) -> Self {
        Self {
            fov_y_deg,
            aspect,
            near,
            far,
            pos: Vec3::ZERO,
            target: Vec3::ZERO,
        }
    }

    /// Build the perspective projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y_deg.to_radians(), self.aspect, self.near, self.far)
    }

    /// Build the view matrix. When the camera sits on its target it
    /// looks down -Z; otherwise it looks at the target.
    pub fn view_matrix(&self) -> Mat4 {
        let forward = self.target - self.pos;
        if forward.length_squared() < 1e-10 {
            Mat4::from_translation(-self.pos)
        } else {
            Mat4::look_at_rh(self.pos, self.target, Vec3::Y)
        }
    }

    pub fn uniform(&self) -> CameraUniform {
        CameraUniform {
            view_proj: (self.projection_matrix() * self.view_matrix()).to_cols_array_2d(),
        }
    }

    /// Recompute aspect ratio on viewport resize.
    pub fn resize(&mut self, viewport_width: f32, viewport_height: f32) {
        if viewport_height > 0.0 {
            self.aspect = viewport_width / viewport_height;
        }
    }

    /// Place the camera at a depth along the Z axis.
    /// The single entry point used by the scroll dolly; overwrites any
    /// prior depth, most recent write wins.
    pub fn set_depth(&mut self, z: f32) {
        self.pos.z = z;
    }
}

impl Default for PerspectiveCamera {
    fn default() -> Self {
        Self::new(60.0, 16.0 / 9.0, 0.1, 1000.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dolly_depth_scales_scroll_magnitude() {
        assert_eq!(dolly_depth(100.0), 10.0);
        assert_eq!(dolly_depth(-100.0), 10.0);
        assert_eq!(dolly_depth(0.0), 0.0);
    }

    #[test]
    fn dolly_depth_never_negative() {
        for t in [-5000.0, -1.0, -0.25, 0.0, 0.25, 1.0, 5000.0] {
            assert!(dolly_depth(t) >= 0.0, "negative depth for offset {t}");
        }
    }

    #[test]
    fn resize_recomputes_aspect() {
        let mut cam = PerspectiveCamera::new(75.0, 1.0, 0.1, 1000.0);
        cam.resize(1920.0, 1080.0);
        assert!((cam.aspect - 1920.0 / 1080.0).abs() < 1e-6);
    }

    #[test]
    fn resize_ignores_zero_height() {
        let mut cam = PerspectiveCamera::new(75.0, 1.5, 0.1, 1000.0);
        cam.resize(800.0, 0.0);
        assert_eq!(cam.aspect, 1.5);
    }

    #[test]
    fn set_depth_only_touches_z() {
        let mut cam = PerspectiveCamera::default();
        cam.pos = Vec3::new(1.0, 2.0, 3.0);
        cam.set_depth(30.0);
        assert_eq!(cam.pos, Vec3::new(1.0, 2.0, 30.0));
    }

    #[test]
    fn projection_is_perspective() {
        let cam = PerspectiveCamera::new(75.0, 16.0 / 9.0, 0.1, 1000.0);
        let cols = cam.projection_matrix().to_cols_array_2d();
        // Perspective: w column carries -z, not a constant 1.
        assert!((cols[2][3] - -1.0).abs() < 1e-6);
        assert_eq!(cols[3][3], 0.0);
    }

    #[test]
    fn view_from_origin_is_identity_translation() {
        let mut cam = PerspectiveCamera::default();
        cam.pos = Vec3::new(0.0, 0.0, 30.0);
        cam.target = Vec3::new(0.0, 0.0, 30.0);
        let v = cam.view_matrix();
        let p = v.transform_point3(Vec3::new(0.0, 0.0, 0.0));
        assert!((p.z - -30.0).abs() < 1e-5);
    }
}
