use glam::Vec3;

use crate::input::queue::InputEvent;
use crate::renderer::camera::PerspectiveCamera;

/// Radians of orbit per pixel of pointer drag.
const ROTATE_SPEED: f32 = 0.005;
/// Multiplicative distance change per wheel tick.
const ZOOM_STEP: f32 = 1.05;
/// Pitch clamp keeps the camera off the poles.
const PITCH_LIMIT: f32 = 1.55;

/// Orbit controls: translates pointer drag and wheel input into camera
/// position changes around a target point.
///
/// Input accumulates between ticks; `update()` applies the accumulated
/// adjustment exactly once per tick and clears it. With no pending
/// input the camera is left untouched, so writes from other sources
/// (the scroll dolly) survive — most recent writer wins.
pub struct OrbitControls {
    min_distance: f32,
    max_distance: f32,
    pending_yaw: f32,
    pending_pitch: f32,
    pending_zoom: f32,
    dragging: bool,
    last_pointer: (f32, f32),
}

impl OrbitControls {
    pub fn new() -> Self {
        Self {
            min_distance: 0.5,
            max_distance: 5000.0,
            pending_yaw: 0.0,
            pending_pitch: 0.0,
            pending_zoom: 1.0,
            dragging: false,
            last_pointer: (0.0, 0.0),
        }
    }

    pub fn with_distance_limits(mut self, min: f32, max: f32) -> Self {
        self.min_distance = min;
        self.max_distance = max;
        self
    }

    /// Accumulate one input event. Called for every drained event.
    pub fn feed(&mut self, event: &InputEvent) {
        match *event {
            InputEvent::PointerDown { x, y } => {
                self.dragging = true;
                self.last_pointer = (x, y);
            }
            InputEvent::PointerUp { .. } => {
                self.dragging = false;
            }
            InputEvent::PointerMove { x, y } => {
                if self.dragging {
                    self.pending_yaw += (x - self.last_pointer.0) * ROTATE_SPEED;
                    self.pending_pitch += (y - self.last_pointer.1) * ROTATE_SPEED;
                    self.last_pointer = (x, y);
                }
            }
            InputEvent::Wheel { delta } => {
                if delta > 0.0 {
                    self.pending_zoom *= ZOOM_STEP;
                } else if delta < 0.0 {
                    self.pending_zoom /= ZOOM_STEP;
                }
            }
        }
    }

    /// Whether any adjustment accumulated since the last update.
    pub fn has_pending(&self) -> bool {
        self.pending_yaw != 0.0 || self.pending_pitch != 0.0 || self.pending_zoom != 1.0
    }

    /// Apply accumulated input to the camera, once per tick.
    pub fn update(&mut self, camera: &mut PerspectiveCamera) {
        if !self.has_pending() {
            return;
        }

        let offset = camera.pos - camera.target;
        let radius = offset.length().max(self.min_distance);
        let mut yaw = offset.x.atan2(offset.z);
        let mut pitch = (offset.y / radius).clamp(-1.0, 1.0).asin();

        yaw -= self.pending_yaw;
        pitch = (pitch + self.pending_pitch).clamp(-PITCH_LIMIT, PITCH_LIMIT);
        let radius = (radius * self.pending_zoom).clamp(self.min_distance, self.max_distance);

        camera.pos = camera.target
            + Vec3::new(
                radius * pitch.cos() * yaw.sin(),
                radius * pitch.sin(),
                radius * pitch.cos() * yaw.cos(),
            );

        self.pending_yaw = 0.0;
        self.pending_pitch = 0.0;
        self.pending_zoom = 1.0;
    }
}

impl Default for OrbitControls {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera_at(z: f32) -> PerspectiveCamera {
        let mut cam = PerspectiveCamera::default();
        cam.pos = Vec3::new(0.0, 0.0, z);
        cam
    }

    #[test]
    fn no_input_leaves_camera_alone() {
        let mut controls = OrbitControls::new();
        let mut cam = camera_at(30.0);
        controls.update(&mut cam);
        assert_eq!(cam.pos, Vec3::new(0.0, 0.0, 30.0));
    }

    #[test]
    fn drag_orbits_at_constant_distance() {
        let mut controls = OrbitControls::new();
        let mut cam = camera_at(30.0);

        controls.feed(&InputEvent::PointerDown { x: 100.0, y: 100.0 });
        controls.feed(&InputEvent::PointerMove { x: 160.0, y: 100.0 });
        controls.feed(&InputEvent::PointerUp { x: 160.0, y: 100.0 });
        assert!(controls.has_pending());
        controls.update(&mut cam);

        assert!(cam.pos.x.abs() > 1e-3, "camera should have orbited");
        assert!((cam.pos.length() - 30.0).abs() < 1e-3, "distance should be unchanged");
        assert!(!controls.has_pending());
    }

    #[test]
    fn move_without_drag_is_ignored() {
        let mut controls = OrbitControls::new();
        controls.feed(&InputEvent::PointerMove { x: 500.0, y: 500.0 });
        assert!(!controls.has_pending());
    }

    #[test]
    fn wheel_zoom_respects_limits() {
        let mut controls = OrbitControls::new().with_distance_limits(10.0, 100.0);
        let mut cam = camera_at(30.0);

        for _ in 0..200 {
            controls.feed(&InputEvent::Wheel { delta: 1.0 });
        }
        controls.update(&mut cam);
        assert!((cam.pos.length() - 100.0).abs() < 1e-3);

        for _ in 0..200 {
            controls.feed(&InputEvent::Wheel { delta: -1.0 });
        }
        controls.update(&mut cam);
        assert!((cam.pos.length() - 10.0).abs() < 1e-3);
    }
}
