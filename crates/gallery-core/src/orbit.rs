//! Drag-to-orbit and wheel-to-zoom camera control.
//!
//! Pointer and touch motion accumulates into an angular velocity that is
//! damped every frame and integrated into spherical coordinates around the
//! world origin. The polar angle is clamped away from the poles and both the
//! orbit radius and the camera position ease toward their targets, so motion
//! decays without oscillating.

use crate::camera::{OrbitCamera, Spherical};
use crate::constants::*;
use crate::error::GalleryError;
use glam::{Vec2, Vec3};

/// Tuning for [`OrbitController`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitConfig {
    pub rotation_speed: f32,
    pub damping: f32,
    pub min_polar_angle: f32,
    pub max_polar_angle: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    pub zoom_speed: f32,
    pub radius_smoothing: f32,
    pub position_smoothing: f32,
    pub initial_distance: f32,
}

impl Default for OrbitConfig {
    fn default() -> Self {
        Self {
            rotation_speed: ROTATION_SPEED,
            damping: DAMPING,
            min_polar_angle: MIN_POLAR_ANGLE,
            max_polar_angle: MAX_POLAR_ANGLE,
            min_distance: MIN_DISTANCE,
            max_distance: MAX_DISTANCE,
            zoom_speed: ZOOM_SPEED,
            radius_smoothing: RADIUS_SMOOTHING,
            position_smoothing: POSITION_SMOOTHING,
            initial_distance: INITIAL_DISTANCE,
        }
    }
}

/// Radians per frame added to the polar (`polar`) and azimuth (`azimuth`) angles.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AngularVelocity {
    pub polar: f32,
    pub azimuth: f32,
}

impl AngularVelocity {
    pub fn magnitude(&self) -> f32 {
        self.polar.hypot(self.azimuth)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    pub dragging: bool,
    pub last_pointer: Vec2,
    pub velocity: AngularVelocity,
}

#[derive(Clone, Debug)]
pub struct OrbitController {
    config: OrbitConfig,
    pointer: PointerState,
    target_distance: f32,
    orbit: Option<Spherical>,
}

impl Default for OrbitController {
    fn default() -> Self {
        Self::new(OrbitConfig::default())
    }
}

impl OrbitController {
    pub fn new(config: OrbitConfig) -> Self {
        Self {
            config,
            pointer: PointerState::default(),
            target_distance: config.initial_distance,
            orbit: None,
        }
    }

    /// Build a controller for `camera`, which must not sit on the orbit origin.
    pub fn attach<C: OrbitCamera + ?Sized>(
        config: OrbitConfig,
        camera: &C,
    ) -> Result<Self, GalleryError> {
        let position = camera.position();
        if !position.is_finite() {
            return Err(GalleryError::NonFinite("camera position"));
        }
        if position == Vec3::ZERO {
            return Err(GalleryError::DegenerateCamera);
        }
        Ok(Self::new(config))
    }

    pub fn config(&self) -> &OrbitConfig {
        &self.config
    }

    pub fn pointer(&self) -> &PointerState {
        &self.pointer
    }

    pub fn target_distance(&self) -> f32 {
        self.target_distance
    }

    /// Spherical position commanded by the last tick, after clamping.
    pub fn orbit(&self) -> Option<Spherical> {
        self.orbit
    }

    pub fn reset(&mut self) {
        self.pointer = PointerState::default();
        self.target_distance = self.config.initial_distance;
        self.orbit = None;
    }

    pub fn pointer_down(&mut self, x: f32, y: f32) {
        let p = Vec2::new(x, y);
        if !p.is_finite() {
            log::debug!("[orbit] dropped non-finite pointer down");
            return;
        }
        self.pointer.dragging = true;
        self.pointer.last_pointer = p;
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) {
        if !self.pointer.dragging {
            return;
        }
        let p = Vec2::new(x, y);
        if !p.is_finite() {
            log::debug!("[orbit] dropped non-finite pointer move");
            return;
        }
        let delta = p - self.pointer.last_pointer;
        self.pointer.velocity.polar += delta.y * self.config.rotation_speed;
        self.pointer.velocity.azimuth += delta.x * self.config.rotation_speed;
        self.pointer.last_pointer = p;
    }

    pub fn pointer_up(&mut self) {
        self.pointer.dragging = false;
    }

    /// Only a single-finger touch starts a drag.
    pub fn touch_start(&mut self, touches: &[Vec2]) {
        if let [only] = touches {
            self.pointer_down(only.x, only.y);
        }
    }

    pub fn touch_move(&mut self, touches: &[Vec2]) {
        if let [only] = touches {
            self.pointer_move(only.x, only.y);
        }
    }

    pub fn touch_end(&mut self) {
        self.pointer.dragging = false;
    }

    pub fn wheel(&mut self, delta_y: f32) {
        if !delta_y.is_finite() {
            log::debug!("[orbit] dropped non-finite wheel delta");
            return;
        }
        self.target_distance = (self.target_distance + delta_y * self.config.zoom_speed)
            .clamp(self.config.min_distance, self.config.max_distance);
    }

    /// Advance one frame and move `camera` toward its new orbit position.
    pub fn tick<C: OrbitCamera + ?Sized>(&mut self, camera: &mut C) {
        let cfg = self.config;
        let velocity = &mut self.pointer.velocity;
        velocity.polar *= cfg.damping;
        velocity.azimuth *= cfg.damping;

        let position = camera.position();
        if position == Vec3::ZERO || !position.is_finite() {
            log::debug!("[orbit] camera at origin; tick skipped");
            return;
        }

        let mut spherical = Spherical::from_vec3(position);
        spherical.phi += velocity.polar;
        spherical.theta += velocity.azimuth;
        spherical.phi = spherical
            .phi
            .clamp(cfg.min_polar_angle, cfg.max_polar_angle);
        spherical.radius += (self.target_distance - spherical.radius) * cfg.radius_smoothing;
        self.orbit = Some(spherical);

        let target_position = spherical.to_vec3();
        camera.set_position(position.lerp(target_position, cfg.position_smoothing));
        camera.look_at(Vec3::ZERO);
    }
}
