use crate::camera::OrbitCamera;
use crate::constants::{camera_explore, camera_start, FLIGHT_STEP};
use crate::error::GalleryError;
use crate::orbit::{OrbitConfig, OrbitController};
use glam::Vec3;

const PROGRESS_EPSILON: f32 = 1e-4;

/// Scripted camera move played once the user starts exploring.
#[derive(Clone, Copy, Debug)]
pub struct IntroFlight {
    pub from: Vec3,
    pub to: Vec3,
    pub step: f32,
    progress: f32,
}

impl Default for IntroFlight {
    fn default() -> Self {
        Self::new(camera_start(), camera_explore(), FLIGHT_STEP)
    }
}

impl IntroFlight {
    pub fn new(from: Vec3, to: Vec3, step: f32) -> Self {
        Self {
            from,
            to,
            step,
            progress: 0.0,
        }
    }

    pub fn restart(&mut self) {
        self.progress = 0.0;
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn is_finished(&self) -> bool {
        self.progress >= 1.0
    }

    /// Advance one frame. Returns the camera position while still in flight.
    pub fn advance(&mut self) -> Option<Vec3> {
        if self.is_finished() {
            return None;
        }
        self.progress += self.step;
        // Snap the last step so float accumulation cannot add an extra frame.
        if self.progress > 1.0 - PROGRESS_EPSILON {
            self.progress = 1.0;
        }
        Some(self.from.lerp(self.to, self.progress))
    }
}

/// Decides who moves the camera each frame: nothing before exploring, then
/// the intro flight followed in the same frame by the orbit controller.
#[derive(Debug, Default)]
pub struct CameraDirector {
    config: OrbitConfig,
    flight: IntroFlight,
    orbit: Option<OrbitController>,
}

impl CameraDirector {
    pub fn new(config: OrbitConfig, flight: IntroFlight) -> Self {
        Self {
            config,
            flight,
            orbit: None,
        }
    }

    pub fn is_exploring(&self) -> bool {
        self.orbit.is_some()
    }

    pub fn flight(&self) -> &IntroFlight {
        &self.flight
    }

    pub fn orbit(&self) -> Option<&OrbitController> {
        self.orbit.as_ref()
    }

    pub fn orbit_mut(&mut self) -> Option<&mut OrbitController> {
        self.orbit.as_mut()
    }

    /// Switch to exploring mode. Returns `Ok(false)` if already exploring.
    pub fn explore<C: OrbitCamera + ?Sized>(&mut self, camera: &C) -> Result<bool, GalleryError> {
        if self.orbit.is_some() {
            return Ok(false);
        }
        let controller = OrbitController::attach(self.config, camera)?;
        self.flight.restart();
        self.orbit = Some(controller);
        log::debug!("[intro] exploring; flight restarted");
        Ok(true)
    }

    /// Drop the orbit state and return to the parked camera mode.
    pub fn leave(&mut self) {
        self.orbit = None;
    }

    pub fn tick<C: OrbitCamera + ?Sized>(&mut self, camera: &mut C) {
        let Some(orbit) = self.orbit.as_mut() else {
            return;
        };
        if let Some(position) = self.flight.advance() {
            camera.set_position(position);
            camera.look_at(Vec3::ZERO);
        }
        orbit.tick(camera);
    }
}
