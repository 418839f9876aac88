use glam::Vec3;
use std::f32::consts::PI;

// Shared layout/motion tuning constants used by the web frontend.

// Scene layout
pub const OBJECT_COUNT: usize = 24;
pub const CLOUD_RADIUS: f32 = 8.0;
pub const LAYOUT_JITTER: f32 = 0.1; // full per-axis span, centered on zero

// Orbit controls
pub const ROTATION_SPEED: f32 = 0.01; // radians of velocity per pixel dragged
pub const DAMPING: f32 = 0.95; // lower value means faster damping
pub const MIN_POLAR_ANGLE: f32 = PI * 0.15;
pub const MAX_POLAR_ANGLE: f32 = PI * 0.85;
pub const MIN_DISTANCE: f32 = 6.0;
pub const MAX_DISTANCE: f32 = 20.0;
pub const ZOOM_SPEED: f32 = 0.01; // distance per wheel delta unit
pub const RADIUS_SMOOTHING: f32 = 0.1;
pub const POSITION_SMOOTHING: f32 = 0.1;
pub const INITIAL_DISTANCE: f32 = 12.0;

// Intro camera flight
pub const CAMERA_START: [f32; 3] = [0.0, 0.0, 15.0];
pub const CAMERA_EXPLORE: [f32; 3] = [0.0, 0.0, 12.0];
pub const FLIGHT_STEP: f32 = 0.02; // progress per frame

// Camera lens
pub const CAMERA_FOV_DEG: f32 = 60.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;

// Group motion
pub const CLOUD_SPIN_PER_SEC: f32 = 0.05;
pub const SCENE_SPIN_PER_FRAME: f32 = 0.001;

// Object intro and interaction
pub const COLLAPSED_SCALE: f32 = 0.001;
pub const INTRO_SPREAD: f32 = 3.0; // objects fly in from this multiple of their home
pub const INTRO_STAGGER_SEC: f32 = 0.1;
pub const INTRO_MOVE_SEC: f32 = 2.0;
pub const INTRO_GROW_SEC: f32 = 1.5;
pub const CLICK_GROW: f32 = 1.5;
pub const CLICK_TWEEN_SEC: f32 = 0.5;
pub const HOVER_PULSE_RATE: f32 = 5.0;
pub const HOVER_PULSE_DEPTH: f32 = 0.03;
pub const LABEL_LIFT: f32 = 1.2; // world units above a clicked object

// Base colors, multiplied by the material tint
pub const HOVER_COLOR: [f32; 3] = [1.0, 1.0, 1.0]; // #ffffff
pub const IDLE_COLOR: [f32; 3] = [0.867, 0.867, 0.867]; // #dddddd

#[inline]
pub fn camera_start() -> Vec3 {
    Vec3::from_array(CAMERA_START)
}

#[inline]
pub fn camera_explore() -> Vec3 {
    Vec3::from_array(CAMERA_EXPLORE)
}
