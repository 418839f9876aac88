//! Camera description and spherical-coordinate helpers.
//!
//! These types avoid platform-specific APIs so the orbit math can be tested
//! on the host. The web frontend builds its view/projection matrices and
//! picking rays from [`Camera`].

use crate::constants::{camera_start, CAMERA_FAR, CAMERA_FOV_DEG, CAMERA_NEAR};
use glam::{Mat4, Vec3};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: camera_start(),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: 1.0,
            fovy_radians: CAMERA_FOV_DEG.to_radians(),
            znear: CAMERA_NEAR,
            zfar: CAMERA_FAR,
        }
    }
}

impl Camera {
    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect.max(1e-3), self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// World-space ray through a point given in normalized device coordinates.
    ///
    /// Returns `(ray_origin, ray_direction)`.
    pub fn ray_from_ndc(&self, ndc_x: f32, ndc_y: f32) -> (Vec3, Vec3) {
        let inv = self.view_proj().inverse();
        let far = inv.project_point3(Vec3::new(ndc_x, ndc_y, 1.0));
        (self.eye, (far - self.eye).normalize_or_zero())
    }

    /// Project a world-space point to normalized device coordinates.
    ///
    /// `None` when the point is behind the camera.
    pub fn world_to_ndc(&self, point: Vec3) -> Option<Vec3> {
        let clip = self.view_proj() * point.extend(1.0);
        if clip.w <= 0.0 {
            return None;
        }
        Some(clip.truncate() / clip.w)
    }
}

/// The camera handle the orbit controller writes through.
pub trait OrbitCamera {
    fn position(&self) -> Vec3;
    fn set_position(&mut self, position: Vec3);
    fn look_at(&mut self, target: Vec3);
}

impl OrbitCamera for Camera {
    fn position(&self) -> Vec3 {
        self.eye
    }

    fn set_position(&mut self, position: Vec3) {
        self.eye = position;
    }

    fn look_at(&mut self, target: Vec3) {
        self.target = target;
    }
}

/// Spherical coordinates about the world origin.
///
/// `phi` is the polar angle from +Y, `theta` the azimuth from +Z toward +X.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spherical {
    pub radius: f32,
    pub phi: f32,
    pub theta: f32,
}

impl Spherical {
    pub fn from_vec3(v: Vec3) -> Self {
        let radius = v.length();
        if radius == 0.0 {
            return Self {
                radius: 0.0,
                phi: 0.0,
                theta: 0.0,
            };
        }
        Self {
            radius,
            theta: v.x.atan2(v.z),
            phi: (v.y / radius).clamp(-1.0, 1.0).acos(),
        }
    }

    pub fn to_vec3(self) -> Vec3 {
        let sin_phi_radius = self.phi.sin() * self.radius;
        Vec3::new(
            sin_phi_radius * self.theta.sin(),
            self.phi.cos() * self.radius,
            sin_phi_radius * self.theta.cos(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    #[test]
    fn start_position_sits_on_equator_facing_plus_z() {
        let s = Spherical::from_vec3(Vec3::new(0.0, 0.0, 15.0));
        assert!((s.radius - 15.0).abs() < 1e-5);
        assert!((s.phi - FRAC_PI_2).abs() < 1e-5);
        assert!(s.theta.abs() < 1e-5);
    }

    #[test]
    fn spherical_survives_conversion_back_to_cartesian() {
        let p = Vec3::new(3.0, -2.0, 5.5);
        let back = Spherical::from_vec3(p).to_vec3();
        assert!((back - p).length() < 1e-4);
    }

    #[test]
    fn pole_and_origin_do_not_produce_nan() {
        let top = Spherical::from_vec3(Vec3::new(0.0, 4.0, 0.0));
        assert_eq!(top.phi, 0.0);
        let bottom = Spherical::from_vec3(Vec3::new(0.0, -4.0, 0.0));
        assert!((bottom.phi - PI).abs() < 1e-6);
        let origin = Spherical::from_vec3(Vec3::ZERO);
        assert_eq!(origin.radius, 0.0);
        assert!(origin.to_vec3().is_finite());
    }

    #[test]
    fn center_of_screen_ray_points_at_target() {
        let cam = Camera::default();
        let (origin, dir) = cam.ray_from_ndc(0.0, 0.0);
        assert_eq!(origin, cam.eye);
        assert!((dir - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-4);
    }

    #[test]
    fn projection_of_origin_is_screen_center() {
        let cam = Camera::default();
        let ndc = cam.world_to_ndc(Vec3::ZERO).unwrap();
        assert!(ndc.x.abs() < 1e-5 && ndc.y.abs() < 1e-5);
        assert!(cam.world_to_ndc(Vec3::new(0.0, 0.0, 30.0)).is_none());
    }
}
