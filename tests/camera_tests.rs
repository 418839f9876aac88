// Host-side tests for the screen/world mapping helpers.

#![allow(dead_code)]
mod camera {
    include!("../src/camera.rs");
}

use camera::*;
use gallery_core::Camera;
use glam::{Vec2, Vec3};

#[test]
fn canvas_center_is_ndc_origin() {
    let ndc = canvas_px_to_ndc(400.0, 300.0, 800.0, 600.0);
    assert!(ndc.length() < 1e-6);
    assert_eq!(canvas_px_to_ndc(0.0, 0.0, 800.0, 600.0), Vec2::new(-1.0, 1.0));
}

#[test]
fn ndc_corners_map_to_css_corners() {
    let size = Vec2::new(640.0, 480.0);
    assert_eq!(ndc_to_css(Vec3::new(-1.0, 1.0, 0.5), size), Vec2::ZERO);
    assert_eq!(ndc_to_css(Vec3::new(1.0, -1.0, 0.5), size), size);
}

#[test]
fn projected_point_lands_back_on_its_ray() {
    let cam = Camera {
        aspect: 16.0 / 9.0,
        ..Camera::default()
    };
    let world = Vec3::new(2.0, -1.0, 3.0);
    let ndc = cam.world_to_ndc(world).unwrap();
    let css = ndc_to_css(ndc, Vec2::new(1600.0, 900.0));
    let back = canvas_px_to_ndc(css.x, css.y, 1600.0, 900.0);
    let (origin, dir) = cam.ray_from_ndc(back.x, back.y);
    let to_point = (world - origin).normalize();
    assert!((to_point - dir).length() < 1e-3);
}
