use gallery_core::Camera;
use glam::{Vec2, Vec3};
use web_sys as web;

/// Normalized device coordinates for a point in backing-store pixels.
#[inline]
pub fn canvas_px_to_ndc(sx: f32, sy: f32, width: f32, height: f32) -> Vec2 {
    let width = width.max(1.0);
    let height = height.max(1.0);
    Vec2::new((2.0 * sx / width) - 1.0, 1.0 - (2.0 * sy / height))
}

/// CSS position inside an element of `css_size` for a point in NDC.
#[inline]
pub fn ndc_to_css(ndc: Vec3, css_size: Vec2) -> Vec2 {
    Vec2::new(
        (ndc.x * 0.5 + 0.5) * css_size.x,
        (0.5 - ndc.y * 0.5) * css_size.y,
    )
}

#[inline]
/// Compute a world-space ray from screen-space canvas coordinates.
///
/// - `canvas`: target canvas to derive dimensions
/// - `camera`: the camera the frame was rendered with
/// - `sx`, `sy`: pixel coordinates in the canvas' backing store space
///
/// Returns `(ray_origin, ray_direction)` in world space.
pub fn screen_to_world_ray(
    canvas: &web::HtmlCanvasElement,
    camera: &Camera,
    sx: f32,
    sy: f32,
) -> (Vec3, Vec3) {
    let ndc = canvas_px_to_ndc(sx, sy, canvas.width() as f32, canvas.height() as f32);
    camera.ray_from_ndc(ndc.x, ndc.y)
}

#[inline]
pub fn canvas_aspect(canvas: &web::HtmlCanvasElement) -> f32 {
    canvas.width().max(1) as f32 / canvas.height().max(1) as f32
}
