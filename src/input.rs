use glam::{Vec2, Vec3};
use web_sys as web;

/// Latest pointer sample over the canvas, in backing-store pixels.
#[derive(Default, Clone, Copy)]
pub struct MouseState {
    pub x: f32,
    pub y: f32,
    pub inside: bool,
    /// Client (CSS px) position of the current press, if any.
    pub down_at: Option<Vec2>,
}

#[inline]
pub fn ray_sphere(ray_origin: Vec3, ray_dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray_origin - center;
    let b = oc.dot(ray_dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let t = -b - disc.sqrt();
    (t >= 0.0).then_some(t)
}

/// Index of the closest sphere hit along the ray.
///
/// `targets` yields `(index, center, radius)`.
pub fn pick_nearest(
    ray_origin: Vec3,
    ray_dir: Vec3,
    targets: impl IntoIterator<Item = (usize, Vec3, f32)>,
) -> Option<usize> {
    let mut best = None::<(usize, f32)>;
    for (i, center, radius) in targets {
        if let Some(t) = ray_sphere(ray_origin, ray_dir, center, radius) {
            match best {
                Some((_, bt)) if t >= bt => {}
                _ => best = Some((i, t)),
            }
        }
    }
    best.map(|(i, _)| i)
}

/// A press and release count as a click when they are at most `slop` apart.
#[inline]
pub fn is_click(down: Option<Vec2>, up: Vec2, slop: f32) -> bool {
    down.is_some_and(|d| d.distance(up) <= slop)
}

/// Map CSS pixels relative to the canvas to backing-store pixels.
#[inline]
pub fn css_to_canvas_px(css: Vec2, css_size: Vec2, backing_size: Vec2) -> Vec2 {
    if css_size.x <= 0.0 || css_size.y <= 0.0 {
        return Vec2::ZERO;
    }
    css / css_size * backing_size
}

#[inline]
pub fn pointer_canvas_px(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let css = Vec2::new(
        ev.client_x() as f32 - rect.left() as f32,
        ev.client_y() as f32 - rect.top() as f32,
    );
    css_to_canvas_px(
        css,
        Vec2::new(rect.width() as f32, rect.height() as f32),
        Vec2::new(canvas.width() as f32, canvas.height() as f32),
    )
}

#[inline]
pub fn client_pos(ev: &web::MouseEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}
