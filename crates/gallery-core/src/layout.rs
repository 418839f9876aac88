//! Fibonacci-sphere placement for the floating objects.

use crate::constants::LAYOUT_JITTER;
use crate::error::GalleryError;
use glam::Vec3;
use rand::Rng;
use std::f32::consts::PI;

/// Golden angle in radians.
#[inline]
pub fn golden_angle() -> f32 {
    PI * (3.0 - 5.0_f32.sqrt())
}

/// Unjittered point `index` of `count` on the unit sphere.
///
/// Heights run linearly from +1 (first point) to -1 (last point). A single
/// point has no span to divide, so it is placed on the equator at +X.
pub fn fibonacci_point(index: usize, count: usize) -> Vec3 {
    let y = if count > 1 {
        1.0 - (index as f32 / (count - 1) as f32) * 2.0
    } else {
        0.0
    };
    let radius_at_y = (1.0 - y * y).clamp(0.0, 1.0).sqrt();
    let theta = golden_angle() * index as f32;
    Vec3::new(theta.cos() * radius_at_y, y, theta.sin() * radius_at_y)
}

/// Spread `count` points over a sphere of `radius`.
///
/// Each point gets a jitter of up to ±0.05 per axis drawn from `rng`, added
/// after scaling, so the perturbation does not grow with the radius. The
/// output is only reproducible for an identically seeded `rng`. Output order
/// is generation order; callers index per-object state by it.
pub fn fibonacci_sphere<R: Rng>(count: usize, radius: f32, rng: &mut R) -> Vec<Vec3> {
    (0..count)
        .map(|i| fibonacci_point(i, count) * radius + jitter(rng))
        .collect()
}

fn jitter<R: Rng>(rng: &mut R) -> Vec3 {
    let mut axis = || (rng.gen::<f32>() - 0.5) * LAYOUT_JITTER;
    let x = axis();
    let y = axis();
    let z = axis();
    Vec3::new(x, y, z)
}

/// Validated layout request.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutSpec {
    count: usize,
    radius: f32,
}

impl LayoutSpec {
    pub fn new(count: usize, radius: f32) -> Result<Self, GalleryError> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(GalleryError::InvalidRadius(radius));
        }
        Ok(Self { count, radius })
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }
}

/// Keeps the last generated layout until the spec changes.
#[derive(Debug, Default)]
pub struct LayoutCache {
    spec: Option<LayoutSpec>,
    positions: Vec<Vec3>,
}

impl LayoutCache {
    pub fn positions<R: Rng>(&mut self, spec: LayoutSpec, rng: &mut R) -> &[Vec3] {
        if self.spec != Some(spec) {
            self.positions = fibonacci_sphere(spec.count, spec.radius, rng);
            self.spec = Some(spec);
            log::debug!(
                "[layout] generated {} points at radius {:.2}",
                spec.count,
                spec.radius
            );
        }
        &self.positions
    }

    pub fn spec(&self) -> Option<LayoutSpec> {
        self.spec
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn golden_angle_matches_known_value() {
        assert!((golden_angle() - 2.399_963).abs() < 1e-5);
    }

    #[test]
    fn single_point_is_on_the_equator() {
        let p = fibonacci_point(0, 1);
        assert!((p - Vec3::X).length() < 1e-6);
    }

    #[test]
    fn cache_reuses_positions_until_spec_changes() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut cache = LayoutCache::default();
        let spec = LayoutSpec::new(10, 4.0).unwrap();
        let first = cache.positions(spec, &mut rng).to_vec();
        let again = cache.positions(spec, &mut rng).to_vec();
        assert_eq!(first, again);

        let wider = LayoutSpec::new(10, 6.0).unwrap();
        let regenerated = cache.positions(wider, &mut rng).to_vec();
        assert_ne!(first, regenerated);
        assert_eq!(cache.spec(), Some(wider));
    }

    #[test]
    fn spec_rejects_bad_radius() {
        assert_eq!(
            LayoutSpec::new(4, 0.0),
            Err(GalleryError::InvalidRadius(0.0))
        );
        assert!(LayoutSpec::new(4, -2.0).is_err());
        assert!(LayoutSpec::new(4, f32::NAN).is_err());
        assert!(LayoutSpec::new(0, 1.0).is_ok());
    }
}
