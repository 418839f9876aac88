use glam::{Quat, Vec3};
use rand::Rng;
use std::f32::consts::TAU;

/// Per-object spin and bob parameters, drawn once when the cloud is built.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FloatParams {
    pub rotation_axis: Vec3,
    pub rotation_speed: f32,
    pub rotation_phase: f32,
    pub hover_amplitude: f32,
    pub hover_frequency: f32,
    pub hover_phase_offset: f32,
}

impl FloatParams {
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        let axis = Vec3::new(
            rng.gen::<f32>() - 0.5,
            rng.gen::<f32>() - 0.5,
            rng.gen::<f32>() - 0.5,
        );
        let rotation_axis = axis.try_normalize().unwrap_or(Vec3::Y);
        let rotation_speed = (rng.gen::<f32>() + 0.5) * 0.3;
        let rotation_phase = rng.gen::<f32>() * TAU;
        let hover_amplitude = rng.gen::<f32>() * 0.3 + 0.2;
        let hover_frequency = rng.gen::<f32>() * 0.4 + 0.2;
        let hover_phase_offset = rng.gen::<f32>() * TAU;
        Self {
            rotation_axis,
            rotation_speed,
            rotation_phase,
            hover_amplitude,
            hover_frequency,
            hover_phase_offset,
        }
    }

    /// Vertical bob offset at time `t` seconds.
    #[inline]
    pub fn hover_offset(&self, t: f32) -> f32 {
        (t * self.hover_frequency + self.hover_phase_offset).sin() * self.hover_amplitude
    }

    #[inline]
    pub fn rotation(&self, t: f32) -> Quat {
        Quat::from_axis_angle(self.rotation_axis, t * self.rotation_speed + self.rotation_phase)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn random_params_stay_in_their_ranges() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let p = FloatParams::random(&mut rng);
            assert!((p.rotation_axis.length() - 1.0).abs() < 1e-4);
            assert!((0.15..=0.45).contains(&p.rotation_speed));
            assert!((0.0..=TAU).contains(&p.rotation_phase));
            assert!((0.2..=0.5).contains(&p.hover_amplitude));
            assert!((0.2..=0.6).contains(&p.hover_frequency));
            assert!((0.0..=TAU).contains(&p.hover_phase_offset));
        }
    }

    #[test]
    fn hover_offset_is_bounded_by_amplitude() {
        let mut rng = StdRng::seed_from_u64(11);
        let p = FloatParams::random(&mut rng);
        for i in 0..200 {
            assert!(p.hover_offset(i as f32 * 0.37).abs() <= p.hover_amplitude + 1e-6);
        }
    }
}
