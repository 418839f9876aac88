//! Time-based interpolation with the easing curves used by object animations.

use glam::Vec3;
use std::f32::consts::TAU;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Ease {
    Linear,
    /// Overshoots by `s` before settling.
    BackOut(f32),
    /// Decaying oscillation around the end value.
    ElasticOut { amplitude: f32, period: f32 },
}

impl Ease {
    /// Map linear progress in `[0, 1]` through the curve.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Linear => t,
            Ease::BackOut(s) => {
                let p = t - 1.0;
                p * p * ((s + 1.0) * p + s) + 1.0
            }
            Ease::ElasticOut { amplitude, period } => {
                if t >= 1.0 {
                    return 1.0;
                }
                let a = amplitude.max(1.0);
                let p = period / amplitude.min(1.0);
                let shift = p / TAU * (1.0 / a).asin();
                a * 2.0_f32.powf(-10.0 * t) * ((t - shift) * TAU / p).sin() + 1.0
            }
        }
    }
}

/// A `Vec3` animated from `from` to `to`, starting at absolute time `start`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    from: Vec3,
    to: Vec3,
    start: f32,
    duration: f32,
    ease: Ease,
}

impl Tween {
    pub fn new(from: Vec3, to: Vec3, start: f32, duration: f32, ease: Ease) -> Self {
        Self {
            from,
            to,
            start,
            duration,
            ease,
        }
    }

    /// A tween that never moves.
    pub fn hold(value: Vec3) -> Self {
        Self::new(value, value, 0.0, 0.0, Ease::Linear)
    }

    pub fn target(&self) -> Vec3 {
        self.to
    }

    pub fn is_finished(&self, now: f32) -> bool {
        now >= self.start + self.duration
    }

    pub fn sample(&self, now: f32) -> Vec3 {
        if self.duration <= 0.0 {
            return if now >= self.start { self.to } else { self.from };
        }
        let t = (now - self.start) / self.duration;
        self.from.lerp(self.to, self.ease.apply(t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CURVES: [Ease; 4] = [
        Ease::Linear,
        Ease::BackOut(2.0),
        Ease::ElasticOut {
            amplitude: 1.0,
            period: 0.8,
        },
        Ease::ElasticOut {
            amplitude: 1.0,
            period: 0.5,
        },
    ];

    #[test]
    fn curves_start_at_zero_and_end_at_one() {
        for ease in CURVES {
            assert!(ease.apply(0.0).abs() < 1e-5, "{ease:?} at 0");
            assert!((ease.apply(1.0) - 1.0).abs() < 1e-5, "{ease:?} at 1");
        }
    }

    #[test]
    fn back_out_overshoots() {
        let peak = (1..100)
            .map(|i| Ease::BackOut(2.0).apply(i as f32 / 100.0))
            .fold(f32::MIN, f32::max);
        assert!(peak > 1.05);
    }

    #[test]
    fn elastic_out_settles_near_one() {
        let ease = Ease::ElasticOut {
            amplitude: 1.0,
            period: 0.8,
        };
        assert!((ease.apply(0.9) - 1.0).abs() < 0.01);
    }

    #[test]
    fn tween_holds_start_value_during_delay() {
        let tw = Tween::new(Vec3::ZERO, Vec3::ONE, 2.0, 1.0, Ease::Linear);
        assert_eq!(tw.sample(0.5), Vec3::ZERO);
        assert_eq!(tw.sample(2.5), Vec3::splat(0.5));
        assert_eq!(tw.sample(10.0), Vec3::ONE);
        assert!(!tw.is_finished(2.9));
        assert!(tw.is_finished(3.0));
    }

    #[test]
    fn hold_is_constant() {
        let tw = Tween::hold(Vec3::X);
        assert_eq!(tw.sample(0.0), Vec3::X);
        assert_eq!(tw.sample(100.0), Vec3::X);
    }
}
