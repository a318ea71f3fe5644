//! Easing curves.
//!
//! Curves follow the usual animation-library naming: `power2.out` is a cubic
//! ease-out, `power3.out` a quartic one, and so on.

use std::f64::consts::PI;

/// An easing curve mapping normalized time to normalized progress.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum Ease {
    /// No easing. Used by scrubbed (scroll-linked) animations.
    Linear,
    #[default]
    Power1Out,
    Power1InOut,
    Power2Out,
    Power3Out,
    SineInOut,
    /// Overshoots the target before settling. The argument is the overshoot.
    BackOut(f64),
    /// Springs past the target and oscillates back.
    ElasticOut { amplitude: f64, period: f64 },
}

impl Ease {
    /// `back.out(1.7)`
    pub const BACK_OUT: Self = Self::BackOut(1.7);

    /// `elastic.out(1, 0.4)`
    pub const ELASTIC_OUT: Self = Self::ElasticOut {
        amplitude: 1.0,
        period: 0.4,
    };

    /// Map `t` in `[0, 1]` to eased progress.
    ///
    /// Inputs outside the unit range are clamped. Every curve returns exactly
    /// `0.0` at `t = 0` and `1.0` at `t = 1`; curves with overshoot may leave
    /// the unit range in between.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        if t == 0.0 || t == 1.0 {
            return t;
        }

        match self {
            Self::Linear => t,
            Self::Power1Out => 1.0 - (1.0 - t).powi(2),
            Self::Power1InOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Self::Power2Out => 1.0 - (1.0 - t).powi(3),
            Self::Power3Out => 1.0 - (1.0 - t).powi(4),
            Self::SineInOut => -((PI * t).cos() - 1.0) / 2.0,
            Self::BackOut(overshoot) => {
                let u = t - 1.0;
                1.0 + (overshoot + 1.0) * u.powi(3) + overshoot * u.powi(2)
            }
            Self::ElasticOut { amplitude, period } => {
                let amplitude = amplitude.max(1.0);
                let phase = period / (2.0 * PI) * (1.0 / amplitude).asin();
                amplitude * 2f64.powf(-10.0 * t) * ((t - phase) * (2.0 * PI) / period).sin() + 1.0
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Ease; 8] = [
        Ease::Linear,
        Ease::Power1Out,
        Ease::Power1InOut,
        Ease::Power2Out,
        Ease::Power3Out,
        Ease::SineInOut,
        Ease::BACK_OUT,
        Ease::ELASTIC_OUT,
    ];

    #[test]
    fn test_endpoints() {
        for ease in ALL {
            assert_eq!(ease.apply(0.0), 0.0, "{ease:?} at 0");
            assert_eq!(ease.apply(1.0), 1.0, "{ease:?} at 1");
        }
    }

    #[test]
    fn test_clamps_input() {
        assert_eq!(Ease::Power2Out.apply(-3.0), 0.0);
        assert_eq!(Ease::Power2Out.apply(7.5), 1.0);
    }

    #[test]
    fn test_ease_out_runs_ahead_of_linear() {
        for ease in [Ease::Power1Out, Ease::Power2Out, Ease::Power3Out] {
            assert!(ease.apply(0.5) > 0.5, "{ease:?}");
        }
        assert!(Ease::Power3Out.apply(0.3) > Ease::Power2Out.apply(0.3));
    }

    #[test]
    fn test_in_out_is_symmetric() {
        assert!((Ease::SineInOut.apply(0.5) - 0.5).abs() < 1e-12);
        assert!((Ease::Power1InOut.apply(0.5) - 0.5).abs() < 1e-12);
        let a = Ease::SineInOut.apply(0.2);
        let b = Ease::SineInOut.apply(0.8);
        assert!((a + b - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_back_out_overshoots() {
        let peak = (1..100)
            .map(|i| Ease::BACK_OUT.apply(i as f64 / 100.0))
            .fold(f64::MIN, f64::max);
        assert!(peak > 1.0);
    }

    #[test]
    fn test_linear_is_identity() {
        assert_eq!(Ease::Linear.apply(0.25), 0.25);
        assert_eq!(Ease::Linear.apply(0.75), 0.75);
    }
}
