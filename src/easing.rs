//! Easing curves for progress transitions.
//!
//! An easing maps normalized elapsed time to normalized animation value.
//! `Easing` ships the standard catalogue; any `Fn(f32) -> f32` closure can
//! be supplied instead for custom curves.

/// Mapping from normalized time `[0, 1]` to normalized progress.
///
/// `map(0.0) == 0.0` and `map(1.0) == 1.0` is an expected (but unenforced)
/// contract: transitions sample `map(1.0)` on their final frame, so a curve
/// that does not end at 1.0 will not land exactly on its target.
pub trait Interpolator {
    fn map(&self, t: f32) -> f32;
}

impl<F> Interpolator for F
where
    F: Fn(f32) -> f32,
{
    fn map(&self, t: f32) -> f32 {
        self(t)
    }
}

/// Built-in easing curves.
///
/// The catalogue matches the classic mobile-toolkit interpolators: quadratic
/// accelerate/decelerate ramps, a symmetric cosine blend, and the
/// anticipate/overshoot/bounce family (tension 2.0, anticipate-overshoot
/// tension 3.0).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    Linear,
    /// Quadratic accelerate
    EaseIn,
    /// Quadratic decelerate
    EaseOut,
    /// Symmetric accelerate-decelerate (the default)
    #[default]
    EaseInOut,
    /// Pulls back before moving forward
    Anticipate,
    /// Flies past the target, then settles back
    Overshoot,
    /// Anticipate on the way in, overshoot on the way out
    AnticipateOvershoot,
    /// Drops onto the target and bounces to rest
    Bounce,
}

const TENSION: f32 = 2.0;

impl Easing {
    /// Every built-in curve, in display order
    pub const ALL: [Easing; 8] = [
        Easing::Linear,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
        Easing::Anticipate,
        Easing::Overshoot,
        Easing::AnticipateOvershoot,
        Easing::Bounce,
    ];
}

fn anticipate(t: f32, tension: f32) -> f32 {
    t * t * ((tension + 1.0) * t - tension)
}

fn overshoot(t: f32, tension: f32) -> f32 {
    let t = t - 1.0;
    t * t * ((tension + 1.0) * t + tension) + 1.0
}

fn bounce_segment(t: f32) -> f32 {
    t * t * 8.0
}

fn bounce(t: f32) -> f32 {
    let t = t * 1.1226;
    if t < 0.3535 {
        bounce_segment(t)
    } else if t < 0.7408 {
        bounce_segment(t - 0.54719) + 0.7
    } else if t < 0.9644 {
        bounce_segment(t - 0.8526) + 0.9
    } else {
        bounce_segment(t - 1.0435) + 0.95
    }
}

impl Interpolator for Easing {
    fn map(&self, t: f32) -> f32 {
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t,
            Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::EaseInOut => ((t + 1.0) * std::f32::consts::PI).cos() / 2.0 + 0.5,
            Easing::Anticipate => anticipate(t, TENSION),
            Easing::Overshoot => overshoot(t, TENSION),
            Easing::AnticipateOvershoot => {
                let a = t * 2.0;
                if a < 1.0 {
                    0.5 * anticipate(a, TENSION * 1.5)
                } else {
                    0.5 * (overshoot(a - 1.0, TENSION * 1.5) + 1.0)
                }
            }
            Easing::Bounce => bounce(t),
        }
    }
}

impl std::fmt::Display for Easing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Easing::Linear => "Linear",
            Easing::EaseIn => "Ease in",
            Easing::EaseOut => "Ease out",
            Easing::EaseInOut => "Ease in-out",
            Easing::Anticipate => "Anticipate",
            Easing::Overshoot => "Overshoot",
            Easing::AnticipateOvershoot => "Anticipate overshoot",
            Easing::Bounce => "Bounce",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_curves_start_at_zero() {
        for easing in Easing::ALL {
            assert!(
                easing.map(0.0).abs() < 1e-4,
                "{} does not start at 0",
                easing
            );
        }
    }

    #[test]
    fn all_curves_end_at_one() {
        for easing in Easing::ALL {
            // Bounce is a piecewise approximation; its endpoint lands within
            // a percent of 1.0, everything else is exact.
            let tolerance = if easing == Easing::Bounce { 1e-2 } else { 1e-4 };
            assert!(
                (easing.map(1.0) - 1.0).abs() < tolerance,
                "{} does not end at 1 (got {})",
                easing,
                easing.map(1.0)
            );
        }
    }

    #[test]
    fn ease_in_out_is_symmetric() {
        let easing = Easing::EaseInOut;
        assert!((easing.map(0.5) - 0.5).abs() < 1e-4);
        for t in [0.1_f32, 0.2, 0.3, 0.4] {
            let lo = easing.map(t);
            let hi = easing.map(1.0 - t);
            assert!((lo + hi - 1.0).abs() < 1e-4);
        }
    }

    #[test]
    fn overshoot_exceeds_target_mid_flight() {
        let peak = (1..100)
            .map(|i| Easing::Overshoot.map(i as f32 / 100.0))
            .fold(f32::MIN, f32::max);
        assert!(peak > 1.0);
    }

    #[test]
    fn anticipate_dips_below_zero_mid_flight() {
        let dip = (1..100)
            .map(|i| Easing::Anticipate.map(i as f32 / 100.0))
            .fold(f32::MAX, f32::min);
        assert!(dip < 0.0);
    }

    #[test]
    fn closures_are_interpolators() {
        let custom = |t: f32| t * t * t;
        assert_eq!(custom.map(0.0), 0.0);
        assert_eq!(custom.map(1.0), 1.0);
        assert_eq!(custom.map(0.5), 0.125);
    }
}
