//! Folded-parabola sine and cosine.
//!
//! These are the cheapest approximations in the crate: a scale, one fold, and two multiplies,
//! with an absolute error of at most 0.02. Use them when the input is already a float in radians
//! and a 2% worst-case error is acceptable, eg, for blending gains or shaping setpoints. When the
//! angle is a fixed-point sensor value, or you need an order of magnitude more accuracy, use
//! [`lookup`](crate::lookup) instead.
//!
//! The construction: scaling by 1/π turns sine's period into 2; `y = x - x·|x|` folds the ramp
//! into a triangle-of-parabolas with the right zero crossings; and `y · (3.1 + 3.6·|y|)` pulls
//! the parabola onto the sine curve.

use crate::float_math;
use core::f32::consts::FRAC_1_PI;
use uom::si::angle::radian;
use uom::si::f32::Angle;

/// 3 · 2²³. The f32 spacing at this magnitude is exactly 2, so adding and subtracting it
/// rounds to the nearest multiple of 2, one full period of the normalized wave.
const WRAP: f32 = 25_165_824.0;

/// Evaluates the folded parabola at `x`, where `x` is an angle normalized by 1/π.
#[inline]
fn folded(x: f32) -> f32 {
    let y = x - x * float_math::abs(x);
    y * (3.1 + 3.6 * float_math::abs(y))
}

/// Approximates the sine of `angle`.
///
/// Accurate to within 0.02 (absolute) over [-π, π]. No range reduction is performed: inputs
/// outside [-π, π] degrade smoothly rather than wrapping, so reduce the angle first if it can
/// accumulate past half a turn.
///
/// ```
/// use celerity::parabolic;
/// use uom::si::angle::degree;
/// use uom::si::f32::Angle;
///
/// let s = parabolic::sin(Angle::new::<degree>(30.0));
/// assert!((s - 0.5).abs() < 0.02);
/// ```
#[inline]
#[must_use]
pub fn sin(angle: Angle) -> f32 {
    folded(angle.get::<radian>() * FRAC_1_PI)
}

/// Approximates the cosine of `angle`.
///
/// Same construction and error bound as [`sin`], with a quarter-phase pre-shift. The shift is
/// wrapped with a large-constant add rather than a modulo, which as a side effect reduces the
/// phase for inputs well outside [-π, π] too.
///
/// ```
/// use celerity::parabolic;
/// use uom::si::angle::radian;
/// use uom::si::f32::Angle;
///
/// let c = parabolic::cos(Angle::new::<radian>(core::f32::consts::PI));
/// assert!((c + 1.0).abs() < 0.02);
/// ```
#[inline]
#[must_use]
pub fn cos(angle: Angle) -> f32 {
    let x = angle.get::<radian>() * FRAC_1_PI + 0.5;
    let z = x + WRAP;
    let x = x - (z - WRAP);
    folded(x)
}

#[cfg(test)]
mod tests {
    use super::{cos, sin};
    use core::f32::consts::{FRAC_PI_2, PI};
    use uom::si::angle::radian;
    use uom::si::f32::Angle;

    fn r(radians: f32) -> Angle {
        Angle::new::<radian>(radians)
    }

    #[test]
    fn sin_hits_the_anchor_points() {
        assert_eq!(sin(r(0.0)), 0.0);
        assert!((sin(r(FRAC_PI_2)) - 1.0).abs() < 0.02);
        assert!((sin(r(-FRAC_PI_2)) + 1.0).abs() < 0.02);
        assert!(sin(r(PI)).abs() < 0.02);
    }

    #[test]
    fn cos_hits_the_anchor_points() {
        assert!((cos(r(0.0)) - 1.0).abs() < 0.02);
        assert!(cos(r(FRAC_PI_2)).abs() < 0.02);
        assert!((cos(r(PI)) + 1.0).abs() < 0.02);
        assert!((cos(r(-PI)) + 1.0).abs() < 0.02);
    }

    #[test]
    fn sin_stays_within_the_error_bound_over_a_half_turn_each_way() {
        let steps = 20_000;
        for i in 0..=steps {
            let x = -PI + 2.0 * PI * (i as f32) / (steps as f32);
            let reference = f64::sin(f64::from(x)) as f32;
            let error = (sin(r(x)) - reference).abs();
            assert!(error <= 0.02, "sin({x}) off by {error}");
        }
    }

    #[test]
    fn cos_stays_within_the_error_bound_over_a_half_turn_each_way() {
        let steps = 20_000;
        for i in 0..=steps {
            let x = -PI + 2.0 * PI * (i as f32) / (steps as f32);
            let reference = f64::cos(f64::from(x)) as f32;
            let error = (cos(r(x)) - reference).abs();
            assert!(error <= 0.02, "cos({x}) off by {error}");
        }
    }

    // the phase wrap keeps cosine usable a few turns out, even though sine makes no such promise
    #[test]
    fn cos_survives_a_few_extra_turns() {
        for turns in [-3.0_f32, -1.0, 1.0, 3.0] {
            let x = turns * 2.0 * PI + 0.5;
            let reference = f64::cos(f64::from(x)) as f32;
            assert!((cos(r(x)) - reference).abs() < 0.03);
        }
    }

    #[test]
    fn sin_is_odd() {
        for i in 1..100 {
            let x = PI * (i as f32) / 100.0;
            assert_eq!(sin(r(x)), -sin(r(-x)));
        }
    }
}
