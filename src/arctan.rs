//! Fast arctangent, in one-argument and two-argument (quadrant-aware) forms.
//!
//! [`atan`] maps a float ratio to radians through a short rational fit. [`atan2`] and
//! [`atan2_legacy`] take raw signed integer components, as they come out of a sensor driver, and
//! produce a quadrant-correct [`DeciAngle`]. Only the ratio of the components matters, so the
//! caller's fixed-point scale is irrelevant.
//!
//! The two-argument variants are independently tuned fits with slightly different rounding
//! behavior. They are deliberately kept as two separate operations: controllers tuned against
//! one variant's error profile keep calling exactly that variant.

use crate::decidegrees::DeciAngle;
use crate::float_math;
use core::f32::consts::FRAC_PI_2;
use uom::si::angle::radian;
use uom::si::f32::Angle;

/// Blend constant of the rational arctangent fit.
const BLEND: f32 = 0.596_227;

/// Approximates the arctangent of `tangent`, in radians.
///
/// Accurate to within 0.005 rad; the rational form saturates toward ±π/2 as the magnitude
/// grows, so large inputs stay valid up to the point where `tangent²` overflows `f32` (around
/// 1.8·10¹⁹) — beyond that the result is an unspecified non-finite value. The sign travels
/// through the bit pattern rather than a multiply, which makes the result exactly odd:
/// `atan(-x) == -atan(x)` bit for bit.
///
/// ```
/// use celerity::arctan;
/// use uom::si::angle::radian;
///
/// let angle = arctan::atan(1.0);
/// assert!((angle.get::<radian>() - core::f32::consts::FRAC_PI_4).abs() < 0.005);
/// ```
#[inline]
#[must_use]
pub fn atan(tangent: f32) -> Angle {
    let sign = tangent.to_bits() & 0x8000_0000;
    let bx = float_math::abs(BLEND * tangent);
    let num = bx + tangent * tangent;
    let first_quadrant = num / (1.0 + bx + num);
    let signed = f32::from_bits(sign | first_quadrant.to_bits());
    Angle::new::<radian>(signed * FRAC_PI_2)
}

/// Approximates the two-argument arctangent of `y / x` in tenths of a degree.
///
/// Quadrant semantics follow the usual convention: `(0, +x)` is 0, `(+y, 0)` is 900, `(0, -x)`
/// is 1800, `(-y, 0)` is -900, and results stay within ±1800. Accurate to about half a degree.
///
/// Both arguments zero is a precondition violation: the result is an unspecified (but defined)
/// value, inherited from the division by zero.
///
/// ```
/// use celerity::{arctan, DeciAngle};
///
/// // 45° off the x axis, whatever the sensor scale
/// let angle = arctan::atan2(250, 250);
/// assert!(angle.difference(DeciAngle::new(450)).tenths().abs() <= 5);
/// ```
#[inline]
#[must_use]
pub fn atan2(y: i32, x: i32) -> DeciAngle {
    let small_ratio = y.unsigned_abs() < x.unsigned_abs();
    let z = if small_ratio {
        y as f32 / x as f32
    } else {
        x as f32 / y as f32
    };

    // Padé-style fit tuned to emit tenths of a degree directly for |z| <= 1
    let mut a = (2046.43 * (z / (3.5714 + z * z))) as i16;

    if small_ratio {
        if x < 0 {
            if y < 0 {
                a -= 1800;
            } else {
                a += 1800;
            }
        }
    } else {
        a = 900 - a;
        if y < 0 {
            a -= 1800;
        }
    }

    DeciAngle::new(a)
}

/// The earlier tuning of [`atan2`], kept selectable for callers pinned to its output.
///
/// Same contract and quadrant convention as [`atan2`], with the `(573, 0.28)` coefficient set.
/// The fitted term is truncated before the quarter-turn offset is applied, so an infinite ratio
/// (`x == 0`) degenerates to the axis value rather than poisoning the result.
#[inline]
#[must_use]
pub fn atan2_legacy(y: i32, x: i32) -> DeciAngle {
    let z = y as f32 / x as f32;
    let mut a;

    if y.unsigned_abs() < x.unsigned_abs() {
        a = (573.0 * z / (1.0 + 0.28 * z * z)) as i16;
        if x < 0 {
            if y < 0 {
                a -= 1800;
            } else {
                a += 1800;
            }
        }
    } else {
        a = 900 - (573.0 * z / (z * z + 0.28)) as i16;
        if y < 0 {
            a -= 1800;
        }
    }

    DeciAngle::new(a)
}

#[cfg(test)]
mod tests {
    use super::{atan, atan2, atan2_legacy};
    use crate::decidegrees::DeciAngle;
    use quickcheck::quickcheck;
    use rstest::rstest;
    use uom::si::angle::radian;

    #[test]
    fn atan_of_zero_is_zero() {
        assert_eq!(atan(0.0).get::<radian>(), 0.0);
    }

    #[test]
    fn atan_stays_within_the_error_bound() {
        let mut x = 1.0e-4_f32;
        while x < 1.0e6 {
            for t in [x, -x] {
                let reference = f64::atan(f64::from(t)) as f32;
                let error = (atan(t).get::<radian>() - reference).abs();
                assert!(error < 0.005, "atan({t}) off by {error}");
            }
            x *= 1.07;
        }
    }

    #[test]
    fn atan_saturates_toward_a_quarter_turn() {
        let almost = atan(1.0e15).get::<radian>();
        assert!((almost - core::f32::consts::FRAC_PI_2).abs() < 0.001);
    }

    quickcheck! {
        fn atan_is_exactly_odd(x: f32) -> bool {
            // keep the square finite; beyond that the contract is void anyway
            if !x.is_finite() || x.abs() > 1.0e18 {
                return true;
            }
            atan(-x).get::<radian>().to_bits() == (-atan(x).get::<radian>()).to_bits()
        }
    }

    // the documented axis convention, for both tunings
    #[rstest]
    #[case(0, 100, 0)]
    #[case(100, 0, 900)]
    #[case(0, -100, 1800)]
    #[case(-100, 0, -900)]
    fn atan2_axis_convention(#[case] y: i32, #[case] x: i32, #[case] expected: i16) {
        assert_eq!(atan2(y, x), DeciAngle::new(expected));
        assert_eq!(atan2_legacy(y, x), DeciAngle::new(expected));
    }

    #[rstest]
    #[case(100, 100, 450)]
    #[case(-100, 100, -450)]
    #[case(100, -100, 1350)]
    #[case(-100, -100, -1350)]
    fn atan2_diagonals_land_in_the_right_quadrant(
        #[case] y: i32,
        #[case] x: i32,
        #[case] expected: i16,
    ) {
        for got in [atan2(y, x), atan2_legacy(y, x)] {
            assert!(
                got.difference(DeciAngle::new(expected)).tenths().abs() <= 5,
                "({y}, {x}) gave {got}"
            );
        }
    }

    #[test]
    fn atan2_tracks_the_reference_around_the_circle() {
        for degrees in -179..=180_i32 {
            let theta = f64::from(degrees).to_radians();
            let y = (1000.0 * theta.sin()).round() as i32;
            let x = (1000.0 * theta.cos()).round() as i32;
            let expected =
                DeciAngle::new((10.0 * f64::from(y).atan2(f64::from(x)).to_degrees()).round() as i16);
            for got in [atan2(y, x), atan2_legacy(y, x)] {
                let error = got.difference(expected).tenths().abs();
                assert!(error <= 5, "{degrees}° gave {got}, expected {expected}");
            }
        }
    }

    quickcheck! {
        fn atan2_stays_within_half_turns(y: i32, x: i32) -> bool {
            let a = atan2(y, x).tenths();
            let b = atan2_legacy(y, x).tenths();
            (-1800..=1800).contains(&a) && (-1800..=1800).contains(&b)
        }

        // the two tunings are rearrangements of the same fit and may only disagree by rounding
        fn atan2_variants_agree_closely(y: i32, x: i32) -> bool {
            if y == 0 && x == 0 {
                return true;
            }
            atan2(y, x)
                .difference(atan2_legacy(y, x))
                .tenths()
                .abs()
                <= 2
        }
    }
}
