//! Table-driven sine and cosine over fixed-point decidegree angles.
//!
//! This is the workhorse pair for sensor pipelines that keep their angles as [`DeciAngle`]:
//! the angle is folded into the first quadrant, very small angles take a linear fast path, and
//! everything else is a single read from a 91-entry table of `1000·sin(d°)` values. No float
//! transcendental is ever called.
//!
//! Accuracy: the table is indexed by whole degrees (truncating), so the result can be off by up
//! to one degree's worth of slope. Measured against a reference sine, the absolute error stays
//! below 0.016 everywhere, and below 0.001 at whole-degree inputs and on the small-angle branch.

use crate::decidegrees::{fold_quadrant, DeciAngle, RADIANS_PER_TENTH};

/// `round(1000 · sin(d°))` for whole degrees 0 through 90.
///
/// Monotonically non-decreasing, `[0] == 0`, `[90] == 1000`.
static SIN_MILLI: [u16; 91] = [
    0, 17, 35, 52, 70, 87, 105, 122, 139, 156, 174, 191, 208, 225, 242, 259, 276, 292, 309, 326,
    342, 358, 375, 391, 407, 423, 438, 454, 469, 485, 500, 515, 530, 545, 559, 574, 588, 602, 616,
    629, 643, 656, 669, 682, 695, 707, 719, 731, 743, 755, 766, 777, 788, 799, 809, 819, 829, 839,
    848, 857, 866, 875, 883, 891, 899, 906, 914, 921, 927, 934, 940, 946, 951, 956, 961, 966, 970,
    974, 978, 982, 985, 988, 990, 993, 995, 996, 998, 999, 999, 1000, 1000,
];

/// Below this folded angle (10.5°) the linear small-angle value is at least as accurate as the
/// table.
const SMALL_ANGLE_TENTHS: i16 = 105;

/// Sine of the folded angle with the combined input/quadrant sign applied.
#[inline]
fn sin_folded(folded: i16, sign: i16) -> f32 {
    if folded < SMALL_ANGLE_TENTHS {
        return f32::from(folded * sign) * RADIANS_PER_TENTH;
    }

    let milli = i32::from(SIN_MILLI[usize::from(folded as u16) / 10]);
    (milli * i32::from(sign)) as f32 / 1000.0
}

/// Approximates the sine of a fixed-point decidegree angle.
///
/// Any `i16` value is accepted; whole turns are reduced away internally.
///
/// ```
/// use celerity::{lookup, DeciAngle};
///
/// assert_eq!(lookup::sin(DeciAngle::new(900)), 1.0);
/// assert_eq!(lookup::sin(DeciAngle::new(2700)), -1.0);
/// assert!((lookup::sin(DeciAngle::new(300)) - 0.5).abs() < 0.001);
/// ```
#[inline]
#[must_use]
pub fn sin(angle: DeciAngle) -> f32 {
    let (folded, sign) = fold_quadrant(i32::from(angle.tenths()));
    sin_folded(folded, sign)
}

/// Approximates the cosine of a fixed-point decidegree angle.
///
/// Exactly `sin(900 - angle)`; the phase shift is computed without overflow for every `i16`
/// input, so the identity holds even at the ends of the range.
///
/// ```
/// use celerity::{lookup, DeciAngle};
///
/// assert_eq!(lookup::cos(DeciAngle::ZERO), 1.0);
/// assert_eq!(lookup::cos(DeciAngle::new(1800)), -1.0);
/// ```
#[inline]
#[must_use]
pub fn cos(angle: DeciAngle) -> f32 {
    let (folded, sign) = fold_quadrant(900 - i32::from(angle.tenths()));
    sin_folded(folded, sign)
}
