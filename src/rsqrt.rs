//! Fast inverse square root, in three independently tuned variants.
//!
//! Each variant reinterprets the input's bits as an integer, subtracts half of them from a tuned
//! magic constant to get a first guess, and polishes that guess with a single Newton step for
//! `f(r) = 1/r² - y`. One multiply-heavy iteration instead of a library `sqrt` and a divide is
//! the entire point: the result lands within 0.2% of `1/√y`, which is plenty for normalizing
//! accelerometer and magnetometer vectors in an attitude filter.
//!
//! The three variants differ only in magic constant and refinement coefficients. They are kept
//! as separate named operations on purpose: filters tuned against one variant's error profile
//! (or regression tests pinned to its exact outputs) keep calling exactly that variant.
//!
//! # Portability
//!
//! The bit-level trick assumes the IEEE-754 binary32 layout that `f32` guarantees on every
//! platform Rust supports; what it does *not* survive is a change of format, so the exact
//! outputs are not portable to targets with nonstandard floats.
//!
//! # Preconditions
//!
//! Results are unspecified for inputs that are zero, negative, subnormal, or not finite. No
//! variant guards against them; callers validate first, once, outside the hot loop.

/// The classic magic constant.
const MAGIC: u32 = 0x5f37_59df;

/// Retuned magic constant used by [`rsqrt_tuned`].
const MAGIC_TUNED: u32 = 0x5f1f_fff9;

/// Approximates `1/√y` with the classic constant and a textbook Newton step.
///
/// Within 0.2% of the exact value for positive finite normal inputs.
///
/// ```
/// use celerity::rsqrt;
///
/// let r = rsqrt::rsqrt(25.0);
/// assert!((r * 5.0 - 1.0).abs() < 0.002);
/// ```
#[inline]
#[must_use]
pub fn rsqrt(y: f32) -> f32 {
    let half = 0.5 * y;
    let r = f32::from_bits(MAGIC.wrapping_sub(y.to_bits() >> 1));
    r * (1.5 - half * r * r)
}

/// Approximates `1/√x` with a retuned constant pair.
///
/// The magic constant and the refinement coefficients were fitted together, which roughly
/// halves the worst-case error of [`rsqrt`]. Same contract otherwise.
#[inline]
#[must_use]
pub fn rsqrt_tuned(x: f32) -> f32 {
    let r = f32::from_bits(MAGIC_TUNED.wrapping_sub(x.to_bits() >> 1));
    r * (1.68191409 - 0.703952253 * x * r * r)
}

/// Approximates `1/√x` with the classic constant and the three-halves refinement form.
///
/// Algebraically the same step as [`rsqrt`] written as `0.5·r·(3 - x·r²)`; the float rounding
/// differs in the last bits, so callers pinned to this variant's exact outputs get them.
#[inline]
#[must_use]
pub fn rsqrt_legacy(x: f32) -> f32 {
    let r = f32::from_bits(MAGIC.wrapping_sub(x.to_bits() >> 1));
    0.5 * r * (3.0 - x * r * r)
}

#[cfg(test)]
mod tests {
    use super::{rsqrt, rsqrt_legacy, rsqrt_tuned};

    // sweep positive normals across 15 decades; `r·√y` should stay within 0.2% of 1
    fn assert_within_two_permille(f: fn(f32) -> f32, name: &str) {
        let mut y = 1.0e-6_f32;
        while y < 1.0e9 {
            let product = f64::from(f(y)) * f64::from(y).sqrt();
            let error = (product - 1.0).abs();
            assert!(error < 0.002, "{name}({y}) off by {error}");
            y *= 1.37;
        }
    }

    #[test]
    fn rsqrt_is_within_two_permille() {
        assert_within_two_permille(rsqrt, "rsqrt");
    }

    #[test]
    fn rsqrt_tuned_is_within_two_permille() {
        assert_within_two_permille(rsqrt_tuned, "rsqrt_tuned");
    }

    #[test]
    fn rsqrt_legacy_is_within_two_permille() {
        assert_within_two_permille(rsqrt_legacy, "rsqrt_legacy");
    }

    #[test]
    fn exact_powers_of_four_are_close_to_exact() {
        for (input, expected) in [(1.0_f32, 1.0_f32), (4.0, 0.5), (16.0, 0.25), (64.0, 0.125)] {
            for f in [rsqrt, rsqrt_tuned, rsqrt_legacy] {
                assert!((f(input) - expected).abs() / expected < 0.002);
            }
        }
    }

    #[test]
    fn vector_normalization_stays_unit_length() {
        // the motivating use: normalize an accelerometer reading without a sqrt or divide
        let (ax, ay, az) = (0.31_f32, -0.12, 0.94);
        let norm = rsqrt(ax * ax + ay * ay + az * az);
        let length_squared = (ax * norm).powi(2) + (ay * norm).powi(2) + (az * norm).powi(2);
        assert!((length_squared - 1.0).abs() < 0.005);
    }
}
