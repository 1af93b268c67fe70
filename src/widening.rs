/// Multiplies two signed 16-bit values into their exact 32-bit product.
///
/// This is a performance primitive, not an approximation: the product of two `i16` always fits
/// in an `i32` (including `i16::MIN * i16::MIN`), so the result is exact and can never
/// overflow. The widen-then-multiply form lowers to the native widening multiply on targets
/// that have one (AVR's `muls` sequence, Arm's halfword multiplies, a plain `imul` elsewhere),
/// so there is nothing to select between at build time.
///
/// ```
/// use celerity::wide_mul;
///
/// assert_eq!(wide_mul(-300, 250), -75_000);
/// assert_eq!(wide_mul(i16::MIN, i16::MIN), 1_073_741_824);
/// ```
#[inline]
#[must_use]
pub fn wide_mul(a: i16, b: i16) -> i32 {
    i32::from(a) * i32::from(b)
}

#[cfg(test)]
mod tests {
    use super::wide_mul;
    use quickcheck::quickcheck;

    #[test]
    fn corner_products_are_exact() {
        assert_eq!(wide_mul(0, 0), 0);
        assert_eq!(wide_mul(i16::MAX, i16::MAX), 1_073_676_289);
        assert_eq!(wide_mul(i16::MIN, i16::MIN), 1_073_741_824);
        assert_eq!(wide_mul(i16::MIN, i16::MAX), -1_073_709_056);
        assert_eq!(wide_mul(i16::MIN, 1), -32_768);
        assert_eq!(wide_mul(-1, i16::MAX), -32_767);
    }

    quickcheck! {
        fn matches_the_widened_reference(a: i16, b: i16) -> bool {
            i64::from(wide_mul(a, b)) == i64::from(a) * i64::from(b)
        }
    }
}
