//! Float primitives that work in both std and no-std environments.
//!
//! The approximations in this crate deliberately avoid transcendental calls, so the only float
//! operations they consume are `abs`, `round`, and `rem_euclid`. This module provides those
//! through either the standard library (when the `std` feature is enabled) or `libm` (in no-std
//! environments).

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!(
    "celerity requires floating-point math support. \
     Enable either the `std` feature (default) or the `libm` feature for no-std environments."
);

#[cfg(feature = "std")]
#[inline]
pub(crate) fn abs(x: f32) -> f32 {
    f32::abs(x)
}

#[cfg(feature = "std")]
#[inline]
pub(crate) fn round(x: f32) -> f32 {
    f32::round(x)
}

#[cfg(feature = "std")]
#[inline]
pub(crate) fn rem_euclid(x: f32, rhs: f32) -> f32 {
    f32::rem_euclid(x, rhs)
}

#[cfg(all(not(feature = "std"), feature = "libm"))]
#[inline]
pub(crate) fn abs(x: f32) -> f32 {
    libm::fabsf(x)
}

#[cfg(all(not(feature = "std"), feature = "libm"))]
#[inline]
pub(crate) fn round(x: f32) -> f32 {
    libm::roundf(x)
}

#[cfg(all(not(feature = "std"), feature = "libm"))]
#[inline]
pub(crate) fn rem_euclid(x: f32, rhs: f32) -> f32 {
    let r = libm::fmodf(x, rhs);
    if r < 0.0 {
        r + libm::fabsf(rhs)
    } else {
        r
    }
}
