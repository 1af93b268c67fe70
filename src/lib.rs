//! This library provides fast, bounded-error stand-ins for the trigonometry in your control
//! loop, for firmware with other things to spend cycles on than libm.
//!
//! Inside an attitude filter or a motor commutation loop, `sin`, `atan2`, and `1/sqrt` run
//! thousands of times per second, and the exact library versions are the single most expensive
//! thing in the loop. Every function here trades a small, documented, tested error bound for a
//! large constant-factor speedup: a handful of multiplies, a table read, or a bit trick, and
//! never a call into a transcendental.
//!
//! All functions are pure, stateless, and allocation-free; the only global is an immutable sine
//! table, so everything is trivially safe to call from concurrent contexts. Angles come in two
//! currencies, matching how control code actually holds them:
//!
//! - **radians as floats**, typed as [`uom::si::f32::Angle`] so degrees and radians cannot be
//!   confused, consumed by [`parabolic::sin`]/[`parabolic::cos`] and produced by
//!   [`arctan::atan`];
//! - **tenths of a degree as `i16`** (the [`DeciAngle`] fixed-point type), consumed by
//!   [`lookup::sin`]/[`lookup::cos`] and produced by [`arctan::atan2`].
//!
//! # Picking a function
//!
//! | function | argument | worst measured error |
//! |---|---|---|
//! | [`parabolic::sin`], [`parabolic::cos`] | radians ([-π, π]) | 0.02 |
//! | [`lookup::sin`], [`lookup::cos`] | [`DeciAngle`], any | 0.016 (0.001 at whole degrees) |
//! | [`arctan::atan`] | float ratio | 0.005 rad |
//! | [`arctan::atan2`], [`arctan::atan2_legacy`] | integer components | ~0.5° |
//! | [`rsqrt::rsqrt`] and friends | positive finite float | 0.2% relative |
//!
//! [`wide_mul`] rounds out the set: it is not an approximation at all, just the exact
//! 16×16 → 32 signed multiply these loops lean on.
//!
//! # Examples
//!
//! Tilt from a raw accelerometer reading, straight from sensor counts to a table-driven sine,
//! with no float angle in sight:
//!
//! ```
//! use celerity::{arctan, lookup, rsqrt, DeciAngle};
//!
//! // accelerometer counts as they come out of the IMU driver
//! let (ax, ay, az) = (120_i32, -40_i32, 980_i32);
//!
//! // pitch and roll in tenths of a degree; only the ratio matters, not the scale
//! let pitch = arctan::atan2(ax, az);
//! let roll = arctan::atan2(ay, az);
//! assert!(pitch.difference(DeciAngle::new(70)).tenths().abs() <= 2);
//! assert!(roll.difference(DeciAngle::new(-23)).tenths().abs() <= 2);
//!
//! // feed the fixed-point angles straight back into the lookup sine
//! let sin_pitch = lookup::sin(pitch);
//! assert!((sin_pitch - 0.12).abs() < 0.01);
//!
//! // and normalize the raw vector without a sqrt or a divide
//! let norm = rsqrt::rsqrt((ax * ax + ay * ay + az * az) as f32);
//! let unit_z = az as f32 * norm;
//! assert!((unit_z - 0.99).abs() < 0.01);
//! ```
//!
//! When the angle is already a float, use the parabolic pair and keep it typed:
//!
//! ```
//! use celerity::parabolic;
//! use uom::si::angle::degree;
//! use uom::si::f32::Angle;
//!
//! let heading = Angle::new::<degree>(30.0);
//! assert!((parabolic::sin(heading) - 0.5).abs() < 0.02);
//! assert!((parabolic::cos(heading) - 0.866).abs() < 0.02);
//! ```
//!
//! # What this library does not do
//!
//! No correct rounding, no IEEE-754 conformance claims, and no guarding of preconditions:
//! feeding [`rsqrt`](rsqrt::rsqrt) a non-positive value or [`arctan::atan2`] two zeros yields
//! an unspecified (but never panicking) result. The bit tricks assume the IEEE-754 binary32
//! layout of `f32`; exact output bit patterns are not portable beyond that assumption. Validate
//! inputs once at the edge of the loop, not per call.
//!
//! # no-std
//!
//! The crate is no-std capable: disable the default `std` feature and enable `libm` instead
//! (the two are mutually exclusive). The `serde` and `approx` features gate the respective
//! impls on [`DeciAngle`] and are on by default.

#![cfg_attr(not(feature = "std"), no_std)]

mod decidegrees;
mod float_math;
mod widening;

pub mod arctan;
pub mod lookup;
pub mod parabolic;
pub mod rsqrt;

pub use decidegrees::DeciAngle;
pub use widening::wide_mul;
