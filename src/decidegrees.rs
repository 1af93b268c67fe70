use crate::float_math;
use core::fmt::{Display, Formatter};
use uom::si::angle::degree;
use uom::si::f32::Angle;

#[cfg(any(test, feature = "approx"))]
use approx::AbsDiffEq;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One tenth of a degree, in radians.
pub(crate) const RADIANS_PER_TENTH: f32 = core::f32::consts::PI / 1800.0;

/// Tenths of a degree in one full turn.
const TENTHS_PER_TURN: i32 = 3600;

/// A fixed-point angle in tenths of a degree (decidegrees).
///
/// This is the angle currency of sensor-facing control code: a full turn is 3600, a right angle
/// is 900, and the whole range of headings fits comfortably in an `i16` with a tenth of a degree
/// of resolution. [`lookup::sin`](crate::lookup::sin) consumes it and
/// [`arctan::atan2`](crate::arctan::atan2) produces it, so a tilt-then-rotate pipeline never
/// touches floating-point angles at all.
///
/// Every `i16` is a valid `DeciAngle`; values outside `[0, 3600)` simply denote extra turns and
/// are reduced where it matters. Use [`DeciAngle::normalized`] or [`DeciAngle::to_signed`] when
/// you need a canonical representative.
///
/// ```
/// use celerity::DeciAngle;
///
/// let heading = DeciAngle::new(4500); // one and a quarter turns
/// assert_eq!(heading.normalized(), DeciAngle::new(900));
/// assert_eq!(DeciAngle::new(2700).to_signed(), DeciAngle::new(-900));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct DeciAngle(i16);

impl DeciAngle {
    /// 0 tenths of a degree.
    pub const ZERO: Self = Self(0);
    /// 90 degrees.
    pub const QUARTER_TURN: Self = Self(900);
    /// 180 degrees.
    pub const HALF_TURN: Self = Self(1800);
    /// 360 degrees.
    pub const FULL_TURN: Self = Self(3600);

    /// Constructs an angle from a raw count of tenths of a degree.
    #[must_use]
    pub const fn new(tenths: i16) -> Self {
        Self(tenths)
    }

    /// Returns the raw count of tenths of a degree.
    #[must_use]
    pub const fn tenths(self) -> i16 {
        self.0
    }

    /// Returns the equivalent angle in `[0, 3600)`.
    #[must_use]
    pub fn normalized(self) -> Self {
        Self(i32::from(self.0).rem_euclid(TENTHS_PER_TURN) as i16)
    }

    /// Returns the equivalent angle in `[-1800, 1800)`.
    #[must_use]
    pub fn to_signed(self) -> Self {
        let bounded = i32::from(self.normalized().0);
        if bounded < TENTHS_PER_TURN / 2 {
            Self(bounded as i16)
        } else {
            Self((bounded - TENTHS_PER_TURN) as i16)
        }
    }

    /// Returns `self - other` as the shortest signed arc, in `[-1800, 1800)`.
    ///
    /// This is the error term of a heading controller: it is small whenever the two angles are
    /// close, even across the wrap at 3600.
    #[must_use]
    pub fn difference(self, other: Self) -> Self {
        Self((i32::from(self.0) - i32::from(other.0)).rem_euclid(TENTHS_PER_TURN) as i16)
            .to_signed()
    }

    /// Converts a [`uom` angle](Angle) to the nearest tenth of a degree, reduced into
    /// `[0, 3600)`.
    #[must_use]
    pub fn from_angle(angle: Angle) -> Self {
        let tenths = float_math::round(angle.get::<degree>() * 10.0);
        Self(float_math::rem_euclid(tenths, TENTHS_PER_TURN as f32) as i16)
    }

    /// Converts this angle to a [`uom` angle](Angle).
    #[must_use]
    pub fn to_angle(self) -> Angle {
        Angle::new::<degree>(f32::from(self.0) / 10.0)
    }

    /// Returns this angle's value in radians.
    #[must_use]
    pub fn to_radians(self) -> f32 {
        f32::from(self.0) * RADIANS_PER_TENTH
    }
}

/// Every raw tenths-of-a-degree count is an angle.
impl From<i16> for DeciAngle {
    fn from(tenths: i16) -> Self {
        Self(tenths)
    }
}

impl Display for DeciAngle {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        let tenths = i32::from(self.0);
        let sign = if tenths < 0 { "-" } else { "" };
        let tenths = tenths.abs();
        write!(f, "{sign}{}.{}°", tenths / 10, tenths % 10)
    }
}

#[cfg(any(test, feature = "approx"))]
impl AbsDiffEq<Self> for DeciAngle {
    type Epsilon = i16;

    fn default_epsilon() -> Self::Epsilon {
        0
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.difference(*other).tenths().abs() <= epsilon
    }
}

/// Reduces an angle in tenths of a degree into the first quadrant.
///
/// Returns `(folded, sign)` where `folded` is in `[0, 900]` and `sign` is `1` or `-1` such that
/// `sin(tenths) == sign * sin(folded)`. The quadrant boundaries fold exactly once: 900 stays
/// 900, 1800 folds to 0, 2700 folds to 900.
///
/// Takes `i32` so that callers can fold phase-shifted values (and `i16::MIN`) without overflow.
pub(crate) fn fold_quadrant(tenths: i32) -> (i16, i16) {
    let sign = if tenths < 0 { -1 } else { 1 };
    let a = tenths.abs() % TENTHS_PER_TURN;

    let (folded, quadrant_sign) = if a <= 900 {
        (a, 1)
    } else if a <= 1800 {
        (1800 - a, 1)
    } else if a <= 2700 {
        (a - 1800, -1)
    } else {
        (3600 - a, -1)
    };

    (folded as i16, (sign * quadrant_sign) as i16)
}
