use core::num::ParseFloatError;
use core::str::FromStr;

use crate::math::{Point, Real};

/// A Ball shape, used as a spherical crop volume.
///
/// Unlike most shapes of a collision library, a crop ball carries its own center: the
/// crop operation receives it in world space and moves it into each canvas's frame.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
#[repr(C)]
pub struct Ball {
    /// The center of the ball.
    pub center: Point<Real>,
    /// The radius of the ball.
    pub radius: Real,
}

/// A spherical crop volume.
pub type CropSphere = Ball;

impl Ball {
    /// Creates a new ball with the given center and radius.
    #[inline]
    pub fn new(center: Point<Real>, radius: Real) -> Ball {
        Ball { center, radius }
    }

    /// Does this ball enclose a non-empty volume?
    ///
    /// This is `false` for zero, negative and NaN radii.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.radius > 0.0
    }
}

/// Error returned when parsing a [`Ball`] from a string fails.
#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
pub enum ParseBallError {
    /// The string did not contain exactly four comma-separated values.
    #[error("expected 4 comma-separated values (x, y, z, radius), found {0}")]
    WrongArity(usize),
    /// One of the values is not a valid number.
    #[error("value #{index} is not a valid number: {source}")]
    InvalidNumber {
        /// The zero-based index of the offending value.
        index: usize,
        /// The underlying parse failure.
        #[source]
        source: ParseFloatError,
    },
}

impl FromStr for Ball {
    type Err = ParseBallError;

    /// Parses a ball written as `"x,y,z,radius"`, e.g. `"0,0,0,5"`.
    ///
    /// Whitespace around each value is ignored. A non-positive radius is accepted here:
    /// cropping with such a ball is a no-op.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();

        if parts.len() != 4 {
            return Err(ParseBallError::WrongArity(parts.len()));
        }

        let mut values = [0.0; 4];

        for (index, (part, value)) in parts.iter().zip(values.iter_mut()).enumerate() {
            *value = part
                .parse::<Real>()
                .map_err(|source| ParseBallError::InvalidNumber { index, source })?;
        }

        let [x, y, z, radius] = values;
        Ok(Ball::new(Point::new(x, y, z), radius))
    }
}
