use crate::math::{Point, Real, Rotation};

/// A timestamped, posed and pressured sample on the centerline of a stroke.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct ControlPoint {
    /// The position of the sample, in the local space of the stroke's canvas.
    pub position: Point<Real>,
    /// The orientation of the pointer when the sample was taken.
    pub orientation: Rotation<Real>,
    /// The pointer pressure, in `[0, 1]`.
    pub pressure: Real,
    /// Milliseconds since the start of the sketch. Monotonic within a stroke.
    pub timestamp_ms: u32,
}

impl ControlPoint {
    /// Creates a new control point.
    #[inline]
    pub fn new(
        position: Point<Real>,
        orientation: Rotation<Real>,
        pressure: Real,
        timestamp_ms: u32,
    ) -> Self {
        Self {
            position,
            orientation,
            pressure,
            timestamp_ms,
        }
    }

    /// Creates a control point with an identity orientation, full pressure, and a zero timestamp.
    #[inline]
    pub fn at(position: Point<Real>) -> Self {
        Self::new(position, Rotation::identity(), 1.0, 0)
    }

    /// Interpolates between `self` and `other`.
    ///
    /// See [`interpolate`].
    #[inline]
    #[must_use]
    pub fn interpolate(&self, other: &ControlPoint, t: Real) -> ControlPoint {
        interpolate(self, other, t)
    }
}

/// Interpolates every attribute of two control points.
///
/// Position and pressure are linearly interpolated, the orientation is spherically
/// interpolated along the shortest arc, and the timestamp is linearly interpolated then
/// rounded to the nearest millisecond.
///
/// `t` is not clamped: callers are expected to pass a value in `[0, 1]`.
pub fn interpolate(a: &ControlPoint, b: &ControlPoint, t: Real) -> ControlPoint {
    let orientation = a
        .orientation
        .try_slerp(&b.orientation, t, Real::EPSILON)
        .unwrap_or_else(|| shortest_nlerp(&a.orientation, &b.orientation, t));
    let timestamp = f64::from(a.timestamp_ms)
        + (f64::from(b.timestamp_ms) - f64::from(a.timestamp_ms)) * f64::from(t);

    ControlPoint {
        position: a.position.lerp(&b.position, t),
        orientation,
        pressure: a.pressure + (b.pressure - a.pressure) * t,
        // Float to int casts saturate.
        timestamp_ms: timestamp.round() as u32,
    }
}

/// Normalized linear interpolation of two rotations along the shortest arc.
fn shortest_nlerp(a: &Rotation<Real>, b: &Rotation<Real>, t: Real) -> Rotation<Real> {
    if a.coords.dot(&b.coords) < 0.0 {
        a.nlerp(&Rotation::new_unchecked(-b.into_inner()), t)
    } else {
        a.nlerp(b, t)
    }
}
