use na::ComplexField;

use crate::math::{Point, Real};
use crate::shape::Ball;
use num::Zero;

impl Ball {
    /// Computes the parameters of the portion of the segment `[pa, pb]` inside of this ball.
    ///
    /// See [`clip_segment_ball_parameters`].
    #[inline]
    pub fn clip_segment_parameters(
        &self,
        pa: &Point<Real>,
        pb: &Point<Real>,
    ) -> Option<(Real, Real)> {
        clip_segment_ball_parameters(pa, pb, &self.center, self.radius)
    }
}

/// Computes the parameters where the line supporting the segment `[a, b]` crosses a sphere.
///
/// The line is parametrized as `a + t * (b - a)` for `t ∈ ℝ`. The two returned roots
/// `(enter, exit)` satisfy `enter <= exit` and are not clamped to `[0, 1]`: the segment
/// itself intersects the sphere only if `enter <= 1 && exit >= 0`.
///
/// Returns `None` if the line misses the sphere or if the segment is degenerate (`a == b`).
#[inline]
pub fn segment_sphere_intersection(
    a: &Point<Real>,
    b: &Point<Real>,
    center: &Point<Real>,
    radius: Real,
) -> Option<(Real, Real)> {
    let dir = b - a;
    let dcenter = a - center;

    let qa = dir.norm_squared();
    let qb = dcenter.dot(&dir);
    let qc = dcenter.norm_squared() - radius * radius;

    // Special case for when the dir is zero.
    if qa.is_zero() {
        return None;
    }

    let delta = qb * qb - qa * qc;

    if delta < 0.0 {
        // no solution
        None
    } else {
        let sqrt_delta = ComplexField::sqrt(delta);
        let enter = (-qb - sqrt_delta) / qa;
        let exit = (-qb + sqrt_delta) / qa;
        Some((enter, exit))
    }
}

/// Computes the parameters of the portion of the segment `[a, b]` inside of a sphere.
///
/// Both parameters are clamped to `[0, 1]`. Returns `None` if the segment does not
/// intersect the sphere at all.
#[inline]
pub fn clip_segment_ball_parameters(
    a: &Point<Real>,
    b: &Point<Real>,
    center: &Point<Real>,
    radius: Real,
) -> Option<(Real, Real)> {
    let (enter, exit) = segment_sphere_intersection(a, b, center, radius)?;

    if enter <= 1.0 && exit >= 0.0 {
        Some((enter.clamp(0.0, 1.0), exit.clamp(0.0, 1.0)))
    } else {
        None
    }
}
