use crate::bounding_volume::{bounds_intersects_sphere, Aabb};
use crate::math::{Point, Pose, Real, BOUNDARY_TOLERANCE};
use crate::query::clip::segment_sphere_intersection;
use crate::shape::Ball;

/// Trait implemented by convex volumes that strokes can be cropped against.
///
/// All the queries are expressed in the local frame of the volume, i.e., the frame
/// of the canvas holding the stroke being cropped. Use
/// [`CropVolume::transform_by_inverse`] to move a volume into that frame.
pub trait CropVolume {
    /// Is the volume degenerate (empty)? Cropping against an empty volume is a no-op.
    fn is_empty(&self) -> bool;

    /// Tests if the given point is inside of this volume.
    ///
    /// Points lying on the boundary, up to [`BOUNDARY_TOLERANCE`], are inside.
    fn contains_local_point(&self, pt: &Point<Real>) -> bool;

    /// Computes the parameters where the line supporting `[a, b]` enters and exits the volume.
    ///
    /// The returned parameters `(enter, exit)` satisfy `enter <= exit` and are not clamped
    /// to `[0, 1]`. Returns `None` if the line misses the volume or if `a == b`.
    fn clip_segment(&self, a: &Point<Real>, b: &Point<Real>) -> Option<(Real, Real)>;

    /// Computes the parameters of the portion of the segment `[a, b]` inside of the volume.
    ///
    /// Both parameters are clamped to `[0, 1]`. Returns `None` if the segment does not
    /// reach the volume.
    fn clip_segment_clamped(&self, a: &Point<Real>, b: &Point<Real>) -> Option<(Real, Real)> {
        let (enter, exit) = self.clip_segment(a, b)?;

        if enter <= 1.0 && exit >= 0.0 {
            Some((enter.clamp(0.0, 1.0), exit.clamp(0.0, 1.0)))
        } else {
            None
        }
    }

    /// Conservative test of whether an AABB intersects this volume.
    ///
    /// This must never return `false` for an AABB that intersects the volume.
    fn intersects_aabb(&self, aabb: &Aabb) -> bool;

    /// Expresses this volume in the local frame of `pose`.
    ///
    /// If this volume is expressed in frame `A` and `pose` maps local coordinates of frame `B`
    /// to frame `A`, the result is this volume expressed in frame `B`.
    fn transform_by_inverse(&self, pose: &Pose<Real>) -> Self
    where
        Self: Sized;
}

impl Ball {
    /// The squared radius beyond which a point is considered outside of this ball.
    #[inline]
    fn tolerant_radius_squared(&self) -> Real {
        self.radius * self.radius * (1.0 + BOUNDARY_TOLERANCE)
    }
}

impl CropVolume for Ball {
    #[inline]
    fn is_empty(&self) -> bool {
        !self.is_valid()
    }

    #[inline]
    fn contains_local_point(&self, pt: &Point<Real>) -> bool {
        (pt - self.center).norm_squared() <= self.tolerant_radius_squared()
    }

    #[inline]
    fn clip_segment(&self, a: &Point<Real>, b: &Point<Real>) -> Option<(Real, Real)> {
        segment_sphere_intersection(a, b, &self.center, self.radius)
    }

    #[inline]
    fn clip_segment_clamped(&self, a: &Point<Real>, b: &Point<Real>) -> Option<(Real, Real)> {
        self.clip_segment_parameters(a, b)
    }

    #[inline]
    fn intersects_aabb(&self, aabb: &Aabb) -> bool {
        bounds_intersects_sphere(aabb, &self.center, self.tolerant_radius_squared().sqrt())
    }

    #[inline]
    fn transform_by_inverse(&self, pose: &Pose<Real>) -> Self {
        Ball::new(
            pose.inverse_transform_point(&self.center),
            self.radius / pose.scaling(),
        )
    }
}
