use crate::bounding_volume::Aabb;
use crate::math::{Point, Real};
use crate::query::intersection_test::intersection_test_aabb_ball;

/// Tests if an AABB intersects a sphere.
///
/// The sphere center is clamped into the box to find the point of the box closest to it.
/// The test passes iff that point is no farther than `radius` from the center. This is
/// exact for solid boxes, so it never rejects a box that overlaps the sphere.
#[inline]
pub fn bounds_intersects_sphere(bounds: &Aabb, center: &Point<Real>, radius: Real) -> bool {
    intersection_test_aabb_ball(bounds, center, radius)
}
