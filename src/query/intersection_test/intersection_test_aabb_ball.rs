use crate::bounding_volume::Aabb;
use crate::math::{Point, Real};

/// Intersection test between an AABB and a ball.
///
/// The ball is given by its `center` and `radius`, both expressed in the frame of `aabb`.
#[inline]
pub fn intersection_test_aabb_ball(aabb: &Aabb, center: &Point<Real>, radius: Real) -> bool {
    let closest = aabb.closest_point(center);
    let distance_squared = (closest - center).norm_squared();
    distance_squared <= radius * radius
}
