//! Boolean intersection tests between pairs of geometric primitives.

pub use self::intersection_test_aabb_ball::intersection_test_aabb_ball;

mod intersection_test_aabb_ball;
