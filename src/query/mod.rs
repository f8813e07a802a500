//! Non-persistent geometric queries.
//!
//! The functions of this module are pure: they never mutate their inputs.
//!
//! * [`query::clip::segment_sphere_intersection()`](clip::segment_sphere_intersection) computes
//!   where the line supporting a segment crosses a sphere.
//! * [`query::intersection_test::intersection_test_aabb_ball()`](intersection_test::intersection_test_aabb_ball)
//!   is the cheap rejection test run before any exact clipping.

pub mod clip;
pub mod intersection_test;
