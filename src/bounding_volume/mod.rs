//! Bounding volumes.

#[doc(inline)]
pub use crate::bounding_volume::aabb::Aabb;
pub use crate::bounding_volume::aabb_ball::bounds_intersects_sphere;

#[doc(hidden)]
pub mod aabb;
mod aabb_ball;
