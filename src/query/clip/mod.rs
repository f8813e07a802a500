//! Clipping of segments against volumes.

pub use self::clip_segment_ball::{clip_segment_ball_parameters, segment_sphere_intersection};

mod clip_segment_ball;
