//! Strokes and their control points.

pub use self::control_point::{interpolate, ControlPoint};
pub use self::stroke::{BrushId, CanvasId, Color, GroupTag, Stroke, StrokeFlags, StrokeId};

mod control_point;
mod stroke;
