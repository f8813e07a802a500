//! Interfaces of the systems a crop reads from and writes to.

use crate::math::{Pose, Real};
use crate::stroke::{CanvasId, Stroke, StrokeId};

/// The authority on which strokes are currently live.
pub trait StrokeCatalog {
    /// The identifiers of all the live strokes, across all canvases, in drawing order.
    fn live_stroke_ids(&self) -> Vec<StrokeId>;

    /// The live stroke with the given identifier.
    fn stroke(&self, id: StrokeId) -> Option<&Stroke>;

    /// The live stroke with the given identifier, for in-place modification.
    fn stroke_mut(&mut self, id: StrokeId) -> Option<&mut Stroke>;

    /// Removes a stroke from the live set, returning it.
    fn remove_stroke(&mut self, id: StrokeId) -> Option<Stroke>;

    /// Adds a stroke to the live set.
    fn add_stroke(&mut self, stroke: Stroke);

    /// Reserves a fresh stroke identifier, never handed out before.
    fn allocate_id(&mut self) -> StrokeId;
}

/// Provides the poses needed to move world-space volumes into canvas space.
pub trait CanvasPoses {
    /// The pose of the scene, mapping scene coordinates to world coordinates.
    fn scene_pose(&self) -> Pose<Real>;

    /// The pose of a canvas, mapping canvas coordinates to scene coordinates.
    ///
    /// Returns `None` if the canvas does not exist.
    fn canvas_pose(&self, canvas: CanvasId) -> Option<Pose<Real>>;
}

/// Maintains the rendered geometry of strokes.
pub trait StrokeRenderer {
    /// Invalidates and regenerates the geometry of a stroke whose control points changed,
    /// or of a newly created stroke.
    fn rebuild(&mut self, stroke: &Stroke);

    /// Releases the geometry of a stroke removed from the live set.
    fn release(&mut self, stroke: &Stroke);
}

/// A renderer that does nothing, for hosts without rendered representations.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoopRenderer;

impl StrokeRenderer for NoopRenderer {
    fn rebuild(&mut self, _: &Stroke) {}
    fn release(&mut self, _: &Stroke) {}
}
