use alloc::collections::BTreeMap;
use std::collections::HashMap;

use crate::crop::{CanvasPoses, StrokeCatalog};
use crate::math::{Pose, Real};
use crate::stroke::{CanvasId, ControlPoint, Stroke, StrokeId};

/// An in-memory stroke catalog keeping its strokes in drawing order.
///
/// Strokes created by a crop are appended at the end of the drawing order. Looking up,
/// adding, and removing a stroke take logarithmic time.
#[derive(Clone, Debug, Default)]
pub struct SketchMemory {
    // Live strokes keyed by their rank in the drawing order.
    strokes: BTreeMap<u64, Stroke>,
    ranks: HashMap<StrokeId, u64>,
    next_rank: u64,
    next_id: u64,
}

/// A copy of the live strokes of a [`SketchMemory`], used to undo a crop.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct StrokeSetSnapshot {
    strokes: Vec<Stroke>,
}

impl StrokeSetSnapshot {
    /// The strokes captured by this snapshot, in drawing order.
    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }
}

impl SketchMemory {
    /// Creates an empty sketch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Draws a new stroke on `canvas`, returning its identifier.
    ///
    /// The bounds of the stroke are computed right away.
    pub fn draw(&mut self, canvas: CanvasId, control_points: Vec<ControlPoint>) -> StrokeId {
        let id = self.allocate_id();
        let mut stroke = Stroke::new(id, canvas, control_points);
        stroke.refresh_bounds();
        self.push(stroke);
        id
    }

    /// Inserts an already built stroke at the end of the drawing order.
    ///
    /// If a live stroke already has the identifier `stroke.id`, it is removed and returned.
    /// The identifiers allocated afterwards are guaranteed to differ from `stroke.id`.
    pub fn insert(&mut self, stroke: Stroke) -> Option<Stroke> {
        self.next_id = self.next_id.max(stroke.id.0 + 1);
        let previous = self.take(stroke.id);
        self.push(stroke);
        previous
    }

    /// The number of live strokes.
    pub fn len(&self) -> usize {
        self.strokes.len()
    }

    /// Is this sketch empty?
    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }

    /// Iterates through the live strokes in drawing order.
    pub fn iter(&self) -> impl Iterator<Item = &Stroke> {
        self.strokes.values()
    }

    /// Captures the current set of live strokes.
    pub fn snapshot(&self) -> StrokeSetSnapshot {
        StrokeSetSnapshot {
            strokes: self.strokes.values().cloned().collect(),
        }
    }

    /// Restores the set of live strokes captured by `snapshot`.
    ///
    /// Identifiers are never recycled: strokes created after a restore get identifiers
    /// distinct from every stroke created before it.
    pub fn restore(&mut self, snapshot: StrokeSetSnapshot) {
        self.strokes.clear();
        self.ranks.clear();

        for stroke in snapshot.strokes {
            let _ = self.insert(stroke);
        }
    }

    fn push(&mut self, stroke: Stroke) {
        let rank = self.next_rank;
        self.next_rank += 1;
        let _ = self.ranks.insert(stroke.id, rank);
        let _ = self.strokes.insert(rank, stroke);
    }

    fn take(&mut self, id: StrokeId) -> Option<Stroke> {
        let rank = self.ranks.remove(&id)?;
        self.strokes.remove(&rank)
    }
}

impl StrokeCatalog for SketchMemory {
    fn live_stroke_ids(&self) -> Vec<StrokeId> {
        self.strokes.values().map(|s| s.id).collect()
    }

    fn stroke(&self, id: StrokeId) -> Option<&Stroke> {
        self.strokes.get(self.ranks.get(&id)?)
    }

    fn stroke_mut(&mut self, id: StrokeId) -> Option<&mut Stroke> {
        self.strokes.get_mut(self.ranks.get(&id)?)
    }

    fn remove_stroke(&mut self, id: StrokeId) -> Option<Stroke> {
        self.take(id)
    }

    fn add_stroke(&mut self, stroke: Stroke) {
        let id = stroke.id;
        let replaced = self.insert(stroke);
        debug_assert!(replaced.is_none(), "stroke {id:?} was already live");
    }

    fn allocate_id(&mut self) -> StrokeId {
        let id = StrokeId(self.next_id);
        self.next_id += 1;
        id
    }
}

/// The poses of the scene and of its canvases.
///
/// A new registry has an identity scene pose and holds the [`CanvasId::MAIN`] canvas
/// with an identity pose.
#[derive(Clone, Debug)]
pub struct CanvasRegistry {
    scene: Pose<Real>,
    canvases: HashMap<CanvasId, Pose<Real>>,
}

impl Default for CanvasRegistry {
    fn default() -> Self {
        Self::new(Pose::identity())
    }
}

impl CanvasRegistry {
    /// Creates a registry with the given scene pose, holding only the main canvas.
    pub fn new(scene: Pose<Real>) -> Self {
        let mut canvases = HashMap::new();
        let _ = canvases.insert(CanvasId::MAIN, Pose::identity());
        Self { scene, canvases }
    }

    /// Sets the pose of the scene.
    pub fn set_scene_pose(&mut self, pose: Pose<Real>) {
        self.scene = pose;
    }

    /// Sets the pose of a canvas relative to the scene, adding the canvas if needed.
    ///
    /// Returns the previous pose of the canvas.
    pub fn set_canvas_pose(&mut self, canvas: CanvasId, pose: Pose<Real>) -> Option<Pose<Real>> {
        self.canvases.insert(canvas, pose)
    }

    /// Removes a canvas. Strokes drawn on it are skipped by subsequent crops.
    pub fn remove_canvas(&mut self, canvas: CanvasId) -> Option<Pose<Real>> {
        self.canvases.remove(&canvas)
    }
}

impl CanvasPoses for CanvasRegistry {
    fn scene_pose(&self) -> Pose<Real> {
        self.scene
    }

    fn canvas_pose(&self, canvas: CanvasId) -> Option<Pose<Real>> {
        self.canvases.get(&canvas).copied()
    }
}
