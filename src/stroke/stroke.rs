//! Definition of the stroke record.

use crate::bounding_volume::Aabb;
use crate::math::Real;
use crate::stroke::ControlPoint;

/// The identifier of a stroke, unique within a stroke catalog.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StrokeId(pub u64);

/// The stable identifier of the brush a stroke was drawn with.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct BrushId(pub u128);

/// The identifier of a canvas, i.e., of an independently posed coordinate space.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CanvasId(pub u32);

impl CanvasId {
    /// The canvas every sketch starts with.
    pub const MAIN: CanvasId = CanvasId(0);
}

/// An opaque tag grouping strokes together.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct GroupTag(pub u32);

impl GroupTag {
    /// The tag of strokes that are not part of any group.
    pub const UNGROUPED: GroupTag = GroupTag(0);

    /// Is this the tag of ungrouped strokes?
    #[inline]
    pub fn is_ungrouped(self) -> bool {
        self == Self::UNGROUPED
    }
}

impl Default for GroupTag {
    fn default() -> Self {
        Self::UNGROUPED
    }
}

/// A linear RGBA color.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Color {
    /// Red component.
    pub r: f32,
    /// Green component.
    pub g: f32,
    /// Blue component.
    pub b: f32,
    /// Alpha component.
    pub a: f32,
}

impl Color {
    /// Opaque white.
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);

    /// Creates a new color.
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

bitflags::bitflags! {
    #[derive(Copy, Clone, PartialEq, Eq, Debug, Default, Hash)]
    #[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
    /// Flags describing how a stroke was authored.
    pub struct StrokeFlags: u32 {
        /// The stroke continues the group of the stroke drawn right before it.
        const IS_GROUP_CONTINUE = 1 << 1;
    }
}

/// One continuous freehand drawing action.
///
/// The control points are stored in drawing order. A stroke owns its control-point
/// buffer: strokes split from a parent by a crop get buffers of their own.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct Stroke {
    /// The identifier of this stroke.
    pub id: StrokeId,
    /// The control points of this stroke, in drawing order.
    ///
    /// `None` for strokes whose points were never loaded. Such strokes are ignored by crops.
    pub control_points: Option<Vec<ControlPoint>>,
    /// The stroke color.
    pub color: Color,
    /// The brush used to draw this stroke.
    pub brush: BrushId,
    /// The room-space size of the brush when the stroke was laid down.
    pub brush_size: Real,
    /// The pointer-to-local scale factor when the stroke was laid down.
    pub brush_scale: Real,
    /// Seed for the deterministic procedural parts of the stroke geometry.
    pub seed: i32,
    /// Authoring flags.
    pub flags: StrokeFlags,
    /// The group this stroke belongs to.
    pub group: GroupTag,
    /// The canvas this stroke is drawn in. `None` for strokes detached from any canvas.
    pub canvas: Option<CanvasId>,
    /// Cached bounds of the control points, in canvas space.
    pub bounds: Option<Aabb>,
}

impl Stroke {
    /// Creates a new ungrouped stroke on the given canvas, with default authoring attributes.
    ///
    /// The bounds are not computed. Call [`Stroke::refresh_bounds`] to cache them.
    pub fn new(id: StrokeId, canvas: CanvasId, control_points: Vec<ControlPoint>) -> Self {
        Self {
            id,
            control_points: Some(control_points),
            color: Color::default(),
            brush: BrushId::default(),
            brush_size: 1.0,
            brush_scale: 1.0,
            seed: 0,
            flags: StrokeFlags::empty(),
            group: GroupTag::UNGROUPED,
            canvas: Some(canvas),
            bounds: None,
        }
    }

    /// Creates a stroke holding `control_points` and every authoring attribute of `parent`.
    ///
    /// Color, brush, size, scale, seed, flags, group, and canvas are copied. The new stroke
    /// gets the identifier `id` and its bounds are recomputed from `control_points`.
    pub fn split_from(parent: &Stroke, control_points: Vec<ControlPoint>, id: StrokeId) -> Self {
        let mut result = Self {
            id,
            control_points: Some(control_points),
            color: parent.color,
            brush: parent.brush,
            brush_size: parent.brush_size,
            brush_scale: parent.brush_scale,
            seed: parent.seed,
            flags: parent.flags,
            group: parent.group,
            canvas: parent.canvas,
            bounds: None,
        };
        result.refresh_bounds();
        result
    }

    /// The control points of this stroke, or an empty slice if it has none.
    #[inline]
    pub fn points(&self) -> &[ControlPoint] {
        self.control_points.as_deref().unwrap_or(&[])
    }

    /// Is this stroke degenerate, i.e., does it have less than two control points?
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.points().len() < 2
    }

    /// The timestamp of the first control point.
    pub fn head_timestamp_ms(&self) -> Option<u32> {
        self.points().first().map(|pt| pt.timestamp_ms)
    }

    /// The timestamp of the last control point.
    pub fn tail_timestamp_ms(&self) -> Option<u32> {
        self.points().last().map(|pt| pt.timestamp_ms)
    }

    /// The size of the brush in the local space of the canvas.
    #[inline]
    pub fn size_in_local_space(&self) -> Real {
        self.brush_scale * self.brush_size
    }

    /// Computes the AABB of the control points of this stroke.
    ///
    /// Returns `None` if the stroke has no control point.
    pub fn compute_aabb(&self) -> Option<Aabb> {
        let aabb = Aabb::from_points(self.points().iter().map(|pt| pt.position));
        aabb.is_valid().then_some(aabb)
    }

    /// Recomputes the cached bounds of this stroke from its control points.
    pub fn refresh_bounds(&mut self) {
        self.bounds = self.compute_aabb();
    }

    /// Replaces the control points of this stroke, and refreshes its cached bounds.
    ///
    /// Returns the previous buffer.
    pub fn replace_control_points(
        &mut self,
        control_points: Vec<ControlPoint>,
    ) -> Option<Vec<ControlPoint>> {
        let previous = self.control_points.replace(control_points);
        self.refresh_bounds();
        previous
    }
}
