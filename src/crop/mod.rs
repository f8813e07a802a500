//! Cropping strokes against a volume.
//!
//! Cropping runs in two stages. First, [`crop_stroke`] computes, for each stroke, a
//! [`CropOutcome`] without side effects: the stroke is kept, has its control points
//! replaced, is split into several strokes, or is deleted. Then the [`StrokeCropper`]
//! applies these outcomes to a [`StrokeCatalog`] and notifies a [`StrokeRenderer`].
//!
//! The [`SketchMemory`] and [`CanvasRegistry`] are in-memory implementations of the
//! collaborators a crop needs.

pub use self::clip_stroke::clip_control_points;
pub use self::collaborators::{CanvasPoses, NoopRenderer, StrokeCatalog, StrokeRenderer};
pub use self::crop_outcome::{crop_control_points, crop_stroke, CropOutcome};
pub use self::sketch_memory::{CanvasRegistry, SketchMemory, StrokeSetSnapshot};
pub use self::stroke_cropper::{crop_to_sphere, CropReport, StrokeCropper};

mod clip_stroke;
mod collaborators;
mod crop_outcome;
mod sketch_memory;
mod stroke_cropper;
