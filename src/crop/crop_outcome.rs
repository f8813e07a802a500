use crate::crop::clip_control_points;
use crate::shape::CropVolume;
use crate::stroke::{ControlPoint, Stroke};

/// What cropping does to a single stroke.
///
/// Computing an outcome has no side effect: the [`StrokeCropper`](crate::crop::StrokeCropper)
/// applies it to the stroke catalog afterwards.
#[derive(Clone, Debug, PartialEq)]
pub enum CropOutcome {
    /// The stroke lies entirely inside of the volume and is kept as is.
    Unchanged,
    /// The stroke keeps its identity but its control points are replaced by the single
    /// run lying inside of the volume.
    Replaced(Vec<ControlPoint>),
    /// The stroke crosses the volume boundary several times. It is retired and one new
    /// stroke is created per run.
    Split(Vec<Vec<ControlPoint>>),
    /// The stroke lies entirely outside of the volume and is removed.
    Deleted,
    /// The stroke is inert (no canvas, or no control point) and is left untouched.
    Skipped,
}

impl CropOutcome {
    /// Does this outcome modify the stroke catalog?
    #[inline]
    pub fn is_modification(&self) -> bool {
        matches!(
            self,
            CropOutcome::Replaced(_) | CropOutcome::Split(_) | CropOutcome::Deleted
        )
    }

    /// A short human-readable name of this outcome, used for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            CropOutcome::Unchanged => "unchanged",
            CropOutcome::Replaced(_) => "replaced",
            CropOutcome::Split(_) => "split",
            CropOutcome::Deleted => "deleted",
            CropOutcome::Skipped => "skipped",
        }
    }
}

/// Result of the cheap bounds rejection test run before clipping a stroke.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum BoundsTest {
    /// The stroke has no cached bounds.
    NotRun,
    Passed,
    Failed,
}

/// Computes what cropping a sequence of control points against `volume` does.
///
/// `volume` must be expressed in the frame of the control points.
pub fn crop_control_points<V>(points: &[ControlPoint], volume: &V) -> CropOutcome
where
    V: CropVolume + ?Sized,
{
    let mut runs = clip_control_points(points, volume);

    if runs.len() > 1 {
        return CropOutcome::Split(runs);
    }

    match runs.pop() {
        None => CropOutcome::Deleted,
        Some(run) if run.as_slice() == points => CropOutcome::Unchanged,
        Some(run) => CropOutcome::Replaced(run),
    }
}

/// Computes what cropping `stroke` against `volume` does.
///
/// `volume` must be expressed in the local frame of the stroke's canvas. Strokes without
/// canvas or without control points are [`CropOutcome::Skipped`]. Strokes with cached bounds
/// that do not intersect the volume are [`CropOutcome::Deleted`] without being clipped.
pub fn crop_stroke<V>(stroke: &Stroke, volume: &V) -> CropOutcome
where
    V: CropVolume + ?Sized,
{
    evaluate_stroke(stroke, volume).0
}

pub(crate) fn evaluate_stroke<V>(stroke: &Stroke, volume: &V) -> (CropOutcome, BoundsTest)
where
    V: CropVolume + ?Sized,
{
    let points = match &stroke.control_points {
        Some(points) if stroke.canvas.is_some() && !points.is_empty() => points,
        _ => return (CropOutcome::Skipped, BoundsTest::NotRun),
    };

    let bounds_test = match &stroke.bounds {
        None => BoundsTest::NotRun,
        Some(bounds) if volume.intersects_aabb(bounds) => BoundsTest::Passed,
        Some(_) => return (CropOutcome::Deleted, BoundsTest::Failed),
    };

    (crop_control_points(points, volume), bounds_test)
}
