use crate::crop::crop_outcome::{evaluate_stroke, BoundsTest};
use crate::crop::{CanvasPoses, CropOutcome, StrokeCatalog, StrokeRenderer};
use crate::math::{Point, Real};
use crate::shape::{Ball, CropVolume};
use crate::stroke::{Stroke, StrokeId};

/// Counters describing what a crop did.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct CropReport {
    /// Number of strokes whose cached bounds intersected the volume.
    pub bounds_tests_passed: usize,
    /// Number of strokes deleted because their cached bounds missed the volume.
    pub bounds_tests_failed: usize,
    /// Number of strokes lying entirely inside of the volume.
    pub unchanged: usize,
    /// Number of strokes whose control points were replaced in place.
    pub replaced: usize,
    /// Number of strokes retired because they were split.
    pub split: usize,
    /// Number of strokes created by splits.
    pub created: usize,
    /// Number of strokes deleted, including those rejected by their bounds.
    pub deleted: usize,
    /// Number of inert strokes left untouched.
    pub skipped: usize,
}

impl CropReport {
    /// Did the crop leave the stroke catalog untouched?
    pub fn is_noop(&self) -> bool {
        self.replaced == 0 && self.split == 0 && self.deleted == 0
    }

    /// Number of strokes inside of the volume after the crop.
    pub fn preserved(&self) -> usize {
        self.unchanged + self.replaced + self.created
    }
}

/// Crops every live stroke of a catalog against a volume.
///
/// The cropper borrows its collaborators for the duration of the crop: the crop is
/// synchronous, and nothing else may touch the catalog while it runs. Wrapping the
/// crop into a single undoable command is the responsibility of the caller.
pub struct StrokeCropper<'a, C: ?Sized, P: ?Sized, R: ?Sized> {
    catalog: &'a mut C,
    poses: &'a P,
    renderer: &'a mut R,
}

impl<'a, C, P, R> StrokeCropper<'a, C, P, R>
where
    C: StrokeCatalog + ?Sized,
    P: CanvasPoses + ?Sized,
    R: StrokeRenderer + ?Sized,
{
    /// Creates a cropper operating on the given collaborators.
    pub fn new(catalog: &'a mut C, poses: &'a P, renderer: &'a mut R) -> Self {
        Self {
            catalog,
            poses,
            renderer,
        }
    }

    /// Crops every live stroke to a sphere given in world space.
    ///
    /// This is a no-op if `radius_world <= 0`.
    pub fn crop_to_sphere(&mut self, center_world: Point<Real>, radius_world: Real) -> CropReport {
        self.crop_to_volume(&Ball::new(center_world, radius_world))
    }

    /// Crops every live stroke to a volume given in world space.
    ///
    /// The volume is moved into scene space once, then into the space of each
    /// stroke's canvas. When this returns, strokes created by splits are already
    /// registered with the catalog and every removed stroke has been released by the
    /// renderer.
    pub fn crop_to_volume<V: CropVolume>(&mut self, volume_world: &V) -> CropReport {
        let mut report = CropReport::default();

        if volume_world.is_empty() {
            log::debug!("Ignoring crop against an empty volume.");
            return report;
        }

        let volume_scene = volume_world.transform_by_inverse(&self.poses.scene_pose());
        let ids = self.catalog.live_stroke_ids();
        log::debug!("Cropping {} strokes.", ids.len());

        for id in ids {
            let Some(stroke) = self.catalog.stroke(id) else {
                continue;
            };

            let canvas_pose = stroke
                .canvas
                .and_then(|canvas| self.poses.canvas_pose(canvas));
            let (outcome, bounds_test) = match canvas_pose {
                Some(pose) => evaluate_stroke(stroke, &volume_scene.transform_by_inverse(&pose)),
                None => (CropOutcome::Skipped, BoundsTest::NotRun),
            };

            match bounds_test {
                BoundsTest::NotRun => {}
                BoundsTest::Passed => report.bounds_tests_passed += 1,
                BoundsTest::Failed => report.bounds_tests_failed += 1,
            }

            log::trace!("Stroke {:?}: {}.", id, outcome.kind());
            self.apply(id, outcome, &mut report);
        }

        log::debug!(
            "Crop finished: bounds tests (passed={}, failed={}), unchanged={}, replaced={}, split={} into {}, deleted={}, skipped={}.",
            report.bounds_tests_passed,
            report.bounds_tests_failed,
            report.unchanged,
            report.replaced,
            report.split,
            report.created,
            report.deleted,
            report.skipped,
        );

        report
    }

    fn apply(&mut self, id: StrokeId, outcome: CropOutcome, report: &mut CropReport) {
        match outcome {
            CropOutcome::Skipped => report.skipped += 1,
            CropOutcome::Unchanged => report.unchanged += 1,
            CropOutcome::Replaced(points) => {
                if let Some(stroke) = self.catalog.stroke_mut(id) {
                    let _ = stroke.replace_control_points(points);
                    self.renderer.rebuild(stroke);
                    report.replaced += 1;
                }
            }
            CropOutcome::Split(runs) => {
                if let Some(parent) = self.catalog.remove_stroke(id) {
                    self.renderer.release(&parent);

                    for run in runs {
                        let child = Stroke::split_from(&parent, run, self.catalog.allocate_id());
                        self.renderer.rebuild(&child);
                        self.catalog.add_stroke(child);
                        report.created += 1;
                    }

                    report.split += 1;
                }
            }
            CropOutcome::Deleted => {
                if let Some(stroke) = self.catalog.remove_stroke(id) {
                    self.renderer.release(&stroke);
                    report.deleted += 1;
                }
            }
        }
    }
}

/// Crops every live stroke of `catalog` to a sphere given in world space.
///
/// Shorthand for [`StrokeCropper::crop_to_sphere`].
pub fn crop_to_sphere<C, P, R>(
    catalog: &mut C,
    poses: &P,
    renderer: &mut R,
    center_world: Point<Real>,
    radius_world: Real,
) -> CropReport
where
    C: StrokeCatalog + ?Sized,
    P: CanvasPoses + ?Sized,
    R: StrokeRenderer + ?Sized,
{
    StrokeCropper::new(catalog, poses, renderer).crop_to_sphere(center_world, radius_world)
}
