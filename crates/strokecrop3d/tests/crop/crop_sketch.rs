use na::Point3;
use strokecrop3d::crop::{
    crop_to_sphere, CanvasRegistry, SketchMemory, StrokeCatalog, StrokeCropper, StrokeRenderer,
};
use strokecrop3d::stroke::{CanvasId, ControlPoint, GroupTag, Stroke, StrokeFlags, StrokeId};

#[derive(Default)]
struct RecordingRenderer {
    rebuilt: Vec<StrokeId>,
    released: Vec<StrokeId>,
}

impl StrokeRenderer for RecordingRenderer {
    fn rebuild(&mut self, stroke: &Stroke) {
        self.rebuilt.push(stroke.id);
    }

    fn release(&mut self, stroke: &Stroke) {
        self.released.push(stroke.id);
    }
}

fn along_z(zs: &[f32]) -> Vec<ControlPoint> {
    zs.iter()
        .enumerate()
        .map(|(i, z)| {
            let mut pt = ControlPoint::at(Point3::new(0.0, 0.0, *z));
            pt.timestamp_ms = 100 * i as u32;
            pt
        })
        .collect()
}

#[test]
fn stroke_crossing_the_sphere_is_replaced_in_place() {
    let mut sketch = SketchMemory::new();
    let id = sketch.draw(CanvasId::MAIN, along_z(&[-3.0, -1.0, 1.0, 3.0]));
    let registry = CanvasRegistry::default();
    let mut renderer = RecordingRenderer::default();

    let report = crop_to_sphere(&mut sketch, &registry, &mut renderer, Point3::origin(), 2.0);

    assert_eq!(report.replaced, 1);
    assert_eq!(report.bounds_tests_passed, 1);
    assert_eq!(sketch.live_stroke_ids(), vec![id]);
    assert_eq!(renderer.rebuilt, vec![id]);
    assert!(renderer.released.is_empty());

    let stroke = sketch.stroke(id).unwrap();
    let zs: Vec<f32> = stroke.points().iter().map(|pt| pt.position.z).collect();
    assert_eq!(zs.len(), 4);
    assert!((zs[0] + 2.0).abs() < 1.0e-5);
    assert_eq!(&zs[1..3], &[-1.0, 1.0]);
    assert!((zs[3] - 2.0).abs() < 1.0e-5);
    assert_eq!(stroke.bounds, stroke.compute_aabb());
}

#[test]
fn small_sphere_keeps_only_the_middle_chord() {
    let mut sketch = SketchMemory::new();
    let id = sketch.draw(CanvasId::MAIN, along_z(&[-3.0, -1.0, 1.0, 3.0]));
    let registry = CanvasRegistry::default();
    let mut renderer = RecordingRenderer::default();

    let report = crop_to_sphere(&mut sketch, &registry, &mut renderer, Point3::origin(), 0.5);

    // No sample lies inside, but the segment from z = -1 to z = 1 crosses the sphere.
    assert_eq!(report.replaced, 1);
    let stroke = sketch.stroke(id).unwrap();
    assert_eq!(stroke.points().len(), 2);
    assert!((stroke.points()[0].position.z + 0.5).abs() < 1.0e-5);
    assert!((stroke.points()[1].position.z - 0.5).abs() < 1.0e-5);
    assert_eq!(stroke.points()[0].timestamp_ms, 125);
    assert_eq!(stroke.points()[1].timestamp_ms, 175);
}

#[test]
fn non_positive_radius_is_a_noop() {
    let mut sketch = SketchMemory::new();
    let _ = sketch.draw(CanvasId::MAIN, along_z(&[-3.0, -1.0, 1.0, 3.0]));
    let _ = sketch.draw(CanvasId::MAIN, along_z(&[10.0, 11.0]));
    let before = sketch.snapshot();
    let registry = CanvasRegistry::default();
    let mut renderer = RecordingRenderer::default();

    for radius in [-1.0, 0.0, f32::NAN] {
        let report = crop_to_sphere(&mut sketch, &registry, &mut renderer, Point3::origin(), radius);
        assert!(report.is_noop());
        assert_eq!(report.bounds_tests_passed + report.bounds_tests_failed, 0);
    }

    assert_eq!(sketch.snapshot(), before);
    assert!(renderer.rebuilt.is_empty() && renderer.released.is_empty());
}

#[test]
fn strokes_inside_are_untouched_and_outside_deleted() {
    let mut sketch = SketchMemory::new();
    let inside = sketch.draw(CanvasId::MAIN, along_z(&[-0.5, 0.0, 0.5]));
    let outside = sketch.draw(CanvasId::MAIN, along_z(&[10.0, 11.0, 12.0]));
    let registry = CanvasRegistry::default();
    let mut renderer = RecordingRenderer::default();
    let original = sketch.stroke(inside).cloned();

    let report = crop_to_sphere(&mut sketch, &registry, &mut renderer, Point3::origin(), 1.0);

    assert_eq!(report.unchanged, 1);
    assert_eq!(report.deleted, 1);
    assert_eq!(report.bounds_tests_failed, 1);
    assert_eq!(report.preserved(), 1);
    assert_eq!(sketch.live_stroke_ids(), vec![inside]);
    assert_eq!(sketch.stroke(inside).cloned(), original);
    assert!(renderer.rebuilt.is_empty());
    assert_eq!(renderer.released, vec![outside]);
}

#[test]
fn split_strokes_inherit_the_parent_attributes() {
    let mut sketch = SketchMemory::new();
    let first = sketch.draw(CanvasId::MAIN, along_z(&[0.0, 0.5]));
    let parent = sketch.allocate_id();
    let mut stroke = Stroke::new(parent, CanvasId::MAIN, along_z(&[-0.5, 0.0, 3.0, 0.5, 0.0]));
    stroke.seed = 1234;
    stroke.group = GroupTag(5);
    stroke.flags = StrokeFlags::IS_GROUP_CONTINUE;
    stroke.brush_size = 0.25;
    stroke.refresh_bounds();
    sketch.add_stroke(stroke);
    let last = sketch.draw(CanvasId::MAIN, along_z(&[0.25]));

    let registry = CanvasRegistry::default();
    let mut renderer = RecordingRenderer::default();
    let report = StrokeCropper::new(&mut sketch, &registry, &mut renderer)
        .crop_to_sphere(Point3::origin(), 1.0);

    assert_eq!(report.split, 1);
    assert_eq!(report.created, 2);
    assert_eq!(report.unchanged, 2);
    assert!(sketch.stroke(parent).is_none());
    assert_eq!(renderer.released, vec![parent]);

    // Split strokes are appended after the surviving strokes.
    let ids = sketch.live_stroke_ids();
    assert_eq!(ids.len(), 4);
    assert_eq!(&ids[..2], &[first, last]);
    assert_eq!(renderer.rebuilt, ids[2..].to_vec());

    for id in &ids[2..] {
        assert!(*id != parent && *id > last);
        let child = sketch.stroke(*id).unwrap();
        assert_eq!(child.points().len(), 3);
        assert_eq!(child.seed, 1234);
        assert_eq!(child.group, GroupTag(5));
        assert_eq!(child.flags, StrokeFlags::IS_GROUP_CONTINUE);
        assert_eq!(child.brush_size, 0.25);
        assert_eq!(child.canvas, Some(CanvasId::MAIN));
        assert_eq!(child.bounds, child.compute_aabb());
    }

    // The first run ends where the stroke leaves the sphere, the second starts where it
    // comes back.
    let head = sketch.stroke(ids[2]).unwrap();
    let tail = sketch.stroke(ids[3]).unwrap();
    assert_eq!(head.head_timestamp_ms(), Some(0));
    assert_eq!(tail.tail_timestamp_ms(), Some(400));
    assert!((head.points()[2].position.z - 1.0).abs() < 1.0e-5);
    assert!((tail.points()[0].position.z - 1.0).abs() < 1.0e-5);
}

#[test]
fn inert_strokes_are_left_alone() {
    let mut sketch = SketchMemory::new();

    let mut detached = Stroke::new(sketch.allocate_id(), CanvasId::MAIN, along_z(&[10.0, 11.0]));
    detached.canvas = None;
    let detached_id = detached.id;
    sketch.add_stroke(detached);

    let mut unloaded = Stroke::new(sketch.allocate_id(), CanvasId::MAIN, vec![]);
    unloaded.control_points = None;
    let unloaded_id = unloaded.id;
    sketch.add_stroke(unloaded);

    let empty = sketch.draw(CanvasId::MAIN, vec![]);
    let orphan = sketch.draw(CanvasId(7), along_z(&[10.0, 11.0]));

    let registry = CanvasRegistry::default();
    let mut renderer = RecordingRenderer::default();
    let report = crop_to_sphere(&mut sketch, &registry, &mut renderer, Point3::origin(), 1.0);

    assert_eq!(report.skipped, 4);
    assert!(report.is_noop());
    assert_eq!(
        sketch.live_stroke_ids(),
        vec![detached_id, unloaded_id, empty, orphan]
    );
}

#[test]
fn crop_can_be_undone_with_a_snapshot() {
    let mut sketch = SketchMemory::new();
    let _ = sketch.draw(CanvasId::MAIN, along_z(&[-0.5, 0.0, 3.0, 0.5, 0.0]));
    let _ = sketch.draw(CanvasId::MAIN, along_z(&[-3.0, -1.0, 1.0, 3.0]));
    let _ = sketch.draw(CanvasId::MAIN, along_z(&[10.0, 11.0]));
    let registry = CanvasRegistry::default();
    let mut renderer = RecordingRenderer::default();

    let before = sketch.snapshot();
    let report = crop_to_sphere(&mut sketch, &registry, &mut renderer, Point3::origin(), 1.0);
    assert!(!report.is_noop());
    let after = sketch.snapshot();

    sketch.restore(before.clone());
    assert_eq!(sketch.snapshot(), before);

    // Redoing the crop yields the same geometry, under fresh identifiers.
    let _ = crop_to_sphere(&mut sketch, &registry, &mut renderer, Point3::origin(), 1.0);
    let redone = sketch.snapshot();
    assert_eq!(redone.strokes().len(), after.strokes().len());
    for (a, b) in redone.strokes().iter().zip(after.strokes()) {
        assert_eq!(a.points(), b.points());
    }
}

#[test]
fn large_sketch_with_mixed_outcomes() {
    let mut sketch = SketchMemory::new();

    for i in 0..20_000 {
        let zs: &[f32] = match i % 4 {
            0 => &[10.0, 11.0],
            1 => &[-0.5, 0.5],
            2 => &[-0.5, 3.0],
            _ => &[-0.5, 3.0, 0.5],
        };
        let _ = sketch.draw(CanvasId::MAIN, along_z(zs));
    }

    let registry = CanvasRegistry::default();
    let mut renderer = RecordingRenderer::default();
    let report = crop_to_sphere(&mut sketch, &registry, &mut renderer, Point3::origin(), 1.0);

    assert_eq!(report.deleted, 5_000);
    assert_eq!(report.unchanged, 5_000);
    assert_eq!(report.replaced, 5_000);
    assert_eq!(report.split, 5_000);
    assert_eq!(report.created, 10_000);
    assert_eq!(sketch.len(), 20_000);
    assert_eq!(renderer.released.len(), 10_000);
}
