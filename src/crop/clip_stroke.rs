use crate::math::Real;
use crate::shape::CropVolume;
use crate::stroke::ControlPoint;

/// Splits a sequence of control points into the runs lying inside of `volume`.
///
/// `volume` must be expressed in the same frame as the control points. Each returned
/// run is a contiguous sub-sequence of `points`, possibly starting and/or ending with a
/// control point interpolated on the boundary of the volume, and is ready to become a
/// stroke of its own. Runs are returned in drawing order.
///
/// Every run has at least two points, except when `points` has a single point lying inside
/// of the volume: that point is then returned as its own run.
///
/// A segment whose endpoints are both outside of the volume but which passes through it
/// yields a standalone two-point run covering the chord inside of the volume.
pub fn clip_control_points<V>(points: &[ControlPoint], volume: &V) -> Vec<Vec<ControlPoint>>
where
    V: CropVolume + ?Sized,
{
    let mut result = vec![];

    match points {
        [] => return result,
        [single] => {
            if volume.contains_local_point(&single.position) {
                result.push(vec![*single]);
            }
            return result;
        }
        _ => {}
    }

    let mut current: Option<Vec<ControlPoint>> = None;

    for pair in points.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        let inside_a = volume.contains_local_point(&a.position);
        let inside_b = volume.contains_local_point(&b.position);

        match (inside_a, inside_b) {
            (true, true) => {
                current.get_or_insert_with(|| vec![*a]).push(*b);
            }
            (true, false) => {
                let mut run = current.take().unwrap_or_else(|| vec![*a]);

                if let Some((_, exit)) = clip_parameters(volume, a, b) {
                    run.push(a.interpolate(b, exit));
                }

                if run.len() > 1 {
                    result.push(run);
                }
            }
            (false, true) => {
                // `a` is outside so any run was closed by the previous pair.
                let mut run = Vec::with_capacity(2);

                if let Some((enter, _)) = clip_parameters(volume, a, b) {
                    run.push(a.interpolate(b, enter));
                }

                run.push(*b);
                current = Some(run);
            }
            (false, false) => {
                if let Some((start, end)) = clip_parameters(volume, a, b) {
                    if start != end {
                        result.push(vec![a.interpolate(b, start), a.interpolate(b, end)]);
                    }
                }
            }
        }
    }

    if let Some(run) = current {
        if run.len() > 1 {
            result.push(run);
        }
    }

    result
}

/// The clamped parameters of the portion of `[a, b]` inside of `volume`, if any.
#[inline]
fn clip_parameters<V>(volume: &V, a: &ControlPoint, b: &ControlPoint) -> Option<(Real, Real)>
where
    V: CropVolume + ?Sized,
{
    volume.clip_segment_clamped(&a.position, &b.position)
}
