use na::{Point3, Vector3};
use strokecrop3d::query::clip::segment_sphere_intersection;
use strokecrop3d::shape::{Ball, CropVolume};

fn random_point(rng: &mut oorandom::Rand32, half_extent: f32) -> Point3<f32> {
    Point3::from(Vector3::from_fn(|_, _| (rng.rand_float() * 2.0 - 1.0) * half_extent))
}

#[test]
fn clipped_endpoints_lie_on_the_sphere() {
    let mut rng = oorandom::Rand32::new(42);

    for _ in 0..1000 {
        let center = random_point(&mut rng, 10.0);
        let radius = 0.1 + rng.rand_float() * 5.0;
        let a = center + random_point(&mut rng, 2.0 * radius).coords;
        let b = center + random_point(&mut rng, 2.0 * radius).coords;

        let Some((enter, exit)) = segment_sphere_intersection(&a, &b, &center, radius) else {
            continue;
        };

        assert!(enter <= exit, "Unordered parameters {enter} > {exit}");

        for t in [enter, exit] {
            let pt = a + (b - a) * t;
            let dist = na::distance(&pt, &center);
            assert!(
                (dist - radius).abs() <= 1.0e-4 * radius.max(1.0),
                "Point {pt:?} at t = {t} is at distance {dist} from the center, expected {radius}"
            );
        }
    }
}

#[test]
fn clamped_portion_is_inside() {
    let mut rng = oorandom::Rand32::new(7);

    for _ in 0..1000 {
        let ball = Ball::new(random_point(&mut rng, 3.0), 0.5 + rng.rand_float() * 2.0);
        let a = random_point(&mut rng, 6.0);
        let b = random_point(&mut rng, 6.0);

        if let Some((start, end)) = ball.clip_segment_clamped(&a, &b) {
            assert!((0.0..=1.0).contains(&start) && (0.0..=1.0).contains(&end));
            assert!(start <= end);

            let mid = a + (b - a) * ((start + end) / 2.0);
            assert!(
                ball.contains_local_point(&mid),
                "Midpoint {mid:?} of the clipped portion is outside of {ball:?}"
            );
        } else {
            // Endpoints grazing the boundary may be inside up to the tolerance.
            let core = Ball::new(ball.center, ball.radius * 0.999);
            assert!(!core.contains_local_point(&a) && !core.contains_local_point(&b));
        }
    }
}
