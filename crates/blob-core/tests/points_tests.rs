// Tests for point generation, advancing and regeneration.

use blob_core::*;

fn make_blob(n: usize, seed: u64) -> Blob {
    let mut blob = Blob::with_seed(n, seed).expect("valid point count");
    blob.set_radius_bounds(10.0, 20.0).expect("valid bounds");
    blob
}

fn slot_range(n: usize, i: usize) -> (f32, f32) {
    let slot = 360.0 / n as f32;
    (slot * i as f32, slot * i as f32 + slot * ANGLE_JITTER_FRACTION)
}

#[test]
fn construct_rejects_fewer_than_three_points() {
    for n in 0..3 {
        let err = Blob::new(n).unwrap_err();
        assert_eq!(err, BlobError::TooFewPoints { count: n, min: 3 });
    }
    assert!(Blob::new(3).is_ok());
}

#[test]
fn construct_sizes_every_point_and_resets_progress() {
    let blob = Blob::with_seed(9, 1).unwrap();
    assert_eq!(blob.point_count(), 9);
    assert_eq!(blob.points().len(), 9);
    for p in blob.points() {
        assert_eq!(p.progress, 0.0);
        // default bounds are 0..0
        assert_eq!(p.radius, 0.0);
        assert_eq!(p.radius_next, 0.0);
    }
}

#[test]
fn bezier_constant_is_derived_from_point_count() {
    let blob = Blob::with_seed(8, 3).unwrap();
    let expected = (4.0 / 3.0) * (std::f32::consts::PI / 16.0).tan();
    assert!((blob.bezier_constant() - expected).abs() < 1e-6);
}

#[test]
fn invalid_radius_bounds_are_rejected() {
    let mut blob = make_blob(8, 5);
    let before = blob.points().to_vec();

    assert_eq!(
        blob.set_radius_bounds(20.0, 10.0),
        Err(BlobError::InvalidRadiusBounds {
            min: 20.0,
            max: 10.0
        })
    );
    assert!(blob.set_radius_bounds(-1.0, 10.0).is_err());
    assert!(blob.set_radius_bounds(f32::NAN, 10.0).is_err());
    assert!(blob.retarget_radius_bounds(0.0, f32::INFINITY).is_err());

    // Rejected bounds leave state untouched.
    assert_eq!(blob.radius_bounds(), RadiusBounds { min: 10.0, max: 20.0 });
    assert_eq!(blob.points(), before.as_slice());
}

#[test]
fn config_with_bounds_generates_inside_them() {
    let blob = Blob::from_config(BlobConfig {
        point_count: 12,
        min_radius: 65.0,
        max_radius: 75.0,
        seed: Some(11),
        jitter: JitterSource::Uniform,
    })
    .unwrap();
    for p in blob.points() {
        assert!((65.0..=75.0).contains(&p.radius));
        assert!((65.0..=75.0).contains(&p.radius_next));
    }
}

#[test]
fn uniform_generation_stays_inside_slot_and_speed_range() {
    let n = 12;
    let mut blob = make_blob(n, 21);
    for _ in 0..50 {
        blob.regenerate_all();
        for (i, p) in blob.points().iter().enumerate() {
            let (lo, hi) = slot_range(n, i);
            for (r, a) in [(p.radius, p.angle), (p.radius_next, p.angle_next)] {
                assert!((10.0..=20.0).contains(&r), "radius {r} out of bounds");
                assert!(
                    a >= lo - 1e-4 && a <= hi + 1e-4,
                    "angle {a} outside slot {lo}..{hi} for point {i}"
                );
            }
            assert!(p.speed >= POINT_SPEED_BASE && p.speed <= POINT_SPEED_BASE + POINT_SPEED_SPAN);
        }
    }
}

#[test]
fn legacy_generation_allows_signed_angle_jitter() {
    let n = 9;
    let mut blob = Blob::from_config(BlobConfig {
        point_count: n,
        min_radius: 55.0,
        max_radius: 67.0,
        seed: Some(5),
        jitter: JitterSource::Legacy,
    })
    .unwrap();
    let slot = 360.0 / n as f32;
    let jitter = slot * ANGLE_JITTER_FRACTION;
    let mut saw_negative = false;
    for _ in 0..50 {
        blob.regenerate_all();
        for (i, p) in blob.points().iter().enumerate() {
            let base = slot * i as f32;
            assert!((55.0..=67.0).contains(&p.radius));
            assert!(p.angle >= base - jitter - 1e-4 && p.angle <= base + jitter + 1e-4);
            assert!(p.speed >= POINT_SPEED_BASE && p.speed <= POINT_SPEED_BASE + POINT_SPEED_SPAN);
            saw_negative |= p.angle < base;
        }
    }
    assert!(saw_negative, "signed fractions should jitter below the slot start");
}

#[test]
fn legacy_radii_cluster_on_float_modulo_steps() {
    let mut blob = Blob::from_config(BlobConfig {
        point_count: 12,
        min_radius: 0.0,
        max_radius: 100.0,
        seed: Some(42),
        jitter: JitterSource::Legacy,
    })
    .unwrap();
    let mut total = 0;
    let mut on_step = 0;
    for _ in 0..500 {
        blob.regenerate_all();
        for p in blob.points() {
            for r in [p.radius, p.radius_next] {
                total += 1;
                let rounded = r.round();
                if (r - rounded).abs() < 1e-3 && rounded as i32 % 4 == 0 {
                    on_step += 1;
                }
            }
        }
    }
    assert!(
        on_step * 10 >= total * 9,
        "only {on_step}/{total} legacy radii fall on multiples of 4"
    );
}

#[test]
fn progress_stays_in_unit_range() {
    let mut blob = make_blob(12, 8);
    let amplitudes = [0.0, 0.1, 0.5, 1.0, 3.0];
    for step in 0..2000 {
        let amplitude = amplitudes[step % amplitudes.len()];
        blob.advance_points(amplitude, 0.7);
        for p in blob.points() {
            assert!(
                (0.0..=1.0).contains(&p.progress),
                "progress {} escaped at step {step}",
                p.progress
            );
        }
    }
}

#[test]
fn idle_points_still_move() {
    let mut blob = make_blob(8, 2);
    blob.advance_points(0.0, 1.0);
    for p in blob.points() {
        let expected = p.speed * MIN_SPEED;
        assert!((p.progress - expected).abs() < 1e-6);
    }
}

#[test]
fn amplitude_scales_progress_rate() {
    let mut quiet = make_blob(8, 4);
    let mut loud = make_blob(8, 4);
    quiet.advance_points(0.0, 0.6);
    loud.advance_points(1.0, 0.6);
    for (q, l) in quiet.points().iter().zip(loud.points()) {
        let expected = l.speed * MIN_SPEED + l.speed * MAX_SPEED * 0.6;
        assert!((l.progress - expected).abs() < 1e-6);
        assert!(l.progress > q.progress);
    }
}

#[test]
fn negative_inputs_advance_like_zero() {
    let mut a = make_blob(8, 13);
    let mut b = make_blob(8, 13);
    for _ in 0..100 {
        a.advance_points(-2.0, 1.0);
        b.advance_points(0.0, 1.0);
    }
    assert_eq!(a.points(), b.points());
}

#[test]
fn wrapping_point_commits_previous_next_target() {
    let n = 10;
    let mut blob = make_blob(n, 77);
    let mut wraps = 0;
    for _ in 0..300 {
        let before = blob.points().to_vec();
        blob.advance_points(1.0, 1.0);
        for (i, (pre, post)) in before.iter().zip(blob.points()).enumerate() {
            if post.progress != 0.0 {
                continue;
            }
            wraps += 1;
            assert_eq!(post.radius, pre.radius_next);
            assert_eq!(post.angle, pre.angle_next);
            assert!((10.0..=20.0).contains(&post.radius_next));
            let (lo, hi) = slot_range(n, i);
            assert!(post.angle_next >= lo - 1e-4 && post.angle_next <= hi + 1e-4);
        }
    }
    assert!(wraps > 0, "expected at least one point to wrap");
}

#[test]
fn regenerate_all_resets_progress() {
    let mut blob = make_blob(8, 17);
    for _ in 0..5 {
        blob.advance_points(0.3, 1.0);
    }
    assert!(blob.points().iter().any(|p| p.progress > 0.0));
    blob.regenerate_all();
    assert!(blob.points().iter().all(|p| p.progress == 0.0));
}

#[test]
fn retarget_bounds_only_affects_future_targets() {
    let n = 8;
    let mut blob = make_blob(n, 23);
    let before = blob.points().to_vec();
    blob.retarget_radius_bounds(40.0, 50.0).unwrap();
    assert_eq!(blob.points(), before.as_slice());

    // After enough wraps every point has committed a target drawn from the
    // new range and holds another one as its next target.
    for _ in 0..400 {
        blob.advance_points(1.0, 1.0);
    }
    for p in blob.points() {
        assert!((40.0..=50.0).contains(&p.radius_next));
    }
}

#[test]
fn same_seed_produces_same_shape() {
    let mut a = make_blob(12, 99);
    let mut b = make_blob(12, 99);
    for _ in 0..200 {
        a.advance_points(0.4, 0.6);
        b.advance_points(0.4, 0.6);
    }
    assert_eq!(a.points(), b.points());
}

#[test]
fn reseed_restarts_the_generator() {
    let fresh = Blob::with_seed(8, 1).unwrap();
    let mut other = Blob::with_seed(8, 1234).unwrap();
    other.reseed(Some(1));
    other.regenerate_all();
    assert_eq!(fresh.points(), other.points());
}

#[test]
fn interpolation_follows_progress() {
    let p = BlobPoint {
        radius: 10.0,
        angle: 0.0,
        radius_next: 20.0,
        angle_next: 3.0,
        progress: 0.25,
        speed: 0.02,
    };
    assert!((p.interpolated_radius() - 12.5).abs() < 1e-6);
    assert!((p.interpolated_angle() - 0.75).abs() < 1e-6);
    assert_eq!(lerp(4.0, 8.0, 0.0), 4.0);
    assert_eq!(lerp(4.0, 8.0, 1.0), 8.0);
}
