use super::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

const EPS: f64 = 1e-9;

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPS,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn placement_count_matches_item_count() {
    for count in 0..=12 {
        assert_eq!(arrange_bouquet(count).len(), count);
    }
}

#[test]
fn zero_items_yield_an_empty_arrangement() {
    assert!(arrange_bouquet(0).is_empty());
}

#[test]
fn single_item_sits_at_the_exact_center_untilted() {
    assert_eq!(
        arrange_bouquet(1),
        vec![Placement {
            x: 50.0,
            y: 50.0,
            rotation_deg: 0.0,
        }]
    );
}

#[test]
fn ring_placements_lie_on_the_radius() {
    for count in 2..=8 {
        for p in arrange_bouquet(count) {
            let r2 = (p.x - 50.0).powi(2) + (p.y - 50.0).powi(2);
            assert_close(r2, 25.0 * 25.0);
        }
    }
}

#[test]
fn first_item_starts_at_the_top_of_the_ring() {
    for count in 2..=8 {
        let first = arrange_bouquet(count)[0];
        assert_close(first.x, 50.0);
        assert_close(first.y, 25.0);
    }
}

#[test]
fn three_items_spread_evenly() {
    let placements = arrange_bouquet(3);
    // 120 degrees apart, starting at the top.
    let third = (120.0f64).to_radians();
    assert_close(placements[1].x, 50.0 + 25.0 * (third - std::f64::consts::FRAC_PI_2).cos());
    assert_close(placements[1].y, 50.0 + 25.0 * (third - std::f64::consts::FRAC_PI_2).sin());
    assert_close(placements[2].x, 50.0 + 25.0 * (2.0 * third - std::f64::consts::FRAC_PI_2).cos());
    assert_close(placements[2].y, 50.0 + 25.0 * (2.0 * third - std::f64::consts::FRAC_PI_2).sin());
}

#[test]
fn tilt_stays_within_bounds() {
    for p in arrange_bouquet(16) {
        assert!(p.rotation_deg.abs() <= MAX_TILT_DEG, "{}", p.rotation_deg);
    }
}

#[test]
fn seeded_rng_reproduces_the_arrangement() {
    let a = arrange_bouquet_with_rng(5, &mut StdRng::seed_from_u64(7));
    let b = arrange_bouquet_with_rng(5, &mut StdRng::seed_from_u64(7));
    assert_eq!(a, b);
}
