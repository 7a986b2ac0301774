use std::f64::consts::{FRAC_PI_2, TAU};

use kurbo::{Point, Vec2};
use rand::Rng;

/// Center of the normalized 100x100 layout space, in container percent.
const CENTER: f64 = 50.0;
/// Ring radius, in container percent.
const RADIUS: f64 = 25.0;
/// Maximum cosmetic tilt magnitude, in degrees.
pub const MAX_TILT_DEG: f64 = 15.0;

#[derive(Clone, Copy, Debug, PartialEq)]
/// Computed position and rotation for one rendered item.
///
/// `x`/`y` are percentages of the container, so the same placement scales to
/// any render box. Placements are never persisted; they are recomputed per
/// render, which is why the tilt differs between renders of one composition.
pub struct Placement {
    /// Horizontal position, percent of container width.
    pub x: f64,
    /// Vertical position, percent of container height.
    pub y: f64,
    /// Cosmetic tilt in degrees, in `[-MAX_TILT_DEG, MAX_TILT_DEG]`.
    pub rotation_deg: f64,
}

/// Arrange `count` items evenly around the bouquet ring.
///
/// Index `i` of the result places item `i` of the caller's sequence. Zero
/// items yield an empty vector; a single item sits at the exact center with
/// zero tilt rather than alone on the ring. Tilt is drawn fresh from the
/// thread RNG on every call.
pub fn arrange_bouquet(count: usize) -> Vec<Placement> {
    arrange_bouquet_with_rng(count, &mut rand::thread_rng())
}

/// [`arrange_bouquet`] with an injected tilt source, for deterministic tests.
pub fn arrange_bouquet_with_rng<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<Placement> {
    if count == 0 {
        return Vec::new();
    }
    if count == 1 {
        // A lone stem on the ring reads as off-center; pin it to the middle.
        return vec![Placement {
            x: CENTER,
            y: CENTER,
            rotation_deg: 0.0,
        }];
    }

    let center = Point::new(CENTER, CENTER);
    (0..count)
        .map(|i| {
            // Item 0 at the top of the ring, then evenly spaced clockwise.
            let theta = (i as f64 / count as f64) * TAU - FRAC_PI_2;
            let pos = center + Vec2::from_angle(theta) * RADIUS;
            Placement {
                x: pos.x,
                y: pos.y,
                rotation_deg: rng.gen_range(-MAX_TILT_DEG..=MAX_TILT_DEG),
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/layout/radial.rs"]
mod tests;
