//! Outcome selection for the roulette wheel.
//!
//! The wheel and the ball animate independently: segments are painted in the
//! wheel's own rotating frame, while the ball settles at a world-space angle.
//! The ball's angle therefore has to be de-rotated by the wheel's rotation
//! before it can be turned into a segment index. [`pick_winner`] is that
//! mapping — pure and deterministic; all randomness lives in
//! [`SpinPlan::draw`], which takes the RNG as an argument.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{FULL_CIRCLE_DEG, WHEEL_MAX_TURNS, WHEEL_MIN_TURNS};

/// Casino palette cycled across segments, in display order.
pub const SEGMENT_PALETTE: [&str; 3] = ["#d62c2c", "#2c2c2c", "#0eac69"];

#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn segment_angle_deg(item_count: usize) -> f64 {
    FULL_CIRCLE_DEG / item_count.max(1) as f64
}

#[must_use]
pub fn segment_color(index: usize) -> &'static str {
    SEGMENT_PALETTE[index % SEGMENT_PALETTE.len()]
}

/// Maps a settled ball angle and wheel rotation to the winning segment index.
///
/// `landing_angle_deg` is the ball's world-space angle (0 = up). The wheel's
/// accumulated rotation matters only modulo 360. Segment boundaries are
/// half-open: `[0, segment)` is index 0. The trailing modulo guards the
/// floating-point edge where `relative` rounds up to a full circle.
///
/// `item_count` must be at least 1; spins are refused upstream when the list
/// is empty.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
pub fn pick_winner(item_count: usize, landing_angle_deg: f64, wheel_rotation_deg: f64) -> usize {
    debug_assert!(item_count >= 1);
    if item_count <= 1 {
        return 0;
    }

    let segment = FULL_CIRCLE_DEG / item_count as f64;
    let wheel_facing = wheel_rotation_deg.rem_euclid(FULL_CIRCLE_DEG);
    let relative = (landing_angle_deg - wheel_facing).rem_euclid(FULL_CIRCLE_DEG);

    ((relative / segment).floor() as usize) % item_count
}

/// One spin's randomized targets and its pre-resolved winner.
///
/// The shell animates the wheel toward `wheel_rotation_deg` and the ball
/// toward `landing_angle_deg`, then reports the values it actually settled at.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpinPlan {
    pub item_count: usize,
    pub wheel_rotation_deg: f64,
    pub landing_angle_deg: f64,
    pub winning_index: usize,
}

impl SpinPlan {
    /// Draws spin targets: 4–7 full turns of wheel rotation and a uniform
    /// ball landing angle.
    pub fn draw<R: Rng + ?Sized>(rng: &mut R, item_count: usize) -> Self {
        debug_assert!(item_count >= 1);
        let turns = rng.gen_range(WHEEL_MIN_TURNS..WHEEL_MAX_TURNS);
        let wheel_rotation_deg = turns * FULL_CIRCLE_DEG;
        let landing_angle_deg = rng.gen_range(0.0..FULL_CIRCLE_DEG);
        let winning_index = pick_winner(item_count, landing_angle_deg, wheel_rotation_deg);

        Self {
            item_count,
            wheel_rotation_deg,
            landing_angle_deg,
            winning_index,
        }
    }
}
