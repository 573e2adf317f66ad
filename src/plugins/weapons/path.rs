//! Melee swing: a hit-volume following a closed spline around its anchor.
//!
//! Progress is owned here and advanced by the simulation tick. A swing runs
//! progress 0 -> 1 over `duration_secs`, then the latch clears and progress
//! rests at 0 (the curve's origin) until the next trigger.

use bevy::math::cubic_splines::{CubicCardinalSpline, CubicCurve, CyclicCubicGenerator};
use bevy::prelude::*;

/// Control points of the default swing, relative to the wielder.
/// The loop is closed back to the first point, which sits on the anchor.
pub const SWING_PATH: [Vec2; 4] = [
    Vec2::new(0.0, 0.0),
    Vec2::new(60.0, -70.0),
    Vec2::new(130.0, 0.0),
    Vec2::new(60.0, 70.0),
];

/// Rotation added to the tangent heading so the blade faces outward.
const FACING_OFFSET_DEG: f32 = 90.0;

#[derive(Component, Debug, Clone)]
pub struct PathFollower {
    curve: CubicCurve<Vec2>,
    progress: f32,
    attacking: bool,
    duration_secs: f32,
}

impl PathFollower {
    /// Closed Catmull-Rom loop through `points`. `None` if there are too few.
    pub fn new(points: impl IntoIterator<Item = Vec2>, duration_secs: f32) -> Option<Self> {
        let curve = CubicCardinalSpline::new_catmull_rom(points)
            .to_curve_cyclic()
            .ok()?;
        Some(Self {
            curve,
            progress: 0.0,
            attacking: false,
            duration_secs: duration_secs.max(f32::EPSILON),
        })
    }

    pub fn swing(duration_secs: f32) -> Self {
        Self::new(SWING_PATH, duration_secs).expect("swing path has enough control points")
    }

    #[inline]
    pub fn progress(&self) -> f32 {
        self.progress
    }

    #[inline]
    pub fn is_attacking(&self) -> bool {
        self.attacking
    }

    /// Advance by `dt` seconds, start a swing on trigger, and sample.
    ///
    /// Returns the world position (curve point + `anchor`) and the facing in
    /// degrees. Triggering mid-swing does nothing.
    pub fn advance(&mut self, trigger_held: bool, anchor: Vec2, dt: f32) -> (Vec2, f32) {
        if self.attacking {
            self.progress += dt / self.duration_secs;
            if self.progress >= 1.0 {
                self.attacking = false;
                self.progress = 0.0;
            }
        }

        if trigger_held && !self.attacking {
            self.attacking = true;
            self.progress = 0.0;
        }

        self.sample(anchor)
    }

    /// Position and facing at the current progress.
    pub fn sample(&self, anchor: Vec2) -> (Vec2, f32) {
        let tangent = self.tangent();
        let heading = if tangent.length_squared() > 0.0 {
            tangent.y.atan2(tangent.x).to_degrees()
        } else {
            0.0
        };

        (
            anchor + self.curve.position(self.curve_param()),
            heading + FACING_OFFSET_DEG,
        )
    }

    /// Direction of travel along the curve at the current progress.
    #[inline]
    pub fn tangent(&self) -> Vec2 {
        self.curve.velocity(self.curve_param())
    }

    /// Map progress in `[0, 1]` onto the curve's segment parameter.
    fn curve_param(&self) -> f32 {
        self.progress.clamp(0.0, 1.0) * self.curve.segments().len() as f32
    }
}
