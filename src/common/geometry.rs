//! Small 2D helpers on top of `Vec2`.
//!
//! `Vec2` already covers add/sub/scale/dot/length. What lives here are the
//! few rules the gameplay code relies on and that glam leaves open:
//! a zero direction, angles between directions, and arc containment.

use bevy::prelude::*;

/// Facing used when a caller hands us a zero direction.
pub const DEFAULT_FACING: Vec2 = Vec2::Y;

/// Unit direction from `from` to `to`, or zero if the points coincide.
#[inline]
pub fn direction(from: Vec2, to: Vec2) -> Vec2 {
    (to - from).normalize_or_zero()
}

/// Normalized facing, falling back to [`DEFAULT_FACING`] for a zero vector.
#[inline]
pub fn facing_or_default(facing: Vec2) -> Vec2 {
    if facing.length_squared() == 0.0 {
        DEFAULT_FACING
    } else {
        facing.normalize_or_zero()
    }
}

/// Unsigned angle (radians) between two unit vectors.
///
/// The dot product is clamped to [-1, 1] so float drift never makes `acos`
/// return NaN.
#[inline]
pub fn angle_between_unit(a: Vec2, b: Vec2) -> f32 {
    a.dot(b).clamp(-1.0, 1.0).acos()
}

/// True if `point` lies in the arc around `center` opening along `facing`.
///
/// Inclusive on the radius and on the half angle. A point exactly on the
/// center is rejected since it has no direction.
pub fn in_arc(center: Vec2, radius: f32, facing: Vec2, total_angle: f32, point: Vec2) -> bool {
    let to_point = point - center;
    let dist_sq = to_point.length_squared();
    if dist_sq > radius * radius || dist_sq == 0.0 {
        return false;
    }
    let facing = facing_or_default(facing);
    angle_between_unit(facing, to_point.normalize_or_zero()) <= total_angle / 2.0
}

/// True if `point` lies strictly inside the circle.
#[inline]
pub fn in_circle(center: Vec2, radius: f32, point: Vec2) -> bool {
    center.distance_squared(point) < radius * radius
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::{FRAC_PI_2, PI};

    #[test]
    fn direction_of_coincident_points_is_zero() {
        assert_eq!(direction(Vec2::ONE, Vec2::ONE), Vec2::ZERO);
        assert_eq!(Vec2::ZERO.normalize_or_zero(), Vec2::ZERO);
    }

    #[test]
    fn zero_facing_defaults_to_up() {
        assert_eq!(facing_or_default(Vec2::ZERO), Vec2::Y);
        assert_relative_eq!(facing_or_default(Vec2::new(10.0, 0.0)).x, 1.0);
    }

    #[test]
    fn angle_between_tolerates_drift() {
        let a = Vec2::new(1.000_000_1, 0.0);
        assert_relative_eq!(angle_between_unit(a, a), 0.0);
        assert_relative_eq!(angle_between_unit(Vec2::X, Vec2::Y), FRAC_PI_2);
        assert_relative_eq!(angle_between_unit(Vec2::X, -Vec2::X), PI);
    }

    #[test]
    fn circle_is_exclusive_and_arc_inclusive_on_radius() {
        let edge = Vec2::new(10.0, 0.0);
        assert!(!in_circle(Vec2::ZERO, 10.0, edge));
        assert!(in_arc(Vec2::ZERO, 10.0, Vec2::X, PI, edge));
        assert!(!in_arc(Vec2::ZERO, 10.0, Vec2::X, PI, Vec2::ZERO));
    }
}
