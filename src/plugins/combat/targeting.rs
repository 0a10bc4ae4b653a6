//! Area queries over candidate positions.
//!
//! Candidates are `(id, position)` pairs so the same code serves ECS
//! entities, plain indices and test fixtures.
//!
//! The circle test is strict (`<`) while the arc test is inclusive on the
//! radius. Both behaviours are relied on by callers; keep them distinct.

use bevy::prelude::*;

use crate::common::geometry::{in_arc, in_circle};

/// Every candidate strictly closer than `radius` to `center`.
pub fn find_in_circle<T>(
    center: Vec2,
    radius: f32,
    candidates: impl IntoIterator<Item = (T, Vec2)>,
) -> Vec<T> {
    candidates
        .into_iter()
        .filter(|(_, pos)| in_circle(center, radius, *pos))
        .map(|(id, _)| id)
        .collect()
}

/// Every candidate within `radius` whose direction from `center` is at most
/// `total_angle / 2` away from `facing`.
///
/// `facing` need not be normalized; a zero facing means up. Candidates
/// exactly on `center` are skipped.
pub fn find_in_arc<T>(
    center: Vec2,
    radius: f32,
    facing: Vec2,
    total_angle: f32,
    candidates: impl IntoIterator<Item = (T, Vec2)>,
) -> Vec<T> {
    candidates
        .into_iter()
        .filter(|(_, pos)| in_arc(center, radius, facing, total_angle, *pos))
        .map(|(id, _)| id)
        .collect()
}
