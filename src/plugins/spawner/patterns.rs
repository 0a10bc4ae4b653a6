//! Formation geometry. Pure position math; nothing is spawned here.

use bevy::prelude::*;
use rand::Rng;
use std::f32::consts::TAU;

use crate::common::geometry::facing_or_default;

/// `count` points on a circle, starting at angle 0, evenly spaced.
pub fn circle_positions(center: Vec2, radius: f32, count: usize) -> Vec<Vec2> {
    if count == 0 {
        return Vec::new();
    }
    let step = TAU / count as f32;
    (0..count)
        .map(|i| center + Vec2::from_angle(i as f32 * step) * radius)
        .collect()
}

/// `count` points `spacing` apart across `forward`, centered on `anchor`.
pub fn line_positions(anchor: Vec2, forward: Vec2, count: usize, spacing: f32) -> Vec<Vec2> {
    let across = facing_or_default(forward).perp();
    let half_span = count.saturating_sub(1) as f32 * spacing / 2.0;
    (0..count)
        .map(|i| anchor + across * (i as f32 * spacing - half_span))
        .collect()
}

/// `count` points stepping `spacing` along `forward`, alternating
/// `+amplitude` / `-amplitude` to the side.
pub fn zigzag_positions(
    start: Vec2,
    forward: Vec2,
    count: usize,
    spacing: f32,
    amplitude: f32,
) -> Vec<Vec2> {
    let forward = facing_or_default(forward);
    let side = forward.perp();
    (0..count)
        .map(|i| {
            let lateral = if i % 2 == 0 { amplitude } else { -amplitude };
            start + forward * (i as f32 * spacing) + side * lateral
        })
        .collect()
}

/// Uniform point inside `view` (edges included).
pub fn random_in_view(view: Rect, rng: &mut impl Rng) -> Vec2 {
    Vec2::new(
        rng.gen_range(view.min.x..=view.max.x),
        rng.gen_range(view.min.y..=view.max.y),
    )
}
