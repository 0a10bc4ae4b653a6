//! World plugin: the fenced field enemies and the player live in.
//!
//! The fence sits just outside `Tunables::arena_half_extents`, the same
//! rectangle the spawner clamps positions into.

use avian2d::prelude::*;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::layers::Layer;
use crate::common::state::GameState;
use crate::common::tunables::Tunables;

const TILE: f32 = 64.0;
const FENCE_THICKNESS: f32 = 30.0;

pub fn plugin(app: &mut App) {
    app.add_systems(OnEnter(GameState::InGame), (spawn_fence, spawn_field));
}

/// A fence segment: name, center and size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FenceSegment {
    pub name: &'static str,
    pub center: Vec2,
    pub size: Vec2,
}

/// Four segments enclosing `half_extents`, corners covered by the
/// horizontal ones.
pub fn fence_segments(half_extents: Vec2, thickness: f32) -> [FenceSegment; 4] {
    let outer_w = half_extents.x * 2.0 + thickness * 2.0;
    let inner_h = half_extents.y * 2.0;
    let edge = thickness * 0.5;
    [
        FenceSegment {
            name: "FenceTop",
            center: Vec2::new(0.0, half_extents.y + edge),
            size: Vec2::new(outer_w, thickness),
        },
        FenceSegment {
            name: "FenceBottom",
            center: Vec2::new(0.0, -half_extents.y - edge),
            size: Vec2::new(outer_w, thickness),
        },
        FenceSegment {
            name: "FenceLeft",
            center: Vec2::new(-half_extents.x - edge, 0.0),
            size: Vec2::new(thickness, inner_h),
        },
        FenceSegment {
            name: "FenceRight",
            center: Vec2::new(half_extents.x + edge, 0.0),
            size: Vec2::new(thickness, inner_h),
        },
    ]
}

fn spawn_fence(mut commands: Commands, tunables: Res<Tunables>) {
    let color = Color::srgb(0.42, 0.3, 0.18);
    let layers = CollisionLayers::new(Layer::World, [Layer::Player, Layer::Enemy]);

    for segment in fence_segments(tunables.arena_half_extents, FENCE_THICKNESS) {
        commands.spawn((
            Name::new(segment.name),
            Sprite {
                color,
                custom_size: Some(segment.size),
                ..default()
            },
            Transform::from_translation(segment.center.extend(0.0)),
            RigidBody::Static,
            Collider::rectangle(segment.size.x, segment.size.y),
            layers,
            DespawnOnExit(GameState::InGame),
        ));
    }
}

/// Tile centers covering `half_extents`, row by row.
pub fn field_tiles(half_extents: Vec2) -> impl Iterator<Item = (IVec2, Vec2)> {
    let cols = (half_extents.x / TILE).floor() as i32;
    let rows = (half_extents.y / TILE).floor() as i32;
    (-rows..=rows)
        .flat_map(move |y| (-cols..=cols).map(move |x| IVec2::new(x, y)))
        .map(|cell| (cell, cell.as_vec2() * TILE))
}

/// Soil furrows: alternating row shades, solid colors only.
fn spawn_field(mut commands: Commands, tunables: Res<Tunables>) {
    for (cell, center) in field_tiles(tunables.arena_half_extents) {
        let color = if cell.y % 2 == 0 {
            Color::srgb(0.33, 0.24, 0.16)
        } else {
            Color::srgb(0.29, 0.21, 0.14)
        };
        commands.spawn((
            Sprite::from_color(color, Vec2::splat(TILE)),
            Transform::from_translation(center.extend(-1.0)),
            DespawnOnExit(GameState::InGame),
        ));
    }
}

#[cfg(test)]
mod tests;
