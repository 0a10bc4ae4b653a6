use avian2d::prelude::*;
use bevy::prelude::*;

use super::*;
use crate::common::test_utils::run_system_once;

#[test]
fn spawns_fence_on_enter() {
    let mut world = World::new();
    world.insert_resource(Tunables::default());
    run_system_once(&mut world, spawn_fence);

    let fences = world
        .query::<(&Name, &RigidBody)>()
        .iter(&world)
        .filter(|(n, rb)| n.as_str().starts_with("Fence") && matches!(**rb, RigidBody::Static))
        .count();
    assert_eq!(fences, 4);
}

#[test]
fn fence_hugs_the_arena() {
    let half = Vec2::new(200.0, 100.0);
    let [top, bottom, left, right] = fence_segments(half, 10.0);

    assert_eq!(top.center.y - top.size.y / 2.0, half.y);
    assert_eq!(bottom.center.y + bottom.size.y / 2.0, -half.y);
    assert_eq!(left.center.x + left.size.x / 2.0, -half.x);
    assert_eq!(right.center.x - right.size.x / 2.0, half.x);
    assert_eq!(top.size.x, 420.0);
}

#[test]
fn field_covers_the_arena() {
    let tiles: Vec<_> = field_tiles(Vec2::new(128.0, 64.0)).collect();
    // 5 columns by 3 rows.
    assert_eq!(tiles.len(), 15);
    assert!(tiles.iter().any(|(_, c)| *c == Vec2::new(128.0, 64.0)));
    assert!(tiles.iter().any(|(_, c)| *c == Vec2::new(-128.0, -64.0)));
}
