use approx::assert_relative_eq;
use bevy::prelude::*;

use super::*;
use crate::common::test_utils::{fixed_time_with_delta, run_system_once};

#[test]
fn view_rect_is_centered() {
    let view = CameraView::new(Vec2::new(100.0, 50.0), Vec2::new(200.0, 100.0));
    let rect = view.rect();
    assert_eq!(rect.min, Vec2::new(0.0, 0.0));
    assert_eq!(rect.max, Vec2::new(200.0, 100.0));
}

#[test]
fn follow_closes_gap_exponentially() {
    let mut view = CameraView::new(Vec2::ZERO, Vec2::ONE);
    view.follow(Vec2::new(100.0, 0.0), 5.0, 0.2);
    assert_relative_eq!(view.center.x, 100.0 * (1.0 - (-1.0f32).exp()), epsilon = 1e-3);

    for _ in 0..200 {
        view.follow(Vec2::new(100.0, 0.0), 5.0, 0.2);
    }
    assert_relative_eq!(view.center.x, 100.0, epsilon = 1e-3);
}

#[test]
fn view_follows_player_each_tick() {
    let mut world = World::new();
    world.insert_resource(fixed_time_with_delta(1.0 / 60.0));
    world.insert_resource(Tunables::default());
    world.insert_resource(CameraView::new(Vec2::ZERO, Vec2::new(896.0, 504.0)));
    world.spawn((Player, Transform::from_xyz(0.0, 300.0, 1.0)));

    run_system_once(&mut world, follow_player_view);

    let view = world.resource::<CameraView>();
    assert!(view.center.y > 0.0 && view.center.y < 300.0);
    assert_eq!(view.center.x, 0.0);
}

#[test]
fn main_camera_copies_view_center() {
    let mut world = World::new();
    world.insert_resource(CameraView::new(Vec2::new(12.0, -7.0), Vec2::ONE));
    let cam = world.spawn((MainCamera, Transform::from_xyz(0.0, 0.0, 999.0))).id();

    run_system_once(&mut world, sync_main_camera);

    let tf = world.get::<Transform>(cam).copied().unwrap_or_default();
    assert_eq!(tf.translation, Vec3::new(12.0, -7.0, 999.0));
}
