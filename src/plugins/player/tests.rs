use avian2d::prelude::*;
use bevy::prelude::*;

use super::*;
use crate::common::test_utils::run_system_once;

#[test]
fn spawn_creates_player() {
    let mut world = World::new();
    world.insert_resource(Tunables { player_max_hp: 40.0, ..default() });
    run_system_once(&mut world, spawn);

    let mut q = world.query_filtered::<(&Health, &Facing, &MeleeSweep), With<Player>>();
    let (hp, facing, weapon) = q.single(&world).expect("one player");
    assert_eq!(hp.hp, 40.0);
    assert_eq!(facing.0, Vec2::Y);
    assert_eq!(weapon.level(), 1);
}

#[test]
fn apply_movement_sets_velocity_and_facing() {
    let mut world = World::new();
    world.insert_resource(Tunables { player_speed: 100.0, ..default() });
    world.insert_resource(PlayerInput { move_axis: Vec2::new(1.0, 0.0) });
    world.spawn((Player, LinearVelocity::ZERO, Facing::default()));

    run_system_once(&mut world, apply_movement);

    let (v, facing) = world
        .query::<(&LinearVelocity, &Facing)>()
        .single(&world)
        .expect("one player");
    assert_eq!(v.0, Vec2::new(100.0, 0.0));
    assert_eq!(facing.0, Vec2::X);
}

#[test]
fn standing_still_keeps_last_facing() {
    let mut world = World::new();
    world.insert_resource(Tunables::default());
    world.insert_resource(PlayerInput::default());
    world.spawn((Player, LinearVelocity::ZERO, Facing(Vec2::NEG_X)));

    run_system_once(&mut world, apply_movement);

    let facing = world.query::<&Facing>().single(&world).expect("one player");
    assert_eq!(facing.0, Vec2::NEG_X);
}

#[test]
fn depleted_health_ends_the_run() {
    let mut world = World::new();
    world.init_resource::<NextState<GameState>>();
    let mut hp = Health::new(10.0);
    hp.damage(10.0);
    world.spawn((Player, hp));

    run_system_once(&mut world, check_player_defeat);

    assert!(matches!(
        *world.resource::<NextState<GameState>>(),
        NextState::Pending(GameState::GameOver)
    ));
}

#[test]
fn healthy_player_keeps_playing() {
    let mut world = World::new();
    world.init_resource::<NextState<GameState>>();
    world.spawn((Player, Health::new(10.0)));

    run_system_once(&mut world, check_player_defeat);

    assert!(matches!(
        *world.resource::<NextState<GameState>>(),
        NextState::Unchanged
    ));
}
