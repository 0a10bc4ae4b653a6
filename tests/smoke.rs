mod common;

use bevy::prelude::*;
use harvest_game::common::state::GameState;
use harvest_game::plugins::combat::Health;
use harvest_game::plugins::core::RunClock;
use harvest_game::plugins::player::Player;

#[test]
fn boots_and_ticks() {
    let mut app = common::app_headless();

    for _ in 0..3 {
        app.update();
    }
}

#[test]
fn run_starts_in_game_with_a_healthy_player() {
    let mut app = common::app_in_game();

    assert_eq!(
        *app.world().resource::<State<GameState>>().get(),
        GameState::InGame
    );
    let hp = app
        .world_mut()
        .query_filtered::<&Health, With<Player>>()
        .single(app.world())
        .map(|h| h.hp)
        .unwrap_or_default();
    assert_eq!(hp, 100.0);
}

#[test]
fn fixed_steps_advance_the_run_clock() {
    let mut app = common::app_in_game();
    let before = app.world().resource::<RunClock>().elapsed_secs();

    common::fixed_ticks(&mut app, 60);

    let elapsed = app.world().resource::<RunClock>().elapsed_secs() - before;
    assert!((elapsed - 1.0).abs() < 1e-3, "elapsed {elapsed}");
}
