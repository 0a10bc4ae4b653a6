//! Integration test harness.
//!
//! Keep integration tests headless:
//! - `MinimalPlugins` provides core ECS runtime.
//! - we then call `harvest_game::game::configure_headless` to install gameplay plugins.
//!
//! Fixed steps are driven by hand so tests do not depend on wall-clock time.

#![allow(dead_code)]

use std::time::Duration;

use bevy::asset::AssetPlugin;
use bevy::prelude::*;
use bevy::scene::ScenePlugin;
use bevy::state::app::StatesPlugin;

use harvest_game::plugins::core::TICK_HZ;

pub fn app_headless() -> App {
    let mut app = App::new();

    // Add AssetPlugin + ScenePlugin so SceneSpawner exists.
    app.add_plugins((
        MinimalPlugins,
        StatesPlugin,
        AssetPlugin::default(),
        ScenePlugin,
    ));

    harvest_game::game::configure_headless(&mut app);
    app
}

/// Headless app that has entered `InGame` (player, fence and field spawned).
pub fn app_in_game() -> App {
    let mut app = app_headless();
    app.update();
    app
}

/// One simulation step: the fixed schedules with a 1/60 s fixed delta.
pub fn fixed_tick(app: &mut App) {
    let world = app.world_mut();
    world
        .resource_mut::<Time<Fixed>>()
        .advance_by(Duration::from_secs_f64(1.0 / TICK_HZ));
    world.run_schedule(FixedPreUpdate);
    world.run_schedule(FixedUpdate);
    world.run_schedule(FixedPostUpdate);
}

pub fn fixed_ticks(app: &mut App, n: usize) {
    for _ in 0..n {
        fixed_tick(app);
    }
}
