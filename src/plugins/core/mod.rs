//! Core plugin: shared resources, the simulation clock and tick ordering.

use bevy::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::common::assets::GameAssets;
use crate::common::schedule::{SettleSet, TickSet};
use crate::common::state::GameState;
use crate::common::tunables::Tunables;

/// Simulation ticks per second.
pub const TICK_HZ: f64 = 60.0;

/// Seconds of simulated play in the current run.
///
/// Advanced once per fixed step, so it stops with the simulation and never
/// reads the wall clock.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq)]
pub struct RunClock {
    elapsed: f32,
}

impl RunClock {
    pub fn advance(&mut self, dt: f32) {
        self.elapsed += dt;
    }

    pub fn elapsed_secs(&self) -> f32 {
        self.elapsed
    }

    pub fn minutes(&self) -> f32 {
        self.elapsed / 60.0
    }
}

/// RNG for spawn composition, placement and drop rolls.
#[derive(Resource, Debug, Deref, DerefMut)]
pub struct SpawnRng(pub StdRng);

impl SpawnRng {
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl Default for SpawnRng {
    fn default() -> Self {
        Self(StdRng::from_entropy())
    }
}

pub fn plugin(app: &mut App) {
    app.insert_resource(Tunables::default());
    app.insert_resource(ClearColor(Color::srgb(0.09, 0.11, 0.07)));
    app.insert_resource(Time::<Fixed>::from_hz(TICK_HZ));
    app.insert_resource(GameAssets::builtin());
    app.init_resource::<RunClock>();
    app.init_resource::<SpawnRng>();

    app.configure_sets(
        FixedUpdate,
        (
            TickSet::Move,
            TickSet::Spawn,
            TickSet::Enemies,
            TickSet::Weapons,
            TickSet::Pickups,
        )
            .chain()
            .run_if(in_state(GameState::InGame)),
    );
    app.configure_sets(
        FixedPostUpdate,
        (SettleSet::Retire, SettleSet::Drops, SettleSet::Outcome)
            .chain()
            .run_if(in_state(GameState::InGame)),
    );

    app.add_systems(OnEnter(GameState::InGame), reset_run_clock);
    app.add_systems(
        FixedPreUpdate,
        advance_run_clock.run_if(in_state(GameState::InGame)),
    );
}

fn reset_run_clock(mut clock: ResMut<RunClock>) {
    *clock = RunClock::default();
}

fn advance_run_clock(time: Res<Time<Fixed>>, mut clock: ResMut<RunClock>) {
    clock.advance(time.delta_secs());
}
