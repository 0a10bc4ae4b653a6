//! Spawner plugin: enemy factories, formations and wave pacing.
//!
//! - `registry`: named factories plus the spawn operations (single, circle,
//!   line, zig-zag, random in view).
//! - `patterns`: formation geometry.
//! - `pacing`: the difficulty ramp and batch planning.
//!
//! Once per tick `pace_enemy_spawns` checks the interval; when a batch is
//! due it plans it, lays out each entry, drops positions too close to the
//! player, clamps the rest into the arena and spawns.

pub mod pacing;
pub mod patterns;
pub mod registry;

use bevy::prelude::*;
use rand::Rng;
use std::f32::consts::TAU;

pub use pacing::{Formation, PacingSnapshot, SpawnPacing, plan_batch};
pub use registry::{EnemyFactory, EnemySpawner};

use crate::common::assets::GameAssets;
use crate::common::geometry::in_circle;
use crate::common::schedule::TickSet;
use crate::common::state::GameState;
use crate::common::tunables::{PacingTunables, Tunables};
use crate::plugins::camera::CameraView;
use crate::plugins::combat::find_in_circle;
use crate::plugins::core::{RunClock, SpawnRng};
use crate::plugins::player::Player;

/// Tries at finding a random in-view spot outside the exclusion radius.
const RANDOM_DRAWS: usize = 4;

pub fn plugin(app: &mut App) {
    app.insert_resource(EnemySpawner::with_default_roster())
        .init_resource::<SpawnPacing>()
        .add_systems(OnEnter(GameState::InGame), reset_pacing)
        .add_systems(FixedUpdate, pace_enemy_spawns.in_set(TickSet::Spawn));
}

fn reset_pacing(mut pacing: ResMut<SpawnPacing>) {
    *pacing = SpawnPacing::default();
}

/// Raw positions for one batch entry. Line and zig-zag formations start
/// `formation_distance` away in a random direction and face the player.
pub fn formation_positions(
    formation: Formation,
    player: Vec2,
    view: Rect,
    tunables: &PacingTunables,
    rng: &mut impl Rng,
) -> Vec<Vec2> {
    match formation {
        Formation::RandomInView => (0..RANDOM_DRAWS)
            .map(|_| patterns::random_in_view(view, rng))
            .find(|pos| !in_circle(player, tunables.spawn_exclusion_radius, *pos))
            .into_iter()
            .collect(),
        Formation::Circle => {
            patterns::circle_positions(player, tunables.circle_radius, tunables.circle_count)
        }
        Formation::ZigZag | Formation::Line => {
            let anchor =
                player + Vec2::from_angle(rng.gen_range(0.0..TAU)) * tunables.formation_distance;
            let forward = player - anchor;
            if formation == Formation::Line {
                patterns::line_positions(anchor, forward, tunables.line_count, tunables.line_spacing)
            } else {
                patterns::zigzag_positions(
                    anchor,
                    forward,
                    tunables.zigzag_count,
                    tunables.zigzag_spacing,
                    tunables.zigzag_amplitude,
                )
            }
        }
    }
}

/// Clamp into `arena`, then drop anything within `exclusion_radius` of the player.
pub fn admissible_positions(
    player: Vec2,
    exclusion_radius: f32,
    arena: Rect,
    positions: Vec<Vec2>,
) -> Vec<Vec2> {
    let clamped: Vec<Vec2> = positions
        .into_iter()
        .map(|p| p.clamp(arena.min, arena.max))
        .collect();
    let blocked = find_in_circle(player, exclusion_radius, clamped.iter().copied().enumerate());
    clamped
        .into_iter()
        .enumerate()
        .filter(|(i, _)| !blocked.contains(i))
        .map(|(_, p)| p)
        .collect()
}

#[allow(clippy::too_many_arguments)]
pub fn pace_enemy_spawns(
    mut commands: Commands,
    clock: Res<RunClock>,
    tunables: Res<Tunables>,
    assets: Res<GameAssets>,
    spawner: Res<EnemySpawner>,
    view: Res<CameraView>,
    mut pacing: ResMut<SpawnPacing>,
    mut rng: ResMut<SpawnRng>,
    q_player: Query<&Transform, With<Player>>,
) {
    let Ok(player_tf) = q_player.single() else {
        return;
    };
    let elapsed = clock.elapsed_secs();
    let snapshot = PacingSnapshot::at(elapsed, &tunables.pacing);
    if !pacing.poll(elapsed, &snapshot) {
        return;
    }

    let player = player_tf.translation.truncate();
    let arena = Rect::from_center_half_size(Vec2::ZERO, tunables.arena_half_extents);
    let types: Vec<&str> = spawner.type_names().collect();
    let plan = plan_batch(&snapshot, &types, &mut rng.0);

    let mut spawned = 0;
    for (name, formation) in plan {
        let raw = formation_positions(formation, player, view.rect(), &tunables.pacing, &mut rng.0);
        let positions = admissible_positions(
            player,
            tunables.pacing.spawn_exclusion_radius,
            arena,
            raw,
        );
        spawned += spawner.spawn_at(&mut commands, &assets, name, positions).len();
    }
    debug!(
        "batch at {elapsed:.1}s: {spawned} enemies (difficulty {:.2}, mix {:.2})",
        snapshot.difficulty, snapshot.mix_progress
    );
}
