//! Enemies plugin: the animation-driven melee state machine and lifecycle.
//!
//! ```text
//! FixedUpdate      update_enemies      advance clips, walk, attack the player
//!                  separate_enemies    push overlapping enemies apart
//! FixedPostUpdate  retire_dead_enemies hp gone + death clip done -> EnemyDefeated
//! PostUpdate       despawn_marked_enemies
//! ```
//!
//! Two-stage death: hp reaching zero only switches to the death clip. The
//! entity stays (and stays visible) until that clip has played, then it is
//! marked `PendingDespawn` and removed outside the fixed step.

pub mod components;
pub mod factory;
pub mod kinds;

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

pub use components::{
    DamageNumbers, DropTable, EnemyBody, EnemyCore, EnemyPhase, EnemyStep, PendingDespawn, anim,
    is_alive, take_damage,
};
pub use factory::{EnemyBundle, build_animation_store, enemy_bundle};
pub use kinds::{EnemyKind, EnemyProfile};

use crate::common::schedule::{SettleSet, TickSet};
use crate::common::state::GameState;
use crate::common::tunables::Tunables;
use crate::plugins::animation::AnimationStore;
use crate::plugins::combat::{Health, Knockback};
use crate::plugins::core::{RunClock, SpawnRng};
use crate::plugins::player::Player;

/// Written once per enemy, the tick it is retired.
#[derive(Message, Debug, Clone, Copy, PartialEq)]
pub struct EnemyDefeated {
    pub kind: EnemyKind,
    pub position: Vec2,
    /// Items rolled from the drop table; zero when the roll failed.
    pub drops: u32,
}

#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunStats {
    pub kills: u32,
    pub score: u32,
}

impl RunStats {
    pub const SCORE_PER_KILL: u32 = 10;

    pub fn record_kill(&mut self) {
        self.kills += 1;
        self.score += Self::SCORE_PER_KILL;
    }
}

/// Nudge for enemies stacked on the exact same point.
const COINCIDENT_NUDGE: Vec2 = Vec2::new(0.1, 0.0);

pub fn plugin(app: &mut App) {
    app.add_message::<EnemyDefeated>();
    app.init_resource::<RunStats>();

    app.add_systems(OnEnter(GameState::InGame), reset_run_stats);
    app.add_systems(
        FixedUpdate,
        (update_enemies, separate_enemies)
            .chain()
            .in_set(TickSet::Enemies),
    );
    app.add_systems(FixedPostUpdate, retire_dead_enemies.in_set(SettleSet::Retire));
    app.add_systems(
        PostUpdate,
        despawn_marked_enemies.run_if(in_state(GameState::InGame)),
    );
}

fn reset_run_stats(mut stats: ResMut<RunStats>) {
    *stats = RunStats::default();
}

/// One state machine tick per enemy, chasing the player.
pub fn update_enemies(
    time: Res<Time<Fixed>>,
    mut q_player: Query<(&Transform, &mut Health), (With<Player>, Without<EnemyCore>)>,
    mut q: Query<
        (
            &mut EnemyCore,
            &mut Transform,
            &Health,
            &mut Knockback,
            &mut AnimationStore,
            &mut DamageNumbers,
            &mut EnemyPhase,
            Option<&mut CollisionLayers>,
        ),
        (Without<Player>, Without<PendingDespawn>),
    >,
) {
    let Ok((player_tf, mut player_hp)) = q_player.single_mut() else {
        return;
    };
    let target = player_tf.translation.truncate();
    let dt = time.delta_secs();

    for (mut core, mut tf, health, mut knockback, mut animations, mut numbers, mut phase, layers) in
        &mut q
    {
        numbers.tick(dt);

        let mut position = tf.translation.truncate();
        let step = core.tick(
            EnemyBody {
                position: &mut position,
                health,
                knockback: &mut knockback,
                animations: &mut animations,
            },
            target,
            dt,
        );
        tf.translation.x = position.x;
        tf.translation.y = position.y;

        if let Some(damage) = step.hit {
            player_hp.damage(damage);
            debug!("{} hit the player for {damage}", core.kind.as_str());
        }

        if step.phase != *phase {
            if step.phase == EnemyPhase::Dying {
                if let Some(mut layers) = layers {
                    *layers = factory::non_interacting_enemy_layers();
                }
            }
            *phase = step.phase;
        }
    }
}

/// Moves for `a` and `b` that resolve their overlap, each taking half.
/// Enemies on the exact same point have no direction to split along, so
/// only `a` is nudged.
pub fn separation_push(a: Vec2, b: Vec2, min_distance: f32) -> Option<(Vec2, Vec2)> {
    let delta = a - b;
    let dist = delta.length();
    if dist >= min_distance {
        return None;
    }
    if dist == 0.0 {
        return Some((COINCIDENT_NUDGE, Vec2::ZERO));
    }
    let push = delta / dist * (min_distance - dist) * 0.5;
    Some((push, -push))
}

pub fn separate_enemies(
    tunables: Res<Tunables>,
    mut q: Query<&mut Transform, (With<EnemyCore>, Without<PendingDespawn>)>,
) {
    let radius = tunables.enemy_separation_radius;
    let mut pairs = q.iter_combinations_mut();
    while let Some([mut a, mut b]) = pairs.fetch_next() {
        let Some((push_a, push_b)) =
            separation_push(a.translation.truncate(), b.translation.truncate(), radius)
        else {
            continue;
        };
        a.translation += push_a.extend(0.0);
        b.translation += push_b.extend(0.0);
    }
}

/// Mark enemies whose death clip has played, roll their drops and report them.
pub fn retire_dead_enemies(
    mut commands: Commands,
    clock: Res<RunClock>,
    mut rng: ResMut<SpawnRng>,
    mut stats: ResMut<RunStats>,
    mut defeated: MessageWriter<EnemyDefeated>,
    q: Query<(Entity, &EnemyCore, &Health, &AnimationStore, &Transform), Without<PendingDespawn>>,
) {
    let minutes = clock.minutes();
    for (e, core, health, animations, tf) in &q {
        if is_alive(health, animations) {
            continue;
        }

        let drops = core.drops.roll(minutes, &mut rng.0);
        stats.record_kill();
        defeated.write(EnemyDefeated {
            kind: core.kind,
            position: tf.translation.truncate(),
            drops,
        });
        commands.entity(e).insert(PendingDespawn);
    }
}

/// Despawn enemies marked for removal.
///
/// Centralizing despawn in one system keeps structural changes predictable.
fn despawn_marked_enemies(mut commands: Commands, q: Query<Entity, With<PendingDespawn>>) {
    for e in &q {
        commands.entity(e).despawn();
    }
}
