//! Weapons plugin: the player's melee sweep.
//!
//! A sweep hits every living enemy inside a half circle in front of the
//! player, nearest first, up to the level's pierce count. Hit enemies take
//! damage and are knocked away from the player.

use bevy::prelude::*;
use std::f32::consts::PI;

use crate::common::schedule::TickSet;
use crate::plugins::combat::{Health, Knockback, find_in_arc};
use crate::plugins::enemies::{DamageNumbers, EnemyCore, PendingDespawn, take_damage};
use crate::plugins::player::{Facing, Player};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepLevel {
    pub damage: f32,
    pub cooldown: f32,
    /// Multiplier on the base radius.
    pub area: f32,
    /// Targets per swing; 0 means no limit.
    pub pierce: u32,
    pub knockback: f32,
}

/// The wooden spoon, by level.
pub const SPOON_LEVELS: [SweepLevel; 3] = [
    SweepLevel { damage: 1.0, cooldown: 2.0, area: 1.0, pierce: 1000, knockback: 300.0 },
    SweepLevel { damage: 2.0, cooldown: 1.5, area: 1.1, pierce: 12, knockback: 25.0 },
    SweepLevel { damage: 5.0, cooldown: 0.65, area: 1.2, pierce: 15, knockback: 30.0 },
];

#[derive(Component, Debug, Clone)]
pub struct MeleeSweep {
    levels: &'static [SweepLevel],
    level: usize,
    cooldown_left: f32,
}

impl Default for MeleeSweep {
    fn default() -> Self {
        Self { levels: &SPOON_LEVELS, level: 0, cooldown_left: 0.0 }
    }
}

impl MeleeSweep {
    pub const BASE_RADIUS: f32 = 100.0;
    pub const ARC: f32 = PI;

    /// A weapon over `levels`, starting at the first. `None` for an empty table.
    pub fn new(levels: &'static [SweepLevel]) -> Option<Self> {
        if levels.is_empty() {
            return None;
        }
        Some(Self { levels, level: 0, cooldown_left: 0.0 })
    }

    /// 1-based level.
    pub fn level(&self) -> u32 {
        self.level as u32 + 1
    }

    pub fn stats(&self) -> SweepLevel {
        self.levels[self.level]
    }

    pub fn radius(&self) -> f32 {
        Self::BASE_RADIUS * self.stats().area
    }

    /// Move to the next level. False (and no change) at max level.
    pub fn level_up(&mut self) -> bool {
        if self.level + 1 >= self.levels.len() {
            return false;
        }
        self.level += 1;
        info!("melee sweep reached level {}", self.level());
        true
    }

    /// Count the cooldown down; true when a swing is due.
    pub fn tick(&mut self, dt: f32) -> bool {
        self.cooldown_left -= dt;
        if self.cooldown_left > 0.0 {
            return false;
        }
        self.cooldown_left = self.stats().cooldown;
        true
    }
}

/// Candidates inside the arc, nearest first, capped at `pierce` (0 = all).
pub fn select_targets<T>(
    center: Vec2,
    facing: Vec2,
    radius: f32,
    pierce: u32,
    candidates: impl IntoIterator<Item = (T, Vec2)>,
) -> Vec<T> {
    let mut hits = find_in_arc(
        center,
        radius,
        facing,
        MeleeSweep::ARC,
        candidates
            .into_iter()
            .map(|(id, pos)| ((id, center.distance_squared(pos)), pos)),
    );
    hits.sort_by(|a, b| a.1.total_cmp(&b.1));
    if pierce > 0 {
        hits.truncate(pierce as usize);
    }
    hits.into_iter().map(|(id, _)| id).collect()
}

pub fn plugin(app: &mut App) {
    app.add_systems(FixedUpdate, swing_melee_weapons.in_set(TickSet::Weapons));
}

pub fn swing_melee_weapons(
    time: Res<Time<Fixed>>,
    mut q_player: Query<(&Transform, &Facing, &mut MeleeSweep), (With<Player>, Without<EnemyCore>)>,
    mut q_enemies: Query<
        (Entity, &Transform, &mut Health, &mut Knockback, &mut DamageNumbers),
        (With<EnemyCore>, Without<Player>, Without<PendingDespawn>),
    >,
) {
    let Ok((player_tf, facing, mut weapon)) = q_player.single_mut() else {
        return;
    };
    if !weapon.tick(time.delta_secs()) {
        return;
    }

    let origin = player_tf.translation.truncate();
    let stats = weapon.stats();
    let living: Vec<(Entity, Vec2)> = q_enemies
        .iter()
        .filter(|(_, _, health, ..)| !health.is_depleted())
        .map(|(e, tf, ..)| (e, tf.translation.truncate()))
        .collect();
    let targets = select_targets(origin, facing.0, weapon.radius(), stats.pierce, living);

    for &e in &targets {
        let Ok((_, tf, mut health, mut knockback, mut numbers)) = q_enemies.get_mut(e) else {
            continue;
        };
        take_damage(&mut health, &mut numbers, stats.damage);
        knockback.apply(origin, tf.translation.truncate(), stats.knockback);
    }
    if !targets.is_empty() {
        debug!("melee sweep hit {} enemies", targets.len());
    }
}
