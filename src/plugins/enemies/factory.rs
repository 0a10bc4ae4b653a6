//! Turn a profile into a spawnable bundle.

use avian2d::prelude::*;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use super::components::{DamageNumbers, EnemyCore, EnemyPhase, anim};
use super::kinds::EnemyKind;
use crate::common::assets::GameAssets;
use crate::common::layers::Layer;
use crate::common::state::GameState;
use crate::plugins::animation::{Animation, AnimationStore, ClipLayout};
use crate::plugins::combat::{Health, Knockback};

#[derive(Bundle)]
pub struct EnemyBundle {
    pub name: Name,
    pub core: EnemyCore,
    pub health: Health,
    pub knockback: Knockback,
    pub damage_numbers: DamageNumbers,
    pub phase: EnemyPhase,
    pub animations: AnimationStore,
    pub sprite: Sprite,
    pub visibility: Visibility,
    pub transform: Transform,
    pub body: RigidBody,
    pub collider: Collider,
    pub layers: CollisionLayers,
    pub scope: DespawnOnExit<GameState>,
}

/// Enemies touch the world and the player. Dying ones touch nothing.
pub fn enemy_layers() -> CollisionLayers {
    CollisionLayers::new(Layer::Enemy, [Layer::World, Layer::Player])
}

#[inline]
pub fn non_interacting_enemy_layers() -> CollisionLayers {
    CollisionLayers::new(Layer::Enemy, [] as [Layer; 0])
}

/// Build the named clips for `kind`, starting on `spawn`.
///
/// Clips that fail to build are logged and left out; the enemy still works
/// with whatever remains.
pub fn build_animation_store(assets: &GameAssets, kind: EnemyKind) -> AnimationStore {
    let sheet = assets.image(kind.as_str());
    let clips = &kind.profile().clips;
    let named: [(&str, ClipLayout); 6] = [
        (anim::WALK_RIGHT, clips.walk_right),
        (anim::WALK_LEFT, clips.walk_left),
        (anim::ATTACK_RIGHT, clips.attack_right),
        (anim::ATTACK_LEFT, clips.attack_left),
        (anim::SPAWN, clips.spawn),
        (anim::DEATH, clips.death),
    ];

    let mut store = AnimationStore::new();
    for (name, layout) in named {
        let added = Animation::new(sheet, layout).and_then(|a| store.add(name, a));
        if let Err(err) = added {
            warn!("{} clip '{name}' skipped: {err}", kind.as_str());
        }
    }
    store.set_current(anim::SPAWN);
    store
}

pub fn enemy_bundle(assets: &GameAssets, kind: EnemyKind, position: Vec2) -> EnemyBundle {
    let profile = kind.profile();
    let image = assets
        .image(kind.as_str())
        .map(|sheet| sheet.image.clone())
        .unwrap_or_default();

    EnemyBundle {
        name: Name::new(format!("Enemy:{}", kind.as_str())),
        core: EnemyCore::from_profile(kind, profile),
        health: Health::new(profile.max_hp),
        knockback: Knockback::default(),
        damage_numbers: DamageNumbers::default(),
        phase: EnemyPhase::Spawning,
        animations: build_animation_store(assets, kind),
        sprite: Sprite { image, ..default() },
        visibility: Visibility::Hidden,
        transform: Transform::from_translation(position.extend(1.0)),
        body: RigidBody::Kinematic,
        collider: Collider::circle(profile.radius),
        layers: enemy_layers(),
        scope: DespawnOnExit(GameState::InGame),
    }
}
