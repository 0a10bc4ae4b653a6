//! Enemy state and the per-tick state machine.
//!
//! Phases, in priority order each tick:
//! - hp gone: play `death`, still drift with knockback, nothing else.
//! - `spawn` playing: stand still, no attacks.
//! - otherwise: knockback, walk toward the target, attack when in range and
//!   off cooldown.
//!
//! Walk clips are reselected whenever the active clip finished or is already
//! a walk clip, so facing can flip mid-walk without cutting an attack short.
//!
//! An enemy is only removed once hp is gone AND its death clip has played.

use bevy::prelude::*;
use rand::Rng;

use super::kinds::{EnemyKind, EnemyProfile};
use crate::plugins::animation::AnimationStore;
use crate::plugins::combat::{Health, Knockback};

pub mod anim {
    pub const WALK_LEFT: &str = "walk_left";
    pub const WALK_RIGHT: &str = "walk_right";
    pub const ATTACK_LEFT: &str = "attack_left";
    pub const ATTACK_RIGHT: &str = "attack_right";
    pub const SPAWN: &str = "spawn";
    pub const DEATH: &str = "death";
}

/// Marker: remove in PostUpdate.
#[derive(Component, Debug, Clone, Copy)]
pub struct PendingDespawn;

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnemyPhase {
    #[default]
    Spawning,
    Walking,
    Attacking,
    Dying,
}

/// Drop roll parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DropTable {
    pub base_probability: f32,
    pub base_amount: u32,
    pub amount_per_minute: f32,
}

impl DropTable {
    /// Extra drop chance per minute survived.
    pub const PROBABILITY_PER_MINUTE: f32 = 0.001;

    pub fn probability(&self, minutes: f32) -> f32 {
        (self.base_probability + minutes * Self::PROBABILITY_PER_MINUTE).clamp(0.0, 1.0)
    }

    pub fn quantity(&self, minutes: f32) -> u32 {
        self.base_amount + (minutes * self.amount_per_minute).max(0.0).floor() as u32
    }

    /// One draw decides the whole batch: either `quantity` items or none.
    pub fn roll(&self, minutes: f32, rng: &mut impl Rng) -> u32 {
        if rng.r#gen::<f32>() < self.probability(minutes) {
            self.quantity(minutes)
        } else {
            0
        }
    }
}

/// Shared enemy data. Behaviour is the same for every kind; the numbers come
/// from the kind's profile.
#[derive(Component, Debug, Clone)]
pub struct EnemyCore {
    pub kind: EnemyKind,
    pub speed: f32,
    pub damage: f32,
    pub attack_cooldown: f32,
    pub attack_timer: f32,
    pub attack_range: f32,
    pub drops: DropTable,
}

impl EnemyCore {
    pub fn from_profile(kind: EnemyKind, profile: &EnemyProfile) -> Self {
        Self {
            kind,
            speed: profile.speed,
            damage: profile.damage,
            attack_cooldown: profile.attack_cooldown,
            attack_timer: profile.attack_delay,
            attack_range: profile.attack_range,
            drops: profile.drops,
        }
    }

    /// Run one simulation tick. `target` is the position being chased.
    pub fn tick(&mut self, body: EnemyBody<'_>, target: Vec2, dt: f32) -> EnemyStep {
        let EnemyBody { position, health, knockback, animations } = body;

        animations.advance();

        if health.is_depleted() {
            animations.set_current(anim::DEATH);
            *position += knockback.step();
            return EnemyStep { phase: EnemyPhase::Dying, hit: None };
        }

        let facing_right = (target - *position).x > 0.0;
        let reselect_walk = animations.is_current_finished()
            || matches!(animations.current_name(), Some(anim::WALK_LEFT | anim::WALK_RIGHT));
        if reselect_walk {
            animations.set_current(if facing_right { anim::WALK_RIGHT } else { anim::WALK_LEFT });
        }

        if animations.current_name() == Some(anim::SPAWN) {
            return EnemyStep { phase: EnemyPhase::Spawning, hit: None };
        }

        *position += knockback.step();
        *position = move_towards(*position, target, self.speed * dt);

        let mut hit = None;
        self.attack_timer -= dt;
        if position.distance(target) < self.attack_range && self.attack_timer <= 0.0 {
            hit = Some(self.damage);
            self.attack_timer = self.attack_cooldown;
            let attack = if (target - *position).x > 0.0 {
                anim::ATTACK_RIGHT
            } else {
                anim::ATTACK_LEFT
            };
            animations.set_current(attack);
        }

        let phase = match animations.current_name() {
            Some(anim::ATTACK_LEFT | anim::ATTACK_RIGHT) => EnemyPhase::Attacking,
            _ => EnemyPhase::Walking,
        };
        EnemyStep { phase, hit }
    }
}

/// Mutable view of the parts of an enemy the state machine touches.
pub struct EnemyBody<'a> {
    pub position: &'a mut Vec2,
    pub health: &'a Health,
    pub knockback: &'a mut Knockback,
    pub animations: &'a mut AnimationStore,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemyStep {
    pub phase: EnemyPhase,
    /// Damage dealt to the target this tick.
    pub hit: Option<f32>,
}

/// Step toward `target` by at most `max_step`, landing exactly on it when close.
pub fn move_towards(from: Vec2, target: Vec2, max_step: f32) -> Vec2 {
    let delta = target - from;
    let dist = delta.length();
    if dist <= max_step || dist == 0.0 {
        target
    } else {
        from + delta / dist * max_step
    }
}

/// True while the enemy should stay in the world: hp left, or a death clip
/// still playing. Enemies without a death clip go as soon as hp is gone.
pub fn is_alive(health: &Health, animations: &AnimationStore) -> bool {
    !health.is_depleted() || animations.get(anim::DEATH).is_some_and(|a| !a.is_finished())
}

// -----------------------------------------------------------------------------
// Damage numbers
// -----------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DamageNumber {
    pub amount: f32,
    /// Offset from the owner's position.
    pub offset: Vec2,
    pub velocity: Vec2,
    pub remaining: f32,
}

/// Floating hit indicators. Simulation only; nothing draws them yet.
#[derive(Component, Debug, Clone, Default)]
pub struct DamageNumbers(pub Vec<DamageNumber>);

impl DamageNumbers {
    pub const LIFESPAN: f32 = 0.8;
    pub const RISE_SPEED: f32 = 30.0;
    pub const START_OFFSET: Vec2 = Vec2::new(0.0, 16.0);

    pub fn push(&mut self, amount: f32) {
        self.0.push(DamageNumber {
            amount,
            offset: Self::START_OFFSET,
            velocity: Vec2::new(0.0, Self::RISE_SPEED),
            remaining: Self::LIFESPAN,
        });
    }

    /// Drift upward and drop expired entries.
    pub fn tick(&mut self, dt: f32) {
        for n in &mut self.0 {
            n.offset += n.velocity * dt;
            n.remaining -= dt;
        }
        self.0.retain(|n| n.remaining > 0.0);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Apply a hit: lose hp and show the number. Returns whether hp is left.
pub fn take_damage(health: &mut Health, numbers: &mut DamageNumbers, amount: f32) -> bool {
    numbers.push(amount);
    health.damage(amount)
}
