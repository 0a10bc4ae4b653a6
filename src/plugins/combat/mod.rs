//! Combat primitives shared by players, enemies and weapons.
//!
//! - `Health`: hit points with saturating damage.
//! - `Knockback`: decaying forced displacement for any positioned entity.
//! - `targeting`: circle / arc queries over `(id, position)` candidates.
//!
//! Nothing here is scheduled on its own. Owners step their knockback and
//! apply damage from their own systems, so ordering stays explicit.

pub mod knockback;
pub mod targeting;

use bevy::prelude::*;

pub use knockback::Knockback;
pub use targeting::{find_in_arc, find_in_circle};

#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Health {
    pub hp: f32,
    pub max_hp: f32,
}

impl Health {
    pub fn new(max_hp: f32) -> Self {
        Self { hp: max_hp, max_hp }
    }

    /// Subtract `amount`, never going below zero. Returns whether any hp is left.
    pub fn damage(&mut self, amount: f32) -> bool {
        self.hp = (self.hp - amount).max(0.0);
        self.hp > 0.0
    }

    pub fn heal(&mut self, amount: f32) {
        self.hp = (self.hp + amount).min(self.max_hp);
    }

    #[inline]
    pub fn is_depleted(&self) -> bool {
        self.hp <= 0.0
    }
}
