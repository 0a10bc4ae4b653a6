//! Fixed-step ordering shared by every gameplay plugin.
//!
//! One fixed step is one simulation tick. Plugins put their systems into
//! these sets instead of naming each other's systems.

use bevy::prelude::*;

/// `FixedUpdate` phases, run in declaration order.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TickSet {
    Move,
    Spawn,
    Enemies,
    Weapons,
    Pickups,
}

/// `FixedPostUpdate` phases, run in declaration order after physics.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettleSet {
    Retire,
    Drops,
    Outcome,
}
