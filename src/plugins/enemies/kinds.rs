//! Enemy roster: one profile per vegetable.
//!
//! All kinds share one state machine; what differs is data. Sheets use 32x32
//! frames, one clip per row.

use bevy::prelude::*;

use super::components::DropTable;
use crate::plugins::animation::ClipLayout;
use crate::plugins::items::ItemKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EnemyKind {
    Carrot,
    Potato,
    Onion,
    Leek,
    Radish,
    Cabbage,
}

impl EnemyKind {
    pub const ALL: [EnemyKind; 6] = [
        EnemyKind::Carrot,
        EnemyKind::Potato,
        EnemyKind::Onion,
        EnemyKind::Leek,
        EnemyKind::Radish,
        EnemyKind::Cabbage,
    ];

    /// Registry name; also the sprite sheet name.
    pub fn as_str(self) -> &'static str {
        match self {
            EnemyKind::Carrot => "carrot",
            EnemyKind::Potato => "potato",
            EnemyKind::Onion => "onion",
            EnemyKind::Leek => "leek",
            EnemyKind::Radish => "radish",
            EnemyKind::Cabbage => "cabbage",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == name)
    }

    /// The vegetable this enemy leaves behind.
    pub fn item(self) -> ItemKind {
        match self {
            EnemyKind::Carrot => ItemKind::Carrot,
            EnemyKind::Potato => ItemKind::Potato,
            EnemyKind::Onion => ItemKind::Onion,
            EnemyKind::Leek => ItemKind::Leek,
            EnemyKind::Radish => ItemKind::Radish,
            EnemyKind::Cabbage => ItemKind::Cabbage,
        }
    }

    pub fn profile(self) -> &'static EnemyProfile {
        match self {
            EnemyKind::Carrot => &CARROT,
            EnemyKind::Potato => &POTATO,
            EnemyKind::Onion => &ONION,
            EnemyKind::Leek => &LEEK,
            EnemyKind::Radish => &RADISH,
            EnemyKind::Cabbage => &CABBAGE,
        }
    }
}

/// Clip layouts for the six named animations of an enemy.
#[derive(Debug, Clone, Copy)]
pub struct EnemyClips {
    pub walk_right: ClipLayout,
    pub walk_left: ClipLayout,
    pub attack_right: ClipLayout,
    pub attack_left: ClipLayout,
    pub spawn: ClipLayout,
    pub death: ClipLayout,
}

#[derive(Debug, Clone, Copy)]
pub struct EnemyProfile {
    pub speed: f32,
    pub max_hp: f32,
    pub damage: f32,
    pub attack_cooldown: f32,
    /// Attack timer at spawn; zero lets the first hit land immediately.
    pub attack_delay: f32,
    pub attack_range: f32,
    pub radius: f32,
    pub drops: DropTable,
    pub clips: EnemyClips,
}

const FRAME: u32 = 32;

const fn row(row: u32, frame_count: u32, ticks_per_frame: u32, looping: bool) -> ClipLayout {
    ClipLayout {
        frame_size: UVec2::splat(FRAME),
        origin: UVec2::new(0, row * FRAME),
        frame_count,
        ticks_per_frame,
        looping,
    }
}

pub const CARROT: EnemyProfile = EnemyProfile {
    speed: 50.0,
    max_hp: 1.0,
    damage: 5.0,
    attack_cooldown: 1.0,
    attack_delay: 0.0,
    attack_range: 20.0,
    radius: 10.0,
    drops: DropTable { base_probability: 0.8, base_amount: 1, amount_per_minute: 0.1 },
    clips: EnemyClips {
        walk_right: row(1, 8, 6, true),
        walk_left: row(6, 8, 6, true),
        attack_right: row(4, 2, 6, false),
        attack_left: row(4, 2, 6, false),
        spawn: row(2, 6, 10, false),
        death: row(7, 6, 10, false),
    },
};

pub const POTATO: EnemyProfile = EnemyProfile {
    speed: 35.0,
    max_hp: 4.0,
    damage: 8.0,
    attack_cooldown: 1.4,
    attack_delay: 0.3,
    attack_range: 22.0,
    radius: 12.0,
    drops: DropTable { base_probability: 0.6, base_amount: 1, amount_per_minute: 0.1 },
    clips: EnemyClips {
        walk_right: row(1, 6, 6, true),
        walk_left: row(4, 6, 6, true),
        attack_right: row(3, 7, 7, false),
        attack_left: row(0, 7, 7, false),
        spawn: row(2, 8, 10, false),
        death: row(5, 7, 10, false),
    },
};

pub const ONION: EnemyProfile = EnemyProfile {
    speed: 45.0,
    max_hp: 3.0,
    damage: 6.0,
    attack_cooldown: 1.2,
    attack_delay: 0.2,
    attack_range: 20.0,
    radius: 11.0,
    drops: DropTable { base_probability: 0.5, base_amount: 1, amount_per_minute: 0.15 },
    clips: EnemyClips {
        walk_right: row(1, 8, 6, true),
        walk_left: row(0, 8, 6, true),
        attack_right: row(3, 8, 6, false),
        attack_left: row(3, 8, 6, false),
        spawn: row(2, 8, 10, false),
        death: row(5, 4, 10, false),
    },
};

pub const LEEK: EnemyProfile = EnemyProfile {
    speed: 60.0,
    max_hp: 2.0,
    damage: 7.0,
    attack_cooldown: 1.0,
    attack_delay: 0.0,
    attack_range: 26.0,
    radius: 9.0,
    drops: DropTable { base_probability: 0.5, base_amount: 1, amount_per_minute: 0.1 },
    clips: EnemyClips {
        walk_right: row(1, 7, 6, true),
        walk_left: row(0, 7, 6, true),
        attack_right: row(3, 7, 6, false),
        attack_left: row(4, 7, 6, false),
        spawn: row(2, 7, 10, false),
        death: row(5, 7, 10, false),
    },
};

pub const RADISH: EnemyProfile = EnemyProfile {
    speed: 70.0,
    max_hp: 2.0,
    damage: 4.0,
    attack_cooldown: 0.8,
    attack_delay: 0.0,
    attack_range: 18.0,
    radius: 9.0,
    drops: DropTable { base_probability: 0.4, base_amount: 1, amount_per_minute: 0.2 },
    clips: EnemyClips {
        walk_right: row(1, 8, 6, true),
        walk_left: row(0, 8, 6, true),
        attack_right: row(3, 8, 6, false),
        attack_left: row(4, 8, 6, false),
        spawn: row(2, 8, 10, false),
        death: row(10, 4, 10, false),
    },
};

pub const CABBAGE: EnemyProfile = EnemyProfile {
    speed: 30.0,
    max_hp: 8.0,
    damage: 12.0,
    attack_cooldown: 1.8,
    attack_delay: 0.5,
    attack_range: 24.0,
    radius: 14.0,
    drops: DropTable { base_probability: 0.7, base_amount: 2, amount_per_minute: 0.2 },
    clips: EnemyClips {
        walk_right: row(1, 8, 6, true),
        walk_left: row(0, 8, 6, true),
        attack_right: row(3, 8, 6, false),
        attack_left: row(4, 8, 6, false),
        spawn: row(2, 8, 10, false),
        death: row(6, 4, 10, false),
    },
};
