//! Items plugin: drops from defeated enemies and their collection.
//!
//! Defeated enemies leave `Pickup`s behind. Pickups near the player drift
//! toward them and end up in the `Inventory`.

use bevy::ecs::message::MessageReader;
use bevy::platform::collections::HashMap;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::assets::GameAssets;
use crate::common::geometry::in_circle;
use crate::common::schedule::{SettleSet, TickSet};
use crate::common::state::GameState;
use crate::common::tunables::Tunables;
use crate::plugins::combat::find_in_circle;
use crate::plugins::enemies::EnemyDefeated;
use crate::plugins::enemies::components::move_towards;
use crate::plugins::player::Player;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ItemKind {
    Carrot,
    Potato,
    Onion,
    Leek,
    Radish,
    Cabbage,
}

impl ItemKind {
    pub fn icon_name(self) -> &'static str {
        match self {
            ItemKind::Carrot => "carrot_icon",
            ItemKind::Potato => "potato_icon",
            ItemKind::Onion => "onion_icon",
            ItemKind::Leek => "leek_icon",
            ItemKind::Radish => "radish_icon",
            ItemKind::Cabbage => "cabbage_icon",
        }
    }
}

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pickup {
    pub item: ItemKind,
}

/// What the player has gathered this run.
#[derive(Resource, Debug, Default, Clone)]
pub struct Inventory {
    counts: HashMap<ItemKind, u32>,
}

impl Inventory {
    pub fn add(&mut self, item: ItemKind, amount: u32) {
        *self.counts.entry(item).or_insert(0) += amount;
    }

    pub fn count(&self, item: ItemKind) -> u32 {
        self.counts.get(&item).copied().unwrap_or(0)
    }

    pub fn total(&self) -> u32 {
        self.counts.values().sum()
    }
}

/// Spacing between items of one drop so they do not stack.
const DROP_SPREAD: f32 = 6.0;

pub fn plugin(app: &mut App) {
    app.init_resource::<Inventory>();
    app.add_systems(OnEnter(GameState::InGame), reset_inventory);
    app.add_systems(FixedUpdate, attract_and_collect_pickups.in_set(TickSet::Pickups));
    app.add_systems(FixedPostUpdate, spawn_drops.in_set(SettleSet::Drops));
}

fn reset_inventory(mut inventory: ResMut<Inventory>) {
    *inventory = Inventory::default();
}

/// Offsets for `count` items around a drop point. The first one sits on it.
pub fn drop_offsets(count: u32) -> impl Iterator<Item = Vec2> {
    (0..count).map(move |i| {
        if i == 0 {
            return Vec2::ZERO;
        }
        let angle = i as f32 * std::f32::consts::TAU / (count - 1) as f32;
        Vec2::from_angle(angle) * DROP_SPREAD
    })
}

pub fn spawn_drops(
    mut commands: Commands,
    assets: Res<GameAssets>,
    mut defeated: MessageReader<EnemyDefeated>,
) {
    for msg in defeated.read() {
        if msg.drops == 0 {
            continue;
        }
        let item = msg.kind.item();
        let image = assets
            .icon(item.icon_name())
            .map(|sheet| sheet.image.clone())
            .unwrap_or_default();

        for offset in drop_offsets(msg.drops) {
            commands.spawn((
                Name::new(format!("Pickup:{}", item.icon_name())),
                Pickup { item },
                Sprite { image: image.clone(), ..default() },
                Transform::from_translation((msg.position + offset).extend(0.5)),
                DespawnOnExit(GameState::InGame),
            ));
        }
        debug!("dropped {} x{}", item.icon_name(), msg.drops);
    }
}

pub fn attract_and_collect_pickups(
    mut commands: Commands,
    time: Res<Time<Fixed>>,
    tunables: Res<Tunables>,
    mut inventory: ResMut<Inventory>,
    q_player: Query<&Transform, (With<Player>, Without<Pickup>)>,
    mut q_pickups: Query<(Entity, &Pickup, &mut Transform), Without<Player>>,
) {
    let Ok(player_tf) = q_player.single() else {
        return;
    };
    let player = player_tf.translation.truncate();
    let step = tunables.magnet_speed * time.delta_secs();

    let nearby = find_in_circle(
        player,
        tunables.magnet_radius,
        q_pickups.iter().map(|(e, _, tf)| (e, tf.translation.truncate())),
    );

    for e in nearby {
        let Ok((e, pickup, mut tf)) = q_pickups.get_mut(e) else {
            continue;
        };
        let pos = tf.translation.truncate();
        if in_circle(player, tunables.pickup_radius, pos) {
            inventory.add(pickup.item, 1);
            commands.entity(e).despawn();
            continue;
        }
        let next = move_towards(pos, player, step);
        tf.translation.x = next.x;
        tf.translation.y = next.y;
    }
}
