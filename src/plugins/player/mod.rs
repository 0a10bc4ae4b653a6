//! Player plugin.
//!
//! Pipeline:
//! - Update: sample input, write PlayerInput resource
//! - FixedUpdate: apply velocity to kinematic rigid body, remember facing
//! - FixedPostUpdate: end the run once health is gone

use avian2d::prelude::*;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::geometry::DEFAULT_FACING;
use crate::common::schedule::{SettleSet, TickSet};
use crate::common::{layers::Layer, state::GameState, tunables::Tunables};
use crate::plugins::combat::Health;
use crate::plugins::weapons::MeleeSweep;

#[derive(Component)]
pub struct Player;

/// Last non-zero movement direction. Weapons swing this way.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Facing(pub Vec2);

impl Default for Facing {
    fn default() -> Self {
        Self(DEFAULT_FACING)
    }
}

#[derive(Resource, Default, Debug)]
pub struct PlayerInput {
    pub move_axis: Vec2,
}

pub fn plugin(app: &mut App) {
    app.insert_resource(PlayerInput::default())
        .add_systems(OnEnter(GameState::InGame), spawn)
        .add_systems(Update, gather_input)
        .add_systems(FixedUpdate, apply_movement.in_set(TickSet::Move))
        .add_systems(FixedPostUpdate, check_player_defeat.in_set(SettleSet::Outcome));
}

fn spawn(mut commands: Commands, tunables: Res<Tunables>) {
    let layers = CollisionLayers::new(Layer::Player, [Layer::World, Layer::Enemy]);

    commands.spawn((
        Name::new("Player"),
        Player,
        Health::new(tunables.player_max_hp),
        Facing::default(),
        MeleeSweep::default(),
        Sprite {
            color: Color::srgb(0.95, 0.85, 0.55),
            custom_size: Some(Vec2::splat(26.0)),
            ..default()
        },
        Transform::from_xyz(0.0, 0.0, 1.0),
        RigidBody::Kinematic,
        Collider::circle(13.0),
        layers,
        LinearVelocity::ZERO,
        DespawnOnExit(GameState::InGame),
    ));
}

/// Headless apps have no keyboard; the axis then stays at zero.
fn gather_input(keys: Option<Res<ButtonInput<KeyCode>>>, mut input: ResMut<PlayerInput>) {
    let Some(keys) = keys else {
        return;
    };
    let mut axis = Vec2::ZERO;

    if keys.pressed(KeyCode::KeyW) {
        axis.y += 1.0;
    }
    if keys.pressed(KeyCode::KeyS) {
        axis.y -= 1.0;
    }
    if keys.pressed(KeyCode::KeyA) {
        axis.x -= 1.0;
    }
    if keys.pressed(KeyCode::KeyD) {
        axis.x += 1.0;
    }

    input.move_axis = axis.normalize_or_zero();
}

fn apply_movement(
    tunables: Res<Tunables>,
    input: Res<PlayerInput>,
    mut q_player: Query<(&mut LinearVelocity, &mut Facing), With<Player>>,
) {
    let Ok((mut vel, mut facing)) = q_player.single_mut() else {
        return;
    };
    vel.0 = input.move_axis * tunables.player_speed;
    if input.move_axis != Vec2::ZERO {
        facing.0 = input.move_axis;
    }
}

fn check_player_defeat(
    q_player: Query<&Health, With<Player>>,
    mut next: ResMut<NextState<GameState>>,
) {
    let Ok(health) = q_player.single() else {
        return;
    };
    if health.is_depleted() {
        info!("player defeated");
        next.set(GameState::GameOver);
    }
}

#[cfg(test)]
mod tests;
