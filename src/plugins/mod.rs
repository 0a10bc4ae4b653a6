//! Feature plugins.

use bevy::prelude::*;

pub mod animation;
pub mod combat;
pub mod core;
pub mod enemies;
pub mod items;
pub mod physics;
pub mod player;
pub mod spawner;
pub mod weapons;
pub mod world;

// Gameplay view state lives here too; the camera entity itself is render-only.
pub mod camera;

/// Register gameplay plugins that work in headless tests.
pub fn register_gameplay(app: &mut App) {
    core::plugin(app);
    physics::plugin(app);
    world::plugin(app);
    player::plugin(app);
    camera::view_plugin(app);
    animation::plugin(app);
    enemies::plugin(app);
    spawner::plugin(app);
    weapons::plugin(app);
    items::plugin(app);
}

/// Register render-only plugins (requires DefaultPlugins / render infra).
pub fn register_render(app: &mut App) {
    camera::plugin(app);
}

/// Register all plugins (full app).
pub fn register_all(app: &mut App) {
    register_gameplay(app);
    register_render(app);
}
