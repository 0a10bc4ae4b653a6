//! Physics plugin: avian2d in a top-down world.
//!
//! Nothing falls, and lengths are scaled by `Tunables::pixels_per_meter` so
//! avian's internal tolerances match sprite-sized colliders. Gameplay moves
//! enemies and pickups through their `Transform` directly; avian only keeps
//! the bodies and colliders in sync.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::common::tunables::Tunables;

pub fn plugin(app: &mut App) {
    let ppm = app
        .world()
        .get_resource::<Tunables>()
        .map_or_else(|| Tunables::default().pixels_per_meter, |t| t.pixels_per_meter);
    app.add_plugins(PhysicsPlugins::default().with_length_unit(ppm));
    app.insert_resource(Gravity(Vec2::ZERO));
}
