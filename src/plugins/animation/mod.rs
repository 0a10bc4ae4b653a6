//! Sprite-frame animation.
//!
//! - `clip`: one tick-driven animation over a strip of sheet frames.
//! - `store`: the named set an entity owns, with "current animation" switching.
//!
//! Stores are advanced by whoever owns the gameplay decision (enemies advance
//! theirs at the top of their state machine tick). This plugin only copies
//! the resulting frame into the `Sprite` once per frame.

pub mod clip;
pub mod store;

use bevy::prelude::*;

pub use clip::{Animation, AnimationError, ClipLayout};
pub use store::AnimationStore;

use crate::common::state::GameState;

pub fn plugin(app: &mut App) {
    app.add_systems(
        PostUpdate,
        sync_sprite_frames.run_if(in_state(GameState::InGame)),
    );
}

/// Show the active frame, or hide the sprite when there is none to show.
pub fn sync_sprite_frames(mut q: Query<(&mut AnimationStore, &mut Sprite, &mut Visibility)>) {
    for (mut store, mut sprite, mut vis) in &mut q {
        match store.current_frame_rect() {
            Some(rect) => {
                if sprite.rect != Some(rect) {
                    sprite.rect = Some(rect);
                }
                *vis = Visibility::Inherited;
            }
            None => *vis = Visibility::Hidden,
        }
    }
}

#[cfg(test)]
mod tests;
