//! Per-entity set of named animations with one active entry.

use bevy::platform::collections::HashMap;
use bevy::prelude::*;

use super::clip::{Animation, AnimationError};

#[derive(Component, Debug, Clone, Default)]
pub struct AnimationStore {
    animations: HashMap<String, Animation>,
    current: Option<String>,
}

impl AnimationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `animation` under `name`, replacing any previous entry.
    pub fn add(&mut self, name: impl Into<String>, animation: Animation) -> Result<(), AnimationError> {
        let name = name.into();
        if name.is_empty() {
            return Err(AnimationError::EmptyName);
        }
        self.animations.insert(name, animation);
        Ok(())
    }

    pub fn remove(&mut self, name: &str) -> Option<Animation> {
        self.animations.remove(name)
    }

    /// Make `name` the active animation.
    ///
    /// Returns false and keeps the current one if `name` is unknown.
    /// Switching to a different name restarts the target from frame 0;
    /// re-selecting the active name leaves its progress alone.
    pub fn set_current(&mut self, name: &str) -> bool {
        let Some(animation) = self.animations.get_mut(name) else {
            return false;
        };
        if self.current.as_deref() != Some(name) {
            animation.reset();
            self.current = Some(name.to_owned());
        }
        true
    }

    /// Name of the active animation, if it still exists.
    pub fn current_name(&mut self) -> Option<&str> {
        self.heal();
        self.current.as_deref()
    }

    pub fn current(&mut self) -> Option<&Animation> {
        self.heal();
        let name = self.current.as_deref()?;
        self.animations.get(name)
    }

    pub fn current_mut(&mut self) -> Option<&mut Animation> {
        self.heal();
        let name = self.current.as_deref()?;
        self.animations.get_mut(name)
    }

    pub fn get(&self, name: &str) -> Option<&Animation> {
        self.animations.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.animations.contains_key(name)
    }

    pub fn is_empty(&self) -> bool {
        self.animations.is_empty()
    }

    /// Advance the active animation; false when nothing is active.
    pub fn advance(&mut self) -> bool {
        self.current_mut().is_some_and(Animation::advance)
    }

    pub fn current_frame_rect(&mut self) -> Option<Rect> {
        self.current().and_then(Animation::current_frame_rect)
    }

    /// True if the active animation is a finished one-shot, or if there is
    /// no active animation at all.
    pub fn is_current_finished(&mut self) -> bool {
        self.current().is_none_or(Animation::is_finished)
    }

    /// Drop a current name whose entry was removed behind our back.
    fn heal(&mut self) {
        let stale = self
            .current
            .as_deref()
            .is_some_and(|name| !self.animations.contains_key(name));
        if stale {
            warn!("current animation {:?} is no longer in the store", self.current);
            self.current = None;
        }
    }
}
