use bevy::prelude::*;

/// Forced displacement after a hit.
///
/// Each step moves the owner by `DAMPING` of the remaining distance, so the
/// push decays geometrically. It stops once a step moves less than
/// `STOP_STEP`. A new knockback is ignored while one is still running.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq)]
pub struct Knockback {
    direction: Vec2,
    remaining: f32,
    active: bool,
}

impl Knockback {
    pub const DAMPING: f32 = 0.3;
    pub const STOP_STEP: f32 = 0.5;

    /// Push the owner at `owner` away from `from` by `distance` in total.
    pub fn apply(&mut self, from: Vec2, owner: Vec2, distance: f32) {
        if self.active {
            return;
        }
        self.direction = (owner - from).normalize_or_zero();
        self.remaining = distance;
        self.active = true;
    }

    /// Displacement for this tick; zero when idle.
    pub fn step(&mut self) -> Vec2 {
        if !self.active {
            return Vec2::ZERO;
        }
        let travel = self.remaining * Self::DAMPING;
        self.remaining -= travel;
        if travel < Self::STOP_STEP {
            self.active = false;
        }
        self.direction * travel
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn remaining(&self) -> f32 {
        self.remaining
    }

    pub fn direction(&self) -> Vec2 {
        self.direction
    }
}
