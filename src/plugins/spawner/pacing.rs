//! Time-based difficulty ramp.
//!
//! `difficulty = 1 + sqrt(elapsed) / 10` shortens the interval between
//! batches and grows their size. `mix_progress` decides how a batch is laid
//! out: scattered single spawns early, formations later, fully shuffled
//! composition at the end of the ramp.

use bevy::prelude::*;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::common::tunables::PacingTunables;

/// Below this, every enemy spawns alone at a random spot in view.
pub const FORMATION_THRESHOLD: f32 = 0.3;
/// Above this, batch composition is shuffled.
pub const SHUFFLE_THRESHOLD: f32 = 0.8;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PacingSnapshot {
    pub difficulty: f32,
    pub interval_secs: f32,
    pub batch_count: u32,
    pub mix_progress: f32,
}

impl PacingSnapshot {
    pub fn at(elapsed_secs: f32, tunables: &PacingTunables) -> Self {
        let difficulty = 1.0 + elapsed_secs.max(0.0).sqrt() / 10.0;
        let mix_progress = if tunables.mix_ramp_secs > 0.0 {
            ((elapsed_secs - tunables.mix_start_secs) / tunables.mix_ramp_secs).clamp(0.0, 1.0)
        } else if elapsed_secs >= tunables.mix_start_secs {
            1.0
        } else {
            0.0
        };
        Self {
            difficulty,
            interval_secs: tunables.base_interval_secs / difficulty,
            batch_count: (tunables.base_count_per_batch as f32 * difficulty).ceil() as u32,
            mix_progress,
        }
    }

    pub fn uses_formations(&self) -> bool {
        self.mix_progress >= FORMATION_THRESHOLD
    }

    pub fn shuffles(&self) -> bool {
        self.mix_progress > SHUFFLE_THRESHOLD
    }
}

/// When the last batch went out, in run seconds.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq)]
pub struct SpawnPacing {
    last_spawn_at: f32,
    formations_announced: bool,
}

impl SpawnPacing {
    /// True (and the timer restarts) once `interval_secs` has passed.
    pub fn poll(&mut self, elapsed_secs: f32, snapshot: &PacingSnapshot) -> bool {
        if elapsed_secs - self.last_spawn_at < snapshot.interval_secs {
            return false;
        }
        self.last_spawn_at = elapsed_secs;
        if snapshot.uses_formations() && !self.formations_announced {
            self.formations_announced = true;
            info!("spawning switches to formations at {elapsed_secs:.0}s");
        }
        true
    }

    pub fn last_spawn_at(&self) -> f32 {
        self.last_spawn_at
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Formation {
    RandomInView,
    Circle,
    ZigZag,
    Line,
}

impl Formation {
    pub const GROUPED: [Formation; 3] = [Formation::Circle, Formation::ZigZag, Formation::Line];
}

/// Pick `batch_count` enemy types and a formation for each.
pub fn plan_batch<'a>(
    snapshot: &PacingSnapshot,
    types: &[&'a str],
    rng: &mut impl Rng,
) -> Vec<(&'a str, Formation)> {
    if types.is_empty() {
        return Vec::new();
    }

    let mut pool: Vec<&'a str> = (0..snapshot.batch_count)
        .map(|_| types[rng.gen_range(0..types.len())])
        .collect();
    if snapshot.shuffles() {
        pool.shuffle(rng);
    }

    pool.into_iter()
        .map(|name| {
            let formation = if snapshot.uses_formations() {
                Formation::GROUPED[rng.gen_range(0..Formation::GROUPED.len())]
            } else {
                Formation::RandomInView
            };
            (name, formation)
        })
        .collect()
}
