//! Tunable gameplay constants.

use bevy::prelude::*;

#[derive(Resource, Debug, Clone)]
pub struct Tunables {
    pub pixels_per_meter: f32,
    pub player_speed: f32,
    pub player_max_hp: f32,
    /// Radius in which pickups go straight into the inventory.
    pub pickup_radius: f32,
    /// Radius in which pickups start drifting toward the player.
    pub magnet_radius: f32,
    pub magnet_speed: f32,
    /// Size of the visible play area in world units.
    pub view_size: Vec2,
    pub camera_responsiveness: f32,
    pub arena_half_extents: Vec2,
    pub enemy_separation_radius: f32,
    pub pacing: PacingTunables,
}

impl Default for Tunables {
    fn default() -> Self {
        Self {
            pixels_per_meter: 20.0,
            player_speed: 360.0,
            player_max_hp: 100.0,
            pickup_radius: 12.0,
            magnet_radius: 50.0,
            magnet_speed: 420.0,
            view_size: Vec2::new(896.0, 504.0),
            camera_responsiveness: 5.0,
            arena_half_extents: Vec2::new(1600.0, 1600.0),
            enemy_separation_radius: 20.0,
            pacing: PacingTunables::default(),
        }
    }
}

/// Spawn pacing and formation geometry.
///
/// `difficulty = 1 + sqrt(elapsed) / 10` scales the interval down and the
/// batch size up; `mix_progress` ramps from 0 to 1 over `mix_ramp_secs`
/// starting at `mix_start_secs`.
#[derive(Debug, Clone)]
pub struct PacingTunables {
    pub base_interval_secs: f32,
    pub base_count_per_batch: u32,
    pub mix_start_secs: f32,
    pub mix_ramp_secs: f32,
    pub spawn_exclusion_radius: f32,
    /// How far from the player formations are anchored.
    pub formation_distance: f32,
    pub circle_radius: f32,
    pub circle_count: usize,
    pub zigzag_count: usize,
    pub zigzag_spacing: f32,
    pub zigzag_amplitude: f32,
    pub line_count: usize,
    pub line_spacing: f32,
}

impl Default for PacingTunables {
    fn default() -> Self {
        Self {
            base_interval_secs: 3.0,
            base_count_per_batch: 2,
            mix_start_secs: 120.0,
            mix_ramp_secs: 10.0,
            spawn_exclusion_radius: 48.0,
            formation_distance: 260.0,
            circle_radius: 150.0,
            circle_count: 6,
            zigzag_count: 5,
            zigzag_spacing: 50.0,
            zigzag_amplitude: 20.0,
            line_count: 5,
            line_spacing: 40.0,
        }
    }
}
