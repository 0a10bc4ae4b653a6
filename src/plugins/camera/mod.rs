//! Camera plugins.
//!
//! The visible play area exists twice:
//! - `CameraView` is gameplay state. It follows the player with exponential
//!   smoothing and is what "in view" means for spawning. Headless apps have it.
//! - `MainCamera` is the render camera. It only copies the view center.
//!
//! ```text
//! FixedUpdate (TickSet::Move): follow_player_view  -> CameraView
//! PostUpdate (render only):    sync_main_camera    CameraView -> Transform
//! ```

use bevy::camera::ScalingMode;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::schedule::TickSet;
use crate::common::state::GameState;
use crate::common::tunables::Tunables;
use crate::plugins::player::Player;

#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct CameraView {
    pub center: Vec2,
    pub size: Vec2,
}

impl CameraView {
    pub fn new(center: Vec2, size: Vec2) -> Self {
        Self { center, size }
    }

    /// Viewport bounds in world space.
    pub fn rect(&self) -> Rect {
        Rect::from_center_size(self.center, self.size)
    }

    /// Move toward `target`; `responsiveness` is the inverse time constant.
    pub fn follow(&mut self, target: Vec2, responsiveness: f32, dt: f32) {
        let alpha = 1.0 - (-responsiveness * dt).exp();
        self.center += (target - self.center) * alpha;
    }
}

#[derive(Component)]
pub struct MainCamera;

/// Gameplay half: the logical view. Safe for headless apps.
pub fn view_plugin(app: &mut App) {
    let size = app.world().resource::<Tunables>().view_size;
    app.insert_resource(CameraView::new(Vec2::ZERO, size))
        .add_systems(OnEnter(GameState::InGame), reset_view)
        .add_systems(FixedUpdate, follow_player_view.in_set(TickSet::Move));
}

/// Render half: needs DefaultPlugins.
pub fn plugin(app: &mut App) {
    app.add_systems(OnEnter(GameState::InGame), spawn_camera)
        .add_systems(
            PostUpdate,
            sync_main_camera
                .before(TransformSystems::Propagate)
                .run_if(in_state(GameState::InGame)),
        );
}

fn reset_view(tunables: Res<Tunables>, mut view: ResMut<CameraView>) {
    *view = CameraView::new(Vec2::ZERO, tunables.view_size);
}

fn follow_player_view(
    time: Res<Time<Fixed>>,
    tunables: Res<Tunables>,
    mut view: ResMut<CameraView>,
    q_player: Query<&Transform, With<Player>>,
) {
    let Ok(player) = q_player.single() else {
        return;
    };
    view.follow(
        player.translation.truncate(),
        tunables.camera_responsiveness,
        time.delta_secs(),
    );
}

fn spawn_camera(mut commands: Commands, tunables: Res<Tunables>) {
    commands.spawn((
        Name::new("MainCamera"),
        Camera2d,
        MainCamera,
        Projection::Orthographic(OrthographicProjection {
            scaling_mode: ScalingMode::AutoMin {
                min_width: tunables.view_size.x,
                min_height: tunables.view_size.y,
            },
            ..OrthographicProjection::default_2d()
        }),
        Transform::from_xyz(0.0, 0.0, 999.0),
        DespawnOnExit(GameState::InGame),
    ));
}

fn sync_main_camera(view: Res<CameraView>, mut q_cam: Query<&mut Transform, With<MainCamera>>) {
    let Ok(mut tf) = q_cam.single_mut() else {
        return;
    };
    tf.translation.x = view.center.x;
    tf.translation.y = view.center.y;
}

#[cfg(test)]
mod tests;
