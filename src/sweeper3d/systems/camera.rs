//! Camera control systems
//!
//! Orbit around the board with A/D (or the arrow keys) and zoom the
//! orthographic view with W/S.

use bevy::prelude::*;

use crate::sweeper3d::types::*;

use super::setup::fit_projection;

/// System to handle camera rotation and keyboard zoom
pub fn rotate_camera(
    settings: Res<GameSettings>,
    keyboard: Res<ButtonInput<KeyCode>>,
    time: Res<Time>,
    grid: Option<Res<Grid>>,
    mut camera_query: Query<(&mut Transform, &mut Projection), With<MainCamera>>,
    mut zoom_state: ResMut<ZoomState>,
) {
    let mut angle = 0.0;
    if keyboard.any_pressed([KeyCode::KeyA, KeyCode::ArrowLeft]) {
        angle += settings.rotation_speed * time.delta_secs();
    }
    if keyboard.any_pressed([KeyCode::KeyD, KeyCode::ArrowRight]) {
        angle -= settings.rotation_speed * time.delta_secs();
    }

    let mut zoom = 0.0;
    if keyboard.any_pressed([KeyCode::KeyW, KeyCode::ArrowUp]) {
        zoom -= settings.zoom_speed * time.delta_secs();
    }
    if keyboard.any_pressed([KeyCode::KeyS, KeyCode::ArrowDown]) {
        zoom += settings.zoom_speed * time.delta_secs();
    }

    if zoom != 0.0 {
        zoom_state.level = (zoom_state.level + zoom).clamp(ZoomState::MIN, ZoomState::MAX);
    }

    let side = grid
        .as_ref()
        .map(|g| g.side())
        .unwrap_or_else(|| settings.difficulty.side());

    for (mut transform, mut projection) in camera_query.iter_mut() {
        if angle != 0.0 {
            let rotation = Quat::from_rotation_y(angle);
            transform.translation = rotation * transform.translation;
            *transform = transform.looking_at(Vec3::ZERO, Vec3::Y);
        }

        if zoom != 0.0 {
            fit_projection(&mut projection, zoom_state.viewport_height(side));
        }
    }
}
