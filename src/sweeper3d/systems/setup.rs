//! Scene setup system
//!
//! Spawns the pieces that live for the whole run: the orthographic camera,
//! the lights and the background color.

use bevy::camera::ScalingMode;
use bevy::prelude::*;

use crate::sweeper3d::types::*;

/// Startup system - camera, lights and clear color
pub fn setup(mut commands: Commands, settings: Res<GameSettings>, zoom_state: Res<ZoomState>) {
    commands.insert_resource(ClearColor(settings.background_color.to_color()));

    commands.spawn((
        Camera3d::default(),
        Projection::from(OrthographicProjection {
            scaling_mode: ScalingMode::FixedVertical {
                viewport_height: zoom_state.viewport_height(settings.difficulty.side()),
            },
            ..OrthographicProjection::default_3d()
        }),
        Transform::from_translation(CAMERA_START).looking_at(Vec3::ZERO, Vec3::Y),
        MainCamera,
    ));

    // Key light from above the camera, fill light from the opposite side
    commands.spawn((
        DirectionalLight {
            illuminance: 10000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(8.0, 20.0, 4.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
    commands.spawn((
        DirectionalLight {
            illuminance: 3000.0,
            ..default()
        },
        Transform::from_xyz(-10.0, 6.0, -8.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

/// Point an orthographic projection at a new viewport height.
pub fn fit_projection(projection: &mut Projection, viewport_height: f32) {
    if let Projection::Orthographic(ortho) = projection {
        ortho.scaling_mode = ScalingMode::FixedVertical { viewport_height };
    }
}
