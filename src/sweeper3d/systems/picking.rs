//! Mouse picking systems
//!
//! Casts a ray from the camera through the cursor, finds the block it hits
//! first and opens it on a left click.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::sweeper3d::types::*;

/// Track which block is under the mouse cursor.
pub fn update_hovered_block(
    windows: Query<&Window, With<PrimaryWindow>>,
    camera_query: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    mut grid: ResMut<Grid>,
) {
    let hovered = cursor_ray(&windows, &camera_query).and_then(|ray| grid.pick(ray));

    // Only write when it changes so visuals are not rebuilt every frame
    if grid.hovered() != hovered {
        grid.set_hovered(hovered);
    }
}

fn cursor_ray(
    windows: &Query<&Window, With<PrimaryWindow>>,
    camera_query: &Query<(&Camera, &GlobalTransform), With<MainCamera>>,
) -> Option<Ray3d> {
    let window = windows.single().ok()?;
    let cursor_position = window.cursor_position()?;
    let (camera, camera_transform) = camera_query.single().ok()?;

    camera
        .viewport_to_world(camera_transform, cursor_position)
        .ok()
}

/// Open the hovered block on left click.
pub fn open_hovered_block(
    mouse: Res<ButtonInput<MouseButton>>,
    mut grid: ResMut<Grid>,
    mut opened: MessageWriter<BlockOpened>,
) {
    if !mouse.just_pressed(MouseButton::Left) {
        return;
    }

    let Some(index) = grid.hovered() else {
        return;
    };

    match grid.open(index) {
        Ok(block_type) => {
            let (row, col) = grid.coords(index).unwrap_or_default();
            info!("Opened {} block at ({}, {})", block_type.name(), row, col);
            opened.write(BlockOpened { index, block_type });
        }
        Err(e) => debug!("Ignored click: {}", e),
    }
}
