//! Keep block entities in sync with the grid.

use bevy::prelude::*;

use crate::sweeper3d::types::*;

/// Update each block's transform and color from its grid state.
pub fn sync_block_visuals(
    grid: Res<Grid>,
    settings: Res<GameSettings>,
    mut block_query: Query<(&BlockCell, &mut Transform, &MeshMaterial3d<StandardMaterial>)>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    if !grid.is_changed() {
        return;
    }

    let closed_color = settings.closed_color.to_color();
    let hovered = grid.hovered();

    for (cell, mut transform, material) in block_query.iter_mut() {
        let Some(block) = grid.block(cell.index) else {
            continue;
        };

        transform.translation = block.center();
        transform.scale = block.extent();

        let Some(mat) = materials.get_mut(material) else {
            continue;
        };

        let base = if block.is_open {
            block.color
        } else {
            closed_color
        };

        mat.base_color = if hovered == Some(cell.index) {
            lighten_color(base, settings.highlight_amount)
        } else {
            base
        };
    }
}
