//! Board lifecycle: build the grid and its cube entities when a game
//! starts, tear both down when returning to the menu.

use bevy::prelude::*;

use crate::sweeper3d::types::*;

use super::hud::hud_line;
use super::setup::fit_projection;

/// Generate a new grid for the selected difficulty and spawn one cube per block.
#[allow(clippy::too_many_arguments)]
pub fn spawn_board(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    settings: Res<GameSettings>,
    zoom_state: Res<ZoomState>,
    mut rng: ResMut<BoardRng>,
    board_query: Query<Entity, With<BoardEntity>>,
    mut camera_query: Query<&mut Projection, With<MainCamera>>,
) {
    for entity in board_query.iter() {
        commands.entity(entity).despawn();
    }

    let grid = Grid::generate(settings.difficulty, &mut rng.0);
    let counts = grid.counts();
    info!(
        "Starting {} game: {}x{} board, {} flowers, {} rotten",
        settings.difficulty.name(),
        grid.side(),
        grid.side(),
        counts.flower,
        counts.rotten
    );

    // Unit cube scaled per block so opening only touches the transform
    let cube = meshes.add(Cuboid::new(1.0, 1.0, 1.0));
    let closed_color = settings.closed_color.to_color();

    for (index, block) in grid.blocks().iter().enumerate() {
        let material = materials.add(StandardMaterial {
            base_color: closed_color,
            perceptual_roughness: 0.9,
            ..default()
        });

        commands.spawn((
            Mesh3d(cube.clone()),
            MeshMaterial3d(material),
            Transform::from_translation(block.center()).with_scale(block.extent()),
            BlockCell { index },
            BoardEntity,
        ));
    }

    for mut projection in camera_query.iter_mut() {
        fit_projection(&mut projection, zoom_state.viewport_height(grid.side()));
    }

    commands.spawn((
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(12.0),
            left: Val::Px(12.0),
            ..default()
        },
        Text::new(hud_line(&grid, false)),
        TextFont {
            font_size: 20.0,
            ..default()
        },
        TextColor(Color::WHITE),
        HudText,
        BoardEntity,
    ));

    commands.insert_resource(grid);
    commands.remove_resource::<GameResult>();
}

/// Drop the board entities and the grid itself.
pub fn despawn_board(mut commands: Commands, board_query: Query<Entity, With<BoardEntity>>) {
    for entity in board_query.iter() {
        commands.entity(entity).despawn();
    }
    commands.remove_resource::<Grid>();
    commands.remove_resource::<GameResult>();
}
