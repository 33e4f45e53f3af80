pub mod systems;
pub mod types;

pub use systems::*;
pub use types::*;

use bevy::prelude::*;

/// Wires the pages, the board lifecycle and the per-frame loop into an app.
///
/// Expects `GameSettings` to be inserted before the plugin is added; the
/// board RNG is seeded from it.
pub struct SweeperPlugin;

impl Plugin for SweeperPlugin {
    fn build(&self, app: &mut App) {
        let seed = app
            .world()
            .get_resource::<GameSettings>()
            .and_then(|s| s.seed);

        app.init_resource::<GameSettings>()
            .init_resource::<ZoomState>()
            .insert_resource(BoardRng::new(seed))
            .init_state::<Page>()
            .add_message::<BlockOpened>()
            .add_systems(Startup, setup)
            // Menu
            .add_systems(OnEnter(Page::Menu), (despawn_board, setup_menu).chain())
            .add_systems(OnExit(Page::Menu), despawn_menu)
            .add_systems(
                Update,
                (handle_menu_input, update_difficulty_text)
                    .chain()
                    .run_if(in_state(Page::Menu)),
            )
            // Playing
            .add_systems(OnEnter(Page::Playing), spawn_board)
            .add_systems(
                Update,
                (
                    update_hovered_block,
                    open_hovered_block,
                    evaluate_outcome,
                    update_hud,
                    handle_playing_input,
                )
                    .chain()
                    .run_if(in_state(Page::Playing)),
            )
            .add_systems(
                Update,
                sync_block_visuals
                    .after(evaluate_outcome)
                    .run_if(resource_exists::<Grid>),
            )
            // Won / Lost
            .add_systems(OnEnter(Page::Won), (reveal_board, spawn_result_banner))
            .add_systems(OnEnter(Page::Lost), (reveal_board, spawn_result_banner))
            .add_systems(OnExit(Page::Won), despawn_result_banner)
            .add_systems(OnExit(Page::Lost), despawn_result_banner)
            .add_systems(
                Update,
                handle_result_input.run_if(in_state(Page::Won).or(in_state(Page::Lost))),
            )
            .add_systems(Update, rotate_camera.run_if(board_visible));
    }
}
