//! Systems module for sweeper3d
//!
//! - `setup`: camera, lights and background
//! - `board`: grid generation and block entity lifecycle
//! - `picking`: mouse ray hover and click-to-open
//! - `visuals`: block transform / color sync
//! - `hud`: in-game status line
//! - `outcome`: win / lose detection and result pages
//! - `menu`: difficulty selection
//! - `camera`: orbit and zoom controls

mod board;
mod camera;
mod hud;
mod menu;
mod outcome;
mod picking;
mod setup;
mod visuals;

use bevy::prelude::*;

use crate::sweeper3d::types::Page;

pub use board::{despawn_board, spawn_board};
pub use camera::rotate_camera;
pub use hud::{hud_line, update_hud};
pub use menu::{despawn_menu, handle_menu_input, setup_menu, update_difficulty_text};
pub use outcome::{
    despawn_result_banner, evaluate_outcome, handle_playing_input, handle_result_input,
    reveal_board, spawn_result_banner,
};
pub use picking::{open_hovered_block, update_hovered_block};
pub use setup::{fit_projection, setup};
pub use visuals::sync_block_visuals;

/// Run condition: the board is on screen
pub fn board_visible(page: Res<State<Page>>) -> bool {
    page.get().shows_board()
}
