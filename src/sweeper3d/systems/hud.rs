//! In-game status line

use bevy::prelude::*;

use crate::sweeper3d::types::*;

/// Status text for `grid`: opened safe blocks, flowers found, rotten total
/// and, with hints on, the rot count around a hovered open block.
pub fn hud_line(grid: &Grid, show_hints: bool) -> String {
    let counts = grid.counts();
    let opened = grid.opened_counts();

    let mut line = format!(
        "{}  |  Opened {}/{}  |  Flowers {}/{}  |  Rotten {}",
        grid.difficulty().map_or("Custom", |d| d.name()),
        opened.safe(),
        counts.safe(),
        opened.flower,
        counts.flower,
        counts.rotten,
    );

    if show_hints {
        if let Some(index) = grid.hovered() {
            if grid.block(index).is_some_and(|b| b.is_open) {
                line.push_str(&format!("  |  Rot nearby: {}", grid.rotten_neighbors(index)));
            }
        }
    }

    line
}

/// Only runs while playing; the board is revealed after the page changes,
/// so the last line written keeps the counts the game ended with.
pub fn update_hud(
    grid: Res<Grid>,
    settings: Res<GameSettings>,
    mut hud_query: Query<&mut Text, With<HudText>>,
) {
    if !grid.is_changed() {
        return;
    }

    let line = hud_line(&grid, settings.show_hints);
    for mut text in hud_query.iter_mut() {
        **text = line.clone();
    }
}
