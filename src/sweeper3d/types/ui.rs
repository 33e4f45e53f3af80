//! UI marker components for the menu, HUD and result banner.

use bevy::prelude::*;

/// Everything spawned for a board (blocks, HUD); despawned when the board goes away
#[derive(Component)]
pub struct BoardEntity;

/// Root node of the main menu
#[derive(Component)]
pub struct MenuRoot;

/// Menu line showing the selected difficulty
#[derive(Component)]
pub struct DifficultyText;

/// In-game status line
#[derive(Component)]
pub struct HudText;

/// Win / lose banner
#[derive(Component)]
pub struct ResultBanner;
