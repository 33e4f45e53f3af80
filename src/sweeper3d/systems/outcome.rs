//! Win / lose detection and the result pages

use bevy::prelude::*;

use crate::sweeper3d::types::*;

/// Check the board after each reveal and finish the game when decided.
///
/// The board stays as played until the result page opens; see `reveal_board`.
pub fn evaluate_outcome(
    mut commands: Commands,
    mut opened: MessageReader<BlockOpened>,
    mut grid: ResMut<Grid>,
    mut next_page: ResMut<NextState<Page>>,
) {
    // Drain every message even if the first one decides the game
    if opened.read().count() == 0 {
        return;
    }

    let Some(outcome) = grid.outcome() else {
        return;
    };

    let counts = grid.counts();
    let opened_counts = grid.opened_counts();
    let result = GameResult {
        outcome,
        flowers_found: opened_counts.flower,
        flowers_total: counts.flower,
        opened: opened_counts.safe(),
    };

    info!(
        "Game over ({:?}): {} blocks opened, {}/{} flowers",
        outcome, result.opened, result.flowers_found, result.flowers_total
    );

    grid.set_hovered(None);
    commands.insert_resource(result);
    next_page.set(Page::from_outcome(outcome));
}

/// Uncover the whole board once a result page is entered.
pub fn reveal_board(mut grid: ResMut<Grid>) {
    grid.reveal_all();
}

pub fn spawn_result_banner(mut commands: Commands, result: Option<Res<GameResult>>) {
    let Some(result) = result else {
        warn!("Result page entered without a finished game");
        return;
    };

    let accent = match result.outcome {
        GameOutcome::Won => Color::srgb(0.55, 0.95, 0.55),
        GameOutcome::Lost => Color::srgb(0.95, 0.45, 0.35),
    };

    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                position_type: PositionType::Absolute,
                bottom: Val::Px(32.0),
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::Center,
                row_gap: Val::Px(6.0),
                ..default()
            },
            ResultBanner,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new(result.headline()),
                TextFont {
                    font_size: 36.0,
                    ..default()
                },
                TextColor(accent),
            ));
            parent.spawn((
                Text::new(format!(
                    "Flowers found: {}/{}    Blocks opened: {}",
                    result.flowers_found, result.flowers_total, result.opened
                )),
                TextFont {
                    font_size: 20.0,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));
            parent.spawn((
                Text::new("R: play again    Enter / Esc: menu"),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(Color::srgb(0.85, 0.85, 0.85)),
            ));
        });
}

pub fn despawn_result_banner(
    mut commands: Commands,
    banner_query: Query<Entity, With<ResultBanner>>,
) {
    for entity in banner_query.iter() {
        commands.entity(entity).despawn();
    }
}

/// Keys on the result pages
pub fn handle_result_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut next_page: ResMut<NextState<Page>>,
) {
    if keyboard.just_pressed(KeyCode::KeyR) {
        next_page.set(Page::Playing);
    } else if keyboard.any_just_pressed([KeyCode::Enter, KeyCode::Escape]) {
        next_page.set(Page::Menu);
    }
}

/// Leave a running game for the menu.
pub fn handle_playing_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut next_page: ResMut<NextState<Page>>,
) {
    if keyboard.just_pressed(KeyCode::Escape) {
        info!("Game abandoned");
        next_page.set(Page::Menu);
    }
}
