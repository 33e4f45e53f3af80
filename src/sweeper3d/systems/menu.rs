//! Main menu: pick a difficulty and start a game.

use bevy::prelude::*;

use crate::sweeper3d::types::*;

pub fn setup_menu(mut commands: Commands, settings: Res<GameSettings>) {
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::Center,
                justify_content: JustifyContent::Center,
                row_gap: Val::Px(12.0),
                ..default()
            },
            MenuRoot,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("Botanic Sweeper"),
                TextFont {
                    font_size: 48.0,
                    ..default()
                },
                TextColor(Color::srgb(0.95, 0.9, 0.75)),
            ));
            parent.spawn((
                Text::new(difficulty_line(settings.difficulty)),
                TextFont {
                    font_size: 24.0,
                    ..default()
                },
                TextColor(Color::WHITE),
                DifficultyText,
            ));
            parent.spawn((
                Text::new("1 / 2 / 3 or Tab: choose difficulty    Enter: start"),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(Color::srgb(0.85, 0.85, 0.85)),
            ));
        });
}

fn difficulty_line(difficulty: Difficulty) -> String {
    let side = difficulty.side();
    format!("Difficulty: {} ({}x{})", difficulty.name(), side, side)
}

pub fn handle_menu_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut settings: ResMut<GameSettings>,
    mut next_page: ResMut<NextState<Page>>,
) {
    let selected = if keyboard.just_pressed(KeyCode::Digit1) {
        Some(Difficulty::Easy)
    } else if keyboard.just_pressed(KeyCode::Digit2) {
        Some(Difficulty::Medium)
    } else if keyboard.just_pressed(KeyCode::Digit3) {
        Some(Difficulty::Hard)
    } else if keyboard.just_pressed(KeyCode::Tab) {
        Some(settings.difficulty.next())
    } else {
        None
    };

    if let Some(difficulty) = selected {
        if settings.difficulty != difficulty {
            settings.difficulty = difficulty;
        }
    }

    if keyboard.just_pressed(KeyCode::Enter) {
        next_page.set(Page::Playing);
    }
}

pub fn update_difficulty_text(
    settings: Res<GameSettings>,
    mut text_query: Query<&mut Text, With<DifficultyText>>,
) {
    if !settings.is_changed() {
        return;
    }

    for mut text in text_query.iter_mut() {
        **text = difficulty_line(settings.difficulty);
    }
}

pub fn despawn_menu(mut commands: Commands, menu_query: Query<Entity, With<MenuRoot>>) {
    for entity in menu_query.iter() {
        commands.entity(entity).despawn();
    }
}
