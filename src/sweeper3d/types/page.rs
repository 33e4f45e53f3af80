//! Page state: which screen the game is on.

use bevy::prelude::*;

use super::grid::GameOutcome;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, States, Hash)]
pub enum Page {
    #[default]
    Menu,
    Playing,
    Won,
    Lost,
}

impl Page {
    pub fn from_outcome(outcome: GameOutcome) -> Self {
        match outcome {
            GameOutcome::Won => Page::Won,
            GameOutcome::Lost => Page::Lost,
        }
    }

    /// Pages that keep the board on screen
    pub fn shows_board(&self) -> bool {
        matches!(self, Page::Playing | Page::Won | Page::Lost)
    }
}

/// Summary of the last finished game, shown on the result banner
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameResult {
    pub outcome: GameOutcome,
    pub flowers_found: usize,
    pub flowers_total: usize,
    pub opened: usize,
}

impl GameResult {
    pub fn headline(&self) -> &'static str {
        match self.outcome {
            GameOutcome::Won => "The garden is clear!",
            GameOutcome::Lost => "You dug into rot.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_default_is_menu() {
        assert_eq!(Page::default(), Page::Menu);
    }

    #[test]
    fn test_page_from_outcome() {
        assert_eq!(Page::from_outcome(GameOutcome::Won), Page::Won);
        assert_eq!(Page::from_outcome(GameOutcome::Lost), Page::Lost);
        assert!(!Page::Menu.shows_board());
        assert!(Page::Lost.shows_board());
    }
}
