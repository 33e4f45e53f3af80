//! Difficulty levels and the board parameters they map to.

use serde::{Deserialize, Serialize};

/// Board size and block-type distribution for one difficulty
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DifficultyConfig {
    /// Blocks along one edge of the square board
    pub side: usize,
    /// Chance that a cell rolls a flower
    pub flower_chance: f32,
    /// Upper bound on flowers per board
    pub max_flowers: usize,
    /// Chance that a cell rolls a rotten block
    pub rotten_chance: f32,
    /// Upper bound on rotten blocks per board
    pub max_rotten: usize,
}

impl DifficultyConfig {
    pub fn cell_count(&self) -> usize {
        self.side * self.side
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn config(&self) -> DifficultyConfig {
        match self {
            Difficulty::Easy => DifficultyConfig {
                side: 6,
                flower_chance: 0.25,
                max_flowers: 9,
                rotten_chance: 0.10,
                max_rotten: 4,
            },
            Difficulty::Medium => DifficultyConfig {
                side: 10,
                flower_chance: 0.20,
                max_flowers: 20,
                rotten_chance: 0.15,
                max_rotten: 15,
            },
            Difficulty::Hard => DifficultyConfig {
                side: 14,
                flower_chance: 0.15,
                max_flowers: 29,
                rotten_chance: 0.20,
                max_rotten: 39,
            },
        }
    }

    pub fn side(&self) -> usize {
        self.config().side
    }

    pub fn name(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    pub fn parse(s: &str) -> Option<Difficulty> {
        match s.trim().to_lowercase().as_str() {
            "easy" | "e" | "1" => Some(Difficulty::Easy),
            "medium" | "m" | "2" => Some(Difficulty::Medium),
            "hard" | "h" | "3" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    /// Next difficulty in menu order, wrapping around.
    pub fn next(&self) -> Difficulty {
        match self {
            Difficulty::Easy => Difficulty::Medium,
            Difficulty::Medium => Difficulty::Hard,
            Difficulty::Hard => Difficulty::Easy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_default() {
        assert_eq!(Difficulty::default(), Difficulty::Medium);
    }

    #[test]
    fn test_difficulty_side_grows() {
        assert!(Difficulty::Easy.side() < Difficulty::Medium.side());
        assert!(Difficulty::Medium.side() < Difficulty::Hard.side());
    }

    #[test]
    fn test_difficulty_caps_fit_board() {
        for difficulty in Difficulty::ALL {
            let cfg = difficulty.config();
            assert!(cfg.max_flowers + cfg.max_rotten < cfg.cell_count());
            assert!(cfg.flower_chance + cfg.rotten_chance < 1.0);
        }
    }

    #[test]
    fn test_difficulty_next_cycles() {
        let mut d = Difficulty::Easy;
        for _ in 0..3 {
            d = d.next();
        }
        assert_eq!(d, Difficulty::Easy);
    }

    #[test]
    fn test_difficulty_parse() {
        assert_eq!(Difficulty::parse("easy"), Some(Difficulty::Easy));
        assert_eq!(Difficulty::parse("HARD"), Some(Difficulty::Hard));
        assert_eq!(Difficulty::parse("2"), Some(Difficulty::Medium));
        assert_eq!(Difficulty::parse("nightmare"), None);
    }
}
