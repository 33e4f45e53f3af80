//! Game settings and config file loading
//!
//! Settings come from an optional RON file. Every field has a serde default
//! so a partial file (or none at all) still produces a usable config.

use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::difficulty::Difficulty;

/// Default config file, looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "botanic_sweeper.ron";

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorSetting {
    #[serde(default = "default_alpha")]
    pub a: f32,
    #[serde(default)]
    pub r: f32,
    #[serde(default)]
    pub g: f32,
    #[serde(default)]
    pub b: f32,
}

fn default_alpha() -> f32 {
    1.0
}

impl ColorSetting {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { a: 1.0, r, g, b }
    }

    pub fn to_color(&self) -> Color {
        Color::srgba(self.r, self.g, self.b, self.a)
    }
}

fn default_background_color() -> ColorSetting {
    ColorSetting::rgb(0.5, 0.5, 0.5)
}

fn default_closed_color() -> ColorSetting {
    ColorSetting::rgb(0.42, 0.30, 0.20)
}

fn default_highlight_amount() -> f32 {
    0.35
}

fn default_zoom_speed() -> f32 {
    0.5
}

fn default_rotation_speed() -> f32 {
    1.0
}

fn default_show_hints() -> bool {
    true
}

/// Resource holding the active game settings
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSettings {
    #[serde(default)]
    pub difficulty: Difficulty,

    /// Fixed RNG seed; `None` seeds from entropy
    #[serde(default)]
    pub seed: Option<u64>,

    #[serde(default = "default_background_color")]
    pub background_color: ColorSetting,

    /// Color shared by every closed block
    #[serde(default = "default_closed_color")]
    pub closed_color: ColorSetting,

    /// How far a hovered block is blended toward white
    #[serde(default = "default_highlight_amount")]
    pub highlight_amount: f32,

    #[serde(default = "default_zoom_speed")]
    pub zoom_speed: f32,

    #[serde(default = "default_rotation_speed")]
    pub rotation_speed: f32,

    /// Show the rotten-neighbour count for the hovered open block
    #[serde(default = "default_show_hints")]
    pub show_hints: bool,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::default(),
            seed: None,
            background_color: default_background_color(),
            closed_color: default_closed_color(),
            highlight_amount: default_highlight_amount(),
            zoom_speed: default_zoom_speed(),
            rotation_speed: default_rotation_speed(),
            show_hints: default_show_hints(),
        }
    }
}

impl GameSettings {
    pub fn from_ron_str(text: &str) -> Result<Self, String> {
        ron::from_str::<GameSettings>(text).map_err(|e| format!("Failed to parse settings: {}", e))
    }

    pub fn load_from_file(path: &Path) -> Result<Self, String> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read settings file {}: {}", path.display(), e))?;
        Self::from_ron_str(&contents)
    }

    /// Load settings, falling back to defaults when the file is missing or broken.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match Self::load_from_file(path) {
            Ok(settings) => {
                println!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                eprintln!("{}; using defaults", e);
                Self::default()
            }
        }
    }

    pub fn to_ron_string(&self) -> Result<String, String> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .map_err(|e| format!("Failed to serialize settings: {}", e))
    }
}

/// RNG used for board generation
#[derive(Resource)]
pub struct BoardRng(pub StdRng);

impl BoardRng {
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self(StdRng::seed_from_u64(seed)),
            None => Self(StdRng::from_entropy()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_default() {
        let settings = GameSettings::default();
        assert_eq!(settings.difficulty, Difficulty::Medium);
        assert_eq!(settings.seed, None);
        assert!(settings.show_hints);
    }

    #[test]
    fn test_settings_partial_file_uses_defaults() {
        let settings = GameSettings::from_ron_str("(difficulty: hard, seed: Some(7))").unwrap();
        assert_eq!(settings.difficulty, Difficulty::Hard);
        assert_eq!(settings.seed, Some(7));
        assert_eq!(settings.closed_color, default_closed_color());
        assert_eq!(settings.zoom_speed, 0.5);
    }

    #[test]
    fn test_settings_empty_struct_parses() {
        assert_eq!(GameSettings::from_ron_str("()").unwrap(), GameSettings::default());
    }

    #[test]
    fn test_settings_invalid_is_error() {
        assert!(GameSettings::from_ron_str("(difficulty: impossible)").is_err());
    }

    #[test]
    fn test_settings_ron_round_trip() {
        let settings = GameSettings {
            difficulty: Difficulty::Easy,
            seed: Some(99),
            ..default()
        };
        let text = settings.to_ron_string().unwrap();
        assert_eq!(GameSettings::from_ron_str(&text).unwrap(), settings);
    }

    #[test]
    fn test_color_setting_missing_alpha_is_opaque() {
        let color: ColorSetting = ron::from_str("(r: 0.1, g: 0.2, b: 0.3)").unwrap();
        assert_eq!(color.a, 1.0);
    }

    #[test]
    fn test_board_rng_seeded_is_repeatable() {
        use rand::Rng;
        let mut a = BoardRng::new(Some(5));
        let mut b = BoardRng::new(Some(5));
        assert_eq!(a.0.gen::<u64>(), b.0.gen::<u64>());
    }
}
