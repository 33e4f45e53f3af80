//! Type definitions for the Botanic Sweeper board game
//!
//! This module is organized into submodules:
//! - `block` - Block types, geometry and the block entity component
//! - `difficulty` - Difficulty levels and their board parameters
//! - `grid` - The board resource: generation, picking, reveal and outcome
//! - `page` - The page state machine (menu, playing, won, lost)
//! - `camera` - Camera marker and zoom state
//! - `settings` - Game settings, config loading and the board RNG
//! - `snapshot` - Serializable board view for the terminal front end
//! - `ui` - UI marker components

pub mod block;
pub mod camera;
pub mod difficulty;
pub mod grid;
pub mod page;
pub mod settings;
pub mod snapshot;
pub mod ui;

// Re-export all public types for convenient access
pub use block::*;
pub use camera::*;
pub use difficulty::*;
pub use grid::*;
pub use page::*;
pub use settings::*;
pub use snapshot::*;
pub use ui::*;
