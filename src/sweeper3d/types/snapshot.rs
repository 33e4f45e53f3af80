//! Serializable view of a board, used by the terminal front end.

use serde::{Deserialize, Serialize};

use super::block::BlockType;
use super::difficulty::Difficulty;
use super::grid::Grid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountsSnapshot {
    pub dirt: usize,
    pub flower: usize,
    pub rotten: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub difficulty: Difficulty,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub side: usize,
    pub counts: CountsSnapshot,
    /// One string per row, one glyph per block
    pub rows: Vec<String>,
}

impl BoardSnapshot {
    pub fn from_grid(grid: &Grid, difficulty: Difficulty, seed: Option<u64>) -> Self {
        let counts = grid.counts();
        let rows = grid
            .blocks()
            .chunks(grid.side())
            .map(|row| row.iter().map(|b| b.block_type.glyph()).collect())
            .collect();

        Self {
            difficulty,
            seed,
            side: grid.side(),
            counts: CountsSnapshot {
                dirt: counts.dirt,
                flower: counts.flower,
                rotten: counts.rotten,
            },
            rows,
        }
    }

    /// Block types of one row, decoded back from the glyphs.
    pub fn row_types(&self, row: usize) -> Option<Vec<BlockType>> {
        let glyphs = self.rows.get(row)?;
        glyphs
            .chars()
            .map(|c| BlockType::ALL.into_iter().find(|t| t.glyph() == c))
            .collect()
    }

    pub fn to_json(&self) -> Result<String, String> {
        serde_json::to_string_pretty(self).map_err(|e| format!("Failed to encode board: {}", e))
    }
}
