//! The board: generation, picking and reveal logic
//!
//! Blocks live in a flat row-major array of `side * side` entries; the
//! block at `(row, col)` sits at index `row * side + col`.

use bevy::math::bounding::RayCast3d;
use bevy::prelude::*;
use rand::Rng;

use super::block::{Block, BlockType};
use super::difficulty::{Difficulty, DifficultyConfig};

/// How many times a capped type is redrawn before the cell falls back to dirt
pub const MAX_TYPE_ATTEMPTS: usize = 8;

/// Result of a finished game
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GameOutcome {
    Won,
    Lost,
}

/// Per-type block totals
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BlockCounts {
    pub dirt: usize,
    pub flower: usize,
    pub rotten: usize,
}

impl BlockCounts {
    pub fn get(&self, block_type: BlockType) -> usize {
        match block_type {
            BlockType::Dirt => self.dirt,
            BlockType::Flower => self.flower,
            BlockType::Rotten => self.rotten,
        }
    }

    pub fn add(&mut self, block_type: BlockType) {
        match block_type {
            BlockType::Dirt => self.dirt += 1,
            BlockType::Flower => self.flower += 1,
            BlockType::Rotten => self.rotten += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.dirt + self.flower + self.rotten
    }

    /// Blocks that can be opened without losing
    pub fn safe(&self) -> usize {
        self.dirt + self.flower
    }
}

/// Message written whenever a block is revealed
#[derive(Message, Clone, Copy, Debug)]
pub struct BlockOpened {
    pub index: usize,
    pub block_type: BlockType,
}

/// The board for the current game
#[derive(Resource, Clone, Debug)]
pub struct Grid {
    /// Difficulty the board was generated for; `None` for hand-built boards
    difficulty: Option<Difficulty>,
    side: usize,
    blocks: Vec<Block>,
    hovered: Option<usize>,
}

impl Grid {
    /// Build a fresh board for `difficulty`.
    pub fn generate(difficulty: Difficulty, rng: &mut impl Rng) -> Self {
        let config = difficulty.config();
        let side = config.side;
        let mut counts = BlockCounts::default();
        let mut blocks = Vec::with_capacity(config.cell_count());

        for row in 0..side {
            for col in 0..side {
                let block_type = roll_block_type(&config, &counts, rng);
                counts.add(block_type);

                let shade = rng.gen_range(0.85..1.15);
                blocks.push(Block::new(block_type, row, col, side, shade));
            }
        }

        Self {
            difficulty: Some(difficulty),
            side,
            blocks,
            hovered: None,
        }
    }

    /// Build a board from an explicit row-major list of types.
    pub fn from_types(side: usize, types: &[BlockType]) -> Result<Self, String> {
        if side == 0 {
            return Err("Grid side must be at least 1".to_string());
        }
        if types.len() != side * side {
            return Err(format!(
                "Expected {} block types for a {}x{} grid, got {}",
                side * side,
                side,
                side,
                types.len()
            ));
        }

        let blocks = types
            .iter()
            .enumerate()
            .map(|(i, block_type)| Block::new(*block_type, i / side, i % side, side, 1.0))
            .collect();

        Ok(Self {
            difficulty: None,
            side,
            blocks,
            hovered: None,
        })
    }

    pub fn difficulty(&self) -> Option<Difficulty> {
        self.difficulty
    }

    pub fn side(&self) -> usize {
        self.side
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn block(&self, index: usize) -> Option<&Block> {
        self.blocks.get(index)
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn index(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.side && col < self.side).then_some(row * self.side + col)
    }

    pub fn coords(&self, index: usize) -> Option<(usize, usize)> {
        (index < self.blocks.len()).then_some((index / self.side, index % self.side))
    }

    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    /// Set the hovered block; out-of-range indices clear the hover.
    pub fn set_hovered(&mut self, index: Option<usize>) {
        self.hovered = index.filter(|i| *i < self.blocks.len());
    }

    /// Find the block the ray enters first.
    pub fn pick(&self, ray: Ray3d) -> Option<usize> {
        let cast = RayCast3d::from_ray(ray, f32::MAX);
        let mut best: Option<(usize, f32)> = None;

        for (i, block) in self.blocks.iter().enumerate() {
            let Some(distance) = cast.aabb_intersection_at(&block.aabb()) else {
                continue;
            };

            match best {
                Some((_, best_distance)) if distance >= best_distance => {}
                _ => best = Some((i, distance)),
            }
        }

        best.map(|(i, _)| i)
    }

    /// Reveal a block and return its type.
    pub fn open(&mut self, index: usize) -> Result<BlockType, String> {
        let side = self.side;
        let block = self.blocks.get_mut(index).ok_or_else(|| {
            format!(
                "Block index {} is out of range for a {}x{} grid",
                index, side, side
            )
        })?;

        if block.is_open {
            return Err(format!("Block {} is already open", index));
        }

        block.is_open = true;
        Ok(block.block_type)
    }

    /// Open every block; used once a game is over.
    pub fn reveal_all(&mut self) {
        for block in &mut self.blocks {
            block.is_open = true;
        }
    }

    pub fn counts(&self) -> BlockCounts {
        let mut counts = BlockCounts::default();
        for block in &self.blocks {
            counts.add(block.block_type);
        }
        counts
    }

    pub fn opened_counts(&self) -> BlockCounts {
        let mut counts = BlockCounts::default();
        for block in self.blocks.iter().filter(|b| b.is_open) {
            counts.add(block.block_type);
        }
        counts
    }

    /// Number of rotten blocks among the (up to 8) cells around `index`.
    pub fn rotten_neighbors(&self, index: usize) -> usize {
        let Some((row, col)) = self.coords(index) else {
            return 0;
        };

        let mut rotten = 0;
        for dr in -1i64..=1 {
            for dc in -1i64..=1 {
                if dr == 0 && dc == 0 {
                    continue;
                }
                let r = row as i64 + dr;
                let c = col as i64 + dc;
                if r < 0 || c < 0 {
                    continue;
                }
                let Some(neighbor) = self.index(r as usize, c as usize) else {
                    continue;
                };
                if self.blocks[neighbor].block_type == BlockType::Rotten {
                    rotten += 1;
                }
            }
        }

        rotten
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        let mut all_safe_open = true;

        for block in &self.blocks {
            match (block.block_type, block.is_open) {
                (BlockType::Rotten, true) => return Some(GameOutcome::Lost),
                (BlockType::Rotten, false) => {}
                (_, false) => all_safe_open = false,
                (_, true) => {}
            }
        }

        all_safe_open.then_some(GameOutcome::Won)
    }
}

/// Draw a block type, redrawing when the drawn type has hit its cap.
pub fn roll_block_type(
    config: &DifficultyConfig,
    counts: &BlockCounts,
    rng: &mut impl Rng,
) -> BlockType {
    for _ in 0..MAX_TYPE_ATTEMPTS {
        let roll: f32 = rng.gen();

        let candidate = if roll < config.flower_chance {
            BlockType::Flower
        } else if roll < config.flower_chance + config.rotten_chance {
            BlockType::Rotten
        } else {
            BlockType::Dirt
        };

        match candidate {
            BlockType::Flower if counts.flower >= config.max_flowers => continue,
            BlockType::Rotten if counts.rotten >= config.max_rotten => continue,
            other => return other,
        }
    }

    BlockType::Dirt
}
