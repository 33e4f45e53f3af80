//! Block types and geometry
//!
//! A block is one cube of the board. Its type is hidden until it is opened;
//! closed blocks all share the same footprint so the height does not give
//! the type away.

use bevy::math::bounding::Aabb3d;
use bevy::prelude::*;

/// Width (and depth) of every block in world units
pub const BLOCK_W: f32 = 4.0;

/// Height shared by every closed block
pub const CLOSED_HEIGHT: f32 = 2.0;

/// Y coordinate the blocks rest on
pub const BOARD_FLOOR_Y: f32 = 0.0;

/// Component attached to each block entity, pointing into the grid
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockCell {
    pub index: usize,
}

/// All supported block types
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BlockType {
    #[default]
    Dirt,
    Flower,
    Rotten,
}

impl BlockType {
    pub const ALL: [BlockType; 3] = [BlockType::Dirt, BlockType::Flower, BlockType::Rotten];

    pub fn name(&self) -> &'static str {
        match self {
            BlockType::Dirt => "dirt",
            BlockType::Flower => "flower",
            BlockType::Rotten => "rotten",
        }
    }

    pub fn parse(s: &str) -> Option<BlockType> {
        match s.trim().to_lowercase().as_str() {
            "dirt" => Some(BlockType::Dirt),
            "flower" => Some(BlockType::Flower),
            "rotten" => Some(BlockType::Rotten),
            _ => None,
        }
    }

    /// Revealed size of the block: x = width, y = height.
    pub fn size(&self) -> Vec2 {
        let height = match self {
            BlockType::Flower => 4.5,
            BlockType::Rotten => 3.0,
            BlockType::Dirt => 2.0,
        };

        Vec2::new(BLOCK_W, height)
    }

    pub fn base_color(&self) -> Color {
        match self {
            BlockType::Dirt => Color::srgb(0.55, 0.38, 0.22), // Turned soil
            BlockType::Flower => Color::srgb(0.95, 0.45, 0.75), // Pink bloom
            BlockType::Rotten => Color::srgb(0.35, 0.40, 0.15), // Mouldy green
        }
    }

    /// Single-character glyph used by the terminal renderer.
    pub fn glyph(&self) -> char {
        match self {
            BlockType::Dirt => '.',
            BlockType::Flower => '*',
            BlockType::Rotten => 'x',
        }
    }
}

/// One cell of the board
#[derive(Clone, Debug, PartialEq)]
pub struct Block {
    /// Center of the block at its revealed size
    pub pos: Vec3,
    pub block_type: BlockType,
    pub is_open: bool,
    /// x = width, y = height
    pub size: Vec2,
    /// Color shown once the block is open
    pub color: Color,
}

impl Block {
    /// Place a block at `(row, col)` on a `side`-wide board centered on the
    /// origin. `shade` scales the type's base color to vary neighbouring
    /// blocks of the same type.
    pub fn new(block_type: BlockType, row: usize, col: usize, side: usize, shade: f32) -> Self {
        let size = block_type.size();
        let half_extent = (side.saturating_sub(1)) as f32 * BLOCK_W * 0.5;

        Self {
            pos: Vec3::new(
                half_extent - row as f32 * BLOCK_W,
                BOARD_FLOOR_Y + size.y * 0.5,
                half_extent - col as f32 * BLOCK_W,
            ),
            block_type,
            is_open: false,
            size,
            color: shade_color(block_type.base_color(), shade),
        }
    }

    /// Current visual size of the block.
    pub fn extent(&self) -> Vec3 {
        if self.is_open {
            Vec3::new(self.size.x, self.size.y, self.size.x)
        } else {
            Vec3::new(BLOCK_W, CLOSED_HEIGHT, BLOCK_W)
        }
    }

    /// Current visual center; blocks always rest on the floor.
    pub fn center(&self) -> Vec3 {
        let extent = self.extent();
        Vec3::new(self.pos.x, BOARD_FLOOR_Y + extent.y * 0.5, self.pos.z)
    }

    /// Bounding box used for ray picking
    pub fn aabb(&self) -> Aabb3d {
        Aabb3d::new(self.center(), self.extent() * 0.5)
    }
}

/// Multiply the RGB channels of `color` by `factor`, keeping alpha.
pub fn shade_color(color: Color, factor: f32) -> Color {
    let srgba = color.to_srgba();
    Color::srgba(
        (srgba.red * factor).clamp(0.0, 1.0),
        (srgba.green * factor).clamp(0.0, 1.0),
        (srgba.blue * factor).clamp(0.0, 1.0),
        srgba.alpha,
    )
}

/// Blend `color` toward white by `amount` (0.0 = unchanged, 1.0 = white).
pub fn lighten_color(color: Color, amount: f32) -> Color {
    let srgba = color.to_srgba();
    let t = amount.clamp(0.0, 1.0);
    Color::srgba(
        srgba.red + (1.0 - srgba.red) * t,
        srgba.green + (1.0 - srgba.green) * t,
        srgba.blue + (1.0 - srgba.blue) * t,
        srgba.alpha,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::math::bounding::BoundingVolume;

    #[test]
    fn test_block_type_size() {
        assert_eq!(BlockType::Dirt.size(), Vec2::new(4.0, 2.0));
        assert_eq!(BlockType::Flower.size(), Vec2::new(4.0, 4.5));
        assert_eq!(BlockType::Rotten.size(), Vec2::new(4.0, 3.0));
    }

    #[test]
    fn test_block_type_parse() {
        assert_eq!(BlockType::parse("dirt"), Some(BlockType::Dirt));
        assert_eq!(BlockType::parse("Flower"), Some(BlockType::Flower));
        assert_eq!(BlockType::parse(" ROTTEN "), Some(BlockType::Rotten));
        assert_eq!(BlockType::parse("stone"), None);
    }

    #[test]
    fn test_closed_block_hides_type() {
        let flower = Block::new(BlockType::Flower, 0, 0, 4, 1.0);
        let rotten = Block::new(BlockType::Rotten, 0, 0, 4, 1.0);
        assert_eq!(flower.extent(), rotten.extent());
        assert_eq!(flower.center(), rotten.center());
    }

    #[test]
    fn test_open_block_rests_on_floor() {
        let mut block = Block::new(BlockType::Flower, 1, 2, 4, 1.0);
        block.is_open = true;
        let center = block.center();
        assert_eq!(center.y - block.extent().y * 0.5, BOARD_FLOOR_Y);
        assert_eq!(center, block.pos);
    }

    #[test]
    fn test_board_is_centered() {
        let side = 5;
        let first = Block::new(BlockType::Dirt, 0, 0, side, 1.0);
        let last = Block::new(BlockType::Dirt, side - 1, side - 1, side, 1.0);
        assert_eq!(first.pos.x, -last.pos.x);
        assert_eq!(first.pos.z, -last.pos.z);
    }

    #[test]
    fn test_aabb_matches_extent() {
        let block = Block::new(BlockType::Dirt, 0, 0, 1, 1.0);
        let aabb = block.aabb();
        assert_eq!(Vec3::from(aabb.half_size()), block.extent() * 0.5);
        assert_eq!(Vec3::from(aabb.center()), block.center());
    }

    #[test]
    fn test_lighten_color() {
        let white = lighten_color(Color::srgb(0.2, 0.4, 0.6), 1.0).to_srgba();
        assert!((white.red - 1.0).abs() < 1e-6);
        assert!((white.blue - 1.0).abs() < 1e-6);

        let same = lighten_color(Color::srgb(0.2, 0.4, 0.6), 0.0).to_srgba();
        assert!((same.green - 0.4).abs() < 1e-6);
    }
}
