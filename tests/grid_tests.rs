//! Tests for board generation, picking and reveal

use bevy::math::{Dir3, Ray3d, Vec3};
use rand::rngs::StdRng;
use rand::SeedableRng;

use botanic_sweeper::sweeper3d::types::{
    BlockType, BoardSnapshot, Difficulty, GameOutcome, Grid, BLOCK_W, CLOSED_HEIGHT,
};

fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

#[test]
fn test_grid_sizes_per_difficulty() {
    assert_eq!(Grid::generate(Difficulty::Easy, &mut seeded(1)).len(), 36);
    assert_eq!(Grid::generate(Difficulty::Medium, &mut seeded(1)).len(), 100);
    assert_eq!(Grid::generate(Difficulty::Hard, &mut seeded(1)).len(), 196);
}

#[test]
fn test_grid_is_row_major() {
    let grid = Grid::generate(Difficulty::Easy, &mut seeded(2));
    let side = grid.side();
    for row in 0..side {
        for col in 0..side {
            let index = grid.index(row, col).unwrap();
            assert_eq!(index, row * side + col);
            assert_eq!(grid.coords(index), Some((row, col)));
        }
    }
}

#[test]
fn test_neighbouring_blocks_do_not_overlap() {
    let grid = Grid::generate(Difficulty::Easy, &mut seeded(3));
    let a = grid.block(grid.index(0, 0).unwrap()).unwrap();
    let b = grid.block(grid.index(0, 1).unwrap()).unwrap();
    let c = grid.block(grid.index(1, 0).unwrap()).unwrap();
    assert_eq!((a.pos.z - b.pos.z).abs(), BLOCK_W);
    assert_eq!((a.pos.x - c.pos.x).abs(), BLOCK_W);
}

#[test]
fn test_click_every_safe_block_wins() {
    let mut grid = Grid::generate(Difficulty::Easy, &mut seeded(4));
    let safe: Vec<usize> = grid
        .blocks()
        .iter()
        .enumerate()
        .filter(|(_, b)| b.block_type != BlockType::Rotten)
        .map(|(i, _)| i)
        .collect();

    for (n, index) in safe.iter().enumerate() {
        assert_eq!(grid.outcome(), None, "decided early after {} opens", n);
        grid.open(*index).unwrap();
    }

    assert_eq!(grid.outcome(), Some(GameOutcome::Won));
}

#[test]
fn test_ray_from_above_picks_block_under_cursor() {
    let grid = Grid::generate(Difficulty::Medium, &mut seeded(5));
    for index in [0, 17, 55, 99] {
        let pos = grid.block(index).unwrap().pos;
        let ray = Ray3d::new(Vec3::new(pos.x + 0.5, 40.0, pos.z - 0.5), Dir3::NEG_Y);
        assert_eq!(grid.pick(ray), Some(index));
    }
}

#[test]
fn test_opened_flower_is_taller_and_still_pickable() {
    let mut grid = Grid::from_types(
        2,
        &[
            BlockType::Flower,
            BlockType::Dirt,
            BlockType::Dirt,
            BlockType::Dirt,
        ],
    )
    .unwrap();

    // Skims just above the closed blocks: misses everything
    let pos = grid.block(0).unwrap().pos;
    let skim = Ray3d::new(Vec3::new(50.0, CLOSED_HEIGHT + 0.5, pos.z), Dir3::NEG_X);
    assert_eq!(grid.pick(skim), None);

    grid.open(0).unwrap();
    assert_eq!(grid.pick(skim), Some(0));
}

#[test]
fn test_diagonal_camera_ray_hits_nearest_block() {
    let grid = Grid::from_types(3, &[BlockType::Dirt; 9]).unwrap();
    // Camera sits at (+x, +y, +z) looking toward the origin; the corner block
    // at (row 0, col 0) has the largest x and z and is hit first.
    let direction = Dir3::new(Vec3::new(-1.0, -1.0, -1.0)).unwrap();
    let ray = Ray3d::new(Vec3::new(13.0, 11.0, 13.0), direction);
    assert_eq!(grid.pick(ray), grid.index(0, 0));
}

#[test]
fn test_snapshot_matches_grid() {
    let grid = Grid::generate(Difficulty::Hard, &mut seeded(6));
    let snapshot = BoardSnapshot::from_grid(&grid, Difficulty::Hard, Some(6));

    assert_eq!(snapshot.rows.len(), grid.side());
    let counts = grid.counts();
    assert_eq!(snapshot.counts.flower, counts.flower);
    assert_eq!(snapshot.counts.rotten, counts.rotten);

    let row = snapshot.row_types(3).unwrap();
    for (col, block_type) in row.iter().enumerate() {
        let index = grid.index(3, col).unwrap();
        assert_eq!(grid.block(index).unwrap().block_type, *block_type);
    }
}

#[test]
fn test_snapshot_json_has_board() {
    let grid = Grid::generate(Difficulty::Easy, &mut seeded(7));
    let json = BoardSnapshot::from_grid(&grid, Difficulty::Easy, None)
        .to_json()
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["difficulty"], "easy");
    assert_eq!(value["side"], 6);
    assert!(value.get("seed").is_none());
    assert_eq!(value["rows"].as_array().unwrap().len(), 6);
}
