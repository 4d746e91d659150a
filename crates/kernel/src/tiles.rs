use glam::Vec2;
use serde::{Deserialize, Serialize};
use tarmac_common::Rect;

use crate::rng::SeedStream;

/// Classification of one grid cell. Open and Road are both traversable;
/// only Wall blocks movement — the Open/Road distinction matters to the
/// wander policy and to rendering, never to collision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tile {
    Open,
    Road,
    Wall,
}

impl Tile {
    pub fn blocks(self) -> bool {
        matches!(self, Tile::Wall)
    }
}

/// Shape parameters for world generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldConfig {
    /// Grid width in tiles.
    pub width: usize,
    /// Grid height in tiles.
    pub height: usize,
    /// Edge length of one tile in world units.
    pub tile_size: f32,
    /// A Road row every this many rows.
    pub band_spacing: usize,
    /// A Road column every this many columns.
    pub column_spacing: usize,
    /// Number of 2x2 Wall blobs scattered over the grid.
    pub wall_blob_count: usize,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: 80,
            height: 60,
            tile_size: 64.0,
            band_spacing: 6,
            column_spacing: 10,
            wall_blob_count: 50,
        }
    }
}

/// Road stripes keep clear of the grid edges by these margins (in tiles).
const ROAD_ROW_MARGIN: usize = 10;
const ROAD_COLUMN_MARGIN: usize = 8;

/// The static tile grid. Immutable for the lifetime of a session once
/// generated; all queries are total (out-of-range classifies as Wall, so the
/// world boundary doubles as a collision boundary with no special cases in
/// callers).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TileWorld {
    width: usize,
    height: usize,
    tile_size: f32,
    tiles: Vec<Tile>,
}

impl TileWorld {
    /// Grid of uniform tiles (test and authoring convenience).
    pub fn with_fill(width: usize, height: usize, tile_size: f32, fill: Tile) -> Self {
        Self {
            width,
            height,
            tile_size,
            tiles: vec![fill; width * height],
        }
    }

    /// Generate a session world: Open ground, Road stripes in both axes,
    /// and sparse 2x2 Wall blobs at seeded-random positions.
    pub fn generate(config: &WorldConfig, rng: &mut SeedStream) -> Self {
        let mut world = Self::with_fill(config.width, config.height, config.tile_size, Tile::Open);

        for y in (ROAD_ROW_MARGIN..config.height.saturating_sub(ROAD_ROW_MARGIN))
            .step_by(config.band_spacing.max(1))
        {
            for x in 0..config.width {
                world.set_tile(x, y, Tile::Road);
            }
        }
        for x in (ROAD_COLUMN_MARGIN..config.width.saturating_sub(ROAD_COLUMN_MARGIN))
            .step_by(config.column_spacing.max(1))
        {
            for y in 0..config.height {
                world.set_tile(x, y, Tile::Road);
            }
        }

        // Blob origins are drawn from [0, dim - 3) so a 2x2 blob always
        // lands fully in-bounds.
        for _ in 0..config.wall_blob_count {
            let bx = rng.next_range(config.width.saturating_sub(3).max(1));
            let by = rng.next_range(config.height.saturating_sub(3).max(1));
            for dy in 0..2 {
                for dx in 0..2 {
                    world.set_tile(bx + dx, by + dy, Tile::Wall);
                }
            }
        }

        tracing::debug!(
            width = config.width,
            height = config.height,
            blobs = config.wall_blob_count,
            "generated tile world"
        );
        world
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn tile_size(&self) -> f32 {
        self.tile_size
    }

    /// World extent in world units.
    pub fn size(&self) -> Vec2 {
        Vec2::new(
            self.width as f32 * self.tile_size,
            self.height as f32 * self.tile_size,
        )
    }

    /// The world rectangle `(0, 0) .. size()`.
    pub fn bounds(&self) -> Rect {
        Rect::from_size(self.size())
    }

    pub fn set_tile(&mut self, x: usize, y: usize, tile: Tile) {
        if x < self.width && y < self.height {
            self.tiles[y * self.width + x] = tile;
        }
    }

    /// Classify by tile index. Any index outside `[0,W) x [0,H)` is Wall.
    pub fn tile_at(&self, tx: i64, ty: i64) -> Tile {
        if tx < 0 || ty < 0 || tx >= self.width as i64 || ty >= self.height as i64 {
            return Tile::Wall;
        }
        self.tiles[ty as usize * self.width + tx as usize]
    }

    /// Classify a world-space point. Fail-closed: anywhere off the grid is
    /// Wall, so callers never need bounds-checking branches.
    pub fn classify(&self, p: Vec2) -> Tile {
        let tx = (p.x / self.tile_size).floor() as i64;
        let ty = (p.y / self.tile_size).floor() as i64;
        self.tile_at(tx, ty)
    }

    pub fn is_wall(&self, p: Vec2) -> bool {
        self.classify(p).blocks()
    }
}
