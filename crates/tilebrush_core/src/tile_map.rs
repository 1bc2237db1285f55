//! Tile map grid

use crate::Tile;
use serde::{Deserialize, Serialize};

/// A fixed-size grid of tiles.
///
/// Storage is a flat row-major vector indexed by `row * num_cols + col`.
/// Dimensions are immutable after construction; the map is only ever
/// mutated cell by cell.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TileMap {
    origin_x: i32,
    origin_y: i32,
    num_cols: u32,
    num_rows: u32,
    tile_size: u32,
    tiles: Vec<Tile>,
}

impl TileMap {
    /// Create a blank map with every cell at the default value.
    ///
    /// # Panics
    ///
    /// Panics if any dimension is zero. A zero-size grid is a construction
    /// bug, not a runtime condition.
    pub fn new(origin_x: i32, origin_y: i32, num_cols: u32, num_rows: u32, tile_size: u32) -> Self {
        assert!(
            num_cols > 0 && num_rows > 0,
            "tile map dimensions must be non-zero"
        );
        assert!(tile_size > 0, "tile size must be non-zero");

        Self {
            origin_x,
            origin_y,
            num_cols,
            num_rows,
            tile_size,
            tiles: vec![Tile::default(); (num_cols * num_rows) as usize],
        }
    }

    pub fn origin_x(&self) -> i32 {
        self.origin_x
    }

    pub fn origin_y(&self) -> i32 {
        self.origin_y
    }

    pub fn num_cols(&self) -> u32 {
        self.num_cols
    }

    pub fn num_rows(&self) -> u32 {
        self.num_rows
    }

    pub fn tile_size(&self) -> u32 {
        self.tile_size
    }

    /// Map width in pixels
    pub fn width(&self) -> u32 {
        self.num_cols * self.tile_size
    }

    /// Map height in pixels
    pub fn height(&self) -> u32 {
        self.num_rows * self.tile_size
    }

    /// World x coordinate just past the right edge
    pub fn end_x(&self) -> i32 {
        self.origin_x + self.width() as i32
    }

    /// World y coordinate just past the bottom edge
    pub fn end_y(&self) -> i32 {
        self.origin_y + self.height() as i32
    }

    /// All cells in row-major order
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    fn index(&self, col: u32, row: u32) -> usize {
        (row * self.num_cols + col) as usize
    }

    /// Get the tile at a position; `None` when out of bounds
    pub fn tile(&self, col: u32, row: u32) -> Option<&Tile> {
        if col >= self.num_cols || row >= self.num_rows {
            return None;
        }
        self.tiles.get(self.index(col, row))
    }

    /// Get the tile value at a position; `None` when out of bounds
    pub fn value(&self, col: u32, row: u32) -> Option<i32> {
        self.tile(col, row).map(|t| t.value())
    }

    /// Write a tile value through the cell's own range check.
    /// Out-of-bounds coordinates are silently ignored.
    pub fn set_value(&mut self, col: u32, row: u32, value: i32) {
        if col >= self.num_cols || row >= self.num_rows {
            return;
        }
        let index = self.index(col, row);
        if let Some(tile) = self.tiles.get_mut(index) {
            tile.set_value(value);
        }
    }

    /// Single-cell edit used by the pencil tool.
    ///
    /// The write is rejected (returns false, map untouched) when `value`
    /// falls outside the palette range or the coordinate is not a valid
    /// cell.
    pub fn change_tile(&mut self, col: i32, row: i32, value: i32, palette_len: usize) -> bool {
        if value < 0 || value as usize >= palette_len {
            return false;
        }
        if col < 0 || row < 0 || col as u32 >= self.num_cols || row as u32 >= self.num_rows {
            return false;
        }
        self.set_value(col as u32, row as u32, value);
        true
    }

    /// Toggle the blocked flag of a cell. Out-of-bounds is ignored.
    pub fn set_blocked(&mut self, col: u32, row: u32, blocked: bool) {
        if col >= self.num_cols || row >= self.num_rows {
            return;
        }
        let index = self.index(col, row);
        if let Some(tile) = self.tiles.get_mut(index) {
            tile.set_blocked(blocked);
        }
    }

    /// Pixel position of a cell's top-left corner in world space
    pub fn cell_origin(&self, col: u32, row: u32) -> (i32, i32) {
        (
            self.origin_x + (col * self.tile_size) as i32,
            self.origin_y + (row * self.tile_size) as i32,
        )
    }
}
