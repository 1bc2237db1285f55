//! A single tile cell

use serde::{Deserialize, Serialize};

/// Lowest tile value a cell may hold
pub const MIN_VALUE: i32 = 0;
/// Highest tile value a cell may hold
pub const MAX_VALUE: i32 = 99;
/// Value of blank cells; also assigned when a write is out of range
pub const DEFAULT_VALUE: i32 = MIN_VALUE;

/// One cell of a tile map: a small tile index plus a blocked flag.
///
/// A blocked cell cannot be stepped on or collided with when the map is
/// played back in a game; the editor only toggles the flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    value: i32,
    #[serde(default)]
    blocked: bool,
}

impl Tile {
    pub fn new(value: i32) -> Self {
        let mut tile = Self {
            value: DEFAULT_VALUE,
            blocked: false,
        };
        tile.set_value(value);
        tile
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    pub fn is_blocked(&self) -> bool {
        self.blocked
    }

    /// Set the tile index. An out-of-range value resets the cell to
    /// `DEFAULT_VALUE` instead of erroring.
    pub fn set_value(&mut self, value: i32) {
        if (MIN_VALUE..=MAX_VALUE).contains(&value) {
            self.value = value;
        } else {
            self.value = DEFAULT_VALUE;
        }
    }

    pub fn set_blocked(&mut self, blocked: bool) {
        self.blocked = blocked;
    }
}

impl Default for Tile {
    fn default() -> Self {
        Self {
            value: DEFAULT_VALUE,
            blocked: false,
        }
    }
}
