//! The savable editor document
//!
//! A `MapDocument` bundles every layer the editor works on - ground tiles,
//! items, hitboxes, and decoration objects - plus save metadata, so one
//! serialized file restores a complete editing session.

use crate::{ObjectMap, TileMap};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Wall-clock stamp recorded when a document is saved.
///
/// The stamp is supplied by the caller at save time; the model never reads
/// the clock itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveStamp {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
}

impl fmt::Display for SaveStamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}/{} {}:{:02}",
            self.month, self.day, self.year, self.hour, self.minute
        )
    }
}

/// A complete map document: three aligned tile layers plus an object layer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapDocument {
    pub id: Uuid,
    /// Ground tile layer
    pub tile_map: TileMap,
    /// Item placements, aligned with the ground layer
    pub item_map: TileMap,
    /// Collision cells, aligned with the ground layer
    pub hitbox_map: TileMap,
    /// Decoration objects placed in world pixels
    pub object_map: ObjectMap,
    #[serde(default)]
    pub saved_at: Option<SaveStamp>,
}

impl MapDocument {
    /// Create a blank document with all layers sharing the same grid shape
    pub fn new(num_cols: u32, num_rows: u32, tile_size: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            tile_map: TileMap::new(0, 0, num_cols, num_rows, tile_size),
            item_map: TileMap::new(0, 0, num_cols, num_rows, tile_size),
            hitbox_map: TileMap::new(0, 0, num_cols, num_rows, tile_size),
            object_map: ObjectMap::new(),
            saved_at: None,
        }
    }
}
