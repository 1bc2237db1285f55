//! Core data structures for the tilebrush map editor
//!
//! This crate provides the fundamental types for representing tile-based maps:
//! - `TileMap` - A fixed-size grid of tiles
//! - `Tile` - A single cell holding a tile index and a blocked flag
//! - `ObjectMap` - A layer of free-placed decoration objects
//! - `MapDocument` - The savable bundle of all layers plus metadata

mod document;
mod object_map;
mod tile;
mod tile_map;

pub use document::{MapDocument, SaveStamp};
pub use object_map::{MapObject, ObjectKind, ObjectMap};
pub use tile::{Tile, DEFAULT_VALUE, MAX_VALUE, MIN_VALUE};
pub use tile_map::TileMap;
