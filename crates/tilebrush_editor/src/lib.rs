//! Editor logic for tilebrush
//!
//! Everything the map editor does between input and pixels, with no
//! rendering attached:
//! - `Camera` - a clamped window over the map
//! - viewport math - world pixels to grid cells to screen pixels
//! - `PointerState` / click routing - press+release pairs become cell clicks
//! - `FillGraph` - the bucket tool's graph-based flood fill
//! - `MapEditor` - the per-session facade tying the tools together
//! - `saves` - slot-based document persistence

mod camera;
mod fill;
mod input;
mod session;
mod viewport;

pub mod saves;

pub use camera::{Camera, PanDirection, DEFAULT_PAN_SPEED};
pub use fill::{FillGraph, FillResult};
pub use input::{hover_cell, resolve_click, PointerState};
pub use session::{ActiveLayer, ClickOutcome, DrawMode, MapEditor, HITBOX_PALETTE_LEN};
pub use viewport::{
    cell_screen_position, screen_offset, screen_to_cell, screen_to_world, visible_range,
    VisibleRange,
};
