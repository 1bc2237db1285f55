//! Viewport math: world pixels to grid cells to screen pixels
//!
//! The visible range and screen offset are recomputed from the camera every
//! update tick; nothing here is cached across camera movement.

use crate::Camera;
use tilebrush_core::TileMap;

/// The rectangular sub-range of grid cells currently visible (inclusive)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleRange {
    pub start_col: u32,
    pub end_col: u32,
    pub start_row: u32,
    pub end_row: u32,
}

impl VisibleRange {
    pub fn num_cols(&self) -> u32 {
        self.end_col - self.start_col + 1
    }

    pub fn num_rows(&self) -> u32 {
        self.end_row - self.start_row + 1
    }
}

/// Which cells the camera can see. End columns/rows are clamped to the map
/// edge, so the range never indexes past the grid even at maximum scroll.
pub fn visible_range(camera: &Camera, map: &TileMap) -> VisibleRange {
    let tile_size = map.tile_size() as i32;

    // Camera position is clamped non-negative, so integer division floors
    let start_col = camera.x() / tile_size;
    let mut end_col = start_col + camera.view_width() / tile_size;
    let start_row = camera.y() / tile_size;
    let mut end_row = start_row + camera.view_height() / tile_size;

    if end_col > map.num_cols() as i32 - 1 {
        end_col = map.num_cols() as i32 - 1;
    }
    if end_row > map.num_rows() as i32 - 1 {
        end_row = map.num_rows() as i32 - 1;
    }

    VisibleRange {
        start_col: start_col as u32,
        end_col: end_col as u32,
        start_row: start_row as u32,
        end_row: end_row as u32,
    }
}

/// Offset that draws the visible window flush against the viewport origin
/// regardless of sub-tile scroll position
pub fn screen_offset(camera: &Camera, map: &TileMap, range: &VisibleRange) -> (i32, i32) {
    let tile_size = map.tile_size() as i32;
    (
        -camera.x() + range.start_col as i32 * tile_size,
        -camera.y() + range.start_row as i32 * tile_size,
    )
}

/// Screen-space pixel of a visible cell's top-left corner
pub fn cell_screen_position(
    range: &VisibleRange,
    offset: (i32, i32),
    col: u32,
    row: u32,
    tile_size: u32,
) -> (i32, i32) {
    (
        (col - range.start_col) as i32 * tile_size as i32 + offset.0,
        (row - range.start_row) as i32 * tile_size as i32 + offset.1,
    )
}

/// Map a raw input point to world pixels.
///
/// The raw point is descaled by the display `scale` and rejected when it
/// lands outside the viewport rectangle `[0, view_width) x [0, view_height)`;
/// otherwise the camera offset shifts it into world space.
///
/// # Panics
///
/// Panics when `scale < 1`; the display scale is a fixed positive multiplier
/// set at startup.
pub fn screen_to_world(raw_x: i32, raw_y: i32, camera: &Camera, scale: i32) -> Option<(i32, i32)> {
    assert!(scale >= 1, "display scale must be positive");

    let x = raw_x / scale;
    let y = raw_y / scale;

    if x < 0 || y < 0 || x >= camera.view_width() || y >= camera.view_height() {
        return None;
    }

    Some((camera.x() + x, camera.y() + y))
}

/// Map a raw input point back to a grid cell, or `None` when it falls
/// outside the viewport. Coordinates are non-negative, so the integer
/// division floors.
pub fn screen_to_cell(
    raw_x: i32,
    raw_y: i32,
    camera: &Camera,
    tile_size: u32,
    scale: i32,
) -> Option<(u32, u32)> {
    let (world_x, world_y) = screen_to_world(raw_x, raw_y, camera, scale)?;

    Some((
        (world_x / tile_size as i32) as u32,
        (world_y / tile_size as i32) as u32,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map() -> TileMap {
        // 60x30 cells of 16px = 960x480 pixels
        TileMap::new(0, 0, 60, 30, 16)
    }

    #[test]
    fn test_visible_range_at_origin() {
        let map = map();
        let camera = Camera::new(0, 0, 480, 240, &map);
        let range = visible_range(&camera, &map);

        assert_eq!(range.start_col, 0);
        assert_eq!(range.end_col, 30);
        assert_eq!(range.start_row, 0);
        assert_eq!(range.end_row, 15);
        assert_eq!(range.num_cols(), 31);
        assert_eq!(range.num_rows(), 16);
    }

    #[test]
    fn test_visible_range_clipped_at_max_scroll() {
        let map = map();
        let mut camera = Camera::new(0, 0, 480, 240, &map);
        camera.set_position(i32::MAX, i32::MAX);

        let range = visible_range(&camera, &map);
        assert!(range.end_col < map.num_cols());
        assert!(range.end_row < map.num_rows());
        assert_eq!(range.end_col, map.num_cols() - 1);
        assert_eq!(range.end_row, map.num_rows() - 1);
    }

    #[test]
    fn test_visible_range_mid_tile_scroll() {
        let map = map();
        let mut camera = Camera::new(0, 0, 480, 240, &map);
        camera.set_position(40, 0);

        // 40 / 16 floors to column 2
        let range = visible_range(&camera, &map);
        assert_eq!(range.start_col, 2);
        assert_eq!(range.end_col, 32);
    }

    #[test]
    fn test_screen_offset_flush_with_viewport() {
        let map = map();
        let mut camera = Camera::new(0, 0, 480, 240, &map);

        // Tile-aligned camera draws at exactly the viewport origin
        camera.set_position(32, 0);
        let range = visible_range(&camera, &map);
        assert_eq!(screen_offset(&camera, &map, &range), (0, 0));

        // Mid-tile scroll pulls the window left by the sub-tile remainder
        camera.set_position(40, 0);
        let range = visible_range(&camera, &map);
        assert_eq!(screen_offset(&camera, &map, &range), (-8, 0));
    }

    #[test]
    fn test_cell_screen_position() {
        let map = map();
        let mut camera = Camera::new(0, 0, 480, 240, &map);
        camera.set_position(40, 0);
        let range = visible_range(&camera, &map);
        let offset = screen_offset(&camera, &map, &range);

        // First visible column is partially off-screen to the left
        assert_eq!(
            cell_screen_position(&range, offset, range.start_col, 0, 16),
            (-8, 0)
        );
        assert_eq!(
            cell_screen_position(&range, offset, range.start_col + 1, 0, 16),
            (8, 0)
        );
    }

    #[test]
    fn test_screen_to_cell_descales_then_offsets() {
        // Viewport 480x240, tile 16, camera (32,0), scale 2:
        // raw (100,50) descales to (50,25), world (82,25), cell (5,1)
        let map = map();
        let mut camera = Camera::new(0, 0, 480, 240, &map);
        camera.set_position(32, 0);

        assert_eq!(screen_to_cell(100, 50, &camera, 16, 2), Some((5, 1)));
    }

    #[test]
    fn test_screen_to_cell_rejects_outside_viewport() {
        let map = map();
        let camera = Camera::new(0, 0, 480, 240, &map);

        assert_eq!(screen_to_cell(960, 100, &camera, 16, 1), None);
        assert_eq!(screen_to_cell(100, 480, &camera, 16, 1), None);
        assert_eq!(screen_to_cell(-2, 100, &camera, 16, 1), None);

        // Just inside the edge still maps
        assert!(screen_to_cell(479, 239, &camera, 16, 1).is_some());
    }

    #[test]
    fn test_screen_to_world_applies_scale_then_camera() {
        let map = map();
        let mut camera = Camera::new(0, 0, 480, 240, &map);
        camera.set_position(32, 16);

        assert_eq!(screen_to_world(100, 50, &camera, 2), Some((82, 41)));
        assert_eq!(screen_to_world(100, 50, &camera, 1), Some((132, 66)));
    }
}
