//! Per-tick pointer snapshot and click routing
//!
//! The editor never polls a global mouse state; the host loop hands it a
//! `PointerState` snapshot each tick and the routing here decides whether
//! the snapshot amounts to a click on a cell.

use crate::{screen_to_cell, Camera};

/// Raw pointer points for one update tick, in unscaled display pixels
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PointerState {
    /// Where the button went down, if it has
    pub pressed: Option<(i32, i32)>,
    /// Where the button came up, if it has
    pub released: Option<(i32, i32)>,
    /// Where the pointer currently hovers
    pub current: Option<(i32, i32)>,
}

impl PointerState {
    /// Forget the press/release pair after a click is consumed
    pub fn clear_click(&mut self) {
        self.pressed = None;
        self.released = None;
    }
}

/// Resolve a press/release pair into a cell click.
///
/// A click is only actionable when both points are known, both map inside
/// the viewport, and both land on the same cell - a press-and-drag across
/// cells is rejected. On success the stored pair is cleared so the click
/// cannot re-trigger on the next tick.
pub fn resolve_click(
    pointer: &mut PointerState,
    camera: &Camera,
    tile_size: u32,
    scale: i32,
) -> Option<(u32, u32)> {
    let (pressed_x, pressed_y) = pointer.pressed?;
    let (released_x, released_y) = pointer.released?;

    let pressed_cell = screen_to_cell(pressed_x, pressed_y, camera, tile_size, scale)?;
    let released_cell = screen_to_cell(released_x, released_y, camera, tile_size, scale)?;

    if pressed_cell != released_cell {
        return None;
    }

    pointer.clear_click();
    Some(pressed_cell)
}

/// Cell under the hovering pointer, for highlight display. Never consumes.
pub fn hover_cell(
    pointer: &PointerState,
    camera: &Camera,
    tile_size: u32,
    scale: i32,
) -> Option<(u32, u32)> {
    let (x, y) = pointer.current?;
    screen_to_cell(x, y, camera, tile_size, scale)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tilebrush_core::TileMap;

    fn camera() -> (TileMap, Camera) {
        let map = TileMap::new(0, 0, 60, 30, 16);
        let camera = Camera::new(0, 0, 480, 240, &map);
        (map, camera)
    }

    #[test]
    fn test_click_resolves_and_consumes() {
        let (_map, camera) = camera();
        let mut pointer = PointerState {
            pressed: Some((100, 50)),
            released: Some((105, 52)),
            current: None,
        };

        // Both points land on cell (6, 3) at scale 1
        assert_eq!(
            resolve_click(&mut pointer, &camera, 16, 1),
            Some((6, 3))
        );

        // Consumed: the pair is cleared and cannot re-trigger
        assert_eq!(pointer.pressed, None);
        assert_eq!(pointer.released, None);
        assert_eq!(resolve_click(&mut pointer, &camera, 16, 1), None);
    }

    #[test]
    fn test_drag_across_cells_rejected() {
        let (_map, camera) = camera();
        let mut pointer = PointerState {
            pressed: Some((100, 50)),
            released: Some((200, 50)),
            current: None,
        };

        assert_eq!(resolve_click(&mut pointer, &camera, 16, 1), None);

        // Rejected clicks are not consumed
        assert!(pointer.pressed.is_some());
        assert!(pointer.released.is_some());
    }

    #[test]
    fn test_release_outside_viewport_rejected() {
        let (_map, camera) = camera();
        let mut pointer = PointerState {
            pressed: Some((100, 50)),
            released: Some((900, 50)),
            current: None,
        };

        assert_eq!(resolve_click(&mut pointer, &camera, 16, 1), None);
    }

    #[test]
    fn test_press_without_release_pends() {
        let (_map, camera) = camera();
        let mut pointer = PointerState {
            pressed: Some((100, 50)),
            released: None,
            current: None,
        };

        assert_eq!(resolve_click(&mut pointer, &camera, 16, 1), None);
        assert!(pointer.pressed.is_some());
    }

    #[test]
    fn test_hover_cell_tracks_current_point() {
        let (_map, camera) = camera();
        let pointer = PointerState {
            pressed: None,
            released: None,
            current: Some((100, 50)),
        };

        assert_eq!(hover_cell(&pointer, &camera, 16, 2), Some((3, 1)));
        assert_eq!(hover_cell(&PointerState::default(), &camera, 16, 2), None);
    }
}
