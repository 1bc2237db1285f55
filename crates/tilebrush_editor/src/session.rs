//! Editor session facade
//!
//! `MapEditor` owns one document and one camera and routes tool input to
//! them. Nothing here reaches into globals: the host loop passes a pointer
//! snapshot and an optional pan direction into `tick` and reads the outcome
//! back.

use crate::{
    resolve_click, visible_range, Camera, FillGraph, FillResult, PanDirection, PointerState,
    VisibleRange, DEFAULT_PAN_SPEED,
};
use tilebrush_core::{MapDocument, MapObject, TileMap};

/// The hitbox layer only distinguishes clear from blocked
pub const HITBOX_PALETTE_LEN: usize = 2;

/// Which tile layer the tools currently edit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveLayer {
    #[default]
    Tiles,
    Items,
    Hitboxes,
}

/// Pencil vs. bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrawMode {
    #[default]
    Arrow,
    Fill,
}

/// What a routed click ended up doing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    Painted { col: u32, row: u32 },
    Filled(FillResult),
    /// No actionable click this tick, or the edit was rejected
    Ignored,
}

/// One editing session over one document
#[derive(Debug)]
pub struct MapEditor {
    document: MapDocument,
    camera: Camera,
    active_layer: ActiveLayer,
    draw_mode: DrawMode,
    selected_value: i32,
    tile_palette_len: usize,
    item_palette_len: usize,
    visible: VisibleRange,
}

impl MapEditor {
    /// Start a session. The camera is created over the document's grid so
    /// the two can never disagree about bounds.
    pub fn new(
        document: MapDocument,
        view_width: i32,
        view_height: i32,
        tile_palette_len: usize,
        item_palette_len: usize,
    ) -> Self {
        let camera = Camera::new(0, 0, view_width, view_height, &document.tile_map);
        let visible = visible_range(&camera, &document.tile_map);
        Self {
            document,
            camera,
            active_layer: ActiveLayer::default(),
            draw_mode: DrawMode::default(),
            selected_value: 0,
            tile_palette_len,
            item_palette_len,
            visible,
        }
    }

    pub fn document(&self) -> &MapDocument {
        &self.document
    }

    /// Hand the document back, e.g. for saving
    pub fn into_document(self) -> MapDocument {
        self.document
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn active_layer(&self) -> ActiveLayer {
        self.active_layer
    }

    pub fn set_active_layer(&mut self, layer: ActiveLayer) {
        self.active_layer = layer;
    }

    pub fn draw_mode(&self) -> DrawMode {
        self.draw_mode
    }

    pub fn set_draw_mode(&mut self, mode: DrawMode) {
        self.draw_mode = mode;
    }

    pub fn selected_value(&self) -> i32 {
        self.selected_value
    }

    /// Select the palette entry subsequent edits paint with
    pub fn set_selected_value(&mut self, value: i32) {
        self.selected_value = value;
    }

    /// The visible cell range as of the last `tick`
    pub fn visible(&self) -> VisibleRange {
        self.visible
    }

    pub fn active_map(&self) -> &TileMap {
        match self.active_layer {
            ActiveLayer::Tiles => &self.document.tile_map,
            ActiveLayer::Items => &self.document.item_map,
            ActiveLayer::Hitboxes => &self.document.hitbox_map,
        }
    }

    fn active_map_mut(&mut self) -> &mut TileMap {
        match self.active_layer {
            ActiveLayer::Tiles => &mut self.document.tile_map,
            ActiveLayer::Items => &mut self.document.item_map,
            ActiveLayer::Hitboxes => &mut self.document.hitbox_map,
        }
    }

    fn active_palette_len(&self) -> usize {
        match self.active_layer {
            ActiveLayer::Tiles => self.tile_palette_len,
            ActiveLayer::Items => self.item_palette_len,
            ActiveLayer::Hitboxes => HITBOX_PALETTE_LEN,
        }
    }

    /// One editor update. Order matters: the camera moves first, then the
    /// visible window recomputes, then clicks are routed against the
    /// post-move positions.
    pub fn tick(
        &mut self,
        pointer: &mut PointerState,
        pan: Option<PanDirection>,
        scale: i32,
    ) -> ClickOutcome {
        if let Some(direction) = pan {
            self.camera.pan_step(direction, DEFAULT_PAN_SPEED);
        }
        self.visible = visible_range(&self.camera, self.active_map());
        self.handle_click(pointer, scale)
    }

    /// Route a resolved click to the current tool. Unresolved clicks and
    /// rejected edits come back as `Ignored` - the editor never raises an
    /// error for a stray click.
    pub fn handle_click(&mut self, pointer: &mut PointerState, scale: i32) -> ClickOutcome {
        let tile_size = self.active_map().tile_size();
        let Some((col, row)) = resolve_click(pointer, &self.camera, tile_size, scale) else {
            return ClickOutcome::Ignored;
        };

        match self.draw_mode {
            DrawMode::Arrow => {
                if self.paint_cell(col, row, self.selected_value) {
                    ClickOutcome::Painted { col, row }
                } else {
                    ClickOutcome::Ignored
                }
            }
            DrawMode::Fill => {
                ClickOutcome::Filled(self.attempt_fill(col, row, self.selected_value))
            }
        }
    }

    /// Pencil tool: write one cell through the palette range check
    pub fn paint_cell(&mut self, col: u32, row: u32, value: i32) -> bool {
        let palette_len = self.active_palette_len();
        let on_hitboxes = self.active_layer == ActiveLayer::Hitboxes;
        let map = self.active_map_mut();

        let applied = map.change_tile(col as i32, row as i32, value, palette_len);
        if applied && on_hitboxes {
            map.set_blocked(col, row, value != 0);
        }
        applied
    }

    /// Bucket tool: flood the connected same-valued region around the seed
    /// with `new_value`.
    ///
    /// The whole operation is rejected - nothing written - when the value
    /// falls outside the active palette. A seed outside the grid yields an
    /// empty fill. Both report zero applied cells rather than erroring.
    pub fn attempt_fill(&mut self, seed_col: u32, seed_row: u32, new_value: i32) -> FillResult {
        let palette_len = self.active_palette_len();
        if new_value < 0 || new_value as usize >= palette_len {
            tracing::debug!(new_value, palette_len, "fill rejected: value outside palette");
            return FillResult { applied_cells: 0 };
        }

        let mut graph = FillGraph::build(self.active_map());
        let fill_set = graph.flood(seed_col, seed_row);

        let on_hitboxes = self.active_layer == ActiveLayer::Hitboxes;
        let map = self.active_map_mut();
        for &(col, row) in &fill_set {
            map.set_value(col, row, new_value);
            if on_hitboxes {
                map.set_blocked(col, row, new_value != 0);
            }
        }

        FillResult {
            applied_cells: fill_set.len(),
        }
    }

    /// Place a decoration object in world pixels
    pub fn place_object(&mut self, object: MapObject) {
        self.document.object_map.place(object);
    }

    /// Remove the first object overlapping the probe box
    pub fn erase_object_at(&mut self, x: i32, y: i32, width: i32, height: i32) -> Option<MapObject> {
        self.document.object_map.remove_at(x, y, width, height)
    }

    /// Topmost object under a raw screen point, if the point is inside the
    /// viewport
    pub fn object_at_screen(&self, raw_x: i32, raw_y: i32, scale: i32) -> Option<&MapObject> {
        let (world_x, world_y) = crate::screen_to_world(raw_x, raw_y, &self.camera, scale)?;
        self.document.object_map.object_at(world_x, world_y)
    }
}
