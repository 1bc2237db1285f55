//! Object decoration layer

use serde::{Deserialize, Serialize};

/// Category of a placed object; selects which image set renders it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObjectKind {
    Tree,
    Bush,
    Rock,
    Structure,
    Building,
    Misc,
}

/// A free-placed object on the map, positioned in world pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapObject {
    /// Index into the image set for this kind
    pub id: u32,
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub kind: ObjectKind,
}

impl MapObject {
    /// AABB overlap test against another object (open intervals: touching
    /// edges do not count as overlap)
    pub fn overlaps(&self, other: &MapObject) -> bool {
        self.x < other.x + other.width
            && self.x + self.width > other.x
            && self.y < other.y + other.height
            && self.y + self.height > other.y
    }

    /// Whether the box overlaps the given region
    pub fn overlaps_box(&self, x: i32, y: i32, width: i32, height: i32) -> bool {
        self.x < x + width
            && self.x + self.width > x
            && self.y < y + height
            && self.y + self.height > y
    }

    /// Closed-interval point test: edges count as inside
    pub fn contains_point(&self, x: i32, y: i32) -> bool {
        x >= self.x && x <= self.x + self.width && y >= self.y && y <= self.y + self.height
    }
}

/// A layer of decoration objects placed freely over the tile grid
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ObjectMap {
    objects: Vec<MapObject>,
}

impl ObjectMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn objects(&self) -> &[MapObject] {
        &self.objects
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Add an object to the layer
    pub fn place(&mut self, object: MapObject) {
        self.objects.push(object);
    }

    /// Remove the first object whose box overlaps the probe region.
    /// Returns the removed object, or `None` when nothing overlapped.
    pub fn remove_at(&mut self, x: i32, y: i32, width: i32, height: i32) -> Option<MapObject> {
        let position = self
            .objects
            .iter()
            .position(|o| o.overlaps_box(x, y, width, height))?;
        Some(self.objects.remove(position))
    }

    /// Topmost object containing the point, if any (later placements win)
    pub fn object_at(&self, x: i32, y: i32) -> Option<&MapObject> {
        self.objects.iter().rev().find(|o| o.contains_point(x, y))
    }
}
