//! Slot-based document persistence
//!
//! The editor offers a fixed number of save slots, each backed by one JSON
//! file. Slots load lazily and a missing file is simply an empty slot.

mod file;

pub use file::SaveError;

use std::path::{Path, PathBuf};
use tilebrush_core::MapDocument;

/// Number of save slots the editor offers
pub const MAX_SAVE_SLOTS: usize = 4;

/// One save slot; empty until a document is saved into or loaded from it
#[derive(Debug, Clone, Default)]
pub struct SaveSlot {
    pub document: Option<MapDocument>,
}

impl SaveSlot {
    pub fn is_empty(&self) -> bool {
        self.document.is_none()
    }
}

/// Manages the editor's save slots and their on-disk files
#[derive(Debug)]
pub struct SaveManager {
    root: PathBuf,
    slots: Vec<SaveSlot>,
}

impl SaveManager {
    /// Manage slots under an explicit directory (tests, portable installs)
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            root,
            slots: vec![SaveSlot::default(); MAX_SAVE_SLOTS],
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn slot(&self, index: usize) -> Option<&SaveSlot> {
        self.slots.get(index)
    }

    pub fn is_empty(&self, index: usize) -> bool {
        match self.slots.get(index) {
            Some(slot) => slot.is_empty(),
            None => true,
        }
    }
}
