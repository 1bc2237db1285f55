//! Save slot file operations

use super::{SaveManager, MAX_SAVE_SLOTS};
use directories::ProjectDirs;
use std::path::PathBuf;
use tilebrush_core::{MapDocument, SaveStamp};

#[derive(Debug)]
pub enum SaveError {
    IoError(String),
    ParseError(String),
    SerializeError(String),
    NoDataDir,
    BadSlot(usize),
}

impl std::fmt::Display for SaveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SaveError::IoError(e) => write!(f, "IO error: {}", e),
            SaveError::ParseError(e) => write!(f, "Parse error: {}", e),
            SaveError::SerializeError(e) => write!(f, "Serialize error: {}", e),
            SaveError::NoDataDir => write!(f, "Could not determine data directory"),
            SaveError::BadSlot(index) => write!(f, "No such save slot: {}", index),
        }
    }
}

impl std::error::Error for SaveError {}

fn slot_file_name(index: usize) -> String {
    format!("slot_{}.json", index)
}

impl SaveManager {
    /// Platform data directory for save files
    pub fn data_dir() -> Option<PathBuf> {
        ProjectDirs::from("com", "tilebrush", "tilebrush")
            .map(|dirs| dirs.data_dir().to_path_buf())
    }

    /// Manage slots under the platform data directory
    pub fn new() -> Result<Self, SaveError> {
        let root = Self::data_dir().ok_or(SaveError::NoDataDir)?;
        Ok(Self::with_root(root))
    }

    /// On-disk path of a slot's file
    pub fn slot_path(&self, index: usize) -> PathBuf {
        self.root().join(slot_file_name(index))
    }

    /// Write a document into a slot, stamping it with the caller's clock
    pub fn save_to(
        &mut self,
        index: usize,
        mut document: MapDocument,
        stamp: SaveStamp,
    ) -> Result<(), SaveError> {
        if index >= MAX_SAVE_SLOTS {
            return Err(SaveError::BadSlot(index));
        }

        document.saved_at = Some(stamp);

        std::fs::create_dir_all(self.root()).map_err(|e| SaveError::IoError(e.to_string()))?;

        let content = serde_json::to_string_pretty(&document)
            .map_err(|e| SaveError::SerializeError(e.to_string()))?;

        let path = self.slot_path(index);
        std::fs::write(&path, content).map_err(|e| SaveError::IoError(e.to_string()))?;

        tracing::info!("saved slot {} to {:?}", index, path);
        self.slots[index].document = Some(document);
        Ok(())
    }

    /// Load one slot from disk. A missing file empties the slot and is not
    /// an error; only unreadable or malformed files are.
    pub fn load_slot(&mut self, index: usize) -> Result<Option<&MapDocument>, SaveError> {
        if index >= MAX_SAVE_SLOTS {
            return Err(SaveError::BadSlot(index));
        }

        let path = self.slot_path(index);
        if !path.exists() {
            self.slots[index].document = None;
            return Ok(None);
        }

        let content =
            std::fs::read_to_string(&path).map_err(|e| SaveError::IoError(e.to_string()))?;
        let document: MapDocument =
            serde_json::from_str(&content).map_err(|e| SaveError::ParseError(e.to_string()))?;

        self.slots[index].document = Some(document);
        Ok(self.slots[index].document.as_ref())
    }

    /// Load every slot, logging and skipping the ones that fail
    pub fn load_all(&mut self) {
        for index in 0..MAX_SAVE_SLOTS {
            if let Err(e) = self.load_slot(index) {
                tracing::warn!("could not load save slot {}: {}", index, e);
            }
        }
    }
}
