//! Configuration and data files
//!
//! Two JSON documents drive the inventory:
//! - `InventoryConfig`: grid dimensions, slot size, screen size, empty icon
//! - `GameData`: the item catalog and the crafting combinations
//!
//! Missing fields fall back to defaults. Out-of-range values are clamped
//! rather than rejected.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::crafting::CombinationTable;
use crate::item::{ItemCatalog, ItemDefinition, ItemKindId};

/// File name looked up in the user's config directory
pub const CONFIG_FILE_NAME: &str = "inventory.json";

/// Sub-directory of the user's config directory
pub const CONFIG_DIR_NAME: &str = "slotcraft";

/// Largest number of slots along either side of the grid
pub const MAX_SLOTS_PER_SIDE: u32 = 256;

/// Largest slot width or height in pixels
pub const MAX_SLOT_SIZE: u32 = 4096;

/// Largest screen width or height in pixels
pub const MAX_SCREEN_SIZE: u32 = 16384;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Item kind {0} registered twice")]
    DuplicateItem(ItemKindId),

    #[error("Combination '{name}' references unknown item kind {kind}")]
    UnknownCombinationKind { name: String, kind: ItemKindId },
}

/// Layout and presentation settings for the inventory grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InventoryConfig {
    /// Rows of slots
    pub vertical_slots: u32,
    /// Columns of slots
    pub horizontal_slots: u32,
    /// Slot size in pixels
    pub slot_width: u32,
    pub slot_height: u32,
    /// Screen size the window is centered in
    pub screen_width: u32,
    pub screen_height: u32,
    /// Icon shown by empty slots
    pub empty_slot_icon: String,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        InventoryConfig {
            vertical_slots: 4,
            horizontal_slots: 6,
            slot_width: 70,
            slot_height: 70,
            screen_width: 1280,
            screen_height: 720,
            empty_slot_icon: "icons/empty_slot.png".to_string(),
        }
    }
}

impl InventoryConfig {
    /// Creates the default config with a different grid size
    pub fn with_grid(vertical_slots: u32, horizontal_slots: u32) -> Self {
        InventoryConfig {
            vertical_slots,
            horizontal_slots,
            ..Default::default()
        }
        .sanitized()
    }

    /// Clamps every dimension into `1..=max`
    ///
    /// The bounds keep the window size in screen pixels well inside `i32`.
    pub fn sanitized(mut self) -> Self {
        for (name, value, max) in [
            ("vertical_slots", &mut self.vertical_slots, MAX_SLOTS_PER_SIDE),
            ("horizontal_slots", &mut self.horizontal_slots, MAX_SLOTS_PER_SIDE),
            ("slot_width", &mut self.slot_width, MAX_SLOT_SIZE),
            ("slot_height", &mut self.slot_height, MAX_SLOT_SIZE),
            ("screen_width", &mut self.screen_width, MAX_SCREEN_SIZE),
            ("screen_height", &mut self.screen_height, MAX_SCREEN_SIZE),
        ] {
            let clamped = (*value).clamp(1, max);
            if clamped != *value {
                log::debug!("{} clamped from {} to {}", name, value, clamped);
                *value = clamped;
            }
        }
        self
    }

    /// Number of slots in the grid
    pub fn capacity(&self) -> usize {
        let side = |slots: u32| slots.clamp(1, MAX_SLOTS_PER_SIDE) as usize;
        side(self.vertical_slots) * side(self.horizontal_slots)
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: InventoryConfig = serde_json::from_str(json)?;
        Ok(config.sanitized())
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_json_str(&read_file(path.as_ref())?)
    }

    /// Default location of the config file in the user's config directory
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Loads the config from `path`, else the user config file, else defaults
    ///
    /// An explicit path that fails to load is an error. A missing user config
    /// file is not.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            return Self::load_from_file(path);
        }

        match Self::user_config_path() {
            Some(user_path) if user_path.exists() => {
                log::info!("Loading inventory config from {}", user_path.display());
                Self::load_from_file(user_path)
            }
            _ => Ok(Self::default()),
        }
    }
}

/// Item catalog and crafting combinations as authored in a data file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GameData {
    pub items: Vec<ItemDefinition>,
    pub combinations: CombinationTable,
}

impl GameData {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_json_str(&read_file(path.as_ref())?)
    }

    /// Builds the catalog and checks every combination against it
    pub fn into_parts(self) -> Result<(ItemCatalog, CombinationTable), ConfigError> {
        let catalog = ItemCatalog::from_definitions(self.items)?;

        for combination in self.combinations.iter() {
            for kind in [combination.item_kind_1, combination.item_kind_2, combination.result_kind] {
                if !catalog.exists(kind) {
                    return Err(ConfigError::UnknownCombinationKind {
                        name: combination.name.clone(),
                        kind,
                    });
                }
            }
        }

        Ok((catalog, self.combinations))
    }
}

fn read_file(path: &Path) -> Result<String, ConfigError> {
    fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })
}
