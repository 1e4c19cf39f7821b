//! slotcraft: a slot-grid player inventory
//!
//! Items are picked up into a fixed grid of slots, stacked up to their
//! kind's limit, rearranged by dragging slots around the inventory window
//! and combined into new items through crafting recipes.
//!
//! The crate has no renderer or scene of its own. Input arrives as
//! [`interaction::InputEvent`]s and every effect on item entities goes out
//! through the [`item::ItemWorld`] trait.

pub mod config;
pub mod crafting;
pub mod geometry;
pub mod interaction;
pub mod inventory;
pub mod item;

pub use config::{ConfigError, GameData, InventoryConfig};
pub use crafting::{Combination, CombinationTable};
pub use inventory::{InventoryError, InventoryGrid, PlayerInventory, Slot, SlotId};
pub use item::{ItemCatalog, ItemDefinition, ItemHandle, ItemInstance, ItemKindId, ItemWorld};
