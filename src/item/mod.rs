// Item system module
//
// This module provides the item side of slotcraft:
// - Item kind ids, instance handles and definitions
// - The item catalog for centralized lookup
// - The world-presence callbacks fired when items enter or leave the inventory

pub mod definition;
pub mod instance;
pub mod registry;
pub mod world;

// Re-export main types for convenient access
pub use definition::ItemDefinition;
pub use instance::{ItemHandle, ItemInstance, ItemKindId};
pub use registry::ItemCatalog;
pub use world::{ItemWorld, RecordingWorld, WorldEvent};
