// Inventory module
//
// The slot grid and the player-facing wrapper around it:
// - Slots holding stacks of one item kind
// - Row-major grid layout inside a centered window
// - Player inventory with drag/drop session and equipped item

pub mod error;
pub mod grid;
pub mod layout;
pub mod player;
pub mod slot;

// Re-export main types
pub use error::InventoryError;
pub use grid::InventoryGrid;
pub use layout::GridLayout;
pub use player::{Activation, PlayerInventory};
pub use slot::{Slot, SlotId};
