use thiserror::Error;

use super::slot::SlotId;
use crate::interaction::ResolutionAction;
use crate::item::ItemKindId;

/// Errors that can occur during inventory operations
///
/// None of these are fatal: the operation that produced one left every slot
/// untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InventoryError {
    /// No empty slot and no stack with room left
    #[error("Inventory is full")]
    InventoryFull,

    /// Item kind doesn't exist in the catalog
    #[error("Unknown item kind: {0}")]
    UnknownItem(ItemKindId),

    /// Slot id outside the grid
    #[error("Invalid slot: {0}")]
    InvalidSlot(SlotId),

    /// A resolution action was chosen with no drop awaiting a choice
    #[error("No choice is pending")]
    NoPendingChoice,

    /// The chosen action is not among the ones offered for this drop
    #[error("{0:?} is not offered for this drop")]
    ActionNotOffered(ResolutionAction),
}
