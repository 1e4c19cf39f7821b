use std::fmt;

use serde::{Deserialize, Serialize};

use crate::crafting::CombinationTable;
use crate::inventory::Slot;
use crate::item::ItemCatalog;

/// What the player can do with a drag released over another slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResolutionAction {
    /// Receiver is empty: move the whole stack into it
    MoveStack,
    /// Receiver is empty: move one instance into it
    SeparateStack,
    /// Same kind: move one instance onto the receiver's stack
    Stack,
    /// Exchange the two slots' full contents
    Swap,
    /// Consume one of each and create the combination's result
    Craft,
}

impl ResolutionAction {
    /// Button label for the action
    pub fn label(self) -> &'static str {
        match self {
            ResolutionAction::MoveStack => "Move Stack",
            ResolutionAction::SeparateStack => "Separate Stack",
            ResolutionAction::Stack => "Stack Items",
            ResolutionAction::Swap => "Swap Items",
            ResolutionAction::Craft => "Craft",
        }
    }
}

impl fmt::Display for ResolutionAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Actions available for dropping `drag` onto `receiver`
///
/// Returned in the order they are presented to the player. Empty when the
/// drop needs no choice (a single item onto an empty slot is exchanged
/// straight away).
///
/// Stacks are hard-capped: `Stack` is left out while the receiver already
/// holds `max_stack_amount` instances.
pub fn offered_actions(
    drag: &Slot,
    receiver: &Slot,
    catalog: &ItemCatalog,
    combinations: &CombinationTable,
) -> Vec<ResolutionAction> {
    let mut actions = Vec::new();

    if receiver.is_empty() {
        if drag.is_stacked() {
            actions.push(ResolutionAction::MoveStack);
            actions.push(ResolutionAction::SeparateStack);
        }
        return actions;
    }

    if let (Some(drag_kind), Some(receiver_kind)) = (drag.kind(), receiver.kind()) {
        let room = receiver.stacks() < catalog.max_stack_amount(receiver_kind) as usize;
        if drag_kind == receiver_kind && room {
            actions.push(ResolutionAction::Stack);
        }
    }

    actions.push(ResolutionAction::Swap);

    if let (Some(drag_kind), Some(receiver_kind)) = (drag.kind(), receiver.kind()) {
        if combinations.find(drag_kind, receiver_kind).is_some() {
            actions.push(ResolutionAction::Craft);
        }
    }

    actions
}
