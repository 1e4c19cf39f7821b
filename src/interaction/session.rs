//! Drag-and-drop state machine for the inventory window
//!
//! One [`InteractionSession`] sits on top of an [`InventoryGrid`] and is fed
//! a [`PointerInput`] every frame:
//!
//! ```text
//! Idle --press on slot--> Pressed --move--> Dragging --release--> Idle
//!                            |                  |
//!                            +--release--> Idle (click)
//!                                               +--release on slot--> AwaitingChoice
//!                                                                          |
//!                                        choose / craft_item / cancel_choice --> Idle
//! ```
//!
//! The grid is never touched while dragging. The dragged slot is a clone
//! that only carries the on-screen position; every outcome is committed
//! with [`InventoryGrid::update_slot`].

use crate::crafting::{Combination, CombinationTable};
use crate::geometry::Point;
use crate::inventory::{InventoryError, InventoryGrid, Slot, SlotId};
use crate::item::{ItemCatalog, ItemHandle, ItemKindId, ItemWorld};
use super::input::PointerInput;
use super::resolution::{offered_actions, ResolutionAction};

/// Where the session is in the drag lifecycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    /// Button went down over `slot`; not yet moved
    Pressed { origin: Point, slot: SlotId },
    /// A detached copy of a slot follows the pointer
    Dragging { drag: Slot },
    /// A drag was released over `receiver` and the player must pick an action
    AwaitingChoice { drag: SlotId, receiver: SlotId },
}

/// What a single update or resolution did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    DragStarted(SlotId),
    /// Pressed and released on the same slot without dragging
    Clicked(SlotId),
    /// Released inside the window but not over another slot
    Returned(SlotId),
    /// Released outside the window; one instance left the inventory
    DroppedIntoWorld { slot: SlotId, item: ItemHandle },
    /// A single item was dropped onto an empty slot
    Exchanged { drag: SlotId, receiver: SlotId },
    ChoicePending { drag: SlotId, receiver: SlotId },
    Resolved { action: ResolutionAction, drag: SlotId, receiver: SlotId },
    Crafted { item: ItemHandle, slot: Option<SlotId> },
    /// A drag or pending choice was abandoned without changes
    Cancelled,
}

#[derive(Debug, Clone)]
pub struct InteractionSession {
    state: SessionState,
}

impl Default for InteractionSession {
    fn default() -> Self {
        Self::new()
    }
}

impl InteractionSession {
    pub fn new() -> Self {
        InteractionSession {
            state: SessionState::Idle,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.state, SessionState::Idle)
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, SessionState::Dragging { .. })
    }

    /// The slot copy being dragged, for drawing it under the pointer
    pub fn drag_slot(&self) -> Option<&Slot> {
        match &self.state {
            SessionState::Dragging { drag } => Some(drag),
            _ => None,
        }
    }

    /// `(drag, receiver)` while a choice is pending
    pub fn pending_choice(&self) -> Option<(SlotId, SlotId)> {
        match self.state {
            SessionState::AwaitingChoice { drag, receiver } => Some((drag, receiver)),
            _ => None,
        }
    }

    pub fn has_pending_choice(&self) -> bool {
        self.pending_choice().is_some()
    }

    /// Advances the drag lifecycle by one frame
    ///
    /// Pointer input is ignored while a choice is pending.
    pub fn update(
        &mut self,
        input: &PointerInput,
        grid: &mut InventoryGrid,
        world: &mut (impl ItemWorld + ?Sized),
    ) -> Option<SessionEvent> {
        match std::mem::replace(&mut self.state, SessionState::Idle) {
            SessionState::Idle => {
                if !input.pressed {
                    return None;
                }
                let slot = grid.slot_at(input.position)?;
                if input.released {
                    return Some(SessionEvent::Clicked(slot));
                }
                self.state = SessionState::Pressed {
                    origin: input.position,
                    slot,
                };
                None
            }

            SessionState::Pressed { origin, slot } => {
                if input.released || !input.held {
                    let on_same_slot = grid.slot_at(input.position) == Some(slot);
                    return (input.released && on_same_slot).then_some(SessionEvent::Clicked(slot));
                }

                // Empty slots cannot be dragged
                if input.position != origin && !grid.slot(slot).is_empty() {
                    let mut drag = grid.slot(slot).clone();
                    drag.follow_pointer(input.position);
                    self.state = SessionState::Dragging { drag };
                    log::debug!("dragging {}", slot);
                    return Some(SessionEvent::DragStarted(slot));
                }

                self.state = SessionState::Pressed { origin, slot };
                None
            }

            SessionState::Dragging { mut drag } => {
                if input.released || !input.held {
                    return self.release(drag, input.position, grid, world);
                }
                drag.follow_pointer(input.position);
                self.state = SessionState::Dragging { drag };
                None
            }

            pending @ SessionState::AwaitingChoice { .. } => {
                self.state = pending;
                None
            }
        }
    }

    /// Resolves a drag when the button goes up at `pointer`
    fn release(
        &mut self,
        mut drag: Slot,
        pointer: Point,
        grid: &mut InventoryGrid,
        world: &mut (impl ItemWorld + ?Sized),
    ) -> Option<SessionEvent> {
        let id = drag.id();

        // The grid may have gained items for this slot mid-drag
        drag.copy_contents_from(grid.slot(id));
        drag.restore_position();

        if !grid.window_area().contains_point(pointer) {
            let item = drag.pop(grid.empty_slot_icon());
            grid.update_slot(&drag);

            let Some(item) = item else {
                return Some(SessionEvent::Returned(id));
            };
            world.detach_and_drop(item, true);
            log::debug!("{} dropped out of {}", item, id);
            return Some(SessionEvent::DroppedIntoWorld { slot: id, item });
        }

        grid.update_slot(&drag);

        match grid.slot_at(pointer) {
            Some(receiver) if receiver != id => {
                let receiver_slot = grid.slot(receiver).clone();

                if receiver_slot.is_empty() && !drag.is_stacked() {
                    grid.exchange_slots(drag, receiver_slot);
                    return Some(SessionEvent::Exchanged { drag: id, receiver });
                }

                self.state = SessionState::AwaitingChoice { drag: id, receiver };
                Some(SessionEvent::ChoicePending { drag: id, receiver })
            }
            _ => Some(SessionEvent::Returned(id)),
        }
    }

    /// Actions the player may pick for the pending drop
    ///
    /// Empty when no choice is pending.
    pub fn offered_actions(
        &self,
        grid: &InventoryGrid,
        catalog: &ItemCatalog,
        combinations: &CombinationTable,
    ) -> Vec<ResolutionAction> {
        match self.pending_choice() {
            Some((drag, receiver)) => {
                offered_actions(grid.slot(drag), grid.slot(receiver), catalog, combinations)
            }
            None => Vec::new(),
        }
    }

    /// The combination the pending drop would craft, if any
    pub fn craftable<'a>(
        &self,
        grid: &InventoryGrid,
        combinations: &'a CombinationTable,
    ) -> Option<&'a Combination> {
        let (drag, receiver) = self.pending_choice()?;
        combinations.find(grid.slot(drag).kind()?, grid.slot(receiver).kind()?)
    }

    /// Applies one of the offered actions to the pending drop
    ///
    /// An action that is not offered is rejected and the choice stays
    /// pending.
    pub fn choose(
        &mut self,
        action: ResolutionAction,
        grid: &mut InventoryGrid,
        catalog: &ItemCatalog,
        combinations: &CombinationTable,
        world: &mut (impl ItemWorld + ?Sized),
    ) -> Result<SessionEvent, InventoryError> {
        let (drag_id, receiver_id) = self.pending_choice().ok_or(InventoryError::NoPendingChoice)?;

        let mut drag = grid.slot(drag_id).clone();
        let mut receiver = grid.slot(receiver_id).clone();

        if !offered_actions(&drag, &receiver, catalog, combinations).contains(&action) {
            return Err(InventoryError::ActionNotOffered(action));
        }

        let empty_icon = grid.empty_slot_icon().to_string();

        match action {
            ResolutionAction::MoveStack => {
                receiver.swap_contents(&mut drag);
                grid.update_slot(&receiver);
                grid.update_slot(&drag);
            }
            ResolutionAction::SeparateStack | ResolutionAction::Stack => {
                move_one(&mut drag, &mut receiver, &empty_icon);
                grid.update_slot(&receiver);
                grid.update_slot(&drag);
            }
            ResolutionAction::Swap => {
                grid.exchange_slots(drag, receiver);
            }
            ResolutionAction::Craft => {
                let combination = self
                    .craftable(grid, combinations)
                    .ok_or(InventoryError::ActionNotOffered(action))?;
                let item = world.spawn(&combination.name, combination.result_kind);
                return self.craft_item(item, combination.result_kind, grid, catalog, world);
            }
        }

        log::debug!("{} -> {}: {}", drag_id, receiver_id, action);
        self.state = SessionState::Idle;
        Ok(SessionEvent::Resolved {
            action,
            drag: drag_id,
            receiver: receiver_id,
        })
    }

    /// Consumes one instance from each side of the pending drop and stores
    /// `new_instance` in its place
    ///
    /// The consumed slots are written back first, so a slot emptied by the
    /// craft counts as free space. With no empty slot left the crafted item
    /// is dropped into the world.
    pub fn craft_item(
        &mut self,
        new_instance: ItemHandle,
        result_kind: ItemKindId,
        grid: &mut InventoryGrid,
        catalog: &ItemCatalog,
        world: &mut (impl ItemWorld + ?Sized),
    ) -> Result<SessionEvent, InventoryError> {
        let (drag_id, receiver_id) = self.pending_choice().ok_or(InventoryError::NoPendingChoice)?;
        let empty_icon = grid.empty_slot_icon().to_string();

        for id in [drag_id, receiver_id] {
            let mut slot = grid.slot(id).clone();
            if let Some(item) = slot.pop(&empty_icon) {
                world.destroy(item);
            }
            grid.update_slot(&slot);
        }

        world.attach_to_carrier(new_instance);

        let placed = match grid.find_empty_slot().map(|slot| slot.id()) {
            Some(id) => {
                let icon = match catalog.get(result_kind) {
                    Some(definition) => definition.icon.as_str(),
                    None => {
                        log::warn!("crafted kind {} missing from catalog", result_kind);
                        empty_icon.as_str()
                    }
                };
                let mut slot = grid.slot(id).clone();
                slot.push(new_instance, result_kind, icon);
                grid.update_slot(&slot);
                Some(id)
            }
            None => {
                log::info!("No room for crafted {}, dropping it", new_instance);
                world.detach_and_drop(new_instance, true);
                None
            }
        };

        self.state = SessionState::Idle;
        Ok(SessionEvent::Crafted {
            item: new_instance,
            slot: placed,
        })
    }

    /// Dismisses a pending choice, leaving both slots as they are
    pub fn cancel_choice(&mut self) -> Option<SessionEvent> {
        if !self.has_pending_choice() {
            return None;
        }
        self.state = SessionState::Idle;
        Some(SessionEvent::Cancelled)
    }

    /// Abandons whatever is in progress (the window is closing)
    ///
    /// A drag snaps back to its slot; the grid already holds its contents.
    pub fn interrupt(&mut self) -> Option<SessionEvent> {
        match std::mem::replace(&mut self.state, SessionState::Idle) {
            SessionState::Idle | SessionState::Pressed { .. } => None,
            SessionState::Dragging { .. } | SessionState::AwaitingChoice { .. } => {
                Some(SessionEvent::Cancelled)
            }
        }
    }
}

/// Moves the most recently added instance of `from` onto `to`
fn move_one(from: &mut Slot, to: &mut Slot, empty_icon: &str) {
    let (Some(kind), Some(item)) = (from.kind(), from.last()) else {
        return;
    };
    let icon = from.icon().to_string();
    from.pop(empty_icon);
    to.push(item, kind, &icon);
}
