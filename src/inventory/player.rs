use super::error::InventoryError;
use super::grid::InventoryGrid;
use super::slot::SlotId;
use crate::config::InventoryConfig;
use crate::crafting::CombinationTable;
use crate::interaction::{FrameInput, InteractionSession, PointerInput, ResolutionAction, SessionEvent};
use crate::item::{ItemCatalog, ItemHandle, ItemInstance, ItemKindId, ItemWorld};

/// What clicking a slot did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// A usable item was consumed
    Used(ItemHandle),
    /// The item is now held in the player's hand
    Equipped(ItemHandle),
    /// The held item was put away
    Unequipped(ItemHandle),
    /// Empty or stacked slots do nothing when clicked
    Ignored,
}

/// The player's inventory
///
/// This wraps the core [`InventoryGrid`] with everything the player
/// interacts with: the item catalog and crafting recipes, the drag/drop
/// session, the open/closed window and the item held in hand.
#[derive(Debug, Clone)]
pub struct PlayerInventory {
    grid: InventoryGrid,
    catalog: ItemCatalog,
    combinations: CombinationTable,
    session: InteractionSession,
    /// Item currently shown in the player's hand
    equipped: Option<ItemHandle>,
    visible: bool,
}

impl PlayerInventory {
    /// Creates an empty inventory with a closed window
    pub fn new(config: &InventoryConfig, catalog: ItemCatalog, combinations: CombinationTable) -> Self {
        PlayerInventory {
            grid: InventoryGrid::new(config),
            catalog,
            combinations,
            session: InteractionSession::new(),
            equipped: None,
            visible: false,
        }
    }

    pub fn grid(&self) -> &InventoryGrid {
        &self.grid
    }

    pub fn catalog(&self) -> &ItemCatalog {
        &self.catalog
    }

    pub fn combinations(&self) -> &CombinationTable {
        &self.combinations
    }

    pub fn session(&self) -> &InteractionSession {
        &self.session
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn equipped(&self) -> Option<ItemHandle> {
        self.equipped
    }

    /// Slot holding the equipped item
    pub fn equipped_slot(&self) -> Option<SlotId> {
        self.equipped.and_then(|item| self.grid.find_item(item))
    }

    /// Checked before starting a timed pickup
    pub fn has_space(&self) -> bool {
        self.grid.has_space()
    }

    /// Puts a picked-up item into the inventory
    pub fn add_item(
        &mut self,
        item: ItemInstance,
        world: &mut (impl ItemWorld + ?Sized),
    ) -> Result<SlotId, InventoryError> {
        self.grid.add_item(item, &self.catalog, world)
    }

    /// Opens or closes the inventory window
    ///
    /// Closing abandons a drag in progress and dismisses a pending choice.
    pub fn toggle(&mut self) -> Option<SessionEvent> {
        self.visible = !self.visible;
        log::debug!("inventory {}", if self.visible { "opened" } else { "closed" });

        if self.visible {
            None
        } else {
            self.session.interrupt()
        }
    }

    /// Processes one frame of input
    ///
    /// The toggle and dismiss keys are applied before the pointer, so a press
    /// in the same frame that opens the window or dismisses a choice still
    /// counts. Returns every session event of the frame in order. Pointer
    /// input is ignored while the window is closed.
    pub fn handle_frame(
        &mut self,
        frame: &FrameInput,
        world: &mut (impl ItemWorld + ?Sized),
    ) -> Vec<SessionEvent> {
        let mut events = Vec::new();

        if frame.toggle_inventory {
            events.extend(self.toggle());
        }
        if frame.dismiss {
            events.extend(self.cancel_choice());
        }
        events.extend(self.update(&frame.pointer, world));

        events
    }

    /// Advances the drag session by one frame
    pub fn update(
        &mut self,
        pointer: &PointerInput,
        world: &mut (impl ItemWorld + ?Sized),
    ) -> Option<SessionEvent> {
        if !self.visible {
            return None;
        }

        let event = self.session.update(pointer, &mut self.grid, world);
        if let Some(SessionEvent::Clicked(slot)) = event {
            if let Err(e) = self.activate_slot(slot, world) {
                log::warn!("Click on {} ignored: {}", slot, e);
            }
        }
        self.refresh_equipped(world);
        event
    }

    /// Actions offered for the pending drop, in presentation order
    pub fn offered_actions(&self) -> Vec<ResolutionAction> {
        self.session.offered_actions(&self.grid, &self.catalog, &self.combinations)
    }

    /// Button label for an offered action ("Craft Torch" for crafting)
    pub fn action_label(&self, action: ResolutionAction) -> String {
        match (action, self.session.craftable(&self.grid, &self.combinations)) {
            (ResolutionAction::Craft, Some(combination)) => format!("Craft {}", combination.name),
            _ => action.label().to_string(),
        }
    }

    /// Applies the player's choice for the pending drop
    pub fn choose(
        &mut self,
        action: ResolutionAction,
        world: &mut (impl ItemWorld + ?Sized),
    ) -> Result<SessionEvent, InventoryError> {
        let event = self.session.choose(
            action,
            &mut self.grid,
            &self.catalog,
            &self.combinations,
            world,
        )?;
        self.refresh_equipped(world);
        Ok(event)
    }

    /// Crafts `new_instance` out of the pending drop's two slots
    pub fn craft_item(
        &mut self,
        new_instance: ItemHandle,
        result_kind: ItemKindId,
        world: &mut (impl ItemWorld + ?Sized),
    ) -> Result<SessionEvent, InventoryError> {
        let event = self.session.craft_item(
            new_instance,
            result_kind,
            &mut self.grid,
            &self.catalog,
            world,
        )?;
        self.refresh_equipped(world);
        Ok(event)
    }

    /// Dismisses the pending choice without changing any slot
    pub fn cancel_choice(&mut self) -> Option<SessionEvent> {
        self.session.cancel_choice()
    }

    /// Clicks a slot
    ///
    /// Only slots holding exactly one item respond, and nothing happens while
    /// a choice is pending. A usable item is consumed; anything else is
    /// equipped, or put away if it already was.
    pub fn activate_slot(
        &mut self,
        id: SlotId,
        world: &mut (impl ItemWorld + ?Sized),
    ) -> Result<Activation, InventoryError> {
        let slot = self.grid.get(id).ok_or(InventoryError::InvalidSlot(id))?;

        if self.session.has_pending_choice() || slot.is_stacked() {
            return Ok(Activation::Ignored);
        }
        let (Some(kind), Some(item)) = (slot.kind(), slot.last()) else {
            return Ok(Activation::Ignored);
        };

        let usable = self.catalog.get(kind).is_some_and(|definition| definition.usable);
        if usable {
            world.use_item(item);
            world.destroy(item);

            let mut edit = slot.clone();
            edit.pop(self.grid.empty_slot_icon());
            self.grid.update_slot(&edit);
            self.refresh_equipped(world);

            log::debug!("used {} from {}", item, id);
            return Ok(Activation::Used(item));
        }

        if self.equipped == Some(item) {
            world.set_equipped(item, false);
            self.equipped = None;
            return Ok(Activation::Unequipped(item));
        }

        if let Some(previous) = self.equipped.replace(item) {
            world.set_equipped(previous, false);
        }
        world.set_equipped(item, true);
        Ok(Activation::Equipped(item))
    }

    /// Puts the equipped item away once it has left the inventory
    fn refresh_equipped(&mut self, world: &mut (impl ItemWorld + ?Sized)) {
        if let Some(item) = self.equipped {
            if self.grid.find_item(item).is_none() {
                world.set_equipped(item, false);
                self.equipped = None;
            }
        }
    }
}

impl Default for PlayerInventory {
    fn default() -> Self {
        PlayerInventory::new(
            &InventoryConfig::default(),
            ItemCatalog::create_default(),
            CombinationTable::create_default(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;
    use crate::item::{RecordingWorld, WorldEvent};

    fn open_inventory() -> PlayerInventory {
        let mut inventory = PlayerInventory::new(
            &InventoryConfig::with_grid(2, 3),
            ItemCatalog::create_default(),
            CombinationTable::create_default(),
        );
        inventory.toggle();
        inventory
    }

    fn add(inventory: &mut PlayerInventory, world: &mut RecordingWorld, handle: u64, kind: u32) -> SlotId {
        inventory
            .add_item(ItemInstance::new(ItemHandle(handle), ItemKindId(kind)), world)
            .unwrap()
    }

    fn click(inventory: &mut PlayerInventory, world: &mut RecordingWorld, slot: SlotId) -> Option<SessionEvent> {
        let at = inventory.grid().slot(slot).origin_area().top_left().offset(5, 5);
        inventory.update(&PointerInput::press(at), world);
        inventory.update(&PointerInput::release(at), world)
    }

    #[test]
    fn test_closed_inventory_ignores_pointer() {
        let mut inventory = PlayerInventory::default();
        let mut world = RecordingWorld::default();
        add(&mut inventory, &mut world, 1, 4);

        assert!(!inventory.is_visible());
        assert_eq!(click(&mut inventory, &mut world, SlotId(0)), None);
        assert_eq!(inventory.equipped(), None);
    }

    #[test]
    fn test_clicking_usable_item_consumes_it() {
        let mut inventory = open_inventory();
        let mut world = RecordingWorld::default();
        let slot = add(&mut inventory, &mut world, 1, 1);
        world.clear();

        assert_eq!(click(&mut inventory, &mut world, slot), Some(SessionEvent::Clicked(slot)));

        assert!(inventory.grid().slot(slot).is_empty());
        assert_eq!(
            world.events,
            vec![WorldEvent::Used(ItemHandle(1)), WorldEvent::Destroyed(ItemHandle(1))]
        );
    }

    #[test]
    fn test_stacked_slot_is_not_activated() {
        let mut inventory = open_inventory();
        let mut world = RecordingWorld::default();
        let slot = add(&mut inventory, &mut world, 1, 1);
        add(&mut inventory, &mut world, 2, 1);

        assert_eq!(inventory.activate_slot(slot, &mut world), Ok(Activation::Ignored));
        assert_eq!(inventory.grid().slot(slot).stacks(), 2);
    }

    #[test]
    fn test_equip_toggles_and_clears_on_drop() {
        let mut inventory = open_inventory();
        let mut world = RecordingWorld::default();
        let slot = add(&mut inventory, &mut world, 1, 4);

        assert_eq!(inventory.activate_slot(slot, &mut world), Ok(Activation::Equipped(ItemHandle(1))));
        assert_eq!(inventory.equipped_slot(), Some(slot));
        assert_eq!(inventory.activate_slot(slot, &mut world), Ok(Activation::Unequipped(ItemHandle(1))));
        assert_eq!(inventory.equipped(), None);

        inventory.activate_slot(slot, &mut world).unwrap();
        let from = inventory.grid().slot(slot).origin_area().top_left().offset(5, 5);
        let outside = Point::new(-100, -100);
        inventory.update(&PointerInput::press(from), &mut world);
        inventory.update(&PointerInput::hold(outside), &mut world);
        inventory.update(&PointerInput::release(outside), &mut world);

        assert!(inventory.grid().slot(slot).is_empty());
        assert_eq!(inventory.equipped(), None);
        assert_eq!(world.events.last(), Some(&WorldEvent::Unequipped(ItemHandle(1))));
    }

    #[test]
    fn test_activating_foreign_slot_is_an_error() {
        let mut inventory = open_inventory();
        let mut world = RecordingWorld::default();

        assert_eq!(
            inventory.activate_slot(SlotId(99), &mut world),
            Err(InventoryError::InvalidSlot(SlotId(99)))
        );
    }

    #[test]
    fn test_equipping_another_item_puts_previous_away() {
        let mut inventory = open_inventory();
        let mut world = RecordingWorld::default();
        let first = add(&mut inventory, &mut world, 1, 4);
        let second = add(&mut inventory, &mut world, 2, 4);

        inventory.activate_slot(first, &mut world).unwrap();
        inventory.activate_slot(second, &mut world).unwrap();

        assert_eq!(inventory.equipped(), Some(ItemHandle(2)));
        assert!(world.events.contains(&WorldEvent::Unequipped(ItemHandle(1))));
    }

    #[test]
    fn test_closing_window_cancels_pending_choice() {
        let mut inventory = open_inventory();
        let mut world = RecordingWorld::default();
        let torch = add(&mut inventory, &mut world, 1, 4);
        let stone = add(&mut inventory, &mut world, 2, 5);

        let from = inventory.grid().slot(torch).origin_area().top_left().offset(5, 5);
        let to = inventory.grid().slot(stone).origin_area().top_left().offset(5, 5);
        inventory.update(&PointerInput::press(from), &mut world);
        inventory.update(&PointerInput::hold(to), &mut world);
        inventory.update(&PointerInput::release(to), &mut world);
        assert_eq!(inventory.offered_actions(), vec![ResolutionAction::Swap]);

        let frame = FrameInput {
            toggle_inventory: true,
            ..Default::default()
        };
        assert_eq!(inventory.handle_frame(&frame, &mut world), vec![SessionEvent::Cancelled]);
        assert!(!inventory.is_visible());
        assert!(inventory.offered_actions().is_empty());
    }

    #[test]
    fn test_press_in_opening_frame_is_kept() {
        let mut inventory = PlayerInventory::new(
            &InventoryConfig::with_grid(2, 3),
            ItemCatalog::create_default(),
            CombinationTable::create_default(),
        );
        let mut world = RecordingWorld::default();
        let torch = add(&mut inventory, &mut world, 1, 4);
        let at = inventory.grid().slot(torch).origin_area().top_left().offset(5, 5);

        let frame = FrameInput {
            pointer: PointerInput::press(at),
            toggle_inventory: true,
            dismiss: false,
        };
        assert!(inventory.handle_frame(&frame, &mut world).is_empty());
        assert!(inventory.is_visible());

        assert_eq!(
            inventory.update(&PointerInput::hold(at.offset(10, 0)), &mut world),
            Some(SessionEvent::DragStarted(torch))
        );
    }

    #[test]
    fn test_dismiss_key_cancels_pending_choice() {
        let mut inventory = open_inventory();
        let mut world = RecordingWorld::default();
        let cloth = add(&mut inventory, &mut world, 1, 3);
        let stick = add(&mut inventory, &mut world, 2, 2);

        let from = inventory.grid().slot(cloth).origin_area().top_left().offset(5, 5);
        let to = inventory.grid().slot(stick).origin_area().top_left().offset(5, 5);
        inventory.update(&PointerInput::press(from), &mut world);
        inventory.update(&PointerInput::hold(to), &mut world);
        inventory.update(&PointerInput::release(to), &mut world);
        assert_eq!(inventory.action_label(ResolutionAction::Craft), "Craft Torch");

        let frame = FrameInput {
            dismiss: true,
            ..Default::default()
        };
        assert_eq!(inventory.handle_frame(&frame, &mut world), vec![SessionEvent::Cancelled]);
        assert!(inventory.is_visible());
        assert!(!inventory.session().has_pending_choice());
    }
}
