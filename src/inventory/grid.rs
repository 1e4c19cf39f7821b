use crate::config::InventoryConfig;
use crate::geometry::{Point, Rect};
use crate::item::{ItemCatalog, ItemHandle, ItemInstance, ItemKindId, ItemWorld};
use super::error::InventoryError;
use super::layout::GridLayout;
use super::slot::{Slot, SlotId};

/// Fixed-size grid of inventory slots
///
/// Built once from configuration and never resized. Slots are stored so
/// that `slots[id.0].id() == id` for the grid's whole lifetime; callers work
/// on clones of slots and commit them back with [`InventoryGrid::update_slot`],
/// which is the only way to change a slot from outside this module.
#[derive(Debug, Clone)]
pub struct InventoryGrid {
    slots: Vec<Slot>,
    layout: GridLayout,
    empty_slot_icon: String,
}

impl InventoryGrid {
    /// Builds `vertical * horizontal` empty slots with sequential ids
    ///
    /// Both dimensions are clamped to at least 1.
    pub fn new(config: &InventoryConfig) -> Self {
        let layout = GridLayout::new(config);
        let slots = (0..layout.capacity())
            .map(|index| Slot::empty(SlotId(index), layout.slot_rect(index), &config.empty_slot_icon))
            .collect();

        InventoryGrid {
            slots,
            layout,
            empty_slot_icon: config.empty_slot_icon.clone(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn layout(&self) -> &GridLayout {
        &self.layout
    }

    /// The inventory window's screen area
    pub fn window_area(&self) -> Rect {
        self.layout.window()
    }

    pub fn empty_slot_icon(&self) -> &str {
        &self.empty_slot_icon
    }

    /// Returns the slot with this id
    ///
    /// # Panics
    /// If the id is outside the grid.
    pub fn slot(&self, id: SlotId) -> &Slot {
        &self.slots[id.index()]
    }

    pub fn get(&self, id: SlotId) -> Option<&Slot> {
        self.slots.get(id.index())
    }

    /// All slots in ascending id order
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// The slot whose layout area contains `point`
    pub fn slot_at(&self, point: Point) -> Option<SlotId> {
        self.layout
            .index_at(point)
            .filter(|&index| index < self.slots.len())
            .map(SlotId)
    }

    /// Returns true if at least one slot is empty
    pub fn has_space(&self) -> bool {
        self.slots.iter().any(|slot| slot.is_empty())
    }

    /// First empty slot in id order
    pub fn find_empty_slot(&self) -> Option<&Slot> {
        self.slots.iter().find(|slot| slot.is_empty())
    }

    /// All slots holding `kind`, in ascending id order
    pub fn find_slots_by_kind(&self, kind: ItemKindId) -> Vec<&Slot> {
        self.slots
            .iter()
            .filter(|slot| slot.kind() == Some(kind))
            .collect()
    }

    /// Finds the slot holding a specific item instance
    pub fn find_item(&self, item: ItemHandle) -> Option<SlotId> {
        self.slots
            .iter()
            .find(|slot| slot.contains_item(item))
            .map(|slot| slot.id())
    }

    /// Total number of item instances in the grid
    pub fn item_count(&self) -> usize {
        self.slots.iter().map(|slot| slot.stacks()).sum()
    }

    /// Counts how many instances of a kind the grid holds
    pub fn count_kind(&self, kind: ItemKindId) -> usize {
        self.find_slots_by_kind(kind)
            .iter()
            .map(|slot| slot.stacks())
            .sum()
    }

    /// Commits a working copy of a slot back into the grid
    ///
    /// Copies kind, contents and icon into the slot with the same id. The
    /// stored slot keeps its own layout position, so a copy that was being
    /// dragged around never moves the grid slot.
    ///
    /// # Panics
    /// If no slot has `target`'s id. Slot ids never change, so this only
    /// happens when a slot from a different grid is written back.
    pub fn update_slot(&mut self, target: &Slot) {
        let index = target.id().index();
        assert!(
            index < self.slots.len(),
            "write-back of {} into a grid of {} slots",
            target.id(),
            self.slots.len()
        );

        let slot = &mut self.slots[index];
        assert_eq!(slot.id(), target.id(), "slot ids out of step with positions");
        slot.copy_contents_from(target);
    }

    /// Returns an emptied copy of `slot` without writing it back
    pub fn reset_slot(&self, slot: &Slot) -> Slot {
        let mut reset = slot.clone();
        reset.clear(&self.empty_slot_icon);
        reset
    }

    /// Swaps the full contents of two slot copies and writes both back
    ///
    /// Does nothing when `a` is empty. Returns whether anything was exchanged.
    /// Applying it twice to the same pair restores both slots.
    pub fn exchange_slots(&mut self, mut a: Slot, mut b: Slot) -> bool {
        if a.is_empty() {
            return false;
        }

        a.swap_contents(&mut b);
        self.update_slot(&a);
        self.update_slot(&b);
        true
    }

    /// Puts a picked-up item into the inventory
    ///
    /// # Strategy
    /// 1. Refuse if no slot is empty
    /// 2. Stackable kinds go on the first same-kind stack with room
    /// 3. Otherwise the first empty slot starts a new stack
    ///
    /// Tells the world the item was picked up once it has a slot. Returns the
    /// id of the slot it went into.
    pub fn add_item(
        &mut self,
        item: ItemInstance,
        catalog: &ItemCatalog,
        world: &mut (impl ItemWorld + ?Sized),
    ) -> Result<SlotId, InventoryError> {
        if !self.has_space() {
            log::warn!("No available slots in inventory for {} to be added", item.handle);
            return Err(InventoryError::InventoryFull);
        }

        let definition = catalog
            .get(item.kind)
            .ok_or(InventoryError::UnknownItem(item.kind))?;

        let stack_target = if definition.is_stackable() {
            self.find_slots_by_kind(item.kind)
                .into_iter()
                .find(|slot| slot.stacks() < definition.max_stack_amount as usize)
                .map(|slot| slot.id())
        } else {
            None
        };

        let target = match stack_target {
            Some(id) => id,
            None => self
                .find_empty_slot()
                .map(|slot| slot.id())
                .ok_or(InventoryError::InventoryFull)?,
        };

        let mut edit = self.slot(target).clone();
        edit.push(item.handle, item.kind, &definition.icon);

        world.attach_to_carrier(item.handle);
        self.update_slot(&edit);

        log::debug!("{} ({}) added to {}", item.handle, definition.name, target);
        Ok(target)
    }
}
