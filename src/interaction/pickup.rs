//! Hold-to-pick-up interaction
//!
//! The player looks at an item and holds the interact key; once the key has
//! been held for the item's `interact_time` the item goes into the
//! inventory. Time is accumulated frame by frame, nothing blocks.

use crate::inventory::{InventoryError, PlayerInventory, SlotId};
use crate::item::{ItemInstance, ItemWorld};

/// One frame of interaction input
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickupInput {
    /// The item in reach under the crosshair, if any
    pub target: Option<ItemInstance>,
    /// The interact key went down this frame
    pub key_pressed: bool,
    /// The interact key is down
    pub key_held: bool,
    /// Seconds since the last frame
    pub delta_time: f32,
}

/// Result of a pickup frame
#[derive(Debug, Clone, PartialEq)]
pub enum PickupProgress {
    /// Nothing being picked up
    Idle,
    /// Holding; `fraction` runs from 0 to 1
    Holding { fraction: f32 },
    /// The hold completed and `add_item` was called
    Completed(Result<SlotId, InventoryError>),
}

#[derive(Debug, Clone, Default)]
pub struct PickupInteraction {
    target: Option<ItemInstance>,
    elapsed: f32,
    armed: bool,
}

impl PickupInteraction {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seconds the key has been held on the current target
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    fn reset(&mut self) {
        self.elapsed = 0.0;
        self.armed = false;
    }

    /// Advances the hold timer by one frame
    ///
    /// The key must go down while looking at the target; holding it from
    /// before does not count. A full inventory never starts the timer.
    pub fn update(
        &mut self,
        input: &PickupInput,
        inventory: &mut PlayerInventory,
        world: &mut (impl ItemWorld + ?Sized),
    ) -> PickupProgress {
        if input.target != self.target {
            self.target = input.target;
            self.reset();
        }

        let Some(target) = self.target else {
            return PickupProgress::Idle;
        };

        if input.key_pressed {
            self.armed = true;
        }

        if !(input.key_held && self.armed) {
            self.reset();
            return PickupProgress::Idle;
        }

        if !inventory.has_space() {
            self.elapsed = 0.0;
            return PickupProgress::Idle;
        }

        let required = inventory
            .catalog()
            .get(target.kind)
            .map_or(f32::MAX, |definition| definition.interact_time);

        self.elapsed += input.delta_time;
        if self.elapsed < required {
            return PickupProgress::Holding {
                fraction: (self.elapsed / required).clamp(0.0, 1.0),
            };
        }

        self.reset();
        let result = inventory.add_item(target, world);
        if result.is_ok() {
            // The entity is now in the inventory, not under the crosshair
            self.target = None;
        }
        PickupProgress::Completed(result)
    }
}
