//! World-presence callbacks for item entities
//!
//! The inventory owns slots, not entities. Whenever an item enters or leaves
//! the inventory the world is told through [`ItemWorld`] so it can hide the
//! entity, re-enable its physics, apply its use effect and so on.

use super::instance::{ItemHandle, ItemKindId};

/// Side effects the inventory triggers on item entities
pub trait ItemWorld {
    /// The item was picked up: parent it to the carrier and hide it
    fn attach_to_carrier(&mut self, item: ItemHandle);

    /// The item left the inventory: show it again at the carrier's position
    ///
    /// `with_impulse` pushes the item away from the carrier.
    fn detach_and_drop(&mut self, item: ItemHandle, with_impulse: bool);

    /// The item was consumed and must be removed from the world
    fn destroy(&mut self, item: ItemHandle);

    /// Applies the item's use effect (healing and similar)
    fn use_item(&mut self, item: ItemHandle);

    /// Shows or hides the item as the one held in the player's hand
    fn set_equipped(&mut self, item: ItemHandle, equipped: bool);

    /// Creates a new entity for a crafted item and returns its handle
    fn spawn(&mut self, name: &str, kind: ItemKindId) -> ItemHandle;
}

/// A world side effect, as recorded by [`RecordingWorld`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorldEvent {
    Attached(ItemHandle),
    Dropped { item: ItemHandle, with_impulse: bool },
    Destroyed(ItemHandle),
    Used(ItemHandle),
    Equipped(ItemHandle),
    Unequipped(ItemHandle),
    Spawned { item: ItemHandle, name: String, kind: ItemKindId },
}

/// An [`ItemWorld`] with no scene behind it
///
/// Every callback is logged and appended to `events`. Spawned handles are
/// allocated from `next_handle`, counting up.
#[derive(Debug, Clone, Default)]
pub struct RecordingWorld {
    pub events: Vec<WorldEvent>,
    next_handle: u64,
}

impl RecordingWorld {
    /// Creates a world whose spawned handles start at `first_handle`
    pub fn starting_at(first_handle: u64) -> Self {
        RecordingWorld {
            events: Vec::new(),
            next_handle: first_handle,
        }
    }

    /// Counts recorded events matching a predicate
    pub fn count(&self, predicate: impl Fn(&WorldEvent) -> bool) -> usize {
        self.events.iter().filter(|event| predicate(event)).count()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl ItemWorld for RecordingWorld {
    fn attach_to_carrier(&mut self, item: ItemHandle) {
        log::debug!("world: {} attached to carrier", item);
        self.events.push(WorldEvent::Attached(item));
    }

    fn detach_and_drop(&mut self, item: ItemHandle, with_impulse: bool) {
        log::debug!("world: {} dropped (impulse: {})", item, with_impulse);
        self.events.push(WorldEvent::Dropped { item, with_impulse });
    }

    fn destroy(&mut self, item: ItemHandle) {
        log::debug!("world: {} destroyed", item);
        self.events.push(WorldEvent::Destroyed(item));
    }

    fn use_item(&mut self, item: ItemHandle) {
        log::debug!("world: {} used", item);
        self.events.push(WorldEvent::Used(item));
    }

    fn set_equipped(&mut self, item: ItemHandle, equipped: bool) {
        log::debug!("world: {} equipped = {}", item, equipped);
        self.events.push(if equipped {
            WorldEvent::Equipped(item)
        } else {
            WorldEvent::Unequipped(item)
        });
    }

    fn spawn(&mut self, name: &str, kind: ItemKindId) -> ItemHandle {
        let item = ItemHandle(self.next_handle);
        self.next_handle += 1;
        log::debug!("world: spawned {} as {} ({})", name, item, kind);
        self.events.push(WorldEvent::Spawned {
            item,
            name: name.to_string(),
            kind,
        });
        item
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_allocates_sequential_handles() {
        let mut world = RecordingWorld::starting_at(100);

        let a = world.spawn("Torch", ItemKindId(4));
        let b = world.spawn("Torch", ItemKindId(4));

        assert_eq!(a, ItemHandle(100));
        assert_eq!(b, ItemHandle(101));
        assert_eq!(world.count(|e| matches!(e, WorldEvent::Spawned { .. })), 2);
    }

    #[test]
    fn test_equip_events() {
        let mut world = RecordingWorld::default();
        world.set_equipped(ItemHandle(1), true);
        world.set_equipped(ItemHandle(1), false);

        assert_eq!(
            world.events,
            vec![WorldEvent::Equipped(ItemHandle(1)), WorldEvent::Unequipped(ItemHandle(1))]
        );
    }
}
