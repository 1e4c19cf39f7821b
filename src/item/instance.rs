use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies a kind of item (shared by all instances of that kind)
///
/// Kind ids are positive. "No item" is expressed as `Option::None` rather than
/// a reserved zero value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemKindId(pub u32);

impl ItemKindId {
    /// Creates a kind id, returning None for the reserved value 0
    pub fn new(raw: u32) -> Option<Self> {
        (raw > 0).then_some(ItemKindId(raw))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for ItemKindId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Opaque reference to an item entity owned by the world
///
/// The inventory never inspects the entity behind a handle; it only stores
/// handles and passes them back to [`super::world::ItemWorld`] callbacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemHandle(pub u64);

impl fmt::Display for ItemHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "item@{}", self.0)
    }
}

/// An item entity as seen by the inventory when it is picked up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemInstance {
    pub handle: ItemHandle,
    pub kind: ItemKindId,
}

impl ItemInstance {
    pub fn new(handle: ItemHandle, kind: ItemKindId) -> Self {
        ItemInstance { handle, kind }
    }
}
