use std::fmt;

use serde::{Deserialize, Serialize};

use crate::geometry::{Point, Rect};
use crate::item::{ItemHandle, ItemKindId};

/// Stable identifier of a slot
///
/// Equal to the slot's position in the grid when the grid was built, and
/// never reassigned afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SlotId(pub usize);

impl SlotId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "slot {}", self.0)
    }
}

/// A single inventory cell
///
/// Holds zero or more item handles of one kind. The last handle in
/// `contents` is the most recently added one and is always removed first.
///
/// `kind` is `None` exactly when `contents` is empty; every mutating method
/// keeps the two in step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    id: SlotId,
    kind: Option<ItemKindId>,
    contents: Vec<ItemHandle>,
    icon: String,
    /// Where the slot is drawn right now (moves while dragged)
    pub display_area: Rect,
    /// Where the slot lives in the grid layout
    origin_area: Rect,
}

impl Slot {
    /// Creates an empty slot at its layout position
    pub fn empty(id: SlotId, area: Rect, empty_icon: impl Into<String>) -> Self {
        Slot {
            id,
            kind: None,
            contents: Vec::new(),
            icon: empty_icon.into(),
            display_area: area,
            origin_area: area,
        }
    }

    pub fn id(&self) -> SlotId {
        self.id
    }

    pub fn kind(&self) -> Option<ItemKindId> {
        self.kind
    }

    pub fn contents(&self) -> &[ItemHandle] {
        &self.contents
    }

    pub fn icon(&self) -> &str {
        &self.icon
    }

    pub fn origin_area(&self) -> Rect {
        self.origin_area
    }

    /// Number of instances held
    pub fn stacks(&self) -> usize {
        self.contents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }

    /// Returns true if more than one instance is stacked here
    pub fn is_stacked(&self) -> bool {
        self.contents.len() > 1
    }

    /// Most recently added instance
    pub fn last(&self) -> Option<ItemHandle> {
        self.contents.last().copied()
    }

    pub fn contains_item(&self, item: ItemHandle) -> bool {
        self.contents.contains(&item)
    }

    /// Hit-test against the slot's layout position
    pub fn contains(&self, point: Point) -> bool {
        self.origin_area.contains_point(point)
    }

    /// Adds an instance on top of the stack
    ///
    /// An empty slot takes on `kind`. The icon is refreshed from the added
    /// item either way.
    pub fn push(&mut self, item: ItemHandle, kind: ItemKindId, icon: &str) {
        debug_assert!(
            self.kind.is_none() || self.kind == Some(kind),
            "{} holds {:?}, cannot add {}",
            self.id,
            self.kind,
            kind
        );
        self.kind = Some(kind);
        self.contents.push(item);
        self.icon = icon.to_string();
    }

    /// Removes the most recently added instance
    ///
    /// Resets the slot to `empty_icon` when nothing is left.
    pub fn pop(&mut self, empty_icon: &str) -> Option<ItemHandle> {
        let item = self.contents.pop();
        if self.contents.is_empty() {
            self.clear(empty_icon);
        }
        item
    }

    /// Empties the slot without touching its position
    pub fn clear(&mut self, empty_icon: &str) {
        self.kind = None;
        self.contents.clear();
        self.icon = empty_icon.to_string();
    }

    /// Exchanges kind, contents and icon with another slot
    ///
    /// Ids and positions stay where they are.
    pub fn swap_contents(&mut self, other: &mut Slot) {
        std::mem::swap(&mut self.kind, &mut other.kind);
        std::mem::swap(&mut self.contents, &mut other.contents);
        std::mem::swap(&mut self.icon, &mut other.icon);
    }

    /// Overwrites kind, contents and icon with the ones from `source`
    pub(crate) fn copy_contents_from(&mut self, source: &Slot) {
        self.kind = source.kind;
        self.contents.clone_from(&source.contents);
        self.icon.clone_from(&source.icon);
    }

    /// Centers the drawn slot under the pointer
    pub fn follow_pointer(&mut self, pointer: Point) {
        let half_w = (self.origin_area.width / 2) as i32;
        let half_h = (self.origin_area.height / 2) as i32;
        self.display_area = self.origin_area.moved_to(pointer.offset(-half_w, -half_h));
    }

    /// Puts the drawn slot back at its layout position
    pub fn restore_position(&mut self) {
        self.display_area = self.origin_area;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EMPTY: &str = "empty.png";

    fn slot() -> Slot {
        Slot::empty(SlotId(0), Rect::new(0, 0, 70, 70), EMPTY)
    }

    #[test]
    fn test_push_and_pop_keep_kind_in_step() {
        let mut slot = slot();
        assert!(slot.is_empty());
        assert_eq!(slot.kind(), None);

        slot.push(ItemHandle(1), ItemKindId(2), "stick.png");
        slot.push(ItemHandle(2), ItemKindId(2), "stick.png");
        assert_eq!(slot.kind(), Some(ItemKindId(2)));
        assert!(slot.is_stacked());
        assert_eq!(slot.icon(), "stick.png");

        // Last in, first out
        assert_eq!(slot.pop(EMPTY), Some(ItemHandle(2)));
        assert_eq!(slot.kind(), Some(ItemKindId(2)));

        assert_eq!(slot.pop(EMPTY), Some(ItemHandle(1)));
        assert_eq!(slot.kind(), None);
        assert_eq!(slot.icon(), EMPTY);
        assert_eq!(slot.pop(EMPTY), None);
    }

    #[test]
    fn test_swap_contents_keeps_ids() {
        let mut a = slot();
        let mut b = Slot::empty(SlotId(1), Rect::new(70, 0, 70, 70), EMPTY);
        a.push(ItemHandle(7), ItemKindId(4), "torch.png");

        a.swap_contents(&mut b);

        assert!(a.is_empty());
        assert_eq!(a.icon(), EMPTY);
        assert_eq!(a.id(), SlotId(0));
        assert_eq!(b.contents(), &[ItemHandle(7)]);
        assert_eq!(b.id(), SlotId(1));
    }

    #[test]
    fn test_follow_pointer_centers_and_restores() {
        let mut slot = slot();

        slot.follow_pointer(Point::new(200, 100));
        assert_eq!(slot.display_area, Rect::new(165, 65, 70, 70));
        assert_eq!(slot.origin_area(), Rect::new(0, 0, 70, 70));

        slot.restore_position();
        assert_eq!(slot.display_area, slot.origin_area());
    }
}
