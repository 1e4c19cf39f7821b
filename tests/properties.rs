//! Property tests for grid and drag invariants

use proptest::prelude::*;

use slotcraft::geometry::Point;
use slotcraft::interaction::{InteractionSession, PointerInput, SessionEvent};
use slotcraft::item::{RecordingWorld, WorldEvent};
use slotcraft::{
    InventoryConfig, InventoryError, InventoryGrid, ItemCatalog, ItemHandle, ItemInstance,
    ItemKindId, SlotId,
};

/// Adds one instance per kind, with handles counting up from 1
fn filled_grid(vertical: u32, horizontal: u32, kinds: &[u32]) -> (InventoryGrid, RecordingWorld) {
    let catalog = ItemCatalog::create_default();
    let mut grid = InventoryGrid::new(&InventoryConfig::with_grid(vertical, horizontal));
    let mut world = RecordingWorld::default();

    for (handle, &kind) in kinds.iter().enumerate() {
        let item = ItemInstance::new(ItemHandle(handle as u64 + 1), ItemKindId(kind));
        let _ = grid.add_item(item, &catalog, &mut world);
    }
    (grid, world)
}

fn slot_center(grid: &InventoryGrid, id: SlotId) -> Point {
    let area = grid.slot(id).origin_area();
    area.top_left().offset(area.width as i32 / 2, area.height as i32 / 2)
}

proptest! {
    /// Property: capacity is the product of both dimensions clamped to 1
    #[test]
    fn capacity_matches_clamped_dimensions(
        vertical in 0u32..10,
        horizontal in 0u32..10,
    ) {
        let config = InventoryConfig {
            vertical_slots: vertical,
            horizontal_slots: horizontal,
            ..Default::default()
        };
        let grid = InventoryGrid::new(&config);

        prop_assert_eq!(grid.capacity(), (vertical.max(1) * horizontal.max(1)) as usize);
    }

    /// Property: a slot is empty exactly when it has no kind
    #[test]
    fn empty_iff_no_kind(
        kinds in prop::collection::vec(1u32..=5, 0..40),
        swaps in prop::collection::vec((0usize..12, 0usize..12), 0..20),
    ) {
        let (mut grid, _) = filled_grid(3, 4, &kinds);
        for (a, b) in swaps {
            let (a, b) = (grid.slot(SlotId(a)).clone(), grid.slot(SlotId(b)).clone());
            grid.exchange_slots(a, b);
        }

        for slot in grid.slots() {
            prop_assert_eq!(slot.is_empty(), slot.kind().is_none());
            prop_assert_eq!(slot.contents().is_empty(), slot.kind().is_none());
        }
    }

    /// Property: exchanging a pair twice restores both slots
    #[test]
    fn exchange_is_its_own_inverse(
        kinds in prop::collection::vec(1u32..=5, 1..30),
        a in 0usize..12,
        b in 0usize..12,
    ) {
        let (mut grid, _) = filled_grid(3, 4, &kinds);
        prop_assume!(a != b);
        prop_assume!(!grid.slot(SlotId(a)).is_empty() && !grid.slot(SlotId(b)).is_empty());
        let before = grid.slots().to_vec();

        for _ in 0..2 {
            let (first, second) = (grid.slot(SlotId(a)).clone(), grid.slot(SlotId(b)).clone());
            prop_assert!(grid.exchange_slots(first, second));
        }

        prop_assert_eq!(grid.slots(), before.as_slice());
    }

    /// Property: adding to a full grid changes nothing and tells the world nothing
    ///
    /// Slot 0 may hold a single potion, a stack with room left; the grid is
    /// still full because no slot is empty.
    #[test]
    fn full_grid_is_never_mutated(
        vertical in 1u32..4,
        horizontal in 1u32..4,
        kind in 1u32..=5,
        partial_potion_stack in any::<bool>(),
    ) {
        // Torches never stack, so one per slot fills the grid
        let mut contents = vec![4; (vertical * horizontal) as usize];
        if partial_potion_stack {
            contents[0] = 1;
        }
        let (mut grid, mut world) = filled_grid(vertical, horizontal, &contents);
        prop_assert!(!grid.has_space());
        let before = grid.slots().to_vec();
        world.clear();

        let item = ItemInstance::new(ItemHandle(999), ItemKindId(kind));
        let result = grid.add_item(item, &ItemCatalog::create_default(), &mut world);

        prop_assert_eq!(result, Err(InventoryError::InventoryFull));
        prop_assert_eq!(grid.slots(), before.as_slice());
        prop_assert!(world.events.is_empty());
    }

    /// Property: a single item dragged out of the window is dropped exactly once
    #[test]
    fn single_item_dropped_outside_empties_slot(
        kind in 1u32..=5,
        dx in 0i32..300,
        dy in -200i32..200,
    ) {
        let (mut grid, mut world) = filled_grid(2, 3, &[kind]);
        let mut session = InteractionSession::new();
        let slot = SlotId(0);
        let from = slot_center(&grid, slot);
        let window = grid.window_area();
        let outside = Point::new(window.right() + dx, window.y + dy);

        session.update(&PointerInput::press(from), &mut grid, &mut world);
        session.update(&PointerInput::hold(from.offset(3, 0)), &mut grid, &mut world);
        session.update(&PointerInput::hold(outside), &mut grid, &mut world);
        let event = session.update(&PointerInput::release(outside), &mut grid, &mut world);

        prop_assert_eq!(event, Some(SessionEvent::DroppedIntoWorld { slot, item: ItemHandle(1) }));
        prop_assert!(grid.slot(slot).is_empty());
        prop_assert_eq!(grid.slot(slot).kind(), None);
        prop_assert_eq!(
            world.count(|e| matches!(e, WorldEvent::Dropped { item: ItemHandle(1), .. })),
            1
        );
    }

    /// Property: find_slots_by_kind is ascending and only returns that kind
    #[test]
    fn find_slots_by_kind_is_ordered(
        kinds in prop::collection::vec(1u32..=5, 0..40),
        query in 1u32..=5,
    ) {
        let (grid, _) = filled_grid(4, 6, &kinds);
        let found = grid.find_slots_by_kind(ItemKindId(query));

        for pair in found.windows(2) {
            prop_assert!(pair[0].id() < pair[1].id());
        }
        for slot in &found {
            prop_assert_eq!(slot.kind(), Some(ItemKindId(query)));
        }
    }
}
