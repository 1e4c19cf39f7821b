//! Headless walkthrough of the inventory
//!
//! Usage: `slotcraft [inventory.json] [game_data.json]`
//!
//! Picks up a few items, drags cloth onto sticks and crafts a torch, logging
//! every world side effect. Run with `RUST_LOG=debug` to see the details.

use std::path::PathBuf;

use anyhow::{Context, Result};

use slotcraft::geometry::Point;
use slotcraft::interaction::{
    InputEvent, PickupInput, PickupInteraction, PickupProgress, PointerTracker, ResolutionAction,
};
use slotcraft::item::RecordingWorld;
use slotcraft::{
    CombinationTable, GameData, InventoryConfig, ItemCatalog, ItemHandle, ItemInstance,
    ItemKindId, PlayerInventory, SlotId,
};

// Frame time used when simulating a held key
const FRAME_TIME: f32 = 1.0 / 60.0;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let config_path = args.next().map(PathBuf::from);
    let data_path = args.next().map(PathBuf::from);

    let config = InventoryConfig::load_or_default(config_path.as_deref())
        .context("Failed to load inventory config")?;

    let (catalog, combinations) = match data_path {
        Some(path) => GameData::load_from_file(&path)
            .and_then(GameData::into_parts)
            .with_context(|| format!("Failed to load game data from {}", path.display()))?,
        None => (ItemCatalog::create_default(), CombinationTable::create_default()),
    };

    log::info!(
        "{}x{} inventory, {} item kinds, {} recipes",
        config.horizontal_slots,
        config.vertical_slots,
        catalog.len(),
        combinations.len()
    );

    let mut inventory = PlayerInventory::new(&config, catalog, combinations);
    let mut world = RecordingWorld::starting_at(1000);

    // Stick, stick, cloth
    let loot = [(1, 2), (2, 2), (3, 3)];
    for (handle, kind) in loot {
        let item = ItemInstance::new(ItemHandle(handle), ItemKindId(kind));
        hold_to_pick_up(item, &mut inventory, &mut world);
    }
    print_grid(&inventory);

    let mut tracker = PointerTracker::new();
    inventory.handle_frame(&tracker.frame([InputEvent::ToggleInventory]), &mut world);

    let stick = slot_center(&inventory, SlotId(0));
    let cloth = slot_center(&inventory, SlotId(1));
    let frames = [
        vec![InputEvent::PointerDown(cloth.x, cloth.y)],
        vec![InputEvent::PointerMove(cloth.x + 10, cloth.y)],
        vec![InputEvent::PointerMove(stick.x, stick.y)],
        vec![InputEvent::PointerUp(stick.x, stick.y)],
    ];
    for events in frames {
        for event in inventory.handle_frame(&tracker.frame(events), &mut world) {
            log::info!("{:?}", event);
        }
    }

    let actions = inventory.offered_actions();
    let labels: Vec<String> = actions.iter().map(|&action| inventory.action_label(action)).collect();
    println!("Offered: {}", labels.join(", "));

    if actions.contains(&ResolutionAction::Craft) {
        let event = inventory.choose(ResolutionAction::Craft, &mut world)?;
        log::info!("{:?}", event);
    } else {
        inventory.cancel_choice();
    }
    print_grid(&inventory);

    println!("{} world events", world.events.len());
    Ok(())
}

/// Holds the interact key on `item` until the pickup completes
fn hold_to_pick_up(item: ItemInstance, inventory: &mut PlayerInventory, world: &mut RecordingWorld) {
    let mut pickup = PickupInteraction::new();
    let mut input = PickupInput {
        target: Some(item),
        key_pressed: true,
        key_held: true,
        delta_time: FRAME_TIME,
    };

    // Bounded so an unknown kind cannot spin forever
    for _ in 0..600 {
        match pickup.update(&input, inventory, world) {
            PickupProgress::Completed(Ok(slot)) => {
                log::info!("Picked up {} into {}", item.handle, slot);
                return;
            }
            PickupProgress::Completed(Err(e)) => {
                log::warn!("Could not pick up {}: {}", item.handle, e);
                return;
            }
            PickupProgress::Idle => return,
            PickupProgress::Holding { .. } => input.key_pressed = false,
        }
    }
}

fn slot_center(inventory: &PlayerInventory, id: SlotId) -> Point {
    let area = inventory.grid().slot(id).origin_area();
    area.top_left().offset(area.width as i32 / 2, area.height as i32 / 2)
}

fn print_grid(inventory: &PlayerInventory) {
    for slot in inventory.grid().slots().iter().filter(|slot| !slot.is_empty()) {
        let name = slot
            .kind()
            .and_then(|kind| inventory.catalog().get(kind))
            .map_or("?", |definition| definition.name.as_str());
        println!("  {}: {} x{}", slot.id(), name, slot.stacks());
    }
}
