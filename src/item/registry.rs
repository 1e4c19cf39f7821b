use std::collections::BTreeMap;
use super::definition::ItemDefinition;
use super::instance::ItemKindId;
use crate::config::ConfigError;

/// Central catalog of all item definitions
///
/// This is the single source of truth for what item kinds exist. Slots only
/// store kind ids and handles; stack limits, icons and usability are looked up
/// here.
#[derive(Debug, Clone, Default)]
pub struct ItemCatalog {
    items: BTreeMap<ItemKindId, ItemDefinition>,
}

impl ItemCatalog {
    /// Creates a new empty catalog
    pub fn new() -> Self {
        ItemCatalog {
            items: BTreeMap::new(),
        }
    }

    /// Creates a catalog with the built-in items pre-registered
    pub fn create_default() -> Self {
        let mut catalog = Self::new();
        catalog.register_base_items();
        catalog
    }

    /// Builds a catalog from a list of definitions
    ///
    /// Each definition is validated (clamped) before registration.
    pub fn from_definitions(
        definitions: impl IntoIterator<Item = ItemDefinition>,
    ) -> Result<Self, ConfigError> {
        let mut catalog = Self::new();
        for definition in definitions {
            catalog.register(definition)?;
        }
        Ok(catalog)
    }

    /// Registers a new item definition
    ///
    /// Returns error if an item with this kind already exists.
    pub fn register(&mut self, item: ItemDefinition) -> Result<(), ConfigError> {
        let item = item.validated();
        if self.items.contains_key(&item.kind) {
            return Err(ConfigError::DuplicateItem(item.kind));
        }

        log::debug!("registered item {} ({})", item.kind, item.name);
        self.items.insert(item.kind, item);
        Ok(())
    }

    /// Gets an item definition by kind
    pub fn get(&self, kind: ItemKindId) -> Option<&ItemDefinition> {
        self.items.get(&kind)
    }

    /// Finds a definition by display name
    pub fn find_by_name(&self, name: &str) -> Option<&ItemDefinition> {
        self.items.values().find(|item| item.name == name)
    }

    /// Returns true if a definition for this kind exists
    pub fn exists(&self, kind: ItemKindId) -> bool {
        self.items.contains_key(&kind)
    }

    /// Maximum stack size for a kind, 1 for unknown kinds
    pub fn max_stack_amount(&self, kind: ItemKindId) -> u32 {
        self.get(kind).map_or(1, |item| item.max_stack_amount)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns all definitions in ascending kind order
    pub fn all_items(&self) -> impl Iterator<Item = &ItemDefinition> {
        self.items.values()
    }

    // ======================================================================
    // Base items
    // ======================================================================

    fn register_base_items(&mut self) {
        let base = [
            ItemDefinition::new(ItemKindId(1), "Health Potion", "icons/health_potion.png", 3, true)
                .with_description("Restores some health when used."),
            ItemDefinition::new(ItemKindId(2), "Stick", "icons/stick.png", 10, false)
                .with_description("A dry stick. Used in crafting."),
            ItemDefinition::new(ItemKindId(3), "Cloth", "icons/cloth.png", 10, false)
                .with_description("A strip of oily cloth. Used in crafting."),
            ItemDefinition::new(ItemKindId(4), "Torch", "icons/torch.png", 1, false)
                .with_description("Lights the way.")
                .with_interact_time(2.0),
            ItemDefinition::new(ItemKindId(5), "Stone", "icons/stone.png", 10, false),
        ];

        for item in base {
            // Kinds above are unique, so registration cannot collide.
            if let Err(e) = self.register(item) {
                log::error!("failed to register base item: {}", e);
            }
        }
    }
}
