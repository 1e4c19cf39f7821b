use serde::{Deserialize, Serialize};
use super::instance::ItemKindId;

/// Shortest allowed pickup time in seconds
pub const MIN_INTERACT_TIME: f32 = 1.0;

/// The blueprint for an item kind
///
/// This defines the static properties shared by every instance of a kind.
/// Instances themselves live in the world and are referenced by
/// [`super::ItemHandle`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemDefinition {
    /// Unique kind identifier (used for stacking and combinations)
    pub kind: ItemKindId,

    /// Display name, also used by the world to spawn crafted items
    pub name: String,

    /// Description shown in tooltips
    #[serde(default)]
    pub description: String,

    /// Icon shown in the slot holding this item
    pub icon: String,

    /// Maximum stack size (1 = unique item)
    #[serde(default = "default_max_stack_amount")]
    pub max_stack_amount: u32,

    /// Whether clicking the slot consumes the item
    #[serde(default)]
    pub usable: bool,

    /// Seconds the interact key must be held to pick the item up
    #[serde(default = "default_interact_time")]
    pub interact_time: f32,
}

fn default_max_stack_amount() -> u32 {
    1
}

fn default_interact_time() -> f32 {
    MIN_INTERACT_TIME
}

impl ItemDefinition {
    /// Creates a new item definition with no description and a one second pickup
    pub fn new(
        kind: ItemKindId,
        name: impl Into<String>,
        icon: impl Into<String>,
        max_stack_amount: u32,
        usable: bool,
    ) -> Self {
        ItemDefinition {
            kind,
            name: name.into(),
            description: String::new(),
            icon: icon.into(),
            max_stack_amount,
            usable,
            interact_time: MIN_INTERACT_TIME,
        }
        .validated()
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_interact_time(mut self, seconds: f32) -> Self {
        self.interact_time = seconds;
        self.validated()
    }

    /// Clamps out-of-range values the same way the editor would
    ///
    /// Kind 0 becomes 1, a stack size below 1 becomes 1 and a pickup time
    /// below one second becomes one second.
    pub fn validated(mut self) -> Self {
        if self.kind.get() == 0 {
            log::debug!("{}: kind id 0 is reserved, using 1", self.name);
            self.kind = ItemKindId(1);
        }
        if self.max_stack_amount < 1 {
            log::debug!("{}: max_stack_amount clamped to 1", self.name);
            self.max_stack_amount = 1;
        }
        if !(self.interact_time >= MIN_INTERACT_TIME) {
            self.interact_time = MIN_INTERACT_TIME;
        }
        self
    }

    /// Returns true if more than one instance may share a slot
    pub fn is_stackable(&self) -> bool {
        self.max_stack_amount > 1
    }
}
