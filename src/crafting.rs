//! Crafting combinations - two item kinds in, one crafted item out

use serde::{Deserialize, Serialize};
use crate::item::ItemKindId;

/// A recipe combining one item of each of two kinds into a new item
///
/// The pair of ingredient kinds is unordered: dragging a stick onto cloth
/// matches the same entry as dragging cloth onto a stick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Combination {
    /// Name of the crafted item, used to spawn it in the world
    pub name: String,
    pub item_kind_1: ItemKindId,
    pub item_kind_2: ItemKindId,
    /// Kind of the crafted item
    pub result_kind: ItemKindId,
}

impl Combination {
    pub fn new(
        name: impl Into<String>,
        item_kind_1: ItemKindId,
        item_kind_2: ItemKindId,
        result_kind: ItemKindId,
    ) -> Self {
        Combination {
            name: name.into(),
            item_kind_1,
            item_kind_2,
            result_kind,
        }
    }

    /// Returns true if `{a, b}` equals this recipe's ingredient pair
    pub fn matches(&self, a: ItemKindId, b: ItemKindId) -> bool {
        (self.item_kind_1 == a && self.item_kind_2 == b)
            || (self.item_kind_1 == b && self.item_kind_2 == a)
    }
}

/// All known combinations, in authoring order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CombinationTable {
    combinations: Vec<Combination>,
}

impl CombinationTable {
    pub fn new(combinations: Vec<Combination>) -> Self {
        CombinationTable { combinations }
    }

    /// The built-in recipes matching [`crate::item::ItemCatalog::create_default`]
    pub fn create_default() -> Self {
        CombinationTable::new(vec![Combination::new(
            "Torch",
            ItemKindId(2),
            ItemKindId(3),
            ItemKindId(4),
        )])
    }

    pub fn add(&mut self, combination: Combination) {
        self.combinations.push(combination);
    }

    /// Finds the recipe for an unordered pair of kinds
    ///
    /// When several entries match, the last one authored wins.
    pub fn find(&self, a: ItemKindId, b: ItemKindId) -> Option<&Combination> {
        self.combinations.iter().rev().find(|c| c.matches(a, b))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Combination> {
        self.combinations.iter()
    }

    pub fn len(&self) -> usize {
        self.combinations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.combinations.is_empty()
    }
}
