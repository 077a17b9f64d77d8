//! Fixed-capacity slot storage for a single shelf.
//!
//! Pure storage with no domain rules; the exclusivity rule between books
//! and generic items lives in [`crate::reconcile`].

use crate::layout::{SlotIndex, SLOT_COUNT};
use mdshelves_core::ItemStack;
use serde::{Deserialize, Serialize};

/// The sixteen item slots backing one shelf.
///
/// Every index is always assigned; an empty slot holds `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShelfSlots {
    slots: [Option<ItemStack>; SLOT_COUNT],
}

impl ShelfSlots {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            slots: std::array::from_fn(|_| None),
        }
    }

    /// Get the stack in a slot, `None` if the slot is empty.
    pub fn get(&self, slot: SlotIndex) -> Option<&ItemStack> {
        self.slots[slot.index()].as_ref()
    }

    /// Replace a slot's contents.
    pub fn set(&mut self, slot: SlotIndex, stack: Option<ItemStack>) {
        self.slots[slot.index()] = stack;
    }

    /// Clear a slot and return its prior contents.
    pub fn take(&mut self, slot: SlotIndex) -> Option<ItemStack> {
        self.slots[slot.index()].take()
    }

    /// Whether a slot holds a stack.
    pub fn is_occupied(&self, slot: SlotIndex) -> bool {
        self.slots[slot.index()].is_some()
    }

    /// Whether every slot is empty.
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(|slot| slot.is_none())
    }

    /// Occupied slots in storage order.
    pub fn iter(&self) -> impl Iterator<Item = (SlotIndex, &ItemStack)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.as_ref().map(|stack| (SlotIndex(index as u8), stack)))
    }
}

impl Default for ShelfSlots {
    fn default() -> Self {
        Self::new()
    }
}
