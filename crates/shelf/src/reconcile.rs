//! Derivation of public shelf state from slot contents.
//!
//! [`reconcile`] is the consistency engine: it repairs the per-quadrant
//! rule that books and a generic item never coexist, then recomputes the
//! read-model the host renders and signals from. Anomalies are corrected
//! in place and reported as events, never as errors.

use crate::layout::{BookPosition, Quadrant, BOOK_POSITION_COUNT};
use crate::slots::ShelfSlots;
use mdshelves_core::ItemStack;
use serde::{Deserialize, Serialize};

/// Host block-state word.
pub type BlockState = u16;

/// Bit flagging visible generic clutter, above the twelve book bits.
const CLUTTER_BIT: BlockState = 1 << BOOK_POSITION_COUNT;

/// Mask of the bits owned by the shelf within the host word.
const SHELF_STATE_MASK: BlockState = (1 << (BOOK_POSITION_COUNT + 1)) - 1;

/// A generic stack forced out of a quadrant that also holds books.
///
/// Books define a quadrant's mode; a generic item sharing the quadrant is
/// the anomaly and always loses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EjectionEvent {
    /// Quadrant that violated the exclusivity rule.
    pub quadrant: Quadrant,
    /// The stack removed from the quadrant's generic slot.
    pub stack: ItemStack,
}

/// Read-model recomputed from slot contents on every mark-dirty.
///
/// Holds no independent truth; it is discarded and rebuilt rather than
/// incrementally updated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedState {
    /// Occupancy per book position, indexed by `BookPosition::state_index`.
    pub book_occupancy: [bool; BOOK_POSITION_COUNT],
    /// Whether any slot holds a non-book stack.
    pub has_generic_items: bool,
    /// Signal strength in `[0, 15]`: the strongest single redstone-book
    /// stack on the shelf.
    pub redstone_value: u8,
}

impl DerivedState {
    /// State of a shelf with nothing on it.
    pub const EMPTY: Self = Self {
        book_occupancy: [false; BOOK_POSITION_COUNT],
        has_generic_items: false,
        redstone_value: 0,
    };

    /// Pure derivation with no corrective side effects.
    ///
    /// Callers that need the exclusivity rule enforced go through
    /// [`reconcile`], which fixes the slots before capturing.
    pub fn capture(slots: &ShelfSlots) -> Self {
        let mut book_occupancy = [false; BOOK_POSITION_COUNT];
        for position in BookPosition::ALL {
            book_occupancy[position.state_index()] = slots.is_occupied(position.slot());
        }

        let mut has_generic_items = false;
        let mut redstone_value = 0u8;
        for (_, stack) in slots.iter() {
            has_generic_items |= !stack.kind.is_book();
            // Strongest stack wins; multiple redstone-book stacks do not
            // add. If stacked shelves of redstone books should sum instead,
            // revisit this together with the tests that pin it down.
            redstone_value = redstone_value.max(stack.redstone_signal());
        }

        Self {
            book_occupancy,
            has_generic_items,
            redstone_value,
        }
    }

    /// Occupancy of a single book position.
    pub fn book_occupied(&self, position: BookPosition) -> bool {
        self.book_occupancy[position.state_index()]
    }

    /// Write the shelf-owned bits into a host block-state word, leaving
    /// the remaining bits untouched.
    pub fn apply_to_block_state(&self, state: BlockState) -> BlockState {
        let mut bits: BlockState = 0;
        for position in BookPosition::ALL {
            if self.book_occupied(position) {
                bits |= 1 << position.state_index();
            }
        }
        if self.has_generic_items {
            bits |= CLUTTER_BIT;
        }
        (state & !SHELF_STATE_MASK) | bits
    }
}

/// Whether a packed block-state word shows a book at the given position.
pub fn block_state_book_occupied(state: BlockState, position: BookPosition) -> bool {
    state & (1 << position.state_index()) != 0
}

/// Whether a packed block-state word has the generic-clutter flag set.
pub fn block_state_has_clutter(state: BlockState) -> bool {
    state & CLUTTER_BIT != 0
}

/// Enforce per-quadrant exclusivity, then recompute the derived read-model.
///
/// Quadrant fixups all complete before the aggregate pass runs, since an
/// ejection changes the slots that pass scans. Never fails; every anomaly
/// is corrected and reported in the returned event list.
pub fn reconcile(slots: &mut ShelfSlots) -> (DerivedState, Vec<EjectionEvent>) {
    let mut ejections = Vec::new();
    for quadrant in Quadrant::ALL {
        let has_book = quadrant
            .book_positions()
            .iter()
            .any(|position| slots.is_occupied(position.slot()));
        if has_book {
            if let Some(stack) = slots.take(quadrant.generic_slot()) {
                ejections.push(EjectionEvent { quadrant, stack });
            }
        }
    }
    (DerivedState::capture(slots), ejections)
}
