//! The placed shelf container: slots plus cached derived values.

use crate::codec::{self, Tag};
use crate::notify::{self, WorldPublisher};
use crate::reconcile::DerivedState;
use crate::slots::ShelfSlots;
use crate::variant::ShelfVariant;
use mdshelves_core::BlockPos;

/// A placed shelf.
///
/// The cached flags mirror the last computed [`DerivedState`], so render
/// and signal queries read a field instead of rescanning sixteen slots.
/// Nothing outside [`Shelf::mark_dirty`] and save-load writes them.
#[derive(Debug, Clone)]
pub struct Shelf {
    variant: ShelfVariant,
    pos: BlockPos,
    slots: ShelfSlots,
    has_generic_items: bool,
    redstone_value: u8,
}

impl Shelf {
    /// Create an empty shelf at a position.
    pub fn new(variant: ShelfVariant, pos: BlockPos) -> Self {
        Self {
            variant,
            pos,
            slots: ShelfSlots::new(),
            has_generic_items: false,
            redstone_value: 0,
        }
    }

    /// Cosmetic variant of this shelf.
    pub fn variant(&self) -> ShelfVariant {
        self.variant
    }

    /// World position of this shelf.
    pub fn pos(&self) -> BlockPos {
        self.pos
    }

    /// Slot contents.
    pub fn slots(&self) -> &ShelfSlots {
        &self.slots
    }

    /// Mutable slot contents. Callers that mutate must follow up with
    /// [`Shelf::mark_dirty`] before the end of the simulation step.
    pub fn slots_mut(&mut self) -> &mut ShelfSlots {
        &mut self.slots
    }

    /// Cached aggregate: any generic item anywhere on the shelf.
    pub fn has_generic_items(&self) -> bool {
        self.has_generic_items
    }

    /// Cached signal strength offered to neighboring logic.
    pub fn redstone_value(&self) -> u8 {
        self.redstone_value
    }

    /// Reconcile slot contents, refresh the caches, and publish through
    /// the host.
    pub fn mark_dirty(&mut self, publisher: &mut dyn WorldPublisher) -> DerivedState {
        let state = notify::mark_dirty(&mut self.slots, self.pos, publisher);
        self.has_generic_items = state.has_generic_items;
        self.redstone_value = state.redstone_value;
        state
    }

    /// Container save record including type identity and position.
    pub fn to_tag(&self) -> Tag {
        codec::encode_shelf(&self.slots, self.pos)
    }

    /// Initial chunk-sync payload; identical to the save record.
    pub fn sync_tag(&self) -> Tag {
        self.to_tag()
    }

    /// Restore slot contents from a save record.
    ///
    /// Caches are refreshed from the raw contents as loaded. Exclusivity
    /// enforcement waits for the next in-world [`Shelf::mark_dirty`], which
    /// is where ejected stacks can actually be materialized.
    pub fn load_tag(&mut self, tag: &Tag) {
        self.slots = codec::decode_slots(tag);
        let state = DerivedState::capture(&self.slots);
        self.has_generic_items = state.has_generic_items;
        self.redstone_value = state.redstone_value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Quadrant;
    use mdshelves_core::{BookKind, ItemKind, ItemStack, RegistryKey};

    fn redstone_book(count: u8) -> ItemStack {
        ItemStack::new(ItemKind::Book(BookKind::Redstone), count)
    }

    fn generic(path: &str) -> ItemStack {
        ItemStack::new(ItemKind::Generic(RegistryKey::parse(path).unwrap()), 1)
    }

    #[test]
    fn new_shelf_has_cold_caches() {
        let shelf = Shelf::new(ShelfVariant::Birch, BlockPos::new(4, 60, 4));
        assert!(shelf.slots().is_empty());
        assert!(!shelf.has_generic_items());
        assert_eq!(shelf.redstone_value(), 0);
    }

    #[test]
    fn save_load_roundtrips_and_refreshes_caches() {
        let mut shelf = Shelf::new(ShelfVariant::Oak, BlockPos::new(1, 2, 3));
        shelf.slots_mut().set(
            Quadrant::TopLeft.book_positions()[0].slot(),
            Some(redstone_book(11)),
        );
        shelf
            .slots_mut()
            .set(Quadrant::BottomRight.generic_slot(), Some(generic("host:vase")));

        let tag = shelf.to_tag();

        let mut restored = Shelf::new(ShelfVariant::Oak, BlockPos::new(1, 2, 3));
        restored.load_tag(&tag);

        assert_eq!(restored.slots(), shelf.slots());
        assert!(restored.has_generic_items());
        assert_eq!(restored.redstone_value(), 11);
    }

    #[test]
    fn load_defers_ejection_to_the_next_mark_dirty() {
        // A record can legitimately contain a conflicted quadrant (older
        // saves, external editors). Loading keeps the contents as-is.
        let mut source = Shelf::new(ShelfVariant::Spruce, BlockPos::ORIGIN);
        let quadrant = Quadrant::TopLeft;
        source
            .slots_mut()
            .set(quadrant.book_positions()[0].slot(), Some(redstone_book(2)));
        source
            .slots_mut()
            .set(quadrant.generic_slot(), Some(generic("host:clock")));

        let mut shelf = Shelf::new(ShelfVariant::Spruce, BlockPos::ORIGIN);
        shelf.load_tag(&source.to_tag());

        assert!(shelf.slots().is_occupied(quadrant.generic_slot()));
        assert!(shelf.has_generic_items());
    }

    #[test]
    fn sync_tag_matches_save_record() {
        let mut shelf = Shelf::new(ShelfVariant::Warped, BlockPos::new(-5, 90, 12));
        shelf
            .slots_mut()
            .set(Quadrant::TopRight.generic_slot(), Some(generic("host:skull")));
        assert_eq!(shelf.sync_tag(), shelf.to_tag());
    }
}
