//! Persistence round-trips and permissive decoding of damaged records.

use mdshelves_core::{BlockPos, BookKind, ItemKind, ItemStack, RegistryKey};
use mdshelves_shelf::{
    decode_pos, decode_slots, encode_shelf, encode_slots, tag_from_bytes, tag_to_bytes, Quadrant,
    ShelfSlots, SlotIndex, Tag, SHELF_ENTITY_ID, SLOT_COUNT,
};
use proptest::prelude::*;
use std::collections::BTreeMap;

fn stack_strategy() -> impl Strategy<Value = ItemStack> {
    let kind = prop_oneof![
        Just(ItemKind::Book(BookKind::Plain)),
        Just(ItemKind::Book(BookKind::Redstone)),
        Just(ItemKind::Generic(RegistryKey::parse("host:clock").unwrap())),
        Just(ItemKind::Generic(RegistryKey::parse("host:fern").unwrap())),
    ];
    (kind, 1u8..=64).prop_map(|(kind, count)| ItemStack::new(kind, count))
}

fn slots_strategy() -> impl Strategy<Value = ShelfSlots> {
    proptest::collection::vec(proptest::option::of(stack_strategy()), SLOT_COUNT).prop_map(
        |contents| {
            let mut slots = ShelfSlots::new();
            for (index, stack) in contents.into_iter().enumerate() {
                slots.set(SlotIndex::new(index as u8).unwrap(), stack);
            }
            slots
        },
    )
}

proptest! {
    /// Property: decode inverts encode for any well-formed store
    #[test]
    fn decode_inverts_encode(slots in slots_strategy()) {
        prop_assert_eq!(&decode_slots(&encode_slots(&slots)), &slots);
    }

    /// Property: the full container record round-trips through bytes
    #[test]
    fn container_record_roundtrips_through_bytes(
        slots in slots_strategy(),
        x in -30_000_000i32..30_000_000,
        y in -64i32..320,
        z in -30_000_000i32..30_000_000,
    ) {
        let pos = BlockPos::new(x, y, z);
        let tag = encode_shelf(&slots, pos);
        let bytes = tag_to_bytes(&tag).unwrap();
        let restored = tag_from_bytes(&bytes).unwrap();

        prop_assert_eq!(&restored, &tag);
        prop_assert_eq!(decode_pos(&restored), Some(pos));
        prop_assert_eq!(decode_slots(&restored), slots);
    }
}

#[test]
fn record_identity_names_the_shelf_entity_type() {
    let tag = encode_shelf(&ShelfSlots::new(), BlockPos::ORIGIN);
    assert_eq!(tag.get("id").and_then(Tag::as_str), Some(SHELF_ENTITY_ID));
}

#[test]
fn missing_slots_decode_as_empty() {
    // A record listing only slot 3 leaves the other fifteen slots empty.
    let mut record = BTreeMap::new();
    record.insert("Slot".to_string(), Tag::Byte(3));
    record.insert("id".to_string(), Tag::String("mdsh:book".to_string()));
    record.insert("Count".to_string(), Tag::Byte(2));
    let mut root = BTreeMap::new();
    root.insert("Items".to_string(), Tag::List(vec![Tag::Compound(record)]));

    let slots = decode_slots(&Tag::Compound(root));

    let expected_slot = SlotIndex::new(3).unwrap();
    assert_eq!(
        slots.get(expected_slot),
        Some(&ItemStack::new(ItemKind::Book(BookKind::Plain), 2))
    );
    assert_eq!(slots.iter().count(), 1);
}

#[test]
fn damaged_records_degrade_per_slot_not_per_container() {
    let mut good = BTreeMap::new();
    good.insert("Slot".to_string(), Tag::Byte(0));
    good.insert("id".to_string(), Tag::String("mdsh:redstone_book".to_string()));
    good.insert("Count".to_string(), Tag::Byte(7));

    // Slot byte out of range.
    let mut out_of_range = BTreeMap::new();
    out_of_range.insert("Slot".to_string(), Tag::Byte(42));
    out_of_range.insert("id".to_string(), Tag::String("mdsh:book".to_string()));
    out_of_range.insert("Count".to_string(), Tag::Byte(1));

    // Negative count.
    let mut negative = BTreeMap::new();
    negative.insert("Slot".to_string(), Tag::Byte(1));
    negative.insert("id".to_string(), Tag::String("mdsh:book".to_string()));
    negative.insert("Count".to_string(), Tag::Byte(-3));

    // Id that is not a registry key.
    let mut unparseable = BTreeMap::new();
    unparseable.insert("Slot".to_string(), Tag::Byte(2));
    unparseable.insert("id".to_string(), Tag::String("###".to_string()));
    unparseable.insert("Count".to_string(), Tag::Byte(1));

    let mut root = BTreeMap::new();
    root.insert(
        "Items".to_string(),
        Tag::List(vec![
            Tag::Compound(good),
            Tag::Compound(out_of_range),
            Tag::Compound(negative),
            Tag::Compound(unparseable),
            Tag::Int(12),
        ]),
    );

    let slots = decode_slots(&Tag::Compound(root));

    // Only the well-formed record lands.
    assert_eq!(
        slots.get(SlotIndex::new(0).unwrap()),
        Some(&ItemStack::new(ItemKind::Book(BookKind::Redstone), 7))
    );
    assert_eq!(slots.iter().count(), 1);
}

#[test]
fn record_without_items_decodes_to_an_empty_store() {
    assert!(decode_slots(&Tag::Compound(BTreeMap::new())).is_empty());
    assert!(decode_slots(&Tag::String("garbage".to_string())).is_empty());
}

#[test]
fn unknown_item_ids_survive_the_roundtrip() {
    // Items from other content packs keep their identity through a
    // save/load cycle even though this component knows nothing about them.
    let mut slots = ShelfSlots::new();
    slots.set(
        Quadrant::BottomLeft.generic_slot(),
        Some(ItemStack::new(
            ItemKind::Generic(RegistryKey::parse("otherpack:gilded_hourglass").unwrap()),
            5,
        )),
    );

    assert_eq!(decode_slots(&encode_slots(&slots)), slots);
}
