//! Save-format codec: shelves serialize into the host's tagged key-value
//! tree.
//!
//! Encoding always succeeds. Decoding is permissive and forward-compatible:
//! a missing, malformed, or out-of-range slot record degrades that one slot
//! to empty instead of failing the container.

use crate::layout::SlotIndex;
use crate::slots::ShelfSlots;
use anyhow::{Context, Result};
use mdshelves_core::{BlockPos, ItemKind, ItemStack};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Block-entity type identifier written into saved shelf records.
pub const SHELF_ENTITY_ID: &str = "mdsh:shelf";

const ITEMS_KEY: &str = "Items";
const SLOT_KEY: &str = "Slot";
const ID_KEY: &str = "id";
const COUNT_KEY: &str = "Count";

/// One node of the host's tagged key-value save tree.
///
/// Compounds use a BTreeMap so encoded output is deterministically ordered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Tag {
    /// Signed byte payload (slot indices, item counts).
    Byte(i8),
    /// Signed 32-bit payload (coordinates).
    Int(i32),
    /// UTF-8 string payload (identifiers).
    String(String),
    /// List of child tags, homogeneous by convention.
    List(Vec<Tag>),
    /// String-keyed children.
    Compound(BTreeMap<String, Tag>),
}

impl Tag {
    /// Byte payload, if this is a byte tag.
    pub fn as_byte(&self) -> Option<i8> {
        match self {
            Tag::Byte(value) => Some(*value),
            _ => None,
        }
    }

    /// Int payload, if this is an int tag.
    pub fn as_int(&self) -> Option<i32> {
        match self {
            Tag::Int(value) => Some(*value),
            _ => None,
        }
    }

    /// String payload, if this is a string tag.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Tag::String(value) => Some(value),
            _ => None,
        }
    }

    /// Child tags, if this is a list tag.
    pub fn as_list(&self) -> Option<&[Tag]> {
        match self {
            Tag::List(children) => Some(children),
            _ => None,
        }
    }

    /// Named child, if this is a compound tag.
    pub fn get(&self, key: &str) -> Option<&Tag> {
        match self {
            Tag::Compound(children) => children.get(key),
            _ => None,
        }
    }
}

fn slot_records(slots: &ShelfSlots) -> Vec<Tag> {
    let mut records = Vec::new();
    for (slot, stack) in slots.iter() {
        let mut record = BTreeMap::new();
        record.insert(SLOT_KEY.to_string(), Tag::Byte(slot.index() as i8));
        record.insert(ID_KEY.to_string(), Tag::String(stack.kind.id()));
        record.insert(
            COUNT_KEY.to_string(),
            Tag::Byte(stack.count.min(i8::MAX as u8) as i8),
        );
        records.push(Tag::Compound(record));
    }
    records
}

/// Serialize the sixteen slots as a list of occupied-slot records.
pub fn encode_slots(slots: &ShelfSlots) -> Tag {
    let mut root = BTreeMap::new();
    root.insert(ITEMS_KEY.to_string(), Tag::List(slot_records(slots)));
    Tag::Compound(root)
}

/// Full container record: inventory plus type identity and position.
///
/// The identity and coordinates make the record self-describing for both
/// saving and client sync.
pub fn encode_shelf(slots: &ShelfSlots, pos: BlockPos) -> Tag {
    let mut root = BTreeMap::new();
    root.insert(ITEMS_KEY.to_string(), Tag::List(slot_records(slots)));
    root.insert(ID_KEY.to_string(), Tag::String(SHELF_ENTITY_ID.to_string()));
    root.insert("x".to_string(), Tag::Int(pos.x));
    root.insert("y".to_string(), Tag::Int(pos.y));
    root.insert("z".to_string(), Tag::Int(pos.z));
    Tag::Compound(root)
}

fn decode_record(record: &Tag) -> Option<(SlotIndex, ItemStack)> {
    let slot = record.get(SLOT_KEY)?.as_byte()?;
    let slot = SlotIndex::new(u8::try_from(slot).ok()?)?;
    let id = record.get(ID_KEY)?.as_str()?;
    let kind = ItemKind::from_id(id).ok()?;
    let count = record.get(COUNT_KEY)?.as_byte()?;
    let count = u8::try_from(count).ok().filter(|count| *count > 0)?;
    Some((slot, ItemStack::new(kind, count)))
}

/// Rebuild slots from a container record.
///
/// Never fails: records that cannot be decoded leave their slot empty and
/// are logged, so one damaged entry cannot take the container down.
pub fn decode_slots(tag: &Tag) -> ShelfSlots {
    let mut slots = ShelfSlots::new();
    let Some(records) = tag.get(ITEMS_KEY).and_then(Tag::as_list) else {
        return slots;
    };
    for record in records {
        match decode_record(record) {
            Some((slot, stack)) => slots.set(slot, Some(stack)),
            None => tracing::warn!(?record, "skipping malformed shelf slot record"),
        }
    }
    slots
}

/// Read the position metadata from a container record, if present.
pub fn decode_pos(tag: &Tag) -> Option<BlockPos> {
    Some(BlockPos::new(
        tag.get("x")?.as_int()?,
        tag.get("y")?.as_int()?,
        tag.get("z")?.as_int()?,
    ))
}

/// Encode a tag tree into bytes for the host's sync transport.
pub fn tag_to_bytes(tag: &Tag) -> Result<Vec<u8>> {
    bincode::serialize(tag).context("Failed to serialize shelf record")
}

/// Decode a tag tree from host transport bytes.
pub fn tag_from_bytes(bytes: &[u8]) -> Result<Tag> {
    bincode::deserialize(bytes).context("Failed to deserialize shelf record")
}
