//! Item system - books, generic items, and the stacks shelves store.
//!
//! Shelves distinguish book-like items, which occupy the twelve book
//! positions on the shelf face, from generic items, which occupy one
//! display slot per quadrant.

use crate::registry::{RegistryKey, RegistryKeyError, DEFAULT_NAMESPACE};
use serde::{Deserialize, Serialize};

/// Largest stack a redstone book slot accepts; its count doubles as the
/// emitted signal magnitude, so it is capped at the signal ceiling.
pub const REDSTONE_BOOK_MAX_COUNT: u8 = 15;

/// Book-like item sub-types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BookKind {
    /// An ordinary book.
    Plain,
    /// A book and quill.
    Writable,
    /// An authored book.
    Written,
    /// A book carrying an enchantment.
    Enchanted,
    /// The signal-emitting book; stack count is the signal magnitude.
    Redstone,
}

impl BookKind {
    /// Every book kind, in registration order.
    pub const ALL: [BookKind; 5] = [
        BookKind::Plain,
        BookKind::Writable,
        BookKind::Written,
        BookKind::Enchanted,
        BookKind::Redstone,
    ];

    /// Registry path under [`DEFAULT_NAMESPACE`].
    pub fn registry_path(self) -> &'static str {
        match self {
            BookKind::Plain => "book",
            BookKind::Writable => "writable_book",
            BookKind::Written => "written_book",
            BookKind::Enchanted => "enchanted_book",
            BookKind::Redstone => "redstone_book",
        }
    }

    /// Inverse of [`BookKind::registry_path`].
    pub fn from_registry_path(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.registry_path() == path)
    }
}

/// Item type identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemKind {
    /// A book-like item; allowed only in book positions.
    Book(BookKind),
    /// Any other host item, named by its registry key; allowed only in
    /// the per-quadrant generic display slot.
    Generic(RegistryKey),
}

impl ItemKind {
    /// Stable identifier string written to save data.
    pub fn id(&self) -> String {
        match self {
            ItemKind::Book(kind) => format!("{}:{}", DEFAULT_NAMESPACE, kind.registry_path()),
            ItemKind::Generic(key) => key.to_string(),
        }
    }

    /// Classify a registry key as a book kind or a generic item.
    pub fn from_key(key: RegistryKey) -> Self {
        if key.namespace() == DEFAULT_NAMESPACE {
            if let Some(kind) = BookKind::from_registry_path(key.path()) {
                return ItemKind::Book(kind);
            }
        }
        ItemKind::Generic(key)
    }

    /// Parse an identifier string from save data.
    pub fn from_id(id: &str) -> Result<Self, RegistryKeyError> {
        Ok(Self::from_key(RegistryKey::parse(id)?))
    }

    /// Whether this item belongs in a book position.
    pub fn is_book(&self) -> bool {
        matches!(self, ItemKind::Book(_))
    }

    /// Whether this item contributes to the shelf's signal output.
    pub fn is_redstone_book(&self) -> bool {
        matches!(self, ItemKind::Book(BookKind::Redstone))
    }
}

/// An item stack in a shelf slot. Empty slots are `None` in the store;
/// a stored stack always has `count >= 1`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemStack {
    /// Type of item.
    pub kind: ItemKind,
    /// Quantity in stack.
    pub count: u8,
}

impl ItemStack {
    /// Create a new item stack.
    pub fn new(kind: ItemKind, count: u8) -> Self {
        Self { kind, count }
    }

    /// Maximum stack size for this item type.
    pub fn max_stack_size(&self) -> u8 {
        match &self.kind {
            ItemKind::Book(BookKind::Redstone) => REDSTONE_BOOK_MAX_COUNT,
            ItemKind::Book(BookKind::Enchanted) => 1,
            ItemKind::Book(BookKind::Writable) | ItemKind::Book(BookKind::Written) => 16,
            ItemKind::Book(BookKind::Plain) | ItemKind::Generic(_) => 64,
        }
    }

    /// Signal magnitude this stack emits: the stack count for redstone
    /// books (capped at the signal ceiling), 0 for everything else.
    pub fn redstone_signal(&self) -> u8 {
        if self.kind.is_redstone_book() {
            self.count.min(REDSTONE_BOOK_MAX_COUNT)
        } else {
            0
        }
    }
}
