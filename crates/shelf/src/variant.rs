//! Cosmetic shelf variants.
//!
//! Every variant shares the one shelf implementation; a variant carries
//! display identity only, never behavior.

use serde::{Deserialize, Serialize};

/// Wood finish of a placed shelf.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShelfVariant {
    /// Oak finish.
    Oak,
    /// Birch finish.
    Birch,
    /// Spruce finish.
    Spruce,
    /// Jungle finish.
    Jungle,
    /// Acacia finish.
    Acacia,
    /// Dark oak finish.
    DarkOak,
    /// Crimson finish.
    Crimson,
    /// Warped finish.
    Warped,
}

impl ShelfVariant {
    /// Every variant, in registration order.
    pub const ALL: [ShelfVariant; 8] = [
        ShelfVariant::Oak,
        ShelfVariant::Birch,
        ShelfVariant::Spruce,
        ShelfVariant::Jungle,
        ShelfVariant::Acacia,
        ShelfVariant::DarkOak,
        ShelfVariant::Crimson,
        ShelfVariant::Warped,
    ];

    /// Registry path of the variant's block.
    pub fn registry_path(self) -> &'static str {
        match self {
            ShelfVariant::Oak => "oak_shelf",
            ShelfVariant::Birch => "birch_shelf",
            ShelfVariant::Spruce => "spruce_shelf",
            ShelfVariant::Jungle => "jungle_shelf",
            ShelfVariant::Acacia => "acacia_shelf",
            ShelfVariant::DarkOak => "dark_oak_shelf",
            ShelfVariant::Crimson => "crimson_shelf",
            ShelfVariant::Warped => "warped_shelf",
        }
    }

    /// Inverse of [`ShelfVariant::registry_path`].
    pub fn from_registry_path(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.registry_path() == path)
    }

    /// Human-readable name for tooltips and creative listings.
    pub fn display_name(self) -> &'static str {
        match self {
            ShelfVariant::Oak => "Oak Shelf",
            ShelfVariant::Birch => "Birch Shelf",
            ShelfVariant::Spruce => "Spruce Shelf",
            ShelfVariant::Jungle => "Jungle Shelf",
            ShelfVariant::Acacia => "Acacia Shelf",
            ShelfVariant::DarkOak => "Dark Oak Shelf",
            ShelfVariant::Crimson => "Crimson Shelf",
            ShelfVariant::Warped => "Warped Shelf",
        }
    }

    /// Mining/physics properties of the variant's block.
    pub fn properties(self) -> ShelfProperties {
        ShelfProperties {
            hardness: 1.5,
            blast_resistance: 1.5,
            // Fungus-wood shelves don't burn.
            flammable: !matches!(self, ShelfVariant::Crimson | ShelfVariant::Warped),
        }
    }
}

/// Properties of a shelf block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShelfProperties {
    /// How long it takes to mine (base time in seconds).
    pub hardness: f32,
    /// Resistance to explosions.
    pub blast_resistance: f32,
    /// Whether fire spreads to this block.
    pub flammable: bool,
}
