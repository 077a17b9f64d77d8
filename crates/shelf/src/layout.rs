//! Static slot layout: four quadrants, each with three book positions and
//! one generic display slot.
//!
//! The maps here form a bijection between the sixteen (quadrant, role)
//! pairs and the sixteen slot indices. Book slots occupy indices 0..12 in
//! quadrant-major order; generic slots occupy 12..16 in the same order.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Total slot count per shelf.
pub const SLOT_COUNT: usize = 16;

/// Number of book positions across the shelf face.
pub const BOOK_POSITION_COUNT: usize = 12;

/// Book positions per quadrant.
pub const BOOKS_PER_QUADRANT: usize = 3;

/// Index of a shelf slot, always in `[0, SLOT_COUNT)`.
///
/// Constructed from the layout maps below, or checked via [`SlotIndex::new`]
/// for indices read from external data. An out-of-range slot is therefore
/// unrepresentable, not a runtime error.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct SlotIndex(pub(crate) u8);

impl SlotIndex {
    /// Checked constructor for indices from untrusted sources.
    pub fn new(index: u8) -> Option<Self> {
        (index < SLOT_COUNT as u8).then_some(Self(index))
    }

    /// Position in the backing array.
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// All sixteen slots in storage order.
    pub fn all() -> impl Iterator<Item = SlotIndex> {
        (0..SLOT_COUNT as u8).map(SlotIndex)
    }
}

impl fmt::Display for SlotIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One quarter of the shelf face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Quadrant {
    /// Upper left quarter, viewed from the front.
    TopLeft,
    /// Upper right quarter.
    TopRight,
    /// Lower left quarter.
    BottomLeft,
    /// Lower right quarter.
    BottomRight,
}

impl Quadrant {
    /// Every quadrant, in slot-layout order.
    pub const ALL: [Quadrant; 4] = [
        Quadrant::TopLeft,
        Quadrant::TopRight,
        Quadrant::BottomLeft,
        Quadrant::BottomRight,
    ];

    fn ordinal(self) -> usize {
        match self {
            Quadrant::TopLeft => 0,
            Quadrant::TopRight => 1,
            Quadrant::BottomLeft => 2,
            Quadrant::BottomRight => 3,
        }
    }

    /// The quadrant's single generic-item slot.
    pub fn generic_slot(self) -> SlotIndex {
        SlotIndex((BOOK_POSITION_COUNT + self.ordinal()) as u8)
    }

    /// The quadrant's three book positions, left to right.
    pub fn book_positions(self) -> [BookPosition; BOOKS_PER_QUADRANT] {
        BookColumn::ALL.map(|column| BookPosition {
            quadrant: self,
            column,
        })
    }
}

/// Horizontal position of a book within its quadrant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BookColumn {
    /// Leftmost book slot of the quadrant.
    Left,
    /// Middle book slot.
    Center,
    /// Rightmost book slot.
    Right,
}

impl BookColumn {
    /// Every column, left to right.
    pub const ALL: [BookColumn; BOOKS_PER_QUADRANT] =
        [BookColumn::Left, BookColumn::Center, BookColumn::Right];

    fn ordinal(self) -> usize {
        match self {
            BookColumn::Left => 0,
            BookColumn::Center => 1,
            BookColumn::Right => 2,
        }
    }
}

/// A single book position on the shelf face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BookPosition {
    /// Owning quadrant.
    pub quadrant: Quadrant,
    /// Column within the quadrant.
    pub column: BookColumn,
}

impl BookPosition {
    /// Every book position, in state-bit order.
    pub const ALL: [BookPosition; BOOK_POSITION_COUNT] = [
        BookPosition::at(Quadrant::TopLeft, BookColumn::Left),
        BookPosition::at(Quadrant::TopLeft, BookColumn::Center),
        BookPosition::at(Quadrant::TopLeft, BookColumn::Right),
        BookPosition::at(Quadrant::TopRight, BookColumn::Left),
        BookPosition::at(Quadrant::TopRight, BookColumn::Center),
        BookPosition::at(Quadrant::TopRight, BookColumn::Right),
        BookPosition::at(Quadrant::BottomLeft, BookColumn::Left),
        BookPosition::at(Quadrant::BottomLeft, BookColumn::Center),
        BookPosition::at(Quadrant::BottomLeft, BookColumn::Right),
        BookPosition::at(Quadrant::BottomRight, BookColumn::Left),
        BookPosition::at(Quadrant::BottomRight, BookColumn::Center),
        BookPosition::at(Quadrant::BottomRight, BookColumn::Right),
    ];

    /// Construct a position from its coordinates.
    pub const fn at(quadrant: Quadrant, column: BookColumn) -> Self {
        Self { quadrant, column }
    }

    /// Stable bit index in the packed block state and occupancy array.
    pub fn state_index(self) -> usize {
        self.quadrant.ordinal() * BOOKS_PER_QUADRANT + self.column.ordinal()
    }

    /// The slot backing this position.
    pub fn slot(self) -> SlotIndex {
        SlotIndex(self.state_index() as u8)
    }
}

/// Role a slot plays within its quadrant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotRole {
    /// Holds a book at the given column.
    Book(BookColumn),
    /// Holds the quadrant's generic display item.
    Generic,
}

/// Inverse of the layout maps: which quadrant and role owns a slot.
pub fn role_of(slot: SlotIndex) -> (Quadrant, SlotRole) {
    let index = slot.index();
    if index < BOOK_POSITION_COUNT {
        let quadrant = Quadrant::ALL[index / BOOKS_PER_QUADRANT];
        let column = BookColumn::ALL[index % BOOKS_PER_QUADRANT];
        (quadrant, SlotRole::Book(column))
    } else {
        (Quadrant::ALL[index - BOOK_POSITION_COUNT], SlotRole::Generic)
    }
}
