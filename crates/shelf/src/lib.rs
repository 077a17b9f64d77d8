//! Shelf container component for voxel hosts.
//!
//! A shelf is a sixteen-slot container split into four quadrants, each
//! holding three books and one generic display item. Slot contents
//! deterministically derive the rendered block state and the emitted
//! signal strength; mutation fans out to the host through a narrow
//! publisher interface.

mod codec;
mod layout;
mod notify;
mod reconcile;
mod shelf;
mod slots;
mod variant;

pub use codec::*;
pub use layout::*;
pub use notify::*;
pub use reconcile::*;
pub use shelf::*;
pub use slots::*;
pub use variant::*;
