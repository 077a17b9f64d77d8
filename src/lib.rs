//! mdshelves: spatially-partitioned shelf containers with derived block
//! state for voxel hosts.
//!
//! The root crate re-exports the public surface of the workspace members:
//! [`mdshelves_core`] primitives and the [`mdshelves_shelf`] component.

pub use mdshelves_core::{
    BlockPos, BookKind, ItemKind, ItemStack, RegistryKey, RegistryKeyError, DEFAULT_NAMESPACE,
    REDSTONE_BOOK_MAX_COUNT,
};
pub use mdshelves_shelf::*;
