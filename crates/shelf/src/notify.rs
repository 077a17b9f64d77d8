//! Mark-dirty orchestration: reconcile, then fan the result out to the
//! host.
//!
//! This is the only place the component touches the outside world. The
//! derivation itself stays a pure function of slot contents, so everything
//! upstream of [`WorldPublisher`] is unit-testable without a host.

use crate::reconcile::{reconcile, DerivedState};
use crate::slots::ShelfSlots;
use mdshelves_core::{BlockPos, ItemStack};

/// Host-side effects a shelf mutation fans out to.
///
/// Implemented by the embedding engine; the shelf never mutates the world
/// directly.
pub trait WorldPublisher {
    /// Apply the new derived state to the visible block representation.
    fn apply_derived_state(&mut self, pos: BlockPos, state: &DerivedState);

    /// Materialize an ejected stack as a world object. The shelf passes its
    /// own position; hosts conventionally spawn into the space above it.
    fn spawn_ejected_item(&mut self, origin: BlockPos, stack: ItemStack);

    /// Wake neighboring logic that observes this block.
    fn notify_dependents(&mut self, pos: BlockPos);

    /// Queue client-visible synchronization for this position.
    fn schedule_sync(&mut self, pos: BlockPos);
}

/// Recompute derived state and publish it through the host.
///
/// Safe to call redundantly: with unchanged slots the second call publishes
/// an identical state and spawns nothing.
pub fn mark_dirty(
    slots: &mut ShelfSlots,
    pos: BlockPos,
    publisher: &mut dyn WorldPublisher,
) -> DerivedState {
    let (state, ejections) = reconcile(slots);
    for ejection in ejections {
        tracing::warn!(
            quadrant = ?ejection.quadrant,
            %pos,
            stack = ?ejection.stack,
            "shelf quadrant holds both books and a generic item; ejecting the generic stack"
        );
        publisher.spawn_ejected_item(pos, ejection.stack);
    }
    publisher.apply_derived_state(pos, &state);
    publisher.notify_dependents(pos);
    publisher.schedule_sync(pos);
    state
}
