//! Arbitration between the two handles.
//!
//! Only the handle being moved changes; the other one is read for its
//! bound and never pushed along.

use crate::domain::{Domain, Handle, SelectionState};

/// Applies a proposed value for `handle` to `state`.
///
/// Returns the new state, or `None` when clamping leaves the selection
/// exactly where it was (a saturated drag, or a sub-step wiggle).
pub fn resolve(
    domain: &Domain,
    state: &SelectionState,
    handle: Handle,
    proposed: f64,
) -> Option<SelectionState> {
    let next = match handle {
        Handle::Low => SelectionState {
            low: domain.clamp_low(proposed, state.high),
            high: state.high,
        },
        Handle::High => SelectionState {
            low: state.low,
            high: domain.clamp_high(proposed, state.low),
        },
    };
    (next != *state).then_some(next)
}
