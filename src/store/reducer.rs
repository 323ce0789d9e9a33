//! Reducer trait for feature slices.

use std::sync::Arc;

use super::action::SliceAction;
use super::slice::SliceState;

/// Reducer transforms a slice based on actions.
///
/// The reducer is the only place where state transitions happen. It must be
/// a pure function: no I/O, no dispatch, no clocks.
///
/// Slices travel behind `Arc` so that an arm that does not change anything
/// can hand back the input pointer unchanged. Callers then detect "nothing
/// happened" with `Arc::ptr_eq` instead of a structural comparison.
pub trait Reducer {
    /// The slice type this reducer operates on.
    type State: SliceState;

    /// The action type this reducer handles.
    type Action: SliceAction;

    /// Process an action and return the new slice.
    ///
    /// Returns the input `Arc` itself when the action implies no change.
    fn reduce(state: Arc<Self::State>, action: &Self::Action) -> Arc<Self::State>;
}
